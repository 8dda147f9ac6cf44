//! Approval ledger record

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::AdvisorRole;

/// One advisor decision against a student's thesis.
///
/// At most one record exists per (student, faculty, role) triple; repeat
/// submissions overwrite decision and note rather than appending history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub faculty_id: Uuid,
    pub role: AdvisorRole,
    pub decision: bool,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApprovalRecord {
    /// Create a new approval record
    pub fn new(
        id: Uuid,
        student_id: Uuid,
        faculty_id: Uuid,
        role: AdvisorRole,
        decision: bool,
        note: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            student_id,
            faculty_id,
            role,
            decision,
            note,
            created_at: now,
            updated_at: now,
        }
    }
}
