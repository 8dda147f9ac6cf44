//! Approval ledger database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the approvals table
#[derive(Debug, Clone, FromRow)]
pub struct ApprovalModel {
    pub id: Uuid,
    pub student_id: Uuid,
    pub faculty_id: Uuid,
    pub role: String,
    pub decision: bool,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
