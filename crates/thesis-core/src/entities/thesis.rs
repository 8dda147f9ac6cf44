//! Thesis entity - one research project record per student

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{AdvisorRole, ThesisStatus};

/// Thesis record, created on the student's first payment-proof upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thesis {
    pub id: Uuid,
    pub student_id: Uuid,
    pub title: String,
    pub status: ThesisStatus,
    /// Storage reference of the uploaded payment proof
    pub payment_proof: Option<String>,
    /// Administrative note written when the payment is reviewed
    pub payment_note: Option<String>,
    pub advisor1_id: Option<Uuid>,
    pub advisor2_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Thesis {
    /// Create a new pending thesis for a student
    pub fn new(id: Uuid, student_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            student_id,
            title,
            status: ThesisStatus::Pending,
            payment_proof: None,
            payment_note: None,
            advisor1_id: None,
            advisor2_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Which advisor slot the given faculty member occupies, if any.
    ///
    /// Drives both the advisor authorization check and the automatic role
    /// derivation when an approval is recorded.
    #[must_use]
    pub fn advisor_role_of(&self, faculty_id: Uuid) -> Option<AdvisorRole> {
        if self.advisor1_id == Some(faculty_id) {
            Some(AdvisorRole::Advisor1)
        } else if self.advisor2_id == Some(faculty_id) {
            Some(AdvisorRole::Advisor2)
        } else {
            None
        }
    }

    /// Check if the thesis is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Thesis joined with the names shown in admin listings and reports
#[derive(Debug, Clone)]
pub struct ThesisOverview {
    pub thesis: Thesis,
    pub student_name: String,
    pub student_nim: String,
    pub advisor1_name: Option<String>,
    pub advisor2_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisor_role_derivation() {
        let advisor1 = Uuid::new_v4();
        let advisor2 = Uuid::new_v4();
        let outsider = Uuid::new_v4();

        let mut thesis = Thesis::new(Uuid::new_v4(), Uuid::new_v4(), "Graph algorithms".into());
        thesis.advisor1_id = Some(advisor1);
        thesis.advisor2_id = Some(advisor2);

        assert_eq!(thesis.advisor_role_of(advisor1), Some(AdvisorRole::Advisor1));
        assert_eq!(thesis.advisor_role_of(advisor2), Some(AdvisorRole::Advisor2));
        assert_eq!(thesis.advisor_role_of(outsider), None);
    }

    #[test]
    fn test_new_thesis_defaults() {
        let thesis = Thesis::new(Uuid::new_v4(), Uuid::new_v4(), String::new());
        assert_eq!(thesis.status, ThesisStatus::Pending);
        assert!(thesis.payment_proof.is_none());
        assert!(thesis.advisor1_id.is_none());
        assert!(!thesis.is_deleted());
    }
}
