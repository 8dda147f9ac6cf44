//! Defense registration entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{DefenseStatus, ExaminerSlot};

/// A student's registration for the oral defense.
///
/// Created once per (student, thesis) pair after both advisors approve;
/// examiners and the schedule are assigned later by an administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefenseRegistration {
    pub id: Uuid,
    pub student_id: Uuid,
    pub thesis_id: Uuid,
    pub status: DefenseStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub examiner1_id: Option<Uuid>,
    pub examiner2_id: Option<Uuid>,
    pub examiner1_note: Option<String>,
    pub examiner2_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl DefenseRegistration {
    /// Create a fresh registration awaiting examiner assignment
    pub fn new(id: Uuid, student_id: Uuid, thesis_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            student_id,
            thesis_id,
            status: DefenseStatus::Awaiting,
            scheduled_at: None,
            examiner1_id: None,
            examiner2_id: None,
            examiner1_note: None,
            examiner2_note: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Which examiner slot the given faculty member occupies, if any
    #[must_use]
    pub fn examiner_slot_of(&self, faculty_id: Uuid) -> Option<ExaminerSlot> {
        if self.examiner1_id == Some(faculty_id) {
            Some(ExaminerSlot::Examiner1)
        } else if self.examiner2_id == Some(faculty_id) {
            Some(ExaminerSlot::Examiner2)
        } else {
            None
        }
    }

    /// Check if the registration is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Defense joined with the names shown in listings and reports
#[derive(Debug, Clone)]
pub struct DefenseOverview {
    pub defense: DefenseRegistration,
    pub student_name: String,
    pub student_nim: String,
    pub thesis_title: String,
    pub examiner1_name: Option<String>,
    pub examiner2_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examiner_slot_derivation() {
        let examiner1 = Uuid::new_v4();
        let examiner2 = Uuid::new_v4();

        let mut defense = DefenseRegistration::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(defense.examiner_slot_of(examiner1), None);

        defense.examiner1_id = Some(examiner1);
        defense.examiner2_id = Some(examiner2);
        assert_eq!(defense.examiner_slot_of(examiner1), Some(ExaminerSlot::Examiner1));
        assert_eq!(defense.examiner_slot_of(examiner2), Some(ExaminerSlot::Examiner2));
        assert_eq!(defense.examiner_slot_of(Uuid::new_v4()), None);
    }

    #[test]
    fn test_new_registration_defaults() {
        let defense = DefenseRegistration::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(defense.status, DefenseStatus::Awaiting);
        assert!(defense.scheduled_at.is_none());
        assert!(defense.examiner1_id.is_none());
        assert!(defense.examiner2_id.is_none());
    }
}
