//! Account entities - the three disjoint account classes
//!
//! Role is determined by which table a record lives in; [`Account`] is the
//! tagged-variant view used wherever a single lookup path is needed
//! (login, cross-class email uniqueness).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::AccountRole;

/// Administrator account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Administrator {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Faculty member account, identified by NIDN (national lecturer number)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyMember {
    pub id: Uuid,
    pub nidn: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Student account, identified by NIM (student number)
///
/// `thesis_clearance` is an administrative input flag (may the student start
/// the thesis process at all); it is distinct from the *derived* advisor
/// eligibility computed from the approval ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: Uuid,
    pub nim: String,
    pub name: String,
    pub email: String,
    pub thesis_clearance: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Student {
    /// Check if the student is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Tagged-variant identity across the three account tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    Administrator(Administrator),
    FacultyMember(FacultyMember),
    Student(Student),
}

impl Account {
    /// The account's unique identifier
    #[must_use]
    pub fn id(&self) -> Uuid {
        match self {
            Self::Administrator(a) => a.id,
            Self::FacultyMember(f) => f.id,
            Self::Student(s) => s.id,
        }
    }

    /// The account's email address
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Administrator(a) => &a.email,
            Self::FacultyMember(f) => &f.email,
            Self::Student(s) => &s.email,
        }
    }

    /// The account's display name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Administrator(a) => &a.name,
            Self::FacultyMember(f) => &f.name,
            Self::Student(s) => &s.name,
        }
    }

    /// The class the account belongs to
    #[must_use]
    pub fn role(&self) -> AccountRole {
        match self {
            Self::Administrator(_) => AccountRole::Administrator,
            Self::FacultyMember(_) => AccountRole::Faculty,
            Self::Student(_) => AccountRole::Student,
        }
    }

    /// Whether the account is soft deleted
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        match self {
            Self::Administrator(a) => a.deleted_at.is_some(),
            Self::FacultyMember(f) => f.deleted_at.is_some(),
            Self::Student(s) => s.deleted_at.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> Student {
        let now = Utc::now();
        Student {
            id: Uuid::new_v4(),
            nim: "2019010101".to_string(),
            name: "Test Student".to_string(),
            email: "student@example.ac.id".to_string(),
            thesis_clearance: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_account_role_follows_variant() {
        let account = Account::Student(sample_student());
        assert_eq!(account.role(), AccountRole::Student);
        assert_eq!(account.email(), "student@example.ac.id");
        assert!(!account.is_deleted());
    }

    #[test]
    fn test_soft_delete_marker() {
        let mut student = sample_student();
        student.deleted_at = Some(Utc::now());
        assert!(student.is_deleted());
        assert!(Account::Student(student).is_deleted());
    }
}
