//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::DefenseStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Student not found: {0}")]
    StudentNotFound(Uuid),

    #[error("Faculty member not found: {0}")]
    FacultyNotFound(Uuid),

    #[error("Administrator not found: {0}")]
    AdminNotFound(Uuid),

    #[error("Thesis not found for student")]
    ThesisNotFound,

    #[error("Defense registration not found: {0}")]
    DefenseNotFound(Uuid),

    #[error("News item not found: {0}")]
    NewsNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        from: DefenseStatus,
        to: DefenseStatus,
    },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not an advisor of this student's thesis")]
    NotThesisAdvisor,

    #[error("Not an assigned examiner of this defense")]
    NotAssignedExaminer,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("NIM already registered")]
    NimAlreadyExists,

    #[error("NIDN already registered")]
    NidnAlreadyExists,

    #[error("Defense registration already exists for this thesis")]
    DuplicateRegistration,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Not approved by both advisors")]
    NotEligibleForDefense,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::StudentNotFound(_) => "UNKNOWN_STUDENT",
            Self::FacultyNotFound(_) => "UNKNOWN_FACULTY",
            Self::AdminNotFound(_) => "UNKNOWN_ADMIN",
            Self::ThesisNotFound => "UNKNOWN_THESIS",
            Self::DefenseNotFound(_) => "UNKNOWN_DEFENSE",
            Self::NewsNotFound(_) => "UNKNOWN_NEWS",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",

            // Authorization
            Self::NotThesisAdvisor => "NOT_THESIS_ADVISOR",
            Self::NotAssignedExaminer => "NOT_ASSIGNED_EXAMINER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::NimAlreadyExists => "NIM_ALREADY_EXISTS",
            Self::NidnAlreadyExists => "NIDN_ALREADY_EXISTS",
            Self::DuplicateRegistration => "DUPLICATE_REGISTRATION",

            // Business Rules
            Self::NotEligibleForDefense => "NOT_ELIGIBLE_FOR_DEFENSE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound(_)
                | Self::FacultyNotFound(_)
                | Self::AdminNotFound(_)
                | Self::ThesisNotFound
                | Self::DefenseNotFound(_)
                | Self::NewsNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidStatusTransition { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotThesisAdvisor | Self::NotAssignedExaminer)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::NimAlreadyExists
                | Self::NidnAlreadyExists
                | Self::DuplicateRegistration
        )
    }

    /// Check if this is a failed business precondition
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NotEligibleForDefense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::StudentNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_STUDENT");

        let err = DomainError::NotEligibleForDefense;
        assert_eq!(err.code(), "NOT_ELIGIBLE_FOR_DEFENSE");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ThesisNotFound.is_not_found());
        assert!(DomainError::DefenseNotFound(Uuid::nil()).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotThesisAdvisor.is_authorization());
        assert!(DomainError::NotAssignedExaminer.is_authorization());
        assert!(!DomainError::ThesisNotFound.is_authorization());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::DuplicateRegistration.is_conflict());
        assert!(DomainError::EmailAlreadyExists.is_conflict());
        assert!(!DomainError::NotEligibleForDefense.is_conflict());
    }

    #[test]
    fn test_precondition_is_distinct_from_conflict() {
        assert!(DomainError::NotEligibleForDefense.is_precondition());
        assert!(!DomainError::DuplicateRegistration.is_precondition());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidStatusTransition {
            from: DefenseStatus::Finished,
            to: DefenseStatus::Ongoing,
        };
        assert_eq!(err.to_string(), "Invalid status transition: finished -> ongoing");
    }
}
