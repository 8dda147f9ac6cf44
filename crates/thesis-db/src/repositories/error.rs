//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use thesis_core::error::DomainError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "student not found" error
pub fn student_not_found(id: Uuid) -> DomainError {
    DomainError::StudentNotFound(id)
}

/// Create a "faculty not found" error
pub fn faculty_not_found(id: Uuid) -> DomainError {
    DomainError::FacultyNotFound(id)
}

/// Create an "admin not found" error
pub fn admin_not_found(id: Uuid) -> DomainError {
    DomainError::AdminNotFound(id)
}

/// Create a "defense not found" error
pub fn defense_not_found(id: Uuid) -> DomainError {
    DomainError::DefenseNotFound(id)
}

/// Create a "news not found" error
pub fn news_not_found(id: Uuid) -> DomainError {
    DomainError::NewsNotFound(id)
}
