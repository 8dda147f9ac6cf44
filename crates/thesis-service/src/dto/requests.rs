//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// A body that accepts either a single item or an array of items.
///
/// The student import endpoint takes one student object or a whole batch
/// with the same shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Flatten into a vector
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Unified login request for all account classes
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Account Requests
// ============================================================================

/// Create student request (also the element shape of a batch import)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 4, max = 20, message = "NIM must be 4-20 characters"))]
    pub nim: String,

    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[serde(default)]
    pub thesis_clearance: bool,
}

/// Update student request; omitted fields keep their current value
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 4, max = 20, message = "NIM must be 4-20 characters"))]
    pub nim: Option<String>,

    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,

    pub thesis_clearance: Option<bool>,
}

/// Create faculty member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFacultyRequest {
    #[validate(length(min = 4, max = 20, message = "NIDN must be 4-20 characters"))]
    pub nidn: String,

    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Update faculty member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFacultyRequest {
    #[validate(length(min = 4, max = 20, message = "NIDN must be 4-20 characters"))]
    pub nidn: Option<String>,

    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,
}

/// Create administrator request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Update administrator request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAdminRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,
}

// ============================================================================
// Thesis Requests
// ============================================================================

/// Admin thesis update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateThesisRequest {
    #[validate(length(max = 300, message = "Title must be at most 300 characters"))]
    pub title: Option<String>,

    /// Verification status: "pending", "rejected", or "accepted"
    pub status: Option<String>,

    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub payment_note: Option<String>,

    pub advisor1_id: Option<Uuid>,
    pub advisor2_id: Option<Uuid>,
}

// ============================================================================
// Approval Requests
// ============================================================================

/// Advisor approval decision; the advisor slot is derived from the thesis,
/// never taken from the request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordApprovalRequest {
    pub student_id: Uuid,

    pub decision: bool,

    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: Option<String>,
}

// ============================================================================
// Defense Requests
// ============================================================================

/// Admin defense update request (examiners, schedule, status)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDefenseRequest {
    /// Target status: "awaiting", "ongoing", "finished", or "rejected"
    pub status: Option<String>,

    pub scheduled_at: Option<DateTime<Utc>>,

    pub examiner1_id: Option<Uuid>,
    pub examiner2_id: Option<Uuid>,
}

/// Examiner note submission; the examiner slot is derived from the
/// registration, never taken from the request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitExaminerNoteRequest {
    #[validate(length(min = 1, max = 2000, message = "Note must be 1-2000 characters"))]
    pub note: String,
}

// ============================================================================
// News Requests
// ============================================================================

/// Create news request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNewsRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body must not be empty"))]
    pub body: String,
}

/// Update news request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Body must not be empty"))]
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_or_many_single() {
        let json = r#"{"nim":"19010101","name":"Budi","email":"budi@kampus.ac.id","password":"password123"}"#;
        let body: OneOrMany<CreateStudentRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(body.into_vec().len(), 1);
    }

    #[test]
    fn test_one_or_many_batch() {
        let json = r#"[
            {"nim":"19010101","name":"Budi","email":"budi@kampus.ac.id","password":"password123"},
            {"nim":"19010102","name":"Siti","email":"siti@kampus.ac.id","password":"password123"}
        ]"#;
        let body: OneOrMany<CreateStudentRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(body.into_vec().len(), 2);
    }

    #[test]
    fn test_login_request_validation() {
        let request = LoginRequest {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_student_defaults() {
        let json = r#"{"nim":"19010101","name":"Budi","email":"budi@kampus.ac.id","password":"password123"}"#;
        let request: CreateStudentRequest = serde_json::from_str(json).unwrap();
        assert!(!request.thesis_clearance);
        assert!(request.validate().is_ok());
    }
}
