//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Page metadata
//! uses camelCase keys for frontend compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Paginated response with page-based pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub message: String,
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(message: impl Into<String>, data: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        Self {
            message: message.into(),
            data,
            pagination: PageMeta::new(total, page, limit),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub limit: i64,
}

impl PageMeta {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            total,
            current_page: page,
            total_pages,
            limit,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the bearer token and account summary
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AccountResponse,
}

/// Account summary shared by all three classes
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nidn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thesis_clearance: Option<bool>,
}

// ============================================================================
// Account Responses
// ============================================================================

/// Student response
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub id: Uuid,
    pub nim: String,
    pub name: String,
    pub email: String,
    pub thesis_clearance: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Faculty member response
#[derive(Debug, Clone, Serialize)]
pub struct FacultyResponse {
    pub id: Uuid,
    pub nidn: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Administrator response
#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// One rejected row of a student batch import
#[derive(Debug, Clone, Serialize)]
pub struct SkippedStudent {
    pub nim: String,
    pub email: String,
    pub reason: String,
}

/// Batch import outcome: what was created and what was skipped
#[derive(Debug, Serialize)]
pub struct StudentImportResponse {
    pub created: Vec<StudentResponse>,
    pub skipped: Vec<SkippedStudent>,
}

// ============================================================================
// Thesis Responses
// ============================================================================

/// Advisor eligibility derived from the approval ledger
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EligibilityResponse {
    pub advisor1_approved: bool,
    pub advisor2_approved: bool,
    pub eligible_for_defense: bool,
}

/// Thesis response with derived eligibility
#[derive(Debug, Clone, Serialize)]
pub struct ThesisResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub title: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_proof: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_note: Option<String>,
    pub advisor1_id: Option<Uuid>,
    pub advisor2_id: Option<Uuid>,
    pub eligibility: EligibilityResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Thesis listing row with joined names
#[derive(Debug, Clone, Serialize)]
pub struct ThesisOverviewResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub student_nim: String,
    pub title: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_proof: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_note: Option<String>,
    pub advisor1_name: Option<String>,
    pub advisor2_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Approval Responses
// ============================================================================

/// Approval ledger record response
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub faculty_id: Uuid,
    pub role: String,
    pub decision: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Defense Responses
// ============================================================================

/// Defense registration response
#[derive(Debug, Clone, Serialize)]
pub struct DefenseResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub thesis_id: Uuid,
    pub status: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub examiner1_id: Option<Uuid>,
    pub examiner2_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examiner1_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examiner2_note: Option<String>,
    /// Both examiner notes present, so the defense record is complete
    pub finalized: bool,
    pub created_at: DateTime<Utc>,
}

/// Defense listing row with joined names
#[derive(Debug, Clone, Serialize)]
pub struct DefenseOverviewResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub student_nim: String,
    pub thesis_title: String,
    pub status: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub examiner1_name: Option<String>,
    pub examiner2_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examiner1_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examiner2_note: Option<String>,
    pub finalized: bool,
}

// ============================================================================
// News Responses
// ============================================================================

/// News announcement response
#[derive(Debug, Clone, Serialize)]
pub struct NewsResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_rounds_up() {
        let meta = PageMeta::new(21, 1, 10);
        assert_eq!(meta.total_pages, 3);

        let meta = PageMeta::new(20, 2, 10);
        assert_eq!(meta.total_pages, 2);

        let meta = PageMeta::new(0, 1, 10);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_page_meta_serializes_camel_case() {
        let meta = PageMeta::new(5, 1, 10);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["total"], 5);
    }
}
