//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateAdminRequest, CreateFacultyRequest, CreateNewsRequest, CreateStudentRequest,
    LoginRequest, OneOrMany, RecordApprovalRequest, SubmitExaminerNoteRequest,
    UpdateAdminRequest, UpdateDefenseRequest, UpdateFacultyRequest, UpdateNewsRequest,
    UpdateStudentRequest, UpdateThesisRequest,
};

// Re-export commonly used response types
pub use responses::{
    AccountResponse, AdminResponse, ApiResponse, ApprovalResponse, AuthResponse,
    DefenseOverviewResponse, DefenseResponse, EligibilityResponse, FacultyResponse,
    HealthResponse, NewsResponse, PageMeta, PaginatedResponse, SkippedStudent,
    StudentImportResponse, StudentResponse, ThesisOverviewResponse, ThesisResponse,
};
