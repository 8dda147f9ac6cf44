//! # thesis-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;
pub mod storage;

pub use dto::{
    AccountResponse, AdminResponse, ApiResponse, ApprovalResponse, AuthResponse,
    CreateAdminRequest, CreateFacultyRequest, CreateNewsRequest, CreateStudentRequest,
    DefenseOverviewResponse, DefenseResponse, EligibilityResponse, FacultyResponse,
    HealthResponse, LoginRequest, NewsResponse, OneOrMany, PageMeta, PaginatedResponse,
    RecordApprovalRequest, SkippedStudent, StudentImportResponse, StudentResponse,
    SubmitExaminerNoteRequest, ThesisOverviewResponse, ThesisResponse, UpdateAdminRequest,
    UpdateDefenseRequest, UpdateFacultyRequest, UpdateNewsRequest, UpdateStudentRequest,
    UpdateThesisRequest,
};
pub use services::{
    AccountService, ApprovalService, AuthService, DefenseService, NewsService, ReportService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, ThesisService,
};
pub use storage::{DiskProofStore, ProofStore};
