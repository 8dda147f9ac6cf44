//! Student account handlers
//!
//! Administrator CRUD over student accounts, including the batch import
//! endpoint that accepts either a single object or an array.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use thesis_service::{
    AccountService, ApiResponse, CreateStudentRequest, OneOrMany, PaginatedResponse,
    StudentImportResponse, StudentResponse, UpdateStudentRequest,
};

use crate::extractors::{AdminUser, PageParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create one student, or import many
///
/// POST /students
pub async fn create_students(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(request): Json<OneOrMany<CreateStudentRequest>>,
) -> ApiResult<Created<Json<ApiResponse<StudentImportResponse>>>> {
    let service = AccountService::new(state.service_context());
    let response = service.import_students(request).await?;
    Ok(Created(Json(ApiResponse::new("Students imported", response))))
}

/// List students
///
/// GET /students
pub async fn list_students(
    State(state): State<AppState>,
    _admin: AdminUser,
    params: PageParams,
) -> ApiResult<Json<PaginatedResponse<StudentResponse>>> {
    let service = AccountService::new(state.service_context());
    let (students, total) = service
        .list_students(params.page, params.limit, params.search, params.show_deleted)
        .await?;
    Ok(Json(PaginatedResponse::new(
        "Students retrieved",
        students,
        total,
        params.page,
        params.limit,
    )))
}

/// Get a student by ID
///
/// GET /students/{student_id}
pub async fn get_student(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(student_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<StudentResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.get_student(student_id).await?;
    Ok(Json(ApiResponse::new("Student retrieved", response)))
}

/// Update a student
///
/// PATCH /students/{student_id}
pub async fn update_student(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(student_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateStudentRequest>,
) -> ApiResult<Json<ApiResponse<StudentResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.update_student(student_id, request).await?;
    Ok(Json(ApiResponse::new("Student updated", response)))
}

/// Soft delete a student
///
/// DELETE /students/{student_id}
pub async fn delete_student(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(student_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = AccountService::new(state.service_context());
    service.delete_student(student_id).await?;
    Ok(NoContent)
}

/// Permanently delete a student
///
/// DELETE /students/{student_id}/force
pub async fn force_delete_student(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(student_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = AccountService::new(state.service_context());
    service.force_delete_student(student_id).await?;
    Ok(NoContent)
}
