//! Faculty account handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use thesis_service::{
    AccountService, ApiResponse, CreateFacultyRequest, FacultyResponse, PaginatedResponse,
    UpdateFacultyRequest,
};

use crate::extractors::{AdminUser, PageParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a faculty account
///
/// POST /faculty
pub async fn create_faculty(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateFacultyRequest>,
) -> ApiResult<Created<Json<ApiResponse<FacultyResponse>>>> {
    let service = AccountService::new(state.service_context());
    let response = service.create_faculty(request).await?;
    Ok(Created(Json(ApiResponse::new("Faculty created", response))))
}

/// List faculty
///
/// GET /faculty
pub async fn list_faculty(
    State(state): State<AppState>,
    _admin: AdminUser,
    params: PageParams,
) -> ApiResult<Json<PaginatedResponse<FacultyResponse>>> {
    let service = AccountService::new(state.service_context());
    let (faculty, total) = service
        .list_faculty(params.page, params.limit, params.search, params.show_deleted)
        .await?;
    Ok(Json(PaginatedResponse::new(
        "Faculty retrieved",
        faculty,
        total,
        params.page,
        params.limit,
    )))
}

/// Get a faculty member by ID
///
/// GET /faculty/{faculty_id}
pub async fn get_faculty(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(faculty_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<FacultyResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.get_faculty(faculty_id).await?;
    Ok(Json(ApiResponse::new("Faculty retrieved", response)))
}

/// Update a faculty member
///
/// PATCH /faculty/{faculty_id}
pub async fn update_faculty(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(faculty_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateFacultyRequest>,
) -> ApiResult<Json<ApiResponse<FacultyResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.update_faculty(faculty_id, request).await?;
    Ok(Json(ApiResponse::new("Faculty updated", response)))
}

/// Soft delete a faculty member
///
/// DELETE /faculty/{faculty_id}
pub async fn delete_faculty(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(faculty_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = AccountService::new(state.service_context());
    service.delete_faculty(faculty_id).await?;
    Ok(NoContent)
}
