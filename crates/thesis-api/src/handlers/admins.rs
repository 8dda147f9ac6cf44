//! Administrator account handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use thesis_service::{
    AccountService, AdminResponse, ApiResponse, CreateAdminRequest, PaginatedResponse,
    UpdateAdminRequest,
};

use crate::extractors::{AdminUser, PageParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create an administrator account
///
/// POST /admins
pub async fn create_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateAdminRequest>,
) -> ApiResult<Created<Json<ApiResponse<AdminResponse>>>> {
    let service = AccountService::new(state.service_context());
    let response = service.create_admin(request).await?;
    Ok(Created(Json(ApiResponse::new(
        "Administrator created",
        response,
    ))))
}

/// List administrators
///
/// GET /admins
pub async fn list_admins(
    State(state): State<AppState>,
    _admin: AdminUser,
    params: PageParams,
) -> ApiResult<Json<PaginatedResponse<AdminResponse>>> {
    let service = AccountService::new(state.service_context());
    let (admins, total) = service
        .list_admins(params.page, params.limit, params.search)
        .await?;
    Ok(Json(PaginatedResponse::new(
        "Administrators retrieved",
        admins,
        total,
        params.page,
        params.limit,
    )))
}

/// Get an administrator by ID
///
/// GET /admins/{admin_id}
pub async fn get_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(admin_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<AdminResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.get_admin(admin_id).await?;
    Ok(Json(ApiResponse::new("Administrator retrieved", response)))
}

/// Update an administrator
///
/// PATCH /admins/{admin_id}
pub async fn update_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(admin_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateAdminRequest>,
) -> ApiResult<Json<ApiResponse<AdminResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.update_admin(admin_id, request).await?;
    Ok(Json(ApiResponse::new("Administrator updated", response)))
}

/// Soft delete an administrator
///
/// DELETE /admins/{admin_id}
pub async fn delete_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(admin_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = AccountService::new(state.service_context());
    service.delete_admin(admin_id).await?;
    Ok(NoContent)
}

/// Permanently delete an administrator
///
/// DELETE /admins/{admin_id}/force
pub async fn force_delete_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(admin_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = AccountService::new(state.service_context());
    service.force_delete_admin(admin_id).await?;
    Ok(NoContent)
}
