//! Defense registration handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use thesis_service::{
    ApiResponse, DefenseOverviewResponse, DefenseResponse, DefenseService, PaginatedResponse,
    SubmitExaminerNoteRequest, UpdateDefenseRequest,
};

use crate::extractors::{AdminUser, FacultyUser, PageParams, StudentUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register the calling student for the defense
///
/// POST /me/defense
pub async fn register_defense(
    State(state): State<AppState>,
    StudentUser(auth): StudentUser,
) -> ApiResult<Created<Json<ApiResponse<DefenseResponse>>>> {
    let service = DefenseService::new(state.service_context());
    let response = service.register(auth.account_id).await?;
    Ok(Created(Json(ApiResponse::new(
        "Defense registration created",
        response,
    ))))
}

/// The calling student's own registration
///
/// GET /me/defense
pub async fn my_defense(
    State(state): State<AppState>,
    StudentUser(auth): StudentUser,
) -> ApiResult<Json<ApiResponse<DefenseResponse>>> {
    let service = DefenseService::new(state.service_context());
    let response = service.my_defense(auth.account_id).await?;
    Ok(Json(ApiResponse::new(
        "Defense registration retrieved",
        response,
    )))
}

/// Registrations where the calling faculty member is an examiner
///
/// GET /me/defenses
pub async fn my_examined_defenses(
    State(state): State<AppState>,
    FacultyUser(auth): FacultyUser,
) -> ApiResult<Json<ApiResponse<Vec<DefenseOverviewResponse>>>> {
    let service = DefenseService::new(state.service_context());
    let response = service.defenses_for_examiner(auth.account_id).await?;
    Ok(Json(ApiResponse::new(
        "Examined defenses retrieved",
        response,
    )))
}

/// Submit (or rewrite) the calling examiner's note
///
/// PUT /defenses/{defense_id}/note
pub async fn submit_examiner_note(
    State(state): State<AppState>,
    FacultyUser(auth): FacultyUser,
    Path(defense_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<SubmitExaminerNoteRequest>,
) -> ApiResult<Json<ApiResponse<DefenseResponse>>> {
    let service = DefenseService::new(state.service_context());
    let response = service
        .submit_examiner_note(defense_id, auth.account_id, request)
        .await?;
    Ok(Json(ApiResponse::new("Examiner note recorded", response)))
}

/// List registrations
///
/// GET /defenses
pub async fn list_defenses(
    State(state): State<AppState>,
    _admin: AdminUser,
    params: PageParams,
) -> ApiResult<Json<PaginatedResponse<DefenseOverviewResponse>>> {
    let service = DefenseService::new(state.service_context());
    let (defenses, total) = service
        .list_defenses(
            params.page,
            params.limit,
            params.search,
            params.status,
            params.show_deleted,
        )
        .await?;
    Ok(Json(PaginatedResponse::new(
        "Defense registrations retrieved",
        defenses,
        total,
        params.page,
        params.limit,
    )))
}

/// Get a registration by ID
///
/// GET /defenses/{defense_id}
pub async fn get_defense(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(defense_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<DefenseResponse>>> {
    let service = DefenseService::new(state.service_context());
    let response = service.get_defense(defense_id).await?;
    Ok(Json(ApiResponse::new(
        "Defense registration retrieved",
        response,
    )))
}

/// Update a registration (status, schedule, examiners)
///
/// PATCH /defenses/{defense_id}
pub async fn update_defense(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(defense_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateDefenseRequest>,
) -> ApiResult<Json<ApiResponse<DefenseResponse>>> {
    let service = DefenseService::new(state.service_context());
    let response = service.update_defense(defense_id, request).await?;
    Ok(Json(ApiResponse::new(
        "Defense registration updated",
        response,
    )))
}

/// Soft delete a registration
///
/// DELETE /defenses/{defense_id}
pub async fn delete_defense(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(defense_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = DefenseService::new(state.service_context());
    service.delete_defense(defense_id).await?;
    Ok(NoContent)
}
