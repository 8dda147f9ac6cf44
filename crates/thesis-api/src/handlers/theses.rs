//! Thesis handlers
//!
//! Student-facing thesis and payment proof endpoints plus the
//! administrator's thesis management.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use thesis_service::{
    ApiResponse, EligibilityResponse, PaginatedResponse, ThesisOverviewResponse, ThesisResponse,
    ThesisService, UpdateThesisRequest,
};

use crate::extractors::{AdminUser, FacultyUser, PageParams, StudentUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Content type served for a stored proof key, from its extension
fn proof_content_type(key: &str) -> &'static str {
    match key.rsplit('.').next() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Get the calling student's thesis
///
/// GET /me/thesis
pub async fn my_thesis(
    State(state): State<AppState>,
    StudentUser(auth): StudentUser,
) -> ApiResult<Json<ApiResponse<ThesisResponse>>> {
    let service = ThesisService::new(state.service_context());
    let response = service.my_thesis(auth.account_id).await?;
    Ok(Json(ApiResponse::new("Thesis retrieved", response)))
}

/// Get the calling student's derived eligibility
///
/// GET /me/eligibility
pub async fn my_eligibility(
    State(state): State<AppState>,
    StudentUser(auth): StudentUser,
) -> ApiResult<Json<ApiResponse<EligibilityResponse>>> {
    let service = ThesisService::new(state.service_context());
    let response = service.my_eligibility(auth.account_id).await?;
    Ok(Json(ApiResponse::new("Eligibility retrieved", response)))
}

/// Upload (or replace) the payment proof; creates the thesis on first call
///
/// POST /me/thesis/payment-proof
pub async fn upload_payment_proof(
    State(state): State<AppState>,
    StudentUser(auth): StudentUser,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<ApiResponse<ThesisResponse>>> {
    let max_bytes = u64::from(state.config().storage.max_file_size_mb) * 1024 * 1024;
    if body.len() as u64 > max_bytes {
        return Err(ApiError::PayloadTooLarge);
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::invalid_query("Missing Content-Type header"))?
        .to_string();

    let service = ThesisService::new(state.service_context());
    let response = service
        .upload_payment_proof(auth.account_id, &content_type, body.to_vec())
        .await?;
    Ok(Json(ApiResponse::new("Payment proof uploaded", response)))
}

/// Download the payment proof of a thesis
///
/// GET /theses/{thesis_id}/payment-proof
pub async fn download_payment_proof(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(thesis_id): Path<Uuid>,
) -> ApiResult<Response> {
    let service = ThesisService::new(state.service_context());
    let (key, data) = service.payment_proof(thesis_id).await?;

    let headers = [
        (header::CONTENT_TYPE, proof_content_type(&key).to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{key}\""),
        ),
    ];
    Ok((headers, data).into_response())
}

/// List theses
///
/// GET /theses
pub async fn list_theses(
    State(state): State<AppState>,
    _admin: AdminUser,
    params: PageParams,
) -> ApiResult<Json<PaginatedResponse<ThesisOverviewResponse>>> {
    let service = ThesisService::new(state.service_context());
    let (theses, total) = service
        .list_theses(
            params.page,
            params.limit,
            params.search,
            params.status,
            params.show_deleted,
        )
        .await?;
    Ok(Json(PaginatedResponse::new(
        "Theses retrieved",
        theses,
        total,
        params.page,
        params.limit,
    )))
}

/// Get a thesis by ID
///
/// GET /theses/{thesis_id}
pub async fn get_thesis(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(thesis_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<ThesisResponse>>> {
    let service = ThesisService::new(state.service_context());
    let response = service.get_thesis(thesis_id).await?;
    Ok(Json(ApiResponse::new("Thesis retrieved", response)))
}

/// Update a thesis (title, status, payment note, advisors)
///
/// PATCH /theses/{thesis_id}
pub async fn update_thesis(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(thesis_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateThesisRequest>,
) -> ApiResult<Json<ApiResponse<ThesisResponse>>> {
    let service = ThesisService::new(state.service_context());
    let response = service.update_thesis(thesis_id, request).await?;
    Ok(Json(ApiResponse::new("Thesis updated", response)))
}

/// Soft delete a thesis
///
/// DELETE /theses/{thesis_id}
pub async fn delete_thesis(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(thesis_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = ThesisService::new(state.service_context());
    service.delete_thesis(thesis_id).await?;
    Ok(NoContent)
}

/// Theses where the calling faculty member holds an advisor slot
///
/// GET /me/advisees
pub async fn my_advisees(
    State(state): State<AppState>,
    FacultyUser(auth): FacultyUser,
) -> ApiResult<Json<ApiResponse<Vec<ThesisOverviewResponse>>>> {
    let service = ThesisService::new(state.service_context());
    let response = service.theses_for_advisor(auth.account_id).await?;
    Ok(Json(ApiResponse::new("Advisee theses retrieved", response)))
}
