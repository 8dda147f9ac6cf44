//! Approval ledger handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use thesis_service::{
    ApiResponse, ApprovalResponse, ApprovalService, EligibilityResponse, RecordApprovalRequest,
};

use crate::extractors::{AdminUser, FacultyUser, StudentUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Ledger plus the eligibility derived from it
#[derive(Debug, Serialize)]
pub struct ApprovalsBody {
    pub approvals: Vec<ApprovalResponse>,
    pub eligibility: EligibilityResponse,
}

/// Record (or overwrite) the calling advisor's decision
///
/// POST /approvals
pub async fn record_approval(
    State(state): State<AppState>,
    FacultyUser(auth): FacultyUser,
    ValidatedJson(request): ValidatedJson<RecordApprovalRequest>,
) -> ApiResult<Json<ApiResponse<ApprovalResponse>>> {
    let service = ApprovalService::new(state.service_context());
    let response = service.record_approval(auth.account_id, request).await?;
    Ok(Json(ApiResponse::new("Approval recorded", response)))
}

/// The calling student's own ledger and eligibility
///
/// GET /me/approvals
pub async fn my_approvals(
    State(state): State<AppState>,
    StudentUser(auth): StudentUser,
) -> ApiResult<Json<ApiResponse<ApprovalsBody>>> {
    let service = ApprovalService::new(state.service_context());
    let (approvals, eligibility) = service.approvals_for_student(auth.account_id).await?;
    Ok(Json(ApiResponse::new(
        "Approvals retrieved",
        ApprovalsBody {
            approvals,
            eligibility,
        },
    )))
}

/// A student's ledger and eligibility, for administrators
///
/// GET /students/{student_id}/approvals
pub async fn student_approvals(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(student_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<ApprovalsBody>>> {
    let service = ApprovalService::new(state.service_context());
    let (approvals, eligibility) = service.approvals_for_student(student_id).await?;
    Ok(Json(ApiResponse::new(
        "Approvals retrieved",
        ApprovalsBody {
            approvals,
            eligibility,
        },
    )))
}
