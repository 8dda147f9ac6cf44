//! Report download handlers
//!
//! Each endpoint streams an xlsx attachment built in memory.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use thesis_service::{services::reports::XLSX_CONTENT_TYPE, ReportService};

use crate::extractors::AdminUser;
use crate::response::ApiResult;
use crate::state::AppState;

fn xlsx_attachment(filename: &str, data: Vec<u8>) -> Response {
    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    (headers, data).into_response()
}

/// Student roster report
///
/// GET /reports/students
pub async fn students_report(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Response> {
    let service = ReportService::new(state.service_context());
    let data = service.students_report().await?;
    Ok(xlsx_attachment("students.xlsx", data))
}

/// Faculty roster report
///
/// GET /reports/faculty
pub async fn faculty_report(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Response> {
    let service = ReportService::new(state.service_context());
    let data = service.faculty_report().await?;
    Ok(xlsx_attachment("faculty.xlsx", data))
}

/// Theses report
///
/// GET /reports/theses
pub async fn theses_report(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Response> {
    let service = ReportService::new(state.service_context());
    let data = service.theses_report().await?;
    Ok(xlsx_attachment("theses.xlsx", data))
}

/// Defense registrations report
///
/// GET /reports/defenses
pub async fn defenses_report(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Response> {
    let service = ReportService::new(state.service_context());
    let data = service.defenses_report().await?;
    Ok(xlsx_attachment("defenses.xlsx", data))
}
