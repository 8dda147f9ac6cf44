//! News announcement handlers
//!
//! Reading news requires no authentication; writing is admin only.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use thesis_service::{
    ApiResponse, CreateNewsRequest, NewsResponse, NewsService, PaginatedResponse,
    UpdateNewsRequest,
};

use crate::extractors::{AdminUser, PageParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List announcements, newest first
///
/// GET /news
pub async fn list_news(
    State(state): State<AppState>,
    params: PageParams,
) -> ApiResult<Json<PaginatedResponse<NewsResponse>>> {
    let service = NewsService::new(state.service_context());
    let (news, total) = service
        .list_news(params.page, params.limit, params.search)
        .await?;
    Ok(Json(PaginatedResponse::new(
        "News retrieved",
        news,
        total,
        params.page,
        params.limit,
    )))
}

/// Get an announcement by ID
///
/// GET /news/{news_id}
pub async fn get_news(
    State(state): State<AppState>,
    Path(news_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<NewsResponse>>> {
    let service = NewsService::new(state.service_context());
    let response = service.get_news(news_id).await?;
    Ok(Json(ApiResponse::new("News retrieved", response)))
}

/// Publish an announcement
///
/// POST /news
pub async fn create_news(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    ValidatedJson(request): ValidatedJson<CreateNewsRequest>,
) -> ApiResult<Created<Json<ApiResponse<NewsResponse>>>> {
    let service = NewsService::new(state.service_context());
    let response = service.create_news(auth.account_id, request).await?;
    Ok(Created(Json(ApiResponse::new("News published", response))))
}

/// Update an announcement
///
/// PATCH /news/{news_id}
pub async fn update_news(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(news_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateNewsRequest>,
) -> ApiResult<Json<ApiResponse<NewsResponse>>> {
    let service = NewsService::new(state.service_context());
    let response = service.update_news(news_id, request).await?;
    Ok(Json(ApiResponse::new("News updated", response)))
}

/// Permanently delete an announcement
///
/// DELETE /news/{news_id}
pub async fn delete_news(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(news_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = NewsService::new(state.service_context());
    service.delete_news(news_id).await?;
    Ok(NoContent)
}
