//! Pagination extractor
//!
//! Extracts page-based pagination and list filters from query strings.
//! Query keys are camelCase to match the response metadata.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 20;

/// Raw list query parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    /// Substring match over names and identifiers
    #[serde(default)]
    pub search: Option<String>,
    /// Status filter for thesis and defense listings
    #[serde(default)]
    pub status: Option<String>,
    /// Include soft-deleted rows (admin listings only)
    #[serde(default)]
    pub show_deleted: bool,
}

/// Validated list parameters
#[derive(Debug, Clone)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
    pub search: Option<String>,
    pub status: Option<String>,
    pub show_deleted: bool,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            search: None,
            status: None,
            show_deleted: false,
        }
    }
}

impl From<PageQuery> for PageParams {
    fn from(query: PageQuery) -> Self {
        Self {
            page: query.page.unwrap_or(1).max(1),
            limit: query.limit.unwrap_or(DEFAULT_LIMIT).max(1),
            search: query.search,
            status: query.status,
            show_deleted: query.show_deleted,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;
        Ok(PageParams::from(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = PageParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert!(!params.show_deleted);
    }

    #[test]
    fn test_page_floor() {
        let params = PageParams::from(PageQuery {
            page: Some(0),
            limit: Some(-5),
            search: None,
            status: None,
            show_deleted: true,
        });
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 1);
        assert!(params.show_deleted);
    }
}
