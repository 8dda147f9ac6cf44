//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod account;
pub mod approval;
pub mod auth;
pub mod context;
pub mod defense;
pub mod error;
pub mod news;
pub mod reports;
pub mod thesis;

use thesis_core::ListQuery;

// Re-export all services for convenience
pub use account::AccountService;
pub use approval::ApprovalService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use defense::DefenseService;
pub use error::{ServiceError, ServiceResult};
pub use news::NewsService;
pub use reports::ReportService;
pub use thesis::ThesisService;

/// Largest page size a list endpoint will serve
pub const MAX_PAGE_SIZE: i64 = 100;

/// Translate page-based parameters into an offset query, clamping
/// out-of-range values instead of erroring.
pub(crate) fn list_query(
    page: i64,
    limit: i64,
    search: Option<String>,
    show_deleted: bool,
) -> ListQuery {
    let page = page.max(1);
    let limit = limit.clamp(1, MAX_PAGE_SIZE);
    ListQuery {
        search: search.filter(|s| !s.trim().is_empty()),
        show_deleted,
        offset: (page - 1) * limit,
        limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_clamps_page_and_limit() {
        let query = list_query(0, 500, None, false);
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, MAX_PAGE_SIZE);

        let query = list_query(3, 20, None, false);
        assert_eq!(query.offset, 40);
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn test_list_query_drops_blank_search() {
        let query = list_query(1, 10, Some("   ".into()), false);
        assert!(query.search.is_none());

        let query = list_query(1, 10, Some("budi".into()), false);
        assert_eq!(query.search.as_deref(), Some("budi"));
    }
}
