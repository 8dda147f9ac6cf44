//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod auth;
mod pagination;
mod validated;

pub use auth::{AdminUser, AuthUser, FacultyUser, StudentUser};
pub use pagination::{PageParams, PageQuery};
pub use validated::ValidatedJson;
