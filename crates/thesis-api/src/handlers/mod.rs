//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admins;
pub mod approvals;
pub mod auth;
pub mod defenses;
pub mod faculty;
pub mod health;
pub mod news;
pub mod reports;
pub mod students;
pub mod theses;
