//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod approval;
mod defense;
mod news;
mod thesis;

pub use account::{AdminModel, FacultyModel, StudentModel};
pub use approval::ApprovalModel;
pub use defense::{DefenseModel, DefenseOverviewModel};
pub use news::{NewsModel, NewsWithAuthorModel};
pub use thesis::{ThesisModel, ThesisOverviewModel};
