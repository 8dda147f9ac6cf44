//! # thesis-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! approval/eligibility rules of the thesis workflow.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod eligibility;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use eligibility::ThesisEligibility;
pub use entities::{
    Account, Administrator, ApprovalRecord, DefenseRegistration, DefenseOverview, FacultyMember,
    NewsItem, NewsWithAuthor, Student, Thesis, ThesisOverview,
};
pub use error::DomainError;
pub use traits::{
    AccountRepository, ApprovalRepository, DefenseRepository, ListQuery, NewsRepository,
    RepoResult, ThesisRepository,
};
pub use value_objects::{AccountRole, AdvisorRole, DefenseStatus, ExaminerSlot, ThesisStatus};
