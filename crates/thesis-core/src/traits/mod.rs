//! Repository traits (ports) for the domain layer

mod repositories;

pub use repositories::{
    AccountRepository, ApprovalRepository, DefenseRepository, ListQuery, NewsRepository,
    RepoResult, ThesisRepository,
};
