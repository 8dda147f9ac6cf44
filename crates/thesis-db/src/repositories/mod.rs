//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in thesis-core.
//! Each repository handles database operations for a specific domain entity.

mod account;
mod approval;
mod defense;
mod error;
mod news;
mod thesis;

pub use account::PgAccountRepository;
pub use approval::PgApprovalRepository;
pub use defense::PgDefenseRepository;
pub use news::PgNewsRepository;
pub use thesis::PgThesisRepository;
