//! Entity to model mappers
//!
//! This module provides conversions between domain entities (thesis-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `parse_*`/`*_to_str`: enum-as-text column conversions

mod account;
mod approval;
mod defense;
mod news;
mod thesis;

pub use approval::parse_advisor_role;
pub use defense::parse_defense_status;
pub use thesis::parse_thesis_status;
