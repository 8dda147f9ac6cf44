//! Value objects shared across the domain

mod roles;
mod status;

pub use roles::{AccountRole, AdvisorRole, ExaminerSlot};
pub use status::{DefenseStatus, ThesisStatus};
