//! Domain entities

mod account;
mod approval;
mod defense;
mod news;
mod thesis;

pub use account::{Account, Administrator, FacultyMember, Student};
pub use approval::ApprovalRecord;
pub use defense::{DefenseOverview, DefenseRegistration};
pub use news::{NewsItem, NewsWithAuthor};
pub use thesis::{Thesis, ThesisOverview};
