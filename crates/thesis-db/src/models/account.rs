//! Account database models - one per account table

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the admins table
#[derive(Debug, Clone, FromRow)]
pub struct AdminModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Database model for the faculty table
#[derive(Debug, Clone, FromRow)]
pub struct FacultyModel {
    pub id: Uuid,
    pub nidn: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Database model for the students table
#[derive(Debug, Clone, FromRow)]
pub struct StudentModel {
    pub id: Uuid,
    pub nim: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub thesis_clearance: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl StudentModel {
    /// Check if the student is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
