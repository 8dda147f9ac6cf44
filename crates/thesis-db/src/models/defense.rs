//! Defense registration database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the defenses table
#[derive(Debug, Clone, FromRow)]
pub struct DefenseModel {
    pub id: Uuid,
    pub student_id: Uuid,
    pub thesis_id: Uuid,
    pub status: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub examiner1_id: Option<Uuid>,
    pub examiner2_id: Option<Uuid>,
    pub examiner1_note: Option<String>,
    pub examiner2_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Defense row joined with student, thesis, and examiner names
#[derive(Debug, Clone, FromRow)]
pub struct DefenseOverviewModel {
    #[sqlx(flatten)]
    pub defense: DefenseModel,
    pub student_name: String,
    pub student_nim: String,
    pub thesis_title: String,
    pub examiner1_name: Option<String>,
    pub examiner2_name: Option<String>,
}
