//! Thesis database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the theses table
#[derive(Debug, Clone, FromRow)]
pub struct ThesisModel {
    pub id: Uuid,
    pub student_id: Uuid,
    pub title: String,
    pub status: String,
    pub payment_proof: Option<String>,
    pub payment_note: Option<String>,
    pub advisor1_id: Option<Uuid>,
    pub advisor2_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Thesis row joined with student and advisor names
#[derive(Debug, Clone, FromRow)]
pub struct ThesisOverviewModel {
    #[sqlx(flatten)]
    pub thesis: ThesisModel,
    pub student_name: String,
    pub student_nim: String,
    pub advisor1_name: Option<String>,
    pub advisor2_name: Option<String>,
}
