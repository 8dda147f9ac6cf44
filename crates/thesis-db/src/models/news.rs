//! News database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the news table
#[derive(Debug, Clone, FromRow)]
pub struct NewsModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// News row joined with the author's display name
#[derive(Debug, Clone, FromRow)]
pub struct NewsWithAuthorModel {
    #[sqlx(flatten)]
    pub item: NewsModel,
    pub author_name: String,
}
