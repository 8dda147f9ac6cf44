//! News announcement entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Administrator-authored announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsItem {
    /// Create a new announcement
    pub fn new(id: Uuid, author_id: Uuid, title: String, body: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            body,
            created_at: now,
            updated_at: now,
        }
    }
}

/// News item joined with the author's display name
#[derive(Debug, Clone)]
pub struct NewsWithAuthor {
    pub item: NewsItem,
    pub author_name: String,
}
