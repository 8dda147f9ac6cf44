//! News entity <-> model mappers

use thesis_core::entities::{NewsItem, NewsWithAuthor};

use crate::models::{NewsModel, NewsWithAuthorModel};

impl From<NewsModel> for NewsItem {
    fn from(model: NewsModel) -> Self {
        NewsItem {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            body: model.body,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<NewsWithAuthorModel> for NewsWithAuthor {
    fn from(model: NewsWithAuthorModel) -> Self {
        NewsWithAuthor {
            item: NewsItem::from(model.item),
            author_name: model.author_name,
        }
    }
}
