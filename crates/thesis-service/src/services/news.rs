//! News service
//!
//! Administrator-authored announcements. Unlike accounts and theses,
//! news items are hard deleted.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use thesis_core::{DomainError, NewsItem, NewsWithAuthor};

use crate::dto::{CreateNewsRequest, NewsResponse, UpdateNewsRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::list_query;

/// News announcement service
pub struct NewsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NewsService<'a> {
    /// Create a new NewsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the author's display name for a single-item response
    async fn with_author(&self, item: NewsItem) -> ServiceResult<NewsResponse> {
        let author = self
            .ctx
            .account_repo()
            .find_admin(item.author_id)
            .await?
            .ok_or(DomainError::AdminNotFound(item.author_id))?;
        Ok(NewsResponse::from(&NewsWithAuthor {
            item,
            author_name: author.name,
        }))
    }

    /// Publish an announcement
    #[instrument(skip(self, request), fields(author_id = %author_id))]
    pub async fn create_news(
        &self,
        author_id: Uuid,
        request: CreateNewsRequest,
    ) -> ServiceResult<NewsResponse> {
        request.validate()?;

        let item = NewsItem::new(Uuid::new_v4(), author_id, request.title, request.body);
        self.ctx.news_repo().create(&item).await?;

        info!(news_id = %item.id, "News item published");
        self.with_author(item).await
    }

    /// Get an announcement by ID
    #[instrument(skip(self))]
    pub async fn get_news(&self, id: Uuid) -> ServiceResult<NewsResponse> {
        let item = self
            .ctx
            .news_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NewsNotFound(id))?;
        self.with_author(item).await
    }

    /// Update an announcement
    #[instrument(skip(self, request))]
    pub async fn update_news(
        &self,
        id: Uuid,
        request: UpdateNewsRequest,
    ) -> ServiceResult<NewsResponse> {
        request.validate()?;

        let mut item = self
            .ctx
            .news_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NewsNotFound(id))?;

        if let Some(title) = request.title {
            item.title = title;
        }
        if let Some(body) = request.body {
            item.body = body;
        }
        item.updated_at = Utc::now();

        self.ctx.news_repo().update(&item).await?;

        info!(news_id = %id, "News item updated");
        self.with_author(item).await
    }

    /// Permanently delete an announcement
    #[instrument(skip(self))]
    pub async fn delete_news(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.news_repo().delete(id).await?;
        info!(news_id = %id, "News item deleted");
        Ok(())
    }

    /// List announcements, newest first
    #[instrument(skip(self))]
    pub async fn list_news(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
    ) -> ServiceResult<(Vec<NewsResponse>, i64)> {
        let query = list_query(page, limit, search, false);
        let (items, total) = self.ctx.news_repo().list(&query).await?;
        Ok((items.iter().map(NewsResponse::from).collect(), total))
    }
}
