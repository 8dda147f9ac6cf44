//! PostgreSQL implementation of NewsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use thesis_core::entities::{NewsItem, NewsWithAuthor};
use thesis_core::traits::{ListQuery, NewsRepository, RepoResult};

use crate::models::{NewsModel, NewsWithAuthorModel};

use super::error::{map_db_error, news_not_found};

/// PostgreSQL implementation of NewsRepository
#[derive(Clone)]
pub struct PgNewsRepository {
    pool: PgPool,
}

impl PgNewsRepository {
    /// Create a new PgNewsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<NewsItem>> {
        let result = sqlx::query_as::<_, NewsModel>(
            r"
            SELECT id, author_id, title, body, created_at, updated_at
            FROM news
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(NewsItem::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, item: &NewsItem) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO news (id, author_id, title, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(item.id)
        .bind(item.author_id)
        .bind(&item.title)
        .bind(&item.body)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, item: &NewsItem) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE news
            SET title = $2, body = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(item.id)
        .bind(&item.title)
        .bind(&item.body)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(news_not_found(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM news
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(news_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &ListQuery) -> RepoResult<(Vec<NewsWithAuthor>, i64)> {
        let pattern = query.search.as_ref().map(|s| format!("%{s}%"));

        let rows = sqlx::query_as::<_, NewsWithAuthorModel>(
            r"
            SELECT n.id, n.author_id, n.title, n.body, n.created_at, n.updated_at,
                   a.name AS author_name
            FROM news n
            JOIN admins a ON a.id = n.author_id
            WHERE ($1::TEXT IS NULL OR n.title ILIKE $1 OR n.body ILIKE $1)
            ORDER BY n.created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(&pattern)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM news
            WHERE ($1::TEXT IS NULL OR title ILIKE $1 OR body ILIKE $1)
            ",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(NewsWithAuthor::from).collect(), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgNewsRepository>();
    }
}
