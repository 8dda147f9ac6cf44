//! PostgreSQL implementation of ThesisRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use thesis_core::entities::{Thesis, ThesisOverview};
use thesis_core::error::DomainError;
use thesis_core::traits::{ListQuery, RepoResult, ThesisRepository};
use thesis_core::value_objects::ThesisStatus;

use crate::models::{ThesisModel, ThesisOverviewModel};

use super::error::{map_db_error, map_unique_violation};

const OVERVIEW_SELECT: &str = r"
    SELECT t.id, t.student_id, t.title, t.status, t.payment_proof, t.payment_note,
           t.advisor1_id, t.advisor2_id, t.created_at, t.updated_at, t.deleted_at,
           s.name AS student_name, s.nim AS student_nim,
           f1.name AS advisor1_name, f2.name AS advisor2_name
    FROM theses t
    JOIN students s ON s.id = t.student_id
    LEFT JOIN faculty f1 ON f1.id = t.advisor1_id
    LEFT JOIN faculty f2 ON f2.id = t.advisor2_id
";

/// PostgreSQL implementation of ThesisRepository
#[derive(Clone)]
pub struct PgThesisRepository {
    pool: PgPool,
}

impl PgThesisRepository {
    /// Create a new PgThesisRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThesisRepository for PgThesisRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Thesis>> {
        let result = sqlx::query_as::<_, ThesisModel>(
            r"
            SELECT id, student_id, title, status, payment_proof, payment_note,
                   advisor1_id, advisor2_id, created_at, updated_at, deleted_at
            FROM theses
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Thesis::from))
    }

    #[instrument(skip(self))]
    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Option<Thesis>> {
        let result = sqlx::query_as::<_, ThesisModel>(
            r"
            SELECT id, student_id, title, status, payment_proof, payment_note,
                   advisor1_id, advisor2_id, created_at, updated_at, deleted_at
            FROM theses
            WHERE student_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Thesis::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, thesis: &Thesis) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO theses (id, student_id, title, status, payment_proof, payment_note,
                                advisor1_id, advisor2_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(thesis.id)
        .bind(thesis.student_id)
        .bind(&thesis.title)
        .bind(thesis.status.as_str())
        .bind(&thesis.payment_proof)
        .bind(&thesis.payment_note)
        .bind(thesis.advisor1_id)
        .bind(thesis.advisor2_id)
        .bind(thesis.created_at)
        .bind(thesis.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError("Student already has a thesis".to_string())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, thesis: &Thesis) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE theses
            SET title = $2, status = $3, payment_proof = $4, payment_note = $5,
                advisor1_id = $6, advisor2_id = $7, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(thesis.id)
        .bind(&thesis.title)
        .bind(thesis.status.as_str())
        .bind(&thesis.payment_proof)
        .bind(&thesis.payment_note)
        .bind(thesis.advisor1_id)
        .bind(thesis.advisor2_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ThesisNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_advisor(&self, faculty_id: Uuid) -> RepoResult<Vec<ThesisOverview>> {
        let sql = format!(
            "{OVERVIEW_SELECT}
            WHERE t.deleted_at IS NULL
              AND (t.advisor1_id = $1 OR t.advisor2_id = $1)
            ORDER BY s.name"
        );

        let rows = sqlx::query_as::<_, ThesisOverviewModel>(&sql)
            .bind(faculty_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ThesisOverview::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        query: &ListQuery,
        status: Option<ThesisStatus>,
    ) -> RepoResult<(Vec<ThesisOverview>, i64)> {
        let pattern = query.search.as_ref().map(|s| format!("%{s}%"));
        let status_str = status.map(|s| s.as_str());

        let sql = format!(
            "{OVERVIEW_SELECT}
            WHERE ($1 OR t.deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR t.title ILIKE $2 OR s.name ILIKE $2 OR s.nim ILIKE $2)
              AND ($3::TEXT IS NULL OR t.status = $3)
            ORDER BY t.created_at DESC
            LIMIT $4 OFFSET $5"
        );

        let rows = sqlx::query_as::<_, ThesisOverviewModel>(&sql)
            .bind(query.show_deleted)
            .bind(&pattern)
            .bind(status_str)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM theses t
            JOIN students s ON s.id = t.student_id
            WHERE ($1 OR t.deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR t.title ILIKE $2 OR s.name ILIKE $2 OR s.nim ILIKE $2)
              AND ($3::TEXT IS NULL OR t.status = $3)
            ",
        )
        .bind(query.show_deleted)
        .bind(&pattern)
        .bind(status_str)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(ThesisOverview::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn all_overviews(&self) -> RepoResult<Vec<ThesisOverview>> {
        let sql = format!(
            "{OVERVIEW_SELECT}
            WHERE t.deleted_at IS NULL
            ORDER BY s.name"
        );

        let rows = sqlx::query_as::<_, ThesisOverviewModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ThesisOverview::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE theses
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ThesisNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgThesisRepository>();
    }
}
