//! PostgreSQL implementation of DefenseRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use thesis_core::entities::{DefenseOverview, DefenseRegistration};
use thesis_core::error::DomainError;
use thesis_core::traits::{DefenseRepository, ListQuery, RepoResult};
use thesis_core::value_objects::DefenseStatus;

use crate::models::{DefenseModel, DefenseOverviewModel};

use super::error::{defense_not_found, map_db_error, map_unique_violation};

const OVERVIEW_SELECT: &str = r"
    SELECT d.id, d.student_id, d.thesis_id, d.status, d.scheduled_at,
           d.examiner1_id, d.examiner2_id, d.examiner1_note, d.examiner2_note,
           d.created_at, d.updated_at, d.deleted_at,
           s.name AS student_name, s.nim AS student_nim,
           t.title AS thesis_title,
           f1.name AS examiner1_name, f2.name AS examiner2_name
    FROM defenses d
    JOIN students s ON s.id = d.student_id
    JOIN theses t ON t.id = d.thesis_id
    LEFT JOIN faculty f1 ON f1.id = d.examiner1_id
    LEFT JOIN faculty f2 ON f2.id = d.examiner2_id
";

/// PostgreSQL implementation of DefenseRepository
#[derive(Clone)]
pub struct PgDefenseRepository {
    pool: PgPool,
}

impl PgDefenseRepository {
    /// Create a new PgDefenseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DefenseRepository for PgDefenseRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DefenseRegistration>> {
        let result = sqlx::query_as::<_, DefenseModel>(
            r"
            SELECT id, student_id, thesis_id, status, scheduled_at,
                   examiner1_id, examiner2_id, examiner1_note, examiner2_note,
                   created_at, updated_at, deleted_at
            FROM defenses
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DefenseRegistration::from))
    }

    #[instrument(skip(self))]
    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Option<DefenseRegistration>> {
        let result = sqlx::query_as::<_, DefenseModel>(
            r"
            SELECT id, student_id, thesis_id, status, scheduled_at,
                   examiner1_id, examiner2_id, examiner1_note, examiner2_note,
                   created_at, updated_at, deleted_at
            FROM defenses
            WHERE student_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DefenseRegistration::from))
    }

    #[instrument(skip(self))]
    async fn exists_for(&self, student_id: Uuid, thesis_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM defenses
                WHERE student_id = $1 AND thesis_id = $2 AND deleted_at IS NULL
            )
            ",
        )
        .bind(student_id)
        .bind(thesis_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, defense: &DefenseRegistration) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO defenses (id, student_id, thesis_id, status, scheduled_at,
                                  examiner1_id, examiner2_id, examiner1_note, examiner2_note,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(defense.id)
        .bind(defense.student_id)
        .bind(defense.thesis_id)
        .bind(defense.status.as_str())
        .bind(defense.scheduled_at)
        .bind(defense.examiner1_id)
        .bind(defense.examiner2_id)
        .bind(&defense.examiner1_note)
        .bind(&defense.examiner2_note)
        .bind(defense.created_at)
        .bind(defense.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateRegistration))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, defense: &DefenseRegistration) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE defenses
            SET status = $2, scheduled_at = $3,
                examiner1_id = $4, examiner2_id = $5,
                examiner1_note = $6, examiner2_note = $7,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(defense.id)
        .bind(defense.status.as_str())
        .bind(defense.scheduled_at)
        .bind(defense.examiner1_id)
        .bind(defense.examiner2_id)
        .bind(&defense.examiner1_note)
        .bind(&defense.examiner2_note)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(defense_not_found(defense.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_examiner(&self, faculty_id: Uuid) -> RepoResult<Vec<DefenseOverview>> {
        let sql = format!(
            "{OVERVIEW_SELECT}
            WHERE d.deleted_at IS NULL
              AND (d.examiner1_id = $1 OR d.examiner2_id = $1)
            ORDER BY d.scheduled_at NULLS LAST, s.name"
        );

        let rows = sqlx::query_as::<_, DefenseOverviewModel>(&sql)
            .bind(faculty_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DefenseOverview::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        query: &ListQuery,
        status: Option<DefenseStatus>,
    ) -> RepoResult<(Vec<DefenseOverview>, i64)> {
        let pattern = query.search.as_ref().map(|s| format!("%{s}%"));
        let status_str = status.map(|s| s.as_str());

        let sql = format!(
            "{OVERVIEW_SELECT}
            WHERE ($1 OR d.deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR s.name ILIKE $2 OR s.nim ILIKE $2 OR t.title ILIKE $2)
              AND ($3::TEXT IS NULL OR d.status = $3)
            ORDER BY d.created_at DESC
            LIMIT $4 OFFSET $5"
        );

        let rows = sqlx::query_as::<_, DefenseOverviewModel>(&sql)
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
            FROM defenses d
            JOIN students s ON s.id = d.student_id
            JOIN theses t ON t.id = d.thesis_id
            WHERE ($1 OR d.deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR s.name ILIKE $2 OR s.nim ILIKE $2 OR t.title ILIKE $2)
              AND ($3::TEXT IS NULL OR d.status = $3)
            ",
        )
        .bind(query.show_deleted)
        .bind(&pattern)
        .bind(status_str)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(DefenseOverview::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn all_overviews(&self) -> RepoResult<Vec<DefenseOverview>> {
        let sql = format!(
            "{OVERVIEW_SELECT}
            WHERE d.deleted_at IS NULL
            ORDER BY s.name"
        );

        let rows = sqlx::query_as::<_, DefenseOverviewModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DefenseOverview::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE defenses
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(defense_not_found(id));
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
        assert_send_sync::<PgDefenseRepository>();
    }
}
