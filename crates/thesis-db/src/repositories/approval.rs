//! PostgreSQL implementation of ApprovalRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use thesis_core::entities::ApprovalRecord;
use thesis_core::traits::{ApprovalRepository, RepoResult};
use thesis_core::value_objects::AdvisorRole;

use crate::models::ApprovalModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ApprovalRepository
#[derive(Clone)]
pub struct PgApprovalRepository {
    pool: PgPool,
}

impl PgApprovalRepository {
    /// Create a new PgApprovalRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApprovalRepository for PgApprovalRepository {
    #[instrument(skip(self))]
    async fn upsert(&self, record: &ApprovalRecord) -> RepoResult<()> {
        // Repeat submissions overwrite decision and note in place; the
        // unique constraint on the natural key makes this race-safe.
        sqlx::query(
            r"
            INSERT INTO approvals (id, student_id, faculty_id, role, decision, note, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT ON CONSTRAINT approvals_natural_key
            DO UPDATE SET decision = EXCLUDED.decision,
                          note = EXCLUDED.note,
                          updated_at = NOW()
            ",
        )
        .bind(record.id)
        .bind(record.student_id)
        .bind(record.faculty_id)
        .bind(record.role.as_str())
        .bind(record.decision)
        .bind(&record.note)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Vec<ApprovalRecord>> {
        let rows = sqlx::query_as::<_, ApprovalModel>(
            r"
            SELECT id, student_id, faculty_id, role, decision, note, created_at, updated_at
            FROM approvals
            WHERE student_id = $1
            ORDER BY role
            ",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ApprovalRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        student_id: Uuid,
        faculty_id: Uuid,
        role: AdvisorRole,
    ) -> RepoResult<Option<ApprovalRecord>> {
        let result = sqlx::query_as::<_, ApprovalModel>(
            r"
            SELECT id, student_id, faculty_id, role, decision, note, created_at, updated_at
            FROM approvals
            WHERE student_id = $1 AND faculty_id = $2 AND role = $3
            ",
        )
        .bind(student_id)
        .bind(faculty_id)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ApprovalRecord::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgApprovalRepository>();
    }
}
