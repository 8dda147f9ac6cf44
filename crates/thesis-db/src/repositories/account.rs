//! PostgreSQL implementation of AccountRepository
//!
//! The three account classes live in separate tables; login and the
//! cross-class email uniqueness check search all of them.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use thesis_core::entities::{Account, Administrator, FacultyMember, Student};
use thesis_core::error::DomainError;
use thesis_core::traits::{AccountRepository, ListQuery, RepoResult};

use crate::models::{AdminModel, FacultyModel, StudentModel};

use super::error::{
    admin_not_found, faculty_not_found, map_db_error, map_unique_violation, student_not_found,
};

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn like_pattern(query: &ListQuery) -> Option<String> {
    query.search.as_ref().map(|s| format!("%{s}%"))
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn find_for_login(&self, email: &str) -> RepoResult<Option<(Account, String)>> {
        // Check the three tables in a fixed order; emails are unique across
        // all of them, so at most one lookup can hit.
        let admin = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, name, email, password_hash, created_at, updated_at, deleted_at
            FROM admins
            WHERE email = $1 AND deleted_at IS NULL
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        if let Some(model) = admin {
            let hash = model.password_hash.clone();
            return Ok(Some((Account::Administrator(model.into()), hash)));
        }

        let faculty = sqlx::query_as::<_, FacultyModel>(
            r"
            SELECT id, nidn, name, email, password_hash, created_at, updated_at, deleted_at
            FROM faculty
            WHERE email = $1 AND deleted_at IS NULL
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        if let Some(model) = faculty {
            let hash = model.password_hash.clone();
            return Ok(Some((Account::FacultyMember(model.into()), hash)));
        }

        let student = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, nim, name, email, password_hash, thesis_clearance,
                   created_at, updated_at, deleted_at
            FROM students
            WHERE email = $1 AND deleted_at IS NULL
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(student.map(|model| {
            let hash = model.password_hash.clone();
            (Account::Student(model.into()), hash)
        }))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1 AND deleted_at IS NULL)
                OR EXISTS(SELECT 1 FROM faculty WHERE email = $1 AND deleted_at IS NULL)
                OR EXISTS(SELECT 1 FROM students WHERE email = $1 AND deleted_at IS NULL)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    // -- students --

    #[instrument(skip(self))]
    async fn find_student(&self, id: Uuid) -> RepoResult<Option<Student>> {
        let result = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, nim, name, email, password_hash, thesis_clearance,
                   created_at, updated_at, deleted_at
            FROM students
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Student::from))
    }

    #[instrument(skip(self))]
    async fn find_student_by_nim(&self, nim: &str) -> RepoResult<Option<Student>> {
        let result = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, nim, name, email, password_hash, thesis_clearance,
                   created_at, updated_at, deleted_at
            FROM students
            WHERE nim = $1 AND deleted_at IS NULL
            ",
        )
        .bind(nim)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Student::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create_student(&self, student: &Student, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO students (id, nim, name, email, password_hash, thesis_clearance, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(student.id)
        .bind(&student.nim)
        .bind(&student.name)
        .bind(&student.email)
        .bind(password_hash)
        .bind(student.thesis_clearance)
        .bind(student.created_at)
        .bind(student.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::NimAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn update_student(
        &self,
        student: &Student,
        password_hash: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE students
            SET nim = $2, name = $3, email = $4, thesis_clearance = $5,
                password_hash = COALESCE($6, password_hash), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(student.id)
        .bind(&student.nim)
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.thesis_clearance)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::NimAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(student_not_found(student.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_student(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE students
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(student_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn hard_delete_student(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(student_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_students(&self, query: &ListQuery) -> RepoResult<(Vec<Student>, i64)> {
        let pattern = like_pattern(query);

        let rows = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, nim, name, email, password_hash, thesis_clearance,
                   created_at, updated_at, deleted_at
            FROM students
            WHERE ($1 OR deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR name ILIKE $2 OR email ILIKE $2 OR nim ILIKE $2)
            ORDER BY name
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(query.show_deleted)
        .bind(&pattern)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM students
            WHERE ($1 OR deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR name ILIKE $2 OR email ILIKE $2 OR nim ILIKE $2)
            ",
        )
        .bind(query.show_deleted)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(Student::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn all_students_sorted(&self) -> RepoResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, StudentModel>(
            r"
            SELECT id, nim, name, email, password_hash, thesis_clearance,
                   created_at, updated_at, deleted_at
            FROM students
            WHERE deleted_at IS NULL
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    // -- faculty --

    #[instrument(skip(self))]
    async fn find_faculty(&self, id: Uuid) -> RepoResult<Option<FacultyMember>> {
        let result = sqlx::query_as::<_, FacultyModel>(
            r"
            SELECT id, nidn, name, email, password_hash, created_at, updated_at, deleted_at
            FROM faculty
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FacultyMember::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create_faculty(&self, faculty: &FacultyMember, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO faculty (id, nidn, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(faculty.id)
        .bind(&faculty.nidn)
        .bind(&faculty.name)
        .bind(&faculty.email)
        .bind(password_hash)
        .bind(faculty.created_at)
        .bind(faculty.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::NidnAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn update_faculty(
        &self,
        faculty: &FacultyMember,
        password_hash: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE faculty
            SET nidn = $2, name = $3, email = $4,
                password_hash = COALESCE($5, password_hash), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(faculty.id)
        .bind(&faculty.nidn)
        .bind(&faculty.name)
        .bind(&faculty.email)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::NidnAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(faculty_not_found(faculty.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_faculty(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE faculty
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(faculty_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_faculty(&self, query: &ListQuery) -> RepoResult<(Vec<FacultyMember>, i64)> {
        let pattern = like_pattern(query);

        let rows = sqlx::query_as::<_, FacultyModel>(
            r"
            SELECT id, nidn, name, email, password_hash, created_at, updated_at, deleted_at
            FROM faculty
            WHERE ($1 OR deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR name ILIKE $2 OR email ILIKE $2 OR nidn ILIKE $2)
            ORDER BY name
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(query.show_deleted)
        .bind(&pattern)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM faculty
            WHERE ($1 OR deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR name ILIKE $2 OR email ILIKE $2 OR nidn ILIKE $2)
            ",
        )
        .bind(query.show_deleted)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(FacultyMember::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn all_faculty_sorted(&self) -> RepoResult<Vec<FacultyMember>> {
        let rows = sqlx::query_as::<_, FacultyModel>(
            r"
            SELECT id, nidn, name, email, password_hash, created_at, updated_at, deleted_at
            FROM faculty
            WHERE deleted_at IS NULL
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(FacultyMember::from).collect())
    }

    // -- administrators --

    #[instrument(skip(self))]
    async fn find_admin(&self, id: Uuid) -> RepoResult<Option<Administrator>> {
        let result = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, name, email, password_hash, created_at, updated_at, deleted_at
            FROM admins
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Administrator::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create_admin(&self, admin: &Administrator, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO admins (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(admin.id)
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(password_hash)
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn update_admin(
        &self,
        admin: &Administrator,
        password_hash: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE admins
            SET name = $2, email = $3,
                password_hash = COALESCE($4, password_hash), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(admin.id)
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(admin_not_found(admin.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_admin(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE admins
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(admin_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn hard_delete_admin(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(admin_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_admins(&self, query: &ListQuery) -> RepoResult<(Vec<Administrator>, i64)> {
        let pattern = like_pattern(query);

        let rows = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, name, email, password_hash, created_at, updated_at, deleted_at
            FROM admins
            WHERE ($1 OR deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR name ILIKE $2 OR email ILIKE $2)
            ORDER BY name
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(query.show_deleted)
        .bind(&pattern)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM admins
            WHERE ($1 OR deleted_at IS NULL)
              AND ($2::TEXT IS NULL OR name ILIKE $2 OR email ILIKE $2)
            ",
        )
        .bind(query.show_deleted)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((rows.into_iter().map(Administrator::from).collect(), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAccountRepository>();
    }

    #[test]
    fn test_like_pattern() {
        let query = ListQuery {
            search: Some("budi".to_string()),
            ..Default::default()
        };
        assert_eq!(like_pattern(&query), Some("%budi%".to_string()));
        assert_eq!(like_pattern(&ListQuery::default()), None);
    }
}
