//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Account, Administrator, ApprovalRecord, DefenseOverview, DefenseRegistration, FacultyMember,
    NewsItem, NewsWithAuthor, Student, Thesis, ThesisOverview,
};
use crate::error::DomainError;
use crate::value_objects::{AdvisorRole, DefenseStatus, ThesisStatus};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Pagination and filter options for list queries
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub show_deleted: bool,
    pub offset: i64,
    pub limit: i64,
}

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find any account by email, with its password hash, for login
    async fn find_for_login(&self, email: &str) -> RepoResult<Option<(Account, String)>>;

    /// Check if email is taken by any account class
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    // -- students --

    /// Find student by ID
    async fn find_student(&self, id: Uuid) -> RepoResult<Option<Student>>;

    /// Find student by student number
    async fn find_student_by_nim(&self, nim: &str) -> RepoResult<Option<Student>>;

    /// Create a new student account
    async fn create_student(&self, student: &Student, password_hash: &str) -> RepoResult<()>;

    /// Update a student; pass a hash to also rotate the password
    async fn update_student(
        &self,
        student: &Student,
        password_hash: Option<&str>,
    ) -> RepoResult<()>;

    /// Soft delete a student
    async fn delete_student(&self, id: Uuid) -> RepoResult<()>;

    /// Permanently remove a student row
    async fn hard_delete_student(&self, id: Uuid) -> RepoResult<()>;

    /// List students with a total count for pagination
    async fn list_students(&self, query: &ListQuery) -> RepoResult<(Vec<Student>, i64)>;

    /// All non-deleted students, sorted by name (for reports)
    async fn all_students_sorted(&self) -> RepoResult<Vec<Student>>;

    // -- faculty --

    /// Find faculty member by ID
    async fn find_faculty(&self, id: Uuid) -> RepoResult<Option<FacultyMember>>;

    /// Create a new faculty account
    async fn create_faculty(&self, faculty: &FacultyMember, password_hash: &str) -> RepoResult<()>;

    /// Update a faculty member; pass a hash to also rotate the password
    async fn update_faculty(
        &self,
        faculty: &FacultyMember,
        password_hash: Option<&str>,
    ) -> RepoResult<()>;

    /// Soft delete a faculty member
    async fn delete_faculty(&self, id: Uuid) -> RepoResult<()>;

    /// List faculty with a total count for pagination
    async fn list_faculty(&self, query: &ListQuery) -> RepoResult<(Vec<FacultyMember>, i64)>;

    /// All non-deleted faculty, sorted by name (for reports)
    async fn all_faculty_sorted(&self) -> RepoResult<Vec<FacultyMember>>;

    // -- administrators --

    /// Find administrator by ID
    async fn find_admin(&self, id: Uuid) -> RepoResult<Option<Administrator>>;

    /// Create a new administrator account
    async fn create_admin(&self, admin: &Administrator, password_hash: &str) -> RepoResult<()>;

    /// Update an administrator; pass a hash to also rotate the password
    async fn update_admin(
        &self,
        admin: &Administrator,
        password_hash: Option<&str>,
    ) -> RepoResult<()>;

    /// Soft delete an administrator
    async fn delete_admin(&self, id: Uuid) -> RepoResult<()>;

    /// Permanently remove an administrator row
    async fn hard_delete_admin(&self, id: Uuid) -> RepoResult<()>;

    /// List administrators with a total count for pagination
    async fn list_admins(&self, query: &ListQuery) -> RepoResult<(Vec<Administrator>, i64)>;
}

// ============================================================================
// Thesis Repository
// ============================================================================

#[async_trait]
pub trait ThesisRepository: Send + Sync {
    /// Find thesis by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Thesis>>;

    /// Find the (single) thesis of a student
    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Option<Thesis>>;

    /// Create a new thesis
    async fn create(&self, thesis: &Thesis) -> RepoResult<()>;

    /// Update an existing thesis
    async fn update(&self, thesis: &Thesis) -> RepoResult<()>;

    /// Theses where the given faculty member holds an advisor slot
    async fn find_by_advisor(&self, faculty_id: Uuid) -> RepoResult<Vec<ThesisOverview>>;

    /// List theses with joined names and a total count for pagination
    async fn list(
        &self,
        query: &ListQuery,
        status: Option<ThesisStatus>,
    ) -> RepoResult<(Vec<ThesisOverview>, i64)>;

    /// All non-deleted theses with joined names (for reports)
    async fn all_overviews(&self) -> RepoResult<Vec<ThesisOverview>>;

    /// Soft delete a thesis
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Approval Repository
// ============================================================================

#[async_trait]
pub trait ApprovalRepository: Send + Sync {
    /// Insert or update the decision keyed by (student, faculty, role)
    async fn upsert(&self, record: &ApprovalRecord) -> RepoResult<()>;

    /// All approval records for a student
    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Vec<ApprovalRecord>>;

    /// Find a single record by its natural key
    async fn find(
        &self,
        student_id: Uuid,
        faculty_id: Uuid,
        role: AdvisorRole,
    ) -> RepoResult<Option<ApprovalRecord>>;
}

// ============================================================================
// Defense Repository
// ============================================================================

#[async_trait]
pub trait DefenseRepository: Send + Sync {
    /// Find registration by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DefenseRegistration>>;

    /// Find the registration of a student
    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Option<DefenseRegistration>>;

    /// Check whether a registration exists for (student, thesis)
    async fn exists_for(&self, student_id: Uuid, thesis_id: Uuid) -> RepoResult<bool>;

    /// Create a new registration
    async fn create(&self, defense: &DefenseRegistration) -> RepoResult<()>;

    /// Update an existing registration
    async fn update(&self, defense: &DefenseRegistration) -> RepoResult<()>;

    /// Registrations where the given faculty member is an assigned examiner
    async fn find_by_examiner(&self, faculty_id: Uuid) -> RepoResult<Vec<DefenseOverview>>;

    /// List registrations with joined names and a total count for pagination
    async fn list(
        &self,
        query: &ListQuery,
        status: Option<DefenseStatus>,
    ) -> RepoResult<(Vec<DefenseOverview>, i64)>;

    /// All non-deleted registrations with joined names (for reports)
    async fn all_overviews(&self) -> RepoResult<Vec<DefenseOverview>>;

    /// Soft delete a registration
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// News Repository
// ============================================================================

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Find news item by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<NewsItem>>;

    /// Create a news item
    async fn create(&self, item: &NewsItem) -> RepoResult<()>;

    /// Update a news item
    async fn update(&self, item: &NewsItem) -> RepoResult<()>;

    /// Delete a news item
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// List news with author names, newest first, and a total count
    async fn list(&self, query: &ListQuery) -> RepoResult<(Vec<NewsWithAuthor>, i64)>;
}
