//! Account management service
//!
//! Administrator-driven CRUD over the three disjoint account tables, plus
//! the batch student import. Email uniqueness is enforced across all three
//! classes so the login lookup can stop at the first match.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use thesis_core::{Administrator, DomainError, FacultyMember, Student};

use crate::dto::{
    AdminResponse, CreateAdminRequest, CreateFacultyRequest, CreateStudentRequest,
    FacultyResponse, OneOrMany, SkippedStudent, StudentImportResponse, StudentResponse,
    UpdateAdminRequest, UpdateFacultyRequest, UpdateStudentRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::list_query;

/// Account management service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reject the email if any account class already uses it
    async fn ensure_email_free(&self, email: &str) -> ServiceResult<()> {
        if self.ctx.account_repo().email_exists(email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }
        Ok(())
    }

    // === Students ===

    /// Create a single student account
    #[instrument(skip(self, request), fields(nim = %request.nim))]
    pub async fn create_student(
        &self,
        request: CreateStudentRequest,
    ) -> ServiceResult<StudentResponse> {
        request.validate()?;
        self.ensure_email_free(&request.email).await?;

        let password_hash = self.ctx.password_service().hash(&request.password)?;
        let now = Utc::now();
        let student = Student {
            id: Uuid::new_v4(),
            nim: request.nim,
            name: request.name,
            email: request.email,
            thesis_clearance: request.thesis_clearance,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.ctx
            .account_repo()
            .create_student(&student, &password_hash)
            .await?;

        info!(student_id = %student.id, "Student account created");
        Ok(StudentResponse::from(&student))
    }

    /// Import one or many students in a single call.
    ///
    /// Rows are processed independently: a duplicate NIM or email skips
    /// that row with a reason instead of failing the whole batch.
    #[instrument(skip(self, request))]
    pub async fn import_students(
        &self,
        request: OneOrMany<CreateStudentRequest>,
    ) -> ServiceResult<StudentImportResponse> {
        let mut created = Vec::new();
        let mut skipped = Vec::new();

        for row in request.into_vec() {
            let nim = row.nim.clone();
            let email = row.email.clone();
            match self.create_student(row).await {
                Ok(student) => created.push(student),
                Err(err) => {
                    warn!(nim = %nim, error = %err, "Student import row skipped");
                    skipped.push(SkippedStudent {
                        nim,
                        email,
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            created = created.len(),
            skipped = skipped.len(),
            "Student import finished"
        );
        Ok(StudentImportResponse { created, skipped })
    }

    /// Get a student by ID
    #[instrument(skip(self))]
    pub async fn get_student(&self, id: Uuid) -> ServiceResult<StudentResponse> {
        let student = self
            .ctx
            .account_repo()
            .find_student(id)
            .await?
            .ok_or(DomainError::StudentNotFound(id))?;
        Ok(StudentResponse::from(&student))
    }

    /// Update a student account
    #[instrument(skip(self, request))]
    pub async fn update_student(
        &self,
        id: Uuid,
        request: UpdateStudentRequest,
    ) -> ServiceResult<StudentResponse> {
        request.validate()?;

        let mut student = self
            .ctx
            .account_repo()
            .find_student(id)
            .await?
            .ok_or(DomainError::StudentNotFound(id))?;

        if let Some(email) = request.email {
            if email != student.email {
                self.ensure_email_free(&email).await?;
            }
            student.email = email;
        }
        if let Some(nim) = request.nim {
            student.nim = nim;
        }
        if let Some(name) = request.name {
            student.name = name;
        }
        if let Some(clearance) = request.thesis_clearance {
            student.thesis_clearance = clearance;
        }
        student.updated_at = Utc::now();

        let password_hash = match request.password {
            Some(password) => Some(self.ctx.password_service().hash(&password)?),
            None => None,
        };

        self.ctx
            .account_repo()
            .update_student(&student, password_hash.as_deref())
            .await?;

        info!(student_id = %id, "Student account updated");
        Ok(StudentResponse::from(&student))
    }

    /// Soft delete a student account
    #[instrument(skip(self))]
    pub async fn delete_student(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.account_repo().delete_student(id).await?;
        info!(student_id = %id, "Student account deleted");
        Ok(())
    }

    /// Permanently remove a student account and its workflow rows
    #[instrument(skip(self))]
    pub async fn force_delete_student(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.account_repo().hard_delete_student(id).await?;
        info!(student_id = %id, "Student account permanently removed");
        Ok(())
    }

    /// List students with pagination
    #[instrument(skip(self))]
    pub async fn list_students(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
        show_deleted: bool,
    ) -> ServiceResult<(Vec<StudentResponse>, i64)> {
        let query = list_query(page, limit, search, show_deleted);
        let (students, total) = self.ctx.account_repo().list_students(&query).await?;
        Ok((students.iter().map(StudentResponse::from).collect(), total))
    }

    // === Faculty ===

    /// Create a faculty account
    #[instrument(skip(self, request), fields(nidn = %request.nidn))]
    pub async fn create_faculty(
        &self,
        request: CreateFacultyRequest,
    ) -> ServiceResult<FacultyResponse> {
        request.validate()?;
        self.ensure_email_free(&request.email).await?;

        let password_hash = self.ctx.password_service().hash(&request.password)?;
        let now = Utc::now();
        let faculty = FacultyMember {
            id: Uuid::new_v4(),
            nidn: request.nidn,
            name: request.name,
            email: request.email,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.ctx
            .account_repo()
            .create_faculty(&faculty, &password_hash)
            .await?;

        info!(faculty_id = %faculty.id, "Faculty account created");
        Ok(FacultyResponse::from(&faculty))
    }

    /// Get a faculty member by ID
    #[instrument(skip(self))]
    pub async fn get_faculty(&self, id: Uuid) -> ServiceResult<FacultyResponse> {
        let faculty = self
            .ctx
            .account_repo()
            .find_faculty(id)
            .await?
            .ok_or(DomainError::FacultyNotFound(id))?;
        Ok(FacultyResponse::from(&faculty))
    }

    /// Update a faculty account
    #[instrument(skip(self, request))]
    pub async fn update_faculty(
        &self,
        id: Uuid,
        request: UpdateFacultyRequest,
    ) -> ServiceResult<FacultyResponse> {
        request.validate()?;

        let mut faculty = self
            .ctx
            .account_repo()
            .find_faculty(id)
            .await?
            .ok_or(DomainError::FacultyNotFound(id))?;

        if let Some(email) = request.email {
            if email != faculty.email {
                self.ensure_email_free(&email).await?;
            }
            faculty.email = email;
        }
        if let Some(nidn) = request.nidn {
            faculty.nidn = nidn;
        }
        if let Some(name) = request.name {
            faculty.name = name;
        }
        faculty.updated_at = Utc::now();

        let password_hash = match request.password {
            Some(password) => Some(self.ctx.password_service().hash(&password)?),
            None => None,
        };

        self.ctx
            .account_repo()
            .update_faculty(&faculty, password_hash.as_deref())
            .await?;

        info!(faculty_id = %id, "Faculty account updated");
        Ok(FacultyResponse::from(&faculty))
    }

    /// Soft delete a faculty account
    #[instrument(skip(self))]
    pub async fn delete_faculty(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.account_repo().delete_faculty(id).await?;
        info!(faculty_id = %id, "Faculty account deleted");
        Ok(())
    }

    /// List faculty with pagination
    #[instrument(skip(self))]
    pub async fn list_faculty(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
        show_deleted: bool,
    ) -> ServiceResult<(Vec<FacultyResponse>, i64)> {
        let query = list_query(page, limit, search, show_deleted);
        let (faculty, total) = self.ctx.account_repo().list_faculty(&query).await?;
        Ok((faculty.iter().map(FacultyResponse::from).collect(), total))
    }

    // === Administrators ===

    /// Create an administrator account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_admin(&self, request: CreateAdminRequest) -> ServiceResult<AdminResponse> {
        request.validate()?;
        self.ensure_email_free(&request.email).await?;

        let password_hash = self.ctx.password_service().hash(&request.password)?;
        let now = Utc::now();
        let admin = Administrator {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.ctx
            .account_repo()
            .create_admin(&admin, &password_hash)
            .await?;

        info!(admin_id = %admin.id, "Administrator account created");
        Ok(AdminResponse::from(&admin))
    }

    /// Get an administrator by ID
    #[instrument(skip(self))]
    pub async fn get_admin(&self, id: Uuid) -> ServiceResult<AdminResponse> {
        let admin = self
            .ctx
            .account_repo()
            .find_admin(id)
            .await?
            .ok_or(DomainError::AdminNotFound(id))?;
        Ok(AdminResponse::from(&admin))
    }

    /// Update an administrator account
    #[instrument(skip(self, request))]
    pub async fn update_admin(
        &self,
        id: Uuid,
        request: UpdateAdminRequest,
    ) -> ServiceResult<AdminResponse> {
        request.validate()?;

        let mut admin = self
            .ctx
            .account_repo()
            .find_admin(id)
            .await?
            .ok_or(DomainError::AdminNotFound(id))?;

        if let Some(email) = request.email {
            if email != admin.email {
                self.ensure_email_free(&email).await?;
            }
            admin.email = email;
        }
        if let Some(name) = request.name {
            admin.name = name;
        }
        admin.updated_at = Utc::now();

        let password_hash = match request.password {
            Some(password) => Some(self.ctx.password_service().hash(&password)?),
            None => None,
        };

        self.ctx
            .account_repo()
            .update_admin(&admin, password_hash.as_deref())
            .await?;

        info!(admin_id = %id, "Administrator account updated");
        Ok(AdminResponse::from(&admin))
    }

    /// Soft delete an administrator account
    #[instrument(skip(self))]
    pub async fn delete_admin(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.account_repo().delete_admin(id).await?;
        info!(admin_id = %id, "Administrator account deleted");
        Ok(())
    }

    /// Permanently remove an administrator account and its announcements
    #[instrument(skip(self))]
    pub async fn force_delete_admin(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.account_repo().hard_delete_admin(id).await?;
        info!(admin_id = %id, "Administrator account permanently removed");
        Ok(())
    }

    /// List administrators with pagination
    #[instrument(skip(self))]
    pub async fn list_admins(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
    ) -> ServiceResult<(Vec<AdminResponse>, i64)> {
        let query = list_query(page, limit, search, false);
        let (admins, total) = self.ctx.account_repo().list_admins(&query).await?;
        Ok((admins.iter().map(AdminResponse::from).collect(), total))
    }
}
