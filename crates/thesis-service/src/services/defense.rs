//! Defense service
//!
//! Registration behind the eligibility gate, administrator scheduling with
//! the status transition table, and examiner note submission.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use thesis_core::{
    DefenseRegistration, DefenseStatus, DomainError, ExaminerSlot, ThesisEligibility,
};

use crate::dto::{
    DefenseOverviewResponse, DefenseResponse, SubmitExaminerNoteRequest, UpdateDefenseRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::list_query;

/// Defense registration service
pub struct DefenseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DefenseService<'a> {
    /// Create a new DefenseService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register the student for the defense.
    ///
    /// Checks run in a fixed order so the client always sees the same
    /// failure for the same state: no thesis (404), already registered
    /// (409), then advisors not both approved (412). The partial unique
    /// index on (student, thesis) backstops the duplicate check against
    /// concurrent registrations.
    #[instrument(skip(self))]
    pub async fn register(&self, student_id: Uuid) -> ServiceResult<DefenseResponse> {
        let thesis = self
            .ctx
            .thesis_repo()
            .find_by_student(student_id)
            .await?
            .ok_or(DomainError::ThesisNotFound)?;

        if self
            .ctx
            .defense_repo()
            .exists_for(student_id, thesis.id)
            .await?
        {
            return Err(DomainError::DuplicateRegistration.into());
        }

        let records = self.ctx.approval_repo().find_by_student(student_id).await?;
        if !ThesisEligibility::from_records(&records).both_approved() {
            return Err(DomainError::NotEligibleForDefense.into());
        }

        let defense = DefenseRegistration::new(Uuid::new_v4(), student_id, thesis.id);
        self.ctx.defense_repo().create(&defense).await?;

        info!(defense_id = %defense.id, student_id = %student_id, "Defense registration created");
        Ok(DefenseResponse::from(&defense))
    }

    /// The student's own registration
    #[instrument(skip(self))]
    pub async fn my_defense(&self, student_id: Uuid) -> ServiceResult<DefenseResponse> {
        let defense = self
            .ctx
            .defense_repo()
            .find_by_student(student_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("Defense registration", student_id.to_string())
            })?;
        Ok(DefenseResponse::from(&defense))
    }

    /// Get a registration by ID
    #[instrument(skip(self))]
    pub async fn get_defense(&self, id: Uuid) -> ServiceResult<DefenseResponse> {
        let defense = self
            .ctx
            .defense_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DefenseNotFound(id))?;
        Ok(DefenseResponse::from(&defense))
    }

    /// Administrator update: status transition, schedule, and examiner
    /// assignment.
    #[instrument(skip(self, request))]
    pub async fn update_defense(
        &self,
        id: Uuid,
        request: UpdateDefenseRequest,
    ) -> ServiceResult<DefenseResponse> {
        request.validate()?;

        let mut defense = self
            .ctx
            .defense_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DefenseNotFound(id))?;

        if let Some(status) = request.status.as_deref() {
            let next = DefenseStatus::parse(status).ok_or_else(|| {
                ServiceError::validation(format!("Unknown defense status: {status}"))
            })?;
            if !defense.status.can_transition_to(next) {
                return Err(DomainError::InvalidStatusTransition {
                    from: defense.status,
                    to: next,
                }
                .into());
            }
            defense.status = next;
        }

        if let Some(scheduled_at) = request.scheduled_at {
            defense.scheduled_at = Some(scheduled_at);
        }

        if request.examiner1_id.is_some() || request.examiner2_id.is_some() {
            let examiner1 = request.examiner1_id.or(defense.examiner1_id);
            let examiner2 = request.examiner2_id.or(defense.examiner2_id);
            if examiner1.is_some() && examiner1 == examiner2 {
                return Err(ServiceError::validation(
                    "A faculty member cannot hold both examiner slots",
                ));
            }
            for examiner_id in [request.examiner1_id, request.examiner2_id]
                .into_iter()
                .flatten()
            {
                self.ctx
                    .account_repo()
                    .find_faculty(examiner_id)
                    .await?
                    .ok_or(DomainError::FacultyNotFound(examiner_id))?;
            }
            defense.examiner1_id = examiner1;
            defense.examiner2_id = examiner2;
        }

        defense.updated_at = Utc::now();
        self.ctx.defense_repo().update(&defense).await?;

        info!(defense_id = %id, status = %defense.status, "Defense registration updated");
        Ok(DefenseResponse::from(&defense))
    }

    /// An assigned examiner submits (or rewrites) their note.
    ///
    /// The slot is derived from the registration; notes are the only
    /// field an examiner may touch. Status transitions stay with the
    /// administrator.
    #[instrument(skip(self, request))]
    pub async fn submit_examiner_note(
        &self,
        defense_id: Uuid,
        faculty_id: Uuid,
        request: SubmitExaminerNoteRequest,
    ) -> ServiceResult<DefenseResponse> {
        request.validate()?;

        let mut defense = self
            .ctx
            .defense_repo()
            .find_by_id(defense_id)
            .await?
            .ok_or(DomainError::DefenseNotFound(defense_id))?;

        let slot = defense
            .examiner_slot_of(faculty_id)
            .ok_or(DomainError::NotAssignedExaminer)?;
        match slot {
            ExaminerSlot::Examiner1 => defense.examiner1_note = Some(request.note),
            ExaminerSlot::Examiner2 => defense.examiner2_note = Some(request.note),
        }

        defense.updated_at = Utc::now();
        self.ctx.defense_repo().update(&defense).await?;

        info!(defense_id = %defense_id, slot = %slot, "Examiner note recorded");
        Ok(DefenseResponse::from(&defense))
    }

    /// Registrations where the faculty member is an assigned examiner
    #[instrument(skip(self))]
    pub async fn defenses_for_examiner(
        &self,
        faculty_id: Uuid,
    ) -> ServiceResult<Vec<DefenseOverviewResponse>> {
        let overviews = self.ctx.defense_repo().find_by_examiner(faculty_id).await?;
        Ok(overviews
            .iter()
            .map(DefenseOverviewResponse::from)
            .collect())
    }

    /// List registrations for the administrator, optionally by status
    #[instrument(skip(self))]
    pub async fn list_defenses(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
        status: Option<String>,
        show_deleted: bool,
    ) -> ServiceResult<(Vec<DefenseOverviewResponse>, i64)> {
        let status = match status.as_deref() {
            Some(s) => Some(DefenseStatus::parse(s).ok_or_else(|| {
                ServiceError::validation(format!("Unknown defense status: {s}"))
            })?),
            None => None,
        };
        let query = list_query(page, limit, search, show_deleted);
        let (overviews, total) = self.ctx.defense_repo().list(&query, status).await?;
        Ok((
            overviews
                .iter()
                .map(DefenseOverviewResponse::from)
                .collect(),
            total,
        ))
    }

    /// Soft delete a registration
    #[instrument(skip(self))]
    pub async fn delete_defense(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.defense_repo().delete(id).await?;
        info!(defense_id = %id, "Defense registration deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use thesis_common::{AppError, JwtService};
    use thesis_core::entities::{
        Account, Administrator, ApprovalRecord, DefenseOverview, DefenseRegistration,
        FacultyMember, NewsItem, NewsWithAuthor, Student, Thesis, ThesisOverview,
    };
    use thesis_core::traits::{
        AccountRepository, ApprovalRepository, DefenseRepository, ListQuery, NewsRepository,
        RepoResult, ThesisRepository,
    };
    use thesis_core::value_objects::{AdvisorRole, ThesisStatus};

    use crate::services::ServiceContextBuilder;
    use crate::storage::ProofStore;

    use super::*;

    struct InMemoryThesisRepo {
        theses: Mutex<Vec<Thesis>>,
    }

    #[async_trait]
    impl ThesisRepository for InMemoryThesisRepo {
        async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Thesis>> {
            Ok(self
                .theses
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id == id && t.deleted_at.is_none())
                .cloned())
        }

        async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Option<Thesis>> {
            Ok(self
                .theses
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.student_id == student_id && t.deleted_at.is_none())
                .cloned())
        }

        async fn create(&self, thesis: &Thesis) -> RepoResult<()> {
            self.theses.lock().unwrap().push(thesis.clone());
            Ok(())
        }

        async fn update(&self, thesis: &Thesis) -> RepoResult<()> {
            let mut theses = self.theses.lock().unwrap();
            let slot = theses
                .iter_mut()
                .find(|t| t.id == thesis.id)
                .ok_or(DomainError::ThesisNotFound)?;
            *slot = thesis.clone();
            Ok(())
        }

        async fn find_by_advisor(&self, _faculty_id: Uuid) -> RepoResult<Vec<ThesisOverview>> {
            unimplemented!()
        }

        async fn list(
            &self,
            _query: &ListQuery,
            _status: Option<ThesisStatus>,
        ) -> RepoResult<(Vec<ThesisOverview>, i64)> {
            unimplemented!()
        }

        async fn all_overviews(&self) -> RepoResult<Vec<ThesisOverview>> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> RepoResult<()> {
            unimplemented!()
        }
    }

    struct InMemoryApprovalRepo {
        records: Mutex<Vec<ApprovalRecord>>,
    }

    #[async_trait]
    impl ApprovalRepository for InMemoryApprovalRepo {
        async fn upsert(&self, record: &ApprovalRecord) -> RepoResult<()> {
            let mut records = self.records.lock().unwrap();
            records.retain(|r| {
                !(r.student_id == record.student_id
                    && r.faculty_id == record.faculty_id
                    && r.role == record.role)
            });
            records.push(record.clone());
            Ok(())
        }

        async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Vec<ApprovalRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.student_id == student_id)
                .cloned()
                .collect())
        }

        async fn find(
            &self,
            student_id: Uuid,
            faculty_id: Uuid,
            role: AdvisorRole,
        ) -> RepoResult<Option<ApprovalRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| {
                    r.student_id == student_id && r.faculty_id == faculty_id && r.role == role
                })
                .cloned())
        }
    }

    /// In-memory registrations; `create` rejects a second live row per
    /// (student, thesis) like the partial unique index does.
    struct InMemoryDefenseRepo {
        defenses: Mutex<Vec<DefenseRegistration>>,
    }

    #[async_trait]
    impl DefenseRepository for InMemoryDefenseRepo {
        async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DefenseRegistration>> {
            Ok(self
                .defenses
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.id == id && d.deleted_at.is_none())
                .cloned())
        }

        async fn find_by_student(
            &self,
            student_id: Uuid,
        ) -> RepoResult<Option<DefenseRegistration>> {
            Ok(self
                .defenses
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.student_id == student_id && d.deleted_at.is_none())
                .cloned())
        }

        async fn exists_for(&self, student_id: Uuid, thesis_id: Uuid) -> RepoResult<bool> {
            Ok(self.defenses.lock().unwrap().iter().any(|d| {
                d.student_id == student_id && d.thesis_id == thesis_id && d.deleted_at.is_none()
            }))
        }

        async fn create(&self, defense: &DefenseRegistration) -> RepoResult<()> {
            let mut defenses = self.defenses.lock().unwrap();
            if defenses.iter().any(|d| {
                d.student_id == defense.student_id
                    && d.thesis_id == defense.thesis_id
                    && d.deleted_at.is_none()
            }) {
                return Err(DomainError::DuplicateRegistration);
            }
            defenses.push(defense.clone());
            Ok(())
        }

        async fn update(&self, defense: &DefenseRegistration) -> RepoResult<()> {
            let mut defenses = self.defenses.lock().unwrap();
            let slot = defenses
                .iter_mut()
                .find(|d| d.id == defense.id)
                .ok_or(DomainError::DefenseNotFound(defense.id))?;
            *slot = defense.clone();
            Ok(())
        }

        async fn find_by_examiner(&self, _faculty_id: Uuid) -> RepoResult<Vec<DefenseOverview>> {
            unimplemented!()
        }

        async fn list(
            &self,
            _query: &ListQuery,
            _status: Option<DefenseStatus>,
        ) -> RepoResult<(Vec<DefenseOverview>, i64)> {
            unimplemented!()
        }

        async fn all_overviews(&self) -> RepoResult<Vec<DefenseOverview>> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> RepoResult<()> {
            unimplemented!()
        }
    }

    struct UnusedAccountRepo;

    #[async_trait]
    impl AccountRepository for UnusedAccountRepo {
        async fn find_for_login(&self, _email: &str) -> RepoResult<Option<(Account, String)>> {
            unimplemented!()
        }
        async fn email_exists(&self, _email: &str) -> RepoResult<bool> {
            unimplemented!()
        }
        async fn find_student(&self, _id: Uuid) -> RepoResult<Option<Student>> {
            unimplemented!()
        }
        async fn find_student_by_nim(&self, _nim: &str) -> RepoResult<Option<Student>> {
            unimplemented!()
        }
        async fn create_student(&self, _student: &Student, _hash: &str) -> RepoResult<()> {
            unimplemented!()
        }
        async fn update_student(
            &self,
            _student: &Student,
            _hash: Option<&str>,
        ) -> RepoResult<()> {
            unimplemented!()
        }
        async fn delete_student(&self, _id: Uuid) -> RepoResult<()> {
            unimplemented!()
        }
        async fn hard_delete_student(&self, _id: Uuid) -> RepoResult<()> {
            unimplemented!()
        }
        async fn list_students(&self, _query: &ListQuery) -> RepoResult<(Vec<Student>, i64)> {
            unimplemented!()
        }
        async fn all_students_sorted(&self) -> RepoResult<Vec<Student>> {
            unimplemented!()
        }
        async fn find_faculty(&self, _id: Uuid) -> RepoResult<Option<FacultyMember>> {
            unimplemented!()
        }
        async fn create_faculty(&self, _faculty: &FacultyMember, _hash: &str) -> RepoResult<()> {
            unimplemented!()
        }
        async fn update_faculty(
            &self,
            _faculty: &FacultyMember,
            _hash: Option<&str>,
        ) -> RepoResult<()> {
            unimplemented!()
        }
        async fn delete_faculty(&self, _id: Uuid) -> RepoResult<()> {
            unimplemented!()
        }
        async fn list_faculty(&self, _query: &ListQuery) -> RepoResult<(Vec<FacultyMember>, i64)> {
            unimplemented!()
        }
        async fn all_faculty_sorted(&self) -> RepoResult<Vec<FacultyMember>> {
            unimplemented!()
        }
        async fn find_admin(&self, _id: Uuid) -> RepoResult<Option<Administrator>> {
            unimplemented!()
        }
        async fn create_admin(&self, _admin: &Administrator, _hash: &str) -> RepoResult<()> {
            unimplemented!()
        }
        async fn update_admin(
            &self,
            _admin: &Administrator,
            _hash: Option<&str>,
        ) -> RepoResult<()> {
            unimplemented!()
        }
        async fn delete_admin(&self, _id: Uuid) -> RepoResult<()> {
            unimplemented!()
        }
        async fn hard_delete_admin(&self, _id: Uuid) -> RepoResult<()> {
            unimplemented!()
        }
        async fn list_admins(&self, _query: &ListQuery) -> RepoResult<(Vec<Administrator>, i64)> {
            unimplemented!()
        }
    }

    struct UnusedNewsRepo;

    #[async_trait]
    impl NewsRepository for UnusedNewsRepo {
        async fn find_by_id(&self, _id: Uuid) -> RepoResult<Option<NewsItem>> {
            unimplemented!()
        }
        async fn create(&self, _item: &NewsItem) -> RepoResult<()> {
            unimplemented!()
        }
        async fn update(&self, _item: &NewsItem) -> RepoResult<()> {
            unimplemented!()
        }
        async fn delete(&self, _id: Uuid) -> RepoResult<()> {
            unimplemented!()
        }
        async fn list(&self, _query: &ListQuery) -> RepoResult<(Vec<NewsWithAuthor>, i64)> {
            unimplemented!()
        }
    }

    struct UnusedProofStore;

    #[async_trait]
    impl ProofStore for UnusedProofStore {
        async fn put(&self, _key: &str, _data: Vec<u8>) -> Result<(), AppError> {
            unimplemented!()
        }
        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, AppError> {
            unimplemented!()
        }
        async fn delete(&self, _key: &str) -> Result<(), AppError> {
            unimplemented!()
        }
    }

    fn test_context(
        theses: Vec<Thesis>,
        records: Vec<ApprovalRecord>,
        defenses: Vec<DefenseRegistration>,
    ) -> ServiceContext {
        // Lazy pool: no connection is made unless a repository uses it,
        // and the in-memory repositories never do.
        let pool = thesis_db::PgPool::connect_lazy("postgres://localhost/deferred").unwrap();
        ServiceContextBuilder::new()
            .pool(pool)
            .account_repo(Arc::new(UnusedAccountRepo))
            .thesis_repo(Arc::new(InMemoryThesisRepo {
                theses: Mutex::new(theses),
            }))
            .approval_repo(Arc::new(InMemoryApprovalRepo {
                records: Mutex::new(records),
            }))
            .defense_repo(Arc::new(InMemoryDefenseRepo {
                defenses: Mutex::new(defenses),
            }))
            .news_repo(Arc::new(UnusedNewsRepo))
            .proof_store(Arc::new(UnusedProofStore))
            .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
            .build()
            .unwrap()
    }

    fn approval(student_id: Uuid, role: AdvisorRole, decision: bool) -> ApprovalRecord {
        ApprovalRecord::new(
            Uuid::new_v4(),
            student_id,
            Uuid::new_v4(),
            role,
            decision,
            None,
        )
    }

    #[tokio::test]
    async fn test_register_without_thesis_is_not_found() {
        let student_id = Uuid::new_v4();
        // A stray registration row must not mask the missing thesis
        let stray = DefenseRegistration::new(Uuid::new_v4(), student_id, Uuid::new_v4());
        let ctx = test_context(vec![], vec![], vec![stray]);

        let err = DefenseService::new(&ctx).register(student_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::ThesisNotFound)));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_register_with_no_approvals_is_precondition_failed() {
        let student_id = Uuid::new_v4();
        let thesis = Thesis::new(Uuid::new_v4(), student_id, "Sistem informasi".to_string());
        let ctx = test_context(vec![thesis], vec![], vec![]);

        let err = DefenseService::new(&ctx).register(student_id).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::NotEligibleForDefense)
        ));
        assert_eq!(err.status_code(), 412);
    }

    #[tokio::test]
    async fn test_register_with_one_approval_is_precondition_failed() {
        let student_id = Uuid::new_v4();
        let thesis = Thesis::new(Uuid::new_v4(), student_id, "Sistem informasi".to_string());
        let records = vec![approval(student_id, AdvisorRole::Advisor1, true)];
        let ctx = test_context(vec![thesis], records, vec![]);

        let err = DefenseService::new(&ctx).register(student_id).await.unwrap_err();
        assert_eq!(err.status_code(), 412);
    }

    #[tokio::test]
    async fn test_register_with_negative_second_decision_is_precondition_failed() {
        let student_id = Uuid::new_v4();
        let thesis = Thesis::new(Uuid::new_v4(), student_id, "Sistem informasi".to_string());
        let records = vec![
            approval(student_id, AdvisorRole::Advisor1, true),
            approval(student_id, AdvisorRole::Advisor2, false),
        ];
        let ctx = test_context(vec![thesis], records, vec![]);

        let err = DefenseService::new(&ctx).register(student_id).await.unwrap_err();
        assert_eq!(err.status_code(), 412);
    }

    #[tokio::test]
    async fn test_register_with_both_approvals_creates_awaiting_registration() {
        let student_id = Uuid::new_v4();
        let thesis = Thesis::new(Uuid::new_v4(), student_id, "Sistem informasi".to_string());
        let thesis_id = thesis.id;
        let records = vec![
            approval(student_id, AdvisorRole::Advisor1, true),
            approval(student_id, AdvisorRole::Advisor2, true),
        ];
        let ctx = test_context(vec![thesis], records, vec![]);
        let service = DefenseService::new(&ctx);

        let response = service.register(student_id).await.unwrap();
        assert_eq!(response.status, "awaiting");
        assert_eq!(response.student_id, student_id);
        assert_eq!(response.thesis_id, thesis_id);
        assert!(response.examiner1_id.is_none());
        assert!(response.scheduled_at.is_none());

        // A second call conflicts and never creates a second row
        let err = service.register(student_id).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::DuplicateRegistration)
        ));
        assert_eq!(err.status_code(), 409);

        let stored = ctx.defense_repo().find_by_student(student_id).await.unwrap();
        assert_eq!(stored.unwrap().thesis_id, thesis_id);
    }

    #[tokio::test]
    async fn test_duplicate_check_precedes_eligibility() {
        let student_id = Uuid::new_v4();
        let thesis = Thesis::new(Uuid::new_v4(), student_id, "Sistem informasi".to_string());
        let existing = DefenseRegistration::new(Uuid::new_v4(), student_id, thesis.id);
        // No approvals at all, yet the duplicate must win over the 412
        let ctx = test_context(vec![thesis], vec![], vec![existing]);

        let err = DefenseService::new(&ctx).register(student_id).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::DuplicateRegistration)
        ));
        assert_eq!(err.status_code(), 409);
    }
}
