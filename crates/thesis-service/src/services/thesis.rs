//! Thesis service
//!
//! Student-facing thesis view with derived eligibility, payment proof
//! upload, and the administrator's thesis management operations.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use thesis_core::{DomainError, Thesis, ThesisEligibility, ThesisStatus};

use crate::dto::mappers::thesis_response;
use crate::dto::{
    EligibilityResponse, ThesisOverviewResponse, ThesisResponse, UpdateThesisRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::list_query;

/// Proof content types accepted for upload, with their stored extension
const ACCEPTED_PROOF_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("application/pdf", "pdf"),
];

/// Thesis service
pub struct ThesisService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThesisService<'a> {
    /// Create a new ThesisService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Derive the advisor-approval state from the student's ledger
    async fn eligibility_of(&self, student_id: Uuid) -> ServiceResult<ThesisEligibility> {
        let records = self.ctx.approval_repo().find_by_student(student_id).await?;
        Ok(ThesisEligibility::from_records(&records))
    }

    /// The student's own thesis with derived eligibility
    #[instrument(skip(self))]
    pub async fn my_thesis(&self, student_id: Uuid) -> ServiceResult<ThesisResponse> {
        let thesis = self
            .ctx
            .thesis_repo()
            .find_by_student(student_id)
            .await?
            .ok_or(DomainError::ThesisNotFound)?;
        let eligibility = self.eligibility_of(student_id).await?;
        Ok(thesis_response(&thesis, eligibility))
    }

    /// The student's derived eligibility alone
    #[instrument(skip(self))]
    pub async fn my_eligibility(&self, student_id: Uuid) -> ServiceResult<EligibilityResponse> {
        Ok(self.eligibility_of(student_id).await?.into())
    }

    /// Upload (or replace) the payment proof.
    ///
    /// The first upload also creates the thesis record itself; the title
    /// stays empty until the student or an administrator fills it in.
    /// Storage keys are server generated, so client input never reaches
    /// the filesystem.
    #[instrument(skip(self, data), fields(content_type = %content_type, size = data.len()))]
    pub async fn upload_payment_proof(
        &self,
        student_id: Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> ServiceResult<ThesisResponse> {
        if data.is_empty() {
            return Err(ServiceError::validation("Uploaded file is empty"));
        }
        let extension = ACCEPTED_PROOF_TYPES
            .iter()
            .find(|(mime, _)| *mime == content_type)
            .map(|(_, ext)| *ext)
            .ok_or_else(|| {
                ServiceError::validation(format!("Unsupported proof content type: {content_type}"))
            })?;

        let student = self
            .ctx
            .account_repo()
            .find_student(student_id)
            .await?
            .ok_or(DomainError::StudentNotFound(student_id))?;

        let mut thesis = match self.ctx.thesis_repo().find_by_student(student.id).await? {
            Some(thesis) => thesis,
            None => {
                let thesis = Thesis::new(Uuid::new_v4(), student.id, String::new());
                self.ctx.thesis_repo().create(&thesis).await?;
                info!(thesis_id = %thesis.id, "Thesis record created on first proof upload");
                thesis
            }
        };

        let key = format!("{}-{}.{}", thesis.id, Uuid::new_v4(), extension);
        self.ctx.proof_store().put(&key, data).await?;

        // Replacing a proof leaves no orphan file behind
        if let Some(old_key) = thesis.payment_proof.replace(key) {
            self.ctx.proof_store().delete(&old_key).await?;
        }
        thesis.updated_at = Utc::now();
        self.ctx.thesis_repo().update(&thesis).await?;

        info!(thesis_id = %thesis.id, "Payment proof stored");
        let eligibility = self.eligibility_of(student.id).await?;
        Ok(thesis_response(&thesis, eligibility))
    }

    /// Fetch the stored payment proof bytes for a thesis, with its key.
    ///
    /// The key's extension tells the caller which content type to serve.
    #[instrument(skip(self))]
    pub async fn payment_proof(&self, thesis_id: Uuid) -> ServiceResult<(String, Vec<u8>)> {
        let thesis = self
            .ctx
            .thesis_repo()
            .find_by_id(thesis_id)
            .await?
            .ok_or(DomainError::ThesisNotFound)?;
        let key = thesis
            .payment_proof
            .ok_or_else(|| ServiceError::not_found("Payment proof", thesis_id.to_string()))?;
        let data = self
            .ctx
            .proof_store()
            .get(&key)
            .await?
            .ok_or_else(|| ServiceError::not_found("Payment proof", key.clone()))?;
        Ok((key, data))
    }

    /// Get a thesis by ID with derived eligibility
    #[instrument(skip(self))]
    pub async fn get_thesis(&self, id: Uuid) -> ServiceResult<ThesisResponse> {
        let thesis = self
            .ctx
            .thesis_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ThesisNotFound)?;
        let eligibility = self.eligibility_of(thesis.student_id).await?;
        Ok(thesis_response(&thesis, eligibility))
    }

    /// Administrator update: title, verification status, payment note,
    /// and advisor assignments.
    #[instrument(skip(self, request))]
    pub async fn update_thesis(
        &self,
        id: Uuid,
        request: UpdateThesisRequest,
    ) -> ServiceResult<ThesisResponse> {
        request.validate()?;

        let mut thesis = self
            .ctx
            .thesis_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ThesisNotFound)?;

        if let Some(title) = request.title {
            thesis.title = title;
        }
        if let Some(status) = request.status.as_deref() {
            thesis.status = ThesisStatus::parse(status).ok_or_else(|| {
                ServiceError::validation(format!("Unknown thesis status: {status}"))
            })?;
        }
        if let Some(note) = request.payment_note {
            thesis.payment_note = Some(note);
        }

        if request.advisor1_id.is_some() || request.advisor2_id.is_some() {
            let advisor1 = request.advisor1_id.or(thesis.advisor1_id);
            let advisor2 = request.advisor2_id.or(thesis.advisor2_id);
            if advisor1.is_some() && advisor1 == advisor2 {
                return Err(ServiceError::validation(
                    "A faculty member cannot hold both advisor slots",
                ));
            }
            for advisor_id in [request.advisor1_id, request.advisor2_id].into_iter().flatten() {
                self.ctx
                    .account_repo()
                    .find_faculty(advisor_id)
                    .await?
                    .ok_or(DomainError::FacultyNotFound(advisor_id))?;
            }
            thesis.advisor1_id = advisor1;
            thesis.advisor2_id = advisor2;
        }

        thesis.updated_at = Utc::now();
        self.ctx.thesis_repo().update(&thesis).await?;

        info!(thesis_id = %id, "Thesis updated");
        let eligibility = self.eligibility_of(thesis.student_id).await?;
        Ok(thesis_response(&thesis, eligibility))
    }

    /// Theses where the faculty member holds an advisor slot
    #[instrument(skip(self))]
    pub async fn theses_for_advisor(
        &self,
        faculty_id: Uuid,
    ) -> ServiceResult<Vec<ThesisOverviewResponse>> {
        let overviews = self.ctx.thesis_repo().find_by_advisor(faculty_id).await?;
        Ok(overviews.iter().map(ThesisOverviewResponse::from).collect())
    }

    /// List theses for the administrator, optionally filtered by status
    #[instrument(skip(self))]
    pub async fn list_theses(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
        status: Option<String>,
        show_deleted: bool,
    ) -> ServiceResult<(Vec<ThesisOverviewResponse>, i64)> {
        let status = match status.as_deref() {
            Some(s) => Some(ThesisStatus::parse(s).ok_or_else(|| {
                ServiceError::validation(format!("Unknown thesis status: {s}"))
            })?),
            None => None,
        };
        let query = list_query(page, limit, search, show_deleted);
        let (overviews, total) = self.ctx.thesis_repo().list(&query, status).await?;
        Ok((
            overviews.iter().map(ThesisOverviewResponse::from).collect(),
            total,
        ))
    }

    /// Soft delete a thesis
    #[instrument(skip(self))]
    pub async fn delete_thesis(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.thesis_repo().delete(id).await?;
        info!(thesis_id = %id, "Thesis deleted");
        Ok(())
    }
}
