//! Approval service
//!
//! Advisors record their decision against a student's thesis. The advisor
//! slot is derived from the thesis itself, never supplied by the client,
//! and repeat submissions overwrite the earlier decision.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use thesis_core::{ApprovalRecord, DomainError, ThesisEligibility};

use crate::dto::{ApprovalResponse, EligibilityResponse, RecordApprovalRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Approval ledger service
pub struct ApprovalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ApprovalService<'a> {
    /// Create a new ApprovalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record (or overwrite) an advisor's decision.
    ///
    /// The caller must hold an advisor slot on the student's thesis;
    /// the slot determines which ledger row the decision lands on.
    #[instrument(skip(self, request), fields(student_id = %request.student_id, decision = request.decision))]
    pub async fn record_approval(
        &self,
        faculty_id: Uuid,
        request: RecordApprovalRequest,
    ) -> ServiceResult<ApprovalResponse> {
        request.validate()?;

        let thesis = self
            .ctx
            .thesis_repo()
            .find_by_student(request.student_id)
            .await?
            .ok_or(DomainError::ThesisNotFound)?;

        let role = thesis
            .advisor_role_of(faculty_id)
            .ok_or(DomainError::NotThesisAdvisor)?;

        let record = ApprovalRecord::new(
            Uuid::new_v4(),
            request.student_id,
            faculty_id,
            role,
            request.decision,
            request.note,
        );
        self.ctx.approval_repo().upsert(&record).await?;

        info!(
            student_id = %request.student_id,
            role = %role,
            decision = request.decision,
            "Advisor decision recorded"
        );

        // Re-read so the response carries the stored row, not the input
        let stored = self
            .ctx
            .approval_repo()
            .find(request.student_id, faculty_id, role)
            .await?
            .ok_or_else(|| DomainError::InternalError("Upserted approval not found".into()))?;
        Ok(ApprovalResponse::from(&stored))
    }

    /// The student's full ledger plus the eligibility derived from it
    #[instrument(skip(self))]
    pub async fn approvals_for_student(
        &self,
        student_id: Uuid,
    ) -> ServiceResult<(Vec<ApprovalResponse>, EligibilityResponse)> {
        let records = self.ctx.approval_repo().find_by_student(student_id).await?;
        let eligibility = ThesisEligibility::from_records(&records);
        Ok((
            records.iter().map(ApprovalResponse::from).collect(),
            eligibility.into(),
        ))
    }
}
