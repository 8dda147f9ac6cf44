//! Approval record entity <-> model mapper

use thesis_core::entities::ApprovalRecord;
use thesis_core::value_objects::AdvisorRole;

use crate::models::ApprovalModel;

/// Convert advisor role column to the enum, tolerating unknown values
pub fn parse_advisor_role(role: &str) -> AdvisorRole {
    AdvisorRole::parse(role).unwrap_or(AdvisorRole::Advisor1)
}

impl From<ApprovalModel> for ApprovalRecord {
    fn from(model: ApprovalModel) -> Self {
        ApprovalRecord {
            id: model.id,
            student_id: model.student_id,
            faculty_id: model.faculty_id,
            role: parse_advisor_role(&model.role),
            decision: model.decision,
            note: model.note,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
