//! Thesis entity <-> model mappers

use thesis_core::entities::{Thesis, ThesisOverview};
use thesis_core::value_objects::ThesisStatus;

use crate::models::{ThesisModel, ThesisOverviewModel};

/// Convert thesis status column to the enum, tolerating unknown values
pub fn parse_thesis_status(status: &str) -> ThesisStatus {
    ThesisStatus::parse(status).unwrap_or_default()
}

impl From<ThesisModel> for Thesis {
    fn from(model: ThesisModel) -> Self {
        Thesis {
            id: model.id,
            student_id: model.student_id,
            title: model.title,
            status: parse_thesis_status(&model.status),
            payment_proof: model.payment_proof,
            payment_note: model.payment_note,
            advisor1_id: model.advisor1_id,
            advisor2_id: model.advisor2_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<ThesisOverviewModel> for ThesisOverview {
    fn from(model: ThesisOverviewModel) -> Self {
        ThesisOverview {
            thesis: Thesis::from(model.thesis),
            student_name: model.student_name,
            student_nim: model.student_nim,
            advisor1_name: model.advisor1_name,
            advisor2_name: model.advisor2_name,
        }
    }
}
