//! Defense registration entity <-> model mappers

use thesis_core::entities::{DefenseOverview, DefenseRegistration};
use thesis_core::value_objects::DefenseStatus;

use crate::models::{DefenseModel, DefenseOverviewModel};

/// Convert defense status column to the enum, tolerating unknown values
pub fn parse_defense_status(status: &str) -> DefenseStatus {
    DefenseStatus::parse(status).unwrap_or(DefenseStatus::Awaiting)
}

impl From<DefenseModel> for DefenseRegistration {
    fn from(model: DefenseModel) -> Self {
        DefenseRegistration {
            id: model.id,
            student_id: model.student_id,
            thesis_id: model.thesis_id,
            status: parse_defense_status(&model.status),
            scheduled_at: model.scheduled_at,
            examiner1_id: model.examiner1_id,
            examiner2_id: model.examiner2_id,
            examiner1_note: model.examiner1_note,
            examiner2_note: model.examiner2_note,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<DefenseOverviewModel> for DefenseOverview {
    fn from(model: DefenseOverviewModel) -> Self {
        DefenseOverview {
            defense: DefenseRegistration::from(model.defense),
            student_name: model.student_name,
            student_nim: model.student_nim,
            thesis_title: model.thesis_title,
            examiner1_name: model.examiner1_name,
            examiner2_name: model.examiner2_name,
        }
    }
}
