//! Account entity <-> model mappers

use thesis_core::entities::{Administrator, FacultyMember, Student};

use crate::models::{AdminModel, FacultyModel, StudentModel};

impl From<AdminModel> for Administrator {
    fn from(model: AdminModel) -> Self {
        Administrator {
            id: model.id,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<FacultyModel> for FacultyMember {
    fn from(model: FacultyModel) -> Self {
        FacultyMember {
            id: model.id,
            nidn: model.nidn,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<StudentModel> for Student {
    fn from(model: StudentModel) -> Self {
        Student {
            id: model.id,
            nim: model.nim,
            name: model.name,
            email: model.email,
            thesis_clearance: model.thesis_clearance,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
