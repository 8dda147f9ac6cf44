//! Entity to response DTO conversions

use thesis_core::{
    eligibility::defense_finalized, Account, Administrator, ApprovalRecord, DefenseOverview,
    DefenseRegistration, FacultyMember, NewsWithAuthor, Student, Thesis, ThesisEligibility,
    ThesisOverview,
};

use super::responses::{
    AccountResponse, AdminResponse, ApprovalResponse, DefenseOverviewResponse, DefenseResponse,
    EligibilityResponse, FacultyResponse, NewsResponse, StudentResponse, ThesisOverviewResponse,
    ThesisResponse,
};

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            nim: student.nim.clone(),
            name: student.name.clone(),
            email: student.email.clone(),
            thesis_clearance: student.thesis_clearance,
            created_at: student.created_at,
            deleted_at: student.deleted_at,
        }
    }
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self::from(&student)
    }
}

impl From<&FacultyMember> for FacultyResponse {
    fn from(faculty: &FacultyMember) -> Self {
        Self {
            id: faculty.id,
            nidn: faculty.nidn.clone(),
            name: faculty.name.clone(),
            email: faculty.email.clone(),
            created_at: faculty.created_at,
            deleted_at: faculty.deleted_at,
        }
    }
}

impl From<FacultyMember> for FacultyResponse {
    fn from(faculty: FacultyMember) -> Self {
        Self::from(&faculty)
    }
}

impl From<&Administrator> for AdminResponse {
    fn from(admin: &Administrator) -> Self {
        Self {
            id: admin.id,
            name: admin.name.clone(),
            email: admin.email.clone(),
            created_at: admin.created_at,
        }
    }
}

impl From<Administrator> for AdminResponse {
    fn from(admin: Administrator) -> Self {
        Self::from(&admin)
    }
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        let (nim, nidn, thesis_clearance) = match account {
            Account::Student(s) => (Some(s.nim.clone()), None, Some(s.thesis_clearance)),
            Account::FacultyMember(f) => (None, Some(f.nidn.clone()), None),
            Account::Administrator(_) => (None, None, None),
        };
        Self {
            id: account.id(),
            name: account.name().to_string(),
            email: account.email().to_string(),
            role: account.role().as_str().to_string(),
            nim,
            nidn,
            thesis_clearance,
        }
    }
}

impl From<ThesisEligibility> for EligibilityResponse {
    fn from(eligibility: ThesisEligibility) -> Self {
        Self {
            advisor1_approved: eligibility.advisor1_approved,
            advisor2_approved: eligibility.advisor2_approved,
            eligible_for_defense: eligibility.both_approved(),
        }
    }
}

/// Build a thesis response, attaching the eligibility derived from the
/// student's approval ledger.
pub fn thesis_response(thesis: &Thesis, eligibility: ThesisEligibility) -> ThesisResponse {
    ThesisResponse {
        id: thesis.id,
        student_id: thesis.student_id,
        title: thesis.title.clone(),
        status: thesis.status.as_str().to_string(),
        payment_proof: thesis.payment_proof.clone(),
        payment_note: thesis.payment_note.clone(),
        advisor1_id: thesis.advisor1_id,
        advisor2_id: thesis.advisor2_id,
        eligibility: eligibility.into(),
        created_at: thesis.created_at,
        updated_at: thesis.updated_at,
    }
}

impl From<&ThesisOverview> for ThesisOverviewResponse {
    fn from(overview: &ThesisOverview) -> Self {
        let thesis = &overview.thesis;
        Self {
            id: thesis.id,
            student_id: thesis.student_id,
            student_name: overview.student_name.clone(),
            student_nim: overview.student_nim.clone(),
            title: thesis.title.clone(),
            status: thesis.status.as_str().to_string(),
            payment_proof: thesis.payment_proof.clone(),
            payment_note: thesis.payment_note.clone(),
            advisor1_name: overview.advisor1_name.clone(),
            advisor2_name: overview.advisor2_name.clone(),
            created_at: thesis.created_at,
        }
    }
}

impl From<&ApprovalRecord> for ApprovalResponse {
    fn from(record: &ApprovalRecord) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            faculty_id: record.faculty_id,
            role: record.role.as_str().to_string(),
            decision: record.decision,
            note: record.note.clone(),
            updated_at: record.updated_at,
        }
    }
}

impl From<&DefenseRegistration> for DefenseResponse {
    fn from(defense: &DefenseRegistration) -> Self {
        Self {
            id: defense.id,
            student_id: defense.student_id,
            thesis_id: defense.thesis_id,
            status: defense.status.as_str().to_string(),
            scheduled_at: defense.scheduled_at,
            examiner1_id: defense.examiner1_id,
            examiner2_id: defense.examiner2_id,
            examiner1_note: defense.examiner1_note.clone(),
            examiner2_note: defense.examiner2_note.clone(),
            finalized: defense_finalized(defense),
            created_at: defense.created_at,
        }
    }
}

impl From<&DefenseOverview> for DefenseOverviewResponse {
    fn from(overview: &DefenseOverview) -> Self {
        let defense = &overview.defense;
        Self {
            id: defense.id,
            student_id: defense.student_id,
            student_name: overview.student_name.clone(),
            student_nim: overview.student_nim.clone(),
            thesis_title: overview.thesis_title.clone(),
            status: defense.status.as_str().to_string(),
            scheduled_at: defense.scheduled_at,
            examiner1_name: overview.examiner1_name.clone(),
            examiner2_name: overview.examiner2_name.clone(),
            examiner1_note: defense.examiner1_note.clone(),
            examiner2_note: defense.examiner2_note.clone(),
            finalized: defense_finalized(defense),
        }
    }
}

impl From<&NewsWithAuthor> for NewsResponse {
    fn from(news: &NewsWithAuthor) -> Self {
        Self {
            id: news.item.id,
            title: news.item.title.clone(),
            body: news.item.body.clone(),
            author_name: news.author_name.clone(),
            created_at: news.item.created_at,
            updated_at: news.item.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_account_response_carries_class_fields() {
        let now = Utc::now();
        let student = Student {
            id: Uuid::new_v4(),
            nim: "2019010101".into(),
            name: "Student".into(),
            email: "s@example.ac.id".into(),
            thesis_clearance: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let response = AccountResponse::from(&Account::Student(student));
        assert_eq!(response.role, "student");
        assert_eq!(response.nim.as_deref(), Some("2019010101"));
        assert!(response.nidn.is_none());
        assert_eq!(response.thesis_clearance, Some(true));
    }

    #[test]
    fn test_defense_response_finalized_requires_both_notes() {
        let mut defense =
            DefenseRegistration::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        defense.examiner1_note = Some("revisions needed".into());
        assert!(!DefenseResponse::from(&defense).finalized);

        defense.examiner2_note = Some("passed".into());
        assert!(DefenseResponse::from(&defense).finalized);
    }

    #[test]
    fn test_eligibility_response_gate() {
        let eligibility = ThesisEligibility {
            advisor1_approved: true,
            advisor2_approved: false,
        };
        let response = EligibilityResponse::from(eligibility);
        assert!(!response.eligible_for_defense);
    }
}
