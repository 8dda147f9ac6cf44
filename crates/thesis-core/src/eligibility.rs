//! Eligibility derivation
//!
//! Eligibility is a pure function over the approval ledger, recomputed on
//! read. No cached flag exists: the ledger is the single source of truth,
//! which removes the staleness window a separately-mutated boolean would
//! introduce.
//!
//! Two signals exist and they are deliberately asymmetric, matching the
//! business rules as practiced:
//! - progression to defense registration requires a *positive decision*
//!   from both advisors;
//! - a defense is considered finalized once both examiner *notes are
//!   present*, regardless of their content.

use crate::entities::{ApprovalRecord, DefenseRegistration};
use crate::value_objects::AdvisorRole;

/// Derived advisor-approval state for one student's thesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThesisEligibility {
    pub advisor1_approved: bool,
    pub advisor2_approved: bool,
}

impl ThesisEligibility {
    /// Derive eligibility from the student's approval records.
    ///
    /// A role counts as approved iff a record exists for that role with a
    /// positive decision. Absence and a negative decision are
    /// indistinguishable here; both report "not approved".
    #[must_use]
    pub fn from_records(records: &[ApprovalRecord]) -> Self {
        let approved = |role: AdvisorRole| {
            records
                .iter()
                .any(|record| record.role == role && record.decision)
        };
        Self {
            advisor1_approved: approved(AdvisorRole::Advisor1),
            advisor2_approved: approved(AdvisorRole::Advisor2),
        }
    }

    /// The gate used by defense registration
    #[must_use]
    pub fn both_approved(&self) -> bool {
        self.advisor1_approved && self.advisor2_approved
    }
}

/// Whether a defense is finalized: both examiner notes present and
/// non-empty. Presence, not approval, is the finishing signal.
#[must_use]
pub fn defense_finalized(defense: &DefenseRegistration) -> bool {
    let has_note = |note: &Option<String>| note.as_deref().is_some_and(|n| !n.trim().is_empty());
    has_note(&defense.examiner1_note) && has_note(&defense.examiner2_note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record(role: AdvisorRole, decision: bool) -> ApprovalRecord {
        ApprovalRecord::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            role,
            decision,
            None,
        )
    }

    #[test]
    fn test_no_records_means_not_eligible() {
        let eligibility = ThesisEligibility::from_records(&[]);
        assert!(!eligibility.advisor1_approved);
        assert!(!eligibility.advisor2_approved);
        assert!(!eligibility.both_approved());
    }

    #[test]
    fn test_single_approval_is_not_enough() {
        let records = vec![record(AdvisorRole::Advisor1, true)];
        let eligibility = ThesisEligibility::from_records(&records);
        assert!(eligibility.advisor1_approved);
        assert!(!eligibility.advisor2_approved);
        assert!(!eligibility.both_approved());
    }

    #[test]
    fn test_both_positive_decisions_gate_open() {
        let records = vec![
            record(AdvisorRole::Advisor1, true),
            record(AdvisorRole::Advisor2, true),
        ];
        assert!(ThesisEligibility::from_records(&records).both_approved());
    }

    #[test]
    fn test_rejection_reads_as_not_approved() {
        let records = vec![
            record(AdvisorRole::Advisor1, true),
            record(AdvisorRole::Advisor2, false),
        ];
        let eligibility = ThesisEligibility::from_records(&records);
        assert!(eligibility.advisor1_approved);
        assert!(!eligibility.advisor2_approved);
        assert!(!eligibility.both_approved());
    }

    #[test]
    fn test_duplicate_roles_any_positive_counts() {
        // The ledger upserts so duplicates should not occur, but derivation
        // must still be well defined over arbitrary record sets.
        let records = vec![
            record(AdvisorRole::Advisor1, false),
            record(AdvisorRole::Advisor1, true),
            record(AdvisorRole::Advisor2, true),
        ];
        assert!(ThesisEligibility::from_records(&records).both_approved());
    }

    fn defense_with_notes(n1: Option<&str>, n2: Option<&str>) -> DefenseRegistration {
        let mut defense = DefenseRegistration::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        defense.examiner1_note = n1.map(String::from);
        defense.examiner2_note = n2.map(String::from);
        defense
    }

    #[test]
    fn test_finalized_requires_both_notes() {
        assert!(!defense_finalized(&defense_with_notes(None, None)));
        assert!(!defense_finalized(&defense_with_notes(Some("revise ch.3"), None)));
        assert!(defense_finalized(&defense_with_notes(
            Some("revise ch.3"),
            Some("passed")
        )));
    }

    #[test]
    fn test_note_content_is_irrelevant() {
        // Any non-blank note counts, including a negative-sounding one.
        assert!(defense_finalized(&defense_with_notes(
            Some("fail"),
            Some("ok")
        )));
    }

    #[test]
    fn test_blank_note_does_not_finalize() {
        assert!(!defense_finalized(&defense_with_notes(Some("   "), Some("ok"))));
        assert!(!defense_finalized(&defense_with_notes(Some(""), Some("ok"))));
    }
}
