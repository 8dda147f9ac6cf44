//! Closed status enums for thesis and defense workflows
//!
//! The source system accepted free-form status strings from several code
//! paths; these enums replace that with a fixed vocabulary and an explicit
//! transition table.

use serde::{Deserialize, Serialize};

/// Thesis workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThesisStatus {
    #[default]
    Pending,
    Rejected,
    Accepted,
}

impl ThesisStatus {
    /// Database string form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
        }
    }

    /// Parse the stored string back into a status
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "rejected" => Some(Self::Rejected),
            "accepted" => Some(Self::Accepted),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThesisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defense registration status.
///
/// Forward transitions are `Awaiting -> Ongoing -> Finished`; an
/// administrator may additionally reject a registration from any
/// non-final state. Everything else is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefenseStatus {
    #[default]
    Awaiting,
    Ongoing,
    Finished,
    Rejected,
}

impl DefenseStatus {
    /// Database string form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awaiting => "awaiting",
            Self::Ongoing => "ongoing",
            Self::Finished => "finished",
            Self::Rejected => "rejected",
        }
    }

    /// Parse the stored string back into a status
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "awaiting" => Some(Self::Awaiting),
            "ongoing" => Some(Self::Ongoing),
            "finished" => Some(Self::Finished),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether a transition to `next` is allowed
    #[must_use]
    pub fn can_transition_to(&self, next: Self) -> bool {
        if *self == next {
            return true;
        }
        matches!(
            (self, next),
            (Self::Awaiting, Self::Ongoing)
                | (Self::Ongoing, Self::Finished)
                | (Self::Awaiting | Self::Ongoing, Self::Rejected)
        )
    }

    /// Whether this is a terminal state
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Finished | Self::Rejected)
    }

    /// Ordering key for admin listings (awaiting first, rejected last)
    #[must_use]
    pub fn sort_order(&self) -> i32 {
        match self {
            Self::Awaiting => 0,
            Self::Ongoing => 1,
            Self::Finished => 2,
            Self::Rejected => 3,
        }
    }
}

impl std::fmt::Display for DefenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thesis_status_round_trip() {
        for status in [
            ThesisStatus::Pending,
            ThesisStatus::Rejected,
            ThesisStatus::Accepted,
        ] {
            assert_eq!(ThesisStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ThesisStatus::parse("sukses"), None);
    }

    #[test]
    fn test_defense_forward_transitions() {
        assert!(DefenseStatus::Awaiting.can_transition_to(DefenseStatus::Ongoing));
        assert!(DefenseStatus::Ongoing.can_transition_to(DefenseStatus::Finished));
        assert!(!DefenseStatus::Awaiting.can_transition_to(DefenseStatus::Finished));
        assert!(!DefenseStatus::Finished.can_transition_to(DefenseStatus::Ongoing));
    }

    #[test]
    fn test_defense_rejection_paths() {
        assert!(DefenseStatus::Awaiting.can_transition_to(DefenseStatus::Rejected));
        assert!(DefenseStatus::Ongoing.can_transition_to(DefenseStatus::Rejected));
        // Final states stay final
        assert!(!DefenseStatus::Finished.can_transition_to(DefenseStatus::Rejected));
        assert!(!DefenseStatus::Rejected.can_transition_to(DefenseStatus::Ongoing));
    }

    #[test]
    fn test_self_transition_is_noop() {
        assert!(DefenseStatus::Ongoing.can_transition_to(DefenseStatus::Ongoing));
    }

    #[test]
    fn test_sort_order() {
        assert!(DefenseStatus::Awaiting.sort_order() < DefenseStatus::Ongoing.sort_order());
        assert!(DefenseStatus::Ongoing.sort_order() < DefenseStatus::Finished.sort_order());
    }
}
