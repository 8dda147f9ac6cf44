//! Role value objects
//!
//! The account role is a tagged variant rather than a database column: each
//! role lives in its own table, and this enum is the single in-process
//! representation used by tokens and authorization checks.

use serde::{Deserialize, Serialize};

/// The three disjoint account classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    #[serde(rename = "admin")]
    Administrator,
    #[serde(rename = "faculty")]
    Faculty,
    #[serde(rename = "student")]
    Student,
}

impl AccountRole {
    /// String form used in JWT claims and API responses
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "admin",
            Self::Faculty => "faculty",
            Self::Student => "student",
        }
    }

    /// Parse the claim string back into a role
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Administrator),
            "faculty" => Some(Self::Faculty),
            "student" => Some(Self::Student),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisor slot on a thesis. One approval record exists per
/// (student, faculty, role) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorRole {
    Advisor1,
    Advisor2,
}

impl AdvisorRole {
    /// Database/API string form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advisor1 => "advisor1",
            Self::Advisor2 => "advisor2",
        }
    }

    /// Parse the stored string back into a role
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "advisor1" => Some(Self::Advisor1),
            "advisor2" => Some(Self::Advisor2),
            _ => None,
        }
    }
}

impl std::fmt::Display for AdvisorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Examiner slot on a defense registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExaminerSlot {
    Examiner1,
    Examiner2,
}

impl ExaminerSlot {
    /// String form used in logs
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Examiner1 => "examiner1",
            Self::Examiner2 => "examiner2",
        }
    }
}

impl std::fmt::Display for ExaminerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_role_round_trip() {
        for role in [
            AccountRole::Administrator,
            AccountRole::Faculty,
            AccountRole::Student,
        ] {
            assert_eq!(AccountRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(AccountRole::parse("lecturer"), None);
    }

    #[test]
    fn test_advisor_role_round_trip() {
        assert_eq!(AdvisorRole::parse("advisor1"), Some(AdvisorRole::Advisor1));
        assert_eq!(AdvisorRole::parse("advisor2"), Some(AdvisorRole::Advisor2));
        assert_eq!(AdvisorRole::parse("advisor3"), None);
    }
}
