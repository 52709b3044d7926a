//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Member errors
/// - 4xxx: Job errors
/// - 5xxx: Work log errors
/// - 6xxx: Reward errors
/// - 7xxx: Consultation errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Member errors (3xxx)
    Member,
    /// Job errors (4xxx)
    Job,
    /// Work log errors (5xxx)
    WorkLog,
    /// Reward errors (6xxx)
    Reward,
    /// Consultation errors (7xxx)
    Consultation,
    /// System errors (8xxx reserved, 9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Member,
            4000..5000 => Self::Job,
            5000..6000 => Self::WorkLog,
            6000..7000 => Self::Reward,
            7000..8000 => Self::Consultation,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Member => "member",
            Self::Job => "job",
            Self::WorkLog => "work_log",
            Self::Reward => "reward",
            Self::Consultation => "consultation",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Member);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Job);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::WorkLog);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Reward);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Consultation);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::TokenExpired.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::SpinAlreadyUsedToday.category(),
            ErrorCategory::Reward
        );
        assert_eq!(ErrorCode::InvalidHours.category(), ErrorCategory::WorkLog);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::WorkLog).unwrap();
        assert_eq!(json, "\"work_log\"");

        let category: ErrorCategory = serde_json::from_str("\"reward\"").unwrap();
        assert_eq!(category, ErrorCategory::Reward);
        assert_eq!(category.name(), "reward");
    }
}
