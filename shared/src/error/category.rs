//! Error code categories

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Category of an error code, derived from its thousand-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    Permission,
    Account,
    Goal,
    Review,
    Employee,
    System,
}

impl ErrorCategory {
    /// Classify a numeric code by its thousand-range
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::General,
            1 => Self::Auth,
            2 => Self::Permission,
            3 => Self::Account,
            4 => Self::Goal,
            5 => Self::Review,
            8 => Self::Employee,
            _ => Self::System,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Account => "account",
            Self::Goal => "goal",
            Self::Review => "review",
            Self::Employee => "employee",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// The category this code belongs to
    pub fn category(self) -> ErrorCategory {
        ErrorCategory::from_code(self.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousand_ranges_map_to_categories() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1003), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3002), ErrorCategory::Account);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Goal);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Review);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Employee);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
        // Unassigned ranges fall through to System
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::System);
    }

    #[test]
    fn codes_know_their_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::TokenExpired.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::PermissionDenied.category(),
            ErrorCategory::Permission
        );
        assert_eq!(
            ErrorCode::EmployeeLinkRequired.category(),
            ErrorCategory::Account
        );
        assert_eq!(ErrorCode::GoalNotFound.category(), ErrorCategory::Goal);
        assert_eq!(ErrorCode::ReviewNotFound.category(), ErrorCategory::Review);
        assert_eq!(
            ErrorCode::EmployeeEmailExists.category(),
            ErrorCategory::Employee
        );
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn category_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Auth).unwrap(),
            "\"auth\""
        );
        let parsed: ErrorCategory = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(parsed, ErrorCategory::Employee);
        assert_eq!(ErrorCategory::Permission.as_str(), "permission");
    }
}
