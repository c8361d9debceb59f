//! Numeric error codes shared by the server and its clients
//!
//! Codes are grouped in thousand-ranges per category:
//! 0xxx general, 1xxx auth, 2xxx permission, 3xxx account,
//! 4xxx goal, 5xxx review, 8xxx employee, 9xxx system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every error the API can report, as a stable u16 code.
///
/// Serialized as the bare number so non-Rust clients can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    Success = 0,
    Unknown = 1,
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    NotAuthenticated = 1001,
    InvalidCredentials = 1002,
    TokenExpired = 1003,
    TokenInvalid = 1004,
    AccountDisabled = 1005,

    // ==================== 2xxx: Permission ====================
    PermissionDenied = 2001,
    AdminRequired = 2002,

    // ==================== 3xxx: Account ====================
    UserEmailExists = 3001,
    EmployeeLinkRequired = 3002,
    EmployeeAlreadyLinked = 3003,

    // ==================== 4xxx: Goal ====================
    GoalNotFound = 4001,

    // ==================== 5xxx: Review ====================
    ReviewNotFound = 5001,

    // ==================== 8xxx: Employee ====================
    EmployeeNotFound = 8001,
    EmployeeEmailExists = 8002,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    DatabaseError = 9002,
    ConfigError = 9003,
}

impl ErrorCode {
    /// All defined codes, used for u16 round-trips
    const ALL: &'static [ErrorCode] = &[
        Self::Success,
        Self::Unknown,
        Self::ValidationFailed,
        Self::NotFound,
        Self::AlreadyExists,
        Self::InvalidRequest,
        Self::NotAuthenticated,
        Self::InvalidCredentials,
        Self::TokenExpired,
        Self::TokenInvalid,
        Self::AccountDisabled,
        Self::PermissionDenied,
        Self::AdminRequired,
        Self::UserEmailExists,
        Self::EmployeeLinkRequired,
        Self::EmployeeAlreadyLinked,
        Self::GoalNotFound,
        Self::ReviewNotFound,
        Self::EmployeeNotFound,
        Self::EmployeeEmailExists,
        Self::InternalError,
        Self::DatabaseError,
        Self::ConfigError,
    ];

    /// The numeric wire value
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Default English message, used when no custom message is attached
    pub const fn message(self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "An unknown error occurred",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Authentication token has expired",
            Self::TokenInvalid => "Authentication token is invalid",
            Self::AccountDisabled => "Account is disabled",

            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Administrator role is required",

            Self::UserEmailExists => "A user with this email already exists",
            Self::EmployeeLinkRequired => "Caller is not linked to an employee record",
            Self::EmployeeAlreadyLinked => "Employee is already linked to another account",

            Self::GoalNotFound => "Goal not found",
            Self::ReviewNotFound => "Review not found",

            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeEmailExists => "An employee with this email already exists",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> u16 {
        code.as_u16()
    }
}

/// A u16 that matches no defined [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownErrorCode(pub u16);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code {}", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_u16() == value)
            .ok_or(UnknownErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}
