//! HTTP status for each error code
//!
//! The match is exhaustive on purpose: a new code cannot be added without
//! deciding its status. Duplicate unique fields and broken references are
//! client mistakes (400), not conflicts or server faults.

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ValidationFailed
            | Self::AlreadyExists
            | Self::InvalidRequest
            | Self::UserEmailExists
            | Self::EmployeeLinkRequired
            | Self::EmployeeAlreadyLinked
            | Self::EmployeeEmailExists => StatusCode::BAD_REQUEST,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            Self::PermissionDenied | Self::AdminRequired | Self::AccountDisabled => {
                StatusCode::FORBIDDEN
            }

            Self::NotFound
            | Self::GoalNotFound
            | Self::ReviewNotFound
            | Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            Self::Unknown | Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_and_reference_failures_are_bad_request() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidRequest,
            ErrorCode::AlreadyExists,
            ErrorCode::UserEmailExists,
            ErrorCode::EmployeeEmailExists,
            ErrorCode::EmployeeLinkRequired,
            ErrorCode::EmployeeAlreadyLinked,
        ] {
            assert_eq!(code.http_status(), StatusCode::BAD_REQUEST, "{code:?}");
        }
    }

    #[test]
    fn auth_failures_are_unauthorized() {
        for code in [
            ErrorCode::NotAuthenticated,
            ErrorCode::InvalidCredentials,
            ErrorCode::TokenExpired,
            ErrorCode::TokenInvalid,
        ] {
            assert_eq!(code.http_status(), StatusCode::UNAUTHORIZED, "{code:?}");
        }
    }

    #[test]
    fn authorization_failures_are_forbidden() {
        // Disabled accounts are authenticated but still refused
        for code in [
            ErrorCode::PermissionDenied,
            ErrorCode::AdminRequired,
            ErrorCode::AccountDisabled,
        ] {
            assert_eq!(code.http_status(), StatusCode::FORBIDDEN, "{code:?}");
        }
    }

    #[test]
    fn missing_resources_are_not_found() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::GoalNotFound,
            ErrorCode::ReviewNotFound,
            ErrorCode::EmployeeNotFound,
        ] {
            assert_eq!(code.http_status(), StatusCode::NOT_FOUND, "{code:?}");
        }
    }

    #[test]
    fn system_faults_are_internal_errors() {
        for code in [
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::ConfigError,
        ] {
            assert_eq!(
                code.http_status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{code:?}"
            );
        }
    }
}
