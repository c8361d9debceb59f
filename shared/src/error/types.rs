//! Application error type and the JSON response envelope

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// An error as the API reports it: a stable code, a message for humans,
/// and optional structured context.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Map<String, Value>>,
}

impl AppError {
    /// Error carrying the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach a key/value detail
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ---- shorthands for the codes handlers raise directly ----

    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{resource} not found"))
            .with_detail("resource", resource)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// One error for unknown email and wrong password alike, so login
    /// responses cannot be used to probe which emails exist
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, message)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    pub fn account_disabled() -> Self {
        Self::new(ErrorCode::AccountDisabled)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, message)
    }
}

/// JSON envelope returned by every endpoint.
///
/// `code` 0 means success and `data` holds the payload; any other code is
/// an error described by `message` and, sometimes, `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: None,
            details: None,
        }
    }

    pub fn error(err: &AppError) -> Self {
        err.clone().into()
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.as_u16()),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

/// Result alias used by handlers and services
pub type AppResult<T> = Result<T, AppError>;

// ---- axum integration ----

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "System error");
        }

        let status = self.http_status();
        (status, axum::Json(ApiResponse::<()>::error(&self))).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code {
            None | Some(0) => StatusCode::OK,
            Some(code) => ErrorCode::try_from(code)
                .map_or(StatusCode::INTERNAL_SERVER_ERROR, |c| c.http_status()),
        };

        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_and_custom_messages() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());

        let err = AppError::with_message(ErrorCode::EmployeeNotFound, "Employee 42 not found");
        assert_eq!(err.message, "Employee 42 not found");
        assert_eq!(format!("{err}"), "Employee 42 not found");
    }

    #[test]
    fn details_accumulate() {
        let err = AppError::not_found("Goal").with_detail("id", 7);

        let details = err.details.expect("details");
        assert_eq!(details.get("resource"), Some(&Value::from("Goal")));
        assert_eq!(details.get("id"), Some(&Value::from(7)));
    }

    #[test]
    fn shorthand_status_codes() {
        assert_eq!(
            AppError::unauthorized().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::invalid_credentials().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::forbidden("nope").http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::account_disabled().http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::not_found("Review").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::invalid_request("bad reference").http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn envelope_success_and_error() {
        let response = ApiResponse::success(42);
        assert_eq!(response.code, Some(0));
        assert_eq!(response.data, Some(42));

        let err = AppError::with_message(ErrorCode::EmployeeNotFound, "Employee 3 not found");
        let response = ApiResponse::<()>::error(&err);
        assert_eq!(response.code, Some(8001));
        assert_eq!(response.message, "Employee 3 not found");
        assert!(response.data.is_none());
    }

    #[test]
    fn envelope_serialization_skips_empty_fields() {
        let json = serde_json::to_string(&ApiResponse::success("hello")).unwrap();
        assert!(json.contains("\"code\":0"));
        assert!(json.contains("\"data\":\"hello\""));
        assert!(!json.contains("details"));

        let json = serde_json::to_string(&ApiResponse::<()>::error(
            &AppError::new(ErrorCode::PermissionDenied),
        ))
        .unwrap();
        assert!(json.contains("\"code\":2001"));
        assert!(!json.contains("data"));
    }
}
