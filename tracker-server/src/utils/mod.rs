//! Utility module - logging and password helpers
//!
//! Error types come from `shared::error` and are re-exported here for
//! convenient use in handlers.

pub mod logger;
pub mod password;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
