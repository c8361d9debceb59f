//! Unified error handling
//!
//! - [`ErrorCode`] - numeric error codes grouped by category
//! - [`ErrorCategory`] - code classification
//! - [`AppError`] - application error with code, message and details
//! - [`ApiResponse`] - response envelope used by every endpoint

pub mod category;
pub mod codes;
pub mod http;
pub mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, UnknownErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
