//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness endpoints (public)
//! - [`auth`] - login and current-user endpoints
//! - [`users`] - account management (admin only)
//! - [`employees`] - employee records
//! - [`goals`] - goals
//! - [`reviews`] - performance reviews

pub mod auth;
pub mod employees;
pub mod goals;
pub mod health;
pub mod reviews;
pub mod users;
