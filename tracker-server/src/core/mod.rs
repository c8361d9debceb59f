//! Core module - configuration, state and server
//!
//! - [`Config`] - server configuration
//! - [`AppState`] - shared application state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, build_app, build_routes};
pub use state::AppState;
