//! Employee Performance Tracker - backend server
//!
//! Role-based CRUD API over employees, goals, and performance reviews with
//! JWT authentication and three permission tiers (admin, manager,
//! employee). Authorization decisions go through a single decision table
//! (`auth::scope`) instead of per-endpoint role branching.
//!
//! # Module structure
//!
//! ```text
//! tracker-server/src/
//! ├── core/          # Configuration, state, server
//! ├── auth/          # JWT, middleware, access scoping
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Connection pool, migrations, repositories
//! └── utils/         # Logging, password hashing
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{AuthUser, JwtConfig, JwtService};
pub use core::{AppState, Config, Server, build_app};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security events get a dedicated target so they can be filtered or
// shipped separately from the access log.
#[macro_export]
macro_rules! security_log {
    ($severity:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::warn!(
            target: "security",
            severity = $severity,
            event = $event,
            $($key = $value),*
        );
    };
}
