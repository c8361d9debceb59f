//! Authentication and authorization
//!
//! - [`JwtService`] - token issue/validation
//! - [`AuthUser`] - authenticated caller context
//! - [`require_auth`] / [`require_admin`] - middleware gates
//! - [`scope`] - the access decision table consulted by every handler

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod scope;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::{AuthUser, authenticate, require_admin, require_auth};
pub use scope::{Access, DenyReason, Op, Resource};
