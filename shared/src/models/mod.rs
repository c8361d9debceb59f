//! Data models
//!
//! Entities and their Create/Update payloads. Database row mapping
//! (`sqlx::FromRow`) is enabled with the `db` feature so clients can use
//! these types without pulling in the database stack.

pub mod employee;
pub mod goal;
pub mod review;
pub mod user;

pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use goal::{Goal, GoalCreate, GoalUpdate};
pub use review::{Review, ReviewCreate, ReviewUpdate};
pub use user::{Role, User, UserCreate};
