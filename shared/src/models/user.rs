//! User Account Model
//!
//! A user account is the authenticable identity, distinct from an
//! [`Employee`](super::Employee) record. The optional `employee_id` is a
//! back-reference used to scope what the account can see; it is not an
//! ownership edge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role. Anything outside this closed set is denied everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    /// Parse a stored role string; unknown strings yield `None`
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    /// Optional link to an employee row
    pub employee_id: Option<i64>,
}

/// Create user payload (admin only); the plain password is hashed server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub employee_id: Option<i64>,
}

fn default_role() -> Role {
    Role::Employee
}

fn default_active() -> bool {
    true
}
