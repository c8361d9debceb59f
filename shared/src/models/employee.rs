//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Job title label, unrelated to account roles
    pub title: Option<String>,
    pub department: Option<String>,
    /// Lifecycle status, free text (default "active")
    pub status: String,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub title: Option<String>,
    pub department: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
}

fn default_status() -> String {
    "active".to_string()
}
