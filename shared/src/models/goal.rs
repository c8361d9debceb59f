//! Goal Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goal entity, owned by an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Free text (default "in-progress")
    pub status: String,
    /// Completion percentage, intended range 0-100 (not enforced)
    pub progress: i64,
    pub employee_id: i64,
}

/// Create goal payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalCreate {
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub progress: i64,
    pub employee_id: i64,
}

/// Update goal payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub progress: Option<i64>,
    pub employee_id: Option<i64>,
}

fn default_status() -> String {
    "in-progress".to_string()
}
