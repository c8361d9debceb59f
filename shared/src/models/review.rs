//! Performance Review Model

use serde::{Deserialize, Serialize};

/// Performance review entity, owned by an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Review {
    pub id: i64,
    /// Review period, "YYYY-MM" (not format-enforced)
    pub month: String,
    pub rating: i64,
    pub feedback: Option<String>,
    pub reviewer_name: String,
    pub employee_id: i64,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub month: String,
    pub rating: i64,
    pub feedback: Option<String>,
    pub reviewer_name: String,
    pub employee_id: i64,
}

/// Update review payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewUpdate {
    pub month: Option<String>,
    pub rating: Option<i64>,
    pub feedback: Option<String>,
    pub reviewer_name: Option<String>,
    pub employee_id: Option<i64>,
}
