//! User Account API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::client::UserInfo;
use shared::error::ErrorCode;
use shared::models::UserCreate;
use shared::{AppError, AppResult};

use crate::core::AppState;
use crate::db::repository::{employee, user};
use crate::utils::password;

/// List all user accounts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserInfo>>> {
    let users = user::find_all(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserInfo::from).collect()))
}

/// Create a new user account
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<UserInfo>)> {
    // A linked employee must exist
    if let Some(employee_id) = payload.employee_id {
        if !employee::exists(&state.pool, employee_id).await? {
            return Err(AppError::invalid_request(format!(
                "Employee with id {employee_id} does not exist"
            )));
        }

        // Optional one-account-per-employee policy
        if state.config.unique_employee_link
            && user::find_by_employee(&state.pool, employee_id)
                .await?
                .is_some()
        {
            return Err(AppError::with_message(
                ErrorCode::EmployeeAlreadyLinked,
                format!("Employee {employee_id} is already linked to another account"),
            ));
        }
    }

    let password_hash = password::hash(&payload.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    let created = user::create(&state.pool, &payload, &password_hash).await?;

    tracing::info!(
        user_id = created.id,
        email = %created.email,
        role = %created.role,
        "User account created"
    );

    Ok((StatusCode::CREATED, Json(UserInfo::from(created))))
}
