//! Goal API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::ErrorCode;
use shared::models::{Goal, GoalCreate, GoalUpdate};
use shared::{AppError, AppResult};

use crate::auth::scope::{self, Access, DenyReason};
use crate::auth::{AuthUser, Op, Resource};
use crate::core::AppState;
use crate::db::repository::{employee, goal};

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::GoalNotFound, format!("Goal {id} not found"))
}

/// List goals visible to the caller
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<Vec<Goal>>> {
    match scope::resolve(&auth.role, auth.employee_id, Resource::Goal, Op::List) {
        Access::Full => Ok(Json(goal::find_all(&state.pool).await?)),
        Access::Scoped(employee_id) => {
            Ok(Json(goal::find_by_employee(&state.pool, employee_id).await?))
        }
        Access::Empty => Ok(Json(Vec::new())),
        _ => Err(AppError::forbidden("Insufficient permissions to view goals")),
    }
}

/// Get a single goal by id
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Goal>> {
    let record = goal::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    match scope::resolve(&auth.role, auth.employee_id, Resource::Goal, Op::Read) {
        Access::Full => Ok(Json(record)),
        Access::Scoped(employee_id) if record.employee_id == employee_id => Ok(Json(record)),
        _ => Err(AppError::forbidden("You can only view your own goals")),
    }
}

/// Create a new goal
///
/// Admins and managers may create goals for any existing employee;
/// employee-role callers only for themselves.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<GoalCreate>,
) -> AppResult<(StatusCode, Json<Goal>)> {
    match scope::resolve(&auth.role, auth.employee_id, Resource::Goal, Op::Create) {
        Access::Full => {}
        Access::Restricted(employee_id) => {
            if payload.employee_id != employee_id {
                return Err(AppError::forbidden(
                    "Employees can only create goals for themselves",
                ));
            }
        }
        Access::Denied(DenyReason::MissingLink) => {
            return Err(AppError::with_message(
                ErrorCode::EmployeeLinkRequired,
                "You are not linked to an employee record",
            ));
        }
        _ => return Err(AppError::forbidden("Insufficient permissions to create goals")),
    }

    if !employee::exists(&state.pool, payload.employee_id).await? {
        return Err(AppError::invalid_request(format!(
            "Employee with id {} does not exist",
            payload.employee_id
        )));
    }

    let created = goal::create(&state.pool, payload).await?;

    tracing::info!(goal_id = created.id, employee_id = created.employee_id, "Goal created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a goal
///
/// Employee-role callers are limited to their own goals and to the
/// progress/status fields; anything else in the payload is ignored.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<GoalUpdate>,
) -> AppResult<Json<Goal>> {
    let record = goal::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let payload = match scope::resolve(&auth.role, auth.employee_id, Resource::Goal, Op::Update) {
        Access::Full => {
            // Reassignment needs an existing target
            if let Some(new_owner) = payload.employee_id
                && new_owner != record.employee_id
                && !employee::exists(&state.pool, new_owner).await?
            {
                return Err(AppError::invalid_request(format!(
                    "Employee with id {new_owner} does not exist"
                )));
            }
            payload
        }
        Access::Restricted(employee_id) => {
            if record.employee_id != employee_id {
                return Err(AppError::forbidden("You can only update your own goals"));
            }
            scope::self_goal_update(payload)
        }
        _ => {
            return Err(AppError::forbidden(
                "Insufficient permissions to update this goal",
            ));
        }
    };

    let updated = goal::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// Delete a goal
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    goal::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    match scope::resolve(&auth.role, auth.employee_id, Resource::Goal, Op::Delete) {
        Access::Full => {}
        _ => {
            return Err(AppError::forbidden(
                "Only admins or managers can delete goals",
            ));
        }
    }

    goal::delete(&state.pool, id).await?;

    tracing::info!(goal_id = id, "Goal deleted");

    Ok(StatusCode::NO_CONTENT)
}
