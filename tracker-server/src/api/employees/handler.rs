//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::ErrorCode;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::{AppError, AppResult};

use crate::auth::scope::{self, Access};
use crate::auth::{AuthUser, Op, Resource};
use crate::core::AppState;
use crate::db::repository::employee;

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
}

/// List employees visible to the caller
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<Vec<Employee>>> {
    match scope::resolve(&auth.role, auth.employee_id, Resource::Employee, Op::List) {
        Access::Full => Ok(Json(employee::find_all(&state.pool).await?)),
        Access::Scoped(employee_id) => {
            let own = employee::find_by_id(&state.pool, employee_id).await?;
            Ok(Json(own.into_iter().collect()))
        }
        Access::Empty => Ok(Json(Vec::new())),
        _ => Err(AppError::forbidden("Insufficient permissions to view employees")),
    }
}

/// Get a single employee by id
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let record = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    match scope::resolve(&auth.role, auth.employee_id, Resource::Employee, Op::Read) {
        Access::Full => Ok(Json(record)),
        Access::Scoped(employee_id) if record.id == employee_id => Ok(Json(record)),
        _ => Err(AppError::forbidden(
            "You can only view your own employee record",
        )),
    }
}

/// Create a new employee
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    match scope::resolve(&auth.role, auth.employee_id, Resource::Employee, Op::Create) {
        Access::Full => {}
        _ => {
            return Err(AppError::forbidden(
                "Only admins and managers can create employees",
            ));
        }
    }

    let created = employee::create(&state.pool, payload).await?;

    tracing::info!(employee_id = created.id, "Employee created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an employee
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    match scope::resolve(&auth.role, auth.employee_id, Resource::Employee, Op::Update) {
        Access::Full => {}
        _ => {
            return Err(AppError::forbidden(
                "Only admins and managers can update employees",
            ));
        }
    }

    let updated = employee::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// Delete an employee; its goals and reviews cascade
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    match scope::resolve(&auth.role, auth.employee_id, Resource::Employee, Op::Delete) {
        Access::Full => {}
        _ => {
            return Err(AppError::forbidden(
                "Only admins and managers can delete employees",
            ));
        }
    }

    employee::delete(&state.pool, id).await?;

    tracing::info!(employee_id = id, "Employee deleted");

    Ok(StatusCode::NO_CONTENT)
}
