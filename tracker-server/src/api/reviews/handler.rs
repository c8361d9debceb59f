//! Performance Review API Handlers
//!
//! Same scoping rules as goals; employee-role callers may additionally
//! write self-evaluations for themselves.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::ErrorCode;
use shared::models::{Review, ReviewCreate, ReviewUpdate};
use shared::{AppError, AppResult};

use crate::auth::scope::{self, Access, DenyReason};
use crate::auth::{AuthUser, Op, Resource};
use crate::core::AppState;
use crate::db::repository::{employee, review};

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::ReviewNotFound, format!("Review {id} not found"))
}

/// List reviews visible to the caller
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<Vec<Review>>> {
    match scope::resolve(&auth.role, auth.employee_id, Resource::Review, Op::List) {
        Access::Full => Ok(Json(review::find_all(&state.pool).await?)),
        Access::Scoped(employee_id) => Ok(Json(
            review::find_by_employee(&state.pool, employee_id).await?,
        )),
        Access::Empty => Ok(Json(Vec::new())),
        _ => Err(AppError::forbidden("Insufficient permissions to view reviews")),
    }
}

/// Get a single review by id
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Review>> {
    let record = review::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    match scope::resolve(&auth.role, auth.employee_id, Resource::Review, Op::Read) {
        Access::Full => Ok(Json(record)),
        Access::Scoped(employee_id) if record.employee_id == employee_id => Ok(Json(record)),
        _ => Err(AppError::forbidden("You can only view your own reviews")),
    }
}

/// Create a new review
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<(StatusCode, Json<Review>)> {
    match scope::resolve(&auth.role, auth.employee_id, Resource::Review, Op::Create) {
        Access::Full => {}
        Access::Restricted(employee_id) => {
            if payload.employee_id != employee_id {
                return Err(AppError::forbidden(
                    "Employees can only create self-reviews for themselves",
                ));
            }
        }
        Access::Denied(DenyReason::MissingLink) => {
            return Err(AppError::with_message(
                ErrorCode::EmployeeLinkRequired,
                "You are not linked to an employee record",
            ));
        }
        _ => {
            return Err(AppError::forbidden(
                "Insufficient permissions to create reviews",
            ));
        }
    }

    if !employee::exists(&state.pool, payload.employee_id).await? {
        return Err(AppError::invalid_request(format!(
            "Employee with id {} does not exist",
            payload.employee_id
        )));
    }

    let created = review::create(&state.pool, payload).await?;

    tracing::info!(
        review_id = created.id,
        employee_id = created.employee_id,
        "Review created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a review
///
/// Employee-role callers are limited to their own reviews and to the
/// self-evaluation fields; the owning employee cannot be reassigned.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<ReviewUpdate>,
) -> AppResult<Json<Review>> {
    let record = review::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let payload = match scope::resolve(&auth.role, auth.employee_id, Resource::Review, Op::Update) {
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
                return Err(AppError::forbidden("You can only update your own reviews"));
            }
            scope::self_review_update(payload)
        }
        _ => {
            return Err(AppError::forbidden(
                "Insufficient permissions to update this review",
            ));
        }
    };

    let updated = review::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// Delete a review
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    review::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    match scope::resolve(&auth.role, auth.employee_id, Resource::Review, Op::Delete) {
        Access::Full => {}
        _ => {
            return Err(AppError::forbidden(
                "Only admins or managers can delete reviews",
            ));
        }
    }

    review::delete(&state.pool, id).await?;

    tracing::info!(review_id = id, "Review deleted");

    Ok(StatusCode::NO_CONTENT)
}
