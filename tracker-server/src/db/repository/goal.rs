//! Goal Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Goal, GoalCreate, GoalUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Goal>> {
    let goals = sqlx::query_as::<_, Goal>(
        "SELECT id, title, description, start_date, end_date, status, progress, employee_id FROM goal ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(goals)
}

pub async fn find_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Goal>> {
    let goals = sqlx::query_as::<_, Goal>(
        "SELECT id, title, description, start_date, end_date, status, progress, employee_id FROM goal WHERE employee_id = ? ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(goals)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Goal>> {
    let goal = sqlx::query_as::<_, Goal>(
        "SELECT id, title, description, start_date, end_date, status, progress, employee_id FROM goal WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(goal)
}

pub async fn create(pool: &SqlitePool, data: GoalCreate) -> RepoResult<Goal> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO goal (title, description, start_date, end_date, status, progress, employee_id) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(&data.status)
    .bind(data.progress)
    .bind(data.employee_id)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create goal".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: GoalUpdate) -> RepoResult<Goal> {
    let rows = sqlx::query(
        "UPDATE goal SET title = COALESCE(?1, title), description = COALESCE(?2, description), start_date = COALESCE(?3, start_date), end_date = COALESCE(?4, end_date), status = COALESCE(?5, status), progress = COALESCE(?6, progress), employee_id = COALESCE(?7, employee_id) WHERE id = ?8",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(&data.status)
    .bind(data.progress)
    .bind(data.employee_id)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Business(
            ErrorCode::GoalNotFound,
            format!("Goal {id} not found"),
        ));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Business(ErrorCode::GoalNotFound, format!("Goal {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM goal WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Business(
            ErrorCode::GoalNotFound,
            format!("Goal {id} not found"),
        ));
    }
    Ok(true)
}
