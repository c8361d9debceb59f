//! Performance Review Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Review, ReviewCreate, ReviewUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Review>> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, month, rating, feedback, reviewer_name, employee_id FROM review ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(reviews)
}

pub async fn find_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Review>> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, month, rating, feedback, reviewer_name, employee_id FROM review WHERE employee_id = ? ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(reviews)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Review>> {
    let review = sqlx::query_as::<_, Review>(
        "SELECT id, month, rating, feedback, reviewer_name, employee_id FROM review WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(review)
}

pub async fn create(pool: &SqlitePool, data: ReviewCreate) -> RepoResult<Review> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO review (month, rating, feedback, reviewer_name, employee_id) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.month)
    .bind(data.rating)
    .bind(&data.feedback)
    .bind(&data.reviewer_name)
    .bind(data.employee_id)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create review".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ReviewUpdate) -> RepoResult<Review> {
    let rows = sqlx::query(
        "UPDATE review SET month = COALESCE(?1, month), rating = COALESCE(?2, rating), feedback = COALESCE(?3, feedback), reviewer_name = COALESCE(?4, reviewer_name), employee_id = COALESCE(?5, employee_id) WHERE id = ?6",
    )
    .bind(&data.month)
    .bind(data.rating)
    .bind(&data.feedback)
    .bind(&data.reviewer_name)
    .bind(data.employee_id)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Business(
            ErrorCode::ReviewNotFound,
            format!("Review {id} not found"),
        ));
    }
    find_by_id(pool, id).await?.ok_or_else(|| {
        RepoError::Business(ErrorCode::ReviewNotFound, format!("Review {id} not found"))
    })
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM review WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Business(
            ErrorCode::ReviewNotFound,
            format!("Review {id} not found"),
        ));
    }
    Ok(true)
}
