//! User Account Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{User, UserCreate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, role, is_active, employee_id FROM user_account ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, role, is_active, employee_id FROM user_account WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, role, is_active, employee_id FROM user_account WHERE email = ? LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, role, is_active, employee_id FROM user_account WHERE employee_id = ? LIMIT 1",
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM user_account")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert a new account; the password arrives pre-hashed
pub async fn create(pool: &SqlitePool, data: &UserCreate, password_hash: &str) -> RepoResult<User> {
    // Check duplicate email
    if find_by_email(pool, &data.email).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::UserEmailExists,
            format!("A user with email '{}' already exists", data.email),
        ));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO user_account (name, email, password_hash, role, is_active, employee_id) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(password_hash)
    .bind(data.role.as_str())
    .bind(data.is_active)
    .bind(data.employee_id)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}
