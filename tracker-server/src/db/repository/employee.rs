//! Employee Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, title, department, status FROM employee ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, title, department, status FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, title, department, status FROM employee WHERE email = ? LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM employee WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    // Check duplicate email
    if find_by_email(pool, &data.email).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::EmployeeEmailExists,
            format!("An employee with email '{}' already exists", data.email),
        ));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (name, email, title, department, status) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.title)
    .bind(&data.department)
    .bind(&data.status)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let existing = find_by_id(pool, id).await?.ok_or_else(|| {
        RepoError::Business(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
    })?;

    // Check duplicate email if changing
    if let Some(ref new_email) = data.email
        && new_email != &existing.email
        && find_by_email(pool, new_email).await?.is_some()
    {
        return Err(RepoError::Business(
            ErrorCode::EmployeeEmailExists,
            format!("Another employee with email '{new_email}' already exists"),
        ));
    }

    sqlx::query(
        "UPDATE employee SET name = COALESCE(?1, name), email = COALESCE(?2, email), title = COALESCE(?3, title), department = COALESCE(?4, department), status = COALESCE(?5, status) WHERE id = ?6",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.title)
    .bind(&data.department)
    .bind(&data.status)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await?.ok_or_else(|| {
        RepoError::Business(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
    })
}

/// Hard delete; goals and reviews cascade at the schema level
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Business(
            ErrorCode::EmployeeNotFound,
            format!("Employee {id} not found"),
        ));
    }
    Ok(true)
}
