//! Login and current-user endpoints

use std::time::Duration;

use axum::{Json, extract::State};
use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::{AppError, AppResult};

use crate::auth::AuthUser;
use crate::core::AppState;
use crate::db::repository::user;
use crate::utils::password;

/// Flat delay on every login attempt, so response timing does not reveal
/// whether the email exists
const LOGIN_DELAY_MS: u64 = 100;

/// Login handler
///
/// Authenticates email + password and returns a JWT token plus the public
/// account projection. Unknown email and wrong password produce the same
/// error.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let account = user::find_by_email(&state.pool, &req.email).await?;

    tokio::time::sleep(Duration::from_millis(LOGIN_DELAY_MS)).await;

    let account = match account {
        Some(account) => {
            let password_valid = password::verify(&req.password, &account.password_hash)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            account
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - unknown account");
            return Err(AppError::invalid_credentials());
        }
    };

    if !account.is_active {
        return Err(AppError::account_disabled());
    }

    let token = state
        .jwt
        .generate_token(&account)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(
        user_id = account.id,
        email = %account.email,
        role = %account.role,
        "User logged in"
    );

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        user: UserInfo::from(account),
    }))
}

/// Get current user info
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<UserInfo>> {
    let account = user::find_by_id(&state.pool, auth.id)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    Ok(Json(UserInfo::from(account)))
}
