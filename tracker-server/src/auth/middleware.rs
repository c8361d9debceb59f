//! Authentication middleware
//!
//! The authentication gate for every protected route: token validation
//! followed by an account lookup, so revoked or disabled accounts are
//! locked out even while their tokens are still signed and unexpired.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::AppError;
use shared::error::ErrorCode;
use shared::models::User;

use crate::auth::{JwtError, JwtService};
use crate::core::AppState;
use crate::db::repository::user;
use crate::security_log;

/// Route prefixes that require authentication
const PROTECTED_PREFIXES: &[&str] = &["/auth", "/users", "/employees", "/goals", "/reviews"];

/// Authenticated caller context, built from a valid token plus the
/// account row it resolves to
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub employee_id: Option<i64>,
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
            employee_id: user.employee_id,
        }
    }
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Resolve the caller from the `Authorization` header.
///
/// # Errors
///
/// | Failure | Status |
/// |---------|--------|
/// | Header missing or token malformed | 401 |
/// | Signature invalid or token expired | 401 |
/// | Account no longer exists | 401 |
/// | Account disabled | 403 |
pub async fn authenticate(
    state: &AppState,
    headers: &http::HeaderMap,
) -> Result<AuthUser, AppError> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(header) = auth_header else {
        return Err(AppError::unauthorized());
    };

    let token = JwtService::extract_from_header(header);

    let claims = state.jwt.validate_token(token).map_err(|e| match e {
        JwtError::ExpiredToken => AppError::token_expired(),
        _ => AppError::invalid_token("Invalid token"),
    })?;

    // The token only proves who the caller was at issue time; the account
    // row decides whether they are still welcome.
    let account = user::find_by_id(&state.pool, claims.user_id)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    if !account.is_active {
        return Err(AppError::account_disabled());
    }

    Ok(AuthUser::from(&account))
}

/// Authentication middleware - requires a logged-in caller
///
/// Skipped for CORS preflight requests, the public routes
/// (`GET /`, `GET /health`, `POST /auth/login`) and anything outside the
/// API surface (those fall through to the 404 handler).
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if path == "/" || path == "/health" || path == "/auth/login" {
        return Ok(next.run(req).await);
    }

    let is_protected = PROTECTED_PREFIXES
        .iter()
        .any(|p| path == *p || path.strip_prefix(*p).is_some_and(|rest| rest.starts_with('/')));
    if !is_protected {
        return Ok(next.run(req).await);
    }

    match authenticate(&state, req.headers()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = e.to_string(),
                path = req.uri().path(),
            );
            Err(e)
        }
    }
}

/// Admin middleware - requires the admin role
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(AppError::unauthorized)?;

    if !user.is_admin() {
        security_log!(
            "WARN",
            "admin_required",
            user_id = user.id,
            role = user.role.as_str(),
        );
        return Err(AppError::new(ErrorCode::AdminRequired));
    }

    Ok(next.run(req).await)
}
