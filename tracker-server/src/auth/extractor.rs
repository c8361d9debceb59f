//! Auth extractor
//!
//! Lets protected handlers take an [`AuthUser`] argument directly. The
//! middleware normally puts the caller into the request extensions; when a
//! route is wired without it, the extractor runs the full gate itself.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::middleware::{AuthUser, authenticate};
use crate::core::AppState;

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = shared::AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let user = authenticate(state, &parts.headers).await?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
