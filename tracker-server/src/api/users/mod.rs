//! User Account API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::AppState;

/// User account router - admin only
pub fn router() -> Router<AppState> {
    Router::new().nest("/users", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .layer(middleware::from_fn(require_admin))
}
