//! Authentication API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

/// Auth router; `/auth/login` is public, `/auth/me` requires a token
pub fn router() -> Router<AppState> {
    Router::new().nest("/auth", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/me", get(handler::me))
}
