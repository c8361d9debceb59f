//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

/// Employee router; visibility and mutation rules live in `auth::scope`
pub fn router() -> Router<AppState> {
    Router::new().nest("/employees", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
