//! Assignment handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Assignment routes (all behind the auth middleware)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_assignment))
        .route("/", get(handler::assignment_feed))
        .route("/{id}", put(handler::update_assignment))
        .route("/{id}", delete(handler::delete_assignment))
        .route("/{id}", get(handler::get_assignment))
        .route("/{id}/submit", post(handler::submit))
}
