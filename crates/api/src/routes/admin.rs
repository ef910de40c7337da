//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require the admin service token.
///
/// ```text
/// GET    /users               -> list
/// POST   /users/{id}/approve  -> approve
/// DELETE /users/{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/{id}/approve", post(users::approve_user))
        .route("/users/{id}", delete(users::delete_user))
}
