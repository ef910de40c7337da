pub mod admin;
pub mod health;
pub mod visualizer;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /config                        browser bootstrap config (GET)
/// /geocode?address=              geocoding vendor proxy (GET)
/// /signup                        create pending user (POST)
/// /measure                       server-side shape measurement (POST)
///
/// /admin/users                   list users (GET, admin token)
/// /admin/users/{id}/approve      approve user (POST, admin token)
/// /admin/users/{id}              delete user (DELETE, admin token)
///
/// /upload-image                  store a photo (POST, multipart)
/// /visualize                     generate an AI render (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/config", get(handlers::client_config::client_config))
        .route("/geocode", get(handlers::geocode::geocode))
        .route("/signup", post(handlers::users::signup))
        .route("/measure", post(handlers::measure::measure))
        // Admin routes (user management).
        .nest("/admin", admin::router())
        // Visualizer routes (upload + generation).
        .merge(visualizer::router())
}
