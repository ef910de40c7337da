use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: parcelview_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object-storage bucket client.
    pub store: parcelview_storage::ObjectStore,
    /// Generative-image vendor cascade.
    pub generator: parcelview_imagegen::Generator,
    /// Plain HTTP client for the geocode proxy and source-image downloads.
    pub http: reqwest::Client,
}
