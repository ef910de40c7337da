//! Handler for `GET /api/config`.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// The keys the browser needs to bootstrap its vendor SDKs.
///
/// Only publishable values belong here; the service-role key and vendor
/// API tokens must never be exposed.
#[derive(Debug, Serialize)]
pub struct ClientConfig {
    pub maps_api_key: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

/// GET /api/config
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(ClientConfig {
        maps_api_key: state.config.maps_api_key.clone(),
        supabase_url: state.config.supabase_url.clone(),
        supabase_anon_key: state.config.supabase_anon_key.clone(),
    })
}
