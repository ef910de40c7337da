//! Handler for `GET /api/geocode`.
//!
//! Proxies the geocoding vendor so the browser never sees the API key,
//! returning the vendor JSON verbatim.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Geocoding vendor REST endpoint.
const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    pub address: Option<String>,
}

/// GET /api/geocode?address=
pub async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> AppResult<Json<serde_json::Value>> {
    let address = params
        .address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::BadRequest("Address is required".into()))?;

    let response = state
        .http
        .get(GEOCODE_ENDPOINT)
        .query(&[("address", address), ("key", state.config.maps_api_key.as_str())])
        .send()
        .await?
        .error_for_status()?;

    // Vendor payload is passed through untouched; the browser reads
    // `results[0].geometry.location` itself.
    let body: serde_json::Value = response.json().await?;
    Ok(Json(body))
}
