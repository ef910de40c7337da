//! Handler for `POST /api/visualize`.
//!
//! Builds the edit instruction, downloads the source photo, runs the
//! vendor cascade, and stores the result. If storing fails the image is
//! returned inline as a data URL so the user still sees their render.

use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::json;

use parcelview_core::visualization::Visualization;
use parcelview_storage::{object_key, GENERATED_PREFIX};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/visualize`.
///
/// Fields are optional at the serde level so a missing one maps to 400
/// rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct VisualizeRequest {
    pub image_url: Option<String>,
    pub kind: Option<serde_json::Value>,
    pub options: Option<serde_json::Value>,
}

/// Response body for a completed visualization.
#[derive(Debug, Serialize)]
pub struct VisualizeResponse {
    pub original_url: String,
    /// Public URL of the stored render, or an inline `data:` URL when
    /// `temporary` is set.
    pub generated_url: String,
    /// True when storage failed and the render was returned inline only.
    pub temporary: bool,
}

/// POST /api/visualize
pub async fn visualize(
    State(state): State<AppState>,
    Json(input): Json<VisualizeRequest>,
) -> AppResult<Json<VisualizeResponse>> {
    let (image_url, kind, options) = match (input.image_url, input.kind, input.options) {
        (Some(url), Some(kind), Some(options)) if !url.trim().is_empty() => (url, kind, options),
        _ => {
            return Err(AppError::BadRequest(
                "Missing required fields: image_url, kind, options".into(),
            ))
        }
    };

    if !image_url.starts_with("http://") && !image_url.starts_with("https://") {
        return Err(AppError::BadRequest(
            "image_url must be an http(s) URL".into(),
        ));
    }

    let visualization: Visualization =
        serde_json::from_value(json!({ "kind": kind, "options": options })).map_err(|e| {
            AppError::BadRequest(format!(
                "Invalid visualization request: {e}. Use kind: paint, fence, roof, or flooring"
            ))
        })?;

    let instruction = visualization.edit_instruction()?;
    tracing::info!(kind = visualization.kind().as_str(), %instruction, "Starting visualization");

    // The primary vendor consumes raw bytes, so fetch the source up front.
    let source_bytes = state
        .http
        .get(&image_url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    tracing::debug!(len = source_bytes.len(), "Source image downloaded");

    let rendered = state
        .generator
        .generate(&source_bytes, &image_url, &instruction)
        .await?;

    let path = object_key(GENERATED_PREFIX, "jpg");
    match state.store.upload(&path, rendered.clone(), "image/jpeg").await {
        Ok(generated_url) => Ok(Json(VisualizeResponse {
            original_url: image_url,
            generated_url,
            temporary: false,
        })),
        Err(err) => {
            // Storage failing should not cost the user their render.
            tracing::warn!(error = %err, "Storing generated image failed, returning inline");
            let data_url = format!("data:image/jpeg;base64,{}", BASE64.encode(&rendered));
            Ok(Json(VisualizeResponse {
                original_url: image_url,
                generated_url: data_url,
                temporary: true,
            }))
        }
    }
}
