//! Handler for `POST /api/upload-image`.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use parcelview_storage::{extension_for_mime, object_key, UPLOADS_PREFIX};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Maximum accepted image size (10 MiB).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Response body for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL of the stored object.
    pub url: String,
    /// Bucket-relative object key.
    pub path: String,
}

/// POST /api/upload-image
///
/// Accepts a multipart form with a required `image` field. Only `image/*`
/// mime types are accepted, at most [`MAX_IMAGE_BYTES`]. The bytes are
/// written to object storage and the public URL returned.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != "image" {
            continue; // ignore unknown fields
        }

        let content_type = field.content_type().unwrap_or("").to_string();
        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(
                "Only image files are allowed".into(),
            ));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        image = Some((content_type, data.to_vec()));
    }

    let (content_type, data) =
        image.ok_or_else(|| AppError::BadRequest("No image file provided".into()))?;

    if data.is_empty() {
        return Err(AppError::BadRequest("Image file is empty".into()));
    }
    if data.len() > MAX_IMAGE_BYTES {
        return Err(AppError::BadRequest(format!(
            "Image exceeds the {} MB limit",
            MAX_IMAGE_BYTES / (1024 * 1024)
        )));
    }

    let path = object_key(UPLOADS_PREFIX, extension_for_mime(&content_type));
    let url = state.store.upload(&path, data, &content_type).await?;

    tracing::info!(%path, "Image uploaded");
    Ok(Json(UploadResponse { url, path }))
}
