//! Route definitions for the visualizer resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::{upload, visualize};
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the image itself.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Visualizer routes.
///
/// ```text
/// POST /upload-image  -> store photo (multipart)
/// POST /visualize     -> generate render
/// ```
///
/// The body limit covers the 10 MiB image plus multipart framing; the
/// handler enforces the exact image-size limit.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload-image", post(upload::upload_image))
        .route("/visualize", post(visualize::visualize))
        .layer(DefaultBodyLimit::max(
            upload::MAX_IMAGE_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
}
