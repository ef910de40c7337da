//! HTTP client for the object-storage vendor.
//!
//! Uploaded photos and generated renders live in a single public bucket on
//! a Supabase-Storage-compatible service. Objects are written with the
//! service-role key; reads go through the public URL, so the browser never
//! needs credentials.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Bucket object keys for uploaded source photos.
pub const UPLOADS_PREFIX: &str = "uploads";

/// Bucket object keys for generated renders.
pub const GENERATED_PREFIX: &str = "generated";

/// Errors from the object-storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage service returned a non-2xx status code.
    #[error("Storage API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Client for one bucket on the storage service.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

impl ObjectStore {
    /// Create a client for a bucket.
    ///
    /// * `base_url`    - Project base URL, e.g. `https://xyz.supabase.co`.
    /// * `bucket`      - Bucket name, e.g. `visualizer-images`.
    /// * `service_key` - Service-role key used for writes.
    pub fn new(base_url: String, bucket: String, service_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket,
            service_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        bucket: String,
        service_key: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket,
            service_key,
        }
    }

    /// Upload an object and return its public URL.
    ///
    /// Fails if an object already exists at `path` (no upsert).
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(path, "Stored object");
        Ok(self.public_url(path))
    }

    /// Public (unauthenticated) URL for an object in the bucket.
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}

/// Generate a collision-resistant object key: `{prefix}/{millis}-{suffix}.{ext}`.
pub fn object_key(prefix: &str, extension: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(6)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("{prefix}/{millis}-{suffix}.{extension}")
}

/// File extension for an image mime type (`image/jpeg` -> `jpeg`).
pub fn extension_for_mime(mime: &str) -> &str {
    mime.rsplit('/').next().unwrap_or("bin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_shape() {
        let store = ObjectStore::new(
            "https://proj.supabase.co/".into(),
            "visualizer-images".into(),
            "key".into(),
        );
        assert_eq!(
            store.public_url("uploads/123-abc.jpeg"),
            "https://proj.supabase.co/storage/v1/object/public/visualizer-images/uploads/123-abc.jpeg"
        );
    }

    #[test]
    fn object_keys_are_unique_and_prefixed() {
        let a = object_key(UPLOADS_PREFIX, "png");
        let b = object_key(UPLOADS_PREFIX, "png");
        assert!(a.starts_with("uploads/"));
        assert!(a.ends_with(".png"));
        assert_ne!(a, b);
    }

    #[test]
    fn extension_from_mime() {
        assert_eq!(extension_for_mime("image/jpeg"), "jpeg");
        assert_eq!(extension_for_mime("image/png"), "png");
        assert_eq!(extension_for_mime("weird"), "weird");
    }
}
