//! Client for the hosted InstructPix2Pix inference endpoint.
//!
//! The endpoint performs img2img editing: it takes the source photo and a
//! natural-language instruction and returns the edited image, preserving
//! the original composition.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;

/// Default hosted inference endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/timbrooks/instruct-pix2pix";

/// Errors from the instruction-editing vendor.
#[derive(Debug, thiserror::Error)]
pub enum InstructError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model is cold and still loading (HTTP 503). Retrying later
    /// would succeed, but the caller falls back instead.
    #[error("Model is loading: {0}")]
    ModelLoading(String),

    /// The vendor returned any other non-2xx status.
    #[error("Inference API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for one hosted img2img model.
#[derive(Debug, Clone)]
pub struct InstructClient {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl InstructClient {
    /// Create a client for the default hosted endpoint.
    pub fn new(api_token: String) -> Self {
        Self::with_endpoint(api_token, DEFAULT_ENDPOINT.to_string())
    }

    /// Create a client for a specific endpoint URL (used by tests and
    /// self-hosted deployments).
    pub fn with_endpoint(api_token: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_token,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_token: String, endpoint: String) -> Self {
        Self {
            client,
            endpoint,
            api_token,
        }
    }

    /// Edit `image` according to `instruction`, returning the edited JPEG
    /// bytes.
    ///
    /// `X-Wait-For-Model` asks the vendor to block while a warm instance
    /// spins up; a 503 still escapes when the queue is saturated and is
    /// reported as [`InstructError::ModelLoading`].
    pub async fn edit(
        &self,
        image: &[u8],
        instruction: &str,
    ) -> Result<Vec<u8>, InstructError> {
        let body = json!({
            "inputs": BASE64.encode(image),
            "parameters": {
                "prompt": instruction,
            },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .header("X-Wait-For-Model", "true")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() == 503 {
            let info = response.text().await.unwrap_or_default();
            return Err(InstructError::ModelLoading(info));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InstructError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(len = bytes.len(), "Received edited image");
        Ok(bytes.to_vec())
    }
}
