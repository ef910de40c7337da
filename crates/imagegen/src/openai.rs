//! OpenAI fallback client: describe the photo, then regenerate it with the
//! requested modification.
//!
//! InstructPix2Pix edits the actual pixels; DALL-E cannot, so the fallback
//! approximates img2img by having a vision model describe every visual
//! element and folding that description into the generation prompt.

use serde::Deserialize;
use serde_json::json;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Vision model used to describe the source photo.
const DESCRIBE_MODEL: &str = "gpt-4o";

/// Image model used to render the modified scene.
const GENERATE_MODEL: &str = "dall-e-3";

/// Token budget for the description.
const DESCRIBE_MAX_TOKENS: u32 = 1000;

/// Prompt asking the vision model for a render-ready description.
const DESCRIBE_PROMPT: &str = "Describe this house/property image in extreme detail - \
architecture style, exact colors of walls/roof/trim, materials, windows, doors, \
landscaping, driveway, sky, lighting, camera angle. Be very specific about every \
visual element.";

/// Errors from the OpenAI vendor.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor returned a non-2xx status code.
    #[error("OpenAI API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The vendor response parsed but was missing the expected content.
    #[error("Unexpected OpenAI response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

/// HTTP client for the OpenAI REST API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a specific base URL (used by tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Describe the photo at `image_url` in render-ready detail.
    pub async fn describe_image(&self, image_url: &str) -> Result<String, OpenAiError> {
        let body = json!({
            "model": DESCRIBE_MODEL,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": DESCRIBE_PROMPT },
                    { "type": "image_url", "image_url": { "url": image_url } },
                ],
            }],
            "max_tokens": DESCRIBE_MAX_TOKENS,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: ChatResponse = Self::parse_response(response).await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| OpenAiError::MalformedResponse("no chat completion content".into()))
    }

    /// Render `prompt` with DALL-E, returning the hosted image URL.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, OpenAiError> {
        let body = json!({
            "model": GENERATE_MODEL,
            "prompt": prompt,
            "n": 1,
            "size": "1024x1024",
            "quality": "hd",
            "style": "natural",
        });

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: ImageResponse = Self::parse_response(response).await?;
        parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or_else(|| OpenAiError::MalformedResponse("no generated image url".into()))
    }

    /// Check the status code and deserialize a JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OpenAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
