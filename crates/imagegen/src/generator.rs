//! The vendor cascade: primary img2img edit, one fallback attempt.

use crate::instruct::{InstructClient, InstructError};
use crate::openai::{OpenAiClient, OpenAiError};

/// Errors from the generation cascade.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Both vendors failed; carries both causes for the log.
    #[error("Image generation failed: primary: {primary}; fallback: {fallback}")]
    BothFailed {
        primary: InstructError,
        fallback: OpenAiError,
    },

    /// The fallback rendered an image but downloading it failed.
    #[error("Failed to download generated image: {0}")]
    Download(#[from] reqwest::Error),
}

/// What went wrong inside the fallback path.
enum FallbackError {
    OpenAi(OpenAiError),
    Download(reqwest::Error),
}

/// Runs a visualization through the vendor cascade.
///
/// Policy (deliberately minimal): try the primary once; on any failure try
/// the fallback once. No retries, no backoff.
#[derive(Debug, Clone)]
pub struct Generator {
    instruct: InstructClient,
    openai: OpenAiClient,
    client: reqwest::Client,
}

impl Generator {
    pub fn new(instruct: InstructClient, openai: OpenAiClient) -> Self {
        Self {
            instruct,
            openai,
            client: reqwest::Client::new(),
        }
    }

    /// Generate the edited image, returning JPEG bytes.
    ///
    /// * `image_bytes` - the source photo, already downloaded (the primary
    ///   vendor consumes bytes).
    /// * `image_url`   - public URL of the source photo (the fallback's
    ///   vision model consumes a URL).
    /// * `instruction` - the natural-language edit instruction.
    pub async fn generate(
        &self,
        image_bytes: &[u8],
        image_url: &str,
        instruction: &str,
    ) -> Result<Vec<u8>, GenerateError> {
        let primary_err = match self.instruct.edit(image_bytes, instruction).await {
            Ok(bytes) => {
                tracing::info!(len = bytes.len(), "Primary vendor produced an edit");
                return Ok(bytes);
            }
            Err(err) => err,
        };

        tracing::warn!(error = %primary_err, "Primary vendor failed, falling back to OpenAI");

        match self.fallback(image_url, instruction).await {
            Ok(bytes) => {
                tracing::info!(len = bytes.len(), "Fallback vendor produced an image");
                Ok(bytes)
            }
            Err(FallbackError::OpenAi(fallback)) => Err(GenerateError::BothFailed {
                primary: primary_err,
                fallback,
            }),
            Err(FallbackError::Download(e)) => Err(GenerateError::Download(e)),
        }
    }

    /// Describe the source photo, then render the description with the
    /// modification applied.
    async fn fallback(
        &self,
        image_url: &str,
        instruction: &str,
    ) -> Result<Vec<u8>, FallbackError> {
        let description = self
            .openai
            .describe_image(image_url)
            .await
            .map_err(FallbackError::OpenAi)?;

        let prompt = build_fallback_prompt(&description, instruction);

        let generated_url = self
            .openai
            .generate_image(&prompt)
            .await
            .map_err(FallbackError::OpenAi)?;

        let download = async {
            self.client
                .get(&generated_url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await
        };

        download
            .await
            .map(|b| b.to_vec())
            .map_err(FallbackError::Download)
    }
}

/// Fold the scene description and the edit instruction into one DALL-E
/// prompt that pins everything except the requested change.
fn build_fallback_prompt(description: &str, instruction: &str) -> String {
    format!(
        "Photorealistic image: {description}\n\nIMPORTANT MODIFICATION: {instruction}. \
         Keep EVERYTHING else exactly the same - same house, same angle, same \
         composition, same lighting."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_prompt_contains_description_and_instruction() {
        let prompt = build_fallback_prompt(
            "A two-story craftsman with gray siding",
            "Add a cedar privacy fence",
        );
        assert!(prompt.starts_with("Photorealistic image: A two-story craftsman"));
        assert!(prompt.contains("IMPORTANT MODIFICATION: Add a cedar privacy fence"));
        assert!(prompt.contains("Keep EVERYTHING else exactly the same"));
    }
}
