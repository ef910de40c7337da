//! Admin service-token extractor.
//!
//! End-user authentication lives with the managed auth vendor; this server
//! only guards its admin surface with a shared service token. The provided
//! and expected tokens are compared as SHA-256 digests so the comparison
//! width never depends on the secret.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sha2::{Digest, Sha256};

use parcelview_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Requires the admin service token as a `Bearer` credential.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     // the caller presented the admin token
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if !token_matches(token, &state.config.admin_token) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin token required".into(),
            )));
        }

        Ok(RequireAdmin)
    }
}

/// Compare a presented token against the configured one by SHA-256 digest.
fn token_matches(provided: &str, expected: &str) -> bool {
    Sha256::digest(provided.as_bytes()) == Sha256::digest(expected.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_tokens_accepted() {
        assert!(token_matches("secret-token", "secret-token"));
    }

    #[test]
    fn mismatched_tokens_rejected() {
        assert!(!token_matches("secret-token", "other-token"));
        assert!(!token_matches("", "secret-token"));
    }
}
