//! Shared HTTP client for the generation backends.

use std::time::Duration;

use once_cell::sync::Lazy;

use crate::error::AssetError;

/// Default timeout for generation requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Timeout for speech and image generation, which take noticeably longer
/// than text completions.
pub const MEDIA_TIMEOUT_SECS: u64 = 120;

static HTTP_CLIENT: Lazy<Result<reqwest::Client, String>> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .map_err(|e| e.to_string())
});

/// Get the shared reqwest client (one connection pool for all calls).
pub fn get_http_client() -> Result<&'static reqwest::Client, AssetError> {
    HTTP_CLIENT
        .as_ref()
        .map_err(|e| AssetError::Generation(format!("failed to create HTTP client: {e}")))
}
