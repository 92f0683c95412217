//! Shared CLI helpers: configuration resolution and user-facing errors.

use anyhow::Result;
use dictee_core::GeminiSettings;
use dictee_core::config::{API_KEY_ENV_VAR, API_KEY_FALLBACK_ENV_VAR};

/// Load `.env` (if present) and resolve backend settings, with an
/// actionable message when the API key is missing.
pub fn load_settings() -> Result<GeminiSettings> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    match GeminiSettings::from_env() {
        Some(settings) => Ok(settings),
        None => anyhow::bail!(
            "No API key configured.\n\n\
             Set your key with:\n  export {API_KEY_ENV_VAR}=YOUR_KEY\n\n\
             ({API_KEY_FALLBACK_ENV_VAR} is accepted as a fallback, and both \
             can live in a .env file in the working directory.)"
        ),
    }
}
