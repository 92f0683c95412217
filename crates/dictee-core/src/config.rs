//! Backend configuration resolved from the environment.

/// Environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Accepted as a fallback for compatibility with Google Cloud tooling.
pub const API_KEY_FALLBACK_ENV_VAR: &str = "GOOGLE_API_KEY";

const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_SPEECH_MODEL: &str = "gemini-2.5-flash-tts";
const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";
const DEFAULT_VOICE: &str = "Aoede";

/// Settings for the Gemini generation backend.
///
/// One API key covers all three capabilities (text, speech, image); the
/// model names and narration voice can be overridden per run through the
/// `DICTEE_*` environment variables.
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub text_model: String,
    pub speech_model: String,
    pub image_model: String,
    pub voice: String,
}

impl GeminiSettings {
    /// Resolve settings from the environment.
    ///
    /// Returns `None` when no API key is set; the caller decides how to
    /// report that to the user.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .or_else(|_| std::env::var(API_KEY_FALLBACK_ENV_VAR))
            .ok()
            .filter(|key| !key.trim().is_empty())?;

        Some(Self {
            api_key,
            text_model: env_or("DICTEE_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            speech_model: env_or("DICTEE_SPEECH_MODEL", DEFAULT_SPEECH_MODEL),
            image_model: env_or("DICTEE_IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
            voice: env_or("DICTEE_VOICE", DEFAULT_VOICE),
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
