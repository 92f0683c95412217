//! Google Generative Language API backend (Gemini text and speech, Imagen
//! images).
//!
//! All three capabilities share one API key, sent in the `x-goog-api-key`
//! header. Text and speech go through `:generateContent`; images go through
//! the Imagen `:predict` endpoint, which reports a content-policy decline as
//! an empty predictions list rather than an HTTP error.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

use super::{ImageGeneration, RawAudio, SpeechSynthesis, TextGeneration};
use crate::config::GeminiSettings;
use crate::error::AssetError;
use crate::http::{MEDIA_TIMEOUT_SECS, get_http_client};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini speech output is s16le mono PCM; the response MIME type carries
/// the actual rate, this is the documented default.
const DEFAULT_SPEECH_SAMPLE_RATE: u32 = 24_000;

/// Backend implementing all three generation capabilities.
pub struct GeminiBackend {
    settings: GeminiSettings,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(settings: GeminiSettings) -> Self {
        Self {
            settings,
            base_url: API_BASE_URL.to_string(),
        }
    }

    fn generate_content_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    fn predict_url(&self, model: &str) -> String {
        format!("{}/models/{}:predict", self.base_url, model)
    }
}

// Response structures (only the fields we consume).

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    rai_filtered_reason: Option<String>,
}

/// Check the HTTP status and deserialize the response body.
async fn check_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AssetError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(AssetError::Generation(format!(
            "API error ({status}): {error_text}"
        )));
    }

    let text = response.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| AssetError::Generation(format!("malformed API response: {e}")))
}

/// Extract the sample rate from a MIME type like
/// `audio/L16;codec=pcm;rate=24000`.
fn sample_rate_from_mime(mime_type: &str) -> u32 {
    mime_type
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("rate="))
        .find_map(|rate| rate.parse().ok())
        .unwrap_or(DEFAULT_SPEECH_SAMPLE_RATE)
}

#[async_trait]
impl TextGeneration for GeminiBackend {
    async fn generate_text(&self, prompt: &str) -> Result<String, AssetError> {
        let client = get_http_client()?;
        let response = client
            .post(self.generate_content_url(&self.settings.text_model))
            .header("x-goog-api-key", self.settings.api_key.as_str())
            .json(&serde_json::json!({
                "contents": [{"parts": [{"text": prompt}]}]
            }))
            .send()
            .await?;

        let body: GenerateContentResponse = check_json(response).await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AssetError::Generation("empty text response".to_string()))
    }
}

#[async_trait]
impl SpeechSynthesis for GeminiBackend {
    async fn synthesize(&self, prompt: &str) -> Result<RawAudio, AssetError> {
        let client = get_http_client()?;
        let response = client
            .post(self.generate_content_url(&self.settings.speech_model))
            .header("x-goog-api-key", self.settings.api_key.as_str())
            .timeout(Duration::from_secs(MEDIA_TIMEOUT_SECS))
            .json(&serde_json::json!({
                "contents": [{"parts": [{"text": prompt}]}],
                "generationConfig": {
                    "responseModalities": ["AUDIO"],
                    "speechConfig": {
                        "voiceConfig": {
                            "prebuiltVoiceConfig": {"voiceName": self.settings.voice}
                        }
                    }
                }
            }))
            .send()
            .await?;

        let body: GenerateContentResponse = check_json(response).await?;
        let inline = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.inline_data))
            .ok_or_else(|| AssetError::Generation("no audio payload in response".to_string()))?;

        let data = BASE64
            .decode(inline.data.as_bytes())
            .map_err(|e| AssetError::Generation(format!("invalid base64 audio payload: {e}")))?;

        Ok(RawAudio {
            data,
            sample_rate: sample_rate_from_mime(&inline.mime_type),
            channels: 1,
            bits_per_sample: 16,
        })
    }
}

#[async_trait]
impl ImageGeneration for GeminiBackend {
    async fn render(&self, prompt: &str) -> Result<Vec<u8>, AssetError> {
        let client = get_http_client()?;
        let response = client
            .post(self.predict_url(&self.settings.image_model))
            .header("x-goog-api-key", self.settings.api_key.as_str())
            .timeout(Duration::from_secs(MEDIA_TIMEOUT_SECS))
            .json(&serde_json::json!({
                "instances": [{"prompt": prompt}],
                "parameters": {
                    "sampleCount": 1,
                    "aspectRatio": "1:1",
                    "personGeneration": "allow_all",
                    "safetySetting": "block_only_high"
                }
            }))
            .send()
            .await?;

        let body: PredictResponse = check_json(response).await?;
        let Some(prediction) = body.predictions.into_iter().next() else {
            // Imagen reports a policy decline as an empty predictions list.
            return Err(AssetError::SafetyRejection);
        };

        match prediction.bytes_base64_encoded {
            Some(encoded) => BASE64
                .decode(encoded.as_bytes())
                .map_err(|e| AssetError::Generation(format!("invalid base64 image payload: {e}"))),
            None => {
                if let Some(reason) = prediction.rai_filtered_reason {
                    crate::verbose!("image prompt filtered: {reason}");
                }
                Err(AssetError::SafetyRejection)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rate_from_mime() {
        assert_eq!(sample_rate_from_mime("audio/L16;codec=pcm;rate=24000"), 24_000);
        assert_eq!(sample_rate_from_mime("audio/L16; rate=16000"), 16_000);
        assert_eq!(sample_rate_from_mime("audio/L16"), DEFAULT_SPEECH_SAMPLE_RATE);
        assert_eq!(sample_rate_from_mime("audio/L16;rate=abc"), DEFAULT_SPEECH_SAMPLE_RATE);
    }

    #[test]
    fn test_deserialize_text_response() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Le chat dort sur le lit."}]}}
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text = response.candidates[0]
            .content
            .as_ref()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref());
        assert_eq!(text, Some("Le chat dort sur le lit."));
    }

    #[test]
    fn test_deserialize_audio_response() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [
                    {"inlineData": {"mimeType": "audio/L16;codec=pcm;rate=24000", "data": "AAA="}}
                ]}}
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let inline = response.candidates[0]
            .content
            .as_ref()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.inline_data.as_ref())
            .unwrap();
        assert_eq!(inline.mime_type, "audio/L16;codec=pcm;rate=24000");
        assert_eq!(inline.data, "AAA=");
    }

    #[test]
    fn test_deserialize_filtered_prediction() {
        let json = r#"{
            "predictions": [
                {"raiFilteredReason": "Rejected by Responsible AI practices."}
            ]
        }"#;

        let response: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(response.predictions[0].bytes_base64_encoded.is_none());
        assert!(response.predictions[0].rai_filtered_reason.is_some());
    }

    #[test]
    fn test_deserialize_empty_predictions() {
        let response: PredictResponse = serde_json::from_str("{}").unwrap();
        assert!(response.predictions.is_empty());
    }
}
