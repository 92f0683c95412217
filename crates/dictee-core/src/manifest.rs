//! Manifest records and aggregation.
//!
//! Absent assets are omitted from the JSON entirely rather than serialized
//! as null, so the dictation app can treat field presence as asset
//! availability.

use serde::{Deserialize, Serialize};

/// Everything generated for one word. Assembled once by the pipeline and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAssetRecord {
    pub id: String,
    pub text: String,
    pub sentence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The aggregated output of one full generation run.
///
/// A new run's manifest fully replaces the previous one; there is no
/// incremental merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub generated_at: String,
    pub words: Vec<WordAssetRecord>,
}

impl Manifest {
    /// Aggregate records in the order received, stamped with the current
    /// time.
    pub fn build(words: Vec<WordAssetRecord>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            words,
        }
    }

    /// Serialize for persistence (pretty-printed, full replacement).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str) -> WordAssetRecord {
        WordAssetRecord {
            id: word.to_string(),
            text: word.to_string(),
            sentence: format!("Le mot est {word}."),
            audio_word: None,
            audio_sentence: None,
            image: None,
        }
    }

    #[test]
    fn test_build_preserves_record_order() {
        let manifest = Manifest::build(vec![record("chat"), record("chien"), record("lune")]);

        let ids: Vec<&str> = manifest.words.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["chat", "chien", "lune"]);
    }

    #[test]
    fn test_generated_at_is_rfc3339() {
        let manifest = Manifest::build(vec![]);
        assert!(chrono::DateTime::parse_from_rfc3339(&manifest.generated_at).is_ok());
    }

    #[test]
    fn test_absent_assets_are_omitted_not_null() {
        let manifest = Manifest::build(vec![record("xyz")]);
        let json = manifest.to_json().unwrap();

        assert!(json.contains("\"id\": \"xyz\""));
        assert!(!json.contains("audioWord"));
        assert!(!json.contains("audioSentence"));
        assert!(!json.contains("\"image\""));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_present_assets_use_camel_case_keys() {
        let mut full = record("pomme");
        full.audio_word = Some("/audio/pomme_word.wav".to_string());
        full.audio_sentence = Some("/audio/pomme_sentence.wav".to_string());
        full.image = Some("/images/pomme.png".to_string());

        let json = Manifest::build(vec![full]).to_json().unwrap();
        assert!(json.contains("\"audioWord\": \"/audio/pomme_word.wav\""));
        assert!(json.contains("\"audioSentence\": \"/audio/pomme_sentence.wav\""));
        assert!(json.contains("\"image\": \"/images/pomme.png\""));
        assert!(json.contains("\"generatedAt\""));
    }

    #[test]
    fn test_round_trips_through_json() {
        let manifest = Manifest {
            generated_at: "2026-08-07T10:00:00+00:00".to_string(),
            words: vec![record("chat")],
        };

        let parsed: Manifest = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(parsed, manifest);
    }
}
