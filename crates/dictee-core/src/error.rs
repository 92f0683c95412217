//! Error taxonomy for asset generation.
//!
//! Only `SourceNotFound` is fatal to a run. Every other variant is recovered
//! at a stage boundary: the sentence stage substitutes a fallback string and
//! the audio/image stages omit their output from the manifest record.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    /// The backing word list does not exist. There is nothing to process.
    #[error("word list not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// A single external generation call failed: transport error, HTTP error
    /// status, quota, or a malformed/empty payload.
    #[error("generation failed: {0}")]
    Generation(String),

    /// The image service explicitly declined the prompt under its content
    /// policy. Handled like `Generation` except that it specifically drives
    /// the fallback prompt in the illustration stage.
    #[error("prompt declined by content safety filter")]
    SafetyRejection,

    /// Every illustration attempt for the given word failed.
    #[error("all illustration attempts failed for \"{0}\"")]
    AllAttemptsExhausted(String),

    /// Writing an artifact to disk failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapping raw samples in a WAV container failed.
    #[error("wav encoding failed: {0}")]
    Wav(#[from] hound::Error),
}

impl From<reqwest::Error> for AssetError {
    fn from(err: reqwest::Error) -> Self {
        AssetError::Generation(err.to_string())
    }
}
