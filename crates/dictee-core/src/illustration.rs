//! Illustration generation with an ordered prompt fallback.
//!
//! Depicting a whole sentence trips content filters more often than
//! depicting a single object, so attempts run from the richest prompt to
//! the simplest and stop at the first accepted one. Each attempt is
//! independent; nothing carries over between them.

use crate::backend::ImageGeneration;
use crate::error::AssetError;

/// Which prompt produced the accepted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRank {
    /// Scene prompt derived from the full sentence.
    Primary,
    /// Object prompt derived from the bare word.
    Fallback,
}

pub struct IllustrationGenerator<'a> {
    backend: &'a dyn ImageGeneration,
}

impl<'a> IllustrationGenerator<'a> {
    pub fn new(backend: &'a dyn ImageGeneration) -> Self {
        Self { backend }
    }

    /// Render an image for `sentence`, retrying once with a simpler prompt
    /// derived from `word` alone when the first attempt is declined or
    /// errors.
    ///
    /// Fails with `AllAttemptsExhausted` only after every attempt failed;
    /// the caller is expected to continue without an image.
    pub async fn illustrate(
        &self,
        sentence: &str,
        word: &str,
    ) -> Result<(PromptRank, Vec<u8>), AssetError> {
        let attempts = [
            (PromptRank::Primary, scene_prompt(sentence)),
            (PromptRank::Fallback, object_prompt(word)),
        ];

        for (rank, prompt) in attempts {
            match self.backend.render(&prompt).await {
                Ok(bytes) => return Ok((rank, bytes)),
                Err(AssetError::SafetyRejection) => {
                    crate::verbose!("illustration prompt declined ({rank:?})");
                }
                Err(err) => {
                    crate::verbose!("illustration attempt failed ({rank:?}): {err}");
                }
            }
        }

        Err(AssetError::AllAttemptsExhausted(word.to_string()))
    }
}

fn scene_prompt(sentence: &str) -> String {
    format!(
        "A whimsical, child-friendly cartoon illustration of: {sentence}. \
         Bright colors, simple shapes. The image should be representative of \
         the sentence and not include the sentence text. Image only."
    )
}

fn object_prompt(word: &str) -> String {
    format!(
        "A simple, cheerful drawing of the object: {word}. High quality 2D \
         art. The image should be representative of the word and not include \
         the word text. Image only."
    )
}
