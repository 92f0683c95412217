//! Capability interfaces over the external generation services.
//!
//! The pipeline only ever talks to these three narrow traits, so the real
//! backend can be swapped for deterministic in-memory fakes in tests without
//! touching any pipeline logic.

mod gemini;

pub use gemini::GeminiBackend;

use async_trait::async_trait;

use crate::error::AssetError;

/// Raw PCM audio returned by a speech backend, together with the format the
/// backend reported for it.
///
/// The WAV wrap must use these values verbatim; anything else makes the file
/// play at the wrong pitch and speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAudio {
    /// Interleaved little-endian samples.
    pub data: Vec<u8>,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

/// Text generation capability (word → sentence).
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Generate a single short completion for `prompt`.
    async fn generate_text(&self, prompt: &str) -> Result<String, AssetError>;
}

/// Speech synthesis capability (text + style instruction → raw samples).
#[async_trait]
pub trait SpeechSynthesis: Send + Sync {
    /// Synthesize `prompt` (including any embedded speaking-style
    /// instruction) into raw PCM samples.
    async fn synthesize(&self, prompt: &str) -> Result<RawAudio, AssetError>;
}

/// Image generation capability (prompt → encoded image).
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    /// Render `prompt` to encoded image bytes.
    ///
    /// Fails with `AssetError::SafetyRejection` when the service explicitly
    /// declines the prompt, as opposed to failing to answer at all.
    async fn render(&self, prompt: &str) -> Result<Vec<u8>, AssetError>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted in-memory backends for generator and pipeline tests.
    //!
    //! Each mock consumes one scripted outcome per call and records the
    //! prompt it was given, so tests can assert both the degradation
    //! behavior and the exact text each stage sent out.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    fn exhausted() -> AssetError {
        AssetError::Generation("mock: no scripted response left".to_string())
    }

    pub(crate) fn gen_err() -> AssetError {
        AssetError::Generation("mock: backend unavailable".to_string())
    }

    pub(crate) struct MockText {
        responses: Mutex<VecDeque<Result<String, AssetError>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl MockText {
        pub fn with(responses: Vec<Result<String, AssetError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn ok(sentence: &str) -> Self {
            Self::with(vec![Ok(sentence.to_string())])
        }

        pub fn failing() -> Self {
            Self::with(vec![Err(gen_err())])
        }
    }

    #[async_trait]
    impl TextGeneration for MockText {
        async fn generate_text(&self, prompt: &str) -> Result<String, AssetError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(exhausted()))
        }
    }

    pub(crate) struct MockSpeech {
        responses: Mutex<VecDeque<Result<RawAudio, AssetError>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl MockSpeech {
        pub fn with(responses: Vec<Result<RawAudio, AssetError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        /// Succeed for `calls` consecutive calls with a small fixed clip.
        pub fn ok(calls: usize) -> Self {
            Self::with((0..calls).map(|_| Ok(sample_audio())).collect())
        }

        pub fn failing(calls: usize) -> Self {
            Self::with((0..calls).map(|_| Err(gen_err())).collect())
        }
    }

    #[async_trait]
    impl SpeechSynthesis for MockSpeech {
        async fn synthesize(&self, prompt: &str) -> Result<RawAudio, AssetError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(exhausted()))
        }
    }

    pub(crate) struct MockImage {
        responses: Mutex<VecDeque<Result<Vec<u8>, AssetError>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl MockImage {
        pub fn with(responses: Vec<Result<Vec<u8>, AssetError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn ok() -> Self {
            Self::with(vec![Ok(sample_image())])
        }

        pub fn failing(calls: usize) -> Self {
            Self::with((0..calls).map(|_| Err(gen_err())).collect())
        }
    }

    #[async_trait]
    impl ImageGeneration for MockImage {
        async fn render(&self, prompt: &str) -> Result<Vec<u8>, AssetError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(exhausted()))
        }
    }

    /// Four s16le samples of 24kHz mono, the backend's native format.
    pub(crate) fn sample_audio() -> RawAudio {
        RawAudio {
            data: vec![0x00, 0x00, 0xff, 0x7f, 0x00, 0x80, 0x01, 0x00],
            sample_rate: 24_000,
            channels: 1,
            bits_per_sample: 16,
        }
    }

    pub(crate) fn sample_image() -> Vec<u8> {
        b"\x89PNG\r\n\x1a\n".to_vec()
    }
}
