//! Audio narration generation and WAV packaging.
//!
//! The speech backend returns raw PCM samples; wrapping them in a WAV
//! container is a pure header transform using the backend-reported format.
//! No resampling or transcoding happens here.

use std::path::Path;

use crate::backend::{RawAudio, SpeechSynthesis};
use crate::error::AssetError;

/// Speaking rate for a narration clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakingRate {
    /// Natural pace, used for full sentences.
    Normal,
    /// Deliberately slow, used only for isolated word pronunciation.
    Slow,
}

pub struct NarrationGenerator<'a> {
    backend: &'a dyn SpeechSynthesis,
}

impl<'a> NarrationGenerator<'a> {
    pub fn new(backend: &'a dyn SpeechSynthesis) -> Self {
        Self { backend }
    }

    /// Synthesize `text` at `rate` and write one playable WAV file to `dest`.
    pub async fn narrate(
        &self,
        text: &str,
        rate: SpeakingRate,
        dest: &Path,
    ) -> Result<(), AssetError> {
        let audio = self.backend.synthesize(&build_prompt(text, rate)).await?;
        validate(&audio)?;
        write_wav(&audio, dest)
    }
}

/// Embed the speaking style in the request text.
///
/// The backend has no numeric rate parameter; pacing is steered in natural
/// language, matching the narration voice.
fn build_prompt(text: &str, rate: SpeakingRate) -> String {
    match rate {
        SpeakingRate::Slow => format!("Dites d'une voix féminine lentement : {text}"),
        SpeakingRate::Normal => format!("Dites d'une voix féminine : {text}"),
    }
}

fn validate(audio: &RawAudio) -> Result<(), AssetError> {
    if audio.data.is_empty() {
        return Err(AssetError::Generation("empty audio payload".to_string()));
    }
    if audio.bits_per_sample != 16 {
        return Err(AssetError::Generation(format!(
            "unsupported sample width: {} bits",
            audio.bits_per_sample
        )));
    }
    if audio.data.len() % 2 != 0 {
        return Err(AssetError::Generation(format!(
            "audio payload length {} is not a whole number of 16-bit samples",
            audio.data.len()
        )));
    }
    Ok(())
}

/// Wrap the raw sample stream in a WAV container, using the format the
/// backend reported verbatim.
fn write_wav(audio: &RawAudio, dest: &Path) -> Result<(), AssetError> {
    let spec = hound::WavSpec {
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: audio.bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(dest, spec)?;
    for sample in audio.data.chunks_exact(2) {
        writer.write_sample(i16::from_le_bytes([sample[0], sample[1]]))?;
    }
    writer.finalize()?;
    Ok(())
}
