//! Per-word asset pipeline.
//!
//! Stages run in a fixed order (sentence, word narration, sentence
//! narration, illustration) and every failure degrades instead of
//! aborting: the sentence stage substitutes a fallback string, the other
//! stages omit their field from the record. One backend outage can
//! therefore never block the remaining assets of a word, or the remaining
//! words of a run.

use crate::backend::{ImageGeneration, SpeechSynthesis, TextGeneration};
use crate::illustration::IllustrationGenerator;
use crate::layout::OutputLayout;
use crate::manifest::WordAssetRecord;
use crate::narration::{NarrationGenerator, SpeakingRate};
use crate::sentence::{SentenceGenerator, fallback_sentence};

pub struct WordAssetPipeline<'a> {
    sentences: SentenceGenerator<'a>,
    narrations: NarrationGenerator<'a>,
    illustrations: IllustrationGenerator<'a>,
    layout: &'a OutputLayout,
}

impl<'a> WordAssetPipeline<'a> {
    pub fn new(
        text: &'a dyn TextGeneration,
        speech: &'a dyn SpeechSynthesis,
        image: &'a dyn ImageGeneration,
        layout: &'a OutputLayout,
    ) -> Self {
        Self {
            sentences: SentenceGenerator::new(text),
            narrations: NarrationGenerator::new(speech),
            illustrations: IllustrationGenerator::new(image),
            layout,
        }
    }

    /// Generate the full asset bundle for one word and assemble its record.
    ///
    /// Never fails outward. The word narration uses the word itself at slow
    /// rate; the sentence narration and the illustration use the sentence,
    /// which may be the fallback when generation failed.
    pub async fn process(&self, word: &str) -> WordAssetRecord {
        let sentence = match self.sentences.generate(word).await {
            Ok(sentence) => sentence,
            Err(err) => {
                crate::verbose!("sentence generation failed for \"{word}\": {err}");
                fallback_sentence(word)
            }
        };

        let audio_word = match self
            .narrations
            .narrate(word, SpeakingRate::Slow, &self.layout.word_audio_path(word))
            .await
        {
            Ok(()) => Some(self.layout.word_audio_ref(word)),
            Err(err) => {
                crate::verbose!("word narration failed for \"{word}\": {err}");
                None
            }
        };

        let audio_sentence = match self
            .narrations
            .narrate(
                &sentence,
                SpeakingRate::Normal,
                &self.layout.sentence_audio_path(word),
            )
            .await
        {
            Ok(()) => Some(self.layout.sentence_audio_ref(word)),
            Err(err) => {
                crate::verbose!("sentence narration failed for \"{word}\": {err}");
                None
            }
        };

        let image = match self.illustrations.illustrate(&sentence, word).await {
            Ok((rank, bytes)) => {
                crate::verbose!("illustration for \"{word}\" accepted ({rank:?} prompt)");
                match std::fs::write(self.layout.image_path(word), &bytes) {
                    Ok(()) => Some(self.layout.image_ref(word)),
                    Err(err) => {
                        crate::verbose!("failed to write image for \"{word}\": {err}");
                        None
                    }
                }
            }
            Err(err) => {
                crate::verbose!("illustration failed for \"{word}\": {err}");
                None
            }
        };

        WordAssetRecord {
            id: word.to_string(),
            text: word.to_string(),
            sentence,
            audio_word,
            audio_sentence,
            image,
        }
    }
}
