//! Illustrative sentence generation for a single word.

use crate::backend::TextGeneration;
use crate::error::AssetError;

/// The fixed substitute used when sentence generation fails, so downstream
/// stages always have text to narrate and illustrate.
pub fn fallback_sentence(word: &str) -> String {
    format!("Le mot est {word}.")
}

pub struct SentenceGenerator<'a> {
    backend: &'a dyn TextGeneration,
}

impl<'a> SentenceGenerator<'a> {
    pub fn new(backend: &'a dyn TextGeneration) -> Self {
        Self { backend }
    }

    /// Generate a short, kid-friendly French sentence containing `word`.
    ///
    /// Models tend to wrap their reply in quotes despite the prompt; one
    /// surrounding matched layer is stripped before the result is returned.
    pub async fn generate(&self, word: &str) -> Result<String, AssetError> {
        let reply = self.backend.generate_text(&build_prompt(word)).await?;
        Ok(strip_quotes(reply.trim()).trim().to_string())
    }
}

fn build_prompt(word: &str) -> String {
    format!(
        "Create a simple, kid-friendly French sentence using the word \"{word}\".\n\
         \n\
         Requirements:\n\
         - The sentence should be appropriate for a 7-year-old child\n\
         - Use simple vocabulary and grammar\n\
         - The sentence should be fun or interesting for a child\n\
         - Keep it short (5-10 words maximum)\n\
         - The word \"{word}\" must appear in the sentence exactly as written\n\
         - Avoid using the 'passé composé' if possible; stick to the 'présent de l'indicatif'.\n\
         \n\
         Return ONLY the French sentence, nothing else."
    )
}

/// Strip one layer of surrounding matched quotes, if present.
fn strip_quotes(sentence: &str) -> &str {
    for quote in ['"', '\''] {
        if sentence.len() >= 2 && sentence.starts_with(quote) && sentence.ends_with(quote) {
            return &sentence[1..sentence.len() - 1];
        }
    }
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockText;

    #[test]
    fn test_strip_double_quotes() {
        assert_eq!(strip_quotes("\"Le chat dort.\""), "Le chat dort.");
    }

    #[test]
    fn test_strip_single_quotes() {
        assert_eq!(strip_quotes("'Le chat dort.'"), "Le chat dort.");
    }

    #[test]
    fn test_strips_only_one_layer() {
        assert_eq!(strip_quotes("\"'Le chat dort.'\""), "'Le chat dort.'");
    }

    #[test]
    fn test_mismatched_quotes_untouched() {
        assert_eq!(strip_quotes("\"Le chat dort.'"), "\"Le chat dort.'");
        assert_eq!(strip_quotes("\"Le chat dort."), "\"Le chat dort.");
    }

    #[test]
    fn test_lone_quote_untouched() {
        assert_eq!(strip_quotes("\""), "\"");
    }

    #[test]
    fn test_fallback_sentence_is_deterministic() {
        assert_eq!(fallback_sentence("lune"), "Le mot est lune.");
    }

    #[tokio::test]
    async fn test_generate_trims_and_unquotes_reply() {
        let backend = MockText::ok("  \"La lune brille ce soir.\"  ");
        let sentences = SentenceGenerator::new(&backend);

        let sentence = sentences.generate("lune").await.unwrap();
        assert_eq!(sentence, "La lune brille ce soir.");
    }

    #[tokio::test]
    async fn test_prompt_contains_exact_word() {
        let backend = MockText::ok("L'école est ouverte.");
        let sentences = SentenceGenerator::new(&backend);

        sentences.generate("école").await.unwrap();
        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("\"école\""));
        assert!(prompts[0].contains("présent de l'indicatif"));
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let backend = MockText::failing();
        let sentences = SentenceGenerator::new(&backend);

        let err = sentences.generate("lune").await.unwrap_err();
        assert!(matches!(err, AssetError::Generation(_)));
    }
}
