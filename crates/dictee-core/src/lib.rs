pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod illustration;
pub mod layout;
pub mod manifest;
pub mod narration;
pub mod pipeline;
pub mod sentence;
pub mod verbose;
pub mod wordlist;

pub use backend::{GeminiBackend, ImageGeneration, RawAudio, SpeechSynthesis, TextGeneration};
pub use config::GeminiSettings;
pub use error::AssetError;
pub use illustration::{IllustrationGenerator, PromptRank};
pub use layout::OutputLayout;
pub use manifest::{Manifest, WordAssetRecord};
pub use narration::{NarrationGenerator, SpeakingRate};
pub use pipeline::WordAssetPipeline;
pub use sentence::SentenceGenerator;
pub use verbose::set_verbose;
pub use wordlist::load_words;
