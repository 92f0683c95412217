//! Output layout and deterministic artifact naming.
//!
//! Every artifact name derives only from the word, so each word owns a
//! non-overlapping set of output files and a rerun overwrites exactly its
//! own previous outputs.

use std::io;
use std::path::{Path, PathBuf};

pub const AUDIO_DIR: &str = "audio";
pub const IMAGES_DIR: &str = "images";
pub const MANIFEST_FILE: &str = "manifest.json";
pub const DEFAULT_WORDS_FILE: &str = "words_of_week.txt";

/// Directory and file layout of a generated bundle, rooted at the web
/// public directory the dictation app serves from.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.root.join(AUDIO_DIR)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn default_words_file(&self) -> PathBuf {
        self.root.join(DEFAULT_WORDS_FILE)
    }

    /// Create the audio and image directories if they do not exist.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        std::fs::create_dir_all(self.audio_dir())?;
        std::fs::create_dir_all(self.images_dir())
    }

    // On-disk artifact paths.

    pub fn word_audio_path(&self, word: &str) -> PathBuf {
        self.audio_dir().join(format!("{word}_word.wav"))
    }

    pub fn sentence_audio_path(&self, word: &str) -> PathBuf {
        self.audio_dir().join(format!("{word}_sentence.wav"))
    }

    pub fn image_path(&self, word: &str) -> PathBuf {
        self.images_dir().join(format!("{word}.png"))
    }

    // Web-root references recorded in the manifest, always forward slashes.

    pub fn word_audio_ref(&self, word: &str) -> String {
        format!("/{AUDIO_DIR}/{word}_word.wav")
    }

    pub fn sentence_audio_ref(&self, word: &str) -> String {
        format!("/{AUDIO_DIR}/{word}_sentence.wav")
    }

    pub fn image_ref(&self, word: &str) -> String {
        format!("/{IMAGES_DIR}/{word}.png")
    }
}
