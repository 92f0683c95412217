//! The `generate` command: run the full asset pipeline over a word list.
//!
//! Words are processed one at a time; per-asset failures are reported and
//! skipped, and the run always ends by writing a fresh manifest for
//! whatever subset of assets succeeded. The only fatal error is an
//! unreadable word list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dictee_core::{
    GeminiBackend, Manifest, OutputLayout, WordAssetPipeline, WordAssetRecord, load_words,
    set_verbose,
};

#[derive(Args)]
pub struct GenerateArgs {
    /// Word list file, one word per line (defaults to words_of_week.txt
    /// under the output directory)
    #[arg(long)]
    words_file: Option<PathBuf>,

    /// Output directory (web public root) for audio/, images/ and
    /// manifest.json
    #[arg(long, default_value = "public")]
    output_dir: PathBuf,

    /// Print per-stage detail for every word
    #[arg(long, short)]
    verbose: bool,
}

pub async fn run(args: GenerateArgs) -> Result<()> {
    set_verbose(args.verbose);

    let settings = crate::app::load_settings()?;
    let layout = OutputLayout::new(&args.output_dir);
    let words_file = args
        .words_file
        .unwrap_or_else(|| layout.default_words_file());

    let words = load_words(&words_file)
        .with_context(|| format!("failed to load word list from {}", words_file.display()))?;

    println!("Found {} words to process:", words.len());
    for word in &words {
        println!("  - {word}");
    }

    layout
        .ensure_dirs()
        .context("failed to create output directories")?;

    let backend = GeminiBackend::new(settings);
    let pipeline = WordAssetPipeline::new(&backend, &backend, &backend, &layout);

    let mut records = Vec::with_capacity(words.len());
    for word in &words {
        println!("\nProcessing: {word}");
        let record = pipeline.process(word).await;
        report(&record);
        records.push(record);
    }

    let manifest = Manifest::build(records);
    let manifest_path = layout.manifest_path();
    let json = manifest.to_json().context("failed to serialize manifest")?;
    std::fs::write(&manifest_path, json + "\n")
        .with_context(|| format!("failed to write manifest to {}", manifest_path.display()))?;

    println!("\nGenerated manifest: {}", manifest_path.display());
    println!("Total words processed: {}", manifest.words.len());
    Ok(())
}

fn report(record: &WordAssetRecord) {
    println!("  Sentence: {}", record.sentence);
    println!("  Word audio: {}", status(record.audio_word.as_deref()));
    println!(
        "  Sentence audio: {}",
        status(record.audio_sentence.as_deref())
    );
    println!("  Image: {}", status(record.image.as_deref()));
}

fn status(asset: Option<&str>) -> &str {
    match asset {
        Some(path) => path,
        None => "failed (continuing without it)",
    }
}
