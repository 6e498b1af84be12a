//! CLI tool for converting HTML slide decks into a single Markdown document.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::FILE_DIVIDER;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Decks converted when no files are given on the command line.
const DEFAULT_FILES: &[&str] = &[
    "slides.html",
    "slides-kkv.html",
    "slides-google-workspace.html",
];

/// Convert HTML slide decks into one Markdown draft.
#[derive(Parser, Debug)]
#[command(name = "deck-extract")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deck filenames, relative to the base directory
    #[arg(default_values_t = DEFAULT_FILES.iter().map(|f| f.to_string()).collect::<Vec<_>>())]
    files: Vec<String>,

    /// Directory containing the decks
    #[arg(short, long, default_value = ".")]
    base_dir: PathBuf,

    /// Markdown file to write (overwritten)
    #[arg(short, long, default_value = "draft_material.md")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Outcome of a conversion run.
#[derive(Debug, Default)]
struct RunSummary {
    /// Decks that were found and converted, in order.
    processed: Vec<PathBuf>,

    /// Deck filenames that were not found.
    skipped: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let summary = run(&args.base_dir, &args.files, &args.output)?;

    log::debug!(
        "{} decks converted, {} skipped",
        summary.processed.len(),
        summary.skipped.len()
    );

    Ok(())
}

/// Convert every existing deck and write the combined Markdown.
///
/// Missing decks are skipped; any other failure aborts the run before the
/// output file is touched.
fn run(base_dir: &Path, files: &[String], output_path: &Path) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut output = String::new();

    for file in files {
        let input_path = base_dir.join(file);

        if !input_path.exists() {
            log::warn!("Skipping {} (not found)", file);
            summary.skipped.push(file.clone());
            continue;
        }

        log::info!("Processing {}...", input_path.display());
        let markdown = deck_html::extract_markdown(&input_path)
            .with_context(|| format!("Failed to extract {}", input_path.display()))?;

        output.push_str(&markdown);
        output.push_str(FILE_DIVIDER);
        summary.processed.push(input_path);
    }

    write_output(output_path, &output)?;
    log::info!("Extraction complete. Saved to {}", output_path.display());

    Ok(summary)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
