//! Command handlers for the `promptmirror` CLI

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::complexity;
use crate::config::AppConfig;
use crate::ingest;
use crate::report;
use crate::tokenizer;
use crate::Result;

/// Run the full analysis pipeline over an exported history file.
pub fn handle_analyze(
    path: &Path,
    top: Option<usize>,
    json: bool,
    config: &AppConfig,
) -> Result<()> {
    let items = ingest::load_file(path)?;
    info!(items = items.len(), "loaded history file");

    let mut analysis = config.analysis.clone();
    if let Some(top) = top {
        analysis.top_words = top;
        analysis.top_bigrams = top;
    }

    let report = report::analyze(&items, &analysis);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }
    Ok(())
}

/// Dump the token stream for an exported history file.
pub fn handle_tokens(path: &Path, limit: Option<usize>) -> Result<()> {
    let items = ingest::load_file(path)?;
    let texts: Vec<String> = items.into_iter().map(|i| i.text).collect();
    let tokens = tokenizer::tokenize(&texts);

    let shown = limit.unwrap_or(tokens.len()).min(tokens.len());
    println!("🔤 {} tokens ({} shown)", tokens.len(), shown);
    for token in &tokens[..shown] {
        println!("  {token}");
    }
    Ok(())
}

/// Score one prompt's complexity with the configured weights.
pub fn handle_complexity(text: &str, config: &AppConfig) -> Result<()> {
    let score = complexity::complexity_with(text, &config.analysis.complexity);
    println!("🧮 Complexity: {score}/100");
    Ok(())
}

/// Print the top adjacent-token pairs for an exported history file.
pub fn handle_bigrams(path: &Path, n: usize) -> Result<()> {
    let items = ingest::load_file(path)?;
    let texts: Vec<String> = items.into_iter().map(|i| i.text).collect();
    let bigrams = crate::bigrams::top_bigrams(&texts, n);

    if bigrams.is_empty() {
        println!("No phrase pairs survive filtering");
    } else {
        output::print_top_bigrams(&bigrams);
    }
    Ok(())
}
