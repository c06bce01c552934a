use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use promptmirror::cli::handlers;
use promptmirror::config::AppConfig;
use promptmirror::logging;

#[derive(Parser)]
#[command(name = "promptmirror")]
#[command(about = "Prompt-history analytics: tokenization, trait/emotion scoring, complexity")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis pipeline over an exported history file
    Analyze {
        /// Exported history file (.json / .jsonl / .txt)
        file: PathBuf,
        /// Override the number of top words and phrases reported
        #[arg(short, long)]
        top: Option<usize>,
        /// Emit the report as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Dump the filtered token stream for a history file
    Tokens {
        /// Exported history file
        file: PathBuf,
        /// Maximum number of tokens to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Score a single prompt's structural/logical complexity
    Complexity {
        /// The prompt text to score
        text: String,
    },
    /// Print the most frequent adjacent-token pairs
    Bigrams {
        /// Exported history file
        file: PathBuf,
        /// Number of pairs to print
        #[arg(short, default_value = "15")]
        n: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::load().context("loading default config")?,
    };

    if cli.verbose {
        logging::init_logging_with_level("debug")?;
    } else {
        logging::init_logging_with_config(Some(&config))?;
    }

    match cli.command {
        Commands::Analyze { file, top, json } => {
            handlers::handle_analyze(&file, top, json, &config)?;
        }
        Commands::Tokens { file, limit } => handlers::handle_tokens(&file, limit)?,
        Commands::Complexity { text } => handlers::handle_complexity(&text, &config)?,
        Commands::Bigrams { file, n } => handlers::handle_bigrams(&file, n)?,
    }
    Ok(())
}
