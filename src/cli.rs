//! CLI module - Command-line interface definition and the run handler

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::config::{Config, DEFAULT_INDEX, DEFAULT_INPUT, DEFAULT_PREFIX, DEFAULT_SNAPSHOT_DIR};
use crate::flows::accumulate::Base;
use crate::flows::tally::{run_tally, Outcome, Summary};

/// lexitally - tally Russian words into versioned frequency dictionaries.
#[derive(Parser, Debug)]
#[command(name = "lexitally")]
#[command(
    author,
    version,
    about,
    long_about = r#"lexitally reads a text file, counts the Russian words in it, and adds the
counts to a cumulative dictionary.

Every run that finds at least one word writes a new numbered snapshot
(words1.json, words2.json, ...) into the snapshot directory and rebuilds the
main index, a word list sorted by descending frequency. Old snapshots are
never modified.

With no arguments the defaults are used:
    input:     texts.txt
    snapshots: words_versions/
    index:     words.json

Examples:
    lexitally
    lexitally --root ~/corpus
    lexitally --input chapter1.txt --index ranked.json
"#
)]
pub struct Cli {
    /// Root directory that relative paths are resolved against.
    #[arg(long, default_value = ".", value_name = "ROOT")]
    pub root: PathBuf,

    /// Text file to tally.
    #[arg(long, default_value = DEFAULT_INPUT, value_name = "FILE")]
    pub input: PathBuf,

    /// Directory holding the numbered snapshots.
    #[arg(long, default_value = DEFAULT_SNAPSHOT_DIR, value_name = "DIR")]
    pub snapshots: PathBuf,

    /// Main index file, rewritten on every run.
    #[arg(long, default_value = DEFAULT_INDEX, value_name = "FILE")]
    pub index: PathBuf,

    /// File name prefix for snapshots.
    #[arg(
        long,
        default_value = DEFAULT_PREFIX,
        value_name = "NAME",
        long_help = "File name prefix for snapshots. Snapshots are named <NAME><N>.json;\n\
files in the snapshot directory that do not follow this pattern are ignored."
    )]
    pub prefix: String,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            snapshot_dir: self.snapshots.clone(),
            index_path: self.index.clone(),
            prefix: self.prefix.clone(),
        }
        .with_root(&self.root)
    }
}

/// Execute a run based on the parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    crate::logging::init_logging(cli.quiet, cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.config();
    tracing::debug!(?config, "starting run");

    let outcome = run_tally(&config)
        .with_context(|| format!("Failed to tally {}", config.input.display()))?;
    report(&outcome);
    Ok(())
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::MissingInput { path } => {
            println!("File {} not found.", path.display().to_string().yellow());
        }
        Outcome::EmptyInput { path } => {
            println!("File {} is empty.", path.display().to_string().yellow());
        }
        Outcome::NoWords => {
            println!("No Russian words found in the text.");
        }
        Outcome::Updated(summary) => report_summary(summary),
    }
}

fn report_summary(summary: &Summary) {
    if let Base::Recovered { version, reason } = &summary.base {
        println!(
            "{} snapshot {} is corrupt ({}); starting from an empty dictionary.",
            "Warning:".yellow(),
            version,
            reason
        );
    }
    println!(
        "Created new file: {}",
        summary.snapshot.display().to_string().green()
    );
    println!(
        "Updated file: {}",
        summary.index.display().to_string().green()
    );
    println!(
        "Counted {} words ({} distinct); dictionary now holds {} words.",
        summary.tokens, summary.new_words, summary.total_words
    );
}
