//! lexitally - Versioned word-frequency dictionaries
//!
//! lexitally provides:
//! - Russian word extraction from a text file
//! - Cumulative counts persisted as numbered, immutable JSON snapshots
//! - A frequency-sorted word list rebuilt on every run

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod error;
mod flows;
mod logging;
mod store;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
