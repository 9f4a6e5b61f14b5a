//! Run configuration
//!
//! Every path the pipeline touches lives here and is handed to each
//! component explicitly.

use std::path::{Path, PathBuf};

use crate::core::paths::resolve;

pub const DEFAULT_INPUT: &str = "texts.txt";
pub const DEFAULT_SNAPSHOT_DIR: &str = "words_versions";
pub const DEFAULT_INDEX: &str = "words.json";
pub const DEFAULT_PREFIX: &str = "words";

/// Indentation used for every JSON file we write.
pub const JSON_INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text file to tally
    pub input: PathBuf,
    /// Directory holding `<prefix><N>.json` snapshots
    pub snapshot_dir: PathBuf,
    /// Frequency-sorted word list, rewritten every run
    pub index_path: PathBuf,
    /// File name prefix for snapshots
    pub prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            index_path: PathBuf::from(DEFAULT_INDEX),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Default layout rooted at `root`.
    #[allow(dead_code)]
    pub fn rooted(root: &Path) -> Self {
        Self::default().with_root(root)
    }

    /// Resolve every relative path against `root`.
    pub fn with_root(self, root: &Path) -> Self {
        Self {
            input: resolve(root, &self.input),
            snapshot_dir: resolve(root, &self.snapshot_dir),
            index_path: resolve(root, &self.index_path),
            prefix: self.prefix,
        }
    }
}
