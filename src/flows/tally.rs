//! Tally flow - The whole run, input file to main index
//!
//! raw text → tokens → counts → new snapshot → main index.
//! Two early exits write nothing: no input text, and no recognized words.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::counter::{count, total, FrequencyMap};
use crate::core::tokenizer::tokenize;
use crate::error::{Result, TallyError};
use crate::flows::accumulate::{accumulate, Base};
use crate::flows::index::write_index;
use crate::store::{FsSnapshotStore, SnapshotStore};

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input file does not exist
    MissingInput { path: PathBuf },
    /// Input file is empty or whitespace only
    EmptyInput { path: PathBuf },
    /// Input had text but no words in the alphabet
    NoWords,
    Updated(Summary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub version: u64,
    pub snapshot: PathBuf,
    pub index: PathBuf,
    pub base: Base,
    /// Tokens read from this input
    pub tokens: u64,
    /// Distinct words in this input
    pub new_words: usize,
    /// Distinct words in the cumulative dictionary
    pub total_words: usize,
}

/// Read the input, trimmed. `None` if the file does not exist.
pub fn read_input(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TallyError::io(path, e)),
    }
}

/// Run the pipeline with the given configuration.
pub fn run_tally(config: &Config) -> Result<Outcome> {
    let store = FsSnapshotStore::from_config(config);
    tally_into(config, &store)
}

/// Run the pipeline against an explicit store.
pub fn tally_into<S: SnapshotStore + ?Sized>(config: &Config, store: &S) -> Result<Outcome> {
    let text = match read_input(&config.input)? {
        None => {
            return Ok(Outcome::MissingInput {
                path: config.input.clone(),
            })
        }
        Some(text) if text.is_empty() => {
            return Ok(Outcome::EmptyInput {
                path: config.input.clone(),
            })
        }
        Some(text) => text,
    };

    let counts: FrequencyMap = count(tokenize(&text));
    if counts.is_empty() {
        tracing::debug!(input = %config.input.display(), "no words recognized");
        return Ok(Outcome::NoWords);
    }

    let acc = accumulate(store, &counts)?;
    write_index(&config.index_path, &acc.merged)?;

    Ok(Outcome::Updated(Summary {
        version: acc.version,
        snapshot: PathBuf::from(store.locate(acc.version)),
        index: config.index_path.clone(),
        base: acc.base,
        tokens: total(&counts),
        new_words: counts.len(),
        total_words: acc.merged.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::index::MainIndex;
    use serde_json::Value;
    use tempfile::tempdir;

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_missing_input() {
        let temp = tempdir().unwrap();
        let config = Config::rooted(temp.path());

        let outcome = run_tally(&config).unwrap();
        assert_eq!(
            outcome,
            Outcome::MissingInput {
                path: config.input.clone()
            }
        );
        assert!(!config.snapshot_dir.exists());
        assert!(!config.index_path.exists());
    }

    #[test]
    fn test_whitespace_input_is_empty() {
        let temp = tempdir().unwrap();
        let config = Config::rooted(temp.path());
        fs::write(&config.input, "  \n\t\n").unwrap();

        assert!(matches!(
            run_tally(&config).unwrap(),
            Outcome::EmptyInput { .. }
        ));
        assert!(!config.index_path.exists());
    }

    #[test]
    fn test_no_words() {
        let temp = tempdir().unwrap();
        let config = Config::rooted(temp.path());
        fs::write(&config.input, "hello 123 !!!").unwrap();

        assert_eq!(run_tally(&config).unwrap(), Outcome::NoWords);
        assert!(!config.index_path.exists());
        assert!(!config.snapshot_dir.join("words1.json").exists());
    }

    #[test]
    fn test_first_run_end_to_end() {
        let temp = tempdir().unwrap();
        let config = Config::rooted(temp.path());
        fs::write(&config.input, "Привет привет мир! 123").unwrap();

        let Outcome::Updated(summary) = run_tally(&config).unwrap() else {
            panic!("expected an update");
        };
        assert_eq!(summary.version, 1);
        assert_eq!(summary.base, Base::Empty);
        assert_eq!(summary.tokens, 3);
        assert_eq!(summary.new_words, 2);
        assert_eq!(summary.snapshot, config.snapshot_dir.join("words1.json"));

        let snapshot = fs::read_to_string(config.snapshot_dir.join("words1.json")).unwrap();
        assert_eq!(snapshot, "{\n    \"привет\": 2,\n    \"мир\": 1\n}");

        let index: MainIndex =
            serde_json::from_str(&fs::read_to_string(&config.index_path).unwrap()).unwrap();
        assert_eq!(index.words, ["привет", "мир"]);
    }

    #[test]
    fn test_runs_accumulate() {
        let temp = tempdir().unwrap();
        let config = Config::rooted(temp.path());

        fs::write(&config.input, "кот пёс кот").unwrap();
        run_tally(&config).unwrap();

        fs::write(&config.input, "пёс пёс мышь").unwrap();
        let Outcome::Updated(summary) = run_tally(&config).unwrap() else {
            panic!("expected an update");
        };
        assert_eq!(summary.version, 2);
        assert_eq!(summary.base, Base::Loaded { version: 1 });
        assert_eq!(summary.total_words, 3);

        let second = read_json(&config.snapshot_dir.join("words2.json"));
        assert_eq!(second["кот"], 2);
        assert_eq!(second["пёс"], 3);
        assert_eq!(second["мышь"], 1);

        let first = read_json(&config.snapshot_dir.join("words1.json"));
        assert_eq!(first["пёс"], 1);

        let index = read_json(&config.index_path);
        assert_eq!(index["words"], serde_json::json!(["пёс", "кот", "мышь"]));
    }

    #[test]
    fn test_no_words_run_does_not_bump_version() {
        let temp = tempdir().unwrap();
        let config = Config::rooted(temp.path());

        fs::write(&config.input, "кот").unwrap();
        run_tally(&config).unwrap();
        fs::write(&config.input, "42").unwrap();
        run_tally(&config).unwrap();
        fs::write(&config.input, "кот").unwrap();

        let Outcome::Updated(summary) = run_tally(&config).unwrap() else {
            panic!("expected an update");
        };
        assert_eq!(summary.version, 2);
    }

    #[test]
    fn test_unreadable_input_is_error() {
        let temp = tempdir().unwrap();
        let config = Config::rooted(temp.path());
        fs::write(&config.input, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            run_tally(&config).unwrap_err(),
            TallyError::Io { .. }
        ));
    }
}
