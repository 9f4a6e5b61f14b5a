//! Main index flow - Frequency-sorted word list
//!
//! The index is a derived view: it is rebuilt from the merged counts on
//! every run and written over the previous file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::counter::FrequencyMap;
use crate::core::util::write_json;
use crate::error::Result;

/// On-disk shape of the main index: `{"words": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainIndex {
    pub words: Vec<String>,
}

impl MainIndex {
    /// Words by descending count; equal counts keep map order.
    pub fn from_counts(counts: &FrequencyMap) -> Self {
        let mut ranked: Vec<(&String, u64)> = counts.iter().map(|(w, c)| (w, *c)).collect();
        // `sort_by` is stable, which is what gives ties their insertion order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            words: ranked.into_iter().map(|(w, _)| w.clone()).collect(),
        }
    }
}

/// Rebuild the index from `counts` and overwrite `path`.
pub fn write_index(path: &Path, counts: &FrequencyMap) -> Result<MainIndex> {
    let index = MainIndex::from_counts(counts);
    write_json(path, &index)?;
    tracing::info!(path = %path.display(), words = index.words.len(), "wrote main index");
    Ok(index)
}
