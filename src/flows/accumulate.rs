//! Accumulation flow - Merge new counts into the latest snapshot
//!
//! Reads the newest snapshot (or starts empty), adds the new counts word
//! by word, and writes the result as the next snapshot. Old snapshots are
//! never touched.

use crate::core::counter::FrequencyMap;
use crate::error::Result;
use crate::store::SnapshotStore;

/// Where the merge started from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base {
    /// The store had no snapshots
    Empty,
    /// Snapshot `version` was loaded
    Loaded { version: u64 },
    /// Snapshot `version` could not be decoded and was treated as empty
    Recovered { version: u64, reason: String },
}

/// Result of one accumulation
#[derive(Debug, Clone)]
pub struct Accumulation {
    /// Cumulative counts, as written to the new snapshot
    pub merged: FrequencyMap,
    /// Version of the snapshot just written
    pub version: u64,
    pub base: Base,
}

/// Add `counts` into `base`: new words are appended, known words summed.
pub fn merge_into(base: &mut FrequencyMap, counts: &FrequencyMap) {
    for (word, count) in counts {
        let entry = base.entry(word.clone()).or_insert(0);
        *entry = entry.saturating_add(*count);
    }
}

/// Load the prior snapshot, or fall back to empty when it is corrupt.
///
/// I/O failures other than decoding still propagate.
fn load_base<S: SnapshotStore + ?Sized>(store: &S) -> Result<(FrequencyMap, Base)> {
    let Some(version) = store.latest_version()? else {
        return Ok((FrequencyMap::new(), Base::Empty));
    };

    match store.load(version) {
        Ok(data) => Ok((data, Base::Loaded { version })),
        Err(err) if err.is_corruption() => {
            tracing::warn!(
                snapshot = %store.locate(version),
                error = %err,
                "snapshot is corrupt, starting from an empty dictionary"
            );
            Ok((
                FrequencyMap::new(),
                Base::Recovered {
                    version,
                    reason: err.to_string(),
                },
            ))
        }
        Err(err) => Err(err),
    }
}

/// Merge `counts` onto the latest snapshot and persist the next version.
pub fn accumulate<S: SnapshotStore + ?Sized>(
    store: &S,
    counts: &FrequencyMap,
) -> Result<Accumulation> {
    let (mut merged, base) = load_base(store)?;
    merge_into(&mut merged, counts);

    let version = store.allocate_next(&merged)?;
    tracing::debug!(version, words = merged.len(), ?base, "accumulated snapshot");

    Ok(Accumulation {
        merged,
        version,
        base,
    })
}
