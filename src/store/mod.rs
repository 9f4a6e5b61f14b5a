//! Store module - Versioned frequency snapshots
//!
//! A store holds an append-only sequence of numbered snapshots. Nothing
//! outside this module knows how versions are discovered or where the
//! bytes live; the accumulator only talks to [`SnapshotStore`].

pub mod fs;

use crate::core::counter::FrequencyMap;
use crate::error::Result;

pub use fs::FsSnapshotStore;

/// An append-only, monotonically numbered sequence of frequency snapshots.
pub trait SnapshotStore {
    /// Highest version present, or `None` for an empty store.
    fn latest_version(&self) -> Result<Option<u64>>;

    /// Read snapshot `version`.
    ///
    /// Undecodable content must surface as [`TallyError::Json`] so callers
    /// can tell corruption apart from I/O failure.
    ///
    /// [`TallyError::Json`]: crate::error::TallyError::Json
    fn load(&self, version: u64) -> Result<FrequencyMap>;

    /// Write `counts` as a new snapshot numbered one past the latest
    /// (1 for an empty store) and return that number. Never overwrites.
    fn allocate_next(&self, counts: &FrequencyMap) -> Result<u64>;

    /// Human-readable location of `version`, for messages.
    fn locate(&self, version: u64) -> String;
}
