//! Filesystem snapshot store - `<dir>/<prefix><N>.json`

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::counter::FrequencyMap;
use crate::core::paths::{parse_snapshot_version, snapshot_file_name};
use crate::core::util::write_json_new;
use crate::error::{Result, TallyError};
use crate::store::SnapshotStore;

#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    dir: PathBuf,
    prefix: String,
}

impl FsSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.snapshot_dir, &config.prefix)
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of snapshot `version`, whether or not it exists.
    pub fn path_for(&self, version: u64) -> PathBuf {
        self.dir.join(snapshot_file_name(&self.prefix, version))
    }

    /// Create the snapshot directory if missing.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| TallyError::io(&self.dir, e))?;
            tracing::debug!(dir = %self.dir.display(), "created snapshot directory");
        }
        Ok(())
    }

    /// Every version present in the directory, unordered.
    ///
    /// Names that do not parse as `<prefix><digits>.json` are skipped.
    fn scan_versions(&self) -> Result<Vec<u64>> {
        self.ensure_dir()?;

        let entries = fs::read_dir(&self.dir).map_err(|e| TallyError::io(&self.dir, e))?;
        let mut versions = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| TallyError::io(&self.dir, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name();
            match name.to_str().and_then(|n| parse_snapshot_version(&self.prefix, n)) {
                Some(version) => versions.push(version),
                None => tracing::debug!(file = ?name, "ignoring non-snapshot file"),
            }
        }

        Ok(versions)
    }

    /// Path of the highest-numbered snapshot, if any.
    #[allow(dead_code)]
    pub fn find_latest(&self) -> Result<Option<PathBuf>> {
        Ok(self.latest_version()?.map(|v| self.path_for(v)))
    }

    /// Path the next snapshot would be written to. Creates nothing but the
    /// directory.
    #[allow(dead_code)]
    pub fn next_path(&self) -> Result<PathBuf> {
        Ok(self.path_for(next_version(self.latest_version()?)))
    }
}

fn next_version(latest: Option<u64>) -> u64 {
    // At u64::MAX the no-clobber write fails instead of wrapping.
    latest.map_or(1, |v| v.saturating_add(1))
}

impl SnapshotStore for FsSnapshotStore {
    fn latest_version(&self) -> Result<Option<u64>> {
        let latest = self.scan_versions()?.into_iter().max();
        tracing::debug!(dir = %self.dir.display(), ?latest, "scanned snapshots");
        Ok(latest)
    }

    fn load(&self, version: u64) -> Result<FrequencyMap> {
        let path = self.path_for(version);
        let bytes = fs::read(&path).map_err(|e| TallyError::io(&path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| TallyError::json(&path, e))
    }

    fn allocate_next(&self, counts: &FrequencyMap) -> Result<u64> {
        let version = next_version(self.latest_version()?);
        let path = self.path_for(version);
        write_json_new(&path, counts)?;
        tracing::info!(path = %path.display(), words = counts.len(), "wrote snapshot");
        Ok(version)
    }

    fn locate(&self, version: u64) -> String {
        self.path_for(version).display().to_string()
    }
}
