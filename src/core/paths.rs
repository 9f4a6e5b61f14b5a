//! Path utilities
//!
//! Root resolution and the `<prefix><N>.json` snapshot naming scheme.

use std::path::{Path, PathBuf};

const SNAPSHOT_EXT: &str = ".json";

/// Join a relative path onto `root`; absolute paths pass through.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// File name for snapshot `version`, e.g. `words7.json`.
pub fn snapshot_file_name(prefix: &str, version: u64) -> String {
    format!("{}{}{}", prefix, version, SNAPSHOT_EXT)
}

/// Parse the version out of a snapshot file name.
///
/// Returns `None` unless the name is exactly prefix, one or more ASCII
/// digits, then `.json`.
pub fn parse_snapshot_version(prefix: &str, file_name: &str) -> Option<u64> {
    let digits = file_name
        .strip_prefix(prefix)?
        .strip_suffix(SNAPSHOT_EXT)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
