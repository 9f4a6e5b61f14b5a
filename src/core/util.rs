//! JSON file helpers

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::core::config::JSON_INDENT;
use crate::error::{Result, TallyError};

/// Serialize `value` as pretty JSON with the project indent.
///
/// serde_json never escapes non-ASCII, so Cyrillic stays readable.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `value` to `path`, replacing whatever is there.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_pretty_json(value).map_err(|e| TallyError::json(path, e))?;
    fs::write(path, bytes).map_err(|e| TallyError::io(path, e))
}

/// Write `value` to `path`, failing if `path` already exists.
///
/// The bytes go to a temp file in the same directory first, so a reader
/// never sees a half-written file under the final name.
pub fn write_json_new<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_pretty_json(value).map_err(|e| TallyError::json(path, e))?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| TallyError::io(dir, e))?;
    temp.write_all(&bytes)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| TallyError::io(temp.path(), e))?;

    temp.persist_noclobber(path)
        .map_err(|e| TallyError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        })?;
    Ok(())
}
