//! Whole-file JSON persistence shared by both stores.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// Read and parse a backing file.
///
/// # Errors
/// Missing, unreadable or unparsable files are `StoreError::DataUnavailable`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let contents =
        fs::read_to_string(path).map_err(|e| StoreError::data_unavailable(path, e))?;
    serde_json::from_str(&contents).map_err(|e| StoreError::data_unavailable(path, e))
}

/// Overwrite a backing file with pretty-printed JSON.
///
/// The value is written to `<path>.tmp` first and renamed over the target, so
/// a crash mid-write leaves the previous snapshot intact.
///
/// # Errors
/// Any serialization or IO failure is `StoreError::Persistence`.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> StoreResult<()> {
    let mut json =
        serde_json::to_string_pretty(value).map_err(|e| StoreError::persistence(path, e))?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::persistence(path, e))?;
    }

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, json.as_bytes()) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::persistence(path, e));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        StoreError::persistence(path, e)
    })
}

/// Move an existing backing file to `<path>.bak`, replacing an older backup.
///
/// # Errors
/// A failed rename is `StoreError::Persistence`; the file stays where it was.
pub fn move_to_backup(path: &Path) -> StoreResult<PathBuf> {
    let backup = with_suffix(path, ".bak");
    fs::rename(path, &backup).map_err(|e| StoreError::persistence(path, e))?;
    tracing::warn!("Moved unreadable {} to {}", path.display(), backup.display());
    Ok(backup)
}

fn temp_path(path: &Path) -> PathBuf {
    with_suffix(path, ".tmp")
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
