//! Filesystem helpers that attach the path to every I/O error.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{RealmConfigError, Result};

/// Read a whole file.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| RealmConfigError::io("read", path, e))
}

/// Create `dir` and its parents if missing.
///
/// Returns `true` when the directory had to be created.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|e| RealmConfigError::io("create directory", dir, e))?;
    Ok(true)
}

/// Write `content` to `path`, replacing any existing file.
///
/// Uses atomic write pattern: writes to a hidden temp file next to the
/// target, syncs to disk, then renames over the target.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file =
            File::create(&temp_file).map_err(|e| RealmConfigError::io("create", &temp_file, e))?;
        file.write_all(content)
            .and_then(|()| file.sync_all())
            .map_err(|e| RealmConfigError::io("write", &temp_file, e))?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path).map_err(|e| RealmConfigError::io("replace", path, e))?;
    }

    fs::rename(&temp_file, path).map_err(|e| RealmConfigError::io("write", path, e))
}
