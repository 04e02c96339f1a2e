//! Atomic header output
//!
//! The header is written to a temporary file next to the target and then
//! renamed over it, so a failed or interrupted run never leaves a truncated
//! header for the firmware build to pick up.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::GenerateError;

/// Write `contents` to `path`, replacing any existing file atomically.
///
/// Fails with [`GenerateError::MissingParent`] if the target directory does
/// not exist. The temporary file is removed on every error path.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), GenerateError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(GenerateError::MissingParent(parent.to_path_buf()));
    }

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    // Temp files are created owner-only; keep the target's mode if it exists
    match fs::metadata(path) {
        Ok(existing) => fs::set_permissions(tmp.path(), existing.permissions())?,
        Err(e) if e.kind() == ErrorKind::NotFound => set_default_permissions(tmp.path())?,
        Err(e) => return Err(e.into()),
    }

    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Persisted output");
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
