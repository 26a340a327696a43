//! File operations used by the manager.
//!
//! Writes go to a temp file in the target directory and are renamed into
//! place, so a reader sees either the old content or the new content. A
//! symlinked target is resolved first and the link itself is left alone.

use crate::error::{AutostartError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::debug;

/// Outcome of removing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStatus {
    Removed,
    NotFound,
}

/// Upper bound on symlink hops, matching Linux's `MAXSYMLINKS`.
const MAX_SYMLINK_HOPS: usize = 40;

/// Write `content` to `path` atomically.
///
/// The file gets the process's default permissions (0666 minus umask), as
/// a plain create would. If `path` is a symlink the write lands on its
/// target, which needs write access to the target's directory. The parent
/// directory must exist.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let target = resolve_symlinks(path)?;
    let dir = target.parent().ok_or_else(|| {
        AutostartError::io_with_path(
            "resolve parent directory",
            io::Error::new(io::ErrorKind::InvalidInput, "path has no parent"),
            &target,
        )
    })?;

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // open(2) applies the umask to this mode
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut temp = builder
        .tempfile_in(dir)
        .map_err(|e| AutostartError::io_with_path("create temp file", e, dir))?;

    temp.write_all(content.as_bytes())
        .map_err(|e| AutostartError::io_with_path("write temp file", e, temp.path()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| AutostartError::io_with_path("sync temp file", e, temp.path()))?;

    temp.persist(&target)
        .map_err(|e| AutostartError::io_with_path("rename into place", e.error, &target))?;

    debug!("Wrote {}", target.display());
    Ok(())
}

/// Follow `path` through any symlinks to the file that should be written.
///
/// Dangling links resolve to their (not yet existing) target.
fn resolve_symlinks(path: &Path) -> Result<PathBuf> {
    let mut current = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&current)
                    .map_err(|e| AutostartError::io_with_path("read symlink", e, &current))?;
                current = match current.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                };
            }
            Ok(_) => return Ok(current),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(current),
            Err(e) => return Err(AutostartError::io_with_path("inspect target", e, &current)),
        }
    }
    Err(AutostartError::io_with_path(
        "resolve symlinks",
        io::Error::new(io::ErrorKind::InvalidInput, "too many levels of symbolic links"),
        path,
    ))
}

/// Remove a file, treating a missing file as nothing to do.
pub fn remove_if_exists(path: &Path) -> Result<RemovalStatus> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed {}", path.display());
            Ok(RemovalStatus::Removed)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Nothing to remove at {}", path.display());
            Ok(RemovalStatus::NotFound)
        }
        Err(e) => Err(AutostartError::io_with_path("remove file", e, path)),
    }
}
