//! Platform-specific file permission handling.
//!
//! Launcher files need the executable bit so the session manager can run
//! them directly.

use crate::error::{AutostartError, Result};
use std::path::Path;
use tracing::debug;

/// Set explicit permission bits on a file.
///
/// # Platform Behavior
/// - **Unix**: Sets `mode` exactly
/// - **Other**: No-op
///
/// # Errors
/// Returns an error if the file doesn't exist or permissions can't be changed.
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path)
            .map_err(|e| AutostartError::io_with_path("read metadata", e, path))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(mode);
        std::fs::set_permissions(path, permissions)
            .map_err(|e| AutostartError::io_with_path("set permissions", e, path))?;
        debug!("Set mode {:o} on: {}", mode, path.display());
    }

    #[cfg(not(unix))]
    {
        let _ = mode;
        debug!("Skipping permission bits on non-Unix for: {}", path.display());
    }

    Ok(())
}

/// Make a file executable (mode 0o755).
pub fn set_executable(path: &Path) -> Result<()> {
    set_mode(path, crate::config::AutostartConfig::LAUNCHER_MODE)
}

/// Check if a file has executable permissions.
///
/// # Platform Behavior
/// - **Unix**: Checks if any execute bit is set
/// - **Other**: Returns true when the file exists
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = std::fs::metadata(path) {
            // Any of user, group or other
            metadata.permissions().mode() & 0o111 != 0
        } else {
            false
        }
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_set_executable() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("launcher.sh");
        File::create(&file_path).unwrap();

        set_executable(&file_path).unwrap();

        assert!(is_executable(&file_path));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn test_plain_file_is_not_executable() {
        #[cfg(unix)]
        {
            let temp_dir = TempDir::new().unwrap();
            let file_path = temp_dir.path().join("plain");
            File::create(&file_path).unwrap();
            set_mode(&file_path, 0o644).unwrap();

            assert!(!is_executable(&file_path));
        }
    }

    #[test]
    fn test_set_executable_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.sh");

        let err = set_executable(&missing).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert!(!is_executable(&missing));
    }
}
