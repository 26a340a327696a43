//! Platform-specific path utilities.
//!
//! This module resolves the two startup directories the autostart
//! convention uses:
//! - the per-user XDG autostart directory
//! - the system-wide startup scripts directory

use crate::config::PathsConfig;
use crate::error::{AutostartError, Result};
use std::path::PathBuf;

/// Get the user's config home.
///
/// # Platform Behavior
/// - **Linux**: `$XDG_CONFIG_HOME`, falling back to `~/.config` (XDG spec)
/// - **Other Unix**: `~/.config`
pub fn user_config_home() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().ok_or_else(|| AutostartError::Config {
            message: "Could not determine user config directory".to_string(),
        })
    }

    #[cfg(not(target_os = "linux"))]
    {
        let home = dirs::home_dir().ok_or_else(|| AutostartError::Config {
            message: "Could not determine home directory".to_string(),
        })?;
        Ok(home.join(PathsConfig::CONFIG_HOME_FALLBACK))
    }
}

/// Get the per-user autostart directory.
///
/// Returns `{user_config_home}/autostart`.
pub fn user_autostart_dir() -> Result<PathBuf> {
    Ok(user_config_home()?.join(PathsConfig::AUTOSTART_DIR_NAME))
}

/// Get the system-wide startup scripts directory (`/etc/init.d`).
pub fn system_startup_dir() -> PathBuf {
    PathBuf::from(PathsConfig::SYSTEM_STARTUP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_autostart_dir_ends_with_autostart() {
        // Skips silently on hosts without a resolvable home directory
        if let Ok(dir) = user_autostart_dir() {
            assert!(dir.ends_with("autostart"));
            assert_eq!(dir.parent().map(PathBuf::from), user_config_home().ok());
        }
    }

    #[test]
    fn test_system_startup_dir() {
        assert_eq!(system_startup_dir(), PathBuf::from("/etc/init.d"));
    }
}
