//! Startup directory providers.
//!
//! The manager never reads a hidden global for its target directory; it asks
//! a [`StartupDirs`] implementation. [`PlatformDirs`] follows the host
//! conventions, [`FixedDirs`] pins both scopes to caller-chosen paths.

use crate::error::Result;
use crate::platform;
use crate::scope::Scope;
use std::path::{Path, PathBuf};

/// Resolves the startup directory for a scope.
///
/// Implementations must be pure: resolving the same scope twice yields the
/// same path and creates nothing on disk.
pub trait StartupDirs {
    fn startup_dir(&self, scope: Scope) -> Result<PathBuf>;
}

/// Host directories: `<user-config-home>/autostart` and `/etc/init.d`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDirs;

impl StartupDirs for PlatformDirs {
    fn startup_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::User => platform::user_autostart_dir(),
            Scope::System => Ok(platform::system_startup_dir()),
        }
    }
}

/// Fixed directories for both scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDirs {
    user: PathBuf,
    system: PathBuf,
}

impl FixedDirs {
    pub fn new(user: impl AsRef<Path>, system: impl AsRef<Path>) -> Self {
        Self {
            user: user.as_ref().to_path_buf(),
            system: system.as_ref().to_path_buf(),
        }
    }

    /// Place both scopes under `root`, as `root/user` and `root/system`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(root.join("user"), root.join("system"))
    }
}

impl StartupDirs for FixedDirs {
    fn startup_dir(&self, scope: Scope) -> Result<PathBuf> {
        Ok(match scope {
            Scope::User => self.user.clone(),
            Scope::System => self.system.clone(),
        })
    }
}

impl<T: StartupDirs + ?Sized> StartupDirs for &T {
    fn startup_dir(&self, scope: Scope) -> Result<PathBuf> {
        (**self).startup_dir(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_platform_system_dir() {
        let dir = PlatformDirs.startup_dir(Scope::System).unwrap();
        assert_eq!(dir, PathBuf::from("/etc/init.d"));
    }

    #[test]
    fn test_resolution_is_stable_and_side_effect_free() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = FixedDirs::under(temp_dir.path());

        let first = dirs.startup_dir(Scope::User).unwrap();
        let second = dirs.startup_dir(Scope::User).unwrap();

        assert_eq!(first, second);
        assert!(!first.exists());
        assert_ne!(first, dirs.startup_dir(Scope::System).unwrap());
    }

    #[test]
    fn test_platform_user_dir_is_stable() {
        if let Ok(first) = PlatformDirs.startup_dir(Scope::User) {
            assert_eq!(first, PlatformDirs.startup_dir(Scope::User).unwrap());
            assert!(first.ends_with("autostart"));
        }
    }
}
