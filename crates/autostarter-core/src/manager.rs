//! Autostart registration management.
//!
//! A registration is the pair `<identifier>.sh` (launcher) and
//! `<identifier>.desktop` (descriptor) in the startup directory of a scope.
//! It counts as enabled exactly when the descriptor exists.

use crate::config::AutostartConfig;
use crate::desktop_entry::DesktopEntry;
use crate::error::{AutostartError, Result};
use crate::fs_ops::{self, RemovalStatus};
use crate::identifier;
use crate::launcher::LauncherScript;
use crate::platform;
use crate::scope::Scope;
use crate::startup_dirs::{PlatformDirs, StartupDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Everything needed to install one registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub identifier: String,
    pub script_location: String,
    pub interpreter: String,
    pub scope: Scope,
    pub arguments: String,
}

impl Registration {
    /// Start a registration with interpreter `sh`, user scope and no arguments.
    pub fn builder(
        identifier: impl Into<String>,
        script_location: impl Into<String>,
    ) -> RegistrationBuilder {
        RegistrationBuilder {
            registration: Registration {
                identifier: identifier.into(),
                script_location: script_location.into(),
                interpreter: AutostartConfig::DEFAULT_INTERPRETER.to_string(),
                scope: Scope::User,
                arguments: String::new(),
            },
        }
    }

    fn launcher_script(&self) -> LauncherScript {
        LauncherScript::new(&self.interpreter, &self.script_location, &self.arguments)
    }
}

/// Builder for [`Registration`].
pub struct RegistrationBuilder {
    registration: Registration,
}

impl RegistrationBuilder {
    pub fn interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.registration.interpreter = interpreter.into();
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.registration.scope = scope;
        self
    }

    pub fn system_wide(self, system_wide: bool) -> Self {
        self.scope(Scope::from(system_wide))
    }

    pub fn arguments(mut self, arguments: impl Into<String>) -> Self {
        self.registration.arguments = arguments.into();
        self
    }

    pub fn build(self) -> Registration {
        self.registration
    }
}

/// Observed on-disk state of a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationState {
    pub identifier: String,
    pub scope: Scope,
    pub launcher_path: PathBuf,
    pub descriptor_path: PathBuf,
    pub launcher_exists: bool,
    pub launcher_executable: bool,
    pub descriptor_exists: bool,
    /// Descriptor carries `Hidden=true`.
    pub hidden: bool,
}

impl RegistrationState {
    /// Whether an XDG session manager would actually run the entry.
    pub fn is_active(&self) -> bool {
        self.descriptor_exists && !self.hidden
    }

    /// Launcher present without a descriptor, e.g. after an interrupted add.
    pub fn is_orphaned(&self) -> bool {
        self.launcher_exists && !self.descriptor_exists
    }
}

/// Per-file outcome of a remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalReport {
    pub launcher: RemovalStatus,
    pub descriptor: RemovalStatus,
}

impl RemovalReport {
    /// At least one file was deleted.
    pub fn removed_any(&self) -> bool {
        self.launcher == RemovalStatus::Removed || self.descriptor == RemovalStatus::Removed
    }
}

/// Manages autostart registrations against a [`StartupDirs`] provider.
#[derive(Debug, Clone, Default)]
pub struct AutostartManager<D = PlatformDirs> {
    dirs: D,
}

impl AutostartManager<PlatformDirs> {
    /// Manager for the host's startup directories.
    pub fn new() -> Self {
        Self { dirs: PlatformDirs }
    }
}

impl<D: StartupDirs> AutostartManager<D> {
    /// Manager with an injected directory provider.
    pub fn with_dirs(dirs: D) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &D {
        &self.dirs
    }

    /// Startup directory for `scope`. Touches nothing on disk.
    pub fn startup_dir(&self, scope: Scope) -> Result<PathBuf> {
        self.dirs.startup_dir(scope)
    }

    /// Path of the launcher file for `identifier`.
    pub fn launcher_path(&self, identifier: &str, scope: Scope) -> Result<PathBuf> {
        identifier::validate(identifier)?;
        self.artifact_path(identifier, scope, AutostartConfig::LAUNCHER_EXTENSION)
    }

    /// Path of the descriptor file for `identifier`.
    pub fn descriptor_path(&self, identifier: &str, scope: Scope) -> Result<PathBuf> {
        identifier::validate(identifier)?;
        self.artifact_path(identifier, scope, AutostartConfig::DESCRIPTOR_EXTENSION)
    }

    fn artifact_path(&self, identifier: &str, scope: Scope, extension: &str) -> Result<PathBuf> {
        Ok(self
            .startup_dir(scope)?
            .join(format!("{}.{}", identifier, extension)))
    }

    /// Whether the registration is enabled, i.e. its descriptor exists.
    ///
    /// A missing startup directory means "not enabled", never an error. The
    /// descriptor's `Hidden` key is not consulted; see [`Self::inspect`].
    pub fn check(&self, identifier: &str, scope: Scope) -> Result<bool> {
        let descriptor = self.descriptor_path(identifier, scope)?;
        let enabled = descriptor.exists();
        debug!(
            "Autostart entry {} ({}) enabled: {}",
            identifier, scope, enabled
        );
        Ok(enabled)
    }

    /// Install a registration, overwriting any previous one with the same key.
    ///
    /// Creates the startup directory if needed, writes the launcher (0755),
    /// then the descriptor. A failure after the launcher is written leaves
    /// it in place.
    pub fn add(&self, registration: &Registration) -> Result<()> {
        let (name, scope) = (registration.identifier.as_str(), registration.scope);
        identifier::validate(name)?;

        let start_dir = self.startup_dir(scope)?;
        fs::create_dir_all(&start_dir)
            .map_err(|e| AutostartError::io_with_path("create startup directory", e, &start_dir))?;

        let launcher_path = self.launcher_path(name, scope)?;
        registration.launcher_script().write_to_file(&launcher_path)?;

        let descriptor = DesktopEntry::builder()
            .name(name)
            .exec(launcher_path.to_string_lossy())
            .build();
        descriptor.write_to_file(&self.descriptor_path(name, scope)?)?;

        info!(
            "Registered autostart entry {} ({}) -> {}",
            name,
            scope,
            registration.launcher_script().command_line().trim_end()
        );
        Ok(())
    }

    /// Remove a registration.
    ///
    /// Returns `true` when each file was either deleted or already absent,
    /// which is every case that does not fail: filesystem errors other than
    /// "not found" are returned as `Err`.
    pub fn remove(&self, identifier: &str, scope: Scope) -> Result<bool> {
        self.remove_with_report(identifier, scope)?;
        Ok(true)
    }

    /// Remove a registration and report what happened to each file.
    ///
    /// The descriptor goes first so an interrupted remove leaves the entry
    /// disabled.
    pub fn remove_with_report(&self, identifier: &str, scope: Scope) -> Result<RemovalReport> {
        let descriptor = fs_ops::remove_if_exists(&self.descriptor_path(identifier, scope)?)?;
        let launcher = fs_ops::remove_if_exists(&self.launcher_path(identifier, scope)?)?;

        let report = RemovalReport {
            launcher,
            descriptor,
        };
        if report.removed_any() {
            info!("Removed autostart entry {} ({})", identifier, scope);
        } else {
            debug!("No autostart entry {} ({}) to remove", identifier, scope);
        }
        Ok(report)
    }

    /// Report the on-disk state of a registration, including the
    /// descriptor's `Hidden` flag.
    pub fn inspect(&self, identifier: &str, scope: Scope) -> Result<RegistrationState> {
        let launcher_path = self.launcher_path(identifier, scope)?;
        let descriptor_path = self.descriptor_path(identifier, scope)?;

        let descriptor_exists = descriptor_path.exists();
        let hidden = if descriptor_exists {
            read_hidden(&descriptor_path)
        } else {
            false
        };

        let state = RegistrationState {
            identifier: identifier.to_string(),
            scope,
            launcher_exists: launcher_path.exists(),
            launcher_executable: platform::is_executable(&launcher_path),
            descriptor_exists,
            hidden,
            launcher_path,
            descriptor_path,
        };
        if state.is_orphaned() {
            warn!(
                "Launcher {} has no descriptor",
                state.launcher_path.display()
            );
        }
        Ok(state)
    }
}

/// Unreadable descriptors count as not hidden; `check` already reports them
/// as enabled.
fn read_hidden(path: &Path) -> bool {
    match DesktopEntry::read_from_file(path) {
        Ok(entry) => entry.hidden,
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::startup_dirs::FixedDirs;
    use tempfile::TempDir;

    fn manager(temp_dir: &TempDir) -> AutostartManager<FixedDirs> {
        AutostartManager::with_dirs(FixedDirs::under(temp_dir.path()))
    }

    #[test]
    fn test_registration_defaults() {
        let registration = Registration::builder("build", "/opt/build.sh").build();
        assert_eq!(registration.interpreter, "sh");
        assert_eq!(registration.scope, Scope::User);
        assert!(registration.arguments.is_empty());
    }

    #[test]
    fn test_check_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);

        assert!(!manager.check("build", Scope::User).unwrap());
        assert!(!manager.startup_dir(Scope::User).unwrap().exists());
    }

    #[test]
    fn test_add_check_remove_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);
        let registration = Registration::builder("build", "/opt/build.sh")
            .interpreter("python3")
            .arguments("-v")
            .build();

        manager.add(&registration).unwrap();
        assert!(manager.check("build", Scope::User).unwrap());

        let report = manager.remove_with_report("build", Scope::User).unwrap();
        assert_eq!(report.launcher, RemovalStatus::Removed);
        assert_eq!(report.descriptor, RemovalStatus::Removed);
        assert!(!manager.check("build", Scope::User).unwrap());
    }

    #[test]
    fn test_add_writes_expected_files() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);
        let registration = Registration::builder("build", "/opt/build.sh")
            .interpreter("python3")
            .arguments("-v")
            .build();

        manager.add(&registration).unwrap();

        let launcher_path = manager.launcher_path("build", Scope::User).unwrap();
        assert_eq!(
            fs::read_to_string(&launcher_path).unwrap(),
            "#!/bin/bash\n\npython3 /opt/build.sh -v\n"
        );
        assert!(platform::is_executable(&launcher_path));

        let descriptor =
            fs::read_to_string(manager.descriptor_path("build", Scope::User).unwrap()).unwrap();
        assert!(descriptor.contains("Name=build\n"));
        assert!(descriptor.contains(&format!("Exec={}\n", launcher_path.display())));
    }

    #[test]
    fn test_add_rejects_invalid_identifier_before_writing() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);
        let registration = Registration::builder("../escape", "/opt/x.sh").build();

        let err = manager.add(&registration).unwrap_err();
        assert!(matches!(err, AutostartError::InvalidIdentifier { .. }));
        assert!(!manager.startup_dir(Scope::User).unwrap().exists());
    }

    #[test]
    fn test_remove_never_registered() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);

        assert!(manager.remove("ghost", Scope::User).unwrap());
        let report = manager.remove_with_report("ghost", Scope::User).unwrap();
        assert!(!report.removed_any());
    }

    #[test]
    fn test_remove_half_installed() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);
        let dir = manager.startup_dir(Scope::User).unwrap();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("half.sh"), "#!/bin/bash\n").unwrap();

        let report = manager.remove_with_report("half", Scope::User).unwrap();
        assert_eq!(report.launcher, RemovalStatus::Removed);
        assert_eq!(report.descriptor, RemovalStatus::NotFound);
        assert!(report.removed_any());
        assert!(manager.remove("half", Scope::User).unwrap());
    }

    #[test]
    fn test_inspect_reports_hidden_and_orphans() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(&temp_dir);
        manager
            .add(&Registration::builder("sync", "/opt/sync.sh").build())
            .unwrap();

        let descriptor_path = manager.descriptor_path("sync", Scope::User).unwrap();
        let mut content = fs::read_to_string(&descriptor_path).unwrap();
        content.push_str("Hidden=true\n");
        fs::write(&descriptor_path, content).unwrap();

        let state = manager.inspect("sync", Scope::User).unwrap();
        assert!(state.descriptor_exists);
        assert!(state.hidden);
        assert!(!state.is_active());
        assert!(manager.check("sync", Scope::User).unwrap());

        fs::remove_file(&descriptor_path).unwrap();
        let state = manager.inspect("sync", Scope::User).unwrap();
        assert!(state.is_orphaned());
        assert!(state.launcher_executable);
    }
}
