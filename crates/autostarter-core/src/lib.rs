//! Autostarter - run-at-login registrations for XDG desktops.
//!
//! A registration is a launcher script (`<identifier>.sh`) plus a desktop
//! entry (`<identifier>.desktop`) pointing at it, written to either the
//! user's autostart directory or the system-wide startup directory.
//!
//! Interpreter, script location and arguments are embedded in the launcher
//! without quoting; only the identifier is validated. Callers are trusted.
//!
//! # Example
//!
//! ```rust,no_run
//! use autostarter::{AutostartManager, Registration, Scope};
//!
//! fn main() -> autostarter::Result<()> {
//!     let manager = AutostartManager::new();
//!
//!     let registration = Registration::builder("build", "/opt/build.sh")
//!         .interpreter("python3")
//!         .arguments("-v")
//!         .build();
//!     manager.add(&registration)?;
//!
//!     assert!(manager.check("build", Scope::User)?);
//!     manager.remove("build", Scope::User)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod desktop_entry;
pub mod error;
pub mod fs_ops;
pub mod identifier;
pub mod launcher;
pub mod manager;
pub mod platform;
pub mod scope;
pub mod startup_dirs;

// Re-export commonly used types
pub use desktop_entry::{DesktopEntry, DesktopEntryBuilder};
pub use error::{AutostartError, Result};
pub use fs_ops::RemovalStatus;
pub use launcher::LauncherScript;
pub use manager::{
    AutostartManager, Registration, RegistrationBuilder, RegistrationState, RemovalReport,
};
pub use scope::Scope;
pub use startup_dirs::{FixedDirs, PlatformDirs, StartupDirs};

/// Whether `identifier` is registered in the host startup directory.
pub fn check(identifier: &str, system_wide: bool) -> Result<bool> {
    AutostartManager::new().check(identifier, Scope::from(system_wide))
}

/// Register `script_location` to run at login (or boot, when `system_wide`).
pub fn add(
    identifier: &str,
    script_location: &str,
    interpreter: &str,
    system_wide: bool,
    arguments: &str,
) -> Result<()> {
    let registration = Registration::builder(identifier, script_location)
        .interpreter(interpreter)
        .system_wide(system_wide)
        .arguments(arguments)
        .build();
    AutostartManager::new().add(&registration)
}

/// Remove the registration for `identifier` from the host startup directory.
pub fn remove(identifier: &str, system_wide: bool) -> Result<bool> {
    AutostartManager::new().remove(identifier, Scope::from(system_wide))
}
