//! Centralized configuration for autostart registrations.
//!
//! File names, directory names and generated-file constants live here so the
//! on-disk layout is defined in one place.

/// Constants for the generated launcher and descriptor files.
pub struct AutostartConfig;

impl AutostartConfig {
    pub const DEFAULT_INTERPRETER: &'static str = "sh";
    pub const LAUNCHER_SHEBANG: &'static str = "#!/bin/bash";
    pub const LAUNCHER_EXTENSION: &'static str = "sh";
    pub const DESCRIPTOR_EXTENSION: &'static str = "desktop";
    pub const LAUNCHER_MODE: u32 = 0o755;
    pub const DESKTOP_ENTRY_GROUP: &'static str = "[Desktop Entry]";
    pub const DESKTOP_ENTRY_TYPE: &'static str = "Application";
}

/// Startup directory locations.
pub struct PathsConfig;

impl PathsConfig {
    /// Subdirectory of the user config home scanned by XDG session managers.
    pub const AUTOSTART_DIR_NAME: &'static str = "autostart";
    /// Fallback config home relative to the user's home directory.
    pub const CONFIG_HOME_FALLBACK: &'static str = ".config";
    /// System-level startup scripts directory.
    pub const SYSTEM_STARTUP_DIR: &'static str = "/etc/init.d";
}
