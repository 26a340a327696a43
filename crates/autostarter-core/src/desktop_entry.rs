//! Desktop entry (.desktop file) generation and parsing.
//!
//! Generates the minimal subset of the XDG Desktop Entry Specification that
//! autostart needs, and reads back the keys that matter for inspecting a
//! registration.

use crate::config::AutostartConfig;
use crate::error::{AutostartError, Result};
use crate::fs_ops;
use std::fmt::{self, Write as FmtWrite};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A desktop entry representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    /// Entry type (usually "Application").
    pub entry_type: String,
    /// Entry name.
    pub name: String,
    /// Executable command.
    pub exec: String,
    /// `Hidden=true`: the session manager must ignore the entry.
    pub hidden: bool,
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            entry_type: AutostartConfig::DESKTOP_ENTRY_TYPE.to_string(),
            name: String::new(),
            exec: String::new(),
            hidden: false,
        }
    }
}

impl DesktopEntry {
    /// Create a new desktop entry builder.
    pub fn builder() -> DesktopEntryBuilder {
        DesktopEntryBuilder::new()
    }

    /// Parse the `[Desktop Entry]` group of a .desktop file.
    ///
    /// Comments, blank lines, unknown keys, localized keys and other groups
    /// are skipped. Missing keys keep their defaults.
    pub fn parse(content: &str) -> Self {
        let mut entry = DesktopEntry {
            entry_type: String::new(),
            ..Default::default()
        };
        let mut in_main_group = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') {
                in_main_group = line == AutostartConfig::DESKTOP_ENTRY_GROUP;
                continue;
            }
            if !in_main_group {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "Type" => entry.entry_type = value.to_string(),
                "Name" => entry.name = value.to_string(),
                "Exec" => entry.exec = value.to_string(),
                "Hidden" => entry.hidden = value == "true",
                _ => {}
            }
        }

        entry
    }

    /// Read and parse a .desktop file.
    pub fn read_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AutostartError::io_with_path("read desktop file", e, path))?;
        Ok(Self::parse(&content))
    }

    /// Write the desktop entry to a file with default permissions.
    ///
    /// The parent directory must exist.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        fs_ops::atomic_write(path, &self.to_string())?;

        debug!("Wrote desktop entry to {:?}", path);
        Ok(())
    }
}

impl fmt::Display for DesktopEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut content = String::new();

        writeln!(content, "{}", AutostartConfig::DESKTOP_ENTRY_GROUP)?;
        writeln!(content, "Type={}", self.entry_type)?;
        writeln!(content, "Name={}", self.name)?;
        writeln!(content, "Exec={}", self.exec)?;

        if self.hidden {
            writeln!(content, "Hidden=true")?;
        }

        f.write_str(&content)
    }
}

/// Builder for desktop entries.
pub struct DesktopEntryBuilder {
    entry: DesktopEntry,
}

impl DesktopEntryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entry: DesktopEntry::default(),
        }
    }

    /// Set the entry name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = name.into();
        self
    }

    /// Set the executable command.
    pub fn exec(mut self, exec: impl Into<String>) -> Self {
        self.entry.exec = exec.into();
        self
    }

    /// Set whether the entry is hidden.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.entry.hidden = hidden;
        self
    }

    /// Build the desktop entry.
    pub fn build(self) -> DesktopEntry {
        self.entry
    }
}

impl Default for DesktopEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
