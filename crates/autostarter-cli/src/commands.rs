//! Subcommand implementations.
//!
//! Output goes to stdout for scripting; logs go to stderr.

use anyhow::{Context, Result};
use autostarter::{
    AutostartManager, PlatformDirs, Registration, RemovalStatus, Scope, StartupDirs,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Host startup directories with optional per-scope overrides.
#[derive(Debug, Clone, Default)]
pub struct CliDirs {
    user: Option<PathBuf>,
    system: Option<PathBuf>,
}

impl StartupDirs for CliDirs {
    fn startup_dir(&self, scope: Scope) -> autostarter::Result<PathBuf> {
        let overridden = match scope {
            Scope::User => &self.user,
            Scope::System => &self.system,
        };
        match overridden {
            Some(dir) => Ok(dir.clone()),
            None => PlatformDirs.startup_dir(scope),
        }
    }
}

pub fn manager(user: Option<PathBuf>, system: Option<PathBuf>) -> AutostartManager<CliDirs> {
    AutostartManager::with_dirs(CliDirs { user, system })
}

pub fn check(manager: &AutostartManager<CliDirs>, identifier: &str, system: bool) -> Result<ExitCode> {
    let enabled = manager
        .check(identifier, Scope::from(system))
        .with_context(|| format!("checking {identifier}"))?;

    if enabled {
        println!("enabled");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("disabled");
        Ok(ExitCode::from(1))
    }
}

pub fn add(
    manager: &AutostartManager<CliDirs>,
    identifier: &str,
    script: &str,
    interpreter: &str,
    system: bool,
    arguments: &str,
) -> Result<ExitCode> {
    let registration = Registration::builder(identifier, script)
        .interpreter(interpreter)
        .system_wide(system)
        .arguments(arguments)
        .build();
    manager
        .add(&registration)
        .with_context(|| format!("registering {identifier}"))?;

    let descriptor = manager.descriptor_path(identifier, registration.scope)?;
    println!("Registered {} at {}", identifier, descriptor.display());
    Ok(ExitCode::SUCCESS)
}

pub fn remove(manager: &AutostartManager<CliDirs>, identifier: &str, system: bool) -> Result<ExitCode> {
    let scope = Scope::from(system);
    let report = manager
        .remove_with_report(identifier, scope)
        .with_context(|| format!("removing {identifier}"))?;

    for (path, status) in [
        (manager.descriptor_path(identifier, scope)?, report.descriptor),
        (manager.launcher_path(identifier, scope)?, report.launcher),
    ] {
        let outcome = match status {
            RemovalStatus::Removed => "removed",
            RemovalStatus::NotFound => "not found",
        };
        println!("{}: {}", path.display(), outcome);
    }

    Ok(ExitCode::SUCCESS)
}

pub fn status(
    manager: &AutostartManager<CliDirs>,
    identifier: &str,
    system: bool,
    json: bool,
) -> Result<ExitCode> {
    let state = manager
        .inspect(identifier, Scope::from(system))
        .with_context(|| format!("inspecting {identifier}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} ({})", state.identifier, state.scope);
    println!(
        "  descriptor: {} [{}]",
        state.descriptor_path.display(),
        if state.descriptor_exists { "present" } else { "missing" }
    );
    println!(
        "  launcher:   {} [{}]",
        state.launcher_path.display(),
        match (state.launcher_exists, state.launcher_executable) {
            (false, _) => "missing",
            (true, false) => "not executable",
            (true, true) => "present",
        }
    );
    if state.hidden {
        println!("  hidden:     yes (ignored by the session manager)");
    }
    if state.is_orphaned() {
        println!("  launcher has no descriptor; run `remove` to clean up");
    }

    Ok(ExitCode::SUCCESS)
}
