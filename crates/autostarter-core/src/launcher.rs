//! Launcher script generation.
//!
//! The launcher is a three-line bash script that runs the target script with
//! its interpreter. Interpreter, script location and arguments are written
//! verbatim: no quoting or escaping is applied, so callers must pass values
//! they trust.

use crate::config::AutostartConfig;
use crate::error::Result;
use crate::fs_ops;
use crate::platform;
use std::path::Path;
use tracing::debug;

/// A launcher script for one registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherScript {
    /// Program the target script runs under (e.g. `sh`, `python3`).
    pub interpreter: String,
    /// Path of the script to run.
    pub script_location: String,
    /// Raw argument string appended to the command line.
    pub arguments: String,
}

impl LauncherScript {
    pub fn new(
        interpreter: impl Into<String>,
        script_location: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            script_location: script_location.into(),
            arguments: arguments.into(),
        }
    }

    /// The single command line the launcher executes.
    pub fn command_line(&self) -> String {
        format!(
            "{} {} {}",
            self.interpreter, self.script_location, self.arguments
        )
    }

    /// Generate the script content.
    ///
    /// With empty arguments the command line keeps its trailing space.
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\n",
            AutostartConfig::LAUNCHER_SHEBANG,
            self.command_line()
        )
    }

    /// Write the launcher to `path` and mark it executable (0755).
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        fs_ops::atomic_write(path, &self.render())?;
        platform::set_executable(path)?;

        debug!("Wrote launcher script to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_exact() {
        let script = LauncherScript::new("python3", "/opt/build.sh", "-v");
        assert_eq!(script.render(), "#!/bin/bash\n\npython3 /opt/build.sh -v\n");
    }

    #[test]
    fn test_render_without_arguments() {
        let script = LauncherScript::new("sh", "/opt/sync.sh", "");
        assert_eq!(script.render(), "#!/bin/bash\n\nsh /opt/sync.sh \n");
    }

    #[test]
    fn test_write_script() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.sh");

        LauncherScript::new("python3", "/opt/build.sh", "--watch src")
            .write_to_file(&path)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("#!/bin/bash\n"));
        assert!(content.ends_with("python3 /opt/build.sh --watch src\n"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }
}
