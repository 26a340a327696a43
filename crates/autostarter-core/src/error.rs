//! Error types for autostart registration.
//!
//! Filesystem failures are carried through unchanged as the `source` of
//! [`AutostartError::Io`], together with the path being operated on.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the autostarter library.
#[derive(Debug, Error)]
pub enum AutostartError {
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid identifier {identifier:?}: {reason}")]
    InvalidIdentifier { identifier: String, reason: String },
}

/// Result type alias for autostart operations.
pub type Result<T> = std::result::Result<T, AutostartError>;

impl From<std::io::Error> for AutostartError {
    fn from(err: std::io::Error) -> Self {
        AutostartError::Io {
            message: err.to_string(),
            path: None,
            source: err,
        }
    }
}

impl AutostartError {
    /// Create an IO error with path context.
    pub fn io_with_path(
        message: impl Into<String>,
        err: std::io::Error,
        path: impl Into<PathBuf>,
    ) -> Self {
        AutostartError::Io {
            message: message.into(),
            path: Some(path.into()),
            source: err,
        }
    }

    /// Underlying IO error kind, if this is a filesystem failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            AutostartError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = AutostartError::InvalidIdentifier {
            identifier: "a/b".into(),
            reason: "contains a path separator".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid identifier \"a/b\": contains a path separator"
        );
    }

    #[test]
    fn test_io_with_path_keeps_kind() {
        let err = AutostartError::io_with_path(
            "write launcher",
            io::Error::from(io::ErrorKind::PermissionDenied),
            "/etc/init.d/build.sh",
        );
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
        assert!(err.to_string().contains("/etc/init.d/build.sh"));
    }

    #[test]
    fn test_config_error_has_no_io_kind() {
        let err = AutostartError::Config {
            message: "no home".into(),
        };
        assert!(err.io_kind().is_none());
    }
}
