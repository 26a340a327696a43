//! Identifier validation.
//!
//! The identifier becomes the stem of both generated filenames and the
//! `Name=` value of the descriptor. Only what would break either of those is
//! rejected; no escaping is done.

use crate::error::{AutostartError, Result};

/// Validate an identifier before any file is touched.
pub fn validate(identifier: &str) -> Result<()> {
    let reason = if identifier.is_empty() {
        Some("must not be empty")
    } else if identifier == "." || identifier == ".." {
        Some("must not be a relative directory name")
    } else if identifier.contains('/') {
        Some("contains a path separator")
    } else if identifier.contains('\0') {
        Some("contains a NUL byte")
    } else if identifier.contains(['\n', '\r']) {
        Some("contains a line break")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(AutostartError::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(validate("build").is_ok());
        assert!(validate("my-app_2.0").is_ok());
        assert!(validate("Sync Agent").is_ok());
    }

    #[test]
    fn test_rejects_unusable_names() {
        for bad in ["", ".", "..", "a/b", "../escape", "nul\0", "two\nlines", "cr\r"] {
            let err = validate(bad).unwrap_err();
            assert!(
                matches!(err, AutostartError::InvalidIdentifier { .. }),
                "expected rejection for {bad:?}"
            );
        }
    }
}
