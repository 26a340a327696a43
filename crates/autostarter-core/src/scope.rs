//! Registration scope.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a registration lives: the invoking user's autostart directory, or
/// the system-wide startup directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    #[default]
    User,
    System,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::User => "user",
            Scope::System => "system",
        }
    }

    pub fn is_system_wide(&self) -> bool {
        matches!(self, Scope::System)
    }
}

/// `true` selects the system-wide scope.
impl From<bool> for Scope {
    fn from(system_wide: bool) -> Self {
        if system_wide {
            Scope::System
        } else {
            Scope::User
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
