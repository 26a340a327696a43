//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module rather
//! than being scattered throughout the codebase.
//!
//! - `paths` - Startup directory locations
//! - `permissions` - Executable bit handling

pub mod paths;
pub mod permissions;

pub use paths::{system_startup_dir, user_autostart_dir, user_config_home};
pub use permissions::{is_executable, set_executable, set_mode};
