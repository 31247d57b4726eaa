//! Platform paths for the journey configuration.
//!
//! ```text
//! ~/.config/journey/           # Config directory (platform default)
//! └── config.toml              # Analysis configuration
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// `dirs` found no platform directory (no `$HOME`, for instance).
    #[error("no platform {0} directory available")]
    NoPlatformDir(&'static str),
}

const APP_DIR: &str = "journey";

/// Platform paths for the journey tool.
pub struct JourneyPaths;

impl JourneyPaths {
    /// Returns the journey configuration directory (e.g., `~/.config/journey/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::NoPlatformDir("config"))
    }

    /// `<config dir>/config.toml`
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
