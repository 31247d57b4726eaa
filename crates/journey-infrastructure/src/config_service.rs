//! Configuration service.
//!
//! Loads the analysis configuration from `~/.config/journey/config.toml` or an
//! explicit path. A missing file means "use the defaults".

use crate::paths::JourneyPaths;
use crate::storage::TomlStore;
use journey_core::{AnalysisConfig, JourneyError, Result};
use std::path::{Path, PathBuf};

pub struct ConfigService {
    file: TomlStore<AnalysisConfig>,
}

impl ConfigService {
    /// Creates a service for the platform default config file.
    pub fn new() -> Result<Self> {
        let path = JourneyPaths::config_file().map_err(|e| JourneyError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service for an explicit config file (used by `--config` and tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: TomlStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads and validates the configuration, falling back to defaults when
    /// the file does not exist or is empty.
    pub fn load(&self) -> Result<AnalysisConfig> {
        let config = match self.file.read()? {
            Some(config) => {
                tracing::debug!(path = %self.path().display(), "loaded configuration");
                config
            }
            None => {
                tracing::debug!(path = %self.path().display(), "no configuration file, using defaults");
                AnalysisConfig::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates and writes the configuration atomically.
    pub fn save(&self, config: &AnalysisConfig) -> Result<()> {
        config.validate()?;
        self.file.write(config)?;
        Ok(())
    }

    /// Writes the default configuration.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn init(&self, force: bool) -> Result<PathBuf> {
        if self.path().exists() && !force {
            return Err(JourneyError::config(format!(
                "{} already exists (use --force to overwrite)",
                self.path().display()
            )));
        }
        self.save(&AnalysisConfig::default())?;
        tracing::info!(path = %self.path().display(), "wrote default configuration");
        Ok(self.path().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.load().unwrap(), AnalysisConfig::default());
    }

    #[test]
    fn test_init_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("journey").join("config.toml"));

        let path = service.init(false).unwrap();
        assert!(path.exists());
        assert_eq!(service.load().unwrap(), AnalysisConfig::default());

        let err = service.init(false).unwrap_err();
        assert!(err.is_config());
        assert!(service.init(true).is_ok());
    }

    #[test]
    fn test_invalid_values_are_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "top_edges = 0\n").unwrap();

        let err = ConfigService::with_path(path).load().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        let config = AnalysisConfig {
            order_marker: String::new(),
            ..AnalysisConfig::default()
        };

        assert!(service.save(&config).is_err());
        assert!(!service.path().exists());
    }
}
