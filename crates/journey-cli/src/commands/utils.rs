use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use journey_application::AnalysisUseCase;
use journey_core::AnalysisConfig;
use journey_infrastructure::ConfigService;
use std::path::Path;

/// Config service for `--config` or the platform default file.
pub fn config_service(config: Option<&Path>) -> Result<ConfigService> {
    match config {
        Some(path) => Ok(ConfigService::with_path(path.to_path_buf())),
        None => ConfigService::new().context("failed to resolve the configuration path"),
    }
}

pub fn load_config(config: Option<&Path>) -> Result<AnalysisConfig> {
    let service = config_service(config)?;
    service
        .load()
        .with_context(|| format!("failed to load config from {}", service.path().display()))
}

pub fn usecase(config: AnalysisConfig) -> Result<AnalysisUseCase> {
    AnalysisUseCase::new(config)
}

/// CSV delimiters must be a single ASCII character.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        anyhow::bail!("delimiter must be an ASCII character, got '{}'", delimiter);
    }
    Ok(delimiter as u8)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
