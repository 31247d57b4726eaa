use super::utils;
use anyhow::{Context, Result};
use std::path::Path;

pub fn init(config: Option<&Path>, force: bool) -> Result<()> {
    let service = utils::config_service(config)?;
    let path = service.init(force)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

pub fn show(config: Option<&Path>) -> Result<()> {
    let effective = utils::load_config(config)?;
    let rendered = toml::to_string_pretty(&effective).context("failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}

pub fn path(config: Option<&Path>) -> Result<()> {
    let service = utils::config_service(config)?;
    println!("{}", service.path().display());
    Ok(())
}
