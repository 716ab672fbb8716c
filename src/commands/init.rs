use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(&PathBuf::from(CONFIG_FILE_NAME), force)
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(config_path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
