//! Layered settings loading for the agent configuration.
//!
//! Settings are read from TOML files (working directory first, then the
//! user's config locations) with a `CEREBRA_`-prefixed environment source
//! layered on top. `.env` files are honored before the environment is read.

use std::path::PathBuf;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use thiserror::Error;

use crate::models::AgentConfig;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgentConfig {
    /// Load the agent configuration from the default file locations and the
    /// environment.
    pub fn load() -> Result<Self, ConfigLoadError> {
        Self::load_from_paths(get_config_paths())
    }

    /// Load the agent configuration from an explicit list of candidate
    /// files, later files overriding earlier ones, with environment
    /// variables layered last.
    ///
    /// Missing files are skipped; a configuration without `name` is
    /// rejected. Optional fields fall back to the documented defaults and
    /// no numeric range checking is performed on weights.
    pub fn load_from_paths(paths: Vec<PathBuf>) -> Result<Self, ConfigLoadError> {
        load_dotenv_files();

        let mut builder = ConfigBuilder::builder();

        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("CEREBRA").try_parsing(true));

        let config = builder.build()?;

        if config.get_string("name").is_err() {
            return Err(ConfigLoadError::MissingRequired("name".to_string()));
        }

        Ok(config.try_deserialize()?)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("cerebra.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("cerebra").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".cerebra").join("config.toml"));
    }

    paths
}

fn load_dotenv_files() {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".env"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("cerebra").join(".env"));
    }

    for path in paths {
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cerebra"))
}

pub fn ensure_config_dir() -> Result<PathBuf, std::io::Error> {
    let config_dir = get_config_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine config directory",
        )
    })?;

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_is_rejected() {
        let result = AgentConfig::load_from_paths(Vec::new());
        assert!(matches!(result, Err(ConfigLoadError::MissingRequired(_))));
    }

    #[test]
    fn test_directory_helper() {
        assert!(get_config_dir().is_some());
    }
}
