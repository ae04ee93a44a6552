//! Generator configuration
//!
//! Loaded from a TOML file. Connection parameters are consumed only by the
//! schema source; output and JPA options by the emitter. Required options
//! are checked up front so rendering never partially completes on a bad
//! config.

use serde::Deserialize;
use std::path::Path;

/// Error loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(String),
    #[error("Invalid config file: {0}")]
    Parse(String),
    #[error("Missing required option: {0}")]
    MissingOption(&'static str),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub jpa: JpaConfig,
}

/// Connection parameters for the dump source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub host: String,
    /// Database (schema) name to dump
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Dot-separated target package; one output directory per segment
    #[serde(default)]
    pub package: String,
    /// Output root path
    #[serde(default)]
    pub path: String,
    /// Table allow-list; empty means render every parsed table
    #[serde(default)]
    pub tables: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JpaConfig {
    /// Id-generation strategy; upper-cased at render time, `IDENTITY` when
    /// left empty
    #[serde(default)]
    pub generation_strategy: String,
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check the options rendering depends on. Called by the emitter before
    /// any table is rendered.
    pub fn validate_for_render(&self) -> Result<(), ConfigError> {
        if self.output.package.trim().is_empty() {
            return Err(ConfigError::MissingOption("output.package"));
        }
        if self.output.path.trim().is_empty() {
            return Err(ConfigError::MissingOption("output.path"));
        }
        Ok(())
    }

    /// Check the options the dump source depends on.
    pub fn validate_for_fetch(&self) -> Result<(), ConfigError> {
        if self.database.name.trim().is_empty() {
            return Err(ConfigError::MissingOption("database.name"));
        }
        if self.database.user.trim().is_empty() {
            return Err(ConfigError::MissingOption("database.user"));
        }
        Ok(())
    }
}
