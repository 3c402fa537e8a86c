//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// history:
///   capacity: 10   # calculations retained, oldest evicted first
/// ```
///
/// # Example
///
/// ```
/// use guard_salary::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_yaml_str("history:\n  capacity: 6\n").unwrap();
/// assert_eq!(loader.history_capacity(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use guard_salary::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/engine.yaml")?;
    /// # Ok::<(), guard_salary::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| {
            warn!(path = %path_str, "Configuration file not found");
            EngineError::ConfigNotFound {
                path: path_str.clone(),
            }
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            history_capacity = loader.history_capacity(),
            "Loaded engine configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        if config.history.capacity == 0 {
            return Err(EngineError::InvalidConfig {
                field: "history.capacity".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configured history capacity.
    pub fn history_capacity(&self) -> usize {
        self.config.history.capacity
    }
}
