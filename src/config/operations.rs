//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{RowLockError, Result};
use crate::schema::is_valid_identifier;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(RowLockError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RowLockError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` when given, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| RowLockError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            RowLockError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `actor.kind` must be non-empty
    /// - table and column names must be plain SQL identifiers
    /// - the two lock columns must be distinct
    pub fn validate(&self) -> Result<()> {
        if self.actor.kind.trim().is_empty() {
            return Err(RowLockError::ConfigError(
                "config validation failed: actor.kind must be non-empty".to_string(),
            ));
        }

        let identifiers = [
            ("actor.table", &self.actor.table),
            ("actor.primary_key", &self.actor.primary_key),
            ("columns.locked", &self.columns.locked),
            ("columns.locked_by", &self.columns.locked_by),
        ];
        for (field, value) in identifiers {
            if !is_valid_identifier(value) {
                return Err(RowLockError::ConfigError(format!(
                    "config validation failed: {} must be a valid identifier (found '{}')",
                    field, value
                )));
            }
        }

        if self.columns.locked == self.columns.locked_by {
            return Err(RowLockError::ConfigError(format!(
                "config validation failed: columns.locked and columns.locked_by must differ (both '{}')",
                self.columns.locked
            )));
        }

        Ok(())
    }
}
