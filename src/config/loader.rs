//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay schedules
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RateTable, ScheduleConfig, ScheduleMetadata, ShiftBoundaries};

/// Loads and provides access to a pay schedule configuration.
///
/// The `ConfigLoader` reads a YAML schedule file from a directory and
/// provides access to the boundaries and rates it declares.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/babysitter/
/// └── schedule.yaml   # Boundaries and per-band rates
/// ```
///
/// # Example
///
/// ```no_run
/// use sitter_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/babysitter").unwrap();
/// println!("Standard rate: ${}", loader.rates().standard);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ScheduleConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/babysitter")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// schedule file is missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sitter_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/babysitter")?;
    /// # Ok::<(), sitter_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let schedule_path = path.as_ref().join("schedule.yaml");
        let config = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;

        tracing::debug!(
            schedule = %config.metadata.name,
            version = %config.metadata.version,
            "loaded pay schedule configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying schedule configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.config.metadata
    }

    /// Returns the payable shift window.
    pub fn boundaries(&self) -> &ShiftBoundaries {
        &self.config.boundaries
    }

    /// Returns the per-band hourly rates.
    pub fn rates(&self) -> &RateTable {
        &self.config.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/babysitter"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().name, "Standard babysitting schedule");
    }

    #[test]
    fn test_loaded_boundaries_match_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.boundaries().earliest_start.to_string(), "5:00 PM");
        assert_eq!(loader.boundaries().latest_end.to_string(), "4:00 AM");
    }

    #[test]
    fn test_loaded_rates_match_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.rates().standard, Decimal::from(12));
        assert_eq!(loader.rates().post_bedtime, Decimal::from(8));
        assert_eq!(loader.rates().post_midnight, Decimal::from(16));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("schedule.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
