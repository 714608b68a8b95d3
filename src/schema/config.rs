//! Configuration for the merge command.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_database_path() -> PathBuf {
    PathBuf::from("Data/DataBaseHands.txt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("GeneratedAnimation.anim")
}

/// Paths used when merging animations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Text database of named hex animations.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// Destination of the merged `.anim` file.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            output_path: default_output_path(),
        }
    }
}

impl MergeConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Database path must not be empty")]
    EmptyDatabasePath,
    #[error("Output path must not be empty")]
    EmptyOutputPath,
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
