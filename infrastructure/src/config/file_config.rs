//! Configuration file schema

use compass_application::LIMIT_RANGE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a loaded configuration carries unusable values.
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("recommend.limit must be between {min} and {max}, got {value}")]
    LimitOutOfRange {
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("output.format must be \"full\", \"compact\" or \"json\", got \"{0}\"")]
    UnknownOutputFormat(String),
}

/// Recommendation defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecommendConfig {
    /// Domain used when the CLI gives none.
    pub domain: Option<String>,
    /// Default number of suggestions.
    pub limit: Option<usize>,
}

/// Catalog settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Path to a TOML catalog file. Unset means the built-in catalog.
    pub path: Option<PathBuf>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format: "full", "compact", or "json".
    pub format: Option<String>,
    /// Enable colored output.
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Interactive mode settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the welcome banner.
    pub show_banner: bool,
    /// Path to the history file.
    pub history_file: Option<PathBuf>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            history_file: None,
        }
    }
}

/// Main configuration file schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Recommendation defaults
    pub recommend: FileRecommendConfig,
    /// Catalog settings
    pub catalog: FileCatalogConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive mode settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Check the loaded values against the ranges the input boundary
    /// accepts. Called once after loading, before any value is used.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(limit) = self.recommend.limit {
            if !LIMIT_RANGE.contains(&limit) {
                return Err(ConfigValidationError::LimitOutOfRange {
                    value: limit,
                    min: *LIMIT_RANGE.start(),
                    max: *LIMIT_RANGE.end(),
                });
            }
        }

        if let Some(format) = &self.output.format {
            if !matches!(format.as_str(), "full" | "compact" | "json") {
                return Err(ConfigValidationError::UnknownOutputFormat(format.clone()));
            }
        }

        Ok(())
    }
}
