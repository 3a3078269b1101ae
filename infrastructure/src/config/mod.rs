//! Configuration file loading for prompt-compass
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./compass.toml` or `./.compass.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/prompt-compass/config.toml`
//! 4. Fallback: `~/.config/prompt-compass/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileConfig, FileOutputConfig, FileRecommendConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
