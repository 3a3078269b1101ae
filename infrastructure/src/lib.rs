//! Infrastructure layer for prompt-compass
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: catalog sources (built-in and TOML file) and
//! configuration file loading.

pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use catalog::{builtin::BuiltinCatalog, file::FileCatalog};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileOutputConfig,
    FileRecommendConfig, FileReplConfig,
};
