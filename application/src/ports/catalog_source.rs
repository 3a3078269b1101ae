//! Catalog source port
//!
//! Defines the interface through which the application layer obtains the
//! candidate pool and domain topics. Implementations (adapters) live in the
//! infrastructure layer.

use compass_domain::PromptCatalog;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Catalog topic map has no \"default\" entry")]
    MissingDefaultDomain,
}

/// Supplier of catalog data
///
/// `Send + Sync` so a source can be shared across threads; loading is
/// synchronous — adapters read local data or return compiled-in values.
pub trait CatalogSource: Send + Sync {
    /// Load the candidate pool and domain topics.
    fn load(&self) -> Result<PromptCatalog, CatalogError>;

    /// Prompts used to prefill interactive input. Empty unless the provider
    /// ships samples.
    fn sample_prompts(&self) -> Vec<String> {
        Vec::new()
    }

    /// Human-readable description of where the catalog comes from.
    fn describe(&self) -> String;
}
