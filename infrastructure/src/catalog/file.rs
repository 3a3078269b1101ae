//! TOML catalog file adapter
//!
//! Loads a catalog from a TOML file of the form:
//!
//! ```toml
//! [[candidates]]
//! prompt = "Best AI-powered CRM systems"
//! tags = ["crm", "ai", "automation"]
//!
//! [domains]
//! "itstelepathic.com" = ["crm", "ai"]
//! default = ["search", "marketing"]
//! ```
//!
//! Domain keys are lower-cased at load time so lookups against the
//! lower-cased request domain behave case-insensitively end to end. A
//! catalog without a `default` domain entry is rejected here — the engine
//! would silently fall back to the empty topic set, which is almost never
//! what a catalog author intended.

use compass_application::{CatalogError, CatalogSource};
use compass_domain::{CandidatePrompt, DomainTopicMap, PromptCatalog};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// On-disk catalog layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    candidates: Vec<CandidatePrompt>,
    domains: HashMap<String, Vec<String>>,
}

/// Catalog source backed by a TOML file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<PromptCatalog, CatalogError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        let parsed: CatalogFile = toml::from_str(&raw).map_err(|e| CatalogError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let topics = DomainTopicMap::new(
            parsed
                .domains
                .into_iter()
                .map(|(domain, topics)| (domain.to_lowercase(), topics))
                .collect(),
        );
        if !topics.contains_default() {
            return Err(CatalogError::MissingDefaultDomain);
        }

        debug!(
            "Loaded catalog file {}: {} candidates, {} domains",
            self.path.display(),
            parsed.candidates.len(),
            topics.len()
        );

        Ok(PromptCatalog::new(parsed.candidates, topics))
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}
