//! Recommend Prompts use case.
//!
//! Resolves caller-boundary defaults, loads the catalog through the
//! [`CatalogSource`] port, and delegates ranking to the domain engine.
//! The engine contributes no errors of its own; everything that can fail
//! here is catalog loading.

use crate::config::DEFAULT_LIMIT;
use crate::ports::catalog_source::{CatalogError, CatalogSource};
use compass_domain::{Recommendation, recommend};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while producing recommendations.
#[derive(Error, Debug)]
pub enum RecommendPromptsError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Input for the [`RecommendPromptsUseCase`].
///
/// `existing_prompts` is expected pre-split into lines with blanks dropped —
/// that is the input provider's job. A missing `limit` falls back to
/// [`DEFAULT_LIMIT`] here at the call boundary.
#[derive(Debug, Clone)]
pub struct RecommendPromptsInput {
    /// Domain to recommend for. Matched case-insensitively.
    pub domain: String,
    /// Prompts the user already has, one per entry.
    pub existing_prompts: Vec<String>,
    /// Maximum number of suggestions. `None` means [`DEFAULT_LIMIT`].
    pub limit: Option<usize>,
}

impl RecommendPromptsInput {
    pub fn new(domain: impl Into<String>, existing_prompts: Vec<String>) -> Self {
        Self {
            domain: domain.into(),
            existing_prompts,
            limit: None,
        }
    }

    /// Set an explicit suggestion limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Result of a recommendation run.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendPromptsOutput {
    /// The domain that was asked for.
    pub domain: String,
    /// Ranked recommendations, best first. May be empty.
    pub recommendations: Vec<Recommendation>,
}

/// Use case for recommending candidate prompts.
pub struct RecommendPromptsUseCase {
    catalog: Arc<dyn CatalogSource>,
}

impl RecommendPromptsUseCase {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }

    /// Execute a recommendation run.
    pub fn execute(
        &self,
        input: RecommendPromptsInput,
    ) -> Result<RecommendPromptsOutput, RecommendPromptsError> {
        let limit = input.limit.unwrap_or(DEFAULT_LIMIT);

        info!(
            "Recommending up to {} prompts for domain '{}' ({} existing prompts)",
            limit,
            input.domain,
            input.existing_prompts.len()
        );

        let catalog = self.catalog.load()?;
        debug!(
            "Loaded {}: {} candidates, {} domains",
            self.catalog.describe(),
            catalog.candidates.len(),
            catalog.topics.len()
        );

        let recommendations = recommend(
            &input.domain,
            &input.existing_prompts,
            &catalog.candidates,
            &catalog.topics,
            limit,
        );

        info!("Produced {} recommendations", recommendations.len());

        Ok(RecommendPromptsOutput {
            domain: input.domain,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_domain::{CandidatePrompt, DomainTopicMap, PromptCatalog};
    use std::path::PathBuf;

    // ==================== Test Mocks ====================

    struct MockCatalog {
        catalog: PromptCatalog,
    }

    impl MockCatalog {
        fn new() -> Self {
            let candidates = vec![
                CandidatePrompt::new("Best AI-powered CRM systems", ["crm", "ai", "automation"]),
                CandidatePrompt::new("Affordable CRM platforms for SMBs", [
                    "crm",
                    "smb",
                    "pricing",
                    "affordable",
                ]),
                CandidatePrompt::new("SEO checklist for new sites", ["search", "seo"]),
            ];
            let topics = DomainTopicMap::from_entries([
                ("itstelepathic.com", vec!["crm", "ai", "automation"]),
                ("default", vec!["search", "marketing"]),
            ]);
            Self {
                catalog: PromptCatalog::new(candidates, topics),
            }
        }
    }

    impl CatalogSource for MockCatalog {
        fn load(&self) -> Result<PromptCatalog, CatalogError> {
            Ok(self.catalog.clone())
        }

        fn describe(&self) -> String {
            "mock catalog".to_string()
        }
    }

    struct FailingCatalog;

    impl CatalogSource for FailingCatalog {
        fn load(&self) -> Result<PromptCatalog, CatalogError> {
            Err(CatalogError::Parse {
                path: PathBuf::from("catalog.toml"),
                message: "bad TOML".to_string(),
            })
        }

        fn describe(&self) -> String {
            "failing catalog".to_string()
        }
    }

    // ==================== Tests ====================

    #[test]
    fn ranks_candidates_for_the_requested_domain() {
        let use_case = RecommendPromptsUseCase::new(Arc::new(MockCatalog::new()));
        let input = RecommendPromptsInput::new("itstelepathic.com", vec![]);

        let output = use_case.execute(input).unwrap();

        assert_eq!(output.domain, "itstelepathic.com");
        assert_eq!(output.recommendations.len(), 2);
        assert_eq!(output.recommendations[0].prompt, "Best AI-powered CRM systems");
    }

    #[test]
    fn default_limit_applies_when_unset() {
        let use_case = RecommendPromptsUseCase::new(Arc::new(MockCatalog::new()));

        let input = RecommendPromptsInput::new("itstelepathic.com", vec![]);
        assert!(input.limit.is_none());

        let output = use_case.execute(input).unwrap();
        assert!(output.recommendations.len() <= DEFAULT_LIMIT);
    }

    #[test]
    fn explicit_limit_truncates() {
        let use_case = RecommendPromptsUseCase::new(Arc::new(MockCatalog::new()));
        let input = RecommendPromptsInput::new("itstelepathic.com", vec![]).with_limit(1);

        let output = use_case.execute(input).unwrap();

        assert_eq!(output.recommendations.len(), 1);
    }

    #[test]
    fn existing_prompts_are_deduplicated_away() {
        let use_case = RecommendPromptsUseCase::new(Arc::new(MockCatalog::new()));
        let input = RecommendPromptsInput::new(
            "itstelepathic.com",
            vec!["best ai powered crm systems".to_string()],
        );

        let output = use_case.execute(input).unwrap();

        assert!(
            output
                .recommendations
                .iter()
                .all(|r| r.prompt != "Best AI-powered CRM systems")
        );
    }

    #[test]
    fn catalog_errors_propagate() {
        let use_case = RecommendPromptsUseCase::new(Arc::new(FailingCatalog));
        let input = RecommendPromptsInput::new("itstelepathic.com", vec![]);

        let result = use_case.execute(input);

        assert!(matches!(
            result,
            Err(RecommendPromptsError::Catalog(CatalogError::Parse { .. }))
        ));
    }

    #[test]
    fn empty_results_are_not_an_error() {
        let use_case = RecommendPromptsUseCase::new(Arc::new(MockCatalog::new()));
        // Unknown domain falls back to default topics (search/marketing);
        // the SEO candidate matches, so exclude it via an existing prompt.
        let input = RecommendPromptsInput::new(
            "unknown.example",
            vec!["SEO checklist for new sites".to_string()],
        );

        let output = use_case.execute(input).unwrap();

        assert!(output.recommendations.is_empty());
    }
}
