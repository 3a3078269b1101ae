//! Catalog entities

use crate::catalog::topics::DomainTopicMap;
use serde::{Deserialize, Serialize};

/// A candidate prompt in the catalog.
///
/// Candidates are static data: a human-readable prompt plus the tags used
/// for topic matching. The tag list may be empty, in which case the
/// candidate can never be recommended (no overlap is possible).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePrompt {
    /// The prompt text shown to the user.
    pub prompt: String,
    /// Tags used for topic matching. Compared case-insensitively.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CandidatePrompt {
    /// Create a candidate from a prompt and its tags.
    pub fn new(
        prompt: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// The full catalog a provider hands to the application layer: the candidate
/// pool and the domain-to-topics mapping, loaded together.
///
/// The catalog itself enforces nothing — a topic map without a `"default"`
/// entry still resolves (to the empty topic set). Providers that load
/// catalogs from external data validate the `"default"` invariant at load
/// time instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptCatalog {
    /// Candidate prompts, in provider order.
    pub candidates: Vec<CandidatePrompt>,
    /// Domain name → topic keywords.
    pub topics: DomainTopicMap,
}

impl PromptCatalog {
    pub fn new(candidates: Vec<CandidatePrompt>, topics: DomainTopicMap) -> Self {
        Self { candidates, topics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_from_tag_iterator() {
        let candidate = CandidatePrompt::new("Best CRM tools", ["crm", "tools"]);
        assert_eq!(candidate.prompt, "Best CRM tools");
        assert_eq!(candidate.tags, vec!["crm", "tools"]);
    }

    #[test]
    fn candidate_tags_default_to_empty_on_deserialize() {
        let candidate: CandidatePrompt =
            serde_json::from_str(r#"{ "prompt": "Tagless prompt" }"#).unwrap();
        assert!(candidate.tags.is_empty());
    }
}
