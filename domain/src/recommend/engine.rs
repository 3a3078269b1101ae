//! Recommendation engine
//!
//! Ranks a candidate pool against a domain's topics and the prompts the user
//! already has. Stateless and side-effect-free: concurrent calls need no
//! locking, and identical inputs always produce identical output.

use crate::catalog::entities::CandidatePrompt;
use crate::catalog::topics::DomainTopicMap;
use crate::recommend::normalize::normalize;
use crate::recommend::value_objects::Recommendation;
use std::collections::{BTreeSet, HashSet};

/// Rank candidate prompts for a domain.
///
/// Candidates are processed in input order:
///
/// - a candidate whose trimmed prompt is empty is skipped
/// - a candidate whose normalized prompt matches a normalized existing
///   prompt is skipped (exact duplicates only)
/// - a candidate whose tags share nothing with the domain's topic set is
///   skipped
///
/// Survivors are scored `overlap / sqrt(max(tag_count, 1))` where `overlap`
/// counts distinct matching tags and `tag_count` is the raw lower-cased tag
/// list length — duplicate tags inflate the denominator, not the overlap.
/// The result is sorted by score descending, ties broken by prompt ascending,
/// and truncated to `limit` entries.
///
/// This function never fails. No matching candidates, an unknown domain with
/// no `"default"` topics, or a zero `limit` all yield an empty list.
///
/// # Example
///
/// ```
/// use compass_domain::{CandidatePrompt, DomainTopicMap, recommend};
///
/// let candidates = vec![CandidatePrompt::new("Best AI-powered CRM systems", ["crm", "ai"])];
/// let topics = DomainTopicMap::from_entries([("default", vec!["crm"])]);
///
/// let ranked = recommend("example.com", &[], &candidates, &topics, 5);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].rationale, "Matches domain topics: crm");
/// ```
pub fn recommend(
    domain: &str,
    existing_prompts: &[String],
    candidates: &[CandidatePrompt],
    domain_topics: &DomainTopicMap,
    limit: usize,
) -> Vec<Recommendation> {
    let topic_set = domain_topics.resolve(domain);

    let seen: HashSet<String> = existing_prompts
        .iter()
        .map(|line| normalize(line))
        .filter(|key| !key.is_empty())
        .collect();

    let mut scored = Vec::new();

    for candidate in candidates {
        let prompt = candidate.prompt.trim();
        if prompt.is_empty() || seen.contains(&normalize(prompt)) {
            continue;
        }

        let tags: Vec<String> = candidate.tags.iter().map(|tag| tag.to_lowercase()).collect();

        // BTreeSet keeps the overlap de-duplicated and already sorted for
        // the rationale text.
        let overlap: BTreeSet<&str> = tags
            .iter()
            .map(String::as_str)
            .filter(|tag| topic_set.contains(*tag))
            .collect();
        if overlap.is_empty() {
            continue;
        }

        let score = overlap.len() as f64 / (tags.len().max(1) as f64).sqrt();
        let rationale = format!(
            "Matches domain topics: {}",
            overlap.into_iter().collect::<Vec<_>>().join(", ")
        );

        scored.push(Recommendation {
            prompt: prompt.to_string(),
            score,
            rationale,
        });
    }

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.prompt.cmp(&b.prompt))
    });
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics() -> DomainTopicMap {
        DomainTopicMap::from_entries([
            (
                "itstelepathic.com",
                vec!["crm", "customer-success", "automation", "ai", "startup"],
            ),
            ("default", vec!["search", "marketing", "content"]),
        ])
    }

    fn existing(prompts: &[&str]) -> Vec<String> {
        prompts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn score_is_overlap_over_sqrt_tag_count() {
        let candidates = vec![CandidatePrompt::new(
            "Best AI-powered CRM systems",
            ["crm", "ai", "automation"],
        )];
        let topics = DomainTopicMap::from_entries([("default", vec!["crm", "ai"])]);

        let ranked = recommend("any.com", &[], &candidates, &topics, 5);

        assert_eq!(ranked.len(), 1);
        let expected = 2.0 / 3.0_f64.sqrt();
        assert!((ranked[0].score - expected).abs() < 1e-12);
        assert!((ranked[0].score - 1.1547).abs() < 1e-4);
    }

    #[test]
    fn duplicate_tags_dilute_the_score() {
        // The denominator uses the raw tag count; the overlap stays distinct.
        let candidates = vec![CandidatePrompt::new("Padded tags", ["crm", "crm", "crm"])];
        let topics = DomainTopicMap::from_entries([("default", vec!["crm"])]);

        let ranked = recommend("any.com", &[], &candidates, &topics, 5);

        let expected = 1.0 / 3.0_f64.sqrt();
        assert!((ranked[0].score - expected).abs() < 1e-12);
    }

    #[test]
    fn tag_matching_is_case_insensitive() {
        let candidates = vec![CandidatePrompt::new("Mixed case tags", ["CRM", "Ai"])];
        let topics = DomainTopicMap::from_entries([("default", vec!["crm", "AI"])]);

        let ranked = recommend("any.com", &[], &candidates, &topics, 5);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].rationale, "Matches domain topics: ai, crm");
    }

    #[test]
    fn normalized_duplicates_are_filtered() {
        let candidates = vec![
            CandidatePrompt::new("Best CRMs of 2025", ["crm"]),
            CandidatePrompt::new("Fresh CRM prompt", ["crm"]),
        ];
        let topics = DomainTopicMap::from_entries([("default", vec!["crm"])]);
        let existing = existing(&["  best crms of 2025!! "]);

        let ranked = recommend("any.com", &existing, &candidates, &topics, 5);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].prompt, "Fresh CRM prompt");
    }

    #[test]
    fn irrelevant_candidates_never_appear() {
        let candidates = vec![
            CandidatePrompt::new("Alternatives to HubSpot for small teams", [
                "hubspot",
                "alternatives",
                "small-teams",
            ]),
            CandidatePrompt::new("No tags at all", Vec::<&str>::new()),
        ];

        let ranked = recommend("itstelepathic.com", &[], &candidates, &topics(), 5);

        assert!(ranked.is_empty());
    }

    #[test]
    fn blank_candidate_prompts_are_skipped() {
        let candidates = vec![
            CandidatePrompt::new("   ", ["crm"]),
            CandidatePrompt::new("", ["crm"]),
            CandidatePrompt::new("  Real prompt  ", ["crm"]),
        ];
        let topics = DomainTopicMap::from_entries([("default", vec!["crm"])]);

        let ranked = recommend("any.com", &[], &candidates, &topics, 5);

        assert_eq!(ranked.len(), 1);
        // The emitted prompt is trimmed.
        assert_eq!(ranked[0].prompt, "Real prompt");
    }

    #[test]
    fn sorted_by_score_then_prompt() {
        let candidates = vec![
            CandidatePrompt::new("Zebra prompt", ["crm", "extra"]),
            CandidatePrompt::new("Apple prompt", ["crm", "extra"]),
            CandidatePrompt::new("Strong prompt", ["crm"]),
        ];
        let topics = DomainTopicMap::from_entries([("default", vec!["crm"])]);

        let ranked = recommend("any.com", &[], &candidates, &topics, 5);

        // 1/sqrt(1) beats 1/sqrt(2); the tied pair orders alphabetically.
        assert_eq!(ranked[0].prompt, "Strong prompt");
        assert_eq!(ranked[1].prompt, "Apple prompt");
        assert_eq!(ranked[2].prompt, "Zebra prompt");
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let candidates = vec![
            CandidatePrompt::new("Weak match", ["crm", "a", "b", "c"]),
            CandidatePrompt::new("Strong match", ["crm"]),
            CandidatePrompt::new("Medium match", ["crm", "a"]),
        ];
        let topics = DomainTopicMap::from_entries([("default", vec!["crm"])]);

        let ranked = recommend("any.com", &[], &candidates, &topics, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].prompt, "Strong match");
        assert_eq!(ranked[1].prompt, "Medium match");
    }

    #[test]
    fn zero_limit_yields_empty() {
        let candidates = vec![CandidatePrompt::new("Match", ["crm"])];
        let topics = DomainTopicMap::from_entries([("default", vec!["crm"])]);

        assert!(recommend("any.com", &[], &candidates, &topics, 0).is_empty());
    }

    #[test]
    fn unknown_domain_uses_default_topics() {
        let candidates = vec![
            CandidatePrompt::new("SEO basics", ["search", "seo"]),
            CandidatePrompt::new("CRM vendor shortlist", ["crm"]),
        ];

        let ranked = recommend("unknown-domain.com", &[], &candidates, &topics(), 5);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].prompt, "SEO basics");
    }

    #[test]
    fn empty_topic_set_yields_empty_output() {
        let candidates = vec![CandidatePrompt::new("Anything", ["crm"])];
        let no_default = DomainTopicMap::from_entries([("other.com", vec!["crm"])]);

        assert!(recommend("missing.com", &[], &candidates, &no_default, 5).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let candidates = vec![
            CandidatePrompt::new("Best AI-powered CRM systems", ["crm", "ai", "automation"]),
            CandidatePrompt::new("Customer retention strategies", [
                "customer-success",
                "retention",
            ]),
        ];
        let existing = existing(&["Best CRMs of 2025"]);

        let first = recommend("itstelepathic.com", &existing, &candidates, &topics(), 5);
        let second = recommend("itstelepathic.com", &existing, &candidates, &topics(), 5);

        assert_eq!(first, second);
    }

    #[test]
    fn end_to_end_scenario() {
        let candidates = vec![
            CandidatePrompt::new("Top lightweight CRM tools for startups", [
                "crm",
                "startup",
                "lightweight",
                "tools",
            ]),
            CandidatePrompt::new("Best AI-powered CRM systems", ["crm", "ai", "automation"]),
            CandidatePrompt::new("What is the best project management tool for agencies?", [
                "project-management",
                "agencies",
                "tools",
            ]),
            CandidatePrompt::new("Customer retention strategies for SaaS startups", [
                "customer-success",
                "saas",
                "startup",
                "retention",
            ]),
        ];
        let existing = existing(&[
            "Best CRMs of 2025",
            "What CRM should I use for my early stage startup?",
            "How does Salesforce compare to alternatives?",
        ]);

        let ranked = recommend("itstelepathic.com", &existing, &candidates, &topics(), 5);

        // 3/sqrt(3) = sqrt(3) wins over 2/sqrt(4) and 2/sqrt(4).
        assert_eq!(ranked[0].prompt, "Best AI-powered CRM systems");
        assert!((ranked[0].score - 3.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(
            ranked[0].rationale,
            "Matches domain topics: ai, automation, crm"
        );
        assert!(
            ranked
                .iter()
                .all(|r| r.prompt != "What is the best project management tool for agencies?")
        );
    }
}
