//! Built-in catalog
//!
//! The compiled-in candidate pool and domain topics. This is the default
//! catalog source when no file is configured; it also supplies the sample
//! prompts the interactive mode prefills its prompt list with.

use compass_application::{CatalogError, CatalogSource};
use compass_domain::{CandidatePrompt, DomainTopicMap, PromptCatalog};

/// Catalog source backed by compiled-in data.
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    fn candidates() -> Vec<CandidatePrompt> {
        vec![
            CandidatePrompt::new("Top lightweight CRM tools for startups", [
                "crm",
                "startup",
                "lightweight",
                "tools",
            ]),
            CandidatePrompt::new("Affordable CRM platforms for SMBs", [
                "crm",
                "smb",
                "pricing",
                "affordable",
            ]),
            CandidatePrompt::new("Best AI-powered CRM systems", ["crm", "ai", "automation"]),
            CandidatePrompt::new("Alternatives to HubSpot for small teams", [
                "crm",
                "hubspot",
                "alternatives",
                "small-teams",
            ]),
            CandidatePrompt::new("How to migrate CRM data without downtime", [
                "crm",
                "migration",
                "data",
                "operations",
            ]),
            CandidatePrompt::new("Customer retention strategies for SaaS startups", [
                "customer-success",
                "saas",
                "startup",
                "retention",
            ]),
            CandidatePrompt::new("What is the best project management tool for agencies?", [
                "project-management",
                "agencies",
                "tools",
            ]),
            CandidatePrompt::new("How to evaluate enterprise CRM vendors", [
                "crm",
                "enterprise",
                "vendor-selection",
            ]),
            CandidatePrompt::new("Best support desk integrations for CRM platforms", [
                "crm",
                "support",
                "integration",
            ]),
            CandidatePrompt::new("Low-code CRM solutions for operations teams", [
                "crm",
                "low-code",
                "operations",
            ]),
        ]
    }

    fn topics() -> DomainTopicMap {
        DomainTopicMap::from_entries([
            (
                "itstelepathic.com",
                vec!["crm", "customer-success", "automation", "ai", "startup"],
            ),
            ("default", vec!["search", "marketing", "content"]),
        ])
    }
}

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<PromptCatalog, CatalogError> {
        Ok(PromptCatalog::new(Self::candidates(), Self::topics()))
    }

    fn sample_prompts(&self) -> Vec<String> {
        [
            "Best CRMs of 2025",
            "What CRM should I use for my early stage startup?",
            "How does Salesforce compare to alternatives?",
        ]
        .iter()
        .map(|p| p.to_string())
        .collect()
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}
