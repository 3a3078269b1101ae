//! Domain layer for prompt-compass
//!
//! This crate contains the core recommendation logic and catalog value
//! objects. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! A static pool of candidate prompts, each carrying a list of tags, plus a
//! mapping from domain names to topic keywords. Both are supplied by an
//! external catalog provider.
//!
//! ## Recommendation
//!
//! [`recommend`] ranks the candidate pool for a domain: candidates that
//! duplicate an existing prompt (after normalization) or share no tags with
//! the domain's topics are dropped, the rest are scored by tag/topic overlap
//! and returned best-first.

pub mod catalog;
pub mod recommend;
pub mod util;

// Re-export commonly used types
pub use catalog::{
    entities::{CandidatePrompt, PromptCatalog},
    topics::{DEFAULT_DOMAIN, DomainTopicMap},
};
pub use recommend::{engine::recommend, normalize::normalize, value_objects::Recommendation};
