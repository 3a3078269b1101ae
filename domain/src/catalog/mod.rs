//! Prompt catalog domain
//!
//! The catalog is the static data the recommender works against: a pool of
//! candidate prompts with tags, and a mapping from domain names to topic
//! keywords. Both are immutable once loaded and are supplied by an adapter
//! in the infrastructure layer.

pub mod entities;
pub mod topics;

// Re-export main types
pub use entities::{CandidatePrompt, PromptCatalog};
pub use topics::{DEFAULT_DOMAIN, DomainTopicMap};
