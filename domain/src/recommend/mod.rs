//! Prompt recommendation
//!
//! The recommender is a pure function over catalog data: it never performs
//! I/O, holds no state between calls, and returns byte-identical output for
//! identical input. The pipeline is
//!
//! 1. resolve the domain's topic set ([`crate::catalog::topics`])
//! 2. normalize the user's existing prompts into de-duplication keys
//!    ([`normalize`])
//! 3. score topically-relevant, non-duplicate candidates and rank them
//!    ([`engine`])

pub mod engine;
pub mod normalize;
pub mod value_objects;

// Re-export main types
pub use engine::recommend;
pub use normalize::normalize;
pub use value_objects::Recommendation;
