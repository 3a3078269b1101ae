//! Recommendation value objects

use serde::{Deserialize, Serialize};

/// A single recommended prompt.
///
/// Created fresh on every [`recommend`](crate::recommend::engine::recommend)
/// call; has no identity beyond the call that produced it and is never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The candidate's prompt text, trimmed.
    pub prompt: String,
    /// Overlap score, always >= 0. Higher is better.
    pub score: f64,
    /// Human-readable explanation of why the prompt matched.
    pub rationale: String,
}
