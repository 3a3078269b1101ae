//! Domain-to-topic mapping

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Key of the fallback entry used when a domain is not in the map.
pub const DEFAULT_DOMAIN: &str = "default";

/// Mapping from domain name to topic keywords.
///
/// Domain lookup is case-insensitive: [`DomainTopicMap::resolve`] lower-cases
/// the requested domain before the lookup, and providers are expected to
/// store keys in lower case (the file adapter lower-cases them at load time).
///
/// A map without a [`DEFAULT_DOMAIN`] entry is still usable — unknown domains
/// then resolve to the empty topic set, which makes every candidate fail the
/// overlap check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainTopicMap(HashMap<String, Vec<String>>);

impl DomainTopicMap {
    pub fn new(map: HashMap<String, Vec<String>>) -> Self {
        Self(map)
    }

    /// Build a map from `(domain, topics)` pairs.
    pub fn from_entries<K, T>(entries: impl IntoIterator<Item = (K, Vec<T>)>) -> Self
    where
        K: Into<String>,
        T: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(domain, topics)| {
                    (domain.into(), topics.into_iter().map(Into::into).collect())
                })
                .collect(),
        )
    }

    /// Resolve the topic set for a domain.
    ///
    /// The domain is lower-cased for the lookup. When the key is absent the
    /// [`DEFAULT_DOMAIN`] entry is used; when that is absent too, the result
    /// is empty. Topics are lower-cased and de-duplicated.
    pub fn resolve(&self, domain: &str) -> HashSet<String> {
        let key = domain.to_lowercase();
        self.0
            .get(&key)
            .or_else(|| self.0.get(DEFAULT_DOMAIN))
            .map(|topics| topics.iter().map(|topic| topic.to_lowercase()).collect())
            .unwrap_or_default()
    }

    /// Whether the map carries the fallback entry.
    pub fn contains_default(&self) -> bool {
        self.0.contains_key(DEFAULT_DOMAIN)
    }

    /// Domain names known to the map, in arbitrary order.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
