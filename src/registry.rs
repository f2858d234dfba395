//! Registry of caller-supplied custom generators.
//!
//! A custom entry registered for a topic shadows the whole topic in the
//! generator engine, subtopics included.

use crate::resolve::PopulateError;
use serde_json::Value;
use std::collections::HashMap;

/// A zero-argument custom generator.
pub type CustomFn = Box<dyn Fn() -> Value>;

/// One registered custom generator: either a single callable for the whole
/// topic, or a map of per-subtopic callables.
pub enum CustomEntry {
    Direct(CustomFn),
    Keyed(HashMap<String, CustomFn>),
}

impl CustomEntry {
    /// A topic-level generator with no subtopics.
    pub fn direct<F>(f: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        Self::Direct(Box::new(f))
    }

    /// A subtopic-keyed set of generators.
    pub fn keyed<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CustomFn)>,
    {
        Self::Keyed(pairs.into_iter().map(|(k, f)| (k.into(), f)).collect())
    }
}

impl std::fmt::Debug for CustomEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("CustomEntry::Direct(..)"),
            Self::Keyed(map) => {
                let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
                keys.sort_unstable();
                f.debug_tuple("CustomEntry::Keyed").field(&keys).finish()
            }
        }
    }
}

/// Per-instance map of custom generators, keyed by topic.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, CustomEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a single entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: CustomEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Replace every entry wholesale.
    pub fn replace(&mut self, entries: HashMap<String, CustomEntry>) {
        self.entries = entries;
    }

    pub fn has_custom(&self, topic: &str) -> bool {
        self.entries.contains_key(topic)
    }

    /// Invoke the custom entry for `topic`.
    ///
    /// With a count, the chosen callable runs that many times and the
    /// results are collected in call order. A keyed entry with no matching
    /// subtopic has nothing to call and fails the lookup.
    pub fn resolve_custom(
        &self,
        topic: &str,
        subtopic: Option<&str>,
        count: Option<u64>,
    ) -> Result<Value, PopulateError> {
        let entry = self
            .entries
            .get(topic)
            .ok_or_else(|| PopulateError::unknown(topic, subtopic))?;

        let keyed_match = match entry {
            CustomEntry::Keyed(map) => subtopic.and_then(|sub| map.get(sub)),
            CustomEntry::Direct(_) => None,
        };
        let callable = match (keyed_match, entry) {
            (Some(f), _) => f,
            (None, CustomEntry::Direct(f)) => f,
            (None, CustomEntry::Keyed(_)) => {
                return Err(PopulateError::unknown(topic, subtopic))
            }
        };

        match count {
            Some(n) => Ok(Value::Array((0..n).map(|_| callable()).collect())),
            None => Ok(callable()),
        }
    }
}
