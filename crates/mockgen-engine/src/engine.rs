//! Generator engine trait and the built-in implementation.

use crate::catalog::{build_catalog, Catalog, GenContext};
use crate::locale::{self, LocaleData};
use crate::pattern::fill_pattern;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

/// Capability interface the population core dispatches against.
///
/// Any conforming fake-data source can stand in for the built-in engine:
/// categorized generators addressed by (topic, subtopic), a pattern-based
/// generator, and locale/seed configuration scoped to the engine instance.
pub trait GeneratorEngine {
    /// Whether (topic, subtopic) addresses a known generator.
    fn contains(&self, topic: &str, subtopic: &str) -> bool;

    /// Invoke the generator at (topic, subtopic); `None` if unknown.
    fn invoke(&mut self, topic: &str, subtopic: &str) -> Option<Value>;

    /// Generate a string from a literal pattern.
    fn invoke_pattern(&mut self, pattern: &str) -> String;

    /// Switch the locale for subsequent generation.
    fn set_locale(&mut self, locale: &str);

    /// Reset the randomness source to a deterministic seed.
    fn seed(&mut self, seed: u64);
}

/// Built-in engine: a seeded RNG over a registered generator catalog.
pub struct BuiltinEngine {
    rng: StdRng,
    locale: &'static LocaleData,
    catalog: Catalog,
}

impl BuiltinEngine {
    /// Create an engine with an entropy-seeded RNG and the `en` locale.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create an engine with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            locale: locale::lookup("en"),
            catalog: build_catalog(),
        }
    }
}

impl Default for BuiltinEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorEngine for BuiltinEngine {
    fn contains(&self, topic: &str, subtopic: &str) -> bool {
        // The pattern generator accepts any literal, so every `fake`
        // subtopic counts as known.
        if topic == "fake" {
            return true;
        }
        self.catalog
            .get(topic)
            .is_some_and(|subtopics| subtopics.contains_key(subtopic))
    }

    fn invoke(&mut self, topic: &str, subtopic: &str) -> Option<Value> {
        let generate = *self.catalog.get(topic)?.get(subtopic)?;
        let mut ctx = GenContext {
            rng: &mut self.rng,
            locale: self.locale,
        };
        Some(generate(&mut ctx))
    }

    fn invoke_pattern(&mut self, pattern: &str) -> String {
        let mut ctx = GenContext {
            rng: &mut self.rng,
            locale: self.locale,
        };
        fill_pattern(pattern, &mut ctx, &self.catalog)
    }

    fn set_locale(&mut self, locale: &str) {
        self.locale = locale::lookup(locale);
    }

    fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_known_pairs() {
        let engine = BuiltinEngine::seeded(42);

        assert!(engine.contains("name", "firstName"));
        assert!(engine.contains("internet", "email"));
        assert!(engine.contains("random", "uuid"));
        assert!(!engine.contains("name", "bogus"));
        assert!(!engine.contains("bogus", "firstName"));
    }

    #[test]
    fn test_fake_topic_is_always_known() {
        let engine = BuiltinEngine::seeded(42);

        assert!(engine.contains("fake", "###"));
        assert!(engine.contains("fake", "anything at all"));
    }

    #[test]
    fn test_invoke_returns_none_for_unknown() {
        let mut engine = BuiltinEngine::seeded(42);

        assert!(engine.invoke("bogus", "topic").is_none());
        assert!(engine.invoke("name", "bogus").is_none());
    }

    #[test]
    fn test_invoke_generates_fresh_values() {
        let mut engine = BuiltinEngine::seeded(42);

        let values: Vec<Value> = (0..10)
            .map(|_| engine.invoke("random", "uuid").unwrap())
            .collect();

        let mut unique = values.clone();
        unique.dedup();
        assert_eq!(values.len(), unique.len());
    }

    #[test]
    fn test_seed_makes_generation_deterministic() {
        let mut engine1 = BuiltinEngine::seeded(42);
        let mut engine2 = BuiltinEngine::new();
        engine2.seed(42);

        for _ in 0..5 {
            assert_eq!(
                engine1.invoke("internet", "email"),
                engine2.invoke("internet", "email")
            );
        }
        assert_eq!(
            engine1.invoke_pattern("###-####"),
            engine2.invoke_pattern("###-####")
        );
    }

    #[test]
    fn test_set_locale_switches_pools() {
        let mut engine = BuiltinEngine::seeded(42);
        engine.set_locale("de");

        let city = engine.invoke("address", "city").unwrap();
        assert!(crate::locale::DE
            .cities
            .contains(&city.as_str().unwrap()));
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let mut engine = BuiltinEngine::seeded(42);
        engine.set_locale("xx-YY");

        let city = engine.invoke("address", "city").unwrap();
        assert!(crate::locale::EN
            .cities
            .contains(&city.as_str().unwrap()));
    }
}
