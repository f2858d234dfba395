//! Public facade over the population core.

use crate::populate;
use crate::registry::{CustomEntry, Registry};
use crate::resolve::PopulateError;
use mockgen_engine::{BuiltinEngine, GeneratorEngine};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A mock data generator instance.
///
/// Holds the custom-function registry and an engine instance; both persist
/// across [`populate`](Mocker::populate) calls. The last populated template
/// is kept for introspection and overwritten on each call.
pub struct Mocker<E: GeneratorEngine = BuiltinEngine> {
    template: Value,
    registry: Registry,
    engine: E,
}

impl Mocker {
    /// Create a mocker over the built-in engine with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_engine(BuiltinEngine::new())
    }
}

impl Default for Mocker {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GeneratorEngine> Mocker<E> {
    /// Create a mocker over any conforming generator engine.
    pub fn with_engine(engine: E) -> Self {
        Self {
            template: Value::Object(Map::new()),
            registry: Registry::new(),
            engine,
        }
    }

    /// Populate a template, resolving every payload leaf.
    ///
    /// Stores a copy of the input as the current template and returns a
    /// freshly built result; the caller's value is never mutated.
    pub fn populate(&mut self, template: &Value) -> Result<Value, PopulateError> {
        tracing::debug!("Populating template");
        self.template = template.clone();
        populate::populate_template(&self.template, &self.registry, &mut self.engine)
    }

    /// Register (or overwrite) a single custom generator.
    pub fn extend(&mut self, name: impl Into<String>, entry: CustomEntry) {
        let name = name.into();
        tracing::debug!("Registering custom generator {:?}", name);
        self.registry.insert(name, entry);
    }

    /// Replace the whole custom-generator registry.
    pub fn extend_with(&mut self, functions: HashMap<String, CustomEntry>) {
        tracing::debug!("Replacing custom generator registry ({} entries)", functions.len());
        self.registry.replace(functions);
    }

    /// Switch the engine's locale for subsequent generation.
    pub fn set_locale(&mut self, locale: &str) {
        self.engine.set_locale(locale);
    }

    /// Seed the engine's randomness source.
    pub fn set_seed(&mut self, seed: u64) {
        self.engine.seed(seed);
    }

    /// The template passed to the most recent [`populate`](Mocker::populate)
    /// call.
    pub fn template(&self) -> &Value {
        &self.template
    }
}
