//! Payload resolution against the custom registry and the generator engine.

use crate::payload::PayloadSpec;
use crate::registry::Registry;
use mockgen_engine::GeneratorEngine;
use serde_json::Value;

/// Error raised while populating a template.
#[derive(Debug, thiserror::Error)]
pub enum PopulateError {
    /// The payload's dotted identifier resolves to no generator.
    #[error("Function \"{0}\" does not exist")]
    UnknownFunction(String),
}

impl PopulateError {
    pub(crate) fn unknown(topic: &str, subtopic: Option<&str>) -> Self {
        match subtopic {
            Some(sub) if !sub.is_empty() => Self::UnknownFunction(format!("{topic}.{sub}")),
            _ => Self::UnknownFunction(topic.to_string()),
        }
    }
}

/// Resolve one payload to a generated value, or an array of `n` values when
/// the payload carries a `|n` suffix.
///
/// Custom entries shadow the engine for their whole topic. Generation is
/// invoked once per requested value, never memoized.
pub fn resolve<E: GeneratorEngine>(
    payload: &str,
    registry: &Registry,
    engine: &mut E,
) -> Result<Value, PopulateError> {
    let spec = PayloadSpec::parse(payload);
    tracing::trace!("Resolving payload {:?} as {}.{:?}", payload, spec.topic, spec.subtopic);

    if registry.has_custom(&spec.topic) {
        return registry.resolve_custom(&spec.topic, spec.subtopic.as_deref(), spec.count);
    }

    let subtopic = spec.subtopic.as_deref().unwrap_or("");
    let known = !subtopic.is_empty() && engine.contains(&spec.topic, subtopic);
    if subtopic.is_empty() || (!known && !subtopic.contains('.') && !subtopic.contains('|')) {
        return Err(PopulateError::unknown(&spec.topic, spec.subtopic.as_deref()));
    }

    match spec.count {
        Some(n) => (0..n)
            .map(|_| invoke(&spec.topic, subtopic, engine))
            .collect::<Result<Vec<Value>, _>>()
            .map(Value::Array),
        None => invoke(&spec.topic, subtopic, engine),
    }
}

fn invoke<E: GeneratorEngine>(
    topic: &str,
    subtopic: &str,
    engine: &mut E,
) -> Result<Value, PopulateError> {
    if topic == "fake" {
        let pattern = strip_delimiters(subtopic);
        return Ok(Value::String(engine.invoke_pattern(pattern)));
    }
    engine
        .invoke(topic, subtopic)
        .ok_or_else(|| PopulateError::unknown(topic, Some(subtopic)))
}

/// Drop the leading and trailing delimiter characters wrapping a literal
/// pattern, e.g. the parentheses in `fake(###)`.
fn strip_delimiters(raw: &str) -> &str {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
