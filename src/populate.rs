//! Recursive template population.
//!
//! Walks a template value tree: object fields populate in insertion order,
//! leaves resolve through the payload resolver, and a `_repeat` directive
//! expands its node into an array of independent populations. The input is
//! never mutated; every call builds a fresh tree.

use crate::registry::Registry;
use crate::resolve::{self, PopulateError};
use mockgen_engine::GeneratorEngine;
use serde_json::{Map, Value};

/// Reserved key marking a branch (or the whole template) for repetition.
const REPEAT_KEY: &str = "_repeat";

/// Repetition directive extracted once per object node.
enum RepeatDirective {
    Single,
    Times(u64),
}

/// Remove `_repeat` from the field map and interpret its value.
///
/// Any value other than a positive integer is consumed but inert, matching
/// the leniency applied to malformed `|n` suffixes.
fn take_repeat(fields: &mut Map<String, Value>) -> RepeatDirective {
    // shift_remove keeps the remaining fields in insertion order
    match fields.shift_remove(REPEAT_KEY).as_ref().and_then(Value::as_u64) {
        Some(n) if n > 0 => RepeatDirective::Times(n),
        _ => RepeatDirective::Single,
    }
}

/// Populate a whole template. A top-level `_repeat` makes the result an
/// array of independent populations of the entire template.
pub fn populate_template<E: GeneratorEngine>(
    template: &Value,
    registry: &Registry,
    engine: &mut E,
) -> Result<Value, PopulateError> {
    populate_node(template, registry, engine)
}

fn populate_node<E: GeneratorEngine>(
    node: &Value,
    registry: &Registry,
    engine: &mut E,
) -> Result<Value, PopulateError> {
    match node {
        Value::Object(fields) => {
            let mut fields = fields.clone();
            match take_repeat(&mut fields) {
                RepeatDirective::Times(n) => {
                    let unit = Value::Object(fields);
                    let mut instances = Vec::with_capacity(n as usize);
                    for _ in 0..n {
                        instances.push(populate_node(&unit, registry, engine)?);
                    }
                    Ok(Value::Array(instances))
                }
                RepeatDirective::Single => {
                    let mut populated = Map::new();
                    for (key, value) in &fields {
                        populated.insert(key.clone(), populate_node(value, registry, engine)?);
                    }
                    Ok(Value::Object(populated))
                }
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| populate_node(item, registry, engine))
            .collect::<Result<Vec<Value>, _>>()
            .map(Value::Array),
        leaf => {
            let payload = match leaf {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            resolve::resolve(&payload, registry, engine)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CustomEntry;
    use mockgen_engine::BuiltinEngine;
    use serde_json::json;

    fn populate(template: &Value) -> Result<Value, PopulateError> {
        let registry = Registry::new();
        let mut engine = BuiltinEngine::seeded(42);
        populate_template(template, &registry, &mut engine)
    }

    #[test]
    fn test_flat_template_keeps_key_structure() {
        let template = json!({
            "first": "name.firstName",
            "email": "internet.email",
        });

        let populated = populate(&template).unwrap();

        let fields = populated.as_object().unwrap();
        assert_eq!(
            fields.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["first", "email"]
        );
        assert!(populated["first"].is_string());
        assert!(populated["email"].as_str().unwrap().contains('@'));
    }

    #[test]
    fn test_nested_branch_recurses() {
        let template = json!({
            "user": {
                "name": "name.findName",
                "address": { "city": "address.city" },
            },
        });

        let populated = populate(&template).unwrap();
        assert!(populated["user"]["address"]["city"].is_string());
    }

    #[test]
    fn test_branch_repeat_expands_to_array() {
        let template = json!({
            "a": { "_repeat": 2, "x": "name.firstName" },
        });

        let populated = populate(&template).unwrap();

        let items = populated["a"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert!(item["x"].is_string());
            assert!(item.get("_repeat").is_none());
        }
    }

    #[test]
    fn test_repeated_instances_generate_independently() {
        let template = json!({
            "a": { "_repeat": 2, "x": "random.uuid" },
        });

        let populated = populate(&template).unwrap();

        let items = populated["a"].as_array().unwrap();
        assert_ne!(items[0]["x"], items[1]["x"]);
    }

    #[test]
    fn test_top_level_repeat_returns_bare_array() {
        let template = json!({ "_repeat": 2, "x": "name.firstName" });

        let populated = populate(&template).unwrap();

        let items = populated.as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert!(item["x"].is_string());
            assert_eq!(item.as_object().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_nested_repeat_expands_each_level() {
        let template = json!({
            "_repeat": 2,
            "group": { "_repeat": 3, "id": "random.number" },
        });

        let populated = populate(&template).unwrap();

        let outer = populated.as_array().unwrap();
        assert_eq!(outer.len(), 2);
        for instance in outer {
            let inner = instance["group"].as_array().unwrap();
            assert_eq!(inner.len(), 3);
        }
    }

    #[test]
    fn test_repeat_with_invalid_count_is_inert() {
        let template = json!({
            "a": { "_repeat": "two", "x": "name.firstName" },
        });

        let populated = populate(&template).unwrap();

        // The directive is consumed, the branch populates as a plain object.
        assert!(populated["a"].is_object());
        assert!(populated["a"]["x"].is_string());
        assert!(populated["a"].get("_repeat").is_none());
    }

    #[test]
    fn test_array_node_populates_element_wise() {
        let template = json!({
            "pair": ["name.firstName", "name.lastName"],
        });

        let populated = populate(&template).unwrap();

        let items = populated["pair"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(Value::is_string));
    }

    #[test]
    fn test_unresolvable_leaf_aborts_population() {
        let template = json!({
            "ok": "name.firstName",
            "bad": "bogus.topic",
        });

        let err = populate(&template).unwrap_err();
        assert!(err.to_string().contains("bogus.topic"));
    }

    #[test]
    fn test_non_string_leaf_coerces_then_fails_lookup() {
        let err = populate(&json!({ "n": 42 })).unwrap_err();
        assert_eq!(err.to_string(), "Function \"42\" does not exist");
    }

    #[test]
    fn test_input_is_never_mutated() {
        let template = json!({
            "a": { "_repeat": 2, "x": "name.firstName" },
        });
        let original = template.clone();

        populate(&template).unwrap();
        assert_eq!(template, original);
    }

    #[test]
    fn test_custom_functions_reach_nested_leaves() {
        let mut registry = Registry::new();
        registry.insert("color", CustomEntry::direct(|| json!("red")));
        let mut engine = BuiltinEngine::seeded(42);

        let template = json!({
            "paint": { "_repeat": 2, "shade": "color" },
        });

        let populated = populate_template(&template, &registry, &mut engine).unwrap();
        assert_eq!(populated["paint"], json!([{ "shade": "red" }, { "shade": "red" }]));
    }
}
