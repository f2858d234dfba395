//! Pattern-based string generation.
//!
//! Patterns support two placeholder forms:
//! - `{{topic.subtopic}}` - invokes the named catalog generator
//! - `#` - a single random digit

use crate::catalog::{Catalog, GenContext};
use rand::Rng;
use serde_json::Value;

/// Fill a pattern string: catalog callouts first, then `#` digits.
///
/// Unknown callouts pass through verbatim.
pub(crate) fn fill_pattern(pattern: &str, ctx: &mut GenContext, catalog: &Catalog) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let callout = &after[..end];
                match invoke_callout(callout, ctx, catalog) {
                    Some(text) => out.push_str(&text),
                    None => {
                        out.push_str("{{");
                        out.push_str(callout);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                // Unterminated callout, keep the tail as-is
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out.chars()
        .map(|c| {
            if c == '#' {
                char::from_digit(ctx.rng.gen_range(0..10), 10).unwrap()
            } else {
                c
            }
        })
        .collect()
}

fn invoke_callout(callout: &str, ctx: &mut GenContext, catalog: &Catalog) -> Option<String> {
    let (topic, subtopic) = callout.trim().split_once('.')?;
    let generate = catalog.get(topic)?.get(subtopic)?;
    Some(value_text(generate(ctx)))
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::locale;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fill(pattern: &str, seed: u64) -> String {
        let catalog = build_catalog();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctx = GenContext {
            rng: &mut rng,
            locale: locale::lookup("en"),
        };
        fill_pattern(pattern, &mut ctx, &catalog)
    }

    #[test]
    fn test_hash_marks_become_digits() {
        let out = fill("###-##-####", 42);

        assert_eq!(out.len(), 11);
        let digits: String = out.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(digits.len(), 9);
        assert_eq!(&out[3..4], "-");
        assert_eq!(&out[6..7], "-");
    }

    #[test]
    fn test_callout_resolves() {
        let out = fill("Hello {{name.firstName}}!", 42);

        assert!(out.starts_with("Hello "));
        assert!(out.ends_with('!'));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_unknown_callout_passes_through() {
        let out = fill("{{bogus.topic}}", 42);
        assert_eq!(out, "{{bogus.topic}}");
    }

    #[test]
    fn test_callout_without_dot_passes_through() {
        let out = fill("{{name}}", 42);
        assert_eq!(out, "{{name}}");
    }

    #[test]
    fn test_unterminated_callout_kept() {
        let out = fill("abc{{name.firstName", 42);
        assert_eq!(out, "abc{{name.firstName");
    }

    #[test]
    fn test_mixed_pattern() {
        let out = fill("{{name.lastName}}-#", 42);

        assert!(!out.contains('#'));
        assert!(out.chars().last().unwrap().is_ascii_digit());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(fill("{{internet.email}} ####", 7), fill("{{internet.email}} ####", 7));
    }
}
