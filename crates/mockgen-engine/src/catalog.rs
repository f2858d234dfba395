//! Registered table of built-in generators.
//!
//! Topics and subtopics are addressed by the literal strings that appear in
//! payload specifiers (`name.firstName`, `internet.email`, ...), so subtopic
//! keys keep their camelCase spelling.

use crate::locale::LocaleData;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};
use std::collections::HashMap;
use uuid::Uuid;

/// Mutable state handed to every generator invocation.
pub(crate) struct GenContext<'a> {
    pub rng: &'a mut StdRng,
    pub locale: &'static LocaleData,
}

pub(crate) type GenFn = fn(&mut GenContext) -> Value;

pub(crate) type Catalog = HashMap<&'static str, HashMap<&'static str, GenFn>>;

/// Build the topic → subtopic → generator table.
pub(crate) fn build_catalog() -> Catalog {
    let mut catalog: Catalog = HashMap::new();

    catalog.insert(
        "name",
        HashMap::from([
            ("firstName", first_name as GenFn),
            ("lastName", last_name),
            ("findName", find_name),
            ("jobTitle", job_title),
        ]),
    );

    catalog.insert(
        "internet",
        HashMap::from([
            ("email", email as GenFn),
            ("userName", user_name),
            ("domainName", domain_name),
            ("url", url),
            ("ip", ip),
        ]),
    );

    catalog.insert(
        "address",
        HashMap::from([
            ("city", city as GenFn),
            ("streetName", street_name),
            ("zipCode", zip_code),
            ("country", country),
        ]),
    );

    catalog.insert(
        "lorem",
        HashMap::from([
            ("word", word as GenFn),
            ("words", words),
            ("sentence", sentence),
        ]),
    );

    catalog.insert(
        "company",
        HashMap::from([("companyName", company_name as GenFn)]),
    );

    catalog.insert(
        "phone",
        HashMap::from([("phoneNumber", phone_number as GenFn)]),
    );

    catalog.insert(
        "random",
        HashMap::from([
            ("number", number as GenFn),
            ("boolean", boolean),
            ("uuid", uuid_v4),
            ("alphaNumeric", alpha_numeric),
        ]),
    );

    catalog.insert(
        "date",
        HashMap::from([
            ("past", date_past as GenFn),
            ("recent", date_recent),
            ("future", date_future),
        ]),
    );

    catalog
}

fn pick(rng: &mut StdRng, pool: &'static [&'static str]) -> &'static str {
    // Pools are compile-time constants and never empty.
    pool.choose(rng).copied().expect("empty word pool")
}

/// Random digit string of the given length, no leading zero.
pub(crate) fn digit_string(rng: &mut StdRng, len: usize) -> String {
    if len == 0 {
        return String::new();
    }
    let mut out = String::with_capacity(len);
    out.push(char::from_digit(rng.gen_range(1..10), 10).unwrap());
    for _ in 1..len {
        out.push(char::from_digit(rng.gen_range(0..10), 10).unwrap());
    }
    out
}

fn first_name(ctx: &mut GenContext) -> Value {
    json!(pick(ctx.rng, ctx.locale.first_names))
}

fn last_name(ctx: &mut GenContext) -> Value {
    json!(pick(ctx.rng, ctx.locale.last_names))
}

fn find_name(ctx: &mut GenContext) -> Value {
    let first = pick(ctx.rng, ctx.locale.first_names);
    let last = pick(ctx.rng, ctx.locale.last_names);
    json!(format!("{first} {last}"))
}

fn job_title(ctx: &mut GenContext) -> Value {
    json!(pick(ctx.rng, ctx.locale.job_titles))
}

fn email(ctx: &mut GenContext) -> Value {
    let first = pick(ctx.rng, ctx.locale.first_names).to_lowercase();
    let last = pick(ctx.rng, ctx.locale.last_names).to_lowercase();
    let domain = pick(ctx.rng, ctx.locale.free_email_domains);
    let n: u32 = ctx.rng.gen_range(1..100);
    json!(format!("{first}.{last}{n}@{domain}"))
}

fn user_name(ctx: &mut GenContext) -> Value {
    let first = pick(ctx.rng, ctx.locale.first_names).to_lowercase();
    let n: u32 = ctx.rng.gen_range(1..1000);
    json!(format!("{first}{n}"))
}

fn domain_name(ctx: &mut GenContext) -> Value {
    let word = pick(ctx.rng, ctx.locale.words);
    let tld = pick(ctx.rng, ctx.locale.tlds);
    json!(format!("{word}.{tld}"))
}

fn url(ctx: &mut GenContext) -> Value {
    let Value::String(domain) = domain_name(ctx) else {
        unreachable!("domain_name generates a string")
    };
    json!(format!("https://{domain}"))
}

fn ip(ctx: &mut GenContext) -> Value {
    let octets: Vec<String> = (0..4)
        .map(|_| ctx.rng.gen_range(0..=255u8).to_string())
        .collect();
    json!(octets.join("."))
}

fn city(ctx: &mut GenContext) -> Value {
    json!(pick(ctx.rng, ctx.locale.cities))
}

fn street_name(ctx: &mut GenContext) -> Value {
    json!(pick(ctx.rng, ctx.locale.streets))
}

fn zip_code(ctx: &mut GenContext) -> Value {
    json!(digit_string(ctx.rng, 5))
}

fn country(ctx: &mut GenContext) -> Value {
    json!(pick(ctx.rng, ctx.locale.countries))
}

fn word(ctx: &mut GenContext) -> Value {
    json!(pick(ctx.rng, ctx.locale.words))
}

fn words(ctx: &mut GenContext) -> Value {
    let list: Vec<&str> = (0..3).map(|_| pick(ctx.rng, ctx.locale.words)).collect();
    json!(list.join(" "))
}

fn sentence(ctx: &mut GenContext) -> Value {
    let len = ctx.rng.gen_range(5..=9);
    let mut list: Vec<String> = (0..len)
        .map(|_| pick(ctx.rng, ctx.locale.words).to_string())
        .collect();
    if let Some(first) = list[0].get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    json!(format!("{}.", list.join(" ")))
}

fn company_name(ctx: &mut GenContext) -> Value {
    let name = pick(ctx.rng, ctx.locale.last_names);
    let suffix = pick(ctx.rng, ctx.locale.company_suffixes);
    json!(format!("{name} {suffix}"))
}

fn phone_number(ctx: &mut GenContext) -> Value {
    let area = digit_string(ctx.rng, 3);
    let prefix = digit_string(ctx.rng, 3);
    let line = digit_string(ctx.rng, 4);
    json!(format!("{area}-{prefix}-{line}"))
}

fn number(ctx: &mut GenContext) -> Value {
    json!(ctx.rng.gen_range(0..=99_999i64))
}

fn boolean(ctx: &mut GenContext) -> Value {
    json!(ctx.rng.gen_bool(0.5))
}

fn uuid_v4(ctx: &mut GenContext) -> Value {
    let mut bytes = [0u8; 16];
    ctx.rng.fill(&mut bytes);
    // Version 4 and RFC 4122 variant bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    json!(Uuid::from_bytes(bytes).to_string())
}

fn alpha_numeric(ctx: &mut GenContext) -> Value {
    const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let c = CHARS[ctx.rng.gen_range(0..CHARS.len())] as char;
    json!(c.to_string())
}

fn date_past(ctx: &mut GenContext) -> Value {
    let seconds = ctx.rng.gen_range(0..365 * 24 * 3600i64);
    json!((Utc::now() - Duration::seconds(seconds)).to_rfc3339())
}

fn date_recent(ctx: &mut GenContext) -> Value {
    let seconds = ctx.rng.gen_range(0..24 * 3600i64);
    json!((Utc::now() - Duration::seconds(seconds)).to_rfc3339())
}

fn date_future(ctx: &mut GenContext) -> Value {
    let seconds = ctx.rng.gen_range(0..365 * 24 * 3600i64);
    json!((Utc::now() + Duration::seconds(seconds)).to_rfc3339())
}
