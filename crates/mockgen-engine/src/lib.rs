//! Built-in fake data engine for the `mockgen` template populator.
//!
//! This crate provides the [`GeneratorEngine`] capability trait and
//! [`BuiltinEngine`], a seeded, locale-aware implementation backed by a
//! registered catalog of generators.
//!
//! # Architecture
//!
//! ```text
//! BuiltinEngine
//!     │
//!     ├── rng (StdRng, seedable)
//!     ├── locale (word pools: en, de)
//!     └── catalog: topic → subtopic → generator fn
//!              │
//!              ▼
//!       serde_json::Value (string / number / bool)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mockgen_engine::{BuiltinEngine, GeneratorEngine};
//!
//! let mut engine = BuiltinEngine::seeded(42);
//!
//! let email = engine.invoke("internet", "email").unwrap();
//! assert!(email.as_str().unwrap().contains('@'));
//!
//! let ssn = engine.invoke_pattern("###-##-####");
//! assert_eq!(ssn.len(), 11);
//! ```
//!
//! # Topics
//!
//! - `name` - firstName, lastName, findName, jobTitle
//! - `internet` - email, userName, domainName, url, ip
//! - `address` - city, streetName, zipCode, country
//! - `lorem` - word, words, sentence
//! - `company` - companyName
//! - `phone` - phoneNumber
//! - `random` - number, boolean, uuid, alphaNumeric
//! - `date` - past, recent, future
//!
//! Pattern strings (`invoke_pattern`) substitute `{{topic.subtopic}}`
//! callouts and `#` digit placeholders.

mod catalog;
mod engine;
mod locale;
mod pattern;

pub use engine::{BuiltinEngine, GeneratorEngine};
