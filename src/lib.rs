//! Template-driven mock data generator.
//!
//! Takes a nested JSON template whose leaf values are payload specifiers
//! (`name.firstName`, `internet.email|3`, `fake(###-##-####)`) and produces
//! a structurally identical value with every leaf resolved to generated
//! data. A `_repeat` directive expands a branch, or the whole template,
//! into an array of independently populated copies.
//!
//! # Architecture
//!
//! ```text
//! Template (serde_json::Value)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │      Mocker      │
//! │                  │
//! │  - template      │
//! │  - registry      │──── custom generators (caller-registered)
//! │  - engine        │──── GeneratorEngine (BuiltinEngine by default)
//! └────────┬─────────┘
//!          │ populate
//!          ▼
//!   populated Value (payload leaves resolved, _repeat expanded)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mockgen::Mocker;
//! use serde_json::json;
//!
//! let mut mocker = Mocker::new();
//! mocker.set_seed(42);
//!
//! let populated = mocker
//!     .populate(&json!({
//!         "user": {
//!             "name": "name.findName",
//!             "email": "internet.email",
//!         },
//!         "tags": { "_repeat": 2, "label": "lorem.word" },
//!     }))
//!     .unwrap();
//!
//! assert!(populated["user"]["email"].as_str().unwrap().contains('@'));
//! assert_eq!(populated["tags"].as_array().unwrap().len(), 2);
//! ```
//!
//! # Payload grammar
//!
//! `TOPIC [ "." SUBTOPIC ] [ "|" COUNT ]`, plus the literal-pattern form
//! `fake(<pattern>)`. A `|n` suffix turns the leaf into an array of `n`
//! independently generated values.

pub mod mocker;
pub mod payload;
pub mod populate;
pub mod registry;
pub mod resolve;

// Re-exports for convenience
pub use mocker::Mocker;
pub use payload::PayloadSpec;
pub use populate::populate_template;
pub use registry::{CustomEntry, CustomFn, Registry};
pub use resolve::{resolve, PopulateError};

pub use mockgen_engine::{BuiltinEngine, GeneratorEngine};
