//! json-each — collection iteration helpers over JSON values.
//!
//! One traversal primitive, [`each()`], underpins three derived operations:
//! [`grep()`] filters, [`collect()`] maps values, and [`collect_entries()`]
//! maps whole key/value pairs. Collections are `serde_json::Value`s: arrays are
//! sequences, objects are mappings with insertion order preserved.
//!
//! # Example
//!
//! ```
//! use json_each::{each, grep, Step};
//! use serde_json::json;
//!
//! let nums = json!([1, 2, 3]);
//!
//! let mut sum = 0;
//! each(&nums, |v, _key, _index| {
//!     sum += v.as_i64().unwrap();
//!     Step::Continue
//! });
//! assert_eq!(sum, 6);
//!
//! let even = grep(&nums, |v, _key, _index| v.as_i64().unwrap() % 2 == 0);
//! assert_eq!(even, json!([2]));
//! ```
//!
//! The `grep`/`collect`/`collect_entries` handlers return any `Into<Value>`;
//! a result of strictly `Value::Bool(false)` excludes the entry, while every
//! other result (including falsy ones such as `0`, `""`, and `null`)
//! retains it.

pub mod bind;
pub mod collect;
pub mod collect_entries;
pub mod each;
pub mod error;
pub mod grep;
pub mod shape;

// Re-exports for convenience
pub use bind::{bind, Bound};
pub use collect::{collect, collect_in, collect_with};
pub use collect_entries::{collect_entries, collect_entries_in, collect_entries_with};
pub use each::{each, each_in, each_with, Step};
pub use error::IterError;
pub use grep::{grep, grep_in, grep_with};
pub use shape::{ArrayLikeClassifier, Classifier, JsonClassifier, Shape};
