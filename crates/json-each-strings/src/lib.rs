//! json-each-strings — printf-style string formatting over JSON values.
//!
//! Provides [`format_str`], a small directive-substitution formatter, plus
//! the JavaScript-semantics coercions it is built on.
//!
//! # Example
//!
//! ```
//! use json_each_strings::format_str;
//! use serde_json::json;
//!
//! let out = format_str("%s scored %d%%", &[json!("alice"), json!(97.6)]);
//! assert_eq!(out, "alice scored 97%");
//! ```

pub mod format;
pub mod stringify;

pub use format::format_str;
pub use stringify::{stringify, to_number};
