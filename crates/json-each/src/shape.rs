//! Collection shape detection.
//!
//! A collection's shape is decided once, before traversal, by a
//! [`Classifier`]. The default [`JsonClassifier`] maps JSON arrays to
//! sequences and JSON objects to mappings. [`ArrayLikeClassifier`]
//! additionally recognizes objects that wrap a sequence behind a numeric
//! `length` member, skipping the wrapper's metadata keys.

use serde_json::Value;

/// Shape of a collection, determined once at the start of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// An ordered sequence of values. Entry keys are stringified positions.
    Sequence,
    /// String keys mapped to values, visited in insertion order.
    Mapping,
}

/// Classifies values into collection shapes before traversal.
///
/// This is the adaptation hook for host-specific collection types: callers
/// that need to treat certain objects as sequences supply their own
/// classifier instead of the library hardcoding a list of recognized types.
pub trait Classifier {
    /// Returns the shape of `value`, or `None` when the value is not a
    /// collection. Non-collections are inert: traversal visits nothing and
    /// passes the value through unchanged.
    fn classify(&self, value: &Value) -> Option<Shape>;

    /// Returns true when an object key carries wrapper metadata rather than
    /// data. Metadata keys of object-backed sequences are skipped during
    /// traversal and never counted in the ordinal index.
    fn is_metadata_key(&self, _key: &str) -> bool {
        false
    }
}

/// Default classifier: arrays are sequences, objects are mappings, and
/// everything else is not a collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonClassifier;

impl Classifier for JsonClassifier {
    fn classify(&self, value: &Value) -> Option<Shape> {
        match value {
            Value::Array(_) => Some(Shape::Sequence),
            Value::Object(_) => Some(Shape::Mapping),
            _ => None,
        }
    }
}

/// Classifier that also recognizes array-like wrapper objects.
///
/// An object carrying a numeric `length` member is classified as a sequence
/// whose data lives under its remaining keys. The `length` member itself and
/// the configured metadata keys are skipped during traversal.
///
/// # Examples
///
/// ```
/// use json_each::{each_in, ArrayLikeClassifier, Step};
/// use serde_json::json;
///
/// let wrapper = json!({"0": "a", "1": "b", "length": 2, "selector": ".x"});
/// let mut seen = Vec::new();
/// each_in(&wrapper, &ArrayLikeClassifier::default(), |v, key, index| {
///     seen.push((v.clone(), key.to_string(), index));
///     Step::Continue
/// });
/// assert_eq!(seen, vec![
///     (json!("a"), "0".to_string(), 0),
///     (json!("b"), "1".to_string(), 1),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayLikeClassifier {
    /// Object keys treated as wrapper metadata.
    pub metadata_keys: Vec<String>,
}

impl ArrayLikeClassifier {
    /// Metadata keys skipped by default on array-like wrappers.
    pub const DEFAULT_METADATA_KEYS: &'static [&'static str] =
        &["length", "prevObject", "context", "selector"];

    /// Creates a classifier with a custom metadata-key denylist.
    pub fn new(metadata_keys: Vec<String>) -> Self {
        ArrayLikeClassifier { metadata_keys }
    }
}

impl Default for ArrayLikeClassifier {
    fn default() -> Self {
        ArrayLikeClassifier {
            metadata_keys: Self::DEFAULT_METADATA_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl Classifier for ArrayLikeClassifier {
    fn classify(&self, value: &Value) -> Option<Shape> {
        match value {
            Value::Array(_) => Some(Shape::Sequence),
            Value::Object(map) => {
                if matches!(map.get("length"), Some(Value::Number(_))) {
                    Some(Shape::Sequence)
                } else {
                    Some(Shape::Mapping)
                }
            }
            _ => None,
        }
    }

    fn is_metadata_key(&self, key: &str) -> bool {
        self.metadata_keys.iter().any(|k| k == key)
    }
}
