//! The `grep` filtering operation.

use crate::each::{each_in, Step};
use crate::shape::{Classifier, JsonClassifier};
use serde_json::{Map, Value};

/// Filters a collection's entries through a predicate.
///
/// An entry is kept unless the predicate result is strictly the boolean
/// `false`. Falsy-but-not-false results (`0`, `""`, `null`) retain the
/// entry; only `false` itself excludes it.
///
/// Array input produces a new array with the kept values in visitation
/// order. Object input produces a new object with the kept values under
/// their original keys, insertion order preserved. Non-collection input
/// produces an empty object.
///
/// # Examples
///
/// ```
/// use json_each::grep;
/// use serde_json::json;
///
/// let even = grep(&json!([1, 2, 3]), |v, _key, _index| {
///     v.as_i64().unwrap() % 2 == 0
/// });
/// assert_eq!(even, json!([2]));
/// ```
pub fn grep<F, R>(collection: &Value, handler: F) -> Value
where
    F: FnMut(&Value, &str, usize) -> R,
    R: Into<Value>,
{
    grep_in(collection, &JsonClassifier, handler)
}

/// Like [`grep`], with an explicit context threaded into the predicate.
pub fn grep_with<C, F, R>(collection: &Value, context: &mut C, mut handler: F) -> Value
where
    F: FnMut(&mut C, &Value, &str, usize) -> R,
    R: Into<Value>,
{
    grep_in(collection, &JsonClassifier, |value, key, index| {
        handler(context, value, key, index)
    })
}

/// Like [`grep`], with an explicit [`Classifier`] deciding the collection's
/// shape.
pub fn grep_in<K, F, R>(collection: &Value, classifier: &K, mut handler: F) -> Value
where
    K: Classifier + ?Sized,
    F: FnMut(&Value, &str, usize) -> R,
    R: Into<Value>,
{
    let sequence_out = collection.is_array();
    let mut seq = Vec::new();
    let mut map = Map::new();
    each_in(collection, classifier, |value, key, index| {
        let verdict: Value = handler(value, key, index).into();
        if verdict != Value::Bool(false) {
            if sequence_out {
                seq.push(value.clone());
            } else {
                map.insert(key.to_string(), value.clone());
            }
        }
        Step::Continue
    });
    if sequence_out {
        Value::Array(seq)
    } else {
        Value::Object(map)
    }
}
