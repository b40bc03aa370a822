//! The `collect` mapping operation.

use crate::each::{each_in, Step};
use crate::shape::{Classifier, JsonClassifier};
use serde_json::{Map, Value};

/// Transforms every entry of a collection.
///
/// Each entry is replaced by the transform's result. A result of strictly
/// `Value::Bool(false)` excludes the entry from the output; any other
/// result (including falsy ones such as `0` or `null`) becomes the new
/// value.
///
/// Array input produces a new array with the non-false results in
/// visitation order. Object input produces a new object with the results
/// under the original keys. Non-collection input produces an empty object.
///
/// # Examples
///
/// ```
/// use json_each::collect;
/// use serde_json::json;
///
/// let out = collect(&json!([1, 2, 3]), |v, _key, _index| {
///     let n = v.as_i64().unwrap();
///     if n % 2 == 0 { json!(n * 2) } else { json!(false) }
/// });
/// assert_eq!(out, json!([4]));
/// ```
pub fn collect<F, R>(collection: &Value, handler: F) -> Value
where
    F: FnMut(&Value, &str, usize) -> R,
    R: Into<Value>,
{
    collect_in(collection, &JsonClassifier, handler)
}

/// Like [`collect`], with an explicit context threaded into the transform.
pub fn collect_with<C, F, R>(collection: &Value, context: &mut C, mut handler: F) -> Value
where
    F: FnMut(&mut C, &Value, &str, usize) -> R,
    R: Into<Value>,
{
    collect_in(collection, &JsonClassifier, |value, key, index| {
        handler(context, value, key, index)
    })
}

/// Like [`collect`], with an explicit [`Classifier`] deciding the
/// collection's shape.
pub fn collect_in<K, F, R>(collection: &Value, classifier: &K, mut handler: F) -> Value
where
    K: Classifier + ?Sized,
    F: FnMut(&Value, &str, usize) -> R,
    R: Into<Value>,
{
    let sequence_out = collection.is_array();
    let mut seq = Vec::new();
    let mut map = Map::new();
    each_in(collection, classifier, |value, key, index| {
        let result: Value = handler(value, key, index).into();
        if result != Value::Bool(false) {
            if sequence_out {
                seq.push(result);
            } else {
                map.insert(key.to_string(), result);
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
