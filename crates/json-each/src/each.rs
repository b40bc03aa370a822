//! The `each` traversal primitive.
//!
//! Every other operation in this crate is built on [`each`]: it owns entry
//! enumeration, ordinal counting, and early-exit semantics.

use crate::shape::{Classifier, JsonClassifier, Shape};
use serde_json::Value;

/// Signal returned by an [`each`] handler after every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep visiting entries.
    Continue,
    /// Stop the traversal; remaining entries are not visited.
    Stop,
}

/// Visits every entry of a collection in order.
///
/// The handler receives `(value, key, index)` per entry: the entry's value,
/// its key (the stringified position for sequences, the mapping key for
/// mappings), and a zero-based ordinal counting invocations. Returning
/// [`Step::Stop`] ends the traversal immediately.
///
/// Non-collection input (null, booleans, numbers, strings) is inert: the
/// handler is never invoked. The return value is always the reference the
/// call was handed, so calls can be chained over the same collection.
///
/// Handler panics are not caught; they propagate to the caller.
///
/// # Examples
///
/// ```
/// use json_each::{each, Step};
/// use serde_json::json;
///
/// let scores = json!({"a": 10, "b": 20});
/// let mut total = 0;
/// each(&scores, |v, _key, _index| {
///     total += v.as_i64().unwrap();
///     Step::Continue
/// });
/// assert_eq!(total, 30);
/// ```
///
/// Early exit:
///
/// ```
/// use json_each::{each, Step};
/// use serde_json::json;
///
/// let mut visited = 0;
/// each(&json!([1, 2, 3]), |_v, _key, index| {
///     visited += 1;
///     if index == 1 { Step::Stop } else { Step::Continue }
/// });
/// assert_eq!(visited, 2);
/// ```
pub fn each<F>(collection: &Value, handler: F) -> &Value
where
    F: FnMut(&Value, &str, usize) -> Step,
{
    each_in(collection, &JsonClassifier, handler)
}

/// Like [`each`], with an explicit context threaded into the handler.
///
/// The context is passed as the handler's first argument on every
/// invocation. This replaces the implicit receiver binding of dynamic
/// collection libraries with an explicit parameter.
///
/// # Examples
///
/// ```
/// use json_each::{each_with, Step};
/// use serde_json::json;
///
/// struct Tally { multiply: i64, out: Vec<i64> }
///
/// let mut tally = Tally { multiply: 4, out: Vec::new() };
/// each_with(&json!([1, 2, 3]), &mut tally, |ctx, v, _key, _index| {
///     let product = v.as_i64().unwrap() * ctx.multiply;
///     ctx.out.push(product);
///     Step::Continue
/// });
/// assert_eq!(tally.out, vec![4, 8, 12]);
/// ```
pub fn each_with<'a, C, F>(collection: &'a Value, context: &mut C, mut handler: F) -> &'a Value
where
    F: FnMut(&mut C, &Value, &str, usize) -> Step,
{
    each_in(collection, &JsonClassifier, |value, key, index| {
        handler(context, value, key, index)
    })
}

/// The classified traversal core: [`each`] with an explicit [`Classifier`]
/// deciding the collection's shape.
///
/// Arrays are visited positionally. Objects are visited in insertion order;
/// when the classifier shapes an object as a sequence (an array-like
/// wrapper), its metadata keys are skipped and do not consume ordinals.
pub fn each_in<'a, K, F>(collection: &'a Value, classifier: &K, mut handler: F) -> &'a Value
where
    K: Classifier + ?Sized,
    F: FnMut(&Value, &str, usize) -> Step,
{
    let shape = match classifier.classify(collection) {
        Some(shape) => shape,
        None => return collection,
    };
    match collection {
        Value::Array(seq) => {
            for (index, value) in seq.iter().enumerate() {
                let key = index.to_string();
                if handler(value, key.as_str(), index) == Step::Stop {
                    break;
                }
            }
        }
        Value::Object(map) => {
            let skip_metadata = shape == Shape::Sequence;
            let mut index = 0;
            for (key, value) in map {
                if skip_metadata && classifier.is_metadata_key(key) {
                    continue;
                }
                if handler(value, key.as_str(), index) == Step::Stop {
                    break;
                }
                index += 1;
            }
        }
        _ => {}
    }
    collection
}
