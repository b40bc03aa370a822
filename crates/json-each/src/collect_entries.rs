//! The `collect_entries` pair-mapping operation.

use crate::each::{each_in, Step};
use crate::error::IterError;
use crate::shape::{Classifier, JsonClassifier};
use serde_json::{Map, Value};

/// Transforms every entry of a collection into a new `[key, value]` pair.
///
/// The output is always a freshly created object, regardless of the input
/// shape. A transform result of strictly `Value::Bool(false)` excludes the
/// entry; any other result must be a two-element array `[new_key,
/// new_value]`, where the key is a string, number, or bool (numbers and
/// bools are coerced to their string form). Later pairs overwrite earlier
/// ones under the same key.
///
/// A non-false result that is not a valid pair fails with
/// [`IterError::InvalidTransformResult`] and stops the traversal; a pair
/// whose key is null, an array, or an object fails with
/// [`IterError::InvalidEntryKey`].
///
/// # Examples
///
/// ```
/// use json_each::collect_entries;
/// use serde_json::json;
///
/// let out = collect_entries(&json!({"a": 1}), |v, key, _index| {
///     json!([key.to_uppercase(), v])
/// })
/// .unwrap();
/// assert_eq!(out, json!({"A": 1}));
/// ```
pub fn collect_entries<F, R>(collection: &Value, handler: F) -> Result<Value, IterError>
where
    F: FnMut(&Value, &str, usize) -> R,
    R: Into<Value>,
{
    collect_entries_in(collection, &JsonClassifier, handler)
}

/// Like [`collect_entries`], with an explicit context threaded into the
/// transform.
pub fn collect_entries_with<C, F, R>(
    collection: &Value,
    context: &mut C,
    mut handler: F,
) -> Result<Value, IterError>
where
    F: FnMut(&mut C, &Value, &str, usize) -> R,
    R: Into<Value>,
{
    collect_entries_in(collection, &JsonClassifier, |value, key, index| {
        handler(context, value, key, index)
    })
}

/// Like [`collect_entries`], with an explicit [`Classifier`] deciding the
/// collection's shape.
pub fn collect_entries_in<K, F, R>(
    collection: &Value,
    classifier: &K,
    mut handler: F,
) -> Result<Value, IterError>
where
    K: Classifier + ?Sized,
    F: FnMut(&Value, &str, usize) -> R,
    R: Into<Value>,
{
    let mut out = Map::new();
    let mut failure = None;
    each_in(collection, classifier, |value, key, index| {
        let result: Value = handler(value, key, index).into();
        if result == Value::Bool(false) {
            return Step::Continue;
        }
        match entry_pair(result) {
            Ok((new_key, new_value)) => {
                out.insert(new_key, new_value);
                Step::Continue
            }
            Err(err) => {
                failure = Some(err);
                Step::Stop
            }
        }
    });
    match failure {
        Some(err) => Err(err),
        None => Ok(Value::Object(out)),
    }
}

/// Splits a transform result into its `(key, value)` pair.
fn entry_pair(result: Value) -> Result<(String, Value), IterError> {
    let mut pair = match result {
        Value::Array(pair) if pair.len() == 2 => pair,
        other => return Err(IterError::InvalidTransformResult(other.to_string())),
    };
    let value = pair.pop().expect("pair has two elements");
    let key = match pair.pop().expect("pair has two elements") {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => return Err(IterError::InvalidEntryKey(other.to_string())),
    };
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_entries_uppercases_keys() {
        let out = collect_entries(&json!({"a": 1, "b": 2}), |v, key, _i| {
            json!([key.to_uppercase(), v])
        })
        .unwrap();
        assert_eq!(out, json!({"A": 1, "B": 2}));
    }

    #[test]
    fn test_collect_entries_sequence_input_yields_mapping() {
        let out = collect_entries(&json!(["x", "y"]), |v, key, _i| {
            json!([format!("item{}", key), v])
        })
        .unwrap();
        assert_eq!(out, json!({"item0": "x", "item1": "y"}));
    }

    #[test]
    fn test_collect_entries_false_excludes() {
        let out = collect_entries(&json!({"a": 1, "b": 2}), |v, key, _i| {
            if key == "a" { json!(false) } else { json!([key, v]) }
        })
        .unwrap();
        assert_eq!(out, json!({"b": 2}));
    }

    #[test]
    fn test_collect_entries_numeric_and_bool_keys_coerce() {
        let out = collect_entries(&json!(["a", "b"]), |v, _key, index| {
            if index == 0 { json!([7, v]) } else { json!([true, v]) }
        })
        .unwrap();
        assert_eq!(out, json!({"7": "a", "true": "b"}));
    }

    #[test]
    fn test_collect_entries_later_pairs_overwrite() {
        let out = collect_entries(&json!([1, 2, 3]), |v, _key, _i| json!(["k", v])).unwrap();
        assert_eq!(out, json!({"k": 3}));
    }

    #[test]
    fn test_collect_entries_invalid_result() {
        let err = collect_entries(&json!({"a": 1}), |_v, _k, _i| json!("nope")).unwrap_err();
        assert!(matches!(err, IterError::InvalidTransformResult(_)));

        // Wrong pair length is invalid too.
        let err = collect_entries(&json!({"a": 1}), |_v, _k, _i| json!(["k", 1, 2])).unwrap_err();
        assert!(matches!(err, IterError::InvalidTransformResult(_)));
    }

    #[test]
    fn test_collect_entries_invalid_key() {
        let err =
            collect_entries(&json!({"a": 1}), |v, _k, _i| json!([[1, 2], v])).unwrap_err();
        assert!(matches!(err, IterError::InvalidEntryKey(_)));
    }

    #[test]
    fn test_collect_entries_error_stops_traversal() {
        let mut invocations = 0;
        let _ = collect_entries(&json!([1, 2, 3]), |_v, _k, _i| {
            invocations += 1;
            json!("not a pair")
        });
        assert_eq!(invocations, 1);
    }

    #[test]
    fn test_collect_entries_inert_input() {
        let out = collect_entries(&json!(42), |v, key, _i| json!([key, v])).unwrap();
        assert_eq!(out, json!({}));
    }

    #[test]
    fn test_collect_entries_with_context() {
        let mut prefix = String::from("p_");
        let out = collect_entries(&json!({"a": 1}), |v, key, _i| {
            json!([format!("{}{}", "x_", key), v])
        })
        .unwrap();
        assert_eq!(out, json!({"x_a": 1}));

        let out = collect_entries_with(&json!({"a": 1}), &mut prefix, |prefix, v, key, _i| {
            json!([format!("{}{}", prefix, key), v])
        })
        .unwrap();
        assert_eq!(out, json!({"p_a": 1}));
    }
}
