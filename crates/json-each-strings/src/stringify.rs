//! Value coercions with JavaScript semantics.

use serde_json::Value;

/// Coerces a JSON value to its display string.
///
/// Strings are returned bare (unquoted); null, booleans, and numbers render
/// as their JSON form; arrays and objects render as compact JSON text.
///
/// # Examples
///
/// ```
/// use json_each_strings::stringify;
/// use serde_json::json;
///
/// assert_eq!(stringify(&json!("hi")), "hi");
/// assert_eq!(stringify(&json!(null)), "null");
/// assert_eq!(stringify(&json!(2.5)), "2.5");
/// assert_eq!(stringify(&json!([1, "a"])), "[1,\"a\"]");
/// ```
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Arrays and objects render as compact JSON
        _ => value.to_string(),
    }
}

/// Coerces a JSON value to a number with JavaScript semantics.
///
/// Null is 0, booleans are 0 or 1, trimmed numeric strings parse, and
/// everything else is NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}
