//! Printf-style directive substitution.

use crate::stringify::{stringify, to_number};
use serde_json::Value;

fn directive_regex() -> &'static regex::Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"%[sdfj%]").unwrap())
}

/// Formats a template by substituting `%`-directives with `args`, left to
/// right.
///
/// Directives:
/// - `%s` — string coercion (see [`stringify`])
/// - `%d` — integer, truncated toward zero; non-numeric arguments render `0`
/// - `%f` — float; non-numeric arguments render `NaN`
/// - `%j` — compact JSON encoding
/// - `%%` — a literal percent sign (consumes no argument)
///
/// Directives left over once the arguments run out stay in the output
/// verbatim; surplus arguments are ignored. Formatting is total: there is
/// no error path.
///
/// # Examples
///
/// ```
/// use json_each_strings::format_str;
/// use serde_json::json;
///
/// assert_eq!(
///     format_str("%s is %d years old", &[json!("mia"), json!(7.9)]),
///     "mia is 7 years old"
/// );
/// assert_eq!(format_str("%j", &[json!({"a": 1})]), "{\"a\":1}");
/// assert_eq!(format_str("%s and %s", &[json!("one")]), "one and %s");
/// assert_eq!(format_str("100%%", &[]), "100%");
/// ```
pub fn format_str(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    let mut next = args.iter();
    for m in directive_regex().find_iter(template) {
        out.push_str(&template[last..m.start()]);
        last = m.end();
        if m.as_str() == "%%" {
            out.push('%');
            continue;
        }
        match next.next() {
            Some(arg) => out.push_str(&render(m.as_str(), arg)),
            // Out of arguments: keep the directive verbatim
            None => out.push_str(m.as_str()),
        }
    }
    out.push_str(&template[last..]);
    out
}

fn render(directive: &str, arg: &Value) -> String {
    match directive {
        "%s" => stringify(arg),
        "%d" => {
            let n = to_number(arg);
            // NaN truncates to 0, mirroring JS ToInt32 coercion
            (n.trunc() as i64).to_string()
        }
        "%f" => to_number(arg).to_string(),
        "%j" => arg.to_string(),
        _ => directive.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_basic_substitution() {
        let out = format_str("%s=%d", &[json!("count"), json!(3)]);
        assert_eq!(out, "count=3");
    }

    #[test]
    fn test_format_string_directive_coerces() {
        assert_eq!(format_str("%s", &[json!(null)]), "null");
        assert_eq!(format_str("%s", &[json!(true)]), "true");
        assert_eq!(format_str("%s", &[json!([1, 2])]), "[1,2]");
    }

    #[test]
    fn test_format_integer_directive_truncates() {
        assert_eq!(format_str("%d", &[json!(7.9)]), "7");
        assert_eq!(format_str("%d", &[json!(-7.9)]), "-7");
        assert_eq!(format_str("%d", &[json!("12")]), "12");
        // Non-numeric coerces through NaN to 0
        assert_eq!(format_str("%d", &[json!("abc")]), "0");
    }

    #[test]
    fn test_format_float_directive() {
        assert_eq!(format_str("%f", &[json!(2.5)]), "2.5");
        assert_eq!(format_str("%f", &[json!("1.25")]), "1.25");
        assert_eq!(format_str("%f", &[json!("abc")]), "NaN");
    }

    #[test]
    fn test_format_json_directive() {
        assert_eq!(format_str("%j", &[json!({"a": [1, "x"]})]), "{\"a\":[1,\"x\"]}");
        assert_eq!(format_str("%j", &[json!("quoted")]), "\"quoted\"");
    }

    #[test]
    fn test_format_literal_percent_consumes_no_argument() {
        assert_eq!(format_str("%%%s", &[json!("x")]), "%x");
        assert_eq!(format_str("100%%", &[]), "100%");
    }

    #[test]
    fn test_format_missing_arguments_keep_directives() {
        assert_eq!(format_str("%s %d %f", &[json!("a")]), "a %d %f");
    }

    #[test]
    fn test_format_surplus_arguments_are_ignored() {
        assert_eq!(format_str("%s", &[json!("a"), json!("b")]), "a");
    }

    #[test]
    fn test_format_without_directives() {
        assert_eq!(format_str("plain text", &[json!("unused")]), "plain text");
    }

    #[test]
    fn test_format_unknown_sequences_pass_through() {
        // "%x" is not a directive; it is ordinary text.
        assert_eq!(format_str("%x %s", &[json!("a")]), "%x a");
    }
}
