//! Style values and the ordered maps that carry them.
//!
//! Style specifications and resolved style objects are both ordered JSON-like
//! maps. Declaration order matters for cascade-sensitive merging, so the
//! crate relies on `serde_json`'s `preserve_order` map throughout.

use cssparser::{Parser, ParserInput, Token};
use serde_json::Value;

/// An ordered map from property, condition, or selector to a value.
///
/// Used both for author input (style specifications) and for resolved
/// output (style objects).
pub type StyleObject = serde_json::Map<String, Value>;

/// Converts a JSON value into a [`StyleObject`], discarding non-objects.
pub fn into_object(value: Value) -> StyleObject {
    match value {
        Value::Object(map) => map,
        _ => StyleObject::new(),
    }
}

/// Builds a single-declaration style object.
pub fn declaration(property: impl Into<String>, value: impl Into<Value>) -> StyleObject {
    let mut obj = StyleObject::new();
    obj.insert(property.into(), value.into());
    obj
}

/// Returns the lookup key for a scalar value.
///
/// Value maps are keyed by strings, so `4` and `"4"` find the same entry,
/// and booleans find `"true"`/`"false"`. Arrays, objects and null have no key.
pub fn value_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Renders a value the way it appears in CSS text.
pub fn value_to_css(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_css)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Null => String::new(),
        Value::Object(_) => value.to_string(),
    }
}

/// Deep merges `source` into `target`.
///
/// Nested objects are merged key by key; any other value in `source`
/// replaces the value in `target`. Replaced keys keep their original
/// position, new keys are appended.
pub fn deep_merge(target: &mut StyleObject, source: &StyleObject) {
    for (key, value) in source {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                deep_merge(existing, incoming);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Returns true for a bare `var(--name)` / `var(--name, fallback)` reference.
pub fn is_css_var(value: &str) -> bool {
    matches!(classify(value), ValueKind::Variable)
}

/// Lexical shape of a single CSS component value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// A unitless number (`12`, `0.5`).
    Number,
    /// A number with a unit (`12px`, `45deg`). Carries the unit.
    Dimension(String),
    /// A percentage (`50%`).
    Percentage,
    /// A `var(...)` reference.
    Variable,
    /// A single identifier (`auto`, `red`).
    Keyword,
    /// Anything else, including multi-token values.
    Other,
}

/// Classifies a value by tokenizing it as CSS.
///
/// Only single-component values get a specific kind; `"1px solid"` is
/// [`ValueKind::Other`].
pub fn classify(value: &str) -> ValueKind {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    let token = match parser.next() {
        Ok(token) => token.clone(),
        Err(_) => return ValueKind::Other,
    };

    let kind = match token {
        Token::Number { .. } => ValueKind::Number,
        Token::Dimension { ref unit, .. } => ValueKind::Dimension(unit.to_ascii_lowercase()),
        Token::Percentage { .. } => ValueKind::Percentage,
        Token::Ident(_) => ValueKind::Keyword,
        Token::Function(ref name) if name.eq_ignore_ascii_case("var") => {
            let nested: Result<(), cssparser::ParseError<'_, ()>> =
                parser.parse_nested_block(|p| {
                    while p.next().is_ok() {}
                    Ok(())
                });
            if nested.is_err() {
                return ValueKind::Other;
            }
            ValueKind::Variable
        }
        _ => return ValueKind::Other,
    };

    if parser.is_exhausted() {
        kind
    } else {
        ValueKind::Other
    }
}

/// Parses a length such as `768px` or `48em` into its number and unit.
///
/// A bare `0` parses with an empty unit.
pub fn parse_length(value: &str) -> Option<(f64, String)> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let parsed = match parser.next() {
        Ok(Token::Dimension { value, unit, .. }) => {
            Some((f64::from(*value), unit.to_ascii_lowercase()))
        }
        Ok(Token::Number { value, .. }) if *value == 0.0 => Some((0.0, String::new())),
        _ => None,
    };
    if parser.is_exhausted() {
        parsed
    } else {
        None
    }
}

/// Formats a number with at most five decimals and no trailing zeros.
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.5}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts a camelCase name to dash-case (`whiteAlpha` → `white-alpha`).
pub fn dash_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Converts a style property to its CSS spelling.
///
/// Custom properties are left untouched; vendor prefixes written in
/// camelCase (`WebkitBoxOrient`, `msFlex`) gain their leading dash.
pub fn hyphenate(property: &str) -> String {
    if property.starts_with("--") || property.contains('-') {
        return property.to_string();
    }
    let dashed = dash_case(property);
    if property.starts_with("ms") && property[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        format!("-{}", dashed)
    } else {
        dashed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_key_stringifies_scalars() {
        assert_eq!(value_key(&json!("4")), Some("4".to_string()));
        assert_eq!(value_key(&json!(4)), Some("4".to_string()));
        assert_eq!(value_key(&json!(0.5)), Some("0.5".to_string()));
        assert_eq!(value_key(&json!(true)), Some("true".to_string()));
        assert_eq!(value_key(&json!(null)), None);
        assert_eq!(value_key(&json!(["a"])), None);
    }

    #[test]
    fn test_deep_merge_replaces_leaves_and_merges_objects() {
        let mut target = into_object(json!({
            "color": "red",
            "&:hover": { "color": "blue", "bg": "white" }
        }));
        let source = into_object(json!({
            "&:hover": { "color": "green" },
            "padding": "4px"
        }));
        deep_merge(&mut target, &source);
        assert_eq!(
            Value::Object(target),
            json!({
                "color": "red",
                "&:hover": { "color": "green", "bg": "white" },
                "padding": "4px"
            })
        );
    }

    #[test]
    fn test_deep_merge_keeps_position_of_replaced_key() {
        let mut target = into_object(json!({ "a": 1, "b": 2 }));
        deep_merge(&mut target, &into_object(json!({ "a": 3 })));
        let keys: Vec<_> = target.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(target["a"], json!(3));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("45"), ValueKind::Number);
        assert_eq!(classify(" 0.5 "), ValueKind::Number);
        assert_eq!(classify("45deg"), ValueKind::Dimension("deg".to_string()));
        assert_eq!(classify("1turn"), ValueKind::Dimension("turn".to_string()));
        assert_eq!(classify("50%"), ValueKind::Percentage);
        assert_eq!(classify("var(--rotate)"), ValueKind::Variable);
        assert_eq!(classify("var(--rotate, 0)"), ValueKind::Variable);
        assert_eq!(classify("auto"), ValueKind::Keyword);
        assert_eq!(classify("1px solid"), ValueKind::Other);
        assert_eq!(classify("calc(1px + 2px)"), ValueKind::Other);
        assert_eq!(classify(""), ValueKind::Other);
    }

    #[test]
    fn test_is_css_var() {
        assert!(is_css_var("var(--x)"));
        assert!(!is_css_var("var(--x) 2px"));
        assert!(!is_css_var("--x"));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("768px"), Some((768.0, "px".to_string())));
        assert_eq!(parse_length("30em"), Some((30.0, "em".to_string())));
        assert_eq!(parse_length("0"), Some((0.0, String::new())));
        assert_eq!(parse_length("12"), None);
        assert_eq!(parse_length("wide"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1023.98), "1023.98");
        assert_eq!(format_number(63.99875), "63.99875");
        assert_eq!(format_number(768.0), "768");
        assert_eq!(format_number(40.0), "40");
    }

    #[test]
    fn test_hyphenate() {
        assert_eq!(hyphenate("backgroundColor"), "background-color");
        assert_eq!(hyphenate("WebkitBoxOrient"), "-webkit-box-orient");
        assert_eq!(hyphenate("msFlexAlign"), "-ms-flex-align");
        assert_eq!(hyphenate("--line-clamp"), "--line-clamp");
        assert_eq!(hyphenate("color"), "color");
    }

    #[test]
    fn test_dash_case() {
        assert_eq!(dash_case("whiteAlpha"), "white-alpha");
        assert_eq!(dash_case("colorPalette"), "color-palette");
        assert_eq!(dash_case("2xl"), "2xl");
    }
}
