//! Flattening of nested style specifications.
//!
//! A style specification nests freely:
//!
//! ```json
//! {
//!   "color": ["red", null, "blue"],
//!   "_hover": { "bg": { "base": "gray.100", "_dark": "gray.700" } },
//!   "css": { "& > p": { "mt": 2 } }
//! }
//! ```
//!
//! [`serialize`] walks it and emits one [`StyleEntry`] per leaf, in
//! declaration order. Each entry carries the chain of condition names that
//! enclosed it. Names are left unresolved; the CSS function resolves them.
//!
//! How a key with an object value is read:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `css` | Merged into the current scope |
//! | A condition or raw selector/at-rule | Opens a scope |
//! | Anything else, all inner keys `base` or conditions | Conditional value |
//! | Anything else | Literal selector scope (`body`, `li`) |
//!
//! Arrays are responsive: index 0 is the base value and index `i` applies
//! from the `i`-th breakpoint up. `null` never produces an entry.

use serde::Serialize;
use serde_json::Value;

use crate::conditions::Conditions;
use crate::value::StyleObject;

/// Key whose object merges into the enclosing scope.
pub const CSS_KEY: &str = "css";

/// Conditional-value branch that applies without a condition.
pub const BASE_KEY: &str = "base";

/// One flattened declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleEntry {
    /// Property or shorthand as written.
    pub property: String,
    /// Enclosing condition names, outermost first.
    pub conditions: Vec<String>,
    pub value: Value,
}

/// Flattens a style specification.
pub fn serialize(spec: &StyleObject, conditions: &Conditions) -> Vec<StyleEntry> {
    let mut entries = Vec::new();
    Walker {
        conditions,
        entries: &mut entries,
    }
    .scope(spec, &mut Vec::new());
    entries
}

struct Walker<'a> {
    conditions: &'a Conditions,
    entries: &'a mut Vec<StyleEntry>,
}

impl Walker<'_> {
    fn scope(&mut self, spec: &StyleObject, path: &mut Vec<String>) {
        for (key, value) in spec {
            match value {
                Value::Null => {}
                Value::Object(inner) if key == CSS_KEY => self.scope(inner, path),
                Value::Object(inner) if self.conditions.has(key) => {
                    path.push(key.clone());
                    self.scope(inner, path);
                    path.pop();
                }
                _ => self.value(key, value, path),
            }
        }
    }

    fn value(&mut self, property: &str, value: &Value, path: &mut Vec<String>) {
        match value {
            Value::Null => {}
            Value::Array(items) => self.responsive(property, items, path),
            Value::Object(branches) if self.is_conditional(branches) => {
                for (condition, branch) in branches {
                    if condition == BASE_KEY {
                        self.value(property, branch, path);
                    } else {
                        path.push(condition.clone());
                        self.value(property, branch, path);
                        path.pop();
                    }
                }
            }
            Value::Object(inner) => {
                path.push(property.to_string());
                self.scope(inner, path);
                path.pop();
            }
            scalar => self.entries.push(StyleEntry {
                property: property.to_string(),
                conditions: path.clone(),
                value: scalar.clone(),
            }),
        }
    }

    fn responsive(&mut self, property: &str, items: &[Value], path: &mut Vec<String>) {
        let names = self.conditions.breakpoints().names();
        for (index, item) in items.iter().enumerate() {
            if item.is_null() {
                continue;
            }
            match names.get(index) {
                Some(_) if index == 0 => self.value(property, item, path),
                Some(name) => {
                    path.push(name.to_string());
                    self.value(property, item, path);
                    path.pop();
                }
                None => {
                    log::debug!(
                        "responsive value for '{}' has no breakpoint at index {}",
                        property,
                        index
                    );
                }
            }
        }
    }

    fn is_conditional(&self, branches: &StyleObject) -> bool {
        !branches.is_empty()
            && branches
                .keys()
                .all(|key| key == BASE_KEY || self.conditions.has(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::Breakpoints;
    use crate::value::into_object;
    use indexmap::IndexMap;
    use serde_json::json;

    fn conditions() -> Conditions {
        let user: IndexMap<String, String> = [("hover", "&:hover"), ("dark", ".dark &")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let bps: IndexMap<String, String> = [("sm", "480px"), ("md", "768px")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Conditions::new(&user, Breakpoints::new(&bps).unwrap())
    }

    fn flat(spec: Value) -> Vec<(String, Vec<String>, Value)> {
        serialize(&into_object(spec), &conditions())
            .into_iter()
            .map(|e| (e.property, e.conditions, e.value))
            .collect()
    }

    fn entry(p: &str, c: &[&str], v: Value) -> (String, Vec<String>, Value) {
        (p.to_string(), c.iter().map(|s| s.to_string()).collect(), v)
    }

    #[test]
    fn test_plain_properties_keep_order() {
        assert_eq!(
            flat(json!({ "color": "red", "mt": 4 })),
            vec![entry("color", &[], json!("red")), entry("mt", &[], json!(4))]
        );
    }

    #[test]
    fn test_responsive_array_skips_null() {
        assert_eq!(
            flat(json!({ "color": ["red", null, "blue"] })),
            vec![
                entry("color", &[], json!("red")),
                entry("color", &["md"], json!("blue")),
            ]
        );
    }

    #[test]
    fn test_responsive_array_longer_than_breakpoints() {
        assert_eq!(flat(json!({ "color": ["a", "b", "c", "d"] })).len(), 3);
    }

    #[test]
    fn test_condition_scopes_nest() {
        assert_eq!(
            flat(json!({ "_hover": { "_dark": { "color": "white" }, "color": "black" } })),
            vec![
                entry("color", &["_hover", "_dark"], json!("white")),
                entry("color", &["_hover"], json!("black")),
            ]
        );
    }

    #[test]
    fn test_conditional_values() {
        assert_eq!(
            flat(json!({ "bg": { "base": "white", "_dark": "black", "md": ["x", "y"] } })),
            vec![
                entry("bg", &[], json!("white")),
                entry("bg", &["_dark"], json!("black")),
                entry("bg", &["md"], json!("x")),
                entry("bg", &["md", "sm"], json!("y")),
            ]
        );
    }

    #[test]
    fn test_css_key_merges_into_scope() {
        assert_eq!(
            flat(json!({ "_hover": { "css": { "color": "red" } } })),
            vec![entry("color", &["_hover"], json!("red"))]
        );
    }

    #[test]
    fn test_raw_selectors_open_scopes() {
        assert_eq!(
            flat(json!({
                "&:nth-child(2)": { "color": "red" },
                "body": { "margin": 0 },
                "@media print": { "display": "none" }
            })),
            vec![
                entry("color", &["&:nth-child(2)"], json!("red")),
                entry("margin", &["body"], json!(0)),
                entry("display", &["@media print"], json!("none")),
            ]
        );
    }

    #[test]
    fn test_null_values_emit_nothing() {
        assert!(flat(json!({ "color": null, "_hover": { "bg": null }, "p": [null] })).is_empty());
    }
}
