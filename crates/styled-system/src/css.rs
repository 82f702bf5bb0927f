//! The CSS function: style specifications to style objects.
//!
//! Each serialized entry is resolved through the utility registry and placed
//! under its resolved condition path, the first condition outermost:
//!
//! ```json
//! { "_hover": { "md": { "bg": "red.500" } } }
//! ```
//!
//! becomes
//!
//! ```json
//! {
//!   "&:is(:hover, [data-hover])": {
//!     "@media screen and (min-width: 768px)": {
//!       "background": "var(--chakra-colors-red-500)"
//!     }
//!   }
//! }
//! ```
//!
//! Fragments land in the result in author order. Objects at the same path
//! are unioned and a later value for the same property replaces the earlier
//! one in place.

use serde_json::Value;

use crate::conditions::Conditions;
use crate::serialize::serialize;
use crate::utility::Utility;
use crate::value::{deep_merge, StyleObject};

const IMPORTANT: &str = "!important";

/// Resolves style specifications against a utility and condition registry.
#[derive(Debug, Clone, Copy)]
pub struct Css<'a> {
    utility: &'a Utility,
    conditions: &'a Conditions,
}

impl<'a> Css<'a> {
    pub fn new(utility: &'a Utility, conditions: &'a Conditions) -> Self {
        Self {
            utility,
            conditions,
        }
    }

    /// Resolves one specification.
    pub fn css(&self, spec: &StyleObject) -> StyleObject {
        let mut result = StyleObject::new();

        for entry in serialize(spec, self.conditions) {
            let (value, important) = strip_important(&entry.value);
            let mut fragment = self.utility.transform(&entry.property, &value);
            if fragment.is_empty() {
                continue;
            }
            if important {
                mark_important(&mut fragment);
            }
            let fragment = self.resolve_keys(fragment);

            let path: Vec<String> = entry
                .conditions
                .iter()
                .map(|condition| self.conditions.resolve(condition))
                .collect();
            merge_at(&mut result, &path, &fragment);
        }

        result
    }

    /// Deep merges the specifications, later ones winning, and resolves the
    /// merged result once.
    pub fn css_many<'s, I>(&self, specs: I) -> StyleObject
    where
        I: IntoIterator<Item = &'s StyleObject>,
    {
        let mut merged = StyleObject::new();
        for spec in specs {
            self.layer(&mut merged, spec);
        }
        self.css(&merged)
    }

    /// Deep merges `spec` onto `target` after rewriting its shorthand keys,
    /// so a later `px` replaces an earlier `paddingInline` and vice versa.
    pub fn layer(&self, target: &mut StyleObject, spec: &StyleObject) {
        deep_merge(target, &self.canonical_keys(spec));
    }

    /// Shorthands renamed to their property at every nesting level.
    /// Condition keys are left alone.
    fn canonical_keys(&self, spec: &StyleObject) -> StyleObject {
        spec.iter()
            .map(|(key, value)| {
                let key = if self.conditions.has(key) {
                    key.clone()
                } else {
                    self.utility.resolve_shorthand(key).to_string()
                };
                let value = match value {
                    Value::Object(inner) => Value::Object(self.canonical_keys(inner)),
                    other => other.clone(),
                };
                (key, value)
            })
            .collect()
    }

    /// Transforms may nest declarations under condition names (`md`,
    /// `_dark`) or raw selectors; resolve every nested key.
    fn resolve_keys(&self, fragment: StyleObject) -> StyleObject {
        fragment
            .into_iter()
            .map(|(key, value)| match value {
                Value::Object(inner) => (
                    self.conditions.resolve(&key),
                    Value::Object(self.resolve_keys(inner)),
                ),
                other => (key, other),
            })
            .collect()
    }
}

/// Merges `fragment` into the scope found by walking `path` from `scope`,
/// creating scopes as needed.
fn merge_at(scope: &mut StyleObject, path: &[String], fragment: &StyleObject) {
    let Some((key, rest)) = path.split_first() else {
        deep_merge(scope, fragment);
        return;
    };
    let slot = scope
        .entry(key.clone())
        .or_insert_with(|| Value::Object(StyleObject::new()));
    if let Value::Object(inner) = slot {
        merge_at(inner, rest, fragment);
        return;
    }
    // A declaration and a scope share a key; the scope wins.
    let mut inner = StyleObject::new();
    merge_at(&mut inner, rest, fragment);
    *slot = Value::Object(inner);
}

/// Splits a trailing `!important` (or its `!` short form) off a string value.
fn strip_important(value: &Value) -> (Value, bool) {
    let Value::String(text) = value else {
        return (value.clone(), false);
    };
    let trimmed = text.trim_end();
    if let Some(rest) = trimmed.strip_suffix(IMPORTANT) {
        return (Value::String(rest.trim_end().to_string()), true);
    }
    if let Some(rest) = trimmed.strip_suffix('!') {
        return (Value::String(rest.trim_end().to_string()), true);
    }
    (value.clone(), false)
}

fn mark_important(fragment: &mut StyleObject) {
    for value in fragment.values_mut() {
        match value {
            Value::Object(inner) => mark_important(inner),
            Value::String(text) if !text.ends_with(IMPORTANT) => {
                text.push(' ');
                text.push_str(IMPORTANT);
            }
            Value::Number(n) => {
                let text = format!("{} {}", n, IMPORTANT);
                *value = Value::String(text);
            }
            _ => {}
        }
    }
}
