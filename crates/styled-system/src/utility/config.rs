//! Utility definitions.
//!
//! A [`UtilityConfig`] describes how one style property resolves: where its
//! named values come from, which shorthands alias it, and an optional
//! transform that turns the resolved value into one or more declarations.
//!
//! Values and shorthands can be loaded from YAML or JSON:
//!
//! ```yaml
//! backgroundColor:
//!   values: colors          # token category
//!   shorthand: [bg, bgColor]
//! position:
//!   values: [static, relative, absolute]
//! truncated:
//!   values: { type: boolean }
//! ```
//!
//! Transforms are code and are attached with [`UtilityConfig::transform`].

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use super::context::TransformContext;
use crate::tokens::TokenDictionary;
use crate::value::StyleObject;

/// Turns a resolved value into a style fragment.
pub type TransformFn = Arc<dyn Fn(&Value, &TransformContext<'_>) -> StyleObject + Send + Sync>;

/// Computes a value map from the token dictionary.
pub type ValuesFn = Arc<dyn Fn(&TokenDictionary) -> StyleObject + Send + Sync>;

/// Where a utility's named values come from.
#[derive(Clone)]
pub enum ValueSource {
    /// Every token in a category, keyed by token key (`red.500`).
    Category(String),
    /// A fixed set of keywords that map to themselves.
    List(Vec<String>),
    /// An explicit name to value mapping.
    Map(StyleObject),
    /// `true`/`false`, accepting booleans or their string forms.
    Boolean,
    /// A mapping computed from the tokens.
    Function(ValuesFn),
}

impl ValueSource {
    pub fn category(name: impl Into<String>) -> Self {
        ValueSource::Category(name.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueSource::List(values.into_iter().map(Into::into).collect())
    }

    pub fn function(f: impl Fn(&TokenDictionary) -> StyleObject + Send + Sync + 'static) -> Self {
        ValueSource::Function(Arc::new(f))
    }

    /// Resolves the source into a lookup map.
    pub(crate) fn resolve(&self, tokens: &TokenDictionary) -> StyleObject {
        match self {
            ValueSource::Category(category) => category_map(tokens, category),
            ValueSource::List(values) => values
                .iter()
                .map(|v| (v.clone(), Value::String(v.clone())))
                .collect(),
            ValueSource::Map(map) => map.clone(),
            ValueSource::Boolean => [
                ("true".to_string(), Value::Bool(true)),
                ("false".to_string(), Value::Bool(false)),
            ]
            .into_iter()
            .collect(),
            ValueSource::Function(f) => f(tokens),
        }
    }
}

impl fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Category(c) => f.debug_tuple("Category").field(c).finish(),
            ValueSource::List(l) => f.debug_tuple("List").field(l).finish(),
            ValueSource::Map(m) => f.debug_tuple("Map").field(m).finish(),
            ValueSource::Boolean => f.write_str("Boolean"),
            ValueSource::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Returns a token category as a value map, or an empty map.
pub fn category_map(tokens: &TokenDictionary, category: &str) -> StyleObject {
    tokens
        .category_values(category)
        .map(|values| {
            values
                .iter()
                .map(|(key, var)| (key.clone(), Value::String(var.clone())))
                .collect()
        })
        .unwrap_or_default()
}

/// Definition of a single utility property.
#[derive(Clone, Default, Deserialize)]
#[serde(try_from = "RawUtilityConfig")]
pub struct UtilityConfig {
    pub values: Option<ValueSource>,
    pub shorthand: Vec<String>,
    pub transform: Option<TransformFn>,
}

impl UtilityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `values(ValueSource::Category(..))`.
    pub fn category(self, category: impl Into<String>) -> Self {
        self.values(ValueSource::Category(category.into()))
    }

    pub fn values(mut self, values: ValueSource) -> Self {
        self.values = Some(values);
        self
    }

    pub fn shorthand<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shorthand.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn transform(
        mut self,
        f: impl Fn(&Value, &TransformContext<'_>) -> StyleObject + Send + Sync + 'static,
    ) -> Self {
        self.transform = Some(Arc::new(f));
        self
    }

    /// Fills unset parts from `other`.
    ///
    /// Used when a file-loaded config (values, shorthands) overlays a preset
    /// definition that carries the transform.
    pub fn or(mut self, other: &UtilityConfig) -> Self {
        if self.values.is_none() {
            self.values = other.values.clone();
        }
        if self.shorthand.is_empty() {
            self.shorthand = other.shorthand.clone();
        }
        if self.transform.is_none() {
            self.transform = other.transform.clone();
        }
        self
    }
}

impl fmt::Debug for UtilityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UtilityConfig")
            .field("values", &self.values)
            .field("shorthand", &self.shorthand)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUtilityConfig {
    #[serde(default)]
    values: Option<Value>,
    #[serde(default)]
    shorthand: Option<OneOrMany>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl TryFrom<RawUtilityConfig> for UtilityConfig {
    type Error = String;

    fn try_from(raw: RawUtilityConfig) -> Result<Self, Self::Error> {
        let values = match raw.values {
            None | Some(Value::Null) => None,
            Some(Value::String(category)) => Some(ValueSource::Category(category)),
            Some(Value::Array(items)) => Some(ValueSource::List(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s),
                        other => Err(format!("utility values must be strings, got {}", other)),
                    })
                    .collect::<Result<_, _>>()?,
            )),
            Some(Value::Object(map)) => {
                if map.len() == 1 && map.get("type").and_then(Value::as_str) == Some("boolean") {
                    Some(ValueSource::Boolean)
                } else {
                    Some(ValueSource::Map(map))
                }
            }
            Some(other) => {
                return Err(format!(
                    "utility values must be a category, a list or a map, got {}",
                    other
                ))
            }
        };

        let shorthand = match raw.shorthand {
            None => Vec::new(),
            Some(OneOrMany::One(name)) => vec![name],
            Some(OneOrMany::Many(names)) => names,
        };

        Ok(UtilityConfig {
            values,
            shorthand,
            transform: None,
        })
    }
}
