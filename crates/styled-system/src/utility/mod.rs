//! The utility registry: style property resolution.
//!
//! Every style property an author writes goes through [`Utility::transform`],
//! which turns `(property, value)` into a fragment of final CSS declarations.
//! Resolution follows a fixed order:
//!
//! 1. A shorthand (`bg`) becomes its canonical property (`background`).
//! 2. A property with no definition passes through unchanged. Custom
//!    properties (`--x`) resolve their value as a token path first.
//! 3. If the definition has a value source, the value is looked up by its
//!    string form; unknown values are used as written.
//! 4. The definition's transform produces the fragment. Without one the
//!    fragment is `{ canonical: value }`.
//!
//! Nothing here fails: unknown properties and unknown values degrade to the
//! literal input.
//!
//! # Registration and caching
//!
//! Definitions can be added after construction with [`Utility::register`],
//! which replaces an existing definition, recomputes its value map, rebuilds
//! the shorthand index, and bumps a generation counter. Transform results are
//! memoized per generation, so a result computed before a registration is
//! never served after it.

mod config;
mod context;
mod memo;

pub use config::{category_map, TransformFn, UtilityConfig, ValueSource, ValuesFn};
pub use context::TransformContext;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::conditions::Breakpoints;
use crate::tokens::TokenDictionary;
use crate::value::{declaration, value_key, StyleObject};
use memo::Memo;

/// Name of the synthesized palette-selection utility.
pub const COLOR_PALETTE: &str = "colorPalette";

/// Registry of utility definitions.
pub struct Utility {
    tokens: Arc<TokenDictionary>,
    breakpoints: Breakpoints,
    configs: IndexMap<String, UtilityConfig>,
    shorthands: IndexMap<String, String>,
    values: HashMap<String, StyleObject>,
    generation: u64,
    memo: Memo<(String, String), StyleObject>,
}

impl Utility {
    /// Builds the registry and synthesizes the `colorPalette` utility from
    /// the dictionary's palettes.
    pub fn new(
        config: IndexMap<String, UtilityConfig>,
        tokens: Arc<TokenDictionary>,
        breakpoints: Breakpoints,
    ) -> Self {
        let mut utility = Self {
            tokens,
            breakpoints,
            configs: config,
            shorthands: IndexMap::new(),
            values: HashMap::new(),
            generation: 0,
            memo: Memo::new(),
        };

        let palette = color_palette_config(&utility.tokens);
        utility.configs.insert(COLOR_PALETTE.to_string(), palette);

        let values: HashMap<String, StyleObject> = utility
            .configs
            .iter()
            .filter_map(|(property, config)| {
                config
                    .values
                    .as_ref()
                    .map(|source| (property.clone(), source.resolve(&utility.tokens)))
            })
            .collect();
        utility.values = values;
        utility.assign_shorthands();

        log::debug!(
            "utility registry built: {} properties, {} shorthands",
            utility.configs.len(),
            utility.shorthands.len()
        );

        utility
    }

    /// Adds or replaces a definition.
    ///
    /// Previously memoized transforms are invalidated.
    pub fn register(&mut self, property: impl Into<String>, config: UtilityConfig) {
        let property = property.into();

        match &config.values {
            Some(source) => {
                let values = source.resolve(&self.tokens);
                self.values.insert(property.clone(), values);
            }
            None => {
                self.values.remove(&property);
            }
        }
        self.configs.insert(property.clone(), config);
        self.assign_shorthands();
        self.generation += 1;

        log::trace!(
            "registered utility '{}' (generation {})",
            property,
            self.generation
        );
    }

    fn assign_shorthands(&mut self) {
        self.shorthands.clear();
        for (property, config) in &self.configs {
            for name in &config.shorthand {
                // A name that is itself a property always means that property.
                if name == property || self.configs.contains_key(name) {
                    continue;
                }
                if let Some(previous) = self.shorthands.insert(name.clone(), property.clone()) {
                    if previous != *property {
                        log::warn!(
                            "shorthand '{}' moved from '{}' to '{}'",
                            name,
                            previous,
                            property
                        );
                    }
                }
            }
        }
    }

    /// Returns the canonical property for a name.
    ///
    /// Names that are not shorthands come back unchanged, so this is
    /// idempotent.
    pub fn resolve_shorthand<'a>(&'a self, name: &'a str) -> &'a str {
        self.shorthands
            .get(name)
            .map(String::as_str)
            .unwrap_or(name)
    }

    /// Resolves one property and value into final declarations.
    pub fn transform(&self, property: &str, raw: &Value) -> StyleObject {
        let key = (property.to_string(), raw.to_string());
        if let Some(hit) = self.memo.get(self.generation, &key) {
            return hit;
        }
        let fragment = self.compute(property, raw);
        self.memo.insert(self.generation, key, fragment.clone());
        fragment
    }

    fn compute(&self, property: &str, raw: &Value) -> StyleObject {
        let canonical = self.resolve_shorthand(property);

        let Some(config) = self.configs.get(canonical) else {
            return self.passthrough(canonical, raw);
        };

        let value = value_key(raw)
            .and_then(|key| self.values.get(canonical)?.get(&key).cloned())
            .unwrap_or_else(|| raw.clone());

        match &config.transform {
            Some(transform) => {
                let context =
                    TransformContext::new(canonical, raw, &self.tokens, &self.breakpoints);
                transform(&value, &context)
            }
            None => declaration(canonical, value),
        }
    }

    fn passthrough(&self, property: &str, raw: &Value) -> StyleObject {
        match raw {
            Value::String(value) if property.starts_with("--") => {
                declaration(property, self.tokens.get_var(value, value))
            }
            _ => declaration(property, raw.clone()),
        }
    }

    /// Shorthand names followed by property names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.shorthands
            .keys()
            .chain(self.configs.keys())
            .map(String::as_str)
    }

    /// True for registered properties and shorthands.
    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name) || self.shorthands.contains_key(name)
    }

    /// Returns the definition of a canonical property.
    pub fn get(&self, property: &str) -> Option<&UtilityConfig> {
        self.configs.get(property)
    }

    /// Returns a property's resolved value map.
    pub fn values(&self, property: &str) -> Option<&StyleObject> {
        self.values.get(self.resolve_shorthand(property))
    }

    pub fn tokens(&self) -> &TokenDictionary {
        &self.tokens
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Number of registrations since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl fmt::Debug for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Utility")
            .field("properties", &self.configs.len())
            .field("shorthands", &self.shorthands.len())
            .field("generation", &self.generation)
            .field("cached", &self.memo.len())
            .finish()
    }
}

fn color_palette_config(tokens: &TokenDictionary) -> UtilityConfig {
    let palettes: IndexMap<String, StyleObject> = tokens
        .color_palettes()
        .iter()
        .map(|(name, declarations)| {
            let object = declarations
                .iter()
                .map(|(var, value)| (var.clone(), Value::String(value.clone())))
                .collect();
            (name.clone(), object)
        })
        .collect();

    UtilityConfig::new()
        .values(ValueSource::list(palettes.keys().cloned()))
        .transform(move |value, _| {
            value_key(value)
                .and_then(|name| palettes.get(&name).cloned())
                .unwrap_or_default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::into_object;
    use serde_json::json;

    fn tokens() -> Arc<TokenDictionary> {
        Arc::new(
            TokenDictionary::new(
                &into_object(json!({
                    "colors": {
                        "red": {
                            "300": { "value": "#FC8181" },
                            "500": { "value": "#E53E3E" }
                        }
                    },
                    "spacing": { "4": { "value": "1rem" } }
                })),
                &StyleObject::new(),
                "chakra",
            )
            .unwrap(),
        )
    }

    fn utility() -> Utility {
        let mut config = IndexMap::new();
        config.insert(
            "backgroundColor".to_string(),
            UtilityConfig::new().category("colors").shorthand(["bg", "bgColor"]),
        );
        config.insert(
            "marginTop".to_string(),
            UtilityConfig::new().category("spacing").shorthand(["mt"]),
        );
        config.insert(
            "boxSize".to_string(),
            UtilityConfig::new().transform(|v, _| {
                into_object(json!({ "width": v.clone(), "height": v.clone() }))
            }),
        );
        config.insert(
            "truncated".to_string(),
            UtilityConfig::new()
                .values(ValueSource::Boolean)
                .transform(|v, _| match v {
                    Value::Bool(true) => into_object(json!({ "overflow": "hidden" })),
                    _ => StyleObject::new(),
                }),
        );
        config.insert(
            "minInlineSize".to_string(),
            UtilityConfig::new().shorthand(["minInlineSize"]),
        );
        Utility::new(config, tokens(), Breakpoints::default())
    }

    #[test]
    fn test_shorthand_resolves_to_canonical() {
        let u = utility();
        assert_eq!(u.resolve_shorthand("bg"), "backgroundColor");
        assert_eq!(u.resolve_shorthand("backgroundColor"), "backgroundColor");
        assert_eq!(u.resolve_shorthand("unknown"), "unknown");
        assert_eq!(u.resolve_shorthand("minInlineSize"), "minInlineSize");
    }

    #[test]
    fn test_token_values_resolve_to_vars() {
        let u = utility();
        assert_eq!(
            Value::Object(u.transform("bg", &json!("red.500"))),
            json!({ "backgroundColor": "var(--chakra-colors-red-500)" })
        );
        assert_eq!(
            Value::Object(u.transform("mt", &json!(4))),
            json!({ "marginTop": "var(--chakra-spacing-4)" })
        );
    }

    #[test]
    fn test_unknown_values_pass_through() {
        let u = utility();
        assert_eq!(
            Value::Object(u.transform("bg", &json!("#fff"))),
            json!({ "backgroundColor": "#fff" })
        );
    }

    #[test]
    fn test_unknown_properties_pass_through() {
        let u = utility();
        assert_eq!(
            Value::Object(u.transform("gridArea", &json!("main"))),
            json!({ "gridArea": "main" })
        );
    }

    #[test]
    fn test_custom_properties_resolve_tokens() {
        let u = utility();
        assert_eq!(
            Value::Object(u.transform("--accent", &json!("colors.red.500"))),
            json!({ "--accent": "var(--chakra-colors-red-500)" })
        );
        assert_eq!(
            Value::Object(u.transform("--gap", &json!("3px"))),
            json!({ "--gap": "3px" })
        );
    }

    #[test]
    fn test_transform_expands_to_several_properties() {
        let u = utility();
        assert_eq!(
            Value::Object(u.transform("boxSize", &json!("10px"))),
            json!({ "width": "10px", "height": "10px" })
        );
    }

    #[test]
    fn test_boolean_values_accept_strings() {
        let u = utility();
        assert_eq!(u.transform("truncated", &json!(true)), u.transform("truncated", &json!("true")));
        assert!(u.transform("truncated", &json!(false)).is_empty());
    }

    #[test]
    fn test_color_palette_is_synthesized() {
        let u = utility();
        assert!(u.has(COLOR_PALETTE));
        assert_eq!(
            Value::Object(u.transform(COLOR_PALETTE, &json!("red"))),
            json!({
                "--chakra-colors-color-palette-300": "var(--chakra-colors-red-300)",
                "--chakra-colors-color-palette-500": "var(--chakra-colors-red-500)"
            })
        );
        assert!(u.transform(COLOR_PALETTE, &json!("nope")).is_empty());
    }

    #[test]
    fn test_keys_list_shorthands_first() {
        let u = utility();
        let keys: Vec<&str> = u.keys().collect();
        assert_eq!(&keys[..3], &["bg", "bgColor", "mt"]);
        assert!(keys.contains(&"backgroundColor"));
        assert!(u.has("bg"));
        assert!(!u.has("color"));
    }

    #[test]
    fn test_register_replaces_and_invalidates_cache() {
        let mut u = utility();
        let before = u.transform("bg", &json!("red.500"));
        assert_eq!(before["backgroundColor"], json!("var(--chakra-colors-red-500)"));

        u.register(
            "backgroundColor",
            UtilityConfig::new()
                .shorthand(["bg"])
                .transform(|v, _| declaration("background", v.clone())),
        );

        assert_eq!(u.generation(), 1);
        assert_eq!(
            Value::Object(u.transform("bg", &json!("red.500"))),
            json!({ "background": "red.500" })
        );
        assert_eq!(u.resolve_shorthand("bgColor"), "bgColor");
    }

    #[test]
    fn test_registering_a_shorthand_name_as_property_wins() {
        let mut u = utility();
        u.register("bg", UtilityConfig::new());
        assert_eq!(u.resolve_shorthand("bg"), "bg");
        assert_eq!(
            Value::Object(u.transform("bg", &json!("red"))),
            json!({ "bg": "red" })
        );
    }

    #[test]
    fn test_context_exposes_raw_and_tokens() {
        let mut u = utility();
        u.register(
            "probe",
            UtilityConfig::new().category("colors").transform(|v, ctx| {
                into_object(json!({
                    "property": ctx.property,
                    "value": v.clone(),
                    "raw": ctx.raw.clone(),
                    "token": ctx.token("spacing.4"),
                    "literal": ctx.token_raw("colors.red.500").map(|t| t.value.clone()),
                }))
            }),
        );
        assert_eq!(
            Value::Object(u.transform("probe", &json!("red.300"))),
            json!({
                "property": "probe",
                "value": "var(--chakra-colors-red-300)",
                "raw": "red.300",
                "token": "var(--chakra-spacing-4)",
                "literal": "#E53E3E"
            })
        );
    }
}
