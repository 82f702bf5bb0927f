//! The system context: everything wired together.
//!
//! [`SystemContext::new`] builds the token dictionary, breakpoints,
//! conditions and utility registry from a [`SystemConfig`], then registers
//! the composition utilities (`textStyle`, `layerStyle`). After that the
//! context is used through shared references; only
//! [`register_utility`](SystemContext::register_utility) needs `&mut`, so
//! registration can never interleave with a borrowed recipe or CSS function.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use styled_system::{into_object, SystemConfig, SystemContext};
//!
//! let config = SystemConfig::from_yaml(r##"
//! conditions:
//!   hover: "&:hover"
//! theme:
//!   tokens:
//!     colors:
//!       brand: { value: "#0af" }
//! "##).unwrap();
//!
//! let system = SystemContext::new(config).unwrap();
//! let style = system.css(&into_object(json!({ "color": "colors.brand" })));
//! assert_eq!(style["color"], json!("colors.brand"));
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::conditions::{Breakpoints, ConditionKind, Conditions};
use crate::config::SystemConfig;
use crate::css::Css;
use crate::error::Result;
use crate::properties::is_css_property;
use crate::recipe::{Recipe, RecipeConfig, SlotRecipe, SlotRecipeConfig};
use crate::serialize::{serialize, StyleEntry, CSS_KEY};
use crate::tokens::{TokenDictionary, BASE_SCOPE};
use crate::utility::{Utility, UtilityConfig, ValueSource};
use crate::value::{declaration, deep_merge, value_key, StyleObject};

/// Cascade layer that composition styles are emitted into.
pub const COMPOSITION_LAYER: &str = "@layer compositions";

/// The resolution engine.
#[derive(Debug)]
pub struct SystemContext {
    tokens: Arc<TokenDictionary>,
    conditions: Conditions,
    utility: Utility,
    css_vars_root: String,
    global_css: StyleObject,
    keyframes: StyleObject,
    recipes: IndexMap<String, RecipeConfig>,
    slot_recipes: IndexMap<String, SlotRecipeConfig>,
}

impl SystemContext {
    /// Builds a system from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::TokenCycle`](crate::SystemError::TokenCycle) or
    /// [`SystemError::InvalidToken`](crate::SystemError::InvalidToken) for bad
    /// tokens and
    /// [`SystemError::InvalidBreakpoints`](crate::SystemError::InvalidBreakpoints)
    /// for unordered breakpoints.
    pub fn new(config: SystemConfig) -> Result<Self> {
        let css_vars_root = config.css_vars_root().to_string();
        let prefix = config.css_vars_prefix().to_string();
        let SystemConfig {
            theme,
            conditions,
            utilities,
            global_css,
            ..
        } = config;

        let tokens = Arc::new(TokenDictionary::new(
            &theme.tokens,
            &theme.semantic_tokens,
            &prefix,
        )?);
        let breakpoints = Breakpoints::new(&theme.breakpoints)?;
        let conditions = Conditions::new(&conditions, breakpoints.clone());
        let utility = Utility::new(utilities, Arc::clone(&tokens), breakpoints);

        let mut system = Self {
            tokens,
            conditions,
            utility,
            css_vars_root,
            global_css,
            keyframes: theme.keyframes,
            recipes: theme.recipes,
            slot_recipes: theme.slot_recipes,
        };

        system.assign_composition("textStyle", &theme.text_styles);
        system.assign_composition("layerStyle", &theme.layer_styles);

        log::debug!(
            "system built: {} tokens, {} conditions, {} utilities, {} recipes, {} slot recipes",
            system.tokens.len(),
            system.conditions.len(),
            system.utility.len(),
            system.recipes.len(),
            system.slot_recipes.len()
        );

        Ok(system)
    }

    /// Registers a composition utility whose values are precompiled styles.
    fn assign_composition(&mut self, property: &str, styles: &StyleObject) {
        let flat = flatten_compositions(styles);
        if flat.is_empty() {
            return;
        }

        let css = self.css_fn();
        let compiled: IndexMap<String, StyleObject> = flat
            .into_iter()
            .map(|(name, style)| {
                let layered = declaration(COMPOSITION_LAYER, Value::Object(css.css(&style)));
                (name, layered)
            })
            .collect();

        let names: Vec<String> = compiled.keys().cloned().collect();
        self.utility.register(
            property,
            UtilityConfig::new()
                .values(ValueSource::List(names))
                .transform(move |value, _| {
                    value_key(value)
                        .and_then(|name| compiled.get(&name).cloned())
                        .unwrap_or_default()
                }),
        );
    }

    pub fn tokens(&self) -> &TokenDictionary {
        &self.tokens
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    pub fn utility(&self) -> &Utility {
        &self.utility
    }

    pub fn css_vars_root(&self) -> &str {
        &self.css_vars_root
    }

    /// The CSS function bound to this system's registries.
    pub fn css_fn(&self) -> Css<'_> {
        Css::new(&self.utility, &self.conditions)
    }

    /// Resolves a style specification.
    pub fn css(&self, spec: &StyleObject) -> StyleObject {
        self.css_fn().css(spec)
    }

    /// Deep merges several specifications, later ones winning, then resolves.
    pub fn css_many<'s, I>(&self, specs: I) -> StyleObject
    where
        I: IntoIterator<Item = &'s StyleObject>,
    {
        self.css_fn().css_many(specs)
    }

    /// Flattens a specification without resolving it.
    pub fn serialize(&self, spec: &StyleObject) -> Vec<StyleEntry> {
        serialize(spec, &self.conditions)
    }

    /// Creates a recipe.
    pub fn cva(&self, config: RecipeConfig) -> Recipe<'_> {
        Recipe::new(config, self.css_fn())
    }

    /// Creates a slot recipe.
    pub fn sva(&self, config: SlotRecipeConfig) -> SlotRecipe<'_> {
        SlotRecipe::new(config, self.css_fn())
    }

    /// A recipe from the theme.
    pub fn recipe(&self, name: &str) -> Option<Recipe<'_>> {
        self.recipes.get(name).map(|config| self.cva(config.clone()))
    }

    /// A slot recipe from the theme.
    pub fn slot_recipe(&self, name: &str) -> Option<SlotRecipe<'_>> {
        self.slot_recipes
            .get(name)
            .map(|config| self.sva(config.clone()))
    }

    /// Names of theme recipes, then theme slot recipes.
    pub fn recipe_names(&self) -> impl Iterator<Item = &str> {
        self.recipes
            .keys()
            .chain(self.slot_recipes.keys())
            .map(String::as_str)
    }

    /// Adds or replaces a utility after construction.
    pub fn register_utility(&mut self, property: impl Into<String>, config: UtilityConfig) {
        self.utility.register(property, config);
    }

    /// Style object declaring every token variable.
    ///
    /// Base-scope variables go under the root selector. Variables scoped to
    /// a selector condition go under that condition's selector. For an
    /// at-rule condition the root selector is nested inside the at-rule.
    pub fn get_token_css(&self) -> StyleObject {
        let mut result = StyleObject::new();

        for (scope, declarations) in self.tokens.css_var_map() {
            if declarations.is_empty() {
                continue;
            }
            let vars: StyleObject = declarations
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect();

            let spec = if scope == BASE_SCOPE {
                declaration(self.css_vars_root.as_str(), vars)
            } else {
                match self.conditions.condition(scope).kind {
                    ConditionKind::AtRule => declaration(
                        scope.as_str(),
                        declaration(self.css_vars_root.as_str(), vars),
                    ),
                    ConditionKind::Selector => declaration(scope.as_str(), vars),
                }
            };

            deep_merge(&mut result, &self.css(&spec));
        }

        result
    }

    /// Style object with `@keyframes` rules followed by the resolved global CSS.
    pub fn get_global_css(&self) -> StyleObject {
        let mut result: StyleObject = self
            .keyframes
            .iter()
            .map(|(name, frames)| (format!("@keyframes {}", name), frames.clone()))
            .collect();
        for (key, value) in self.css(&self.global_css) {
            result.insert(key, value);
        }
        result
    }

    /// True for names a style specification understands: `css`, utilities,
    /// shorthands, conditions and CSS properties.
    pub fn is_valid_property(&self, name: &str) -> bool {
        name == CSS_KEY
            || self.utility.has(name)
            || self.conditions.has(name)
            || is_css_property(name)
    }

    /// Splits props into `(style props, everything else)`.
    pub fn split_css_props(&self, props: &StyleObject) -> (StyleObject, StyleObject) {
        let mut styles = StyleObject::new();
        let mut rest = StyleObject::new();
        for (key, value) in props {
            if self.is_valid_property(key) {
                styles.insert(key.clone(), value.clone());
            } else {
                rest.insert(key.clone(), value.clone());
            }
        }
        (styles, rest)
    }
}

/// Flattens nested text/layer style groups into dotted names.
///
/// A leaf is an object with an object `value`.
fn flatten_compositions(styles: &StyleObject) -> IndexMap<String, StyleObject> {
    fn walk(group: &StyleObject, path: &mut Vec<String>, out: &mut IndexMap<String, StyleObject>) {
        for (key, value) in group {
            let Value::Object(inner) = value else {
                continue;
            };
            path.push(key.clone());
            match inner.get("value") {
                Some(Value::Object(style)) => {
                    out.insert(path.join("."), style.clone());
                }
                _ => walk(inner, path, out),
            }
            path.pop();
        }
    }

    let mut out = IndexMap::new();
    walk(styles, &mut Vec::new(), &mut out);
    out
}
