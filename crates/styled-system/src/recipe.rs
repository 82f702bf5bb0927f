//! Recipes: variant selections to style objects.
//!
//! A recipe names a set of variant axes, each mapping a value to a style
//! fragment:
//!
//! ```yaml
//! base: { display: inline-flex }
//! variants:
//!   size:
//!     sm: { px: 2 }
//!     lg: { px: 6 }
//!   variant:
//!     solid: { bg: blue.500 }
//!     outline: { borderWidth: 1px }
//! compoundVariants:
//!   - { size: lg, variant: outline, css: { borderWidth: 2px } }
//! defaultVariants:
//!   size: sm
//! ```
//!
//! Resolving a selection deep merges `base`, then the selected fragment of
//! each axis in axis declaration order, then every matching compound variant
//! in list order. The merged specification goes through the CSS function.
//!
//! A [`SlotRecipe`] does the same once per named slot, sharing one
//! selection across all slots.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::css::Css;
use crate::value::{deep_merge, value_key, StyleObject};

/// Axis name to selected value.
pub type Selection = IndexMap<String, String>;

/// Axis name to the values it accepts, in declaration order.
pub type VariantMap = IndexMap<String, Vec<String>>;

/// A compound variant: a predicate over axes and the styles it adds.
///
/// A predicate value may be a list, which matches any of its members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant<T> {
    #[serde(flatten)]
    pub when: StyleObject,
    #[serde(default)]
    pub css: T,
}

impl<T> CompoundVariant<T> {
    fn matches(&self, selection: &Selection) -> bool {
        self.when.iter().all(|(axis, expected)| {
            let Some(actual) = selection.get(axis) else {
                return false;
            };
            match expected {
                Value::Array(options) => options
                    .iter()
                    .any(|option| value_key(option).as_deref() == Some(actual.as_str())),
                other => value_key(other).as_deref() == Some(actual.as_str()),
            }
        })
    }
}

/// Configuration of a single-part recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeConfig {
    pub base: StyleObject,
    pub variants: IndexMap<String, IndexMap<String, StyleObject>>,
    pub compound_variants: Vec<CompoundVariant<StyleObject>>,
    pub default_variants: StyleObject,
}

impl RecipeConfig {
    /// Deep merges `other` on top of this config.
    ///
    /// Compound variants are concatenated.
    pub fn merge(&self, other: &RecipeConfig) -> RecipeConfig {
        let mut merged = self.clone();
        deep_merge(&mut merged.base, &other.base);
        for (axis, values) in &other.variants {
            let target = merged.variants.entry(axis.clone()).or_default();
            for (value, fragment) in values {
                deep_merge(target.entry(value.clone()).or_default(), fragment);
            }
        }
        merged
            .compound_variants
            .extend(other.compound_variants.iter().cloned());
        deep_merge(&mut merged.default_variants, &other.default_variants);
        merged
    }
}

/// Configuration of a multi-part recipe. Fragments are keyed by slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlotRecipeConfig {
    pub slots: Vec<String>,
    pub base: IndexMap<String, StyleObject>,
    pub variants: IndexMap<String, IndexMap<String, IndexMap<String, StyleObject>>>,
    pub compound_variants: Vec<CompoundVariant<IndexMap<String, StyleObject>>>,
    pub default_variants: StyleObject,
}

impl SlotRecipeConfig {
    /// Projects the config onto one slot.
    pub fn slot(&self, slot: &str) -> RecipeConfig {
        RecipeConfig {
            base: self.base.get(slot).cloned().unwrap_or_default(),
            variants: self
                .variants
                .iter()
                .map(|(axis, values)| {
                    let values = values
                        .iter()
                        .map(|(value, slots)| {
                            (value.clone(), slots.get(slot).cloned().unwrap_or_default())
                        })
                        .collect();
                    (axis.clone(), values)
                })
                .collect(),
            compound_variants: self
                .compound_variants
                .iter()
                .map(|compound| CompoundVariant {
                    when: compound.when.clone(),
                    css: compound.css.get(slot).cloned().unwrap_or_default(),
                })
                .collect(),
            default_variants: self.default_variants.clone(),
        }
    }

    /// Deep merges `other` on top of this config; slots are unioned.
    pub fn merge(&self, other: &SlotRecipeConfig) -> SlotRecipeConfig {
        let mut merged = self.clone();
        for slot in &other.slots {
            if !merged.slots.contains(slot) {
                merged.slots.push(slot.clone());
            }
        }
        for (slot, fragment) in &other.base {
            deep_merge(merged.base.entry(slot.clone()).or_default(), fragment);
        }
        for (axis, values) in &other.variants {
            let target = merged.variants.entry(axis.clone()).or_default();
            for (value, slots) in values {
                let target = target.entry(value.clone()).or_default();
                for (slot, fragment) in slots {
                    deep_merge(target.entry(slot.clone()).or_default(), fragment);
                }
            }
        }
        merged
            .compound_variants
            .extend(other.compound_variants.iter().cloned());
        deep_merge(&mut merged.default_variants, &other.default_variants);
        merged
    }
}

/// A resolvable single-part recipe.
#[derive(Debug, Clone)]
pub struct Recipe<'a> {
    config: RecipeConfig,
    css: Css<'a>,
}

impl<'a> Recipe<'a> {
    pub fn new(config: RecipeConfig, css: Css<'a>) -> Self {
        warn_dangling_axes(
            config.variants.keys(),
            config.compound_variants.iter().map(|c| &c.when),
        );
        Self { config, css }
    }

    pub fn config(&self) -> &RecipeConfig {
        &self.config
    }

    /// Axis names in declaration order.
    pub fn variant_keys(&self) -> Vec<&str> {
        self.config.variants.keys().map(String::as_str).collect()
    }

    pub fn variant_map(&self) -> VariantMap {
        variant_map(&self.config.variants)
    }

    /// Default variants overlaid with the props that name an axis.
    pub fn selection(&self, props: &StyleObject) -> Selection {
        selection(&self.config.variants, &self.config.default_variants, props)
    }

    /// Merges base, axis and compound fragments for a selection.
    pub fn raw(&self, selection: &Selection) -> StyleObject {
        let mut spec = StyleObject::new();
        self.css.layer(&mut spec, &self.config.base);
        for (axis, values) in &self.config.variants {
            let fragment = selection.get(axis).and_then(|value| values.get(value));
            if let Some(fragment) = fragment {
                self.css.layer(&mut spec, fragment);
            }
        }
        for compound in &self.config.compound_variants {
            if compound.matches(selection) {
                self.css.layer(&mut spec, &compound.css);
            }
        }
        spec
    }

    /// Resolves props into a style object.
    pub fn resolve(&self, props: &StyleObject) -> StyleObject {
        self.css.css(&self.raw(&self.selection(props)))
    }

    /// Splits props into `(variant props, everything else)`.
    pub fn split_variant_props(&self, props: &StyleObject) -> (StyleObject, StyleObject) {
        split_props(&self.config.variants, props)
    }

    /// A recipe with `other` deep merged on top of this one.
    pub fn merge(&self, other: &RecipeConfig) -> Recipe<'a> {
        Recipe::new(self.config.merge(other), self.css)
    }
}

/// A resolvable multi-part recipe.
#[derive(Debug, Clone)]
pub struct SlotRecipe<'a> {
    config: SlotRecipeConfig,
    css: Css<'a>,
}

impl<'a> SlotRecipe<'a> {
    pub fn new(config: SlotRecipeConfig, css: Css<'a>) -> Self {
        warn_dangling_axes(
            config.variants.keys(),
            config.compound_variants.iter().map(|c| &c.when),
        );
        Self { config, css }
    }

    pub fn config(&self) -> &SlotRecipeConfig {
        &self.config
    }

    pub fn slots(&self) -> &[String] {
        &self.config.slots
    }

    pub fn variant_keys(&self) -> Vec<&str> {
        self.config.variants.keys().map(String::as_str).collect()
    }

    pub fn variant_map(&self) -> VariantMap {
        variant_map(&self.config.variants)
    }

    pub fn selection(&self, props: &StyleObject) -> Selection {
        selection(&self.config.variants, &self.config.default_variants, props)
    }

    /// Per-slot merged specifications, in slot order.
    pub fn raw(&self, selection: &Selection) -> IndexMap<String, StyleObject> {
        self.config
            .slots
            .iter()
            .map(|slot| {
                let recipe = Recipe {
                    config: self.config.slot(slot),
                    css: self.css,
                };
                (slot.clone(), recipe.raw(selection))
            })
            .collect()
    }

    /// Resolves props into one style object per slot.
    pub fn resolve(&self, props: &StyleObject) -> IndexMap<String, StyleObject> {
        let selection = self.selection(props);
        self.raw(&selection)
            .into_iter()
            .map(|(slot, spec)| (slot, self.css.css(&spec)))
            .collect()
    }

    pub fn split_variant_props(&self, props: &StyleObject) -> (StyleObject, StyleObject) {
        split_props(&self.config.variants, props)
    }

    pub fn merge(&self, other: &SlotRecipeConfig) -> SlotRecipe<'a> {
        SlotRecipe::new(self.config.merge(other), self.css)
    }
}

fn variant_map<V>(variants: &IndexMap<String, IndexMap<String, V>>) -> VariantMap {
    variants
        .iter()
        .map(|(axis, values)| (axis.clone(), values.keys().cloned().collect()))
        .collect()
}

fn selection<V>(
    variants: &IndexMap<String, V>,
    defaults: &StyleObject,
    props: &StyleObject,
) -> Selection {
    let mut selection = Selection::new();
    for axis in variants.keys() {
        let chosen = props
            .get(axis)
            .filter(|value| !value.is_null())
            .or_else(|| defaults.get(axis))
            .and_then(value_key);
        if let Some(value) = chosen {
            selection.insert(axis.clone(), value);
        }
    }
    selection
}

fn split_props<V>(variants: &IndexMap<String, V>, props: &StyleObject) -> (StyleObject, StyleObject) {
    let mut variant_props = StyleObject::new();
    let mut rest = StyleObject::new();
    for (key, value) in props {
        if variants.contains_key(key) {
            variant_props.insert(key.clone(), value.clone());
        } else {
            rest.insert(key.clone(), value.clone());
        }
    }
    (variant_props, rest)
}

fn warn_dangling_axes<'c>(
    axes: impl Iterator<Item = &'c String> + Clone,
    predicates: impl Iterator<Item = &'c StyleObject>,
) {
    for predicate in predicates {
        for axis in predicate.keys() {
            if !axes.clone().any(|known| known == axis) {
                log::warn!("compound variant references unknown axis '{}'", axis);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{Breakpoints, Conditions};
    use crate::tokens::TokenDictionary;
    use crate::utility::{Utility, UtilityConfig};
    use crate::value::into_object;
    use serde_json::json;
    use std::sync::Arc;

    fn registries() -> (Utility, Conditions) {
        let mut config = IndexMap::new();
        config.insert(
            "paddingInline".to_string(),
            UtilityConfig::new().shorthand(["px"]),
        );
        let utility = Utility::new(
            config,
            Arc::new(TokenDictionary::default()),
            Breakpoints::default(),
        );
        (utility, Conditions::default())
    }

    fn button() -> RecipeConfig {
        serde_json::from_value(json!({
            "base": { "display": "inline-flex", "px": "1" },
            "variants": {
                "size": {
                    "sm": { "px": "2", "fontSize": "sm" },
                    "md": { "px": "4" },
                    "lg": { "px": "6", "fontSize": "lg" }
                },
                "variant": {
                    "solid": { "bg": "blue" },
                    "outline": { "borderWidth": "1px", "fontSize": "md" }
                }
            },
            "compoundVariants": [
                { "size": "lg", "variant": "outline", "css": { "borderWidth": "2px" } },
                { "size": ["sm", "md"], "css": { "letterSpacing": "wide" } }
            ],
            "defaultVariants": { "size": "md", "variant": "solid" }
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_apply() {
        let (u, c) = registries();
        let recipe = Recipe::new(button(), Css::new(&u, &c));
        assert_eq!(
            Value::Object(recipe.resolve(&StyleObject::new())),
            json!({
                "display": "inline-flex",
                "paddingInline": "4",
                "bg": "blue",
                "letterSpacing": "wide"
            })
        );
    }

    #[test]
    fn test_compound_variant_layers_after_axes() {
        let (u, c) = registries();
        let recipe = Recipe::new(button(), Css::new(&u, &c));
        let props = into_object(json!({ "size": "lg", "variant": "outline" }));
        assert_eq!(
            Value::Object(recipe.raw(&recipe.selection(&props))),
            json!({
                "display": "inline-flex",
                "paddingInline": "6",
                "fontSize": "md",
                "borderWidth": "2px"
            })
        );
    }

    #[test]
    fn test_axes_layer_in_order_across_shorthands() {
        let (u, c) = registries();
        let config: RecipeConfig = serde_json::from_value(json!({
            "base": { "px": "1" },
            "variants": {
                "size": { "lg": { "paddingInline": "2" } },
                "variant": { "wide": { "px": "3" } }
            }
        }))
        .unwrap();
        let recipe = Recipe::new(config, Css::new(&u, &c));

        let props = into_object(json!({ "size": "lg", "variant": "wide" }));
        assert_eq!(
            Value::Object(recipe.resolve(&props)),
            json!({ "paddingInline": "3" })
        );
        let props = into_object(json!({ "size": "lg" }));
        assert_eq!(
            Value::Object(recipe.resolve(&props)),
            json!({ "paddingInline": "2" })
        );
    }

    #[test]
    fn test_null_props_fall_back_to_defaults() {
        let (u, c) = registries();
        let recipe = Recipe::new(button(), Css::new(&u, &c));
        let selection = recipe.selection(&into_object(json!({ "size": null, "other": 1 })));
        assert_eq!(selection.get("size").map(String::as_str), Some("md"));
        assert!(!selection.contains_key("other"));
    }

    #[test]
    fn test_boolean_axis_values() {
        let (u, c) = registries();
        let config: RecipeConfig = serde_json::from_value(json!({
            "variants": { "disabled": { "true": { "opacity": 0.5 } } }
        }))
        .unwrap();
        let recipe = Recipe::new(config, Css::new(&u, &c));
        assert_eq!(
            Value::Object(recipe.resolve(&into_object(json!({ "disabled": true })))),
            json!({ "opacity": 0.5 })
        );
        assert!(recipe.resolve(&into_object(json!({ "disabled": false }))).is_empty());
    }

    #[test]
    fn test_split_variant_props() {
        let (u, c) = registries();
        let recipe = Recipe::new(button(), Css::new(&u, &c));
        let (variants, rest) =
            recipe.split_variant_props(&into_object(json!({ "size": "sm", "onClick": "x" })));
        assert_eq!(Value::Object(variants), json!({ "size": "sm" }));
        assert_eq!(Value::Object(rest), json!({ "onClick": "x" }));
    }

    #[test]
    fn test_variant_map_and_keys() {
        let (u, c) = registries();
        let recipe = Recipe::new(button(), Css::new(&u, &c));
        assert_eq!(recipe.variant_keys(), vec!["size", "variant"]);
        assert_eq!(recipe.variant_map()["size"], vec!["sm", "md", "lg"]);
    }

    #[test]
    fn test_merge_extends_recipe() {
        let (u, c) = registries();
        let recipe = Recipe::new(button(), Css::new(&u, &c));
        let extension: RecipeConfig = serde_json::from_value(json!({
            "variants": { "size": { "xl": { "px": "8" } } },
            "defaultVariants": { "size": "xl" }
        }))
        .unwrap();
        let merged = recipe.merge(&extension);
        assert_eq!(merged.variant_map()["size"], vec!["sm", "md", "lg", "xl"]);
        assert_eq!(
            merged.resolve(&StyleObject::new())["paddingInline"],
            json!("8")
        );
    }

    #[test]
    fn test_slot_recipe_shares_selection() {
        let (u, c) = registries();
        let config: SlotRecipeConfig = serde_json::from_value(json!({
            "slots": ["root", "label"],
            "base": { "root": { "display": "flex" }, "label": { "fontWeight": "medium" } },
            "variants": {
                "size": {
                    "sm": { "root": { "gap": "1" }, "label": { "fontSize": "sm" } },
                    "lg": { "label": { "fontSize": "lg" } }
                }
            },
            "compoundVariants": [
                { "size": "lg", "css": { "root": { "gap": "3" } } }
            ],
            "defaultVariants": { "size": "sm" }
        }))
        .unwrap();
        let recipe = SlotRecipe::new(config, Css::new(&u, &c));

        let small = recipe.resolve(&StyleObject::new());
        assert_eq!(small.keys().collect::<Vec<_>>(), vec!["root", "label"]);
        assert_eq!(Value::Object(small["root"].clone()), json!({ "display": "flex", "gap": "1" }));
        assert_eq!(
            Value::Object(small["label"].clone()),
            json!({ "fontWeight": "medium", "fontSize": "sm" })
        );

        let large = recipe.resolve(&into_object(json!({ "size": "lg" })));
        assert_eq!(Value::Object(large["root"].clone()), json!({ "display": "flex", "gap": "3" }));
        assert_eq!(large["label"]["fontSize"], json!("lg"));
    }
}
