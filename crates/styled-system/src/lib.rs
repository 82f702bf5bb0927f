//! # Styled System - Token-Based Style Resolution
//!
//! `styled-system` turns declarative style specifications into concrete CSS
//! style objects. A specification is a nested map of style properties,
//! conditions (hover, dark mode, breakpoints) and values that may reference
//! design tokens; the result is a map of CSS declarations grouped under
//! selectors and at-rules.
//!
//! The crate is the engine only. Component libraries build on it; a preset
//! with the usual conditions and utilities lives in `styled-system-preset`.
//!
//! ## Core Concepts
//!
//! - [`TokenDictionary`]: design tokens flattened to paths with CSS variables
//! - [`Breakpoints`] and [`Conditions`]: named selectors and media queries
//! - [`Utility`]: the property registry with shorthands, value maps and transforms
//! - [`serialize`]: flattens a nested specification to entries
//! - [`Css`]: resolves a specification to a style object
//! - [`Recipe`] and [`SlotRecipe`]: variant-driven styles
//! - [`SystemContext`]: everything wired together from a [`SystemConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use styled_system::{into_object, SystemConfig, SystemContext, UtilityConfig};
//!
//! let config = SystemConfig::from_yaml(r##"
//! conditions:
//!   hover: "&:is(:hover, [data-hover])"
//! theme:
//!   breakpoints: { sm: 480px, md: 768px }
//!   tokens:
//!     colors:
//!       red:
//!         "500": { value: "#E53E3E" }
//! "##)
//! .unwrap()
//! .utility("background", UtilityConfig::new().category("colors").shorthand(["bg"]));
//!
//! let system = SystemContext::new(config).unwrap();
//! let style = system.css(&into_object(json!({
//!     "bg": ["red.500", null, "white"],
//!     "_hover": { "bg": "red.500" }
//! })));
//!
//! assert_eq!(
//!     serde_json::Value::Object(style),
//!     json!({
//!         "background": "var(--chakra-colors-red-500)",
//!         "@media screen and (min-width: 768px)": { "background": "white" },
//!         "&:is(:hover, [data-hover])": { "background": "var(--chakra-colors-red-500)" }
//!     })
//! );
//! ```
//!
//! ## Recipes
//!
//! ```rust
//! use serde_json::json;
//! use styled_system::{into_object, RecipeConfig, SystemConfig, SystemContext};
//!
//! let system = SystemContext::new(SystemConfig::new()).unwrap();
//! let button: RecipeConfig = serde_json::from_value(json!({
//!     "base": { "display": "inline-flex" },
//!     "variants": { "size": { "sm": { "padding": "4px" }, "lg": { "padding": "8px" } } },
//!     "defaultVariants": { "size": "sm" }
//! }))
//! .unwrap();
//!
//! let recipe = system.cva(button);
//! let style = recipe.resolve(&into_object(json!({ "size": "lg" })));
//! assert_eq!(style["padding"], json!("8px"));
//! ```
//!
//! ## Emitting CSS
//!
//! Style objects are plain data. [`to_css_string`] renders one as a
//! stylesheet, and [`SystemContext::get_token_css`] /
//! [`SystemContext::get_global_css`] produce the stylesheet-level artifacts.

pub mod conditions;
mod config;
mod css;
mod error;
mod properties;
pub mod recipe;
mod serialize;
mod stringify;
mod system;
pub mod tokens;
pub mod utility;
mod value;

// Error type
pub use error::{Result, SystemError};

// Values
pub use value::{
    classify, dash_case, deep_merge, declaration, format_number, hyphenate, into_object,
    is_css_var, parse_length, value_key, value_to_css, StyleObject, ValueKind,
};

// Tokens
pub use tokens::{color_mix, css_var_name, ColorMix, Token, TokenDictionary, BASE_SCOPE};

// Conditions
pub use conditions::{
    compose_selector, is_raw_condition, Breakpoint, Breakpoints, Condition, ConditionKind,
    Conditions, BASE_BREAKPOINT,
};

// Utilities
pub use utility::{TransformContext, Utility, UtilityConfig, ValueSource, COLOR_PALETTE};

// Resolution
pub use css::Css;
pub use properties::is_css_property;
pub use serialize::{serialize, StyleEntry, BASE_KEY, CSS_KEY};
pub use stringify::to_css_string;

// Recipes
pub use recipe::{
    CompoundVariant, Recipe, RecipeConfig, Selection, SlotRecipe, SlotRecipeConfig, VariantMap,
};

// System
pub use config::{SystemConfig, ThemeConfig, DEFAULT_CSS_VARS_PREFIX, DEFAULT_CSS_VARS_ROOT};
pub use system::{SystemContext, COMPOSITION_LAYER};
