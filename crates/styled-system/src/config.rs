//! System configuration.
//!
//! A [`SystemConfig`] is everything a [`SystemContext`](crate::SystemContext)
//! is built from. It deserializes from YAML or JSON with camelCase keys:
//!
//! ```yaml
//! cssVarsPrefix: acme
//! conditions:
//!   hover: "&:hover"
//! theme:
//!   breakpoints: { sm: 480px, md: 768px }
//!   tokens:
//!     colors:
//!       brand: { value: "#0af" }
//! globalCss:
//!   body: { color: brand }
//! ```
//!
//! Utility transforms are code, so a config file can only contribute values
//! and shorthands. Load a file, then [`merge`](SystemConfig::merge) it onto a
//! preset that carries the transforms.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, SystemError};
use crate::recipe::{RecipeConfig, SlotRecipeConfig};
use crate::utility::UtilityConfig;
use crate::value::{deep_merge, parse_length, StyleObject};

/// Default selector for root token variables.
pub const DEFAULT_CSS_VARS_ROOT: &str = ":where(:root, :host)";

/// Default custom-property prefix.
pub const DEFAULT_CSS_VARS_PREFIX: &str = "chakra";

/// Theme section of the configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub tokens: StyleObject,
    pub semantic_tokens: StyleObject,
    pub breakpoints: IndexMap<String, String>,
    pub text_styles: StyleObject,
    pub layer_styles: StyleObject,
    pub keyframes: StyleObject,
    pub recipes: IndexMap<String, RecipeConfig>,
    pub slot_recipes: IndexMap<String, SlotRecipeConfig>,
}

/// Full system configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SystemConfig {
    pub theme: ThemeConfig,
    /// Condition name (without `_`) to selector or at-rule.
    pub conditions: IndexMap<String, String>,
    pub utilities: IndexMap<String, UtilityConfig>,
    pub global_css: StyleObject,
    pub css_vars_root: Option<String>,
    pub css_vars_prefix: Option<String>,
}

impl SystemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML config.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::Parse`] on malformed input.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| SystemError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Parses a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::Parse`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SystemError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Loads a config file, choosing the parser by extension.
    ///
    /// `.yaml` and `.yml` are YAML, `.json` is JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::Io`] if the file cannot be read,
    /// [`SystemError::Config`] for an unknown extension, and
    /// [`SystemError::Parse`] (with the path) on malformed content.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SystemError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parsed = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            _ => {
                return Err(SystemError::Config {
                    message: format!(
                        "unsupported config file '{}', expected .yaml, .yml or .json",
                        path.display()
                    ),
                })
            }
        };

        parsed.map_err(|e| match e {
            SystemError::Parse { message, .. } => SystemError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Selector that receives base-scope token variables.
    pub fn css_vars_root(&self) -> &str {
        self.css_vars_root
            .as_deref()
            .unwrap_or(DEFAULT_CSS_VARS_ROOT)
    }

    pub fn css_vars_prefix(&self) -> &str {
        self.css_vars_prefix
            .as_deref()
            .unwrap_or(DEFAULT_CSS_VARS_PREFIX)
    }

    /// Layers `other` on top of this config.
    ///
    /// Style objects are deep merged, named entries (conditions,
    /// breakpoints, recipes) are replaced or appended, and a utility from
    /// `other` keeps whatever parts it leaves unset from the existing
    /// definition.
    pub fn merge(mut self, other: SystemConfig) -> SystemConfig {
        let theme = &mut self.theme;
        deep_merge(&mut theme.tokens, &other.theme.tokens);
        deep_merge(&mut theme.semantic_tokens, &other.theme.semantic_tokens);
        if !other.theme.breakpoints.is_empty() {
            theme.breakpoints.extend(other.theme.breakpoints);
            sort_breakpoints(&mut theme.breakpoints);
        }
        deep_merge(&mut theme.text_styles, &other.theme.text_styles);
        deep_merge(&mut theme.layer_styles, &other.theme.layer_styles);
        deep_merge(&mut theme.keyframes, &other.theme.keyframes);
        for (name, recipe) in other.theme.recipes {
            let merged = match theme.recipes.get(&name) {
                Some(existing) => existing.merge(&recipe),
                None => recipe,
            };
            theme.recipes.insert(name, merged);
        }
        for (name, recipe) in other.theme.slot_recipes {
            let merged = match theme.slot_recipes.get(&name) {
                Some(existing) => existing.merge(&recipe),
                None => recipe,
            };
            theme.slot_recipes.insert(name, merged);
        }

        self.conditions.extend(other.conditions);
        for (property, utility) in other.utilities {
            let merged = match self.utilities.get(&property) {
                Some(existing) => utility.or(existing),
                None => utility,
            };
            self.utilities.insert(property, merged);
        }
        deep_merge(&mut self.global_css, &other.global_css);

        if other.css_vars_root.is_some() {
            self.css_vars_root = other.css_vars_root;
        }
        if other.css_vars_prefix.is_some() {
            self.css_vars_prefix = other.css_vars_prefix;
        }
        self
    }

    /// Adds or replaces a condition.
    pub fn condition(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.conditions.insert(name.into(), raw.into());
        self
    }

    /// Adds or replaces a utility definition.
    pub fn utility(mut self, property: impl Into<String>, config: UtilityConfig) -> Self {
        self.utilities.insert(property.into(), config);
        self
    }

    pub fn breakpoint(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.theme.breakpoints.insert(name.into(), value.into());
        self
    }
}

/// Orders merged breakpoints by length. Left as is when any value fails to
/// parse, so validation reports the bad entry.
fn sort_breakpoints(breakpoints: &mut IndexMap<String, String>) {
    let lengths: Option<Vec<f64>> = breakpoints
        .values()
        .map(|raw| parse_length(raw.trim()).map(|(value, _)| value))
        .collect();
    if lengths.is_none() {
        return;
    }
    breakpoints.sort_by(|_, a, _, b| {
        let a = parse_length(a.trim()).map_or(0.0, |(value, _)| value);
        let b = parse_length(b.trim()).map_or(0.0, |(value, _)| value);
        a.total_cmp(&b)
    });
}
