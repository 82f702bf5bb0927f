//! # Styled System Preset - The Base Theme
//!
//! The conditions, utilities, tokens and recipes most systems start from.
//! Layer a project config on top with [`SystemConfig::merge`]:
//!
//! ```rust
//! use serde_json::json;
//! use styled_system::{into_object, SystemConfig, SystemContext};
//!
//! let user = SystemConfig::from_yaml(r##"
//! theme:
//!   tokens:
//!     colors:
//!       brand: { value: "#0af" }
//! "##).unwrap();
//!
//! let system = SystemContext::new(styled_system_preset::preset().unwrap().merge(user)).unwrap();
//! let style = system.css(&into_object(json!({ "bg": "brand", "px": "4", "truncated": true })));
//!
//! assert_eq!(style["background"], json!("var(--chakra-colors-brand)"));
//! assert_eq!(style["paddingInline"], json!("var(--chakra-spacing-4)"));
//! assert_eq!(style["whiteSpace"], json!("nowrap"));
//! ```
//!
//! The theme data ships as YAML inside the crate; the conditions and
//! utilities are code because utility transforms are functions.

mod conditions;
mod utilities;

pub use conditions::{conditions, CONDITIONS};
pub use utilities::utilities;

use styled_system::{Result, SystemConfig};

const COLORS: &str = include_str!("../theme/colors.yaml");
const TOKENS: &str = include_str!("../theme/tokens.yaml");
const RECIPES: &str = include_str!("../theme/recipes.yaml");

/// The theme data alone: tokens, breakpoints, styles, keyframes, recipes
/// and global CSS.
///
/// # Errors
///
/// Returns [`SystemError::Parse`](styled_system::SystemError::Parse) if the
/// bundled theme data is malformed.
pub fn theme() -> Result<SystemConfig> {
    let mut config = SystemConfig::new();
    for source in [COLORS, TOKENS, RECIPES] {
        config = config.merge(SystemConfig::from_yaml(source)?);
    }
    Ok(config)
}

/// The full base preset.
///
/// # Errors
///
/// Same as [`theme`].
pub fn preset() -> Result<SystemConfig> {
    let mut config = theme()?;
    config.conditions = conditions();
    config.utilities = utilities();
    Ok(config)
}
