//! Design tokens: flattening, reference resolution and CSS variables.
//!
//! A token is a named, path-addressed design value. The dictionary flattens
//! nested `tokens` and `semanticTokens` definitions into a lookup from dotted
//! path to [`Token`], assigns each token a CSS custom property derived from
//! its path, and groups the resulting declarations by condition scope.
//!
//! Consumers reference tokens through their `var(...)` form rather than the
//! literal value. That indirection is what lets a condition (dark mode, a
//! color palette) re-declare a variable and re-theme everything below it.
//!
//! - [`TokenDictionary`]: construction and lookups
//! - [`Token`]: a single resolved token
//! - [`color_mix`]: `color/opacity` values

mod color_mix;
mod dictionary;
mod token;

pub use color_mix::{color_mix, ColorMix};
pub use dictionary::{css_var_name, Declarations, TokenDictionary, ValueMap, BASE_SCOPE};
pub use token::Token;
