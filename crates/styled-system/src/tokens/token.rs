//! The token value type.

use serde::Serialize;

/// A named, path-addressed design value.
///
/// Identity is the full dotted path (`colors.red.500`). The first path
/// segment is the token's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Full dotted name, `colors.red.500`.
    pub name: String,
    /// Path segments, `["colors", "red", "500"]`.
    pub path: Vec<String>,
    /// Resolved literal value with every reference substituted.
    pub value: String,
    /// The value as written, before reference substitution.
    pub original: String,
    /// Category, the first path segment.
    pub category: String,
    /// CSS custom property name, `--chakra-colors-red-500`.
    pub var_name: String,
    /// Reference form of the custom property, `var(--chakra-colors-red-500)`.
    pub var_ref: String,
    /// Whether the token came from the semantic token set.
    pub semantic: bool,
    /// Declaration values per condition scope (`"base"`, `"_dark"`, ...).
    ///
    /// References in these values are replaced by the referenced token's
    /// `var(...)`, not its literal, so that re-declaring a variable under a
    /// condition re-themes every consumer.
    pub scopes: Vec<(String, String)>,
}

impl Token {
    /// Returns the token key within its category (`red.500`).
    pub fn key(&self) -> String {
        self.path[1..].join(".")
    }

    /// Returns true when the token declares a value outside the base scope.
    pub fn is_conditional(&self) -> bool {
        self.scopes.iter().any(|(scope, _)| scope != "base")
    }
}
