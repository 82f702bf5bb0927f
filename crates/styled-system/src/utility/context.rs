//! What a transform can see besides the value.

use serde_json::Value;

use crate::conditions::Breakpoints;
use crate::tokens::{ColorMix, Token, TokenDictionary};

/// Lookup helpers passed to every [`TransformFn`](super::TransformFn).
pub struct TransformContext<'a> {
    /// The canonical property being resolved.
    pub property: &'a str,
    /// The value as the author wrote it, before value-map lookup.
    pub raw: &'a Value,
    tokens: &'a TokenDictionary,
    breakpoints: &'a Breakpoints,
}

impl<'a> TransformContext<'a> {
    pub(crate) fn new(
        property: &'a str,
        raw: &'a Value,
        tokens: &'a TokenDictionary,
        breakpoints: &'a Breakpoints,
    ) -> Self {
        Self {
            property,
            raw,
            tokens,
            breakpoints,
        }
    }

    /// The token's `var(...)` reference, or `path` itself if it is not a token.
    pub fn token(&self, path: &str) -> String {
        self.tokens.get_var(path, path)
    }

    /// The token's `var(...)` reference, or `fallback`.
    pub fn token_or(&self, path: &str, fallback: &str) -> String {
        self.tokens.get_var(path, fallback)
    }

    /// The token itself, for transforms that need the literal value.
    pub fn token_raw(&self, path: &str) -> Option<&'a Token> {
        self.tokens.get_by_name(path)
    }

    pub fn color_mix(&self, value: &str) -> ColorMix {
        self.tokens.color_mix(value)
    }

    pub fn breakpoints(&self) -> &'a Breakpoints {
        self.breakpoints
    }
}
