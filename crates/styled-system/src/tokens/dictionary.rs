//! Token dictionary construction and lookup.
//!
//! Token definitions are nested maps whose leaves are objects with a `value`
//! key. Flattening, reference resolution and CSS variable assignment all
//! happen once, in [`TokenDictionary::new`]; the dictionary is read-only
//! afterwards.
//!
//! # References
//!
//! A value may reference another token with `{path.to.token}`:
//!
//! ```yaml
//! colors:
//!   red:
//!     500: { value: "#E53E3E" }
//! semanticTokens:
//!   colors:
//!     danger:
//!       value:
//!         base: "{colors.red.500}"
//!         _dark: "{colors.red.300}"
//! ```
//!
//! The token's literal value substitutes the referenced literal. Its CSS
//! declaration substitutes the referenced `var(...)` instead, so the `_dark`
//! scope can re-declare `--chakra-colors-danger` without touching consumers.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use super::color_mix::{color_mix, ColorMix};
use super::token::Token;
use crate::error::{Result, SystemError};
use crate::value::{dash_case, StyleObject};

/// Scope name for declarations that belong on the variables root.
pub const BASE_SCOPE: &str = "base";

/// Token key (without category) to the token's `var(...)` reference.
pub type ValueMap = IndexMap<String, String>;

/// Ordered `(custom property, value)` declarations.
pub type Declarations = Vec<(String, String)>;

/// A flattened, resolved set of design tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenDictionary {
    prefix: String,
    tokens: IndexMap<String, Token>,
    categories: IndexMap<String, ValueMap>,
    css_vars: IndexMap<String, Declarations>,
    palettes: IndexMap<String, Declarations>,
}

struct RawToken {
    path: Vec<String>,
    semantic: bool,
    scopes: Vec<(String, String)>,
}

impl RawToken {
    fn base_text(&self) -> &str {
        self.scopes
            .iter()
            .find(|(scope, _)| scope == BASE_SCOPE)
            .or_else(|| self.scopes.first())
            .map(|(_, text)| text.as_str())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

impl TokenDictionary {
    /// Builds a dictionary from raw and semantic token definitions.
    ///
    /// Semantic tokens with the same path as a raw token replace it.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::TokenCycle`] if references form a cycle, and
    /// [`SystemError::InvalidToken`] for malformed definitions.
    pub fn new(tokens: &StyleObject, semantic_tokens: &StyleObject, prefix: &str) -> Result<Self> {
        let mut raw = IndexMap::new();
        collect(tokens, &mut Vec::new(), false, &mut raw)?;
        collect(semantic_tokens, &mut Vec::new(), true, &mut raw)?;

        let literals = resolve_literals(&raw)?;

        let var_refs: HashMap<&str, String> = raw
            .iter()
            .map(|(name, token)| (name.as_str(), css_var_ref(prefix, &token.path)))
            .collect();

        let mut dictionary = TokenDictionary {
            prefix: prefix.to_string(),
            ..Default::default()
        };
        dictionary
            .css_vars
            .insert(BASE_SCOPE.to_string(), Declarations::new());

        for (name, token) in &raw {
            let var_name = css_var_name(prefix, &token.path);
            let scopes: Vec<(String, String)> = token
                .scopes
                .iter()
                .map(|(scope, text)| {
                    let value = substitute(text, |reference| var_refs.get(reference).cloned());
                    (scope.clone(), value)
                })
                .collect();

            for (scope, value) in &scopes {
                dictionary
                    .css_vars
                    .entry(scope.clone())
                    .or_default()
                    .push((var_name.clone(), value.clone()));
            }

            let resolved = Token {
                name: name.clone(),
                path: token.path.clone(),
                value: literals.get(name).cloned().unwrap_or_default(),
                original: token.base_text().to_string(),
                category: token.path[0].clone(),
                var_ref: format!("var({})", var_name),
                var_name,
                semantic: token.semantic,
                scopes,
            };
            dictionary.insert(resolved);
        }

        dictionary.assign_palettes();

        log::debug!(
            "token dictionary built: {} tokens, {} categories, {} palettes",
            dictionary.tokens.len(),
            dictionary.categories.len(),
            dictionary.palettes.len()
        );

        Ok(dictionary)
    }

    fn insert(&mut self, token: Token) {
        self.categories
            .entry(token.category.clone())
            .or_default()
            .insert(token.key(), token.var_ref.clone());
        self.tokens.insert(token.name.clone(), token);
    }

    /// Derives color palettes from every `colors.*` token nested at least two
    /// levels deep, and registers the `colors.colorPalette.*` virtual tokens
    /// that palette selection re-points.
    fn assign_palettes(&mut self) {
        let mut virtual_tokens = Vec::new();

        for token in self.tokens.values() {
            if token.category != "colors" || token.path.len() < 3 || token.path[1] == "colorPalette"
            {
                continue;
            }
            for split in 2..token.path.len() {
                let palette = token.path[1..split].join(".");
                let mut virtual_path = vec!["colors".to_string(), "colorPalette".to_string()];
                virtual_path.extend(token.path[split..].iter().cloned());

                let var_name = css_var_name(&self.prefix, &virtual_path);
                self.palettes
                    .entry(palette)
                    .or_default()
                    .push((var_name.clone(), token.var_ref.clone()));

                let name = virtual_path.join(".");
                if !self.tokens.contains_key(&name) {
                    let var_ref = format!("var({})", var_name);
                    virtual_tokens.push(Token {
                        name,
                        path: virtual_path,
                        value: var_ref.clone(),
                        original: var_ref.clone(),
                        category: "colors".to_string(),
                        var_name,
                        var_ref,
                        semantic: true,
                        scopes: Vec::new(),
                    });
                }
            }
        }

        for token in virtual_tokens {
            if !self.tokens.contains_key(&token.name) {
                self.insert(token);
            }
        }
    }

    /// Returns the configured CSS variable prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the number of tokens, including palette virtual tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over all tokens in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    /// Returns a category's token keys mapped to their `var(...)` references.
    pub fn category_values(&self, category: &str) -> Option<&ValueMap> {
        self.categories.get(category)
    }

    /// Returns the token's bare `var(--name)` reference, or `fallback` when
    /// `path` does not name a token. `fallback` is never written into the
    /// `var()` itself.
    pub fn get_var(&self, path: &str, fallback: &str) -> String {
        self.tokens
            .get(path)
            .map(|token| token.var_ref.clone())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Looks up a token by its full dotted path.
    pub fn get_by_name(&self, path: &str) -> Option<&Token> {
        self.tokens.get(path)
    }

    /// Returns the custom-property declarations grouped by scope.
    ///
    /// The `"base"` scope comes first; other scopes follow in the order
    /// their first token was defined.
    pub fn css_var_map(&self) -> &IndexMap<String, Declarations> {
        &self.css_vars
    }

    /// Returns palette name to the declarations that select it.
    pub fn color_palettes(&self) -> &IndexMap<String, Declarations> {
        &self.palettes
    }

    /// Resolves a `color/opacity` value into a `color-mix()` expression.
    pub fn color_mix(&self, value: &str) -> ColorMix {
        color_mix(value, self)
    }
}

/// Builds the custom property name for a token path.
///
/// Segments are dash-cased and the result is escaped as a CSS identifier,
/// so `spacing.0.5` becomes `--chakra-spacing-0\.5`.
pub fn css_var_name(prefix: &str, path: &[String]) -> String {
    let body = path
        .iter()
        .map(|segment| dash_case(segment))
        .collect::<Vec<_>>()
        .join("-");
    let name = if prefix.is_empty() {
        format!("--{}", body)
    } else {
        format!("--{}-{}", prefix, body)
    };
    let mut escaped = String::with_capacity(name.len());
    match cssparser::serialize_identifier(&name, &mut escaped) {
        Ok(()) => escaped,
        Err(_) => name,
    }
}

fn css_var_ref(prefix: &str, path: &[String]) -> String {
    format!("var({})", css_var_name(prefix, path))
}

fn collect(
    group: &StyleObject,
    path: &mut Vec<String>,
    semantic: bool,
    out: &mut IndexMap<String, RawToken>,
) -> Result<()> {
    for (key, value) in group {
        path.push(key.clone());
        let name = path.join(".");
        match value {
            Value::Object(map) if map.contains_key("value") => {
                if path.len() < 2 {
                    return Err(SystemError::InvalidToken {
                        name,
                        message: "tokens must be nested under a category".to_string(),
                    });
                }
                let scopes = scopes_of(&name, &map["value"])?;
                out.insert(
                    name,
                    RawToken {
                        path: path.clone(),
                        semantic,
                        scopes,
                    },
                );
            }
            Value::Object(map) => collect(map, path, semantic, out)?,
            _ => {
                return Err(SystemError::InvalidToken {
                    name,
                    message: "expected a token group or an object with a `value` key".to_string(),
                })
            }
        }
        path.pop();
    }
    Ok(())
}

fn scopes_of(name: &str, value: &Value) -> Result<Vec<(String, String)>> {
    match value {
        Value::Object(branches) => {
            if branches.is_empty() {
                return Err(SystemError::InvalidToken {
                    name: name.to_string(),
                    message: "conditional value has no branches".to_string(),
                });
            }
            branches
                .iter()
                .map(|(scope, branch)| Ok((scope.clone(), token_text(name, branch)?)))
                .collect()
        }
        other => Ok(vec![(BASE_SCOPE.to_string(), token_text(name, other)?)]),
    }
}

fn token_text(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(items) => Ok(items
            .iter()
            .map(|item| token_text(name, item))
            .collect::<Result<Vec<_>>>()?
            .join(", ")),
        Value::Null => Err(SystemError::InvalidToken {
            name: name.to_string(),
            message: "value is null".to_string(),
        }),
        Value::Object(_) => Err(SystemError::InvalidToken {
            name: name.to_string(),
            message: "nested conditional values are not supported".to_string(),
        }),
    }
}

/// Resolves the literal base value of every token, failing on cycles.
fn resolve_literals(raw: &IndexMap<String, RawToken>) -> Result<HashMap<String, String>> {
    let mut marks = HashMap::new();
    let mut stack = Vec::new();
    let mut literals = HashMap::new();
    for name in raw.keys() {
        visit(name, raw, &mut marks, &mut stack, &mut literals)?;
    }
    Ok(literals)
}

fn visit(
    name: &str,
    raw: &IndexMap<String, RawToken>,
    marks: &mut HashMap<String, Mark>,
    stack: &mut Vec<String>,
    literals: &mut HashMap<String, String>,
) -> Result<()> {
    match marks.get(name) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => {
            let start = stack.iter().position(|n| n == name).unwrap_or(0);
            let mut path = stack[start..].to_vec();
            path.push(name.to_string());
            return Err(SystemError::TokenCycle { path });
        }
        None => {}
    }

    let Some(token) = raw.get(name) else {
        return Ok(());
    };

    marks.insert(name.to_string(), Mark::Visiting);
    stack.push(name.to_string());

    for (_, text) in &token.scopes {
        for reference in references(text) {
            if raw.contains_key(reference) {
                visit(reference, raw, marks, stack, literals)?;
            } else {
                log::warn!("token '{}' references unknown token '{}'", name, reference);
            }
        }
    }

    let literal = substitute(token.base_text(), |reference| literals.get(reference).cloned());
    literals.insert(name.to_string(), literal);

    stack.pop();
    marks.insert(name.to_string(), Mark::Done);
    Ok(())
}

/// Finds every `{path}` reference in a value.
pub(crate) fn references(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find(['{', '}']) {
            Some(close) if after.as_bytes()[close] == b'}' => {
                let inner = &after[..close];
                if is_reference(inner) {
                    found.push(inner);
                }
                rest = &after[close + 1..];
            }
            Some(close) => rest = &after[close..],
            None => break,
        }
    }
    found
}

fn is_reference(inner: &str) -> bool {
    !inner.is_empty() && !inner.contains(char::is_whitespace)
}

/// Replaces each known `{path}` reference with `lookup(path)`.
///
/// References the lookup does not know are left untouched.
pub(crate) fn substitute(text: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(['{', '}']) {
            Some(close) if after.as_bytes()[close] == b'}' => {
                let inner = &after[..close];
                match is_reference(inner).then(|| lookup(inner)).flatten() {
                    Some(replacement) => out.push_str(&replacement),
                    None => {
                        out.push('{');
                        out.push_str(inner);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            Some(close) => {
                out.push('{');
                out.push_str(&after[..close]);
                rest = &after[close..];
            }
            None => {
                out.push('{');
                rest = after;
                break;
            }
        }
    }
    out.push_str(rest);
    out
}
