//! Named conditions: pseudo-states, color schemes, media and container queries.
//!
//! A condition is a selector or at-rule fragment looked up by name. User
//! conditions are registered with a `_` prefix (`hover` becomes `_hover`);
//! breakpoint conditions are generated from [`Breakpoints`] and keep their
//! bare names (`md`, `mdOnly`, `smToLg`).
//!
//! Unknown names are not errors. A key that already looks like a selector or
//! at-rule (`&:nth-child(2)`, `@media print`, `[&>p]`) is accepted as a raw
//! condition, and anything else resolves to itself so a later layer can
//! treat it as a literal selector.

mod breakpoints;
mod selector;

pub use breakpoints::{Breakpoint, Breakpoints, BASE_BREAKPOINT};
pub use selector::{compose_selector, has_nesting, split_selector_list};

use indexmap::IndexMap;

/// The two families of condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    /// Rewrites the enclosing selector (`&:hover`, `.dark &`).
    Selector,
    /// Wraps the enclosing rule (`@media ...`, `@container ...`).
    AtRule,
}

/// A registered condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub name: String,
    pub raw: String,
    pub kind: ConditionKind,
}

impl Condition {
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = if raw.trim_start().starts_with('@') {
            ConditionKind::AtRule
        } else {
            ConditionKind::Selector
        };
        Self {
            name: name.into(),
            raw,
            kind,
        }
    }

    /// Applies the condition to a parent selector.
    ///
    /// Selector conditions substitute `&` with the parent; at-rules leave the
    /// selector alone since they wrap the rule instead.
    pub fn wrap(&self, parent: &str) -> String {
        match self.kind {
            ConditionKind::Selector => compose_selector(parent, &self.raw),
            ConditionKind::AtRule => parent.to_string(),
        }
    }

    pub fn is_at_rule(&self) -> bool {
        self.kind == ConditionKind::AtRule
    }
}

/// Returns true for keys that are selectors or at-rules in their own right.
pub fn is_raw_condition(key: &str) -> bool {
    let key = key.trim();
    if key.starts_with('@') || has_nesting(key) {
        return true;
    }
    match strip_brackets(key) {
        Some(inner) => inner.starts_with('@') || inner.contains('&'),
        None => false,
    }
}

fn strip_brackets(key: &str) -> Option<&str> {
    key.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// The condition registry.
#[derive(Debug, Clone, Default)]
pub struct Conditions {
    entries: IndexMap<String, Condition>,
    breakpoints: Breakpoints,
}

impl Conditions {
    /// Registers user conditions followed by the breakpoint conditions.
    ///
    /// A user condition named like a breakpoint condition is replaced by it.
    pub fn new(conditions: &IndexMap<String, String>, breakpoints: Breakpoints) -> Self {
        let mut entries = IndexMap::with_capacity(conditions.len());

        for (name, raw) in conditions {
            let key = if name.starts_with('_') {
                name.clone()
            } else {
                format!("_{}", name)
            };
            entries.insert(key.clone(), Condition::new(key, raw.clone()));
        }

        for (name, query) in breakpoints.conditions() {
            entries.insert(name.clone(), Condition::new(name, query));
        }

        log::debug!(
            "conditions registered: {} ({} breakpoints)",
            entries.len(),
            breakpoints.entries().len()
        );

        Self {
            entries,
            breakpoints,
        }
    }

    /// Registered condition names, user conditions first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Condition> {
        self.entries.get(name)
    }

    /// True for registered names and raw selectors or at-rules.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name) || is_raw_condition(name)
    }

    /// Resolves a name to its selector or at-rule fragment.
    ///
    /// Raw bracketed conditions lose their brackets; unknown names come back
    /// unchanged.
    pub fn resolve(&self, name: &str) -> String {
        if let Some(condition) = self.entries.get(name) {
            return condition.raw.clone();
        }
        match strip_brackets(name.trim()) {
            Some(inner) if inner.starts_with('@') || inner.contains('&') => inner.to_string(),
            _ => name.to_string(),
        }
    }

    /// Resolves a name to a [`Condition`], synthesizing one for raw keys.
    pub fn condition(&self, name: &str) -> Condition {
        match self.entries.get(name) {
            Some(condition) => condition.clone(),
            None => Condition::new(name, self.resolve(name)),
        }
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions() -> Conditions {
        let user: IndexMap<String, String> = [
            ("hover", "&:is(:hover, [data-hover])"),
            ("dark", ".dark &"),
            ("print", "@media print"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let bps: IndexMap<String, String> = [("sm", "480px"), ("md", "768px")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Conditions::new(&user, Breakpoints::new(&bps).unwrap())
    }

    #[test]
    fn test_user_conditions_are_underscored() {
        let conds = conditions();
        assert!(conds.has("_hover"));
        assert!(!conds.has("hover"));
        assert_eq!(conds.resolve("_dark"), ".dark &");
        let keys: Vec<&str> = conds.keys().collect();
        assert_eq!(&keys[..3], &["_hover", "_dark", "_print"]);
    }

    #[test]
    fn test_breakpoint_conditions_are_bare() {
        let conds = conditions();
        assert!(conds.has("md"));
        assert!(conds.has("smToMd"));
        assert_eq!(conds.resolve("md"), "@media screen and (min-width: 768px)");
        assert_eq!(conds.get("md").unwrap().kind, ConditionKind::AtRule);
    }

    #[test]
    fn test_raw_conditions() {
        let conds = conditions();
        assert!(conds.has("&:nth-child(2)"));
        assert!(conds.has("@container (min-width: 10rem)"));
        assert!(conds.has("[&>p]"));
        assert!(!conds.has("[data-active]"));
        assert!(!conds.has("color"));
        assert_eq!(conds.resolve("[&>p]"), "&>p");
        assert_eq!(conds.resolve("[@media print]"), "@media print");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(conditions().resolve("_unknown"), "_unknown");
        assert_eq!(conditions().resolve("body"), "body");
    }

    #[test]
    fn test_wrap() {
        let conds = conditions();
        assert_eq!(
            conds.get("_hover").unwrap().wrap(".btn"),
            ".btn:is(:hover, [data-hover])"
        );
        assert_eq!(conds.get("_dark").unwrap().wrap(".btn"), ".dark .btn");
        assert_eq!(conds.get("_print").unwrap().wrap(".btn"), ".btn");
        assert!(conds.condition("&:first-child").wrap("li").ends_with(":first-child"));
    }
}
