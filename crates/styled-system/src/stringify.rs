//! Rendering resolved style objects as CSS text.
//!
//! Nested selector keys are composed with their parents, at-rule keys wrap
//! everything below them, and `@keyframes` entries are emitted with their
//! steps as written. Rules sharing an at-rule chain are grouped under a
//! single block, in the order they were first seen.

use indexmap::IndexMap;
use serde_json::Value;

use crate::conditions::compose_selector;
use crate::value::{hyphenate, value_to_css, StyleObject};

const INDENT: &str = "  ";
const ROOT: &str = ":root";

/// Renders a resolved style object as a stylesheet.
///
/// Top-level declarations and nested selectors compose against
/// `root_selector`; with an empty root, top-level declarations go to
/// `:root`.
///
/// ```
/// use serde_json::json;
/// use styled_system::{into_object, to_css_string};
///
/// let css = to_css_string(&into_object(json!({ "color": "red" })), ".btn");
/// assert_eq!(css, ".btn {\n  color: red;\n}\n");
/// ```
pub fn to_css_string(style: &StyleObject, root_selector: &str) -> String {
    let mut sheet = Sheet::default();
    sheet.walk(style, root_selector.trim(), &[]);
    sheet.render()
}

#[derive(Debug)]
enum Item {
    Rule(String, IndexMap<String, String>),
    Keyframes(String, StyleObject),
}

#[derive(Debug, Default)]
struct Group {
    items: Vec<Item>,
    rules: IndexMap<String, usize>,
}

impl Group {
    fn declare(&mut self, selector: &str, property: String, value: String) {
        let index = match self.rules.get(selector) {
            Some(&index) => index,
            None => {
                self.items
                    .push(Item::Rule(selector.to_string(), IndexMap::new()));
                self.rules.insert(selector.to_string(), self.items.len() - 1);
                self.items.len() - 1
            }
        };
        if let Some(Item::Rule(_, declarations)) = self.items.get_mut(index) {
            declarations.insert(property, value);
        }
    }
}

#[derive(Debug, Default)]
struct Sheet {
    groups: IndexMap<Vec<String>, Group>,
}

impl Sheet {
    fn walk(&mut self, style: &StyleObject, selector: &str, at_rules: &[String]) {
        for (key, value) in style {
            match value {
                Value::Object(inner) if is_keyframes(key) => {
                    self.group(at_rules)
                        .items
                        .push(Item::Keyframes(key.trim().to_string(), inner.clone()));
                }
                Value::Object(inner) if key.trim_start().starts_with('@') => {
                    let mut chain = at_rules.to_vec();
                    chain.push(key.trim().to_string());
                    self.walk(inner, selector, &chain);
                }
                Value::Object(inner) => {
                    let nested = compose_selector(selector, key);
                    self.walk(inner, &nested, at_rules);
                }
                Value::Null => {}
                scalar => {
                    let target = if selector.is_empty() { ROOT } else { selector };
                    self.group(at_rules)
                        .declare(target, hyphenate(key), value_to_css(scalar));
                }
            }
        }
    }

    fn group(&mut self, at_rules: &[String]) -> &mut Group {
        self.groups.entry(at_rules.to_vec()).or_default()
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (chain, group) in &self.groups {
            for (depth, at_rule) in chain.iter().enumerate() {
                out.push_str(&INDENT.repeat(depth));
                out.push_str(at_rule);
                out.push_str(" {\n");
            }
            let depth = chain.len();
            for item in &group.items {
                match item {
                    Item::Rule(selector, declarations) if !declarations.is_empty() => {
                        render_block(&mut out, selector, declarations.iter(), depth);
                    }
                    Item::Rule(..) => {}
                    Item::Keyframes(name, steps) => render_keyframes(&mut out, name, steps, depth),
                }
            }
            for depth in (0..chain.len()).rev() {
                out.push_str(&INDENT.repeat(depth));
                out.push_str("}\n");
            }
        }
        out
    }
}

fn is_keyframes(key: &str) -> bool {
    key.trim_start().starts_with("@keyframes")
}

fn render_block<'a, I>(out: &mut String, selector: &str, declarations: I, depth: usize)
where
    I: Iterator<Item = (&'a String, &'a String)>,
{
    let pad = INDENT.repeat(depth);
    out.push_str(&pad);
    out.push_str(selector);
    out.push_str(" {\n");
    for (property, value) in declarations {
        out.push_str(&pad);
        out.push_str(INDENT);
        out.push_str(property);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out.push_str(&pad);
    out.push_str("}\n");
}

fn render_keyframes(out: &mut String, name: &str, steps: &StyleObject, depth: usize) {
    let pad = INDENT.repeat(depth);
    out.push_str(&pad);
    out.push_str(name);
    out.push_str(" {\n");
    for (step, body) in steps {
        let Value::Object(body) = body else {
            continue;
        };
        let declarations: IndexMap<String, String> = body
            .iter()
            .filter(|(_, value)| !value.is_null() && !value.is_object())
            .map(|(property, value)| (hyphenate(property), value_to_css(value)))
            .collect();
        render_block(out, step, declarations.iter(), depth + 1);
    }
    out.push_str(&pad);
    out.push_str("}\n");
}
