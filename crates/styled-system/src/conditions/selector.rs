//! Pure selector rewriting.
//!
//! Nested selectors use `&` for the enclosing selector. Composition is a
//! string rewrite over selector lists, aware of parentheses, brackets and
//! quotes so that `:is(a, b)` and `[data-x="a,b"]` are never split.

/// Splits a selector list on its top-level commas.
///
/// Parts are trimmed; empty parts are dropped.
pub fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (index, ch) in selector.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, ch) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(&selector[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&selector[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Returns true if `selector` uses the nesting `&` outside of quotes.
pub fn has_nesting(selector: &str) -> bool {
    let mut found = false;
    replace_nesting(selector, "", &mut found);
    found
}

/// Composes a nested selector with its parent.
///
/// Every `&` in `child` is replaced by each member of the parent list. A
/// child without `&` is a descendant of the parent. An empty parent removes
/// the `&`, so a top-level `.dark &` composes to `.dark`.
///
/// ```
/// use styled_system::compose_selector;
///
/// assert_eq!(compose_selector(".btn", "&:hover"), ".btn:hover");
/// assert_eq!(compose_selector("a, b", "&:focus"), "a:focus, b:focus");
/// assert_eq!(compose_selector(".list", "li"), ".list li");
/// ```
pub fn compose_selector(parent: &str, child: &str) -> String {
    let parents = split_selector_list(parent);
    let children = split_selector_list(child);
    if children.is_empty() {
        return parent.trim().to_string();
    }

    let mut composed: Vec<String> = Vec::new();
    for child in &children {
        if parents.is_empty() {
            let mut found = false;
            let rewritten = replace_nesting(child, "", &mut found);
            push_unique(&mut composed, rewritten.trim().to_string());
            continue;
        }
        for parent in &parents {
            let mut found = false;
            let rewritten = replace_nesting(child, parent, &mut found);
            let selector = if found {
                rewritten
            } else {
                format!("{} {}", parent, child)
            };
            push_unique(&mut composed, selector);
        }
    }

    composed.join(", ")
}

fn push_unique(list: &mut Vec<String>, selector: String) {
    if !selector.is_empty() && !list.contains(&selector) {
        list.push(selector);
    }
}

fn replace_nesting(selector: &str, parent: &str, found: &mut bool) -> String {
    let mut out = String::with_capacity(selector.len() + parent.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for ch in selector.chars() {
        if escaped {
            escaped = false;
            out.push(ch);
            continue;
        }
        match (quote, ch) {
            (_, '\\') => {
                escaped = true;
                out.push(ch);
            }
            (Some(q), c) if c == q => {
                quote = None;
                out.push(ch);
            }
            (Some(_), _) => out.push(ch),
            (None, '"' | '\'') => {
                quote = Some(ch);
                out.push(ch);
            }
            (None, '&') => {
                *found = true;
                out.push_str(parent);
            }
            _ => out.push(ch),
        }
    }
    out
}
