//! Responsive breakpoints and the media queries derived from them.
//!
//! Breakpoints are an ordered list of named lengths. Each one yields a
//! `min-width` condition, and pairs of them yield bounded ranges. Upper
//! bounds are exclusive: the breakpoint's own value minus a small epsilon,
//! so adjacent ranges never overlap at the exact breakpoint width.
//!
//! | Unit | Epsilon |
//! |------|---------|
//! | `px` | `0.02` |
//! | `em`, `rem` | `0.00125` |
//!
//! With `md: 768px` and `lg: 1024px`, `mdToLg` is
//! `@media screen and (min-width: 768px) and (max-width: 1023.98px)`.

use indexmap::IndexMap;

use crate::error::{Result, SystemError};
use crate::value::{format_number, parse_length};

/// The implicit first breakpoint with no media query.
pub const BASE_BREAKPOINT: &str = "base";

const PX_EPSILON: f64 = 0.02;
const EM_EPSILON: f64 = 0.00125;

/// A single named breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    pub name: String,
    pub value: f64,
    pub unit: String,
    /// The length as configured (`"768px"`).
    pub raw: String,
}

impl Breakpoint {
    fn min_width(&self) -> String {
        format!("(min-width: {})", self.raw)
    }

    fn max_width(&self) -> String {
        let epsilon = if self.unit == "px" {
            PX_EPSILON
        } else {
            EM_EPSILON
        };
        format!(
            "(max-width: {}{})",
            format_number(self.value - epsilon),
            self.unit
        )
    }
}

/// An ascending, validated list of breakpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakpoints {
    entries: Vec<Breakpoint>,
}

impl Breakpoints {
    /// Validates and stores breakpoints in their configured order.
    ///
    /// A `base` entry is optional; if present it must come first and be zero.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::InvalidBreakpoints`] when a value is not a
    /// `px`/`em`/`rem` length, units are mixed, or values are not strictly
    /// ascending.
    pub fn new(config: &IndexMap<String, String>) -> Result<Self> {
        let mut entries: Vec<Breakpoint> = Vec::with_capacity(config.len());

        for (index, (name, raw)) in config.iter().enumerate() {
            let (value, unit) = parse_length(raw.trim()).ok_or_else(|| invalid(format!(
                "'{}' has value '{}', expected a px, em or rem length",
                name, raw
            )))?;

            if name == BASE_BREAKPOINT {
                if index != 0 || value != 0.0 {
                    return Err(invalid(format!(
                        "'{}' must be the first breakpoint and equal to zero",
                        BASE_BREAKPOINT
                    )));
                }
                continue;
            }

            if !matches!(unit.as_str(), "px" | "em" | "rem") {
                return Err(invalid(format!(
                    "'{}' uses unsupported unit '{}'",
                    name, unit
                )));
            }

            if let Some(previous) = entries.last() {
                if previous.unit != unit {
                    return Err(invalid(format!(
                        "'{}' uses '{}' but '{}' uses '{}'; all breakpoints must share a unit",
                        name, unit, previous.name, previous.unit
                    )));
                }
                if value <= previous.value {
                    return Err(invalid(format!(
                        "breakpoints must be ascending: '{}' ({}) is not greater than '{}' ({})",
                        name, raw, previous.name, previous.raw
                    )));
                }
            }

            entries.push(Breakpoint {
                name: name.clone(),
                value,
                unit,
                raw: raw.trim().to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// Returns the breakpoints without the implicit `base`.
    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// Returns true if no breakpoints are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the responsive-array order: `base` followed by every breakpoint.
    pub fn names(&self) -> Vec<&str> {
        std::iter::once(BASE_BREAKPOINT)
            .chain(self.entries.iter().map(|bp| bp.name.as_str()))
            .collect()
    }

    /// Returns the breakpoint with the given name.
    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.entries.iter().find(|bp| bp.name == name)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|bp| bp.name == name)
    }

    /// Media query matching `name` and wider.
    pub fn up(&self, name: &str) -> Option<String> {
        self.get(name).map(|bp| media(&[bp.min_width()]))
    }

    /// Media query matching everything narrower than `name`.
    pub fn down(&self, name: &str) -> Option<String> {
        self.get(name).map(|bp| media(&[bp.max_width()]))
    }

    /// Media query matching `name` up to, not including, the next breakpoint.
    pub fn only(&self, name: &str) -> Option<String> {
        let index = self.index_of(name)?;
        let current = &self.entries[index];
        match self.entries.get(index + 1) {
            Some(next) => Some(media(&[current.min_width(), next.max_width()])),
            None => Some(media(&[current.min_width()])),
        }
    }

    /// Media query matching `min` up to, not including, `max`.
    ///
    /// Returns `None` unless both exist and `min` precedes `max`.
    pub fn between(&self, min: &str, max: &str) -> Option<String> {
        let lo = self.index_of(min)?;
        let hi = self.index_of(max)?;
        if lo >= hi {
            return None;
        }
        Some(media(&[
            self.entries[lo].min_width(),
            self.entries[hi].max_width(),
        ]))
    }

    /// Synthesizes the named breakpoint conditions.
    ///
    /// For each breakpoint `x`: `x`, `xOnly`, `xDown`; then `aToB` for every
    /// ascending pair.
    pub fn conditions(&self) -> Vec<(String, String)> {
        let mut conditions = Vec::new();

        for bp in &self.entries {
            if let Some(query) = self.up(&bp.name) {
                conditions.push((bp.name.clone(), query));
            }
            if let Some(query) = self.only(&bp.name) {
                conditions.push((format!("{}Only", bp.name), query));
            }
            if let Some(query) = self.down(&bp.name) {
                conditions.push((format!("{}Down", bp.name), query));
            }
        }

        for (i, min) in self.entries.iter().enumerate() {
            for max in &self.entries[i + 1..] {
                if let Some(query) = self.between(&min.name, &max.name) {
                    conditions.push((format!("{}To{}", min.name, capitalize(&max.name)), query));
                }
            }
        }

        conditions
    }
}

fn media(features: &[String]) -> String {
    format!("@media screen and {}", features.join(" and "))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn invalid(message: String) -> SystemError {
    SystemError::InvalidBreakpoints { message }
}
