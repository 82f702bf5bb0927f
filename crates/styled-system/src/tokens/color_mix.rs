//! `color/opacity` shorthand support.

use super::dictionary::TokenDictionary;
use crate::value::format_number;

/// Result of resolving a `color/opacity` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMix {
    /// False when `value` is a usable `color-mix()` expression.
    pub invalid: bool,
    /// The expression, or the color part when the input was invalid.
    pub value: String,
}

/// Resolves `red.500/40` into
/// `color-mix(in srgb, var(--chakra-colors-red-500) 40%, transparent)`.
///
/// The opacity may name an `opacity.*` token (its value is scaled to a
/// percentage) or be a bare number. Colors that are not tokens are used
/// literally, so `#fff/50` works too.
pub fn color_mix(value: &str, tokens: &TokenDictionary) -> ColorMix {
    let Some((color_path, raw_opacity)) = value.split_once('/') else {
        return ColorMix {
            invalid: true,
            value: value.to_string(),
        };
    };

    if color_path.is_empty() || raw_opacity.is_empty() {
        return ColorMix {
            invalid: true,
            value: color_path.to_string(),
        };
    }

    let percent = match tokens.get_by_name(&format!("opacity.{}", raw_opacity)) {
        Some(token) => token
            .value
            .parse::<f64>()
            .ok()
            .map(|v| format!("{}%", format_number(v * 100.0))),
        None => raw_opacity
            .parse::<f64>()
            .ok()
            .map(|v| format!("{}%", format_number(v))),
    };

    let Some(percent) = percent else {
        return ColorMix {
            invalid: true,
            value: color_path.to_string(),
        };
    };

    let color = tokens.get_var(&format!("colors.{}", color_path), color_path);
    ColorMix {
        invalid: false,
        value: format!("color-mix(in srgb, {} {}, transparent)", color, percent),
    }
}
