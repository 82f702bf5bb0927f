//! The base utility set.
//!
//! Most utilities are a token category plus shorthands. The rest carry a
//! transform with a fixed contract:
//!
//! | Utility | `"auto"` / `true` | Anything else |
//! |---------|-------------------|---------------|
//! | `filter`, `backdropFilter` | the full chain of filter variables | passed through |
//! | `transform` | translate/rotate/scale/skew variables (`auto-gpu` uses `translate3d`) | passed through |
//! | `scale`, `rotate`, `translate` | the per-axis variables | passed through |
//! | `truncated` | single-line ellipsis | nothing |
//! | `srOnly` | visually hidden | the explicit reset |
//!
//! Angle utilities (`skewX`, `skewY`, `hueRotate`, `rotate`) suffix bare
//! numbers with `deg`. Colour utilities accept `color/opacity`
//! (`red.500/40`) and emit a `color-mix()`.

use indexmap::IndexMap;
use serde_json::{json, Value};
use styled_system::utility::category_map;
use styled_system::{
    classify, declaration, into_object, value_to_css, StyleObject, TransformContext,
    UtilityConfig, ValueKind, ValueSource, BASE_BREAKPOINT,
};

const FILTER_CHAIN: &str = "var(--blur) var(--brightness) var(--contrast) var(--grayscale) \
var(--hue-rotate) var(--invert) var(--saturate) var(--sepia) var(--drop-shadow)";

const BACKDROP_FILTER_CHAIN: &str = "var(--backdrop-blur) var(--backdrop-brightness) \
var(--backdrop-contrast) var(--backdrop-grayscale) var(--backdrop-hue-rotate) \
var(--backdrop-invert) var(--backdrop-opacity) var(--backdrop-saturate) var(--backdrop-sepia)";

const TRANSFORM_AUTO: &str = "translateX(var(--translate-x, 0)) translateY(var(--translate-y, 0)) \
rotate(var(--rotate, 0)) scaleX(var(--scale-x, 1)) scaleY(var(--scale-y, 1)) \
skewX(var(--skew-x, 0)) skewY(var(--skew-y, 0))";

const TRANSFORM_AUTO_GPU: &str = "translate3d(var(--translate-x, 0), var(--translate-y, 0), 0) \
rotate(var(--rotate, 0)) scaleX(var(--scale-x, 1)) scaleY(var(--scale-y, 1)) \
skewX(var(--skew-x, 0)) skewY(var(--skew-y, 0))";

const GRADIENT_DIRECTIONS: &[(&str, &str)] = &[
    ("to-t", "to top"),
    ("to-tr", "to top right"),
    ("to-r", "to right"),
    ("to-br", "to bottom right"),
    ("to-b", "to bottom"),
    ("to-bl", "to bottom left"),
    ("to-l", "to left"),
    ("to-tl", "to top left"),
];

/// Ordered utility definitions under construction.
#[derive(Default)]
struct Registry(IndexMap<String, UtilityConfig>);

impl Registry {
    fn add(&mut self, property: &str, config: UtilityConfig) -> &mut Self {
        self.0.insert(property.to_string(), config);
        self
    }

    /// Adds several properties that share a token category and have no
    /// shorthands.
    fn category(&mut self, category: &str, properties: &[&str]) -> &mut Self {
        for property in properties {
            self.add(property, tokens(category));
        }
        self
    }
}

/// The base utilities, in definition order.
pub fn utilities() -> IndexMap<String, UtilityConfig> {
    let mut registry = Registry::default();
    background(&mut registry);
    border(&mut registry);
    color(&mut registry);
    effects(&mut registry);
    filters(&mut registry);
    layout(&mut registry);
    scroll(&mut registry);
    position(&mut registry);
    ring(&mut registry);
    spacing(&mut registry);
    transforms(&mut registry);
    typography(&mut registry);
    helpers(&mut registry);
    registry.0
}

fn tokens(category: &str) -> UtilityConfig {
    UtilityConfig::new().category(category)
}

fn colors() -> UtilityConfig {
    tokens("colors").transform(color_transform)
}

/// Emits `{ property: value }`, turning `color/opacity` into a `color-mix()`.
fn color_transform(value: &Value, ctx: &TransformContext<'_>) -> StyleObject {
    declaration(ctx.property, mix(value, ctx))
}

fn mix(value: &Value, ctx: &TransformContext<'_>) -> Value {
    if let Value::String(raw) = ctx.raw {
        if raw.contains('/') {
            let mixed = ctx.color_mix(raw);
            if !mixed.invalid {
                return Value::String(mixed.value);
            }
        }
    }
    value.clone()
}

/// `name(value)` for filter functions.
fn wrap(name: &str, value: &Value) -> Value {
    Value::String(format!("{}({})", name, value_to_css(value)))
}

/// Suffixes bare numbers with `deg`.
fn deg(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::String(format!("{}deg", n)),
        Value::String(text) if classify(text) == ValueKind::Number => {
            Value::String(format!("{}deg", text.trim()))
        }
        other => other.clone(),
    }
}

fn is_auto(value: &Value) -> bool {
    value.as_str() == Some("auto")
}

/// A utility that sets one custom property.
fn var(name: &'static str) -> UtilityConfig {
    UtilityConfig::new().transform(move |value, _| declaration(name, value.clone()))
}

/// A utility that sets one custom property to `function(value)`.
fn wrapped(name: &'static str, function: &'static str) -> UtilityConfig {
    UtilityConfig::new().transform(move |value, _| declaration(name, wrap(function, value)))
}

/// `auto` selects `chain`, anything else is used as written.
fn auto_or(property: &'static str, chain: &'static str) -> UtilityConfig {
    UtilityConfig::new().transform(move |value, _| {
        if is_auto(value) {
            declaration(property, chain)
        } else {
            declaration(property, value.clone())
        }
    })
}

fn background(r: &mut Registry) {
    r.add("background", colors().shorthand(["bg"]))
        .add("backgroundColor", colors().shorthand(["bgColor"]))
        .add("backgroundSize", UtilityConfig::new().shorthand(["bgSize"]))
        .add("backgroundPosition", UtilityConfig::new().shorthand(["bgPos"]))
        .add("backgroundRepeat", UtilityConfig::new().shorthand(["bgRepeat"]))
        .add(
            "backgroundAttachment",
            UtilityConfig::new().shorthand(["bgAttachment"]),
        )
        .add(
            "backgroundGradient",
            UtilityConfig::new()
                .shorthand(["bgGradient"])
                .values(ValueSource::function(|tokens| {
                    let mut values = category_map(tokens, "gradients");
                    for (name, direction) in GRADIENT_DIRECTIONS {
                        values.insert(
                            name.to_string(),
                            Value::String(format!("linear-gradient({}, var(--gradient))", direction)),
                        );
                    }
                    values
                }))
                .transform(|value, _| {
                    into_object(json!({
                        "--gradient-stops": "var(--gradient-from), var(--gradient-to)",
                        "--gradient": "var(--gradient-via-stops, var(--gradient-stops))",
                        "backgroundImage": value.clone(),
                    }))
                }),
        )
        .add(
            "gradientFrom",
            tokens("colors").transform(|value, ctx| declaration("--gradient-from", mix(value, ctx))),
        )
        .add(
            "gradientTo",
            tokens("colors").transform(|value, ctx| declaration("--gradient-to", mix(value, ctx))),
        )
        .add(
            "gradientVia",
            tokens("colors").transform(|value, ctx| {
                into_object(json!({
                    "--gradient-via": mix(value, ctx),
                    "--gradient-via-stops":
                        "var(--gradient-from), var(--gradient-via), var(--gradient-to)",
                }))
            }),
        )
        .add(
            "backgroundImage",
            tokens("gradients").shorthand(["bgImg", "bgImage"]),
        );
}

fn border(r: &mut Registry) {
    r.category(
        "borders",
        &[
            "border",
            "borderTop",
            "borderLeft",
            "borderBlockStart",
            "borderRight",
            "borderInlineEnd",
            "borderBottom",
            "borderBlockEnd",
        ],
    )
    .add("borderInlineStart", tokens("borders").shorthand(["borderStart"]))
    .add("borderInline", tokens("borders").shorthand(["borderX"]))
    .add("borderBlock", tokens("borders").shorthand(["borderY"]));

    for property in [
        "borderColor",
        "borderTopColor",
        "borderBlockStartColor",
        "borderBottomColor",
        "borderBlockEndColor",
        "borderLeftColor",
        "borderRightColor",
    ] {
        r.add(property, colors());
    }
    r.add(
        "borderInlineStartColor",
        colors().shorthand(["borderStartColor"]),
    )
    .add("borderInlineEndColor", colors().shorthand(["borderEndColor"]));

    r.category(
        "borderStyles",
        &[
            "borderStyle",
            "borderTopStyle",
            "borderBlockStartStyle",
            "borderBottomStyle",
            "borderBlockEndStyle",
            "borderLeftStyle",
            "borderRightStyle",
        ],
    )
    .add(
        "borderInlineStartStyle",
        tokens("borderStyles").shorthand(["borderStartStyle"]),
    )
    .add(
        "borderInlineEndStyle",
        tokens("borderStyles").shorthand(["borderEndStyle"]),
    );

    for (property, shorthand) in [
        ("borderRadius", "rounded"),
        ("borderTopLeftRadius", "roundedTopLeft"),
        ("borderStartStartRadius", "roundedStartStart"),
        ("borderEndStartRadius", "roundedEndStart"),
        ("borderTopRightRadius", "roundedTopRight"),
        ("borderStartEndRadius", "roundedStartEnd"),
        ("borderEndEndRadius", "roundedEndEnd"),
        ("borderBottomLeftRadius", "roundedBottomLeft"),
        ("borderBottomRightRadius", "roundedBottomRight"),
        ("borderInlineStartRadius", "roundedStart"),
        ("borderInlineEndRadius", "roundedEnd"),
        ("borderTopRadius", "roundedTop"),
        ("borderBottomRadius", "roundedBottom"),
        ("borderLeftRadius", "roundedLeft"),
        ("borderRightRadius", "roundedRight"),
    ] {
        r.add(property, tokens("radii").shorthand([shorthand]));
    }

    r.category(
        "borderWidths",
        &[
            "borderWidth",
            "borderBlockStartWidth",
            "borderTopWidth",
            "borderBottomWidth",
            "borderBlockEndWidth",
            "borderRightWidth",
            "borderLeftWidth",
        ],
    )
    .add(
        "borderInlineStartWidth",
        tokens("borderWidths").shorthand(["borderStartWidth"]),
    )
    .add(
        "borderInlineEndWidth",
        tokens("borderWidths").shorthand(["borderEndWidth"]),
    );
}

fn color(r: &mut Registry) {
    for property in [
        "color",
        "fill",
        "stroke",
        "accentColor",
        "outlineColor",
        "textDecorationColor",
    ] {
        r.add(property, colors());
    }
}

fn effects(r: &mut Registry) {
    r.add("boxShadow", tokens("shadows").shorthand(["shadow"]))
        .add("mixBlendMode", UtilityConfig::new().shorthand(["blendMode"]))
        .add(
            "backgroundBlendMode",
            UtilityConfig::new().shorthand(["bgBlendMode"]),
        )
        .add("opacity", tokens("opacity"));
}

fn filters(r: &mut Registry) {
    r.add("filter", auto_or("filter", FILTER_CHAIN))
        .add("blur", wrapped("--blur", "blur"))
        .add("brightness", wrapped("--brightness", "brightness"))
        .add("contrast", wrapped("--contrast", "contrast"))
        .add("grayscale", wrapped("--grayscale", "grayscale"))
        .add(
            "hueRotate",
            UtilityConfig::new()
                .transform(|value, _| declaration("--hue-rotate", wrap("hue-rotate", &deg(value)))),
        )
        .add("invert", wrapped("--invert", "invert"))
        .add("saturate", wrapped("--saturate", "saturate"))
        .add("sepia", wrapped("--sepia", "sepia"))
        .add("dropShadow", wrapped("--drop-shadow", "drop-shadow"))
        .add(
            "backdropFilter",
            auto_or("backdropFilter", BACKDROP_FILTER_CHAIN),
        )
        .add(
            "backdropBlur",
            tokens("blurs")
                .transform(|value, _| declaration("--backdrop-blur", wrap("blur", value))),
        )
        .add(
            "backdropBrightness",
            wrapped("--backdrop-brightness", "brightness"),
        )
        .add("backdropContrast", wrapped("--backdrop-contrast", "contrast"))
        .add(
            "backdropGrayscale",
            wrapped("--backdrop-grayscale", "grayscale"),
        )
        .add(
            "backdropHueRotate",
            UtilityConfig::new().transform(|value, _| {
                declaration("--backdrop-hue-rotate", wrap("hue-rotate", &deg(value)))
            }),
        )
        .add("backdropInvert", wrapped("--backdrop-invert", "invert"))
        .add("backdropOpacity", wrapped("--backdrop-opacity", "opacity"))
        .add("backdropSaturate", wrapped("--backdrop-saturate", "saturate"))
        .add("backdropSepia", wrapped("--backdrop-sepia", "sepia"));
}

fn layout(r: &mut Registry) {
    r.add("flexBasis", tokens("sizes"))
        .category("spacing", &["gap", "rowGap", "columnGap"])
        .add("flexDirection", UtilityConfig::new().shorthand(["flexDir"]))
        .category("spacing", &["gridGap", "gridColumnGap", "gridRowGap"])
        .add("aspectRatio", tokens("aspectRatios"))
        .add("width", tokens("sizes").shorthand(["w"]))
        .add("inlineSize", tokens("sizes"))
        .add("height", tokens("sizes").shorthand(["h"]))
        .add("blockSize", tokens("sizes"))
        .add(
            "boxSize",
            tokens("sizes").transform(|value, _| {
                into_object(json!({ "width": value.clone(), "height": value.clone() }))
            }),
        )
        .add("minWidth", tokens("sizes").shorthand(["minW"]))
        .add("minInlineSize", tokens("sizes"))
        .add("minHeight", tokens("sizes").shorthand(["minH"]))
        .add("minBlockSize", tokens("sizes"))
        .add("maxWidth", tokens("sizes").shorthand(["maxW"]))
        .add("maxInlineSize", tokens("sizes"))
        .add("maxHeight", tokens("sizes").shorthand(["maxH"]))
        .add("maxBlockSize", tokens("sizes"))
        .add("hideFrom", UtilityConfig::new().transform(hide_from))
        .add("hideBelow", UtilityConfig::new().transform(hide_below))
        .add(
            "overscrollBehavior",
            UtilityConfig::new().shorthand(["overscroll"]),
        )
        .add(
            "overscrollBehaviorX",
            UtilityConfig::new().shorthand(["overscrollX"]),
        )
        .add(
            "overscrollBehaviorY",
            UtilityConfig::new().shorthand(["overscrollY"]),
        )
        .add(
            "listStylePosition",
            UtilityConfig::new().shorthand(["listStylePos"]),
        )
        .add(
            "listStyleImage",
            UtilityConfig::new().shorthand(["listStyleImg"]),
        );
}

/// A breakpoint name nests under its min-width condition; any other value
/// is used as a raw min-width.
// `base` is zero width: hidden from it means always hidden.
fn hide_from(value: &Value, ctx: &TransformContext<'_>) -> StyleObject {
    let edge = value_to_css(value);
    if edge == BASE_BREAKPOINT {
        return declaration("display", json!("none"));
    }
    let key = match ctx.breakpoints().get(&edge) {
        Some(_) => edge,
        None => format!("@media screen and (min-width: {})", edge),
    };
    declaration(key, json!({ "display": "none" }))
}

fn hide_below(value: &Value, ctx: &TransformContext<'_>) -> StyleObject {
    let edge = value_to_css(value);
    if edge == BASE_BREAKPOINT {
        return StyleObject::new();
    }
    let key = match ctx.breakpoints().get(&edge) {
        Some(_) => format!("{}Down", edge),
        None => format!("@media screen and (max-width: {})", edge),
    };
    declaration(key, json!({ "display": "none" }))
}

fn scroll(r: &mut Registry) {
    r.category(
        "spacing",
        &[
            "scrollMargin",
            "scrollMarginTop",
            "scrollMarginBottom",
            "scrollMarginLeft",
            "scrollMarginRight",
        ],
    )
    .add(
        "scrollMarginX",
        tokens("spacing").transform(|value, _| {
            into_object(json!({ "scrollMarginLeft": value.clone(), "scrollMarginRight": value.clone() }))
        }),
    )
    .add(
        "scrollMarginY",
        tokens("spacing").transform(|value, _| {
            into_object(json!({ "scrollMarginTop": value.clone(), "scrollMarginBottom": value.clone() }))
        }),
    )
    .category(
        "spacing",
        &[
            "scrollPadding",
            "scrollPaddingTop",
            "scrollPaddingBottom",
            "scrollPaddingLeft",
            "scrollPaddingRight",
        ],
    )
    .add(
        "scrollPaddingX",
        tokens("spacing").transform(|value, _| {
            into_object(json!({ "scrollPaddingLeft": value.clone(), "scrollPaddingRight": value.clone() }))
        }),
    )
    .add(
        "scrollPaddingY",
        tokens("spacing").transform(|value, _| {
            into_object(json!({ "scrollPaddingTop": value.clone(), "scrollPaddingBottom": value.clone() }))
        }),
    );
}

fn position(r: &mut Registry) {
    r.add("position", UtilityConfig::new().shorthand(["pos"]))
        .add("zIndex", tokens("zIndex"))
        .add("inset", tokens("spacing"))
        .add("insetInline", tokens("spacing").shorthand(["insetX"]))
        .add("insetBlock", tokens("spacing").shorthand(["insetY"]))
        .category(
            "spacing",
            &[
                "top",
                "insetBlockStart",
                "bottom",
                "insetBlockEnd",
                "left",
                "right",
            ],
        )
        .add(
            "insetInlineStart",
            tokens("spacing").shorthand(["insetStart"]).transform(|value, _| {
                into_object(json!({ "left": value.clone(), "&:dir(rtl)": { "right": value.clone() } }))
            }),
        )
        .add(
            "insetInlineEnd",
            tokens("spacing").shorthand(["insetEnd"]).transform(|value, _| {
                into_object(json!({ "right": value.clone(), "&:dir(rtl)": { "left": value.clone() } }))
            }),
        );
}

fn ring(r: &mut Registry) {
    r.add(
        "ring",
        UtilityConfig::new().transform(|value, _| {
            into_object(json!({
                "--ring-offset-shadow":
                    "var(--ring-inset) 0 0 0 var(--ring-offset-width) var(--ring-offset-color)",
                "--ring-shadow":
                    "var(--ring-inset) 0 0 0 calc(var(--ring-width) + var(--ring-offset-width)) var(--ring-color)",
                "--ring-width": value.clone(),
                "boxShadow": "var(--ring-offset-shadow), var(--ring-shadow), var(--shadow, 0 0 #0000)",
            }))
        }),
    )
    .add(
        "ringColor",
        tokens("colors").transform(|value, ctx| declaration("--ring-color", mix(value, ctx))),
    )
    .add("ringOffset", var("--ring-offset-width"))
    .add(
        "ringOffsetColor",
        tokens("colors")
            .transform(|value, ctx| declaration("--ring-offset-color", mix(value, ctx))),
    )
    .add("ringInset", var("--ring-inset"));
}

fn space(shorthands: &[&str]) -> UtilityConfig {
    tokens("spacing").shorthand(shorthands.iter().copied())
}

fn spacing(r: &mut Registry) {
    r.add("margin", space(&["m"]))
        .add("marginTop", space(&["mt"]))
        .add("marginBlockStart", space(&[]))
        .add("marginRight", space(&["mr"]))
        .add("marginBottom", space(&["mb"]))
        .add("marginBlockEnd", space(&[]))
        .add("marginLeft", space(&["ml"]))
        .add("marginInlineStart", space(&["ms", "marginStart"]))
        .add("marginInlineEnd", space(&["me", "marginEnd"]))
        .add("marginInline", space(&["mx", "marginX"]))
        .add("marginBlock", space(&["my", "marginY"]))
        .add("padding", space(&["p"]))
        .add("paddingTop", space(&["pt"]))
        .add("paddingRight", space(&["pr"]))
        .add("paddingBottom", space(&["pb"]))
        .add("paddingBlockStart", space(&[]))
        .add("paddingBlockEnd", space(&[]))
        .add("paddingLeft", space(&["pl"]))
        .add("paddingInlineStart", space(&["ps", "paddingStart"]))
        .add("paddingInlineEnd", space(&["pe", "paddingEnd"]))
        .add("paddingInline", space(&["px", "paddingX"]))
        .add("paddingBlock", space(&["py", "paddingY"]));
}

fn transforms(r: &mut Registry) {
    r.add(
        "transform",
        UtilityConfig::new().transform(|value, _| {
            let composed = match value.as_str() {
                Some("auto") => Value::from(TRANSFORM_AUTO),
                Some("auto-gpu") => Value::from(TRANSFORM_AUTO_GPU),
                _ => value.clone(),
            };
            declaration("transform", composed)
        }),
    )
    .add(
        "skewX",
        UtilityConfig::new().transform(|value, _| declaration("--skew-x", deg(value))),
    )
    .add(
        "skewY",
        UtilityConfig::new().transform(|value, _| declaration("--skew-y", deg(value))),
    )
    .add("scaleX", var("--scale-x"))
    .add("scaleY", var("--scale-y"))
    .add(
        "scale",
        auto_or("scale", "var(--scale-x, 1) var(--scale-y, 1)"),
    )
    .add(
        "rotate",
        UtilityConfig::new().transform(|value, _| {
            if is_auto(value) {
                declaration("rotate", "var(--rotate-x, 0) var(--rotate-y, 0) var(--rotate-z, 0)")
            } else {
                declaration("rotate", deg(value))
            }
        }),
    )
    .add(
        "translate",
        UtilityConfig::new().transform(|value, _| {
            if is_auto(value) {
                declaration("transform", "var(--translate-x) var(--translate-y)")
            } else {
                declaration("transform", value.clone())
            }
        }),
    )
    .add(
        "translateX",
        tokens("spacing").transform(|value, _| declaration("--translate-x", value.clone())),
    )
    .add(
        "translateY",
        tokens("spacing").transform(|value, _| declaration("--translate-y", value.clone())),
    );
}

fn typography(r: &mut Registry) {
    r.add("transitionDuration", tokens("durations"))
        .add(
            "transitionProperty",
            tokens("properties").shorthand(["transition"]),
        )
        .add(
            "transitionTimingFunction",
            tokens("easings").shorthand(["transitionTiming"]),
        )
        .add("animation", tokens("animations"))
        .add("animationDuration", tokens("durations"))
        .add("animationDelay", tokens("durations"))
        .add("fontFamily", tokens("fonts"))
        .add("fontSize", tokens("fontSizes"))
        .add("fontWeight", tokens("fontWeights"))
        .add("lineHeight", tokens("lineHeights"))
        .add("letterSpacing", tokens("letterSpacings"))
        .add("textDecoration", UtilityConfig::new().shorthand(["textDecor"]))
        .add("textShadow", tokens("shadows"))
        .add(
            "truncated",
            UtilityConfig::new()
                .values(ValueSource::Boolean)
                .transform(|value, _| {
                    if value == &Value::Bool(true) {
                        into_object(json!({
                            "overflow": "hidden",
                            "textOverflow": "ellipsis",
                            "whiteSpace": "nowrap",
                        }))
                    } else {
                        StyleObject::new()
                    }
                }),
        )
        .add(
            "noOfLines",
            UtilityConfig::new().transform(|value, _| {
                into_object(json!({
                    "display": "-webkit-box",
                    "WebkitBoxOrient": "vertical",
                    "WebkitLineClamp": "var(--line-clamp)",
                    "--line-clamp": value.clone(),
                    "overflow": "hidden",
                    "textOverflow": "ellipsis",
                }))
            }),
        );
}

fn helpers(r: &mut Registry) {
    r.add(
        "srOnly",
        UtilityConfig::new()
            .values(ValueSource::Boolean)
            .transform(|value, _| match value {
                Value::Bool(true) => into_object(json!({
                    "position": "absolute",
                    "width": "1px",
                    "height": "1px",
                    "padding": "0",
                    "margin": "-1px",
                    "overflow": "hidden",
                    "clip": "rect(0, 0, 0, 0)",
                    "whiteSpace": "nowrap",
                    "borderWidth": "0",
                })),
                Value::Bool(false) => into_object(json!({
                    "position": "static",
                    "width": "auto",
                    "height": "auto",
                    "padding": "0",
                    "margin": "0",
                    "overflow": "visible",
                    "clip": "auto",
                    "whiteSpace": "normal",
                })),
                _ => StyleObject::new(),
            }),
    )
    .add(
        "debug",
        UtilityConfig::new()
            .values(ValueSource::Boolean)
            .transform(|value, _| {
                if value != &Value::Bool(true) {
                    return StyleObject::new();
                }
                into_object(json!({
                    "outline": "1px solid blue !important",
                    "& > *": { "outline": "1px solid red !important" },
                }))
            }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg() {
        assert_eq!(deg(&json!(45)), json!("45deg"));
        assert_eq!(deg(&json!("45")), json!("45deg"));
        assert_eq!(deg(&json!("45deg")), json!("45deg"));
        assert_eq!(deg(&json!("1turn")), json!("1turn"));
        assert_eq!(deg(&json!("var(--angle)")), json!("var(--angle)"));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("blur", &json!("4px")), json!("blur(4px)"));
        assert_eq!(wrap("saturate", &json!(2)), json!("saturate(2)"));
    }

    #[test]
    fn test_no_shorthand_shadows_a_property() {
        let utilities = utilities();
        for (property, config) in &utilities {
            for shorthand in &config.shorthand {
                assert!(
                    !utilities.contains_key(shorthand),
                    "'{}' lists '{}' which is itself a property",
                    property,
                    shorthand
                );
            }
        }
    }

    #[test]
    fn test_shorthands_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for config in utilities().values() {
            for shorthand in &config.shorthand {
                assert!(seen.insert(shorthand.clone()), "duplicate shorthand '{}'", shorthand);
            }
        }
    }
}
