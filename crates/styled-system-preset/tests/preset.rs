//! Behaviour of the base preset through a full `SystemContext`.

use insta::assert_snapshot;
use proptest::prelude::*;
use serde_json::{json, Value};
use styled_system::{into_object, to_css_string, StyleObject, SystemConfig, SystemContext};
use styled_system_preset::preset;

fn system() -> SystemContext {
    SystemContext::new(preset().unwrap()).unwrap()
}

fn css(sys: &SystemContext, spec: Value) -> Value {
    Value::Object(sys.css(&into_object(spec)))
}

#[test]
fn test_truncated_is_exactly_single_line_ellipsis() {
    let sys = system();
    assert_eq!(
        css(&sys, json!({ "truncated": true })),
        json!({ "overflow": "hidden", "textOverflow": "ellipsis", "whiteSpace": "nowrap" })
    );
    assert_eq!(css(&sys, json!({ "truncated": false })), json!({}));
    assert_eq!(
        css(&sys, json!({ "truncated": "true" }))["whiteSpace"],
        json!("nowrap")
    );
}

#[test]
fn test_no_of_lines_clamps_with_custom_property() {
    let sys = system();
    assert_eq!(
        css(&sys, json!({ "noOfLines": 3 })),
        json!({
            "display": "-webkit-box",
            "WebkitBoxOrient": "vertical",
            "WebkitLineClamp": "var(--line-clamp)",
            "--line-clamp": 3,
            "overflow": "hidden",
            "textOverflow": "ellipsis"
        })
    );
}

#[test]
fn test_sr_only_false_fully_overrides_true() {
    let sys = system();
    let hidden = into_object(json!({ "srOnly": true }));
    let shown = into_object(json!({ "srOnly": false }));

    let expected = json!({
        "position": "static",
        "width": "auto",
        "height": "auto",
        "padding": "0",
        "margin": "0",
        "overflow": "visible",
        "clip": "auto",
        "whiteSpace": "normal"
    });
    assert_eq!(Value::Object(sys.css_many([&hidden, &shown])), expected);
    assert_eq!(Value::Object(sys.css(&shown)), expected);
    assert_eq!(sys.css(&hidden)["borderWidth"], json!("0"));
}

#[test]
fn test_filter_chains() {
    let sys = system();
    assert_eq!(
        css(&sys, json!({ "filter": "auto" }))["filter"],
        json!(
            "var(--blur) var(--brightness) var(--contrast) var(--grayscale) var(--hue-rotate) \
             var(--invert) var(--saturate) var(--sepia) var(--drop-shadow)"
        )
    );
    assert_eq!(
        css(&sys, json!({ "backdropFilter": "auto" }))["backdropFilter"],
        json!(
            "var(--backdrop-blur) var(--backdrop-brightness) var(--backdrop-contrast) \
             var(--backdrop-grayscale) var(--backdrop-hue-rotate) var(--backdrop-invert) \
             var(--backdrop-opacity) var(--backdrop-saturate) var(--backdrop-sepia)"
        )
    );
    assert_eq!(
        css(&sys, json!({ "filter": "blur(2px)" })),
        json!({ "filter": "blur(2px)" })
    );
    assert_eq!(
        css(&sys, json!({ "blur": "4px", "hueRotate": 90 })),
        json!({ "--blur": "blur(4px)", "--hue-rotate": "hue-rotate(90deg)" })
    );
}

#[test]
fn test_transform_family() {
    let sys = system();
    assert_eq!(
        css(&sys, json!({ "transform": "auto-gpu" }))["transform"],
        json!(
            "translate3d(var(--translate-x, 0), var(--translate-y, 0), 0) rotate(var(--rotate, 0)) \
             scaleX(var(--scale-x, 1)) scaleY(var(--scale-y, 1)) skewX(var(--skew-x, 0)) \
             skewY(var(--skew-y, 0))"
        )
    );
    assert_eq!(
        css(&sys, json!({ "scale": "auto" })),
        json!({ "scale": "var(--scale-x, 1) var(--scale-y, 1)" })
    );
    assert_eq!(css(&sys, json!({ "scale": "1.5" })), json!({ "scale": "1.5" }));
    assert_eq!(css(&sys, json!({ "rotate": 45 })), json!({ "rotate": "45deg" }));
    assert_eq!(css(&sys, json!({ "rotate": "0.5turn" })), json!({ "rotate": "0.5turn" }));
    assert_eq!(
        css(&sys, json!({ "skewX": "var(--tilt)" })),
        json!({ "--skew-x": "var(--tilt)" })
    );
    assert_eq!(
        css(&sys, json!({ "translate": "auto", "translateX": "4" })),
        json!({
            "transform": "var(--translate-x) var(--translate-y)",
            "--translate-x": "var(--chakra-spacing-4)"
        })
    );
}

#[test]
fn test_color_opacity_and_palettes() {
    let sys = system();
    assert_eq!(
        css(&sys, json!({ "bg": "red.500/40" })),
        json!({
            "background": "color-mix(in srgb, var(--chakra-colors-red-500) 40%, transparent)"
        })
    );
    assert_eq!(
        css(&sys, json!({ "colorPalette": "teal", "color": "colorPalette.600" })),
        {
            let mut expected = StyleObject::new();
            for step in ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"] {
                expected.insert(
                    format!("--chakra-colors-color-palette-{}", step),
                    json!(format!("var(--chakra-colors-teal-{})", step)),
                );
            }
            expected.insert(
                "color".to_string(),
                json!("var(--chakra-colors-color-palette-600)"),
            );
            Value::Object(expected)
        }
    );
}

#[test]
fn test_breakpoint_utilities_and_ranges() {
    let sys = system();
    assert_eq!(
        sys.conditions().resolve("mdToLg"),
        "@media screen and (min-width: 768px) and (max-width: 1023.98px)"
    );
    assert_eq!(
        css(&sys, json!({ "hideFrom": "md", "hideBelow": "lg" })),
        json!({
            "@media screen and (min-width: 768px)": { "display": "none" },
            "@media screen and (max-width: 1023.98px)": { "display": "none" }
        })
    );
    assert_eq!(
        css(&sys, json!({ "hideBelow": "900px" })),
        json!({ "@media screen and (max-width: 900px)": { "display": "none" } })
    );
    assert_eq!(css(&sys, json!({ "hideFrom": "base" })), json!({ "display": "none" }));
    assert_eq!(css(&sys, json!({ "hideBelow": "base" })), json!({}));
}

#[test]
fn test_user_breakpoint_below_preset_range() {
    let user = SystemConfig::from_yaml("theme: { breakpoints: { xs: 320px } }").unwrap();
    let sys = SystemContext::new(preset().unwrap().merge(user)).unwrap();
    assert_eq!(sys.conditions().resolve("xs"), "@media screen and (min-width: 320px)");
    assert_eq!(
        sys.conditions().resolve("xsOnly"),
        "@media screen and (min-width: 320px) and (max-width: 479.98px)"
    );
    let entries = sys.serialize(&into_object(json!({ "color": ["red", "blue"] })));
    assert_eq!(entries[1].conditions, vec!["xs"]);
}

#[test]
fn test_responsive_array_skips_null() {
    let sys = system();
    let entries = sys.serialize(&into_object(json!({ "color": ["red", null, "blue"] })));
    assert_eq!(entries.len(), 2);
    assert!(entries[0].conditions.is_empty());
    assert_eq!(entries[1].conditions, vec!["md"]);
    assert_eq!(entries[1].value, json!("blue"));
}

#[test]
fn test_rtl_aware_inset_and_dark_condition() {
    let sys = system();
    assert_eq!(
        css(&sys, json!({ "insetStart": "2", "_dark": { "color": "fg" } })),
        json!({
            "left": "var(--chakra-spacing-2)",
            "&:dir(rtl)": { "right": "var(--chakra-spacing-2)" },
            "&.dark, .dark &": { "color": "var(--chakra-colors-fg)" }
        })
    );
}

#[test]
fn test_shorthand_fixes() {
    let sys = system();
    let utility = sys.utility();
    assert_eq!(utility.resolve_shorthand("mt"), "marginTop");
    assert_eq!(utility.resolve_shorthand("ms"), "marginInlineStart");
    assert_eq!(utility.resolve_shorthand("me"), "marginInlineEnd");
    assert_eq!(utility.resolve_shorthand("marginEnd"), "marginInlineEnd");
}

#[test]
fn test_debug_outlines_children() {
    let sys = system();
    assert_eq!(
        css(&sys, json!({ "debug": true })),
        json!({
            "outline": "1px solid blue !important",
            "& > *": { "outline": "1px solid red !important" }
        })
    );
}

#[test]
fn test_text_styles_and_layer_styles() {
    let sys = system();
    assert_eq!(
        css(&sys, json!({ "textStyle": "heading.sm" })),
        json!({
            "@layer compositions": {
                "fontFamily": "var(--chakra-fonts-heading)",
                "fontSize": "var(--chakra-font-sizes-lg)",
                "fontWeight": "var(--chakra-font-weights-semibold)",
                "lineHeight": "var(--chakra-line-heights-shorter)"
            }
        })
    );
    assert_eq!(
        css(&sys, json!({ "layerStyle": "card" }))["@layer compositions"]["borderRadius"],
        json!("var(--chakra-radii-md)")
    );
}

#[test]
fn test_field_error_slot_recipe() {
    let sys = system();
    let recipe = sys.slot_recipe("fieldError").unwrap();
    assert_eq!(recipe.slots(), ["text", "icon"]);

    let styles = recipe.resolve(&StyleObject::new());
    assert_eq!(
        Value::Object(styles["text"].clone()),
        json!({
            "marginTop": "var(--chakra-spacing-2)",
            "fontSize": "var(--chakra-font-sizes-sm)",
            "lineHeight": "var(--chakra-line-heights-normal)",
            "color": "var(--chakra-colors-red-500)",
            "&.dark, .dark &": { "color": "var(--chakra-colors-red-300)" }
        })
    );
    assert_eq!(
        styles["icon"]["marginInlineEnd"],
        json!("0.5em")
    );
}

#[test]
fn test_global_css_renders() {
    let sys = system();
    let css = to_css_string(&sys.get_global_css(), "");
    assert_snapshot!(css, @r"
    @keyframes spin {
      from {
        transform: rotate(0deg);
      }
      to {
        transform: rotate(360deg);
      }
    }
    @keyframes fade-in {
      from {
        opacity: 0;
      }
      to {
        opacity: 1;
      }
    }
    body {
      font-family: var(--chakra-fonts-body);
      color: var(--chakra-colors-fg);
      background: var(--chakra-colors-bg);
      line-height: var(--chakra-line-heights-base);
    }
    *::placeholder {
      color: var(--chakra-colors-placeholder);
    }
    *, *::before, *::after {
      border-color: var(--chakra-colors-border);
    }
    ");
}

#[test]
fn test_semantic_tokens_switch_under_dark() {
    let sys = system();
    let tokens = sys.get_token_css();
    assert!(!tokens.contains_key(".dark &"));
    assert_eq!(
        tokens["&.dark, .dark &"]["--chakra-colors-fg"],
        json!("var(--chakra-colors-white-alpha-900)")
    );
}

#[test]
fn test_fragments_never_use_shorthand_keys() {
    let sys = system();
    let utility = sys.utility();
    for property in utility.keys() {
        let Some(values) = utility.values(property) else {
            continue;
        };
        for value in values.keys() {
            let fragment = utility.transform(property, &json!(value));
            for key in fragment.keys() {
                assert_eq!(
                    utility.resolve_shorthand(key),
                    key.as_str(),
                    "{}: {} emitted shorthand '{}'",
                    property,
                    value,
                    key
                );
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every name resolves to a fixed point in one step.
    #[test]
    fn shorthand_resolution_is_idempotent(index in 0usize..400, noise in "[a-zA-Z]{0,10}") {
        let sys = system();
        let names: Vec<&str> = sys.utility().keys().collect();
        let name = if names.is_empty() { noise.as_str() } else { names[index % names.len()] };
        let once = sys.utility().resolve_shorthand(name);
        prop_assert_eq!(sys.utility().resolve_shorthand(once), once);
        let noisy = sys.utility().resolve_shorthand(&noise);
        prop_assert_eq!(sys.utility().resolve_shorthand(noisy), noisy);
    }
}
