//! Known CSS property names.
//!
//! Used to tell style props from other props when splitting component
//! props. Names are camelCase, the way style specifications spell them.

use std::collections::HashSet;

use once_cell::sync::Lazy;

static CSS_PROPERTIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "accentColor", "alignContent", "alignItems", "alignSelf", "alignTracks", "all",
        "animation", "animationComposition", "animationDelay", "animationDirection",
        "animationDuration", "animationFillMode", "animationIterationCount", "animationName",
        "animationPlayState", "animationTimingFunction", "appearance", "aspectRatio",
        "backdropFilter", "backfaceVisibility", "background", "backgroundAttachment",
        "backgroundBlendMode", "backgroundClip", "backgroundColor", "backgroundImage",
        "backgroundOrigin", "backgroundPosition", "backgroundPositionX", "backgroundPositionY",
        "backgroundRepeat", "backgroundSize", "blockSize", "border", "borderBlock",
        "borderBlockColor", "borderBlockEnd", "borderBlockEndColor", "borderBlockEndStyle",
        "borderBlockEndWidth", "borderBlockStart", "borderBlockStartColor",
        "borderBlockStartStyle", "borderBlockStartWidth", "borderBlockStyle", "borderBlockWidth",
        "borderBottom", "borderBottomColor", "borderBottomLeftRadius", "borderBottomRightRadius",
        "borderBottomStyle", "borderBottomWidth", "borderCollapse", "borderColor",
        "borderEndEndRadius", "borderEndStartRadius", "borderImage", "borderImageOutset",
        "borderImageRepeat", "borderImageSlice", "borderImageSource", "borderImageWidth",
        "borderInline", "borderInlineColor", "borderInlineEnd", "borderInlineEndColor",
        "borderInlineEndStyle", "borderInlineEndWidth", "borderInlineStart",
        "borderInlineStartColor", "borderInlineStartStyle", "borderInlineStartWidth",
        "borderInlineStyle", "borderInlineWidth", "borderLeft", "borderLeftColor",
        "borderLeftStyle", "borderLeftWidth", "borderRadius", "borderRight", "borderRightColor",
        "borderRightStyle", "borderRightWidth", "borderSpacing", "borderStartEndRadius",
        "borderStartStartRadius", "borderStyle", "borderTop", "borderTopColor",
        "borderTopLeftRadius", "borderTopRightRadius", "borderTopStyle", "borderTopWidth",
        "borderWidth", "bottom", "boxDecorationBreak", "boxShadow", "boxSizing", "breakAfter",
        "breakBefore", "breakInside", "captionSide", "caretColor", "clear", "clip", "clipPath",
        "color", "colorScheme", "columnCount", "columnFill", "columnGap", "columnRule",
        "columnRuleColor", "columnRuleStyle", "columnRuleWidth", "columnSpan", "columnWidth",
        "columns", "contain", "container", "containerName", "containerType", "content",
        "contentVisibility", "counterIncrement", "counterReset", "counterSet", "cursor",
        "direction", "display", "emptyCells", "fill", "fillOpacity", "filter", "flex",
        "flexBasis", "flexDirection", "flexFlow", "flexGrow", "flexShrink", "flexWrap", "float",
        "font", "fontFamily", "fontFeatureSettings", "fontKerning", "fontOpticalSizing",
        "fontSize", "fontSizeAdjust", "fontStretch", "fontStyle", "fontSynthesis",
        "fontVariant", "fontVariantCaps", "fontVariantNumeric", "fontVariationSettings",
        "fontWeight", "forcedColorAdjust", "gap", "grid", "gridArea", "gridAutoColumns",
        "gridAutoFlow", "gridAutoRows", "gridColumn", "gridColumnEnd", "gridColumnGap",
        "gridColumnStart", "gridGap", "gridRow", "gridRowEnd", "gridRowGap", "gridRowStart",
        "gridTemplate", "gridTemplateAreas", "gridTemplateColumns", "gridTemplateRows",
        "height", "hyphens", "imageRendering", "inlineSize", "inset", "insetBlock",
        "insetBlockEnd", "insetBlockStart", "insetInline", "insetInlineEnd", "insetInlineStart",
        "isolation", "justifyContent", "justifyItems", "justifySelf", "left", "letterSpacing",
        "lineBreak", "lineClamp", "lineHeight", "listStyle", "listStyleImage",
        "listStylePosition", "listStyleType", "margin", "marginBlock", "marginBlockEnd",
        "marginBlockStart", "marginBottom", "marginInline", "marginInlineEnd",
        "marginInlineStart", "marginLeft", "marginRight", "marginTop", "mask", "maskClip",
        "maskComposite", "maskImage", "maskMode", "maskOrigin", "maskPosition", "maskRepeat",
        "maskSize", "maxBlockSize", "maxHeight", "maxInlineSize", "maxWidth", "minBlockSize",
        "minHeight", "minInlineSize", "minWidth", "mixBlendMode", "objectFit", "objectPosition",
        "offset", "offsetDistance", "offsetPath", "offsetRotate", "opacity", "order", "orphans",
        "outline", "outlineColor", "outlineOffset", "outlineStyle", "outlineWidth", "overflow",
        "overflowAnchor", "overflowWrap", "overflowX", "overflowY", "overscrollBehavior",
        "overscrollBehaviorX", "overscrollBehaviorY", "padding", "paddingBlock",
        "paddingBlockEnd", "paddingBlockStart", "paddingBottom", "paddingInline",
        "paddingInlineEnd", "paddingInlineStart", "paddingLeft", "paddingRight", "paddingTop",
        "pageBreakAfter", "pageBreakBefore", "pageBreakInside", "paintOrder", "perspective",
        "perspectiveOrigin", "placeContent", "placeItems", "placeSelf", "pointerEvents",
        "position", "quotes", "resize", "right", "rotate", "rowGap", "scale", "scrollBehavior",
        "scrollMargin", "scrollMarginBlock", "scrollMarginBottom", "scrollMarginInline",
        "scrollMarginLeft", "scrollMarginRight", "scrollMarginTop", "scrollPadding",
        "scrollPaddingBlock", "scrollPaddingBottom", "scrollPaddingInline", "scrollPaddingLeft",
        "scrollPaddingRight", "scrollPaddingTop", "scrollSnapAlign", "scrollSnapStop",
        "scrollSnapType", "scrollbarColor", "scrollbarGutter", "scrollbarWidth",
        "shapeOutside", "stroke", "strokeDasharray", "strokeDashoffset", "strokeLinecap",
        "strokeLinejoin", "strokeOpacity", "strokeWidth", "tabSize", "tableLayout", "textAlign",
        "textAlignLast", "textDecoration", "textDecorationColor", "textDecorationLine",
        "textDecorationStyle", "textDecorationThickness", "textEmphasis", "textIndent",
        "textJustify", "textOrientation", "textOverflow", "textRendering", "textShadow",
        "textTransform", "textUnderlineOffset", "textUnderlinePosition", "textWrap", "top",
        "touchAction", "transform", "transformBox", "transformOrigin", "transformStyle",
        "transition", "transitionDelay", "transitionDuration", "transitionProperty",
        "transitionTimingFunction", "translate", "unicodeBidi", "userSelect", "verticalAlign",
        "viewTransitionName", "visibility", "whiteSpace", "widows", "width", "willChange",
        "wordBreak", "wordSpacing", "wordWrap", "writingMode", "zIndex", "zoom",
    ]
    .into_iter()
    .collect()
});

const VENDOR_PREFIXES: &[&str] = &["Webkit", "Moz", "ms", "O"];

/// Returns true for standard CSS properties, vendor-prefixed properties
/// (`WebkitLineClamp`) and custom properties (`--x`).
pub fn is_css_property(name: &str) -> bool {
    if name.starts_with("--") {
        return name.len() > 2;
    }
    if CSS_PROPERTIES.contains(name) {
        return true;
    }
    VENDOR_PREFIXES.iter().any(|prefix| {
        name.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
    })
}
