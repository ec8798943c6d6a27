use tracing::info;

use crate::diagnostics::diagnostics_enabled;

use super::{Style, StyleCategory, StyleValue};

const VIEW_PROPERTIES: &[&str] = &[
    "alignItems",
    "alignSelf",
    "backgroundColor",
    "borderBottomColor",
    "borderBottomWidth",
    "borderColor",
    "borderLeftColor",
    "borderLeftWidth",
    "borderRadius",
    "borderRightColor",
    "borderRightWidth",
    "borderStyle",
    "borderTopColor",
    "borderTopWidth",
    "borderWidth",
    "bottom",
    "display",
    "flex",
    "flexDirection",
    "flexWrap",
    "height",
    "justifyContent",
    "left",
    "margin",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginTop",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "opacity",
    "overflow",
    "padding",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "position",
    "right",
    "top",
    "width",
    "zIndex",
];

const TEXT_PROPERTIES: &[&str] = &[
    "color",
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "letterSpacing",
    "lineHeight",
    "textAlign",
    "textDecorationColor",
    "textDecorationLine",
    "textTransform",
];

const IMAGE_PROPERTIES: &[&str] = &["resizeMode", "tintColor", "overlayColor"];

/// Whether the host property `key` is valid for `category`.
pub fn is_allowed_for(key: &str, category: StyleCategory) -> bool {
    if VIEW_PROPERTIES.contains(&key) {
        return true;
    }
    match category {
        StyleCategory::View => false,
        StyleCategory::Text => TEXT_PROPERTIES.contains(&key),
        StyleCategory::Image => IMAGE_PROPERTIES.contains(&key),
    }
}

/// Whether `key` is a text-only host property (inherited by nested text).
pub fn is_text_property(key: &str) -> bool {
    TEXT_PROPERTIES.contains(&key)
}

/// Convert a CSS property name to its host key: `margin-right` → `marginRight`.
pub fn css_property_to_key(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.trim().chars() {
        if ch == '-' {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Parse an inline `style` attribute into a host style for `category`.
///
/// Lengths in `px` (or unitless) become numbers, `em` lengths scale by
/// `em_size`, everything else stays a keyword. `margin`/`padding`
/// shorthands expand to their four sides. Properties listed in `ignored`
/// (CSS names) or invalid for the category are dropped.
pub fn parse_inline_style(
    source: &str,
    category: StyleCategory,
    em_size: f64,
    ignored: &[String],
) -> Style {
    let mut out = Style::new();
    for (name, value) in parse_declarations(source) {
        if ignored.iter().any(|ignored| ignored.eq_ignore_ascii_case(&name)) {
            continue;
        }
        let key = css_property_to_key(&name);
        if !is_allowed_for(&key, category) {
            if diagnostics_enabled("style") {
                info!(property = %name, value = %value, ?category, "diagnostics: ignored inline property");
            }
            continue;
        }
        if key == "margin" || key == "padding" {
            if let Some(edges) = parse_edge_values(&value, em_size) {
                for (side, edge) in ["Top", "Right", "Bottom", "Left"].iter().zip(edges) {
                    out.set(format!("{key}{side}"), edge);
                }
                continue;
            }
        }
        out.set(key, convert_value(&value, em_size));
    }
    out
}

fn parse_declarations(source: &str) -> Vec<(String, String)> {
    source
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim().trim_end_matches("!important").trim().to_string();
            if name.is_empty() || value.is_empty() {
                return None;
            }
            Some((name, value))
        })
        .collect()
}

fn convert_value(value: &str, em_size: f64) -> StyleValue {
    match parse_length(value, em_size) {
        Some(number) => StyleValue::Number(number),
        None => StyleValue::Keyword(value.to_string()),
    }
}

fn parse_length(value: &str, em_size: f64) -> Option<f64> {
    let value = value.trim();
    if let Some(px) = value.strip_suffix("px") {
        return px.trim().parse().ok();
    }
    if let Some(em) = value.strip_suffix("em") {
        // `rem` is treated like `em`; there is no root font size at this layer.
        let em = em.strip_suffix('r').unwrap_or(em);
        return em.trim().parse::<f64>().ok().map(|v| v * em_size);
    }
    if let Some(pt) = value.strip_suffix("pt") {
        return pt.trim().parse::<f64>().ok().map(|v| v * 4.0 / 3.0);
    }
    value.parse().ok()
}

fn parse_edge_values(input: &str, em_size: f64) -> Option<[f64; 4]> {
    let parts = input
        .split_whitespace()
        .map(|part| parse_length(part, em_size))
        .collect::<Option<Vec<f64>>>()?;
    match parts.as_slice() {
        [all] => Some([*all, *all, *all, *all]),
        [vertical, horizontal] => Some([*vertical, *horizontal, *vertical, *horizontal]),
        [top, horizontal, bottom] => Some([*top, *horizontal, *bottom, *horizontal]),
        [top, right, bottom, left] => Some([*top, *right, *bottom, *left]),
        _ => None,
    }
}
