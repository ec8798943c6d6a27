use super::{Style, StyleCategory};

/// Built-in defaults for `tag` in `category`, the lowest layer of the cascade.
///
/// Block defaults apply when a tag renders as a container, text defaults when
/// it renders as text. Sizes scale with `base_font_size`.
pub fn default_tag_style(tag: &str, category: StyleCategory, base_font_size: f64) -> Style {
    match category {
        StyleCategory::View => block_defaults(tag, base_font_size),
        StyleCategory::Text => text_defaults(tag, base_font_size),
        StyleCategory::Image => Style::new(),
    }
}

fn block_defaults(tag: &str, base: f64) -> Style {
    match tag {
        "ul" | "ol" => Style::new()
            .with("paddingLeft", 20.0)
            .with("marginBottom", base),
        "blockquote" => Style::new()
            .with("paddingLeft", 12.0)
            .with("borderLeftWidth", 4.0)
            .with("borderLeftColor", "#cccccc")
            .with("marginBottom", base),
        "hr" => Style::new()
            .with("marginTop", base / 2.0)
            .with("marginBottom", base / 2.0)
            .with("height", 1.0)
            .with("backgroundColor", "#cccccc"),
        "p" => Style::new().with("marginBottom", base),
        _ => Style::new(),
    }
}

fn text_defaults(tag: &str, base: f64) -> Style {
    match tag {
        "a" => Style::new()
            .with("textDecorationLine", "underline")
            .with("color", "#245dc1"),
        "b" | "strong" => Style::new().with("fontWeight", "bold"),
        "i" | "em" => Style::new().with("fontStyle", "italic"),
        "u" => Style::new().with("textDecorationLine", "underline"),
        "s" | "strike" | "del" => Style::new().with("textDecorationLine", "line-through"),
        "small" => Style::new().with("fontSize", base * 0.8),
        "big" => Style::new().with("fontSize", base * 1.2),
        "code" => Style::new().with("backgroundColor", "#f0f0f0"),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => heading(tag, base),
        _ => Style::new(),
    }
}

fn heading(tag: &str, base: f64) -> Style {
    let scale = match tag {
        "h1" => 2.0,
        "h2" => 1.5,
        "h3" => 1.17,
        "h4" => 1.0,
        "h5" => 0.83,
        _ => 0.67,
    };
    Style::new()
        .with("fontSize", base * scale)
        .with("fontWeight", "bold")
        .with("marginTop", base * scale * 0.67)
        .with("marginBottom", base * scale * 0.67)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_get_block_padding() {
        let style = default_tag_style("ul", StyleCategory::View, 16.0);
        assert_eq!(style.number("paddingLeft"), Some(20.0));
        assert_eq!(style.number("marginBottom"), Some(16.0));
        assert!(default_tag_style("ul", StyleCategory::Text, 16.0).is_empty());
    }

    #[test]
    fn headings_scale_with_base_font() {
        let style = default_tag_style("h1", StyleCategory::Text, 10.0);
        assert_eq!(style.number("fontSize"), Some(20.0));
        assert_eq!(style.keyword("fontWeight"), Some("bold"));
    }
}
