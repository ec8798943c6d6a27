use std::collections::HashMap;

use crate::context::{DEFAULT_BASE_FONT_SIZE, RenderContext};
use crate::markup::Attributes;

use super::{Style, StyleCategory, StyleSource, default_tag_style, merge_styles, parse_inline_style};

/// Everything a resolver needs to produce a merged style for one element.
#[derive(Debug, Clone, Copy)]
pub struct StyleRequest<'a> {
    pub tag_name: &'a str,
    pub attributes: &'a Attributes,
    pub context: &'a RenderContext,
    pub category: StyleCategory,
    /// Renderer-supplied fragments, applied last in the given order.
    pub additional: &'a [Style],
}

/// Produces the merged style for an element. Implementations must be pure:
/// identical requests give identical styles.
pub trait StyleResolver: Send + Sync {
    fn resolve(&self, request: &StyleRequest<'_>) -> Style;
}

/// The default resolver: tag defaults < tag rules < class rules < inline
/// `style` attribute < additional fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadeResolver;

impl StyleResolver for CascadeResolver {
    fn resolve(&self, request: &StyleRequest<'_>) -> Style {
        let ctx = request.context;
        let base_font_size = ctx
            .base_font_style
            .as_ref()
            .and_then(|style| style.font_size)
            .unwrap_or(DEFAULT_BASE_FONT_SIZE);

        let tag_default = default_tag_style(request.tag_name, request.category, base_font_size);
        let class_rule = class_styles(request.attributes, &ctx.classes_styles);
        let inline = request
            .attributes
            .get("style")
            .map(|source| {
                parse_inline_style(source, request.category, ctx.em_size, &ctx.ignored_styles)
            })
            .unwrap_or_default();

        let mut fragments = vec![
            (StyleSource::TagDefault, &tag_default),
            (StyleSource::ClassRule, &class_rule),
            (StyleSource::Inline, &inline),
        ];
        if let Some(tag_rule) = ctx.tags_styles.get(request.tag_name) {
            fragments.push((StyleSource::TagRule, tag_rule));
        }
        fragments.extend(
            request
                .additional
                .iter()
                .map(|fragment| (StyleSource::Additional, fragment)),
        );
        merge_styles(fragments)
    }
}

/// Merge the caller styles of every class in the `class` attribute, in
/// attribute order.
pub fn class_styles(attributes: &Attributes, classes_styles: &HashMap<String, Style>) -> Style {
    let Some(classes) = attributes.get("class") else {
        return Style::new();
    };
    classes
        .split_whitespace()
        .filter_map(|class| classes_styles.get(class))
        .fold(Style::new(), |mut merged, style| {
            merged.extend_from(style);
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn cascade_precedence_is_default_tag_class_inline_additional() {
        let ctx = RenderContext::default()
            .with_tag_style("a", Style::new().with("color", "green").with("fontSize", 10.0))
            .with_class_style("big", Style::new().with("fontSize", 30.0).with("opacity", 0.5));
        let attributes = attrs(&[("class", "big"), ("style", "opacity: 0.8; margin-top: 2px")]);
        let extra = [Style::new().with("marginTop", 9.0)];

        let style = ctx.resolver.resolve(&StyleRequest {
            tag_name: "a",
            attributes: &attributes,
            context: &ctx,
            category: StyleCategory::Text,
            additional: &extra,
        });

        // tag rule beats the built-in link color
        assert_eq!(style.keyword("color"), Some("green"));
        // built-in default survives where nothing overrides it
        assert_eq!(style.keyword("textDecorationLine"), Some("underline"));
        assert_eq!(style.number("fontSize"), Some(30.0));
        assert_eq!(style.number("opacity"), Some(0.8));
        assert_eq!(style.number("marginTop"), Some(9.0));
    }

    #[test]
    fn class_styles_follow_attribute_order() {
        let classes = HashMap::from([
            ("a".to_string(), Style::new().with("width", 1.0)),
            ("b".to_string(), Style::new().with("width", 2.0)),
        ]);
        assert_eq!(
            class_styles(&attrs(&[("class", "b a")]), &classes).number("width"),
            Some(1.0)
        );
        assert_eq!(
            class_styles(&attrs(&[("class", "a  unknown b")]), &classes).number("width"),
            Some(2.0)
        );
        assert!(class_styles(&attrs(&[]), &classes).is_empty());
    }

    #[test]
    fn resolution_is_deterministic() {
        let ctx = RenderContext::default();
        let attributes = attrs(&[("style", "padding: 1px 2px 3px")]);
        let request = StyleRequest {
            tag_name: "ul",
            attributes: &attributes,
            context: &ctx,
            category: StyleCategory::View,
            additional: &[],
        };
        let first = ctx.resolver.resolve(&request);
        assert_eq!(first, ctx.resolver.resolve(&request));
        assert_eq!(first.number("paddingLeft"), Some(2.0));
        assert_eq!(first.number("paddingBottom"), Some(3.0));
    }
}
