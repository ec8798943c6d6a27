use tracing::warn;

use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Attributes;
use crate::style::{Style, StyleCategory, class_styles};
use crate::view::{FrameSource, FrameSpec, ViewDescriptor, ViewKind};

/// Frame height when neither attributes nor styles give one.
pub const FALLBACK_FRAME_HEIGHT: f64 = 200.0;

/// `<iframe>`: embedded content shown by the host's frame component.
///
/// Dimensions resolve as attribute > class rule > tag rule > fallback
/// (200 high, the static content width wide). Without a host component the
/// frame renders nothing and a warning is logged.
pub fn render_iframe(
    attributes: &Attributes,
    _children: Option<&[ViewDescriptor]>,
    _style: &Style,
    ctx: &RenderContext,
) -> Result<Option<ViewDescriptor>> {
    let tag_rule = ctx.tags_styles.get("iframe");
    let class_rule = class_styles(attributes, &ctx.classes_styles);

    let dimension = |name: &str| {
        attributes
            .get(name)
            .and_then(|value| parse_leading_integer(value))
            .or_else(|| class_rule.number(name))
            .or_else(|| tag_rule.and_then(|style| style.number(name)))
    };
    let height = dimension("height").unwrap_or(FALLBACK_FRAME_HEIGHT);
    let width = dimension("width").unwrap_or(ctx.static_content_max_width);

    let sizing = Style::new().with("height", height).with("width", width);
    let style = ctx.resolve_style("iframe", attributes, StyleCategory::View, &[sizing]);

    let source = match attributes.get("srcdoc").filter(|doc| !doc.is_empty()) {
        Some(doc) => FrameSource::Html(doc.clone()),
        None => FrameSource::Uri(attributes.get("src").cloned()),
    };

    let Some(host) = &ctx.embed_host else {
        warn!(
            key = %ctx.key,
            "unable to render <iframe>: no embedded content host configured"
        );
        return Ok(None);
    };

    Ok(Some(ViewDescriptor {
        key: Some(ctx.key.clone()),
        style,
        kind: ViewKind::EmbeddedFrame(FrameSpec {
            host: host.component.clone(),
            source,
        }),
    }))
}

/// Leading integer of an attribute value (`"50px"` → 50). Zero and
/// unparseable values count as absent.
fn parse_leading_integer(value: &str) -> Option<f64> {
    let value = value.trim();
    let sign_len = usize::from(value.starts_with(['-', '+']));
    let digits = value[sign_len..]
        .find(|ch: char| !ch.is_ascii_digit())
        .map_or(value.len(), |end| end + sign_len);
    value[..digits]
        .parse::<i64>()
        .ok()
        .filter(|number| *number != 0)
        .map(|number| number as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EmbedHost;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn hosted() -> RenderContext {
        RenderContext::default()
            .with_embed_host(EmbedHost::new("WebView"))
            .with_static_content_max_width(320.0)
    }

    fn frame(node: &ViewDescriptor) -> &FrameSpec {
        match &node.kind {
            ViewKind::EmbeddedFrame(spec) => spec,
            other => panic!("expected frame, got {:?}", other),
        }
    }

    #[test]
    fn srcdoc_wins_over_src() {
        let node = render_iframe(&attrs(&[("srcdoc", "<p>hi</p>")]), None, &Style::new(), &hosted())
            .unwrap()
            .unwrap();
        assert_eq!(frame(&node).source, FrameSource::Html("<p>hi</p>".to_string()));
        assert_eq!(frame(&node).host, "WebView");

        let node = render_iframe(
            &attrs(&[("src", "http://f"), ("srcdoc", "<b>x</b>")]),
            None,
            &Style::new(),
            &hosted(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(frame(&node).source, FrameSource::Html("<b>x</b>".to_string()));
    }

    #[test]
    fn remote_source_when_no_srcdoc() {
        let node = render_iframe(&attrs(&[("src", "http://f")]), None, &Style::new(), &hosted())
            .unwrap()
            .unwrap();
        assert_eq!(frame(&node).source, FrameSource::Uri(Some("http://f".to_string())));
    }

    #[test]
    fn attribute_height_beats_class_rule() {
        let ctx = hosted().with_class_style("tall", Style::new().with("height", 80.0));
        let node = render_iframe(
            &attrs(&[("height", "50"), ("class", "tall")]),
            None,
            &Style::new(),
            &ctx,
        )
        .unwrap()
        .unwrap();
        assert_eq!(node.style.number("height"), Some(50.0));
    }

    #[test]
    fn dimensions_fall_back_through_class_tag_and_defaults() {
        let ctx = hosted()
            .with_class_style("wide", Style::new().with("width", 120.0))
            .with_tag_style("iframe", Style::new().with("height", 90.0).with("width", 10.0));
        let node = render_iframe(&attrs(&[("class", "wide")]), None, &Style::new(), &ctx)
            .unwrap()
            .unwrap();
        assert_eq!(node.style.number("width"), Some(120.0));
        assert_eq!(node.style.number("height"), Some(90.0));

        let node = render_iframe(&attrs(&[("width", "0")]), None, &Style::new(), &hosted())
            .unwrap()
            .unwrap();
        assert_eq!(node.style.number("height"), Some(FALLBACK_FRAME_HEIGHT));
        assert_eq!(node.style.number("width"), Some(320.0));
    }

    #[test]
    fn missing_host_renders_nothing() {
        let out = render_iframe(
            &attrs(&[("src", "http://f")]),
            None,
            &Style::new(),
            &RenderContext::default(),
        )
        .unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn leading_integer_parsing() {
        assert_eq!(parse_leading_integer("50px"), Some(50.0));
        assert_eq!(parse_leading_integer(" 7 "), Some(7.0));
        assert_eq!(parse_leading_integer("-3"), Some(-3.0));
        assert_eq!(parse_leading_integer("0"), None);
        assert_eq!(parse_leading_integer("abc"), None);
    }
}
