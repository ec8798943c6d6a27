use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Attributes;
use crate::style::{Style, StyleCategory};
use crate::view::{CachePolicy, ImageSource, ImageSpec, ViewDescriptor, ViewKind};

/// `<img>`: hands the source to the host image loader. No `src`, no image.
pub fn render_image(
    attributes: &Attributes,
    _children: Option<&[ViewDescriptor]>,
    _style: &Style,
    ctx: &RenderContext,
) -> Result<Option<ViewDescriptor>> {
    let Some(src) = attributes.get("src").filter(|src| !src.is_empty()) else {
        return Ok(None);
    };
    let style = ctx.resolve_style("img", attributes, StyleCategory::Image, &[]);
    Ok(Some(ViewDescriptor {
        key: Some(ctx.key.clone()),
        style,
        kind: ViewKind::Image(ImageSpec {
            source: ImageSource {
                uri: src.clone(),
                cache: CachePolicy::ForceCache,
            },
            alt: attributes.get("alt").cloned(),
            width: attributes.get("width").cloned(),
            height: attributes.get("height").cloned(),
        }),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_without_src_renders_nothing() {
        let attributes = Attributes::from([("alt".to_string(), "x".to_string())]);
        let out = render_image(&attributes, None, &Style::new(), &RenderContext::default()).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn image_forwards_source_with_forced_cache() {
        let attributes = Attributes::from([
            ("src".to_string(), "http://x/y.png".to_string()),
            ("alt".to_string(), "y".to_string()),
            ("width".to_string(), "40".to_string()),
            ("style".to_string(), "resize-mode: contain; color: red".to_string()),
        ]);
        let node = render_image(&attributes, None, &Style::new(), &RenderContext::default())
            .unwrap()
            .unwrap();
        let ViewKind::Image(spec) = &node.kind else {
            panic!("expected image, got {:?}", node.kind);
        };
        assert_eq!(
            spec.source,
            ImageSource {
                uri: "http://x/y.png".to_string(),
                cache: CachePolicy::ForceCache,
            }
        );
        assert_eq!(spec.alt.as_deref(), Some("y"));
        assert_eq!(spec.width.as_deref(), Some("40"));
        assert_eq!(spec.height, None);
        assert_eq!(node.style.keyword("resizeMode"), Some("contain"));
        assert!(!node.style.contains("color"));
    }
}
