//! Tag name to renderer lookup.

use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::{Attributes, TEXT_TAG};
use crate::renderers::{
    ListKind, render_anchor, render_iframe, render_image, render_line_break, render_list,
    render_preformatted, render_text_run,
};
use crate::style::Style;
use crate::view::ViewDescriptor;

/// Tags with a dedicated renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagRenderer {
    Anchor,
    Image,
    List(ListKind),
    EmbeddedFrame,
    Preformatted,
    LineBreak,
    TextRun,
}

const TAG_TABLE: &[(&str, TagRenderer)] = &[
    ("a", TagRenderer::Anchor),
    ("img", TagRenderer::Image),
    ("ul", TagRenderer::List(ListKind::Unordered)),
    ("ol", TagRenderer::List(ListKind::Ordered)),
    ("iframe", TagRenderer::EmbeddedFrame),
    ("pre", TagRenderer::Preformatted),
    ("br", TagRenderer::LineBreak),
    (TEXT_TAG, TagRenderer::TextRun),
    ("textwrapper", TagRenderer::TextRun),
];

impl TagRenderer {
    /// Renderer for `tag`, case-insensitive; `None` for tags without one.
    pub fn for_tag(tag: &str) -> Option<Self> {
        TAG_TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag))
            .map(|(_, renderer)| *renderer)
    }

    pub fn render(
        self,
        attributes: &Attributes,
        children: Option<&[ViewDescriptor]>,
        style: &Style,
        ctx: &RenderContext,
    ) -> Result<Option<ViewDescriptor>> {
        match self {
            TagRenderer::Anchor => render_anchor(attributes, children, style, ctx),
            TagRenderer::Image => render_image(attributes, children, style, ctx),
            TagRenderer::List(kind) => render_list(kind, attributes, children, style, ctx),
            TagRenderer::EmbeddedFrame => render_iframe(attributes, children, style, ctx),
            TagRenderer::Preformatted => render_preformatted(attributes, children, style, ctx),
            TagRenderer::LineBreak => render_line_break(attributes, children, style, ctx),
            TagRenderer::TextRun => render_text_run(attributes, children, style, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_covers_every_renderer() {
        assert_eq!(TagRenderer::for_tag("A"), Some(TagRenderer::Anchor));
        assert_eq!(TagRenderer::for_tag("img"), Some(TagRenderer::Image));
        assert_eq!(
            TagRenderer::for_tag("ol"),
            Some(TagRenderer::List(ListKind::Ordered))
        );
        assert_eq!(
            TagRenderer::for_tag("ul"),
            Some(TagRenderer::List(ListKind::Unordered))
        );
        assert_eq!(TagRenderer::for_tag("iframe"), Some(TagRenderer::EmbeddedFrame));
        assert_eq!(TagRenderer::for_tag("pre"), Some(TagRenderer::Preformatted));
        assert_eq!(TagRenderer::for_tag("br"), Some(TagRenderer::LineBreak));
        assert_eq!(TagRenderer::for_tag("#text"), Some(TagRenderer::TextRun));
        assert_eq!(TagRenderer::for_tag("div"), None);
    }
}
