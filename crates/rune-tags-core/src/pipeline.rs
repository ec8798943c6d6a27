//! Post-order traversal that feeds the renderers.

use anyhow::Context;
use tracing::info;

use crate::context::{ParentWrapper, RenderContext};
use crate::diagnostics::diagnostics_enabled;
use crate::dispatch::TagRenderer;
use crate::error::Result;
use crate::markup::{MarkupNode, parse_html};
use crate::style::{Style, StyleCategory};
use crate::view::{TextSpec, ViewDescriptor};

/// Tags without a dedicated renderer that still render as text.
const TEXT_TAGS: &[&str] = &[
    "abbr", "b", "big", "cite", "code", "del", "em", "font", "h1", "h2", "h3", "h4", "h5", "h6",
    "i", "label", "mark", "p", "q", "s", "small", "span", "strike", "strong", "sub", "sup", "u",
];

/// Render sibling nodes under `ctx`.
///
/// Children render before their parent. A child that renders nothing is
/// dropped together with its raw node, so every renderer sees raw children
/// index-aligned with its rendered children.
pub fn render_tree(nodes: &[MarkupNode], ctx: &RenderContext) -> Result<Vec<ViewDescriptor>> {
    render_siblings(nodes, ctx, &Style::new())
        .map(|rendered| rendered.into_iter().map(|(_, view)| view).collect())
}

/// Parse an HTML document and render its body.
pub fn render_html(html: &str, ctx: &RenderContext) -> anyhow::Result<Vec<ViewDescriptor>> {
    let nodes = parse_html(html);
    render_tree(&nodes, ctx).context("failed to render markup tree")
}

fn render_siblings<'a>(
    nodes: &'a [MarkupNode],
    ctx: &RenderContext,
    inherited: &Style,
) -> Result<Vec<(&'a MarkupNode, ViewDescriptor)>> {
    let mut rendered = Vec::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        if let Some(view) = render_node(node, index, ctx, inherited)? {
            rendered.push((node, view));
        }
    }
    Ok(rendered)
}

fn render_node(
    node: &MarkupNode,
    index: usize,
    parent_ctx: &RenderContext,
    inherited: &Style,
) -> Result<Option<ViewDescriptor>> {
    let renderer = TagRenderer::for_tag(&node.tag_name);
    let textual = renders_as_text(node, renderer, parent_ctx.parent_wrapper);

    let ctx = parent_ctx.for_child(index, node);

    let style = if node.is_text() {
        inherited.clone()
    } else {
        let category = if textual {
            StyleCategory::Text
        } else {
            StyleCategory::View
        };
        ctx.resolve_style(&node.tag_name, &node.attributes, category, &[])
    };

    let child_ctx = ctx.clone().with_parent_wrapper(if textual {
        ParentWrapper::Text
    } else {
        ParentWrapper::View
    });
    let child_inherited = if textual {
        style.inheritable()
    } else {
        Style::new()
    };
    let (raw_children, children): (Vec<MarkupNode>, Vec<ViewDescriptor>) =
        render_siblings(&node.children, &child_ctx, &child_inherited)?
            .into_iter()
            .map(|(raw, view)| (raw.clone(), view))
            .unzip();
    let ctx = ctx.with_raw_children(raw_children);
    let rendered = (!children.is_empty()).then_some(children.as_slice());

    match renderer {
        Some(renderer) => renderer.render(&node.attributes, rendered, &style, &ctx),
        None => Ok(render_fallback(node, textual, style, children, &ctx)),
    }
}

fn renders_as_text(node: &MarkupNode, renderer: Option<TagRenderer>, wrapper: ParentWrapper) -> bool {
    match renderer {
        Some(TagRenderer::TextRun | TagRenderer::Preformatted | TagRenderer::LineBreak) => true,
        Some(TagRenderer::Anchor) => wrapper == ParentWrapper::Text,
        Some(TagRenderer::List(_) | TagRenderer::Image | TagRenderer::EmbeddedFrame) => false,
        None => wrapper == ParentWrapper::Text || TEXT_TAGS.contains(&node.tag_name.as_str()),
    }
}

/// Tags without a renderer become a styled text node or container.
/// Empty unstyled containers render nothing, except direct list children:
/// those keep their row so item numbering stays intact.
fn render_fallback(
    node: &MarkupNode,
    textual: bool,
    style: Style,
    children: Vec<ViewDescriptor>,
    ctx: &RenderContext,
) -> Option<ViewDescriptor> {
    if diagnostics_enabled("html") {
        info!(tag = %node.tag_name, textual, "diagnostics: tag rendered by fallback");
    }
    if textual {
        let spec = TextSpec {
            content: ctx.data.clone(),
            children,
            allow_font_scaling: ctx.allow_font_scaling,
            on_press: None,
        };
        return Some(ViewDescriptor::text(style, spec).with_key(ctx.key.clone()));
    }
    if children.is_empty() && style.is_empty() && !is_list_child(node) {
        return None;
    }
    Some(ViewDescriptor::container(style, children).with_key(ctx.key.clone()))
}

fn is_list_child(node: &MarkupNode) -> bool {
    matches!(node.parent_tag.as_deref(), Some("ul" | "ol"))
}
