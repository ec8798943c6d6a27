use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Attributes;
use crate::style::Style;
use crate::view::{TextSpec, ViewDescriptor};

use super::rendered_children;

/// Raw text run, styled with the already merged style; no further resolution.
pub fn render_text_run(
    _attributes: &Attributes,
    children: Option<&[ViewDescriptor]>,
    style: &Style,
    ctx: &RenderContext,
) -> Result<Option<ViewDescriptor>> {
    let node = ViewDescriptor::text(
        style.clone(),
        TextSpec {
            content: ctx.data.clone(),
            children: rendered_children(children),
            allow_font_scaling: ctx.allow_font_scaling,
            on_press: None,
        },
    );
    Ok(Some(node.with_key(ctx.key.clone())))
}
