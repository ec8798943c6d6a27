use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Attributes;
use crate::style::Style;
use crate::view::{TextSpec, ViewDescriptor};

/// `<br>`: a newline that always occupies a full line.
pub fn render_line_break(
    _attributes: &Attributes,
    _children: Option<&[ViewDescriptor]>,
    _style: &Style,
    ctx: &RenderContext,
) -> Result<Option<ViewDescriptor>> {
    let style = Style::new()
        .with("height", 1.2 * ctx.em_size)
        .with("flex", 1.0);
    let node = ViewDescriptor::text(
        style,
        TextSpec {
            content: Some("\n".to_string()),
            allow_font_scaling: ctx.allow_font_scaling,
            ..TextSpec::default()
        },
    );
    Ok(Some(node.with_key(ctx.key.clone())))
}
