use crate::context::{Platform, RenderContext};
use crate::error::Result;
use crate::markup::Attributes;
use crate::style::Style;
use crate::view::{TextSpec, ViewDescriptor};

use super::rendered_children;

const MONOSPACE_FAMILIES: &[(Platform, &str)] = &[
    (Platform::Android, "monospace"),
    (Platform::Ios, "Menlo"),
    (Platform::Other, "Menlo"),
];

/// Fixed-width font family available on `platform`.
pub fn monospace_family(platform: Platform) -> &'static str {
    MONOSPACE_FAMILIES
        .iter()
        .find(|(candidate, _)| *candidate == platform)
        .map(|(_, family)| *family)
        .unwrap_or("Menlo")
}

/// `<pre>`: children inside a monospace text block.
pub fn render_preformatted(
    _attributes: &Attributes,
    children: Option<&[ViewDescriptor]>,
    _style: &Style,
    ctx: &RenderContext,
) -> Result<Option<ViewDescriptor>> {
    let style = Style::new().with("fontFamily", monospace_family(ctx.platform));
    let node = ViewDescriptor::text(
        style,
        TextSpec {
            children: rendered_children(children),
            allow_font_scaling: ctx.allow_font_scaling,
            ..TextSpec::default()
        },
    );
    Ok(Some(node.with_key(ctx.key.clone())))
}
