use crate::context::{ParentWrapper, RenderContext};
use crate::error::Result;
use crate::markup::Attributes;
use crate::style::{Style, StyleCategory};
use crate::view::{PressHandler, TextSpec, TouchableSpec, ViewDescriptor, ViewKind};

use super::rendered_children;

/// `<a>`: inline pressable text inside a text wrapper, a touchable block otherwise.
pub fn render_anchor(
    attributes: &Attributes,
    children: Option<&[ViewDescriptor]>,
    _style: &Style,
    ctx: &RenderContext,
) -> Result<Option<ViewDescriptor>> {
    let inline = ctx.parent_wrapper == ParentWrapper::Text;
    let category = if inline {
        StyleCategory::Text
    } else {
        StyleCategory::View
    };
    let style = ctx.resolve_style("a", attributes, category, &[]);
    let on_press = Some(PressHandler::new(ctx.on_link_press.clone(), attributes));

    let children = rendered_children(children);
    // Raw text stands in when nothing was rendered below the anchor.
    let content = if children.is_empty() {
        ctx.data.clone()
    } else {
        None
    };

    let kind = if inline {
        ViewKind::Text(TextSpec {
            content,
            children,
            allow_font_scaling: ctx.allow_font_scaling,
            on_press,
        })
    } else {
        ViewKind::Touchable(TouchableSpec {
            content,
            children,
            on_press,
        })
    };
    Ok(Some(ViewDescriptor {
        key: Some(ctx.key.clone()),
        style,
        kind,
    }))
}
