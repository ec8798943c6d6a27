//! One renderer per tag type.
//!
//! Every renderer takes the raw attributes, the already-rendered children,
//! the pre-merged style of the node and the render context, and returns one
//! descriptor or `None` for "render nothing".

mod anchor;
mod br;
mod iframe;
mod image;
mod list;
mod pre;
mod text;

use std::sync::Arc;

use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Attributes;
use crate::style::Style;
use crate::view::ViewDescriptor;

pub use anchor::render_anchor;
pub use br::render_line_break;
pub use iframe::{FALLBACK_FRAME_HEIGHT, render_iframe};
pub use image::render_image;
pub use list::{ListItemClassification, ListKind, classify_list_child, render_list};
pub use pre::{monospace_family, render_preformatted};
pub use text::render_text_run;

/// Shared-ownership renderer, used for caller-supplied overrides.
pub type RendererFn = Arc<
    dyn Fn(&Attributes, Option<&[ViewDescriptor]>, &Style, &RenderContext) -> Result<Option<ViewDescriptor>>
        + Send
        + Sync,
>;

/// Wrap a closure as a [`RendererFn`].
pub fn renderer_fn<F>(renderer: F) -> RendererFn
where
    F: Fn(&Attributes, Option<&[ViewDescriptor]>, &Style, &RenderContext) -> Result<Option<ViewDescriptor>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(renderer)
}

/// Rendered children, or none when the slice is absent or empty.
fn rendered_children(children: Option<&[ViewDescriptor]>) -> Vec<ViewDescriptor> {
    children.map(<[ViewDescriptor]>::to_vec).unwrap_or_default()
}
