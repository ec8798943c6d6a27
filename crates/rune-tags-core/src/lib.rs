//! Tag renderers that turn parsed markup into host view descriptors.

pub mod context;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod markup;
pub mod pipeline;
pub mod renderers;
pub mod style;
pub mod view;

pub use context::{
    BaseFontStyle, EmbedHost, LinkPressCallback, ListPrefixRenderers, ParentWrapper, Platform,
    RenderContext,
};
pub use dispatch::TagRenderer;
pub use error::{RenderError, Result};
pub use markup::{Attributes, MarkupNode, parse_html};
pub use pipeline::{render_html, render_tree};
pub use renderers::{ListKind, RendererFn, renderer_fn};
pub use style::{Style, StyleCategory, StyleResolver, StyleValue};
pub use view::{PressEvent, PressHandler, ViewDescriptor, ViewKind};
