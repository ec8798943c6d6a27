//! Per-invocation render configuration passed down the tree.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use rune_tags_config::Platform;
use rune_tags_config::RenderConfig;

use crate::diagnostics::configure_diagnostics;
use crate::error::{RenderError, Result};
use crate::markup::{Attributes, MarkupNode};
use crate::renderers::RendererFn;
use crate::style::{CascadeResolver, Style, StyleCategory, StyleRequest, StyleResolver};
use crate::view::PressEvent;

/// Base font size used when the base font style does not set one.
pub const DEFAULT_BASE_FONT_SIZE: f64 = 16.0;

/// Callback invoked when a link is pressed: `(event, href, attributes)`.
pub type LinkPressCallback = Arc<dyn Fn(&PressEvent, &str, &Attributes) + Send + Sync>;

/// Font settings the renderers size their defaults against.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseFontStyle {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// Kind of the wrapper a node renders inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentWrapper {
    /// Inline text: children render as nested text.
    Text,
    #[default]
    View,
}

/// Reference to the host component able to display embedded content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedHost {
    pub component: String,
}

impl EmbedHost {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }
}

/// Caller overrides for list item prefixes.
#[derive(Clone, Default)]
pub struct ListPrefixRenderers {
    pub ul: Option<RendererFn>,
    pub ol: Option<RendererFn>,
}

impl fmt::Debug for ListPrefixRenderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListPrefixRenderers")
            .field("ul", &self.ul.is_some())
            .field("ol", &self.ol.is_some())
            .finish()
    }
}

/// Configuration bag for one render invocation.
///
/// Contexts are never mutated in place while rendering; children receive
/// derived copies with fields overridden. Shared tables sit behind `Arc` so
/// deriving a copy stays cheap.
#[derive(Clone)]
pub struct RenderContext {
    pub allow_font_scaling: bool,
    /// Required by the list renderer; `None` is a contract violation there.
    pub base_font_style: Option<BaseFontStyle>,
    /// Unique key of the subtree being rendered.
    pub key: String,
    /// Position of the node among its siblings.
    pub node_index: usize,
    /// Child position, set when a list invokes a prefix renderer.
    pub index: Option<usize>,
    /// Raw children of the node, index-aligned with its rendered children.
    pub raw_children: Arc<Vec<MarkupNode>>,
    /// Raw text content of the node.
    pub data: Option<String>,
    pub on_link_press: Option<LinkPressCallback>,
    pub lists_prefixes_renderers: ListPrefixRenderers,
    pub parent_wrapper: ParentWrapper,
    pub em_size: f64,
    pub static_content_max_width: f64,
    /// Caller styles by tag name.
    pub tags_styles: Arc<HashMap<String, Style>>,
    /// Caller styles by class name.
    pub classes_styles: Arc<HashMap<String, Style>>,
    /// CSS properties dropped from inline `style` attributes.
    pub ignored_styles: Arc<Vec<String>>,
    pub embed_host: Option<EmbedHost>,
    pub platform: Platform,
    pub resolver: Arc<dyn StyleResolver>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            allow_font_scaling: true,
            base_font_style: Some(BaseFontStyle::default()),
            key: "root".to_string(),
            node_index: 0,
            index: None,
            raw_children: Arc::new(Vec::new()),
            data: None,
            on_link_press: None,
            lists_prefixes_renderers: ListPrefixRenderers::default(),
            parent_wrapper: ParentWrapper::View,
            em_size: DEFAULT_BASE_FONT_SIZE,
            static_content_max_width: 0.0,
            tags_styles: Arc::new(HashMap::new()),
            classes_styles: Arc::new(HashMap::new()),
            ignored_styles: Arc::new(Vec::new()),
            embed_host: None,
            platform: Platform::Other,
            resolver: Arc::new(CascadeResolver),
        }
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("allow_font_scaling", &self.allow_font_scaling)
            .field("base_font_style", &self.base_font_style)
            .field("key", &self.key)
            .field("node_index", &self.node_index)
            .field("index", &self.index)
            .field("raw_children", &self.raw_children.len())
            .field("data", &self.data)
            .field("on_link_press", &self.on_link_press.is_some())
            .field("lists_prefixes_renderers", &self.lists_prefixes_renderers)
            .field("parent_wrapper", &self.parent_wrapper)
            .field("em_size", &self.em_size)
            .field("static_content_max_width", &self.static_content_max_width)
            .field("embed_host", &self.embed_host)
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl RenderContext {
    pub fn from_config(config: &RenderConfig) -> Self {
        if let Some(categories) = &config.diagnostics {
            if !configure_diagnostics(categories) {
                warn!(
                    %categories,
                    "diagnostics categories already fixed; configured value ignored"
                );
            }
        }
        Self {
            allow_font_scaling: config.text.allow_font_scaling,
            base_font_style: Some(BaseFontStyle {
                font_size: Some(config.text.base_font_size),
            }),
            em_size: config.text.em_size,
            static_content_max_width: config.layout.static_content_max_width.unwrap_or(0.0),
            ignored_styles: Arc::new(config.styles.ignored.clone()),
            embed_host: config.frame.host.clone().map(EmbedHost::new),
            platform: config.platform,
            ..Self::default()
        }
    }

    /// Base font size, defaulting to 16 when the base style leaves it unset.
    pub fn base_font_size(&self) -> Result<f64> {
        let base = self
            .base_font_style
            .as_ref()
            .ok_or(RenderError::MissingContext("base_font_style"))?;
        Ok(base.font_size.unwrap_or(DEFAULT_BASE_FONT_SIZE))
    }

    /// Resolve a style through the configured resolver.
    pub fn resolve_style(
        &self,
        tag_name: &str,
        attributes: &Attributes,
        category: StyleCategory,
        additional: &[Style],
    ) -> Style {
        self.resolver.resolve(&StyleRequest {
            tag_name,
            attributes,
            context: self,
            category,
            additional,
        })
    }

    /// Copy for rendering `node`, the `index`-th child of the current node.
    pub fn for_child(&self, index: usize, node: &MarkupNode) -> Self {
        Self {
            key: format!("{}-{}-{}", self.key, index, node.tag_name),
            node_index: index,
            index: None,
            data: node.data.clone(),
            ..self.clone()
        }
    }

    /// Copy with the child position set, as handed to prefix renderers.
    pub fn with_index(&self, index: usize) -> Self {
        Self {
            index: Some(index),
            ..self.clone()
        }
    }

    pub fn with_raw_children(mut self, raw_children: Vec<MarkupNode>) -> Self {
        self.raw_children = Arc::new(raw_children);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_node_index(mut self, node_index: usize) -> Self {
        self.node_index = node_index;
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_parent_wrapper(mut self, parent_wrapper: ParentWrapper) -> Self {
        self.parent_wrapper = parent_wrapper;
        self
    }

    pub fn with_base_font_size(mut self, font_size: f64) -> Self {
        self.base_font_style = Some(BaseFontStyle {
            font_size: Some(font_size),
        });
        self
    }

    pub fn with_link_press<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PressEvent, &str, &Attributes) + Send + Sync + 'static,
    {
        self.on_link_press = Some(Arc::new(callback));
        self
    }

    pub fn with_ul_prefix(mut self, renderer: RendererFn) -> Self {
        self.lists_prefixes_renderers.ul = Some(renderer);
        self
    }

    pub fn with_ol_prefix(mut self, renderer: RendererFn) -> Self {
        self.lists_prefixes_renderers.ol = Some(renderer);
        self
    }

    pub fn with_tag_style(mut self, tag: impl Into<String>, style: Style) -> Self {
        Arc::make_mut(&mut self.tags_styles).insert(tag.into(), style);
        self
    }

    pub fn with_class_style(mut self, class: impl Into<String>, style: Style) -> Self {
        Arc::make_mut(&mut self.classes_styles).insert(class.into(), style);
        self
    }

    pub fn with_embed_host(mut self, host: EmbedHost) -> Self {
        self.embed_host = Some(host);
        self
    }

    pub fn with_static_content_max_width(mut self, width: f64) -> Self {
        self.static_content_max_width = width;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn StyleResolver>) -> Self {
        self.resolver = resolver;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_font_size_defaults_to_sixteen() {
        let mut ctx = RenderContext::default();
        ctx.base_font_style = Some(BaseFontStyle { font_size: None });
        assert_eq!(ctx.base_font_size(), Ok(16.0));
    }

    #[test]
    fn missing_base_font_style_is_a_contract_violation() {
        let mut ctx = RenderContext::default();
        ctx.base_font_style = None;
        assert_eq!(
            ctx.base_font_size(),
            Err(RenderError::MissingContext("base_font_style"))
        );
    }

    #[test]
    fn with_index_leaves_the_original_untouched() {
        let ctx = RenderContext::default().with_key("k");
        let derived = ctx.with_index(3);
        assert_eq!(derived.index, Some(3));
        assert_eq!(derived.key, "k");
        assert_eq!(ctx.index, None);
    }

    #[test]
    fn for_child_derives_key_and_data() {
        let parent = RenderContext::default().with_key("doc").with_data("parent");
        let child = parent.for_child(2, &MarkupNode::text("hi"));
        assert_eq!(child.key, "doc-2-#text");
        assert_eq!(child.node_index, 2);
        assert_eq!(child.data.as_deref(), Some("hi"));

        let element = parent.for_child(0, &MarkupNode::element("p"));
        assert_eq!(element.data, None);
    }

    #[test]
    fn from_config_carries_layout_and_host() {
        let mut config = RenderConfig::default();
        config.text.base_font_size = 20.0;
        config.layout.static_content_max_width = Some(300.0);
        config.frame.host = Some("WebView".to_string());
        config.platform = Platform::Android;

        let ctx = RenderContext::from_config(&config);
        assert_eq!(ctx.base_font_size(), Ok(20.0));
        assert_eq!(ctx.static_content_max_width, 300.0);
        assert_eq!(ctx.embed_host, Some(EmbedHost::new("WebView")));
        assert_eq!(ctx.platform, Platform::Android);
    }
}
