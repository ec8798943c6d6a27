//! View descriptors: the renderer output handed to the host framework.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::LinkPressCallback;
use crate::markup::Attributes;
use crate::style::Style;

/// One piece of UI for the host framework to paint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewDescriptor {
    /// Reconciliation key; unique among siblings.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(flatten)]
    pub kind: ViewKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewKind {
    /// Styled block container.
    Container {
        #[serde(default)]
        children: Vec<ViewDescriptor>,
    },
    Text(TextSpec),
    Touchable(TouchableSpec),
    Image(ImageSpec),
    EmbeddedFrame(FrameSpec),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextSpec {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewDescriptor>,
    #[serde(default)]
    pub allow_font_scaling: bool,
    #[serde(skip)]
    pub on_press: Option<PressHandler>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TouchableSpec {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewDescriptor>,
    #[serde(skip)]
    pub on_press: Option<PressHandler>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSpec {
    pub source: ImageSource,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    pub uri: String,
    #[serde(default)]
    pub cache: CachePolicy,
}

/// Fetch policy requested from the image loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CachePolicy {
    #[default]
    Default,
    ForceCache,
    Reload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSpec {
    /// Host component displaying the frame.
    pub host: String,
    pub source: FrameSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSource {
    /// Inline document (`srcdoc`).
    Html(String),
    /// Remote document; `None` when the frame has no `src`.
    Uri(Option<String>),
}

/// Press event forwarded from the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PressEvent {
    pub x: f64,
    pub y: f64,
}

/// Press behavior of a link. Pressing forwards to the link-press callback
/// only when both the callback and a non-empty `href` exist; otherwise it
/// does nothing.
#[derive(Clone, Default)]
pub struct PressHandler {
    callback: Option<LinkPressCallback>,
    href: Option<String>,
    attributes: Attributes,
}

impl PressHandler {
    pub fn new(callback: Option<LinkPressCallback>, attributes: &Attributes) -> Self {
        Self {
            callback,
            href: attributes.get("href").filter(|href| !href.is_empty()).cloned(),
            attributes: attributes.clone(),
        }
    }

    /// Whether pressing has any effect.
    pub fn is_active(&self) -> bool {
        self.callback.is_some() && self.href.is_some()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn press(&self, event: &PressEvent) {
        if let (Some(callback), Some(href)) = (&self.callback, &self.href) {
            callback(event, href, &self.attributes);
        }
    }
}

impl fmt::Debug for PressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PressHandler")
            .field("href", &self.href)
            .field("active", &self.is_active())
            .finish()
    }
}

impl ViewDescriptor {
    pub fn container(style: Style, children: Vec<ViewDescriptor>) -> Self {
        Self {
            key: None,
            style,
            kind: ViewKind::Container { children },
        }
    }

    pub fn text(style: Style, spec: TextSpec) -> Self {
        Self {
            key: None,
            style,
            kind: ViewKind::Text(spec),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn children(&self) -> &[ViewDescriptor] {
        match &self.kind {
            ViewKind::Container { children } => children,
            ViewKind::Text(spec) => &spec.children,
            ViewKind::Touchable(spec) => &spec.children,
            ViewKind::Image(_) | ViewKind::EmbeddedFrame(_) => &[],
        }
    }

    /// Direct text content of a text or touchable node.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text(spec) => spec.content.as_deref(),
            ViewKind::Touchable(spec) => spec.content.as_deref(),
            _ => None,
        }
    }

    pub fn on_press(&self) -> Option<&PressHandler> {
        match &self.kind {
            ViewKind::Text(spec) => spec.on_press.as_ref(),
            ViewKind::Touchable(spec) => spec.on_press.as_ref(),
            _ => None,
        }
    }

    /// All text content of this subtree, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| {
            if let Some(content) = node.content() {
                out.push_str(content);
            }
        });
        out
    }

    /// Visit this node and its descendants in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewDescriptor)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    pub fn find_by_key(&self, key: &str) -> Option<&ViewDescriptor> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_key(key))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn link_attrs(href: &str) -> Attributes {
        Attributes::from([("href".to_string(), href.to_string())])
    }

    #[test]
    fn press_without_callback_is_a_no_op() {
        let handler = PressHandler::new(None, &link_attrs("http://a"));
        assert!(!handler.is_active());
        handler.press(&PressEvent::default());
    }

    #[test]
    fn press_with_empty_href_is_a_no_op() {
        let calls = Arc::new(Mutex::new(0));
        let seen = calls.clone();
        let callback: LinkPressCallback = Arc::new(move |_: &PressEvent, _: &str, _: &Attributes| {
            *seen.lock().unwrap() += 1
        });
        let handler = PressHandler::new(Some(callback), &link_attrs(""));
        handler.press(&PressEvent::default());
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn serializes_with_type_tag_and_skips_handlers() {
        let node = ViewDescriptor::text(
            Style::new().with("flex", 1.0),
            TextSpec {
                content: Some("\n".to_string()),
                allow_font_scaling: true,
                on_press: Some(PressHandler::default()),
                ..TextSpec::default()
            },
        )
        .with_key("br");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "key": "br",
                "style": { "flex": 1.0 },
                "type": "text",
                "content": "\n",
                "allow_font_scaling": true
            })
        );
    }

    #[test]
    fn text_content_and_lookup_walk_the_tree() {
        let leaf = |text: &str| {
            ViewDescriptor::text(
                Style::new(),
                TextSpec {
                    content: Some(text.to_string()),
                    ..TextSpec::default()
                },
            )
        };
        let tree = ViewDescriptor::container(
            Style::new(),
            vec![leaf("a").with_key("x"), leaf("b")],
        );
        assert_eq!(tree.text_content(), "ab");
        assert_eq!(tree.find_by_key("x").and_then(|n| n.content()), Some("a"));
        assert!(tree.find_by_key("missing").is_none());
    }
}
