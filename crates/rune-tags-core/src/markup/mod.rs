//! Parsed markup input consumed by the renderers.

mod html;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use html::parse_html;

/// Raw element attributes, name to string value.
pub type Attributes = BTreeMap<String, String>;

/// Tag name reserved for raw text runs.
pub const TEXT_TAG: &str = "#text";

/// One element (or text run) of the parsed markup tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkupNode {
    pub tag_name: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub children: Vec<MarkupNode>,
    /// Tag name of the enclosing element. Lookup only; used to classify list children.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_tag: Option<String>,
    /// Raw text content for text runs.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl MarkupNode {
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn text(data: impl Into<String>) -> Self {
        Self {
            tag_name: TEXT_TAG.to_string(),
            data: Some(data.into()),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child, recording this node's tag as the child's parent tag.
    pub fn with_child(mut self, mut child: MarkupNode) -> Self {
        child.parent_tag = Some(self.tag_name.clone());
        self.children.push(child);
        self
    }

    pub fn with_children(self, children: impl IntoIterator<Item = MarkupNode>) -> Self {
        children
            .into_iter()
            .fold(self, |node, child| node.with_child(child))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_text(&self) -> bool {
        self.tag_name == TEXT_TAG
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(data) = &self.data {
            out.push_str(data);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}
