use std::ops::Deref;

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};
use tracing::info;

use crate::diagnostics::diagnostics_enabled;

use super::MarkupNode;

const SKIPPED_TAGS: &[&str] = &["script", "style", "head", "meta", "link", "title"];

/// Build a markup tree from an HTML document or fragment.
///
/// Returns the children of `<body>`. Whitespace-only text is dropped and
/// whitespace runs collapse to one space, except below `<pre>`.
pub fn parse_html(html: &str) -> Vec<MarkupNode> {
    let document = Html::parse_document(html);
    let Some(body) = find_body(&document) else {
        return Vec::new();
    };
    let nodes = convert_children(body, "body", false);
    if diagnostics_enabled("html") {
        info!(top_level = nodes.len(), "diagnostics: parsed markup tree");
    }
    nodes
}

fn find_body(document: &Html) -> Option<NodeRef<'_, Node>> {
    let selector = Selector::parse("body").ok()?;
    document
        .select(&selector)
        .next()
        .map(|body| *body.deref())
}

fn convert_children(node: NodeRef<'_, Node>, parent_tag: &str, preformatted: bool) -> Vec<MarkupNode> {
    node.children()
        .filter_map(|child| convert_node(child, preformatted))
        .map(|mut child| {
            child.parent_tag = Some(parent_tag.to_string());
            child
        })
        .collect()
}

fn convert_node(node: NodeRef<'_, Node>, preformatted: bool) -> Option<MarkupNode> {
    match node.value() {
        Node::Text(text) => {
            let raw: &str = text.deref();
            if raw.trim().is_empty() && !preformatted {
                return None;
            }
            let data = if preformatted {
                raw.to_string()
            } else {
                collapse_whitespace(raw)
            };
            Some(MarkupNode::text(data))
        }
        Node::Element(element) => {
            let tag = element.name().to_ascii_lowercase();
            if SKIPPED_TAGS.contains(&tag.as_str()) {
                return None;
            }
            let mut out = MarkupNode::element(tag.as_str());
            for (name, value) in element.attrs() {
                out.attributes
                    .insert(name.to_ascii_lowercase(), value.to_string());
            }
            out.children = convert_children(node, &tag, preformatted || tag == "pre");
            Some(out)
        }
        _ => None,
    }
}

fn collapse_whitespace(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut prev_was_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}
