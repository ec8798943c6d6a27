//! Host style objects and the cascade that merges them.

mod defaults;
mod inline;
mod resolver;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use defaults::default_tag_style;
pub use inline::{css_property_to_key, is_allowed_for, is_text_property, parse_inline_style};
pub use resolver::{CascadeResolver, StyleRequest, StyleResolver, class_styles};

/// A single style property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Keyword(String),
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(value) => Some(*value),
            StyleValue::Keyword(_) => None,
        }
    }

    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            StyleValue::Keyword(value) => Some(value),
            StyleValue::Number(_) => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Keyword(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Keyword(value)
    }
}

/// A merged host style: camelCase property names (`marginRight`, `fontSize`)
/// mapped to values. Renderers attach it to descriptors as an opaque value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, StyleValue>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_number)
    }

    pub fn keyword(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_keyword)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Overlay `other` on top of `self`; properties of `other` win.
    pub fn extend_from(&mut self, other: &Style) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Text properties only, the part of a style nested text inherits.
    pub fn inheritable(&self) -> Style {
        Style(
            self.0
                .iter()
                .filter(|(key, _)| is_text_property(key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Style(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// The host component family a style is destined for; it decides which
/// properties an inline `style` attribute may contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleCategory {
    Text,
    View,
    Image,
}

/// Origin of a style fragment, in ascending precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StyleSource {
    /// Built-in defaults for the tag.
    TagDefault,
    /// Caller-supplied rules for the tag name.
    TagRule,
    /// Caller-supplied rules for the element's classes.
    ClassRule,
    /// The element's `style` attribute.
    Inline,
    /// Fragments added by the renderer itself.
    Additional,
}

/// Merge fragments by precedence. Fragments are applied in ascending
/// [`StyleSource`] order; fragments of equal source keep their given order.
/// Later fragments override identical properties of earlier ones.
pub fn merge_styles<'a>(fragments: impl IntoIterator<Item = (StyleSource, &'a Style)>) -> Style {
    let mut ordered: Vec<(StyleSource, &Style)> = fragments.into_iter().collect();
    // Stable sort: equal sources stay in call order.
    ordered.sort_by_key(|(source, _)| *source);
    ordered
        .into_iter()
        .fold(Style::new(), |mut merged, (_, fragment)| {
            merged.extend_from(fragment);
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_applies_precedence_regardless_of_argument_order() {
        let inline = Style::new().with("color", "red");
        let tag_default = Style::new().with("color", "black").with("fontSize", 14.0);
        let class_rule = Style::new().with("fontSize", 18.0).with("color", "blue");
        let merged = merge_styles([
            (StyleSource::Inline, &inline),
            (StyleSource::TagDefault, &tag_default),
            (StyleSource::ClassRule, &class_rule),
        ]);
        assert_eq!(merged.keyword("color"), Some("red"));
        assert_eq!(merged.number("fontSize"), Some(18.0));
    }

    #[test]
    fn merge_keeps_call_order_within_one_source() {
        let first = Style::new().with("height", 10.0);
        let second = Style::new().with("height", 20.0);
        let merged = merge_styles([
            (StyleSource::Additional, &first),
            (StyleSource::Additional, &second),
        ]);
        assert_eq!(merged.number("height"), Some(20.0));
    }

    #[test]
    fn inheritable_keeps_text_properties_only() {
        let style = Style::new()
            .with("color", "red")
            .with("fontWeight", "bold")
            .with("marginTop", 4.0);
        let inherited = style.inheritable();
        assert_eq!(inherited.len(), 2);
        assert!(!inherited.contains("marginTop"));
    }

    #[test]
    fn style_serializes_as_flat_map() {
        let style = Style::new().with("flex", 1.0).with("fontFamily", "Menlo");
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json, serde_json::json!({ "flex": 1.0, "fontFamily": "Menlo" }));
    }
}
