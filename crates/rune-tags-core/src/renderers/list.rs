use serde::{Deserialize, Serialize};
use tracing::info;

use crate::context::RenderContext;
use crate::diagnostics::diagnostics_enabled;
use crate::error::{RenderError, Result};
use crate::markup::{Attributes, MarkupNode};
use crate::style::{Style, StyleCategory};
use crate::view::{TextSpec, ViewDescriptor};

/// Left indent of a list nested directly inside a list of the same type.
const NESTED_LIST_INDENT: f64 = 20.0;
/// Gap between a prefix marker and the item content.
const PREFIX_GAP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// How a list child relates to the list containing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListItemClassification {
    /// `li` under `ul`.
    BulletItem,
    /// `li` under `ol`.
    NumberedItem,
    /// `ul` directly under `ul`.
    NestedUnorderedList,
    /// `ol` directly under `ol`.
    NestedOrderedList,
    Other,
}

impl ListItemClassification {
    fn is_nested_list(self) -> bool {
        matches!(
            self,
            ListItemClassification::NestedUnorderedList | ListItemClassification::NestedOrderedList
        )
    }
}

/// Classify a raw list child by its `(parent tag, tag)` pair.
pub fn classify_list_child(raw: &MarkupNode) -> ListItemClassification {
    match (raw.parent_tag.as_deref(), raw.tag_name.as_str()) {
        (Some("ul"), "li") => ListItemClassification::BulletItem,
        (Some("ol"), "li") => ListItemClassification::NumberedItem,
        (Some("ul"), "ul") => ListItemClassification::NestedUnorderedList,
        (Some("ol"), "ol") => ListItemClassification::NestedOrderedList,
        _ => ListItemClassification::Other,
    }
}

/// `<ul>` / `<ol>`: wraps every rendered child in a row made of its prefix
/// marker and a flexible content column.
///
/// The raw children in `ctx.raw_children` must be index-aligned with
/// `children`; a rendered child without a raw sibling is
/// [`RenderError::MisalignedChildren`]. The numbered-item counter lives only
/// for this call.
pub fn render_list(
    kind: ListKind,
    attributes: &Attributes,
    children: Option<&[ViewDescriptor]>,
    style: &Style,
    ctx: &RenderContext,
) -> Result<Option<ViewDescriptor>> {
    let container_style = ctx.resolve_style(kind.tag(), attributes, StyleCategory::View, &[]);
    let base_font_size = ctx.base_font_size()?;
    let children = children.unwrap_or_default();

    let (rows, numbered) = children.iter().enumerate().try_fold(
        (Vec::with_capacity(children.len()), 0usize),
        |(mut rows, counter), (index, child)| -> Result<_> {
            let raw = ctx
                .raw_children
                .get(index)
                .ok_or(RenderError::MisalignedChildren {
                    index,
                    rendered: children.len(),
                    raw: ctx.raw_children.len(),
                })?;
            let classification = classify_list_child(raw);
            let prefix_args = PrefixArgs {
                attributes,
                children,
                style,
                ctx,
                index,
                base_font_size,
            };

            let (prefix, counter) = match classification {
                ListItemClassification::BulletItem => (bullet_prefix(&prefix_args)?, counter),
                ListItemClassification::NumberedItem => {
                    let counter = counter + 1;
                    (numbered_prefix(&prefix_args, counter)?, counter)
                }
                _ => (None, counter),
            };

            rows.push(wrap_row(
                prefix,
                child.clone(),
                classification.is_nested_list(),
                row_key(ctx, index),
            ));
            Ok((rows, counter))
        },
    )?;

    if diagnostics_enabled("list") {
        info!(
            key = %ctx.key,
            tag = kind.tag(),
            rows = rows.len(),
            numbered,
            "diagnostics: rendered list"
        );
    }

    Ok(Some(
        ViewDescriptor::container(container_style, rows).with_key(ctx.key.clone()),
    ))
}

/// Arguments handed to prefix renderers, caller-supplied or built-in.
struct PrefixArgs<'a> {
    attributes: &'a Attributes,
    children: &'a [ViewDescriptor],
    style: &'a Style,
    ctx: &'a RenderContext,
    index: usize,
    base_font_size: f64,
}

fn bullet_prefix(args: &PrefixArgs<'_>) -> Result<Option<ViewDescriptor>> {
    if let Some(renderer) = &args.ctx.lists_prefixes_renderers.ul {
        return renderer(
            args.attributes,
            Some(args.children),
            args.style,
            &args.ctx.with_index(args.index),
        );
    }
    let size = args.base_font_size / 2.8;
    let disc = Style::new()
        .with("marginRight", PREFIX_GAP)
        .with("width", size)
        .with("height", size)
        .with("marginTop", args.base_font_size / 2.0)
        .with("borderRadius", size)
        .with("backgroundColor", "black");
    Ok(Some(ViewDescriptor::container(disc, Vec::new())))
}

fn numbered_prefix(args: &PrefixArgs<'_>, ordinal: usize) -> Result<Option<ViewDescriptor>> {
    if let Some(renderer) = &args.ctx.lists_prefixes_renderers.ol {
        return renderer(
            args.attributes,
            Some(args.children),
            args.style,
            &args.ctx.with_index(args.index),
        );
    }
    let style = Style::new()
        .with("marginRight", PREFIX_GAP)
        .with("fontSize", args.base_font_size);
    Ok(Some(ViewDescriptor::text(
        style,
        TextSpec {
            content: Some(format!("{ordinal}.")),
            allow_font_scaling: args.ctx.allow_font_scaling,
            ..TextSpec::default()
        },
    )))
}

fn wrap_row(
    prefix: Option<ViewDescriptor>,
    child: ViewDescriptor,
    nested: bool,
    key: String,
) -> ViewDescriptor {
    let mut row_style = Style::new().with("flexDirection", "row");
    if nested {
        row_style.set("marginBottom", 0.0);
        row_style.set("paddingLeft", NESTED_LIST_INDENT);
    }
    let content = ViewDescriptor::container(Style::new().with("flex", 1.0), vec![child]);
    let cells = prefix.into_iter().chain(std::iter::once(content)).collect();
    ViewDescriptor::container(row_style, cells).with_key(key)
}

fn row_key(ctx: &RenderContext, index: usize) -> String {
    format!("list-{}-{}-{}", ctx.node_index, index, ctx.key)
}
