//! Error types for the tag renderers.

use thiserror::Error;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Contract violations raised while rendering.
///
/// Conditions that simply render nothing (an image without `src`, a frame
/// without a host) are not errors; renderers return `Ok(None)` for those.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A rendered list child has no raw sibling at the same position.
    #[error("list child {index} has no raw sibling ({rendered} rendered children, {raw} raw)")]
    MisalignedChildren {
        index: usize,
        rendered: usize,
        raw: usize,
    },

    /// The render context lacks a field the renderer requires.
    #[error("render context is missing required field `{0}`")]
    MissingContext(&'static str),
}
