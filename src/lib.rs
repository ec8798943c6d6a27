//! Markup tag renderers with file and environment configuration.

pub use rune_tags_config as config;
pub use rune_tags_core::*;

use rune_tags_config::RenderConfig;

/// Build a render context from `rune-tags.toml` and `RUNE_TAGS_*` overrides.
pub fn context_from_environment() -> RenderContext {
    RenderContext::from_config(&RenderConfig::load())
}
