use std::collections::HashSet;
use std::sync::OnceLock;

static CATEGORIES: OnceLock<HashSet<String>> = OnceLock::new();

/// Whether opt-in diagnostics are enabled for `category`.
///
/// Categories come from the comma-separated `RUNE_DIAGNOSTICS` environment
/// variable unless [`configure_diagnostics`] ran first; `all` enables every
/// category.
pub fn diagnostics_enabled(category: &str) -> bool {
    let set = CATEGORIES.get_or_init(|| {
        let raw = std::env::var("RUNE_DIAGNOSTICS").unwrap_or_default();
        parse_categories(&raw)
    });
    set.contains("all") || set.contains(&category.to_ascii_lowercase())
}

/// Fix the enabled categories from configuration. The first call wins; once
/// any category was queried the set no longer changes. Returns `false` when
/// `raw` was not applied.
pub fn configure_diagnostics(raw: &str) -> bool {
    CATEGORIES.set(parse_categories(raw)).is_ok()
}

fn parse_categories(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_trimmed_and_lowercased() {
        let set = parse_categories(" Style, ,LIST ");
        assert!(set.contains("style"));
        assert!(set.contains("list"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn later_configuration_is_rejected() {
        configure_diagnostics("list");
        assert!(!configure_diagnostics("style"));
    }
}
