/// Render an HTML file (or a built-in sample) and print the descriptors as JSON.
///
/// Run with: cargo run -p rune-tags-core --example render_html [-- path/to/file.html]
use anyhow::{Context, Result};
use rune_tags_config::RenderConfig;
use rune_tags_core::{RenderContext, render_html};

const SAMPLE: &str = r#"
<p>Shopping <a href="https://example.com/list">list</a>:</p>
<ol>
  <li>Flour</li>
  <li>Eggs</li>
  <ol><li>Free range</li></ol>
</ol>
<ul><li>Optional: <b>sugar</b></li></ul>
<pre>let total = 3;</pre>
"#;

fn main() -> Result<()> {
    let html = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => SAMPLE.to_string(),
    };

    let ctx = RenderContext::from_config(&RenderConfig::load());
    let views = render_html(&html, &ctx)?;
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}
