/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-tags-config --example print_config

fn main() {
    let config = rune_tags_config::RenderConfig::load();

    println!("=== Rune Tags Configuration ===\n");

    println!("Text Settings:");
    println!("  Base Font Size: {}", config.text.base_font_size);
    println!("  Em Size: {}", config.text.em_size);
    println!("  Allow Font Scaling: {}", config.text.allow_font_scaling);
    println!();

    println!("Layout Settings:");
    println!(
        "  Static Content Max Width: {:?}",
        config.layout.static_content_max_width
    );
    println!();

    println!("Platform: {:?}", config.platform);
    println!("Frame Host: {:?}", config.frame.host);
    println!("Ignored Styles: {:?}", config.styles.ignored);
    println!("Diagnostics: {:?}", config.diagnostics);
}
