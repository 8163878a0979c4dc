//! Render the landing page next to the current directory.
//!
//! Run with: `cargo run --example render_landing`

use tcg_page::{AssetMode, render_default_page};

fn main() {
    let html = render_default_page(&AssetMode::default());
    let draft = render_default_page(&AssetMode::Placeholder);

    std::fs::write("landing.html", &html).expect("Failed to write landing.html");
    std::fs::write("landing-placeholders.html", &draft)
        .expect("Failed to write landing-placeholders.html");

    println!("Pages written: landing.html ({} bytes)", html.len());
    println!("               landing-placeholders.html ({} bytes)", draft.len());
}
