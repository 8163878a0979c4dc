//! # tcg-page
//!
//! Leptos SSR renderer for the TCG Studios landing page.
//!
//! The page is one static document: header, hero banner, feature grid, pack
//! showcase, upcoming releases, company information and footer. Rendering is
//! a pure function of the display data and the asset mode, so the same
//! inputs always produce the same HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use tcg_page::{render_default_page, AssetMode};
//!
//! // Real images served from ./assets
//! let html = render_default_page(&AssetMode::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // The same page with labeled placeholder boxes instead of images
//! let draft = render_default_page(&AssetMode::Placeholder);
//! assert!(!draft.contains("<img"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Display records and the canonical [`PageContent`]
//! - [`assets`] - Logical image names, manifest and slot resolution
//! - [`components`] - Leptos components, one per page block
//! - [`styles`] - Inline CSS
//! - [`audit`] - Reads a rendered page back and checks its structure
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is involved, and the document carries no
//! scripts.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assets;
pub mod audit;
pub mod components;
pub mod styles;
pub mod types;

pub use assets::{AssetManifest, AssetMode, AssetName, ImageRef};
pub use types::PageContent;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the landing page to a complete HTML document.
///
/// Missing images never fail the render: a slot whose name is absent from
/// the manifest comes out empty.
///
/// # Example
///
/// ```rust
/// use tcg_page::{render_page, AssetManifest, AssetMode, AssetName, PageContent};
///
/// let mut manifest = AssetManifest::with_base("https://cdn.example.com/tcg");
/// manifest.remove(AssetName::Hero);
///
/// let html = render_page(&PageContent::default(), &AssetMode::Resolved(manifest));
/// assert!(html.contains("https://cdn.example.com/tcg/logo.png"));
/// assert!(!html.contains("hero-card-animation.webp"));
/// ```
pub fn render_page(content: &PageContent, mode: &AssetMode) -> String {
    let doc = view! {
        <PageDocument content=content.clone() mode=mode.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the page as designed.
pub fn render_default_page(mode: &AssetMode) -> String {
    render_page(&PageContent::default(), mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{Expectations, audit_document};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn resolved() -> AssetMode {
        AssetMode::Resolved(AssetManifest::with_base("assets"))
    }

    #[test]
    fn renders_complete_document() {
        let html = render_default_page(&resolved());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>TCG Studios - Epic Card Battles</title>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn landing_page_end_to_end() {
        let audit = audit_document(&render_default_page(&resolved()));

        assert_eq!(audit.nav_links, 3);
        assert_eq!(audit.hero_actions, vec!["Start Playing", "Watch Trailer"]);
        assert_eq!(audit.features, 3);
        assert_eq!(audit.pack_prices, vec!["$9.99", "$24.99", "$49.99"]);
        assert_eq!(
            audit.release_dates,
            vec!["March 15, 2026", "April 22, 2026", "May 10, 2026"]
        );
        assert_eq!(audit.release_actions, vec!["Pre-order", "Notify Me", "Coming Soon"]);
        assert_eq!(audit.info_columns, 4);
        assert_eq!(audit.footer_links, 3);
        assert!(audit.problems(&Expectations::default()).is_empty());
    }

    #[test]
    fn packs_render_in_ascending_price_order() {
        let audit = audit_document(&render_default_page(&resolved()));
        let cents: Vec<u32> = audit
            .pack_prices
            .iter()
            .map(|price| {
                let digits: String = price.chars().filter(char::is_ascii_digit).collect();
                digits.parse().unwrap()
            })
            .collect();

        assert!(cents.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", cents);
    }

    #[test]
    fn releases_render_in_date_order() {
        let audit = audit_document(&render_default_page(&resolved()));
        let dates: Vec<NaiveDate> = audit
            .release_dates
            .iter()
            .map(|date| NaiveDate::parse_from_str(date, "%B %d, %Y").unwrap())
            .collect();

        assert_eq!(dates.len(), 3);
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    }

    #[test]
    fn rendering_is_idempotent() {
        let mode = resolved();
        let first = render_default_page(&mode);
        let second = render_default_page(&mode);
        assert_eq!(first, second);

        let draft = render_default_page(&AssetMode::Placeholder);
        assert_eq!(draft, render_default_page(&AssetMode::Placeholder));
    }

    #[test]
    fn every_anchor_has_a_target() {
        for mode in [resolved(), AssetMode::Placeholder] {
            let audit = audit_document(&render_default_page(&mode));
            assert!(audit.dangling_anchors.is_empty(), "{:?}", audit.dangling_anchors);
        }
    }

    #[test]
    fn section_anchors_land_on_sections() {
        let html = render_default_page(&resolved());
        assert!(html.contains(r#"<section id="shop""#));
        assert!(html.contains(r#"<section id="about""#));
        assert!(html.contains(r#"id="login""#));
        for legal in ["privacy", "terms", "legal"] {
            assert!(html.contains(&format!(r#"id="{}""#, legal)), "{}", legal);
        }
    }

    #[test]
    fn resolved_mode_renders_every_image() {
        let html = render_default_page(&resolved());
        let audit = audit_document(&html);

        assert_eq!(audit.images, AssetName::ALL.len());
        assert_eq!(audit.placeholders, 0);
        for name in AssetName::ALL {
            assert!(html.contains(&format!("assets/{}", name.file_name())), "{}", name);
        }
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn placeholder_mode_renders_boxes_only() {
        let html = render_default_page(&AssetMode::Placeholder);
        let audit = audit_document(&html);

        assert_eq!(audit.images, 0);
        assert_eq!(audit.placeholders, AssetName::ALL.len());
        assert!(html.contains("Shadow Realm expansion thumbnail"));
        // Same page otherwise
        assert!(audit.problems(&Expectations::default()).is_empty());
    }

    #[test]
    fn missing_asset_leaves_slot_empty() {
        let mut manifest = AssetManifest::with_base("assets");
        manifest.remove(AssetName::PackPremium);
        manifest.remove(AssetName::Logo);

        let html = render_default_page(&AssetMode::Resolved(manifest));
        let audit = audit_document(&html);

        assert_eq!(audit.images, AssetName::ALL.len() - 2);
        assert_eq!(audit.empty_slots, 2);
        assert!(!html.contains("pack-premium.webp"));
        // The pack itself is still there
        assert_eq!(audit.pack_prices.len(), 3);
        assert!(html.contains("Premium Pack"));
    }

    #[test]
    fn newsletter_is_an_inert_stub() {
        let html = render_default_page(&resolved());
        assert!(html.contains(r#"placeholder="your@email.com""#));
        assert!(html.contains("Subscribe"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn renders_custom_content() {
        let mut content = PageContent::default();
        content.packs.truncate(1);
        content.packs[0].price = "$1.00".into();

        let audit = audit_document(&render_page(&content, &resolved()));
        assert_eq!(audit.pack_prices, vec!["$1.00"]);
        assert!(audit.problems(&Expectations::from_content(&content)).is_empty());
        assert_eq!(
            audit.problems(&Expectations::default()),
            vec![
                "expected 3 packs, found 1".to_string(),
                r#"pack price 1: expected "$9.99", found "$1.00""#.to_string(),
            ]
        );
    }

    #[test]
    fn custom_alt_text_follows_the_record() {
        let mut content = PageContent::default();
        content.packs[0].title = "Mythic Pack".into();
        content.packs[0].image = ImageRef::with_alt(AssetName::PackStarter, "Mythic Pack art");

        let html = render_page(&content, &resolved());
        assert!(html.contains(r#"alt="Mythic Pack art""#));
        assert!(!html.contains("Starter Pack - Basic card pack for beginners"));

        let draft = render_page(&content, &AssetMode::Placeholder);
        assert!(draft.contains(">Mythic Pack art</div>"));
        assert!(!draft.contains("Starter Pack - Basic card pack for beginners"));
    }

    /// Sources listed by the `img-src` directive of the emitted CSP meta tag.
    fn img_sources(html: &str) -> Vec<String> {
        let meta = html
            .split("<meta")
            .find(|tag| tag.contains("Content-Security-Policy"))
            .unwrap();
        let directive = meta
            .split(';')
            .map(str::trim)
            .find_map(|d| d.strip_prefix("img-src "))
            .unwrap();
        directive.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn csp_allows_any_configured_image_origin() {
        let mut manifest = AssetManifest::with_base("http://cdn.example.com/tcg");
        manifest.insert(AssetName::Hero, "https://video.example.com/hero.webp");

        let html = render_page(&PageContent::default(), &AssetMode::Resolved(manifest));
        assert!(html.contains(r#"src="http://cdn.example.com/tcg/logo.png""#));

        let sources = img_sources(&html);
        assert!(sources.iter().any(|s| s == "*"), "{:?}", sources);
        assert!(sources.iter().any(|s| s == "data:"), "{:?}", sources);
    }
}
