//! Leptos UI components for the landing page.
//!
//! Each block of the page is a `#[component]` taking owned display data.
//! They are composed once, top to bottom, by [`PageDocument`]:
//!
//! ```text
//! PageDocument
//! ├── SiteHeader        (logo, nav links, #login target)
//! └── main
//!     ├── HeroBanner
//!     ├── FeaturesSection
//!     ├── PacksSection          #shop
//!     ├── ReleasesSection
//!     └── CompanyInfoSection    #about
//! └── SiteFooter        (copyright, legal links and their targets)
//! ```
//!
//! Every image slot goes through [`AssetSlot`], which is where the
//! placeholder and resolved variants of the page differ.
//!
//! # Usage
//!
//! Components are normally reached through [`crate::render_page`], but can
//! be rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use tcg_page::components::PacksSection;
//!
//! view! { <PacksSection heading="Available Now".into() packs=packs mode=mode /> }
//! ```

mod asset_slot;
mod company;
mod document;
mod features;
mod footer;
mod header;
mod hero;
mod packs;
mod releases;
mod text;

pub use asset_slot::AssetSlot;
pub use company::CompanyInfoSection;
pub use document::PageDocument;
pub use features::FeaturesSection;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::HeroBanner;
pub use packs::PacksSection;
pub use releases::ReleasesSection;
pub use text::{SectionHeading, TextLines};

/// Anchor id of the pack showcase.
pub const SHOP_ANCHOR: &str = "shop";
/// Anchor id of the company information grid.
pub const ABOUT_ANCHOR: &str = "about";

/// Ids owned by page sections. Links to anything else get a stub target
/// rendered next to the link row that references them.
pub(crate) const SECTION_ANCHORS: [&str; 2] = [SHOP_ANCHOR, ABOUT_ANCHOR];

/// `"#login"` -> `Some("login")`, external hrefs -> `None`.
pub(crate) fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Ids that need a stub target because no section carries them.
pub(crate) fn stub_targets<'a>(hrefs: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    hrefs
        .into_iter()
        .filter_map(anchor_id)
        .filter(|id| !SECTION_ANCHORS.contains(id))
        .map(str::to_string)
        .collect()
}
