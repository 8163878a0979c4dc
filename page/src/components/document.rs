//! Root document component - the complete HTML page
//!
//! Lays the sections out in their fixed order inside one self-contained
//! document: inline CSS, no scripts.

use leptos::prelude::*;

use super::{
    CompanyInfoSection, FeaturesSection, HeroBanner, PacksSection, ReleasesSection, SiteFooter,
    SiteHeader,
};
use crate::assets::AssetMode;
use crate::styles::{CSP, PAGE_CSS};
use crate::types::PageContent;

/// The complete landing page document
#[component]
pub fn PageDocument(content: PageContent, mode: AssetMode) -> impl IntoView {
    let PageContent {
        title,
        logo,
        nav_links,
        hero,
        features_heading,
        features,
        packs_heading,
        packs,
        releases_heading,
        releases,
        info_columns,
        copyright,
        footer_links,
    } = content;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <SiteHeader logo=logo links=nav_links mode=mode.clone() />
                <main>
                    <HeroBanner hero=hero mode=mode.clone() />
                    <FeaturesSection heading=features_heading features=features />
                    <PacksSection heading=packs_heading packs=packs mode=mode.clone() />
                    <ReleasesSection heading=releases_heading releases=releases mode=mode />
                    <CompanyInfoSection columns=info_columns />
                </main>
                <SiteFooter copyright=copyright links=footer_links />
            </body>
        </html>
    }
}
