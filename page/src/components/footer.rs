use leptos::prelude::*;

use super::stub_targets;
use crate::types::FooterLink;

/// Copyright line plus legal links.
///
/// The legal pages themselves aren't part of this document, so their anchors
/// land on empty targets in the footer.
#[component]
pub fn SiteFooter(copyright: String, links: Vec<FooterLink>) -> impl IntoView {
    let stubs = stub_targets(links.iter().map(|link| link.anchor.as_str()));

    view! {
        <footer class="site-footer">
            <p class="footer-copyright">{copyright}</p>
            <div class="footer-links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! { <a href=link.anchor class="footer-link">{link.label}</a> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {stubs
                .into_iter()
                .map(|id| view! { <span id=id class="anchor-target"></span> })
                .collect::<Vec<_>>()}
        </footer>
    }
}
