use leptos::prelude::*;

use super::{AssetSlot, stub_targets};
use crate::assets::{AssetMode, ImageRef};
use crate::types::NavLink;

/// Top bar: logo on the left, nav links on the right.
///
/// `#login` has no page section behind it, so the header carries its target.
#[component]
pub fn SiteHeader(logo: ImageRef, links: Vec<NavLink>, mode: AssetMode) -> impl IntoView {
    let stubs = stub_targets(links.iter().map(|link| link.anchor.as_str()));

    view! {
        <header class="site-header">
            <div class="site-logo">
                <AssetSlot image=logo mode=mode />
            </div>
            <nav class="site-nav">
                {links
                    .into_iter()
                    .map(|link| {
                        view! { <a href=link.anchor class="nav-link">{link.label}</a> }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            {stubs
                .into_iter()
                .map(|id| view! { <span id=id class="anchor-target"></span> })
                .collect::<Vec<_>>()}
        </header>
    }
}
