//! Pack showcase - the `#shop` target

use leptos::prelude::*;

use super::{AssetSlot, SHOP_ANCHOR, SectionHeading};
use crate::assets::AssetMode;
use crate::types::ProductPack;

/// Row of purchasable packs, in the order given (cheapest first by design).
///
/// Prices are shown verbatim. Checkout belongs to a payment service that this
/// page only links towards.
#[component]
pub fn PacksSection(heading: String, packs: Vec<ProductPack>, mode: AssetMode) -> impl IntoView {
    view! {
        <section id=SHOP_ANCHOR class="section section-accent packs">
            <SectionHeading title=heading />
            <div class="packs-row">
                {packs
                    .into_iter()
                    .map(|pack| view! { <PackCard pack=pack mode=mode.clone() /> })
                    .collect::<Vec<_>>()}
                <div class="packs-more" aria-hidden="true">"→"</div>
            </div>
        </section>
    }
}

#[component]
fn PackCard(pack: ProductPack, mode: AssetMode) -> impl IntoView {
    view! {
        <div class="pack-card">
            <div class="pack-art">
                <AssetSlot image=pack.image mode=mode />
            </div>
            <h3 class="card-title">{pack.title}</h3>
            <p class="pack-price">{pack.price}</p>
        </div>
    }
}
