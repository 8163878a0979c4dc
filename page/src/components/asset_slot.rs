//! Image slot - the only place the placeholder and resolved pages differ.

use leptos::prelude::*;

use crate::assets::{AssetMode, ImageRef, SlotContent};

/// Renders one image slot according to the asset mode.
///
/// The record's alt text is both the `<img>` alt and the placeholder label.
/// An unresolved image renders an empty box of the slot's size, so the
/// layout holds and the rest of the page still renders.
#[component]
pub fn AssetSlot(image: ImageRef, mode: AssetMode) -> impl IntoView {
    let ImageRef { asset, alt } = image;
    match mode.slot(asset) {
        SlotContent::Image { src, lazy } => {
            let loading = if lazy { "lazy" } else { "eager" };
            view! {
                <img
                    src=src
                    alt=alt
                    loading=loading
                    data-asset=asset.as_str()
                />
            }
            .into_any()
        }
        SlotContent::Placeholder => view! {
            <div class="asset-placeholder" data-asset=asset.as_str()>
                {alt}
            </div>
        }
        .into_any(),
        SlotContent::Empty => view! {
            <div class="asset-empty" data-asset=asset.as_str() aria-hidden="true"></div>
        }
        .into_any(),
    }
}
