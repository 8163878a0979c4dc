use leptos::prelude::*;

use super::{AssetSlot, SectionHeading, TextLines};
use crate::assets::AssetMode;
use crate::types::UpcomingRelease;

/// Announced expansions, each with its own call to action.
#[component]
pub fn ReleasesSection(
    heading: String,
    releases: Vec<UpcomingRelease>,
    mode: AssetMode,
) -> impl IntoView {
    view! {
        <section class="section section-dark releases">
            <SectionHeading title=heading />
            <div class="releases-grid">
                {releases
                    .into_iter()
                    .map(|release| view! { <ReleaseCard release=release mode=mode.clone() /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ReleaseCard(release: UpcomingRelease, mode: AssetMode) -> impl IntoView {
    view! {
        <div class="release-card">
            <div class="release-body">
                <div class="release-thumb">
                    <AssetSlot image=release.image mode=mode />
                </div>
                <div>
                    <h3 class="card-title">{release.title}</h3>
                    <p class="release-date">{release.release_date}</p>
                    <p class="card-text">
                        <TextLines lines=release.description />
                    </p>
                </div>
            </div>
            <button type="button" class="release-cta">{release.call_to_action}</button>
        </div>
    }
}
