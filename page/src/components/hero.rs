use leptos::prelude::*;

use super::{AssetSlot, TextLines};
use crate::assets::AssetMode;
use crate::types::Hero;

/// Headline, tagline, call-to-action buttons and the hero illustration.
#[component]
pub fn HeroBanner(hero: Hero, mode: AssetMode) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <h1 class="hero-title">
                    <TextLines lines=hero.title_lines />
                </h1>
                <p class="hero-tagline">
                    <TextLines lines=hero.tagline_lines />
                </p>
                <div class="hero-actions">
                    {hero
                        .actions
                        .into_iter()
                        .map(|action| {
                            let class = if action.primary {
                                "hero-cta btn btn-primary"
                            } else {
                                "hero-cta btn btn-secondary"
                            };
                            // Inert: playing and the trailer live outside this page
                            view! { <button type="button" class=class>{action.label}</button> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="hero-art">
                <AssetSlot image=hero.image mode=mode />
            </div>
        </section>
    }
}
