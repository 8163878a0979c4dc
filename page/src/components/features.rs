use leptos::prelude::*;

use super::{SectionHeading, TextLines};
use crate::types::FeatureCard;

/// Grid of feature cards.
#[component]
pub fn FeaturesSection(heading: String, features: Vec<FeatureCard>) -> impl IntoView {
    view! {
        <section class="section section-dark features">
            <SectionHeading title=heading />
            <div class="features-grid">
                {features
                    .into_iter()
                    .map(|feature| view! { <FeatureCardView feature=feature /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCardView(feature: FeatureCard) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{feature.icon}</div>
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-text">
                <TextLines lines=feature.description />
            </p>
        </div>
    }
}
