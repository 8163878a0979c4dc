//! Company information grid - the `#about` target

use leptos::prelude::*;

use super::{ABOUT_ANCHOR, TextLines};
use crate::types::{InfoColumn, NewsletterSignup};

/// Company information columns, the last one with the newsletter signup.
#[component]
pub fn CompanyInfoSection(columns: Vec<InfoColumn>) -> impl IntoView {
    view! {
        <section id=ABOUT_ANCHOR class="section section-accent company-info">
            <div class="info-grid">
                {columns
                    .into_iter()
                    .map(|column| view! { <InfoColumnView column=column /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn InfoColumnView(column: InfoColumn) -> impl IntoView {
    let has_body = !column.body_lines.is_empty();

    view! {
        <div class="info-column">
            <h3 class="card-title">{column.heading}</h3>
            {has_body.then(|| view! {
                <p class="info-text">
                    <TextLines lines=column.body_lines />
                </p>
            })}
            {column.signup.map(|signup| view! { <Signup signup=signup /> })}
        </div>
    }
}

/// Email field and subscribe button. No form, no handler.
#[component]
fn Signup(signup: NewsletterSignup) -> impl IntoView {
    view! {
        <input
            type="email"
            class="newsletter-input"
            placeholder=signup.placeholder
            aria-label="Email address"
        />
        <button type="button" class="newsletter-button">{signup.button_label}</button>
    }
}
