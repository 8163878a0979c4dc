//! Small text helpers shared by the sections

use leptos::prelude::*;

/// Renders each line as its own block, in place of `<br>` inside copy.
#[component]
pub fn TextLines(lines: Vec<String>) -> impl IntoView {
    lines
        .into_iter()
        .map(|line| view! { <span class="text-line">{line}</span> })
        .collect::<Vec<_>>()
}

/// Centered section title with the accent rule underneath
#[component]
pub fn SectionHeading(title: String) -> impl IntoView {
    view! {
        <h2 class="section-title">{title}</h2>
        <div class="section-rule"></div>
    }
}
