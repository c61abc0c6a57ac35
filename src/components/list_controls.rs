//! List Controls Component
//!
//! Search box plus sort dropdown placed above every listing.

use leptos::prelude::*;

/// `options` are (key, label) pairs; the empty key keeps insertion order
#[component]
pub fn ListControls(
    query: RwSignal<String>,
    sort: RwSignal<String>,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="list-controls">
            <input
                type="search"
                class="search-input"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <select
                class="sort-select"
                prop:value=move || sort.get()
                on:change=move |ev| sort.set(event_target_value(&ev))
            >
                <option value="">"Sort by..."</option>
                {options.iter().map(|(key, label)| view! {
                    <option value=*key>{*label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
