//! Area Select Component
//!
//! City -> Zone -> Sub-area dropdowns. A change at one level clears the
//! levels below it before being reported.

use leptos::prelude::*;

use crate::cascade::{self, AreaSelection};
use crate::models::Area;

#[component]
pub fn AreaSelect(
    #[prop(into)] areas: Signal<Vec<Area>>,
    #[prop(into)] selection: Signal<AreaSelection>,
    #[prop(into)] on_change: Callback<AreaSelection>,
) -> impl IntoView {
    let city = move || selection.with(|s| s.city.clone());
    let zone = move || selection.with(|s| s.zone.clone());

    let change = move |apply: fn(&mut AreaSelection, &str), value: String| {
        let mut next = selection.get_untracked();
        apply(&mut next, &value);
        on_change.run(next);
    };

    view! {
        <div class="area-select">
            <select
                prop:value=move || city().unwrap_or_default()
                on:change=move |ev| change(AreaSelection::select_city, event_target_value(&ev))
            >
                <option value="">"Select city"</option>
                {move || areas.with(|all| cascade::cities(all)).into_iter().map(|c| view! {
                    <option value=c.clone()>{c.clone()}</option>
                }).collect_view()}
            </select>
            <select
                disabled=move || city().is_none()
                prop:value=move || zone().unwrap_or_default()
                on:change=move |ev| change(AreaSelection::select_zone, event_target_value(&ev))
            >
                <option value="">"Select area"</option>
                {move || areas.with(|all| cascade::zones(all, city().as_deref())).into_iter().map(|z| view! {
                    <option value=z.clone()>{z.clone()}</option>
                }).collect_view()}
            </select>
            <select
                disabled=move || zone().is_none()
                prop:value=move || selection.with(|s| s.sub_area.clone()).unwrap_or_default()
                on:change=move |ev| change(AreaSelection::select_sub_area, event_target_value(&ev))
            >
                <option value="">"Select sub-area"</option>
                {move || areas.with(|all| cascade::sub_areas(all, city().as_deref(), zone().as_deref()))
                    .into_iter()
                    .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
