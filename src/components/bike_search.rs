//! Bike Search Component
//!
//! Public lookup of every challan on a bike number.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ChallanList;
use crate::api;
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::Challan;

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Loading,
    NoRecord,
    Found(Vec<Challan>),
    Failed,
}

#[component]
pub fn BikeSearch(bike: String) -> impl IntoView {
    let ctx = use_app_context();
    let (outcome, set_outcome) = signal(Outcome::Loading);
    let (refresh, set_refresh) = signal(0u32);
    let heading = bike.clone();

    Effect::new(move |_| {
        let _ = refresh.get();
        let bike = bike.clone();
        set_outcome.set(Outcome::Loading);
        spawn_local(async move {
            let next = match api::search_by_bike(&bike).await {
                Ok(list) if list.is_empty() => Outcome::NoRecord,
                Ok(list) => Outcome::Found(list),
                Err(ApiError::NotFound) => Outcome::NoRecord,
                Err(err) => {
                    ctx.report::<()>(Err(err));
                    Outcome::Failed
                }
            };
            set_outcome.set(next);
        });
    });

    let challans = Signal::derive(move || match outcome.get() {
        Outcome::Found(list) => list,
        _ => Vec::new(),
    });

    view! {
        <section class="bike-search">
            <h2>"Challans for " {heading}</h2>
            {move || match outcome.get() {
                Outcome::Loading => view! { <p class="loading">"Searching..."</p> }.into_any(),
                Outcome::NoRecord => view! {
                    <p class="empty">"No record found for this bike."</p>
                }.into_any(),
                Outcome::Failed => view! {
                    <p class="empty">"Search failed. Please try again."</p>
                }.into_any(),
                Outcome::Found(_) => view! {
                    <ChallanList
                        challans=challans
                        on_changed=move |_| set_refresh.update(|v| *v += 1)
                    />
                }.into_any(),
            }}
        </section>
    }
}
