//! My Challans Component
//!
//! Challans on the signed-in citizen's bikes. Without a session the login
//! panel is shown instead.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{CitizenAuth, ChallanList};
use crate::api;
use crate::context::use_app_context;
use crate::models::Challan;

#[component]
pub fn MyChallans() -> impl IntoView {
    let ctx = use_app_context();
    let (challans, set_challans) = signal(Vec::<Challan>::new());
    let (loading, set_loading) = signal(false);
    let signed_in = move || ctx.session.with(Option::is_some);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let token = ctx.session.with(|s| s.as_ref().map(|s| s.access.clone()));
        let Some(token) = token else {
            set_challans.set(Vec::new());
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            if let Some(list) = ctx.report(api::my_challans(&token).await) {
                set_challans.set(list);
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="my-challans">
            <h2>"My Challans"</h2>
            <Show when=signed_in fallback=|| view! { <CitizenAuth /> }>
                <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                    <Show
                        when=move || !challans.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty">"No challans on your record."</p> }
                    >
                        <ChallanList challans=challans on_changed=move |_| ctx.reload() />
                    </Show>
                </Show>
            </Show>
        </section>
    }
}
