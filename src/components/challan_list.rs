//! Challan List Component
//!
//! Citizen-facing challan cards with status badges and the pay/appeal
//! actions for unpaid ones.

use leptos::prelude::*;

use super::{today, AppealModal, PaymentModal};
use crate::models::{format_amount, Challan};
use crate::status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Pay(u32),
    Appeal(u32),
}

#[component]
pub fn ChallanList(
    #[prop(into)] challans: Signal<Vec<Challan>>,
    /// Called after a payment proof or appeal went through
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let (action, set_action) = signal(None::<Action>);
    let close = Callback::new(move |_: ()| set_action.set(None));
    let done = Callback::new(move |_: ()| {
        set_action.set(None);
        on_changed.run(());
    });

    view! {
        <div class="challan-list">
            {move || {
                let today = today();
                challans.get().into_iter().map(|challan| {
                    let badge = status::badge(&challan, today);
                    let id = challan.id;
                    let actionable = status::is_actionable(&challan);
                    view! {
                        <div class="challan-card">
                            <div class="challan-head">
                                <span class="challan-bike">{challan.bike_number.clone()}</span>
                                <span class=badge.class()>{badge.label()}</span>
                            </div>
                            <p class="challan-rule">{challan.rule_name.clone()}</p>
                            <p class="challan-amount">"Rs. " {format_amount(challan.amount_charged)}</p>
                            <p class="challan-dates">
                                "Issued " {challan.challan_date.format("%Y-%m-%d").to_string()}
                                " · Due " {challan.due_date.format("%Y-%m-%d").to_string()}
                            </p>
                            <Show when=move || actionable>
                                <div class="challan-actions">
                                    <button on:click=move |_| set_action.set(Some(Action::Pay(id)))>"Pay"</button>
                                    <button class="secondary" on:click=move |_| set_action.set(Some(Action::Appeal(id)))>
                                        "Appeal"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()
            }}
            {move || action.get().map(|a| match a {
                Action::Pay(id) => view! {
                    <PaymentModal challan_id=id on_close=close on_done=done />
                }.into_any(),
                Action::Appeal(id) => view! {
                    <AppealModal challan_id=id on_close=close on_done=done />
                }.into_any(),
            })}
        </div>
    }
}
