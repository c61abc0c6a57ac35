//! Issue Challan Component
//!
//! Officer form for a new challan. A photo of the plate can pre-fill the
//! bike number; the officer can always correct it by hand.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{today, AreaSelect};
use crate::api;
use crate::cascade::AreaSelection;
use crate::config::DEFAULT_DUE_DAYS;
use crate::context::use_app_context;
use crate::forms::ChallanDraft;
use crate::models::{format_amount, Rule};
use crate::ocr;
use crate::store::{store_add_challan, use_app_store, AppStateStoreFields};

#[component]
pub fn ChallanIssue() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let draft = RwSignal::new(ChallanDraft::default());
    let (reading_plate, set_reading_plate) = signal(false);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            if let Some(rules) = ctx.report(api::list_rules(&token).await) {
                *store.rules().write() = rules;
            }
            if let Some(areas) = ctx.report(api::list_areas(&token).await) {
                *store.areas().write() = areas;
            }
        });
    });

    // Only rules already in force can be charged
    let active_rules = move || {
        let today = today();
        store.rules().with(|rules| {
            rules.iter().filter(|r| r.is_active(today)).cloned().collect::<Vec<Rule>>()
        })
    };

    let selected_fine = move || {
        let rule_id = draft.with(|d| d.rule)?;
        store.rules().with(|rules| {
            rules.iter().find(|r| r.id == rule_id).map(|r| format_amount(r.fine_amount))
        })
    };

    let on_plate_photo = move |ev: web_sys::Event| {
        let Some(file) = api::picked_file(&ev) else { return };
        set_reading_plate.set(true);
        spawn_local(async move {
            match ocr::recognize_plate(&file).await {
                Some(plate) => {
                    ctx.notices.info(format!("Plate read as {}. Please check it.", plate));
                    draft.update(|d| d.bike_number = plate);
                }
                None => ctx.notices.info("Could not read the plate. Please type it in."),
            }
            set_reading_plate.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let validated = store.rules().with_untracked(|rules| {
            store.areas().with_untracked(|areas| {
                draft.with_untracked(|d| d.validate(rules, areas, today()))
            })
        });
        let payload = match validated {
            Ok(payload) => payload,
            Err(err) => {
                ctx.notices.error(err.to_string());
                return;
            }
        };
        let Some(token) = ctx.token() else { return };
        set_busy.set(true);
        spawn_local(async move {
            if let Some(challan) = ctx.report(api::issue_challan(&token, &payload).await) {
                ctx.notices.success(format!("Challan #{} issued to {}.", challan.id, challan.bike_number));
                store_add_challan(&store, challan);
                draft.set(ChallanDraft::default());
            }
            set_busy.set(false);
        });
    };

    let areas = Signal::derive(move || store.areas().get());
    let area_selection = Signal::derive(move || draft.with(|d| d.area.clone()));
    let on_area = Callback::new(move |sel: AreaSelection| draft.update(|d| d.area = sel));

    view! {
        <section class="challan-issue">
            <form class="challan-form" on:submit=on_submit>
                <h2>"Issue Challan"</h2>
                <label class="form-field">
                    <span>"Bike number"</span>
                    <input
                        type="text"
                        placeholder="LEB-1234"
                        prop:value=move || draft.with(|d| d.bike_number.clone())
                        on:input=move |ev| draft.update(|d| d.bike_number = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Plate photo (optional)"</span>
                    <input type="file" accept="image/*" on:change=on_plate_photo />
                </label>
                <Show when=move || reading_plate.get()>
                    <p class="loading">"Reading plate..."</p>
                </Show>
                <label class="form-field">
                    <span>"Rule violated"</span>
                    <select
                        prop:value=move || draft.with(|d| d.rule.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| draft.update(|d| d.rule = event_target_value(&ev).parse().ok())
                    >
                        <option value="">"Select rule"</option>
                        {move || active_rules().into_iter().map(|rule| view! {
                            <option value=rule.id.to_string()>
                                {format!("{} (Rs. {})", rule.rule_name, format_amount(rule.fine_amount))}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Amount"</span>
                    <input
                        type="number"
                        placeholder=move || selected_fine().unwrap_or_else(|| "Rule fine".to_string())
                        prop:value=move || draft.with(|d| d.amount.clone())
                        on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>{format!("Due date (default: {} days)", DEFAULT_DUE_DAYS)}</span>
                    <input
                        type="date"
                        prop:value=move || draft.with(|d| d.due_date.clone())
                        on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                    />
                </label>
                <AreaSelect areas=areas selection=area_selection on_change=on_area />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Issuing..." } else { "Issue Challan" }}
                </button>
            </form>
        </section>
    }
}
