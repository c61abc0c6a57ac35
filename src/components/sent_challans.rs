//! Sent Challans Component
//!
//! Every issued challan with search, sort, and an editor for the rule and
//! the status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{today, ListControls};
use crate::api;
use crate::context::use_app_context;
use crate::forms::ChallanUpdate;
use crate::listing::{self, ChallanSort};
use crate::models::{format_amount, Challan, ChallanStatus};
use crate::status;
use crate::store::{store_update_challan, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy)]
enum Field {
    Rule,
    Status,
}

impl Field {
    /// Dropdown value for this field of a stored challan
    fn value(self, challans: &[Challan], id: u32) -> String {
        match (self, status::editor_values(challans, id)) {
            (Field::Rule, Some((rule, _))) => rule,
            (Field::Status, Some((_, status))) => status.to_string(),
            (_, None) => String::new(),
        }
    }
}

#[component]
pub fn SentChallans() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(String::from("date-desc"));

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            if let Some(challans) = ctx.report(api::list_challans(&token).await) {
                *store.challans().write() = challans;
            }
            if let Some(rules) = ctx.report(api::list_rules(&token).await) {
                *store.rules().write() = rules;
            }
        });
    });

    let visible = move || {
        let query = query.get();
        let order = ChallanSort::parse(&sort.get());
        store.challans().with(|challans| listing::filter_and_sort(challans, &query, order))
    };

    let stored = move |id: u32, field: Field| store.challans().with(|challans| field.value(challans, id));

    // A rejected edit puts the dropdown back on what the store holds
    let snap_back = move |select: &web_sys::HtmlSelectElement, id: u32, field: Field| {
        select.set_value(&store.challans().with_untracked(|challans| field.value(challans, id)));
    };

    let edit = move |ev: web_sys::Event, id: u32, field: Field| {
        let select = event_target::<web_sys::HtmlSelectElement>(&ev);
        let value = select.value();
        let update = match field {
            Field::Status => match ChallanStatus::from_key(&value) {
                Some(status) => ChallanUpdate::status(status),
                None => return snap_back(&select, id, field),
            },
            Field::Rule => {
                let Ok(rule_id) = value.parse::<u32>() else {
                    return snap_back(&select, id, field);
                };
                let update = store
                    .rules()
                    .with_untracked(|rules| ChallanUpdate::reassign_rule(rules, rule_id, today()));
                match update {
                    Ok(update) => update,
                    Err(err) => {
                        ctx.notices.error(err.to_string());
                        return snap_back(&select, id, field);
                    }
                }
            }
        };
        let Some(token) = ctx.token() else {
            return snap_back(&select, id, field);
        };
        spawn_local(async move {
            match ctx.report(api::update_challan(&token, id, &update).await) {
                Some(ack) => {
                    store_update_challan(&store, id, &update);
                    let fallback = match (&update.rule_name, update.status) {
                        (Some(name), _) => format!("Challan #{} moved to {}.", id, name),
                        (None, Some(status)) => format!("Challan #{} marked {}.", id, status.label()),
                        (None, None) => format!("Challan #{} updated.", id),
                    };
                    ctx.notices.success(ack.message_or(fallback));
                }
                None => snap_back(&select, id, field),
            }
        });
    };

    view! {
        <section class="sent-challans">
            <h2>"Sent Challans"</h2>
            <ListControls
                query=query
                sort=sort
                options=ChallanSort::OPTIONS
                placeholder="Search by bike number, rule or amount"
            />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Bike"</th>
                        <th>"Rule"</th>
                        <th>"Amount"</th>
                        <th>"Issued"</th>
                        <th>"Due"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let today = today();
                        visible().into_iter().map(|challan| {
                            let id = challan.id;
                            let badge = status::badge(&challan, today);
                            let rule_name = challan.rule_name.clone();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{challan.bike_number.clone()}</td>
                                    <td>
                                        <select
                                            prop:value=move || stored(id, Field::Rule)
                                            on:change=move |ev| edit(ev, id, Field::Rule)
                                        >
                                            <Show when=move || stored(id, Field::Rule).is_empty()>
                                                <option value="">{rule_name.clone()}</option>
                                            </Show>
                                            {move || store.rules().with(|rules| {
                                                rules.iter().map(|rule| view! {
                                                    <option value=rule.id.to_string() disabled=!rule.is_active(today)>
                                                        {rule.rule_name.clone()}
                                                    </option>
                                                }).collect_view()
                                            })}
                                        </select>
                                    </td>
                                    <td>"Rs. " {format_amount(challan.amount_charged)}</td>
                                    <td>{challan.challan_date.format("%Y-%m-%d %H:%M").to_string()}</td>
                                    <td>
                                        {challan.due_date.format("%Y-%m-%d").to_string()}
                                        <span class=badge.class()>{badge.label()}</span>
                                    </td>
                                    <td>
                                        <select
                                            prop:value=move || stored(id, Field::Status)
                                            on:change=move |ev| edit(ev, id, Field::Status)
                                        >
                                            {ChallanStatus::ALL.into_iter().map(|s| view! {
                                                <option value=s.key()>{s.label()}</option>
                                            }).collect_view()}
                                        </select>
                                    </td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
