//! Rule Management Component
//!
//! Officer view to add, edit and delete traffic rules.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{today, DeleteConfirmButton, ListControls};
use crate::api;
use crate::context::use_app_context;
use crate::forms::RuleDraft;
use crate::listing::{self, RuleSort};
use crate::models::{format_amount, Rule};
use crate::store::{store_remove_rule, store_upsert_rule, use_app_store, AppStateStoreFields};

/// Form target: a new rule or the rule with this id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Editing {
    New,
    Existing(u32),
}

#[component]
pub fn RuleAdmin() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<Editing>);
    let draft = RwSignal::new(RuleDraft::new(today()));
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            if let Some(rules) = ctx.report(api::list_rules(&token).await) {
                *store.rules().write() = rules;
            }
        });
    });

    let visible = move || {
        let query = query.get();
        let order = RuleSort::parse(&sort.get());
        store.rules().with(|rules| listing::filter_and_sort(rules, &query, order))
    };

    let open_new = move |_| {
        draft.set(RuleDraft::new(today()));
        editing.set(Some(Editing::New));
    };

    let open_edit = move |rule: &Rule| {
        draft.set(RuleDraft::from_rule(rule));
        editing.set(Some(Editing::Existing(rule.id)));
    };

    let delete = move |id: u32| {
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            if let Some(ack) = ctx.report(api::delete_rule(&token, id).await) {
                store_remove_rule(&store, id);
                ctx.notices.success(ack.message_or("Rule deleted."));
            }
        });
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = editing.get_untracked() else { return };
        let payload = match draft.with_untracked(RuleDraft::validate) {
            Ok(payload) => payload,
            Err(err) => {
                ctx.notices.error(err.to_string());
                return;
            }
        };
        let Some(token) = ctx.token() else { return };
        set_busy.set(true);
        spawn_local(async move {
            let result = match target {
                Editing::New => api::add_rule(&token, &payload).await,
                Editing::Existing(id) => api::update_rule(&token, id, &payload).await,
            };
            if let Some(rule) = ctx.report(result) {
                store_upsert_rule(&store, rule);
                ctx.notices.success(match target {
                    Editing::New => "Rule added.",
                    Editing::Existing(_) => "Rule updated.",
                });
                editing.set(None);
            }
            set_busy.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&RuleDraft) -> &String, set: fn(&mut RuleDraft, String)| view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=kind
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        </label>
    };

    view! {
        <section class="rule-admin">
            <div class="section-head">
                <h2>"Manage Rules"</h2>
                <button on:click=open_new>"Add Rule"</button>
            </div>
            <ListControls query=query sort=sort options=RuleSort::OPTIONS placeholder="Search by name or fine" />

            {move || editing.get().map(|target| view! {
                <form class="rule-form" on:submit=on_save>
                    <h3>{if target == Editing::New { "New Rule" } else { "Edit Rule" }}</h3>
                    {field("Rule name", "text", |d| &d.rule_name, |d, v| d.rule_name = v)}
                    {field("Fine amount", "number", |d| &d.fine_amount, |d, v| d.fine_amount = v)}
                    {field("Start date", "date", |d| &d.start_date, |d, v| d.start_date = v)}
                    {field("Exemption", "text", |d| &d.exemption, |d, v| d.exemption = v)}
                    {field("Other penalties", "text", |d| &d.other_penalties, |d, v| d.other_penalties = v)}
                    <label class="form-field">
                        <span>"Description"</span>
                        <textarea
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| editing.set(None)>"Cancel"</button>
                        <button type="submit" disabled=move || busy.get()>"Save"</button>
                    </div>
                </form>
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Rule"</th>
                        <th>"Fine"</th>
                        <th>"Start date"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let today = today();
                        visible().into_iter().map(|rule| {
                            let id = rule.id;
                            let active = rule.is_active(today);
                            let for_edit = rule.clone();
                            view! {
                                <tr>
                                    <td>{rule.rule_name.clone()}</td>
                                    <td>"Rs. " {format_amount(rule.fine_amount)}</td>
                                    <td>{rule.start_date.format("%Y-%m-%d").to_string()}</td>
                                    <td>{if active { "Active" } else { "Upcoming" }}</td>
                                    <td class="row-actions">
                                        <button class="edit-btn" on:click=move |_| open_edit(&for_edit)>"Edit"</button>
                                        <DeleteConfirmButton button_class="delete-btn" on_confirm=move |_| delete(id) />
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
