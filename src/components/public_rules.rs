//! Public Rules Component
//!
//! Rules currently in force, searchable by name, description or fine.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{today, ListControls};
use crate::api;
use crate::context::use_app_context;
use crate::listing::{self, RuleSort};
use crate::models::{format_amount, Rule};

#[component]
pub fn PublicRules() -> impl IntoView {
    let ctx = use_app_context();
    let (rules, set_rules) = signal(Vec::<Rule>::new());
    let (loading, set_loading) = signal(true);
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            if let Some(loaded) = ctx.report(api::public_rules().await) {
                log::debug!("[RULES] loaded {} public rules", loaded.len());
                set_rules.set(loaded);
            }
            set_loading.set(false);
        });
    });

    let visible = move || {
        let today = today();
        let query = query.get();
        let order = RuleSort::parse(&sort.get());
        rules.with(|all| {
            let active: Vec<Rule> = all.iter().filter(|r| r.is_active(today)).cloned().collect();
            listing::filter_and_sort_by(&active, &query, listing::public_rule_fields, order)
        })
    };

    view! {
        <section class="public-rules">
            <h2>"Traffic Rules"</h2>
            <ListControls
                query=query
                sort=sort
                options=RuleSort::OPTIONS
                placeholder="Search rules by name, description or fine"
            />
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading rules..."</p> }>
                {move || {
                    let list = visible();
                    if list.is_empty() {
                        view! { <p class="empty">"No rules match your search."</p> }.into_any()
                    } else {
                        view! {
                            <div class="rule-grid">
                                {list.into_iter().map(|rule| view! {
                                    <div class="rule-card">
                                        <h3>{rule.rule_name.clone()}</h3>
                                        <p class="rule-fine">"Fine: Rs. " {format_amount(rule.fine_amount)}</p>
                                        <p class="rule-description">{rule.description.clone()}</p>
                                        {rule.exemption.clone().map(|e| view! {
                                            <p class="rule-exemption">"Exemption: " {e}</p>
                                        })}
                                        {rule.other_penalties.clone().map(|p| view! {
                                            <p class="rule-penalties">"Other penalties: " {p}</p>
                                        })}
                                    </div>
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </Show>
        </section>
    }
}
