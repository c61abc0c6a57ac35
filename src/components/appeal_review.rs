//! Appeal Review Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::AppealStatus;
use crate::store::{store_set_appeal_status, use_app_store, AppStateStoreFields};

#[component]
pub fn AppealReview() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (pending_only, set_pending_only) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            if let Some(appeals) = ctx.report(api::list_appeals(&token).await) {
                *store.appeals().write() = appeals;
            }
        });
    });

    let review = move |id: u32, status: AppealStatus| {
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            if let Some(ack) = ctx.report(api::review_appeal(&token, id, status).await) {
                store_set_appeal_status(&store, id, status);
                ctx.notices.success(
                    ack.message_or(format!("Appeal #{} {}.", id, status.label().to_lowercase())),
                );
            }
        });
    };

    let visible = move || {
        let pending_only = pending_only.get();
        store.appeals().with(|appeals| {
            appeals
                .iter()
                .filter(|a| !pending_only || a.status == AppealStatus::Pending)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="appeal-review">
            <div class="section-head">
                <h2>"Appeals"</h2>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || pending_only.get()
                        on:change=move |ev| set_pending_only.set(event_target_checked(&ev))
                    />
                    "Pending only"
                </label>
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="empty">"No appeals to review."</p> }
            >
                <div class="appeal-list">
                    {move || visible().into_iter().map(|appeal| {
                        let id = appeal.id;
                        let pending = appeal.status == AppealStatus::Pending;
                        view! {
                            <div class="appeal-card">
                                <div class="appeal-head">
                                    <span>"Appeal #" {id} " on challan #" {appeal.challan}</span>
                                    <span class="badge">{appeal.status.label()}</span>
                                </div>
                                <p class="appeal-reason">{appeal.reason.clone()}</p>
                                {appeal.submitted_at.map(|at| view! {
                                    <p class="appeal-date">"Submitted " {at.format("%Y-%m-%d %H:%M").to_string()}</p>
                                })}
                                {appeal.evidence_url.clone().map(|url| view! {
                                    <a class="appeal-evidence" href=url target="_blank">"View evidence"</a>
                                })}
                                <Show when=move || pending>
                                    <div class="appeal-actions">
                                        <button on:click=move |_| review(id, AppealStatus::Approved)>"Approve"</button>
                                        <button class="secondary" on:click=move |_| review(id, AppealStatus::Rejected)>
                                            "Reject"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </section>
    }
}
