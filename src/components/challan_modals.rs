//! Payment and Appeal Modals
//!
//! Both are opened from a challan card and close themselves once the
//! backend accepts the submission.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::pick_upload;
use crate::api;
use crate::context::use_app_context;
use crate::forms::{require_proof, AppealDraft};
use crate::models::Upload;

#[component]
pub fn PaymentModal(
    challan_id: u32,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let proof = RwSignal::new(None::<Upload>);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let upload = match proof.with_untracked(|p| require_proof(p.as_ref())) {
            Ok(upload) => upload,
            Err(err) => {
                ctx.notices.error(err.to_string());
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            if let Some(ack) = ctx.report(api::submit_payment(challan_id, &upload).await) {
                ctx.notices.success(ack.message_or("Payment proof submitted. It will be verified shortly."));
                on_done.run(());
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                <h3>"Pay Challan #" {challan_id}</h3>
                <p>"Upload a photo or screenshot of your payment receipt."</p>
                <input
                    type="file"
                    accept="image/*"
                    on:change=move |ev| pick_upload(ctx, ev, move |up| proof.set(up))
                />
                {move || proof.with(|p| p.as_ref().map(|u| view! {
                    <p class="file-picked">{u.name.clone()}</p>
                }))}
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Submit Proof" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn AppealModal(
    challan_id: u32,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(AppealDraft::default());
    let evidence = RwSignal::new(None::<Upload>);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut current = draft.get_untracked();
        current.evidence = evidence.get_untracked();
        // a blank reason never reaches the backend
        let submission = match current.validate(challan_id) {
            Ok(submission) => submission,
            Err(err) => {
                ctx.notices.error(err.to_string());
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            let token = ctx.token();
            if let Some(ack) = ctx.report(api::create_appeal(token.as_deref(), &submission).await) {
                ctx.notices.success(ack.message_or("Appeal submitted."));
                on_done.run(());
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                <h3>"Appeal Challan #" {challan_id}</h3>
                <textarea
                    placeholder="Why should this challan be cancelled?"
                    prop:value=move || draft.with(|d| d.reason.clone())
                    on:input=move |ev| draft.update(|d| d.reason = event_target_value(&ev))
                ></textarea>
                <label class="file-label">
                    "Evidence (optional)"
                    <input type="file" accept="image/*" on:change=move |ev| pick_upload(ctx, ev, move |up| evidence.set(up)) />
                </label>
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Submit Appeal" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
