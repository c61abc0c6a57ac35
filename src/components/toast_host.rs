//! Toast Host Component
//!
//! Renders the notice board in a corner of the screen.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let board = ctx.notices;

    view! {
        <div class="toast-host">
            {move || board.notices().into_iter().map(|notice| {
                let id = notice.id;
                view! {
                    <div class=notice.level.class() role="status">
                        <span class="toast-text">{notice.text}</span>
                        <button class="toast-close" on:click=move |_| board.dismiss(id)>"×"</button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
