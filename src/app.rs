//! E-Challan Frontend App
//!
//! Main application component: navigation bar, the current page and the
//! toast host.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AdminLogin, AppealReview, BikeSearch, ChallanIssue, HomePage, MyChallans, NavBar, OfficerAdmin,
    PublicRules, RuleAdmin, SentChallans, ToastHost,
};
use crate::context::{gate, AppContext, Page};
use crate::notify::NoticeBoard;
use crate::session::{BrowserStorage, Session};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let page = signal(Page::Home);
    let session = signal(Session::load(&BrowserStorage::new()));
    let reload_trigger = signal(0u32);

    if let Some(s) = session.0.get_untracked() {
        log::info!("[APP] restored session for {}", s.display_name);
    }

    // Provide context to all children
    let ctx = AppContext::new(page, session, reload_trigger, NoticeBoard::new());
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Officer pages fall back to the login page without an officer session
    let current = Memo::new(move |_| ctx.session.with(|s| gate(&ctx.page.get(), s.as_ref())));

    Effect::new(move |_| {
        let title = format!("{} | E-Challan", current.get().title());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match current.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Rules => view! { <PublicRules /> }.into_any(),
                    Page::Search(bike) => view! { <BikeSearch bike=bike /> }.into_any(),
                    Page::MyChallans => view! { <MyChallans /> }.into_any(),
                    Page::AdminLogin => view! { <AdminLogin /> }.into_any(),
                    Page::AdminRules => view! { <RuleAdmin /> }.into_any(),
                    Page::AdminOfficers => view! { <OfficerAdmin /> }.into_any(),
                    Page::AdminIssue => view! { <ChallanIssue /> }.into_any(),
                    Page::AdminChallans => view! { <SentChallans /> }.into_any(),
                    Page::AdminAppeals => view! { <AppealReview /> }.into_any(),
                }}
            </main>
            <ToastHost />
        </div>
    }
}
