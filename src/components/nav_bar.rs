//! Navigation Bar Component
//!
//! Bike-number search, page links, and the signed-in user with logout.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::plate::normalize_plate;

const PUBLIC_LINKS: &[(&str, fn() -> Page)] = &[
    ("Home", || Page::Home),
    ("Rules", || Page::Rules),
    ("My Challans", || Page::MyChallans),
];

const OFFICER_LINKS: &[(&str, fn() -> Page)] = &[
    ("Issue Challan", || Page::AdminIssue),
    ("Sent Challans", || Page::AdminChallans),
    ("Appeals", || Page::AdminAppeals),
    ("Manage Rules", || Page::AdminRules),
    ("Officers", || Page::AdminOfficers),
];

fn nav_links(links: &'static [(&'static str, fn() -> Page)]) -> impl IntoView {
    let ctx = use_app_context();
    links.iter().map(move |(label, target)| {
        let target = *target;
        view! {
            <button
                class=move || if ctx.page.get() == target() { "nav-link active" } else { "nav-link" }
                on:click=move |_| ctx.navigate(target())
            >
                {*label}
            </button>
        }
    }).collect_view()
}

/// Bike-number search form, also used on the home page
#[component]
pub fn BikeSearchForm() -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match normalize_plate(&query.get_untracked()) {
            Some(bike) => {
                set_query.set(String::new());
                ctx.navigate(Page::Search(bike));
            }
            None => ctx.notices.error("Please enter a bike number."),
        }
    };

    view! {
        <form class="bike-search-form" on:submit=on_submit>
            <input
                type="search"
                placeholder="Bike number, e.g. LEB-1234"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let display_name = move || ctx.session.with(|s| s.as_ref().map(|s| s.display_name.clone()));

    view! {
        <header class="nav-bar">
            <span class="brand" on:click=move |_| ctx.navigate(Page::Home)>"E-Challan"</span>
            <nav class="nav-links">
                {nav_links(PUBLIC_LINKS)}
                <Show when=move || ctx.is_officer()>
                    {nav_links(OFFICER_LINKS)}
                </Show>
            </nav>
            <BikeSearchForm />
            <div class="nav-user">
                {move || match display_name() {
                    Some(name) => view! {
                        <span class="user-name">{name}</span>
                        <button class="logout-btn" on:click=move |_| {
                            ctx.logout();
                            ctx.notices.info("Logged out.");
                        }>
                            "Logout"
                        </button>
                    }.into_any(),
                    None => view! {
                        <button class="nav-link" on:click=move |_| ctx.navigate(Page::AdminLogin)>
                            "Officer Login"
                        </button>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}
