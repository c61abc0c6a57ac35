//! Home Page Component

use leptos::prelude::*;

use super::BikeSearchForm;
use crate::context::{use_app_context, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="home">
            <h1>"Traffic E-Challan Portal"</h1>
            <p class="lead">"Look up challans on your bike, pay fines and file appeals online."</p>
            <BikeSearchForm />
            <div class="home-cards">
                <div class="home-card" on:click=move |_| ctx.navigate(Page::Rules)>
                    <h3>"Traffic Rules"</h3>
                    <p>"Current rules and their fines."</p>
                </div>
                <div class="home-card" on:click=move |_| ctx.navigate(Page::MyChallans)>
                    <h3>"My Challans"</h3>
                    <p>"Sign in to see every challan on your bike."</p>
                </div>
                <div class="home-card" on:click=move |_| ctx.navigate(Page::AdminLogin)>
                    <h3>"Officers"</h3>
                    <p>"Issue challans and review appeals."</p>
                </div>
            </div>
        </section>
    }
}
