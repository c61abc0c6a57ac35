//! Citizen Login / Signup Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::pick_upload;
use crate::api;
use crate::context::use_app_context;
use crate::forms::{password_strength, CitizenSignupForm, LoginForm};
use crate::models::Upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

#[component]
pub fn CitizenAuth() -> impl IntoView {
    let ctx = use_app_context();
    let (mode, set_mode) = signal(Mode::Login);
    let login = RwSignal::new(LoginForm::default());
    let signup = RwSignal::new(CitizenSignupForm::default());
    let (busy, set_busy) = signal(false);

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let creds = match login.with_untracked(LoginForm::validate) {
            Ok(creds) => creds,
            Err(err) => {
                ctx.notices.error(err.to_string());
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            if let Some(grant) = ctx.report(api::login_citizen(&creds).await) {
                ctx.notices.success(format!("Welcome, {}", grant.display_name));
                ctx.login(grant);
            }
            set_busy.set(false);
        });
    };

    let on_signup = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match signup.with_untracked(CitizenSignupForm::validate) {
            Ok(payload) => payload,
            Err(err) => {
                ctx.notices.error(err.to_string());
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            if let Some(ack) = ctx.report(api::signup_citizen(&payload).await) {
                ctx.notices.success(ack.message_or("Account created. Please log in."));
                login.set(LoginForm {
                    identifier: payload.email.clone(),
                    password: String::new(),
                });
                signup.set(CitizenSignupForm::default());
                set_mode.set(Mode::Login);
            }
            set_busy.set(false);
        });
    };

    let login_view = move || view! {
        <form class="auth-form" on:submit=on_login>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || login.with(|f| f.identifier.clone())
                on:input=move |ev| login.update(|f| f.identifier = event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || login.with(|f| f.password.clone())
                on:input=move |ev| login.update(|f| f.password = event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Log In"</button>
            <p class="auth-switch">
                "No account? "
                <a href="#" on:click=move |ev| { ev.prevent_default(); set_mode.set(Mode::Signup); }>"Sign up"</a>
            </p>
        </form>
    };

    let document = move |label: &'static str, set: fn(&mut CitizenSignupForm, Option<Upload>)| view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type="file"
                accept="image/*"
                on:change=move |ev| pick_upload(ctx, ev, move |up| signup.update(|f| set(f, up)))
            />
        </label>
    };

    let strength = move || {
        let password = signup.with(|f| f.password.clone());
        (!password.is_empty()).then(|| {
            let level = password_strength(&password);
            view! { <p class=level.class()>"Strength: " {level.label()}</p> }
        })
    };

    let signup_view = move || view! {
        <form class="auth-form" on:submit=on_signup>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || signup.with(|f| f.email.clone())
                on:input=move |ev| signup.update(|f| f.email = event_target_value(&ev))
            />
            <input
                type="tel"
                placeholder="Phone"
                prop:value=move || signup.with(|f| f.phone.clone())
                on:input=move |ev| signup.update(|f| f.phone = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Bike number (format: ABC1234)"
                prop:value=move || signup.with(|f| f.bike_number.clone())
                on:input=move |ev| signup.update(|f| f.bike_number = event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || signup.with(|f| f.password.clone())
                on:input=move |ev| signup.update(|f| f.password = event_target_value(&ev))
            />
            {strength}
            <input
                type="password"
                placeholder="Confirm password"
                prop:value=move || signup.with(|f| f.confirm_password.clone())
                on:input=move |ev| signup.update(|f| f.confirm_password = event_target_value(&ev))
            />
            {document("Bike official copy", |f, up| f.official_copy = up)}
            {document("CNIC front", |f, up| f.cnic_front = up)}
            {document("CNIC back", |f, up| f.cnic_back = up)}
            <button
                type="submit"
                disabled=move || {
                    busy.get() || !signup.with(|f| password_strength(&f.password).is_acceptable())
                }
            >
                "Create Account"
            </button>
            <p class="auth-switch">
                "Already registered? "
                <a href="#" on:click=move |ev| { ev.prevent_default(); set_mode.set(Mode::Login); }>"Log in"</a>
            </p>
        </form>
    };

    view! {
        <div class="auth-panel">
            <h3>{move || if mode.get() == Mode::Login { "Citizen Login" } else { "Citizen Sign Up" }}</h3>
            {move || match mode.get() {
                Mode::Login => login_view().into_any(),
                Mode::Signup => signup_view().into_any(),
            }}
        </div>
    }
}
