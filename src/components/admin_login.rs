//! Officer Login Component
//!
//! Credentials plus a client-side captcha. Repeated failures lock the form
//! behind an escalating cooldown with a live countdown.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, Page};
use crate::error::ApiError;
use crate::forms::{captcha_matches, generate_captcha, LoginForm};
use crate::throttle::{format_remaining, LoginThrottle};

fn new_captcha() -> String {
    generate_captcha(js_sys::Math::random)
}

#[component]
pub fn AdminLogin() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(LoginForm::default());
    let throttle = RwSignal::new(LoginThrottle::new());
    let captcha = RwSignal::new(new_captcha());
    let (captcha_input, set_captcha_input) = signal(String::new());
    let (remaining, set_remaining) = signal(0u64);
    let (busy, set_busy) = signal(false);

    // One-second countdown until the cooldown elapses
    let start_countdown = move || {
        spawn_local(async move {
            loop {
                let now = Utc::now();
                let Some(locked) = throttle.try_update(|t| t.tick(now)) else {
                    break;
                };
                let secs = throttle.with_untracked(|t| t.remaining(now));
                set_remaining.set(secs);
                if !locked {
                    break;
                }
                TimeoutFuture::new(1_000).await;
            }
        });
    };

    let refresh_captcha = move || {
        captcha.set(new_captcha());
        set_captcha_input.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if throttle.with_untracked(|t| t.is_locked(Utc::now())) {
            ctx.notices.error(format!(
                "Too many failed attempts. Try again in {}.",
                format_remaining(remaining.get_untracked())
            ));
            return;
        }
        if !captcha_matches(&captcha.get_untracked(), &captcha_input.get_untracked()) {
            ctx.notices.error("Captcha does not match. Please try again.");
            refresh_captcha();
            return;
        }
        let creds = match form.with_untracked(LoginForm::validate) {
            Ok(creds) => creds,
            Err(err) => {
                ctx.notices.error(err.to_string());
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::login_officer(&creds).await {
                Ok(grant) => {
                    throttle.update(LoginThrottle::reset);
                    ctx.notices.success(format!("Welcome, {}", grant.display_name));
                    ctx.login(grant);
                    ctx.navigate(Page::AdminIssue);
                }
                Err(err @ (ApiError::Rejected(_) | ApiError::Unauthorized | ApiError::NotFound)) => {
                    let now = Utc::now();
                    throttle.update(|t| t.record_failure(now));
                    let (failures, locked) = throttle.with_untracked(|t| (t.failures(), t.is_locked(now)));
                    log::warn!("[AUTH] officer login failed ({} so far)", failures);
                    ctx.notices.error(err.to_string());
                    refresh_captcha();
                    if locked {
                        start_countdown();
                    }
                }
                Err(err) => {
                    ctx.notices.error(err.to_string());
                }
            }
            set_busy.set(false);
        });
    };

    let locked = move || remaining.get() > 0;

    view! {
        <section class="admin-login">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Officer Login"</h2>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.identifier.clone())
                    on:input=move |ev| form.update(|f| f.identifier = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <div class="captcha-row">
                    <span class="captcha-code">{move || captcha.get()}</span>
                    <button type="button" class="captcha-refresh" title="New code" on:click=move |_| refresh_captcha()>
                        "↻"
                    </button>
                    <input
                        type="text"
                        placeholder="Enter the code"
                        prop:value=move || captcha_input.get()
                        on:input=move |ev| set_captcha_input.set(event_target_value(&ev))
                    />
                </div>
                <Show when=locked>
                    <p class="lockout">
                        "Too many failed attempts. Try again in "
                        {move || format_remaining(remaining.get())}
                    </p>
                </Show>
                <button type="submit" disabled=move || busy.get() || locked()>
                    {move || if busy.get() { "Signing in..." } else { "Log In" }}
                </button>
            </form>
        </section>
    }
}
