//! Login page: email + password exchanged for a bearer token.
//!
//! On success the session is updated through [`AuthContext::sign_in`]; the
//! navigation guard then sees an authenticated session on `/login` and
//! redirects home, so this page never navigates itself.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::LoginRequest;
use crate::state::auth::AuthContext;

const MISSING_FIELDS: &str = "Enter both email and password.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Trim and check the form fields before hitting the API.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err(INVALID_EMAIL),
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&auth.client(), &credentials).await {
                Ok(resp) => match auth.sign_in(resp) {
                    Ok(()) => info.set(String::new()),
                    Err(e) => {
                        log::error!("login: session not persisted: {e}");
                        info.set(format!("Signed in, but the session could not be saved: {e}"));
                    }
                },
                Err(e) => info.set(format!("Sign-in failed: {e}")),
            }
            password.set(String::new());
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (auth, credentials);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Preservation"</h1>
                <p class="login-card__subtitle">"Equipment maintenance"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
