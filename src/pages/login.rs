//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exchanges credentials for a token, hands the token to the session store,
//! and then navigates by the verified role. The session store never
//! navigates on its own.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::TextField;
use crate::net::api::ApiClient;
use crate::net::types::{Credentials, Identity};
use crate::state::ClinicSession;
use crate::util::auth::{REGISTER_PATH, RoleRoutes};

const LOGIN_FAILED: &str = "Login failed. Please try again.";

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Log in and return the verified identity, or a message for the form.
async fn sign_in(api: &ApiClient, session: &ClinicSession, credentials: &Credentials) -> Result<Identity, String> {
    let response = api.login(credentials).await.map_err(|err| {
        log::warn!("login request failed: {err}");
        err.user_message(LOGIN_FAILED)
    })?;
    session.login(&response.token).await.ok_or_else(|| LOGIN_FAILED.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<ClinicSession>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sign_in(&api, &session, &credentials).await {
                Ok(identity) => {
                    password.set(String::new());
                    navigate(RoleRoutes::default().landing_for(&identity.role), NavigateOptions::default());
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Shifa Clinic Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <TextField
                        id="email"
                        label="Email"
                        value=email
                        kind="email"
                        placeholder="Enter your email"
                        required=true
                    />
                    <TextField
                        id="password"
                        label="Password"
                        value=password
                        kind="password"
                        placeholder="Enter your password"
                        required=true
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "No account? " <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
