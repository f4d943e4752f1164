//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::TextField;
use crate::net::api::ApiClient;
use crate::net::types::{RegisterRequest, Role};
use crate::util::auth::LOGIN_PATH;

const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    role: Role,
}

fn validate_registration(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match");
    }
    if !form.role.is_recognized() {
        return Err("Choose a role.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role: form.role.clone(),
    })
}

/// `<option>` values for the role select, parsed back with `Role::from`.
fn role_choices() -> Vec<String> {
    Role::SELECTABLE.iter().map(Role::to_string).collect()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Patient);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            role: role.get_untracked(),
        };
        let request = match validate_registration(&form) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.register(&request).await {
                Ok(()) => navigate(LOGIN_PATH, NavigateOptions::default()),
                Err(err) => {
                    log::warn!("registration failed: {err}");
                    error.set(err.user_message(REGISTRATION_FAILED));
                }
            }
            busy.set(false);
        });
    };

    let role_options = role_choices()
        .into_iter()
        .map(|value| {
            let label = value.clone();
            view! { <option value=value>{label}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="register-page">
            <div class="login-card">
                <h1>"Shifa Clinic Registration"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <TextField id="name" label="Name" value=name required=true/>
                    <TextField id="email" label="Email" value=email kind="email" required=true/>
                    <TextField id="password" label="Password" value=password kind="password" required=true/>
                    <TextField
                        id="confirmPassword"
                        label="Confirm Password"
                        value=confirm_password
                        kind="password"
                        required=true
                    />
                    <div class="form-field">
                        <label class="form-label" for="role">
                            "Role"
                        </label>
                        <select
                            class="form-input"
                            id="role"
                            prop:value=move || role.get().to_string()
                            on:change=move |ev| role.set(Role::from(event_target_value(&ev)))
                        >
                            {role_options}
                        </select>
                    </div>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
