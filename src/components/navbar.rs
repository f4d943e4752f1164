//! Top navigation bar with session-aware links.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::ClinicSession;
use crate::state::session::SessionSnapshot;
use crate::util::auth::{
    ATTENDANCE_PATH, DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, PATIENT_REGISTRATION_PATH, REGISTER_PATH,
};

/// Screen links offered to each role as `(label, path)`.
pub fn nav_links(role: &Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Doctor => &[("Dashboard", DASHBOARD_PATH), ("Attendance Sheet", ATTENDANCE_PATH)],
        Role::Patient | Role::Receptionist => &[("Patient Registration", PATIENT_REGISTRATION_PATH)],
        Role::Unrecognized(_) => &[],
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let snapshot = expect_context::<ReadSignal<SessionSnapshot>>();

    view! {
        <nav class="navbar">
            <a href=HOME_PATH class="navbar__brand">
                "Shifa Clinic"
            </a>
            {move || match snapshot.get() {
                SessionSnapshot::Authenticated(identity) => {
                    let links = nav_links(&identity.role)
                        .iter()
                        .map(|&(label, href)| view! { <a href=href class="navbar__link">{label}</a> })
                        .collect::<Vec<_>>();
                    view! {
                        <div class="navbar__session">
                            <span class="navbar__welcome">"Welcome, " {identity.display_name}</span>
                            {links}
                            <LogoutButton/>
                        </div>
                    }
                        .into_any()
                }
                SessionSnapshot::Unauthenticated => {
                    view! {
                        <div class="navbar__guest">
                            <a href=LOGIN_PATH class="navbar__link">"Login"</a>
                            <a href=REGISTER_PATH class="navbar__link navbar__link--cta">"Register"</a>
                        </div>
                    }
                        .into_any()
                }
                SessionSnapshot::Pending => ().into_any(),
            }}
        </nav>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let session = expect_context::<ClinicSession>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <button class="navbar__logout" on:click=on_logout>
            "Logout"
        </button>
    }
}
