//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::pages::{
    attendance::AttendancePage, dashboard::DashboardPage, landing::LandingPage, login::LoginPage,
    not_authorized::NotAuthorizedPage, patient_registration::PatientRegistrationPage, register::RegisterPage,
};
use crate::state::ClinicSession;
use crate::util::storage::LocalTokenStorage;

/// Root application component.
///
/// Builds the API client and session store, mirrors session snapshots into a
/// signal for the UI, and starts verifying any persisted token.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = ApiClient::new(&config);
    let session = ClinicSession::new(LocalTokenStorage::new(&config.token_key), api.clone());

    let snapshot = RwSignal::new(session.snapshot());
    session.subscribe(move |next| {
        // Signal is gone once the app unmounts.
        let _ = snapshot.try_set(next.clone());
    });

    provide_context(config);
    provide_context(api);
    provide_context(session.clone());
    provide_context(snapshot.read_only());

    {
        let session = session.clone();
        leptos::task::spawn_local(async move { session.initialize().await });
    }
    on_cleanup(move || session.detach());

    view! {
        <Title text="Shifa Clinic"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute role=Role::Doctor>
                                    <DashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("attendance")
                        view=|| {
                            view! {
                                <ProtectedRoute role=Role::Doctor>
                                    <AttendancePage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("patient-registration")
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <PatientRegistrationPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route path=StaticSegment("not-authorized") view=NotAuthorizedPage/>
                </Routes>
            </main>
        </Router>
    }
}
