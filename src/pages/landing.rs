//! Home screen at `/`.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::navbar::nav_links;
use crate::pages::login::LoginPage;
use crate::state::session::SessionSnapshot;

/// Whether `/` shows the login form for `snapshot`.
///
/// A form that is already on screen stays mounted while a submitted login is
/// pending, so a failed attempt keeps its error message and typed email.
fn shows_login_form(showing: Option<bool>, snapshot: &SessionSnapshot) -> bool {
    match snapshot {
        SessionSnapshot::Unauthenticated => true,
        SessionSnapshot::Authenticated(_) => false,
        SessionSnapshot::Pending => showing.unwrap_or(false),
    }
}

/// Signed-in users get a welcome and their screen links; everyone else gets
/// the login form.
#[component]
pub fn LandingPage() -> impl IntoView {
    let snapshot = expect_context::<ReadSignal<SessionSnapshot>>();
    let login_form = Memo::new(move |showing: Option<&bool>| snapshot.with(|s| shows_login_form(showing.copied(), s)));

    let welcome = move || match snapshot.get() {
        SessionSnapshot::Authenticated(identity) => {
            let links = nav_links(&identity.role)
                .iter()
                .map(|&(label, href)| {
                    view! {
                        <li>
                            <a href=href class="btn">
                                {label}
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="panel landing-page">
                    <h1>"Welcome to Shifa Clinic, " {identity.display_name}</h1>
                    <ul class="landing-page__links">{links}</ul>
                </div>
            }
                .into_any()
        }
        SessionSnapshot::Pending | SessionSnapshot::Unauthenticated => {
            view! { <div class="route-guard__loading">"Loading..."</div> }.into_any()
        }
    };

    view! {
        <Show when=move || login_form.get() fallback=welcome>
            <LoginPage/>
        </Show>
    }
}
