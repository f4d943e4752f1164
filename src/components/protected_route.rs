//! Route guard wrapper for screens that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps route views in `app.rs`. The decision itself is the pure
//! `util::auth::guard_decision`; this component only renders or navigates
//! from it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionSnapshot;
use crate::util::auth::{GuardDecision, guard_decision};

/// Render `children` only when the session admits them.
///
/// While the session is pending this shows a loading indicator and never
/// redirects.
#[component]
pub fn ProtectedRoute(
    /// Role required to view the content; any signed-in user when omitted.
    #[prop(optional)]
    role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionSnapshot>>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| guard_decision(&session.get(), role.as_ref()));

    Effect::new(move || {
        if let Some(path) = decision.get().redirect_path() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <div class="route-guard__loading">"Loading..."</div> }.into_any(),
        GuardDecision::Admit => children().into_any(),
        GuardDecision::RedirectToLogin | GuardDecision::RedirectToDenied => ().into_any(),
    }
}
