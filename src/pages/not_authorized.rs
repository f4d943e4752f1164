//! Shown when a signed-in user opens a screen their role cannot use.

use leptos::prelude::*;

use crate::util::auth::HOME_PATH;

#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    view! {
        <div class="panel not-authorized-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have access to this page."</p>
            <a href=HOME_PATH class="btn">
                "Back to home"
            </a>
        </div>
    }
}
