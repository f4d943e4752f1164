//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session snapshot from Leptos context; only the
//! navbar's logout button writes to the session store.

pub mod form_field;
pub mod navbar;
pub mod protected_route;
