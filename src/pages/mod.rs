//! Route-level screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page pulls `ApiClient` and the session from context. Pages that need
//! a role are wrapped in `ProtectedRoute` by `app.rs`, never guarded here.

pub mod attendance;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_authorized;
pub mod patient_registration;
pub mod register;
