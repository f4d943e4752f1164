//! Shared auth routing policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same guard decision, and the login flow
//! picks its post-login destination from the same role table, so redirect
//! behavior stays identical across screens.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::session::SessionSnapshot;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PATIENT_REGISTRATION_PATH: &str = "/patient-registration";
pub const ATTENDANCE_PATH: &str = "/attendance";
pub const NOT_AUTHORIZED_PATH: &str = "/not-authorized";

/// Outcome of guarding a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: show a neutral loading state, do not redirect.
    Loading,
    RedirectToLogin,
    RedirectToDenied,
    Admit,
}

impl GuardDecision {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToDenied => Some(NOT_AUTHORIZED_PATH),
            Self::Loading | Self::Admit => None,
        }
    }
}

/// Decide whether a view requiring `required` may render for `snapshot`.
///
/// Order matters: pending is checked before authentication, and
/// authentication before role, so a refresh never bounces a signed-in user
/// to the login page while verification is still in flight.
///
/// With no `required` role every signed-in identity is admitted, including
/// one whose role is `Unrecognized`; only a role-specific guard denies it.
pub fn guard_decision(snapshot: &SessionSnapshot, required: Option<&Role>) -> GuardDecision {
    let identity = match snapshot {
        SessionSnapshot::Pending => return GuardDecision::Loading,
        SessionSnapshot::Unauthenticated => return GuardDecision::RedirectToLogin,
        SessionSnapshot::Authenticated(identity) => identity,
    };
    match required {
        Some(role) if *role != identity.role => GuardDecision::RedirectToDenied,
        _ => GuardDecision::Admit,
    }
}

/// Post-login destination per role.
///
/// Roles without an entry (including unrecognized ones) land on the
/// access-denied page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRoutes {
    routes: Vec<(Role, &'static str)>,
    fallback: &'static str,
}

impl RoleRoutes {
    pub fn landing_for(&self, role: &Role) -> &'static str {
        self.routes
            .iter()
            .find(|(candidate, _)| candidate == role)
            .map_or(self.fallback, |(_, path)| *path)
    }

    /// Add or replace the destination for `role`.
    #[must_use]
    pub fn with_route(mut self, role: Role, path: &'static str) -> Self {
        self.routes.retain(|(candidate, _)| *candidate != role);
        self.routes.push((role, path));
        self
    }
}

impl Default for RoleRoutes {
    fn default() -> Self {
        Self {
            routes: vec![
                (Role::Doctor, DASHBOARD_PATH),
                (Role::Patient, PATIENT_REGISTRATION_PATH),
                (Role::Receptionist, HOME_PATH),
            ],
            fallback: NOT_AUTHORIZED_PATH,
        }
    }
}
