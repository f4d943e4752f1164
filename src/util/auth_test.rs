use super::*;
use crate::net::types::Identity;

fn signed_in(role: &str) -> SessionSnapshot {
    SessionSnapshot::Authenticated(Identity {
        id: "u1".to_owned(),
        display_name: "Amina".to_owned(),
        email: "amina@clinic.test".to_owned(),
        role: Role::from(role),
    })
}

// =============================================================
// guard_decision
// =============================================================

#[test]
fn pending_shows_loading_for_every_requirement() {
    let requirements = [
        None,
        Some(Role::Doctor),
        Some(Role::Patient),
        Some(Role::Receptionist),
        Some(Role::from("admin")),
    ];
    for required in &requirements {
        let decision = guard_decision(&SessionSnapshot::Pending, required.as_ref());
        assert_eq!(decision, GuardDecision::Loading);
        assert_eq!(decision.redirect_path(), None);
    }
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(guard_decision(&SessionSnapshot::Unauthenticated, None), GuardDecision::RedirectToLogin);
    assert_eq!(
        guard_decision(&SessionSnapshot::Unauthenticated, Some(&Role::Doctor)),
        GuardDecision::RedirectToLogin
    );
    assert_eq!(GuardDecision::RedirectToLogin.redirect_path(), Some("/login"));
}

#[test]
fn matching_role_is_admitted() {
    assert_eq!(guard_decision(&signed_in("doctor"), Some(&Role::Doctor)), GuardDecision::Admit);
}

#[test]
fn any_recognized_role_is_admitted_without_requirement() {
    for role in ["doctor", "patient", "receptionist"] {
        assert_eq!(guard_decision(&signed_in(role), None), GuardDecision::Admit);
    }
}

#[test]
fn role_mismatch_goes_to_access_denied_not_login() {
    let roles = [Role::Doctor, Role::Patient, Role::Receptionist];
    for actual in &roles {
        for required in &roles {
            if actual == required {
                continue;
            }
            let decision = guard_decision(&signed_in(actual.as_str()), Some(required));
            assert_eq!(decision, GuardDecision::RedirectToDenied, "{actual} requiring {required}");
            assert_eq!(decision.redirect_path(), Some("/not-authorized"));
        }
    }
}

#[test]
fn any_signed_in_role_passes_an_open_guard() {
    assert_eq!(guard_decision(&signed_in("janitor"), None), GuardDecision::Admit);
    assert_eq!(guard_decision(&signed_in("janitor"), Some(&Role::Patient)), GuardDecision::RedirectToDenied);
}

#[test]
fn doctor_scenario_admits_dashboard_and_denies_patient_view() {
    let snapshot = signed_in("doctor");
    assert_eq!(guard_decision(&snapshot, Some(&Role::Doctor)), GuardDecision::Admit);
    assert_eq!(guard_decision(&snapshot, Some(&Role::Patient)), GuardDecision::RedirectToDenied);
}

// =============================================================
// RoleRoutes
// =============================================================

#[test]
fn default_role_routes_match_clinic_screens() {
    let routes = RoleRoutes::default();
    assert_eq!(routes.landing_for(&Role::Doctor), DASHBOARD_PATH);
    assert_eq!(routes.landing_for(&Role::Patient), PATIENT_REGISTRATION_PATH);
    assert_eq!(routes.landing_for(&Role::Receptionist), HOME_PATH);
}

#[test]
fn unknown_role_lands_on_access_denied() {
    assert_eq!(RoleRoutes::default().landing_for(&Role::from("admin")), NOT_AUTHORIZED_PATH);
}

#[test]
fn with_route_overrides_existing_entry() {
    let routes = RoleRoutes::default().with_route(Role::Receptionist, ATTENDANCE_PATH);
    assert_eq!(routes.landing_for(&Role::Receptionist), ATTENDANCE_PATH);
    assert_eq!(routes.landing_for(&Role::Doctor), DASHBOARD_PATH);
}
