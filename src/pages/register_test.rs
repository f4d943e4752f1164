use super::*;

fn form() -> RegisterForm {
    RegisterForm {
        name: " Ravi Kumar ".to_owned(),
        email: " ravi@clinic.test ".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        role: Role::Patient,
    }
}

#[test]
fn validate_registration_builds_trimmed_request() {
    let request = validate_registration(&form()).unwrap();
    assert_eq!(request.name, "Ravi Kumar");
    assert_eq!(request.email, "ravi@clinic.test");
    assert_eq!(request.role, Role::Patient);
}

#[test]
fn validate_registration_rejects_mismatched_passwords() {
    let mut input = form();
    input.confirm_password = "other".to_owned();
    assert_eq!(validate_registration(&input), Err("Passwords do not match"));
}

#[test]
fn validate_registration_requires_core_fields() {
    let mut input = form();
    input.email = "  ".to_owned();
    assert_eq!(validate_registration(&input), Err("Fill in name, email and password."));
}

#[test]
fn validate_registration_rejects_unknown_role() {
    let mut input = form();
    input.role = Role::from("admin");
    assert_eq!(validate_registration(&input), Err("Choose a role."));
}

#[test]
fn role_choices_round_trip_through_the_select() {
    let choices = role_choices();
    assert_eq!(choices, vec!["patient", "doctor", "receptionist"]);
    for value in choices {
        assert!(Role::from(value).is_recognized());
    }
}
