use super::*;

fn filled() -> PatientForm {
    PatientForm {
        full_name: " Sara Khan ".to_owned(),
        age: "34".to_owned(),
        gender: "female".to_owned(),
        phone: "98450 11111".to_owned(),
        address: "12 Lake Road".to_owned(),
        medical_history: String::new(),
        current_medications: String::new(),
        allergies: " dust ".to_owned(),
        chief_complaint: "Fever".to_owned(),
    }
}

#[test]
fn validate_intake_builds_trimmed_patient() {
    let patient = validate_intake(&filled()).unwrap();
    assert_eq!(patient.full_name, "Sara Khan");
    assert_eq!(patient.age, 34);
    assert_eq!(patient.gender, "female");
    assert_eq!(patient.allergies, "dust");
    assert!(patient.medical_history.is_empty());
}

#[test]
fn validate_intake_requires_core_fields() {
    let mut form = filled();
    form.chief_complaint = "   ".to_owned();
    assert_eq!(validate_intake(&form), Err("Fill in name, phone, address and chief complaint."));
}

#[test]
fn validate_intake_rejects_non_numeric_or_negative_age() {
    for age in ["", "abc", "-3", "4.5"] {
        let mut form = filled();
        form.age = age.to_owned();
        assert_eq!(validate_intake(&form), Err("Age must be a whole number."), "age {age:?}");
    }
}

#[test]
fn validate_intake_accepts_zero_age() {
    let mut form = filled();
    form.age = "0".to_owned();
    assert_eq!(validate_intake(&form).unwrap().age, 0);
}

#[test]
fn validate_intake_rejects_unknown_gender() {
    let mut form = filled();
    form.gender = "unknown".to_owned();
    assert_eq!(validate_intake(&form), Err("Choose a gender."));
}
