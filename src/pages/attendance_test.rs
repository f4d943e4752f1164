use super::*;

fn record(id: &str, date: &str, payment_method: PaymentMethod) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_owned(),
        date: date.to_owned(),
        patient_name: "Sara Khan".to_owned(),
        patient_id: "p1".to_owned(),
        case_details: "Homeopathic".to_owned(),
        remedy: "Arnica".to_owned(),
        payment_method,
        doctor_id: None,
    }
}

fn patient(id: &str, name: &str) -> Patient {
    Patient {
        id: id.to_owned(),
        full_name: name.to_owned(),
        age: 30,
        gender: "male".to_owned(),
        phone: String::new(),
        address: String::new(),
        medical_history: String::new(),
        current_medications: String::new(),
        allergies: String::new(),
        chief_complaint: String::new(),
        created_at: String::new(),
    }
}

fn form() -> AttendanceForm {
    AttendanceForm {
        date: "2024-03-05".to_owned(),
        patient_id: "p2".to_owned(),
        case_details: " Homeopathic ".to_owned(),
        remedy: "Arnica".to_owned(),
        payment_method: PaymentMethod::Upi,
    }
}

fn day(raw: &str) -> NaiveDate {
    day_of(raw).unwrap()
}

// =============================================================================
// Per-day view
// =============================================================================

#[test]
fn records_on_matches_plain_dates_and_timestamps() {
    let all = vec![
        record("a", "2024-03-05", PaymentMethod::Cash),
        record("b", "2024-03-05T18:30:00.000Z", PaymentMethod::Upi),
        record("c", "2024-03-06", PaymentMethod::Cash),
    ];
    let ids: Vec<_> = records_on(&all, day("2024-03-05")).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn records_on_skips_unparseable_dates() {
    let all = vec![record("a", "not a date", PaymentMethod::Cash)];
    assert!(records_on(&all, day("2024-03-05")).is_empty());
}

#[test]
fn next_serial_counts_only_the_selected_day() {
    let all = vec![record("a", "2024-03-05", PaymentMethod::Cash), record("b", "2024-03-04", PaymentMethod::Cash)];
    assert_eq!(next_serial(&all, day("2024-03-05")), 2);
    assert_eq!(next_serial(&all, day("2024-03-07")), 1);
}

#[test]
fn payment_labels_and_markers_differ_per_method() {
    assert_eq!(payment_label(PaymentMethod::Upi), "UPI");
    assert_ne!(payment_marker(PaymentMethod::Cash), payment_marker(PaymentMethod::Upi));
}

// =============================================================================
// Form validation
// =============================================================================

#[test]
fn build_attendance_resolves_patient_name_from_id() {
    let patients = vec![patient("p1", "Sara Khan"), patient("p2", "Ravi Kumar")];
    let built = build_attendance(&form(), &patients).unwrap();
    assert_eq!(built.patient_name, "Ravi Kumar");
    assert_eq!(built.patient_id, "p2");
    assert_eq!(built.case_details, "Homeopathic");
    assert_eq!(built.date, "2024-03-05");
    assert_eq!(built.payment_method, PaymentMethod::Upi);
}

#[test]
fn build_attendance_requires_known_patient() {
    let patients = vec![patient("p1", "Sara Khan")];
    assert_eq!(build_attendance(&form(), &patients), Err("Select a patient."));
}

#[test]
fn build_attendance_rejects_bad_date() {
    let patients = vec![patient("p2", "Ravi Kumar")];
    let mut input = form();
    input.date = "05/03/2024".to_owned();
    assert_eq!(build_attendance(&input, &patients), Err("Choose a valid date."));
}

#[test]
fn build_attendance_requires_case_and_remedy() {
    let patients = vec![patient("p2", "Ravi Kumar")];
    let mut input = form();
    input.remedy = " ".to_owned();
    assert_eq!(build_attendance(&input, &patients), Err("Fill in case details and remedy."));
}
