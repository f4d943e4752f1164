use super::*;

fn patient(id: &str, name: &str, phone: &str) -> Patient {
    Patient {
        id: id.to_owned(),
        full_name: name.to_owned(),
        age: 34,
        gender: "female".to_owned(),
        phone: phone.to_owned(),
        address: String::new(),
        medical_history: String::new(),
        current_medications: String::new(),
        allergies: String::new(),
        chief_complaint: String::new(),
        created_at: "2024-03-05T10:00:00.000Z".to_owned(),
    }
}

fn roster() -> Vec<Patient> {
    vec![patient("p1", "Sara Khan", "98450 11111"), patient("p2", "Ravi Kumar", "99000 22222")]
}

#[test]
fn empty_search_returns_everyone() {
    let all = roster();
    assert_eq!(filter_patients(&all, "  ").len(), 2);
}

#[test]
fn search_matches_name_case_insensitively() {
    let all = roster();
    let ids: Vec<_> = filter_patients(&all, "RAVI").iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2"]);
}

#[test]
fn search_matches_phone_substring() {
    let all = roster();
    let ids: Vec<_> = filter_patients(&all, "11111").iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1"]);
}

#[test]
fn empty_message_depends_on_search_term() {
    assert_eq!(empty_list_message(""), "No patients registered yet");
    assert_eq!(empty_list_message("zzz"), "No patients match your search");
}

#[test]
fn age_and_gender_label() {
    assert_eq!(age_and_gender(&patient("p1", "Sara", "1")), "34 years, female");
}

#[test]
fn blank_medical_fields_read_none_specified() {
    assert_eq!(or_none_specified("  "), "None specified");
    assert_eq!(or_none_specified("Penicillin"), "Penicillin");
}
