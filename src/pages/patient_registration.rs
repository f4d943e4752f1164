//! Patient intake form.

#[cfg(test)]
#[path = "patient_registration_test.rs"]
mod patient_registration_test;

use leptos::prelude::*;

use crate::components::form_field::{TextAreaField, TextField};
use crate::net::api::ApiClient;
use crate::net::types::NewPatient;

const INTAKE_SAVED: &str = "Registration successful! Your information has been saved.";
const INTAKE_FAILED: &str = "Registration failed. Please try again.";
const GENDERS: [(&str, &str); 3] = [("male", "Male"), ("female", "Female"), ("other", "Other")];
const DEFAULT_GENDER: &str = "male";

/// Raw form text before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PatientForm {
    full_name: String,
    age: String,
    gender: String,
    phone: String,
    address: String,
    medical_history: String,
    current_medications: String,
    allergies: String,
    chief_complaint: String,
}

fn validate_intake(form: &PatientForm) -> Result<NewPatient, &'static str> {
    let full_name = form.full_name.trim();
    let phone = form.phone.trim();
    let address = form.address.trim();
    let chief_complaint = form.chief_complaint.trim();
    if full_name.is_empty() || phone.is_empty() || address.is_empty() || chief_complaint.is_empty() {
        return Err("Fill in name, phone, address and chief complaint.");
    }
    let age = form.age.trim().parse::<u32>().map_err(|_| "Age must be a whole number.")?;
    if !GENDERS.iter().any(|(value, _)| *value == form.gender) {
        return Err("Choose a gender.");
    }
    Ok(NewPatient {
        full_name: full_name.to_owned(),
        age,
        gender: form.gender.clone(),
        phone: phone.to_owned(),
        address: address.to_owned(),
        medical_history: form.medical_history.trim().to_owned(),
        current_medications: form.current_medications.trim().to_owned(),
        allergies: form.allergies.trim().to_owned(),
        chief_complaint: chief_complaint.to_owned(),
    })
}

/// One signal per input, so each field can bind to a `TextField`.
#[derive(Clone, Copy)]
struct IntakeSignals {
    full_name: RwSignal<String>,
    age: RwSignal<String>,
    gender: RwSignal<String>,
    phone: RwSignal<String>,
    address: RwSignal<String>,
    medical_history: RwSignal<String>,
    current_medications: RwSignal<String>,
    allergies: RwSignal<String>,
    chief_complaint: RwSignal<String>,
}

impl IntakeSignals {
    fn new() -> Self {
        Self {
            full_name: RwSignal::new(String::new()),
            age: RwSignal::new(String::new()),
            gender: RwSignal::new(DEFAULT_GENDER.to_owned()),
            phone: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            medical_history: RwSignal::new(String::new()),
            current_medications: RwSignal::new(String::new()),
            allergies: RwSignal::new(String::new()),
            chief_complaint: RwSignal::new(String::new()),
        }
    }

    fn read(self) -> PatientForm {
        PatientForm {
            full_name: self.full_name.get_untracked(),
            age: self.age.get_untracked(),
            gender: self.gender.get_untracked(),
            phone: self.phone.get_untracked(),
            address: self.address.get_untracked(),
            medical_history: self.medical_history.get_untracked(),
            current_medications: self.current_medications.get_untracked(),
            allergies: self.allergies.get_untracked(),
            chief_complaint: self.chief_complaint.get_untracked(),
        }
    }

    fn reset(self) {
        for field in [
            self.full_name,
            self.age,
            self.phone,
            self.address,
            self.medical_history,
            self.current_medications,
            self.allergies,
            self.chief_complaint,
        ] {
            field.set(String::new());
        }
        self.gender.set(DEFAULT_GENDER.to_owned());
    }
}

#[component]
pub fn PatientRegistrationPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let fields = IntakeSignals::new();
    let success = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        success.set(String::new());
        let patient = match validate_intake(&fields.read()) {
            Ok(patient) => patient,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.create_patient(&patient).await {
                Ok(()) => {
                    success.set(INTAKE_SAVED.to_owned());
                    fields.reset();
                }
                Err(err) => {
                    log::warn!("patient intake failed: {err}");
                    error.set(err.user_message(INTAKE_FAILED));
                }
            }
            busy.set(false);
        });
    };

    let gender_options = GENDERS
        .iter()
        .map(|&(value, label)| view! { <option value=value>{label}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="panel intake-page">
            <header class="panel__header">
                <h2>"Patient Registration Form"</h2>
            </header>
            <Show when=move || !success.get().is_empty()>
                <p class="form-success">{move || success.get()}</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="form-error">{move || error.get()}</p>
            </Show>
            <form class="intake-form" on:submit=on_submit>
                <TextField id="fullName" label="Full Name" value=fields.full_name placeholder="Full Name" required=true/>
                <TextField id="age" label="Age" value=fields.age kind="number" placeholder="Age" required=true/>
                <div class="form-field">
                    <label class="form-label" for="gender">
                        "Gender"
                    </label>
                    <select
                        class="form-input"
                        id="gender"
                        name="gender"
                        prop:value=move || fields.gender.get()
                        on:change=move |ev| fields.gender.set(event_target_value(&ev))
                    >
                        {gender_options}
                    </select>
                </div>
                <TextField
                    id="phone"
                    label="Phone Number"
                    value=fields.phone
                    kind="tel"
                    placeholder="Phone Number"
                    required=true
                />
                <TextAreaField id="address" label="Address" value=fields.address placeholder="Address" required=true/>
                <TextAreaField
                    id="medicalHistory"
                    label="Medical History"
                    value=fields.medical_history
                    placeholder="Previous medical conditions, surgeries, etc."
                />
                <TextAreaField
                    id="currentMedications"
                    label="Current Medications"
                    value=fields.current_medications
                    placeholder="List any medications you are currently taking"
                />
                <TextAreaField
                    id="allergies"
                    label="Allergies"
                    value=fields.allergies
                    placeholder="List any allergies you have"
                />
                <TextAreaField
                    id="chiefComplaint"
                    label="Chief Complaint"
                    value=fields.chief_complaint
                    placeholder="Describe your main reason for visit"
                    required=true
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Registration" }}
                </button>
            </form>
        </div>
    }
}
