//! Doctor dashboard: searchable patient list with a detail panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind a doctor-only route guard. Fetches the patient list once on
//! mount and again on demand; responses that arrive after the page unmounts
//! are dropped.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::Patient;
use crate::util::dates::format_day;

const PATIENTS_FAILED: &str = "Failed to fetch patients. Please try again.";
const NONE_SPECIFIED: &str = "None specified";

/// Patients whose name (case-insensitive) or phone contains `term`.
fn filter_patients<'a>(patients: &'a [Patient], term: &str) -> Vec<&'a Patient> {
    let term = term.trim();
    if term.is_empty() {
        return patients.iter().collect();
    }
    let needle = term.to_lowercase();
    patients
        .iter()
        .filter(|p| p.full_name.to_lowercase().contains(&needle) || p.phone.contains(term))
        .collect()
}

fn empty_list_message(term: &str) -> &'static str {
    if term.trim().is_empty() { "No patients registered yet" } else { "No patients match your search" }
}

fn age_and_gender(patient: &Patient) -> String {
    format!("{} years, {}", patient.age, patient.gender)
}

fn or_none_specified(value: &str) -> String {
    if value.trim().is_empty() { NONE_SPECIFIED.to_owned() } else { value.to_owned() }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let patients = RwSignal::new(Vec::<Patient>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Patient>);

    let alive = Arc::new(AtomicBool::new(true));
    let refresh = {
        let alive = Arc::clone(&alive);
        Callback::new(move |()| {
            loading.set(true);
            let api = api.clone();
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = api.list_patients().await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(list) => {
                        patients.set(list);
                        error.set(None);
                    }
                    Err(err) => {
                        log::warn!("patient list fetch failed: {err}");
                        error.set(Some(PATIENTS_FAILED.to_owned()));
                    }
                }
                loading.set(false);
            });
        })
    };
    refresh.run(());
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let patient_list = move || {
        if loading.get() {
            return view! { <p class="panel__status">"Loading patients..."</p> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! { <p class="panel__status panel__status--error">{message}</p> }.into_any();
        }
        let term = search.get();
        let all = patients.get();
        let visible = filter_patients(&all, &term);
        if visible.is_empty() {
            return view! { <p class="panel__status">{empty_list_message(&term)}</p> }.into_any();
        }
        let rows = visible
            .into_iter()
            .enumerate()
            .map(|(index, patient)| {
                let id = patient.id.clone();
                let row_class = move || {
                    let is_selected = selected.with(|s| s.as_ref().is_some_and(|p| p.id == id));
                    if is_selected { "patient-list__item patient-list__item--selected" } else { "patient-list__item" }
                };
                let pick = patient.clone();
                view! {
                    <li class=row_class on:click=move |_| selected.set(Some(pick.clone()))>
                        <p class="patient-list__name">
                            <span class="patient-list__serial">{format!("{}. ", index + 1)}</span>
                            {patient.full_name.clone()}
                        </p>
                        <p class="patient-list__meta">{age_and_gender(patient)}</p>
                        <p class="patient-list__date">{format_day(&patient.created_at)}</p>
                    </li>
                }
            })
            .collect::<Vec<_>>();
        view! { <ul class="patient-list__items">{rows}</ul> }.into_any()
    };

    view! {
        <div class="dashboard-page">
            <section class="panel patient-list">
                <header class="panel__header">
                    <h2>"Patient List"</h2>
                    <button class="btn" title="Refresh patient list" on:click=move |_| refresh.run(())>
                        "Refresh"
                    </button>
                </header>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Search patients..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                {patient_list}
            </section>
            <section class="panel patient-details">
                {move || match selected.get() {
                    Some(patient) => view! { <PatientDetails patient=patient/> }.into_any(),
                    None => {
                        view! {
                            <div class="patient-details__empty">
                                <h3>"No Patient Selected"</h3>
                                <p>
                                    "Select a patient from the list to view their detailed information and medical history."
                                </p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn PatientDetails(patient: Patient) -> impl IntoView {
    view! {
        <header class="panel__header">
            <h2>"Patient Details"</h2>
        </header>
        <div class="patient-details__grid">
            <div>
                <h3>"Personal Information"</h3>
                <DetailRow label="Full Name" value=patient.full_name.clone()/>
                <DetailRow label="Age & Gender" value=age_and_gender(&patient)/>
                <DetailRow label="Phone" value=patient.phone.clone()/>
                <DetailRow label="Address" value=patient.address.clone()/>
                <DetailRow label="Registration Date" value=format_day(&patient.created_at)/>
            </div>
            <div>
                <h3>"Medical Information"</h3>
                <DetailRow label="Chief Complaint" value=or_none_specified(&patient.chief_complaint)/>
                <DetailRow label="Medical History" value=or_none_specified(&patient.medical_history)/>
                <DetailRow label="Current Medications" value=or_none_specified(&patient.current_medications)/>
                <DetailRow label="Allergies" value=or_none_specified(&patient.allergies)/>
            </div>
        </div>
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            <p class="detail-row__label">{label}</p>
            <p class="detail-row__value">{value}</p>
        </div>
    }
}
