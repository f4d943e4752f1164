//! Daily attendance sheet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Doctor-only. Loads every attendance row and the patient list on mount,
//! then shows the rows for the selected calendar day. Serial numbers are
//! per-day positions, not stored ids.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::form_field::TextField;
use crate::net::api::ApiClient;
use crate::net::types::{AttendanceRecord, NewAttendance, Patient, PaymentMethod};
use crate::util::dates::{day_of, format_day, iso_day, today};

const ATTENDANCE_FAILED: &str = "Failed to load attendance records.";
const SAVE_FAILED: &str = "Could not save the attendance record.";

/// Rows whose date falls on `day`, in server order.
fn records_on(records: &[AttendanceRecord], day: NaiveDate) -> Vec<&AttendanceRecord> {
    records.iter().filter(|r| day_of(&r.date) == Some(day)).collect()
}

/// Serial shown for the next row added on `day`.
fn next_serial(records: &[AttendanceRecord], day: NaiveDate) -> usize {
    records_on(records, day).len() + 1
}

fn payment_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Cash => "Cash",
        PaymentMethod::Upi => "UPI",
    }
}

fn payment_marker(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Cash => "💵",
        PaymentMethod::Upi => "📱",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct AttendanceForm {
    date: String,
    patient_id: String,
    case_details: String,
    remedy: String,
    payment_method: PaymentMethod,
}

fn build_attendance(form: &AttendanceForm, patients: &[Patient]) -> Result<NewAttendance, &'static str> {
    let day = day_of(&form.date).ok_or("Choose a valid date.")?;
    let patient = patients.iter().find(|p| p.id == form.patient_id).ok_or("Select a patient.")?;
    let case_details = form.case_details.trim();
    let remedy = form.remedy.trim();
    if case_details.is_empty() || remedy.is_empty() {
        return Err("Fill in case details and remedy.");
    }
    Ok(NewAttendance {
        date: iso_day(day),
        patient_name: patient.full_name.clone(),
        patient_id: patient.id.clone(),
        case_details: case_details.to_owned(),
        remedy: remedy.to_owned(),
        payment_method: form.payment_method,
    })
}

async fn load_attendance(api: &ApiClient, alive: &AtomicBool, records: RwSignal<Vec<AttendanceRecord>>, error: RwSignal<String>) {
    let result = api.list_attendance().await;
    if !alive.load(Ordering::Relaxed) {
        return;
    }
    match result {
        Ok(list) => records.set(list),
        Err(err) => {
            log::warn!("attendance fetch failed: {err}");
            error.set(ATTENDANCE_FAILED.to_owned());
        }
    }
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let records = RwSignal::new(Vec::<AttendanceRecord>::new());
    let patients = RwSignal::new(Vec::<Patient>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let date = RwSignal::new(iso_day(today()));
    let patient_id = RwSignal::new(String::new());
    let case_details = RwSignal::new(String::new());
    let remedy = RwSignal::new(String::new());
    let payment = RwSignal::new(PaymentMethod::Cash);
    let busy = RwSignal::new(false);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let api = api.clone();
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            match api.list_patients().await {
                Ok(list) if alive.load(Ordering::Relaxed) => patients.set(list),
                Ok(_) => {}
                Err(err) => log::warn!("patient list fetch failed: {err}"),
            }
            load_attendance(&api, &alive, records, error).await;
            if alive.load(Ordering::Relaxed) {
                loading.set(false);
            }
        });
    }

    let selected_day = Memo::new(move |_| day_of(&date.get()));

    let on_submit = {
        let alive = Arc::clone(&alive);
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let form = AttendanceForm {
                date: date.get_untracked(),
                patient_id: patient_id.get_untracked(),
                case_details: case_details.get_untracked(),
                remedy: remedy.get_untracked(),
                payment_method: payment.get_untracked(),
            };
            let record = match patients.with_untracked(|list| build_attendance(&form, list)) {
                Ok(record) => record,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());

            let api = api.clone();
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                match api.create_attendance(&record).await {
                    Ok(()) => {
                        load_attendance(&api, &alive, records, error).await;
                        if alive.load(Ordering::Relaxed) {
                            patient_id.set(String::new());
                            case_details.set(String::new());
                            remedy.set(String::new());
                            payment.set(PaymentMethod::Cash);
                        }
                    }
                    Err(err) => {
                        log::warn!("attendance save failed: {err}");
                        if alive.load(Ordering::Relaxed) {
                            error.set(err.user_message(SAVE_FAILED));
                        }
                    }
                }
                if alive.load(Ordering::Relaxed) {
                    busy.set(false);
                }
            });
        }
    };
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let patient_options = move || {
        patients
            .get()
            .into_iter()
            .map(|p| view! { <option value=p.id>{p.full_name}</option> })
            .collect::<Vec<_>>()
    };

    let serial = move || match selected_day.get() {
        Some(day) => records.with(|all| next_serial(all, day)).to_string(),
        None => String::new(),
    };

    let payment_choice = move |method: PaymentMethod| {
        let value = if method == PaymentMethod::Upi { "upi" } else { "cash" };
        view! {
            <label class="radio-option">
                <input
                    type="radio"
                    name="paymentMethod"
                    value=value
                    prop:checked=move || payment.get() == method
                    on:change=move |_| payment.set(method)
                />
                {payment_label(method)}
            </label>
        }
    };

    let day_table = move || {
        let Some(day) = selected_day.get() else {
            return view! { <p class="panel__status">"Choose a valid date."</p> }.into_any();
        };
        let all = records.get();
        let rows = records_on(&all, day);
        let heading = format!("Attendance for {} ({})", format_day(&iso_day(day)), rows.len());
        if rows.is_empty() {
            return view! {
                <h2>{heading}</h2>
                <p class="panel__status">"No attendance records for this day."</p>
            }
                .into_any();
        }
        let body = rows
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                view! {
                    <tr>
                        <td class="attendance__serial">{index + 1}</td>
                        <td>{record.patient_name.clone()}</td>
                        <td>{record.case_details.clone()}</td>
                        <td>{record.remedy.clone()}</td>
                        <td class="attendance__payment" title=payment_label(record.payment_method)>
                            {payment_marker(record.payment_method)}
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <h2>{heading}</h2>
            <table class="attendance__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Patient Name"</th>
                        <th>"Case Details"</th>
                        <th>"Remedy"</th>
                        <th>"Payment"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        }
            .into_any()
    };

    view! {
        <div class="attendance-page">
            <h1>"Daily Attendance Sheet"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p class="panel__status">"Loading..."</p> }>
                <section class="panel">
                    <h2>"Add New Attendance"</h2>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form-error">{move || error.get()}</p>
                    </Show>
                    <form class="attendance-form" on:submit=on_submit.clone()>
                        <TextField id="date" label="Date" value=date kind="date" required=true/>
                        <div class="form-field">
                            <label class="form-label" for="patient">
                                "Patient Name"
                            </label>
                            <select
                                class="form-input"
                                id="patient"
                                required=true
                                prop:value=move || patient_id.get()
                                on:change=move |ev| patient_id.set(event_target_value(&ev))
                            >
                                <option value="">"Select Patient"</option>
                                {patient_options}
                            </select>
                        </div>
                        <div class="form-field">
                            <label class="form-label" for="serial">
                                "ID"
                            </label>
                            <input class="form-input" id="serial" type="number" readonly=true prop:value=serial/>
                        </div>
                        <TextField
                            id="caseDetails"
                            label="Case Details"
                            value=case_details
                            placeholder="e.g. Homeopathic"
                            required=true
                        />
                        <TextField id="remedy" label="Remedy" value=remedy required=true/>
                        <fieldset class="form-field">
                            <legend class="form-label">"Payment Method"</legend>
                            {payment_choice(PaymentMethod::Cash)}
                            {payment_choice(PaymentMethod::Upi)}
                        </fieldset>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Add Record"
                        </button>
                    </form>
                </section>
                <section class="panel">{day_table}</section>
            </Show>
        </div>
    }
}
