//! Wire DTOs for the clinic REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`_id`, camelCase) through serde
//! attributes so the rest of the client can use Rust naming.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role carried by an authenticated identity.
///
/// The backend sends a free-form string. Anything outside the known set is
/// kept as `Unrecognized` and never grants access to a protected screen.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Doctor,
    Patient,
    Receptionist,
    Unrecognized(String),
}

impl Role {
    /// Roles offered on the registration form.
    pub const SELECTABLE: [Role; 3] = [Role::Patient, Role::Doctor, Role::Receptionist];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Doctor => "doctor",
            Self::Patient => "patient",
            Self::Receptionist => "receptionist",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "doctor" => Self::Doctor,
            "patient" => Self::Patient,
            "receptionist" => Self::Receptionist,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user's profile as returned by `GET /api/auth/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Name shown in the navbar greeting.
    #[serde(rename = "name")]
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response from `POST /api/auth/login`.
///
/// `user` is informational only; the session re-verifies the token before
/// trusting any identity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Option<Identity>,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// A patient intake record listed on the doctor dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub medical_history: String,
    #[serde(default)]
    pub current_medications: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub chief_complaint: String,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

/// Body for `POST /api/patients`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub full_name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub address: String,
    pub medical_history: String,
    pub current_medications: String,
    pub allergies: String,
    pub chief_complaint: String,
}

/// How a visit was paid for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Upi,
}

/// One row of the daily attendance log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    /// Visit date, either `YYYY-MM-DD` or a full ISO-8601 timestamp.
    pub date: String,
    pub patient_name: String,
    #[serde(default, deserialize_with = "deserialize_id_string")]
    pub patient_id: String,
    #[serde(default)]
    pub case_details: String,
    #[serde(default)]
    pub remedy: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub doctor_id: Option<String>,
}

/// Body for `POST /api/attendance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub date: String,
    pub patient_name: String,
    pub patient_id: String,
    pub case_details: String,
    pub remedy: String,
    pub payment_method: PaymentMethod,
}

/// Older attendance rows stored `patientId` as a number.
fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
