//! Patient records.

#[cfg(test)]
#[path = "patient_test.rs"]
mod patient_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::{DATE_FORMAT, FieldKind, FieldSpec, FormValues};
use crate::record::{Column, Record, RecordKind};

pub const GENDERS: &[&str] = &["female", "male", "other"];

const COLUMNS: &[Column] = &[
    Column { key: "last_name", label: "Last name" },
    Column { key: "first_name", label: "First name" },
    Column { key: "date_of_birth", label: "Date of birth" },
    Column { key: "gender", label: "Gender" },
    Column { key: "phone", label: "Phone" },
    Column { key: "email", label: "Email" },
    Column { key: "address", label: "Address" },
];

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("first_name", "First name", FieldKind::Text),
    FieldSpec::required("last_name", "Last name", FieldKind::Text),
    FieldSpec::optional("date_of_birth", "Date of birth", FieldKind::Date),
    FieldSpec::optional("gender", "Gender", FieldKind::Choice(GENDERS)),
    FieldSpec::optional("phone", "Phone", FieldKind::Phone),
    FieldSpec::optional("email", "Email", FieldKind::Email),
    FieldSpec::optional("address", "Address", FieldKind::Text),
];

/// A patient as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Patient body for create/update requests.
///
/// Missing fields deserialize as empty so validation reports them per field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientPayload {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Patient {
    /// "First Last" display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Patient {
    type Payload = PatientPayload;

    const KIND: RecordKind = RecordKind::Patients;

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_name(&self) -> String {
        self.full_name()
    }

    fn to_payload(&self) -> PatientPayload {
        PatientPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }

    fn from_payload(id: Uuid, payload: PatientPayload) -> Self {
        Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            date_of_birth: payload.date_of_birth,
            gender: payload.gender,
            phone: payload.phone,
            email: payload.email,
            address: payload.address,
        }
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.last_name.clone(),
            self.first_name.clone(),
            self.date_of_birth
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            self.gender.clone().unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.address.clone().unwrap_or_default(),
        ]
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.first_name.clone(), self.last_name.clone(), self.full_name()]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn payload_to_form(payload: &PatientPayload) -> FormValues {
        let mut form = FormValues::new();
        form.set("first_name", payload.first_name.as_str());
        form.set("last_name", payload.last_name.as_str());
        form.set(
            "date_of_birth",
            payload
                .date_of_birth
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        );
        form.set_opt("gender", payload.gender.as_deref());
        form.set_opt("phone", payload.phone.as_deref());
        form.set_opt("email", payload.email.as_deref());
        form.set_opt("address", payload.address.as_deref());
        form
    }

    fn payload_from_form(form: &FormValues) -> PatientPayload {
        PatientPayload {
            first_name: form.text("first_name"),
            last_name: form.text("last_name"),
            date_of_birth: form.date("date_of_birth"),
            gender: form.optional("gender").map(|g| g.to_ascii_lowercase()),
            phone: form.optional("phone"),
            email: form.optional("email"),
            address: form.optional("address"),
        }
    }
}
