//! Doctor records.

#[cfg(test)]
#[path = "doctor_test.rs"]
mod doctor_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::{FieldKind, FieldSpec, FormValues};
use crate::record::{Column, Record, RecordKind};

const COLUMNS: &[Column] = &[
    Column { key: "last_name", label: "Last name" },
    Column { key: "first_name", label: "First name" },
    Column { key: "specialty", label: "Specialty" },
    Column { key: "phone", label: "Phone" },
    Column { key: "email", label: "Email" },
    Column { key: "license_number", label: "License number" },
];

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("first_name", "First name", FieldKind::Text),
    FieldSpec::required("last_name", "Last name", FieldKind::Text),
    FieldSpec::required("specialty", "Specialty", FieldKind::Text),
    FieldSpec::optional("phone", "Phone", FieldKind::Phone),
    FieldSpec::optional("email", "Email", FieldKind::Email),
    FieldSpec::optional("license_number", "License number", FieldKind::Text),
];

/// A doctor as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
}

/// Doctor body for create/update requests.
///
/// Missing fields deserialize as empty so validation reports them per field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorPayload {
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub license_number: Option<String>,
}

impl Doctor {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Doctor {
    type Payload = DoctorPayload;

    const KIND: RecordKind = RecordKind::Doctors;

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_name(&self) -> String {
        self.full_name()
    }

    fn to_payload(&self) -> DoctorPayload {
        DoctorPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            specialty: self.specialty.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            license_number: self.license_number.clone(),
        }
    }

    fn from_payload(id: Uuid, payload: DoctorPayload) -> Self {
        Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            specialty: payload.specialty,
            phone: payload.phone,
            email: payload.email,
            license_number: payload.license_number,
        }
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.last_name.clone(),
            self.first_name.clone(),
            self.specialty.clone(),
            self.phone.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.license_number.clone().unwrap_or_default(),
        ]
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.first_name.clone(), self.last_name.clone(), self.full_name(), self.specialty.clone()]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn payload_to_form(payload: &DoctorPayload) -> FormValues {
        let mut form = FormValues::new();
        form.set("first_name", payload.first_name.as_str());
        form.set("last_name", payload.last_name.as_str());
        form.set("specialty", payload.specialty.as_str());
        form.set_opt("phone", payload.phone.as_deref());
        form.set_opt("email", payload.email.as_deref());
        form.set_opt("license_number", payload.license_number.as_deref());
        form
    }

    fn payload_from_form(form: &FormValues) -> DoctorPayload {
        DoctorPayload {
            first_name: form.text("first_name"),
            last_name: form.text("last_name"),
            specialty: form.text("specialty"),
            phone: form.optional("phone"),
            email: form.optional("email"),
            license_number: form.optional("license_number"),
        }
    }
}
