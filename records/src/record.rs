//! The record descriptor trait shared by every CRUD screen and API route.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::form::{self, FieldSpec, FormValues, ValidationErrors};

/// The record collections managed by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Patients,
    Doctors,
}

impl RecordKind {
    /// Collection segment used in API paths, routes, and export filenames.
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::Patients => "patients",
            Self::Doctors => "doctors",
        }
    }

    /// Plural display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Patients => "Patients",
            Self::Doctors => "Doctors",
        }
    }

    /// Singular display name, used in dialog headings.
    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::Patients => "Patient",
            Self::Doctors => "Doctor",
        }
    }

    /// Parse a collection segment back into a kind.
    #[must_use]
    pub fn from_collection(raw: &str) -> Option<Self> {
        match raw {
            "patients" => Some(Self::Patients),
            "doctors" => Some(Self::Doctors),
            _ => None,
        }
    }
}

/// A displayed table/export column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

/// Descriptor implemented by each record type.
///
/// `Payload` is the record body without its identifier: what the client
/// sends on create/update and what the server validates and stores.
pub trait Record: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Payload: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    const KIND: RecordKind;

    fn id(&self) -> Uuid;

    /// Human-readable name used in confirmations and log lines.
    fn display_name(&self) -> String;

    fn to_payload(&self) -> Self::Payload;

    fn from_payload(id: Uuid, payload: Self::Payload) -> Self;

    /// Table and export columns, in display order.
    fn columns() -> &'static [Column];

    /// Cell values aligned with [`Record::columns`].
    fn cells(&self) -> Vec<String>;

    /// Values matched by the free-text search. The id is matched separately.
    fn search_fields(&self) -> Vec<String>;

    /// Form fields, in display order.
    fn form_fields() -> &'static [FieldSpec];

    fn payload_to_form(payload: &Self::Payload) -> FormValues;

    /// Build a payload from form values that already passed validation.
    fn payload_from_form(form: &FormValues) -> Self::Payload;

    /// Form values pre-populated from this record.
    fn to_form(&self) -> FormValues {
        Self::payload_to_form(&self.to_payload())
    }

    /// Validate form input and convert it to a payload.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when a required field is blank or a value
    /// has the wrong format.
    fn parse_form(values: &FormValues) -> Result<Self::Payload, ValidationErrors> {
        form::validate(values, Self::form_fields())?;
        Ok(Self::payload_from_form(values))
    }

    /// Validate a payload received over the wire and return it trimmed and
    /// normalized the same way a submitted form would be.
    ///
    /// # Errors
    ///
    /// Same checks as [`Record::parse_form`].
    fn normalize_payload(payload: &Self::Payload) -> Result<Self::Payload, ValidationErrors> {
        Self::parse_form(&Self::payload_to_form(payload))
    }
}
