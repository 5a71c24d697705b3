//! Shared record model for the clinic admin dashboard.
//!
//! This crate owns the record types used by both `server` and `client`:
//! the [`Record`] descriptor trait, the concrete [`Patient`] and [`Doctor`]
//! records, form field descriptors with validation, search filtering, and
//! spreadsheet (CSV) export.
//!
//! DESIGN
//! ======
//! The patients and doctors screens share one generic implementation. Each
//! record type describes itself through [`Record`] (collection name, table
//! columns, form fields, search fields) and everything else is written once
//! against that trait.

pub mod doctor;
pub mod export;
pub mod filter;
pub mod form;
pub mod patient;
pub mod record;

pub use doctor::{Doctor, DoctorPayload};
pub use export::{CSV_MIME, ExportError, export_filename, to_csv};
pub use filter::{filter_records, matches_query};
pub use form::{FieldKind, FieldSpec, FormValues, ValidationErrors};
pub use patient::{Patient, PatientPayload};
pub use record::{Column, Record, RecordKind};
