//! Per-screen state for a record list/detail screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each record screen owns one `RecordScreenState<R>` inside an `RwSignal`.
//! There is no shared store: the list is a local cache of the backend,
//! filled on mount and patched after each successful create/update/delete.
//!
//! DESIGN
//! ======
//! All transitions are plain methods so the screen logic is testable without
//! a browser. Components call `begin_*` before issuing a request and
//! `finish_*` with the response; local data only changes on success.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use records::{ExportError, FormValues, Record, ValidationErrors, filter_records, to_csv};
use uuid::Uuid;

use crate::net::error::ApiError;

/// Lifecycle of the initial list fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Which form dialog is open, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Create,
    Edit(Uuid),
}

/// A validated form ready to be sent to the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<P> {
    Create(P),
    Update(Uuid, P),
}

/// A row prepared for the record table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub id: Uuid,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct RecordScreenState<R: Record> {
    /// Loaded records, in backend order plus local appends.
    pub items: Vec<R>,
    /// Free-text search query.
    pub query: String,
    pub load: LoadStatus,
    pub modal: ModalState,
    /// Raw values of the open form.
    pub form: FormValues,
    /// Per-field messages for the open form.
    pub field_errors: ValidationErrors,
    /// Message shown at the bottom of the open form after a failed submit.
    pub submit_error: Option<String>,
    /// True while a create/update request is in flight.
    pub submitting: bool,
    /// Record awaiting delete confirmation.
    pub pending_delete: Option<Uuid>,
    /// True while a delete request is in flight.
    pub deleting: bool,
    /// Message shown above the list after a failed delete or export.
    pub action_error: Option<String>,
}

impl<R: Record> Default for RecordScreenState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            load: LoadStatus::Loading,
            modal: ModalState::Closed,
            form: FormValues::new(),
            field_errors: ValidationErrors::new(),
            submit_error: None,
            submitting: false,
            pending_delete: None,
            deleting: false,
            action_error: None,
        }
    }
}

impl<R: Record> RecordScreenState<R> {
    // =========================================================================
    // LIST
    // =========================================================================

    pub fn begin_load(&mut self) {
        self.load = LoadStatus::Loading;
        self.action_error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<R>, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.load = LoadStatus::Loaded;
            }
            Err(err) => {
                self.items.clear();
                self.load = LoadStatus::Failed(err.to_string());
            }
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.load == LoadStatus::Loaded
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records matching the current query.
    #[must_use]
    pub fn visible(&self) -> Vec<&R> {
        filter_records(&self.items, &self.query)
    }

    #[must_use]
    pub fn visible_rows(&self) -> Vec<TableRow> {
        self.visible()
            .into_iter()
            .map(|r| TableRow { id: r.id(), cells: r.cells() })
            .collect()
    }

    #[must_use]
    pub fn record(&self, id: Uuid) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Insert `record`, replacing any existing entry with the same id.
    fn upsert(&mut self, record: R) {
        let id = record.id();
        match self.items.iter_mut().find(|r| r.id() == id) {
            Some(existing) => *existing = record,
            None => self.items.push(record),
        }
    }

    // =========================================================================
    // FORM DIALOG
    // =========================================================================

    pub fn open_create(&mut self) {
        self.modal = ModalState::Create;
        self.form = FormValues::new();
        self.clear_form_errors();
    }

    /// Open the edit dialog for `id`. Returns `false` if the record is gone.
    pub fn open_edit(&mut self, id: Uuid) -> bool {
        let Some(form) = self.record(id).map(Record::to_form) else {
            return false;
        };
        self.modal = ModalState::Edit(id);
        self.form = form;
        self.clear_form_errors();
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.form = FormValues::new();
        self.clear_form_errors();
    }

    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        self.form.set(key, value);
    }

    /// Dialog heading for the current modal.
    #[must_use]
    pub fn modal_title(&self) -> String {
        match self.modal {
            ModalState::Edit(_) => format!("Edit {}", R::KIND.singular()),
            ModalState::Create | ModalState::Closed => format!("New {}", R::KIND.singular()),
        }
    }

    /// Validate the open form and mark it as submitting.
    ///
    /// Returns `None` when nothing should be sent: no dialog is open, a
    /// request is already in flight, or validation failed (the field errors
    /// are recorded on the state).
    pub fn begin_submit(&mut self) -> Option<Submission<R::Payload>> {
        if self.submitting {
            return None;
        }
        let modal = self.modal;
        if modal == ModalState::Closed {
            return None;
        }
        match R::parse_form(&self.form) {
            Ok(payload) => {
                self.clear_form_errors();
                self.submitting = true;
                Some(match modal {
                    ModalState::Edit(id) => Submission::Update(id, payload),
                    ModalState::Create | ModalState::Closed => Submission::Create(payload),
                })
            }
            Err(errors) => {
                self.field_errors = errors;
                self.submit_error = None;
                None
            }
        }
    }

    /// Apply the backend's answer to a create/update request.
    pub fn finish_submit(&mut self, result: Result<R, ApiError>) {
        self.submitting = false;
        match result {
            Ok(record) => {
                self.upsert(record);
                self.close_modal();
            }
            Err(err) => {
                if let Some(fields) = err.field_errors() {
                    self.field_errors = fields.clone();
                }
                self.submit_error = Some(err.to_string());
            }
        }
    }

    fn clear_form_errors(&mut self) {
        self.field_errors = ValidationErrors::new();
        self.submit_error = None;
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    pub fn request_delete(&mut self, id: Uuid) {
        if self.record(id).is_some() {
            self.pending_delete = Some(id);
            self.action_error = None;
        }
    }

    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    /// Mark the pending delete as in flight and return its id.
    pub fn begin_delete(&mut self) -> Option<Uuid> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete?;
        self.deleting = true;
        Some(id)
    }

    pub fn finish_delete(&mut self, id: Uuid, result: Result<(), ApiError>) {
        self.deleting = false;
        self.pending_delete = None;
        match result {
            Ok(()) => self.items.retain(|r| r.id() != id),
            Err(err) => self.action_error = Some(format!("Delete failed: {err}")),
        }
    }

    /// Name of the record awaiting delete confirmation.
    #[must_use]
    pub fn pending_delete_label(&self) -> Option<String> {
        self.record(self.pending_delete?).map(Record::display_name)
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    /// CSV bytes for the currently visible records.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV writer fails.
    pub fn export_csv(&self) -> Result<Vec<u8>, ExportError> {
        to_csv(self.visible())
    }
}
