//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome plus the generic record screen and its table and dialogs.
//! Components receive signals and callbacks as props; the only state owner
//! is `RecordScreen`.

pub mod confirm_dialog;
pub mod layout_shell;
pub mod record_form_dialog;
pub mod record_screen;
pub mod record_table;
pub mod sidebar;
