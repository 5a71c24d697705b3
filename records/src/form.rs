//! Form field descriptors, raw form values, and basic validation.
//!
//! DESIGN
//! ======
//! Forms hold raw strings keyed by field name. Validation is deliberately
//! shallow (required fields, email shape, phone characters, ISO dates) and
//! runs on both sides: the client blocks submission, the server rejects the
//! same payload with `422`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted by date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MIN_PHONE_DIGITS: usize = 6;

/// Input widget and validation rule for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    /// One of a fixed set of values.
    Choice(&'static [&'static str]),
}

impl FieldKind {
    /// HTML `input` type for this field.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::Choice(_) => "text",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Date => "date",
        }
    }
}

/// One editable field of a record form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    #[must_use]
    pub const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, required: true }
    }

    #[must_use]
    pub const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, required: false }
    }
}

/// Raw form input keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for `key`, empty when unset.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map_or("", String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_owned(), value.into());
    }

    /// Builder-style [`FormValues::set`].
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key` from an optional value, leaving it empty for `None`.
    pub fn set_opt(&mut self, key: &str, value: Option<&str>) {
        self.set(key, value.unwrap_or_default());
    }

    /// Trimmed value for `key`.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.get(key).trim().to_owned()
    }

    /// Trimmed value for `key`, `None` when blank.
    #[must_use]
    pub fn optional(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        (!value.is_empty()).then(|| value.to_owned())
    }

    /// Parsed date for `key`, `None` when blank or malformed.
    #[must_use]
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.optional(key)
            .and_then(|raw| NaiveDate::parse_from_str(&raw, DATE_FORMAT).ok())
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_owned(), message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid fields: ")?;
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field} ({message})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate `values` against `fields`.
///
/// # Errors
///
/// Returns every failing field with a user-facing message.
pub fn validate(values: &FormValues, fields: &[FieldSpec]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for field in fields {
        let value = values.get(field.key).trim();
        if value.is_empty() {
            if field.required {
                errors.insert(field.key, format!("{} is required", field.label));
            }
            continue;
        }
        if let Some(message) = check_format(field.kind, value) {
            errors.insert(field.key, message);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_format(kind: FieldKind, value: &str) -> Option<String> {
    match kind {
        FieldKind::Text => None,
        FieldKind::Email => (!is_plausible_email(value)).then(|| "Enter a valid email address".to_owned()),
        FieldKind::Phone => (!is_plausible_phone(value)).then(|| "Enter a valid phone number".to_owned()),
        FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .is_err()
            .then(|| "Use the YYYY-MM-DD format".to_owned()),
        FieldKind::Choice(options) => (!options.iter().any(|o| o.eq_ignore_ascii_case(value)))
            .then(|| format!("Choose one of: {}", options.join(", "))),
    }
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn is_plausible_phone(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '.' | '(' | ')'));
    allowed && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}
