//! Record persistence: generic CRUD over the `patients` and `doctors` tables.
//!
//! DESIGN
//! ======
//! Each record type maps onto one table through [`RecordTable`]. SQL is built
//! from the table's column list, so the list/get/create/update/delete paths
//! are written once. Payloads go through the same validation the browser
//! form uses before any query runs.
//!
//! ERROR HANDLING
//! ==============
//! Missing rows surface as [`RecordError::NotFound`] and rejected payloads as
//! [`RecordError::Invalid`]; the routes layer turns both into JSON responses.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use records::{Doctor, DoctorPayload, Patient, PatientPayload, Record, ValidationErrors};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use tracing::info;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record not found: {0}")]
    NotFound(Uuid),
    #[error("{0}")]
    Invalid(ValidationErrors),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Table mapping for a record type.
pub trait RecordTable: Record {
    const TABLE: &'static str;

    /// Data columns, excluding `id`, in the order [`RecordTable::bind_payload`] binds them.
    const FIELDS: &'static [&'static str];

    /// Build a record from a row holding `id` plus every column in `FIELDS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a column is missing or has the wrong type.
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error>;

    /// Bind payload values in `FIELDS` order.
    fn bind_payload<'q>(query: PgQuery<'q>, payload: &Self::Payload) -> PgQuery<'q>;
}

impl RecordTable for Patient {
    const TABLE: &'static str = "patients";
    const FIELDS: &'static [&'static str] =
        &["first_name", "last_name", "date_of_birth", "gender", "phone", "email", "address"];

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            date_of_birth: row.try_get("date_of_birth")?,
            gender: row.try_get("gender")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
        })
    }

    fn bind_payload<'q>(query: PgQuery<'q>, payload: &PatientPayload) -> PgQuery<'q> {
        query
            .bind(payload.first_name.clone())
            .bind(payload.last_name.clone())
            .bind(payload.date_of_birth)
            .bind(payload.gender.clone())
            .bind(payload.phone.clone())
            .bind(payload.email.clone())
            .bind(payload.address.clone())
    }
}

impl RecordTable for Doctor {
    const TABLE: &'static str = "doctors";
    const FIELDS: &'static [&'static str] =
        &["first_name", "last_name", "specialty", "phone", "email", "license_number"];

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            specialty: row.try_get("specialty")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            license_number: row.try_get("license_number")?,
        })
    }

    fn bind_payload<'q>(query: PgQuery<'q>, payload: &DoctorPayload) -> PgQuery<'q> {
        query
            .bind(payload.first_name.clone())
            .bind(payload.last_name.clone())
            .bind(payload.specialty.clone())
            .bind(payload.phone.clone())
            .bind(payload.email.clone())
            .bind(payload.license_number.clone())
    }
}

// =============================================================================
// SQL
// =============================================================================

fn returning_columns<R: RecordTable>() -> String {
    let mut cols = vec!["id"];
    cols.extend_from_slice(R::FIELDS);
    cols.join(", ")
}

pub(crate) fn select_all_sql<R: RecordTable>() -> String {
    format!("SELECT {} FROM {} ORDER BY last_name, first_name, id", returning_columns::<R>(), R::TABLE)
}

pub(crate) fn select_one_sql<R: RecordTable>() -> String {
    format!("SELECT {} FROM {} WHERE id = $1", returning_columns::<R>(), R::TABLE)
}

/// `$1` is the id; payload fields follow from `$2`.
pub(crate) fn insert_sql<R: RecordTable>() -> String {
    let placeholders: Vec<String> = (1..=R::FIELDS.len() + 1).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO {} (id, {}) VALUES ({}) RETURNING {}",
        R::TABLE,
        R::FIELDS.join(", "),
        placeholders.join(", "),
        returning_columns::<R>()
    )
}

/// `$1` is the id; payload fields follow from `$2`.
pub(crate) fn update_sql<R: RecordTable>() -> String {
    let assignments: Vec<String> = R::FIELDS
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ${}", i + 2))
        .collect();
    format!(
        "UPDATE {} SET {}, updated_at = now() WHERE id = $1 RETURNING {}",
        R::TABLE,
        assignments.join(", "),
        returning_columns::<R>()
    )
}

pub(crate) fn delete_sql<R: RecordTable>() -> String {
    format!("DELETE FROM {} WHERE id = $1", R::TABLE)
}

// =============================================================================
// CRUD
// =============================================================================

/// List every record, ordered by last name then first name.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list<R: RecordTable>(pool: &PgPool) -> Result<Vec<R>, RecordError> {
    let sql = select_all_sql::<R>();
    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    Ok(rows.iter().map(R::from_row).collect::<Result<_, _>>()?)
}

/// Fetch one record.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] if no row has `id`.
pub async fn get<R: RecordTable>(pool: &PgPool, id: Uuid) -> Result<R, RecordError> {
    let sql = select_one_sql::<R>();
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(RecordError::NotFound(id))?;
    Ok(R::from_row(&row)?)
}

/// Validate and insert a new record with a fresh id.
///
/// # Errors
///
/// Returns [`RecordError::Invalid`] before touching the database if the
/// payload fails validation.
pub async fn create<R: RecordTable>(pool: &PgPool, payload: R::Payload) -> Result<R, RecordError> {
    let payload = R::normalize_payload(&payload).map_err(RecordError::Invalid)?;

    let id = Uuid::new_v4();
    let sql = insert_sql::<R>();
    let row = R::bind_payload(sqlx::query(&sql).bind(id), &payload)
        .fetch_one(pool)
        .await?;
    let record = R::from_row(&row)?;
    info!(collection = R::KIND.collection(), %id, "record created");
    Ok(record)
}

/// Validate and replace every field of an existing record.
///
/// # Errors
///
/// Returns [`RecordError::Invalid`] for a bad payload and
/// [`RecordError::NotFound`] if no row has `id`.
pub async fn update<R: RecordTable>(pool: &PgPool, id: Uuid, payload: R::Payload) -> Result<R, RecordError> {
    let payload = R::normalize_payload(&payload).map_err(RecordError::Invalid)?;

    let sql = update_sql::<R>();
    let row = R::bind_payload(sqlx::query(&sql).bind(id), &payload)
        .fetch_optional(pool)
        .await?
        .ok_or(RecordError::NotFound(id))?;
    let record = R::from_row(&row)?;
    info!(collection = R::KIND.collection(), %id, "record updated");
    Ok(record)
}

/// Delete a record.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] if no row has `id`.
pub async fn delete<R: RecordTable>(pool: &PgPool, id: Uuid) -> Result<(), RecordError> {
    let sql = delete_sql::<R>();
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(RecordError::NotFound(id));
    }
    info!(collection = R::KIND.collection(), %id, "record deleted");
    Ok(())
}
