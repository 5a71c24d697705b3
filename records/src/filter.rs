//! Local free-text search over loaded records.
//!
//! Matching is a case-insensitive substring test against each record's
//! [`Record::search_fields`]. The id only matches by prefix, and only for
//! queries shaped like an id, so short name fragments made of hex letters
//! do not hit unrelated records. A query that is blank after trimming
//! matches everything.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use uuid::Uuid;

use crate::record::Record;

/// Shortest query treated as an id prefix.
const MIN_ID_QUERY_LEN: usize = 8;

/// Lowercased, trimmed query, or `None` when the query is blank.
fn normalize(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Whether `record` matches `query`.
pub fn matches_query<R: Record>(record: &R, query: &str) -> bool {
    match normalize(query) {
        Some(needle) => matches_normalized(record, &needle),
        None => true,
    }
}

fn matches_normalized<R: Record>(record: &R, needle: &str) -> bool {
    matches_id(record.id(), needle)
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn looks_like_id(needle: &str) -> bool {
    needle.len() >= MIN_ID_QUERY_LEN && needle.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}

fn matches_id(id: Uuid, needle: &str) -> bool {
    looks_like_id(needle) && id.to_string().starts_with(needle)
}

/// The subset of `records` matching `query`, in their original order.
pub fn filter_records<'a, R: Record>(records: &'a [R], query: &str) -> Vec<&'a R> {
    match normalize(query) {
        Some(needle) => records.iter().filter(|r| matches_normalized(*r, &needle)).collect(),
        None => records.iter().collect(),
    }
}
