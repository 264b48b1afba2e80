//! Import/export codec for the history collection.
//!
//! Export produces a pretty-printed JSON array of every current record.
//! Import merges an external array into the store: current records first,
//! duplicates dropped by `(hkid, createdAt)`, result sorted newest first.
//! Import deliberately does not re-apply the 100-record cap (see DESIGN.md).

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::record::Record;
use crate::store::{HistoryStore, StoreError};

/// Errors from encoding or merging history blobs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The import payload is not a JSON array.
    #[error("import payload is not a JSON array")]
    NotASequence,
    /// An element of the import payload is not a valid record.
    #[error("import payload contains a malformed record: {0}")]
    BadRecord(#[source] serde_json::Error),
    /// The current collection could not be encoded.
    #[error("failed to encode history: {0}")]
    Encode(#[source] serde_json::Error),
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Serializes the entire current collection as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the records cannot be
/// encoded.
pub fn export(store: &HistoryStore<'_>) -> Result<String, CodecError> {
    let history = store.load()?;
    serde_json::to_string_pretty(&history).map_err(CodecError::Encode)
}

/// Default export file name, stamped with the given date.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("hkid-history-{}.json", date.format("%Y-%m-%d"))
}

/// Merges an exported JSON array into the store.
///
/// The union is formed current-first, deduplicated on `(hkid, createdAt)`
/// keeping the first occurrence (an existing record wins over an imported
/// duplicate), then stably sorted by `createdAt` descending and persisted.
///
/// # Errors
///
/// Returns [`CodecError::NotASequence`] when the blob does not decode to a
/// JSON array and [`CodecError::BadRecord`] when an element is not a valid
/// record; the collection is left unmodified in both cases. Store failures
/// propagate as [`CodecError::Store`].
pub fn import(store: &HistoryStore<'_>, blob: &str) -> Result<(), CodecError> {
    let value: serde_json::Value =
        serde_json::from_str(blob).map_err(|_| CodecError::NotASequence)?;
    if !value.is_array() {
        return Err(CodecError::NotASequence);
    }
    let imported: Vec<Record> = serde_json::from_value(value).map_err(CodecError::BadRecord)?;

    let mut merged = store.load()?;
    merged.extend(imported);

    let mut seen = HashSet::new();
    merged.retain(|r| seen.insert(r.composite_key()));
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    store.save(&merged)?;
    Ok(())
}
