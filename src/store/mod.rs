//! History store — the ordered, capped collection of generated records.
//!
//! The whole collection lives in a single JSON-array slot addressed by one
//! file path, accessed only through the `FileSystem` port. Every operation
//! is a read-all / compute / write-all step; there is no field-level access
//! and no cross-operation locking (last write wins, single-user design).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::context::ServiceContext;
use crate::hkid::GeneratedHkid;
use crate::record::Record;

/// Maximum number of records kept after an `add`; oldest evicted first.
pub const HISTORY_CAP: usize = 100;

/// Errors from history slot access.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slot file could not be read.
    #[error("failed to read history: {0}")]
    Read(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The slot file could not be written.
    #[error("failed to write history: {0}")]
    Write(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The slot content is not a valid record array.
    #[error("history slot holds invalid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistence layer for generated-identifier history.
///
/// All I/O goes through `ctx.fs` so the store works against disk in
/// production and an in-memory map in tests.
pub struct HistoryStore<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
}

impl<'a> HistoryStore<'a> {
    /// Creates a store over the slot file at the given path.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, path: &Path) -> Self {
        Self { ctx, path: path.to_path_buf() }
    }

    /// Loads the full collection, newest first.
    ///
    /// A missing slot file reads as the empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<Record>, StoreError> {
        if !self.ctx.fs.exists(&self.path) {
            return Ok(Vec::new());
        }
        let contents = self.ctx.fs.read_to_string(&self.path).map_err(StoreError::Read)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Replaces the full collection.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the slot write fails.
    pub fn save(&self, records: &[Record]) -> Result<(), StoreError> {
        let contents = serde_json::to_string(records)?;
        self.ctx.fs.write(&self.path, &contents).map_err(StoreError::Write)
    }

    /// Adds a generated identifier to the front of the history.
    ///
    /// Assigns a fresh id and creation timestamp, trims the remark,
    /// prepends, and truncates to the [`HISTORY_CAP`] most recent records
    /// before persisting. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn add(&self, generated: &GeneratedHkid, remark: &str) -> Result<Record, StoreError> {
        let mut history = self.load()?;

        let record = Record {
            id: self.ctx.id_gen.generate_id(),
            hkid: generated.hkid.clone(),
            hkid_display: generated.hkid_display.clone(),
            format: generated.format,
            letter_part: generated.letter_part.clone(),
            number_part: generated.number_part.clone(),
            check_digit: generated.check_digit,
            remark: remark.trim().to_string(),
            created_at: self.ctx.clock.now().timestamp_millis(),
        };

        history.insert(0, record.clone());
        history.truncate(HISTORY_CAP);
        self.save(&history)?;
        Ok(record)
    }

    /// Overwrites the remark of the record with the given id.
    ///
    /// A missing id is a silent no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn update_remark(&self, id: &str, remark: &str) -> Result<(), StoreError> {
        let mut history = self.load()?;
        if let Some(record) = history.iter_mut().find(|r| r.id == id) {
            record.remark = remark.trim().to_string();
            self.save(&history)?;
        }
        Ok(())
    }

    /// Removes the record with the given id if present; persists regardless.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut history = self.load()?;
        history.retain(|r| r.id != id);
        self.save(&history)
    }

    /// Replaces the collection with the empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        self.save(&[])
    }

    /// Removes every record whose trimmed remark is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn clear_empty_remarks(&self) -> Result<(), StoreError> {
        let mut history = self.load()?;
        history.retain(|r| !r.remark.trim().is_empty());
        self.save(&history)
    }

    /// Returns records matching the search term, in stored order.
    ///
    /// An empty or whitespace-only term returns the full collection.
    /// Otherwise a record matches when its `hkid`, `hkidDisplay`, or
    /// `remark` contains the term as a case-insensitive substring.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read.
    pub fn search(&self, term: &str) -> Result<Vec<Record>, StoreError> {
        let history = self.load()?;
        if term.trim().is_empty() {
            return Ok(history);
        }
        let needle = term.to_lowercase();
        Ok(history
            .into_iter()
            .filter(|r| {
                r.hkid.to_lowercase().contains(&needle)
                    || r.hkid_display.to_lowercase().contains(&needle)
                    || r.remark.to_lowercase().contains(&needle)
            })
            .collect())
    }
}


#[cfg(test)]
mod tests {
    use super::testsupport::{mem_context, record};
    use super::*;
    use crate::hkid;
    use crate::record::IdFormat;

    fn sample_generated() -> GeneratedHkid {
        GeneratedHkid {
            hkid: "A123456(3)".to_string(),
            hkid_display: "A1234563".to_string(),
            format: IdFormat::Old,
            letter_part: "A".to_string(),
            number_part: "123456".to_string(),
            check_digit: '3',
        }
    }

    fn store_path() -> PathBuf {
        PathBuf::from("/slot/history.json")
    }

    #[test]
    fn load_missing_slot_is_empty() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn add_assigns_id_timestamp_and_trims_remark() {
        let ctx = mem_context(5_000);
        let store = HistoryStore::new(&ctx, &store_path());

        let stored = store.add(&sample_generated(), "  first note  ").unwrap();

        assert_eq!(stored.id, "id-1");
        assert_eq!(stored.created_at, 5_000);
        assert_eq!(stored.remark, "first note");
        assert_eq!(stored.hkid, "A123456(3)");

        let history = store.load().unwrap();
        assert_eq!(history, vec![stored]);
    }

    #[test]
    fn add_prepends_newest_first() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());

        store.add(&sample_generated(), "first").unwrap();
        store.add(&sample_generated(), "second").unwrap();

        let history = store.load().unwrap();
        assert_eq!(history[0].remark, "second");
        assert_eq!(history[1].remark, "first");
        assert!(history[0].created_at > history[1].created_at);
    }

    #[test]
    fn cap_evicts_oldest_after_101_adds() {
        let ctx = mem_context(0);
        let store = HistoryStore::new(&ctx, &store_path());

        for i in 0..101 {
            store.add(&sample_generated(), &format!("record {i}")).unwrap();
        }

        let history = store.load().unwrap();
        assert_eq!(history.len(), HISTORY_CAP);
        // The very first add is gone; the most recent 100 remain.
        assert!(history.iter().all(|r| r.remark != "record 0"));
        assert_eq!(history[0].remark, "record 100");
        assert_eq!(history[99].remark, "record 1");
    }

    #[test]
    fn generated_identifiers_survive_the_store_round_trip() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());

        let generated = hkid::generate(ctx.rng.as_ref()).unwrap();
        let stored = store.add(&generated, "").unwrap();

        assert_eq!(stored.hkid, generated.hkid);
        assert_eq!(
            stored.check_digit,
            hkid::check_digit(&stored.letter_part, &stored.number_part).unwrap()
        );
    }

    #[test]
    fn update_remark_overwrites_and_trims() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        let stored = store.add(&sample_generated(), "old").unwrap();

        store.update_remark(&stored.id, "  new note ").unwrap();

        let history = store.load().unwrap();
        assert_eq!(history[0].remark, "new note");
        assert_eq!(history[0].created_at, stored.created_at);
    }

    #[test]
    fn update_remark_on_missing_id_is_a_no_op() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        store.add(&sample_generated(), "keep").unwrap();

        store.update_remark("no-such-id", "ignored").unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].remark, "keep");
    }

    #[test]
    fn delete_removes_matching_record() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        let first = store.add(&sample_generated(), "first").unwrap();
        store.add(&sample_generated(), "second").unwrap();

        store.delete(&first.id).unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].remark, "second");
    }

    #[test]
    fn delete_is_idempotent() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        let stored = store.add(&sample_generated(), "").unwrap();

        store.delete(&stored.id).unwrap();
        store.delete(&stored.id).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn clear_all_empties_the_collection() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        store.add(&sample_generated(), "a").unwrap();
        store.add(&sample_generated(), "b").unwrap();

        store.clear_all().unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn clear_empty_remarks_keeps_only_annotated_records() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        store
            .save(&[
                record("A123456(3)", "", 3_000),
                record("B123456(1)", "note", 2_000),
                record("C123456(9)", "  ", 1_000),
            ])
            .unwrap();

        store.clear_empty_remarks().unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].remark, "note");
    }

    #[test]
    fn search_empty_term_returns_everything_in_order() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        store.add(&sample_generated(), "first").unwrap();
        store.add(&sample_generated(), "second").unwrap();

        for term in ["", "   ", "\t"] {
            let results = store.search(term).unwrap();
            assert_eq!(results.len(), 2, "term {term:?}");
            assert_eq!(results[0].remark, "second");
            assert_eq!(results[1].remark, "first");
        }
    }

    #[test]
    fn search_matches_remark_only_record() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        store
            .save(&[
                record("A123456(3)", "staging login", 2_000),
                record("B123456(1)", "", 1_000),
            ])
            .unwrap();

        let results = store.search("staging").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].hkid, "A123456(3)");
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        store
            .save(&[
                record("AB123456(9)", "", 3_000),
                record("C123456(9)", "Production", 2_000),
                record("D987654(2)", "", 1_000),
            ])
            .unwrap();

        // Matches the hkid of the first record, lowercased.
        let by_hkid = store.search("ab1234").unwrap();
        assert_eq!(by_hkid.len(), 1);
        assert_eq!(by_hkid[0].hkid, "AB123456(9)");

        // Matches the remark of the second record, uppercased.
        let by_remark = store.search("PRODUCTION").unwrap();
        assert_eq!(by_remark.len(), 1);
        assert_eq!(by_remark[0].remark, "Production");

        let none = store.search("zzz").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn search_preserves_stored_order() {
        let ctx = mem_context(1_000);
        let store = HistoryStore::new(&ctx, &store_path());
        store
            .save(&[
                record("A111111(2)", "shared tag", 3_000),
                record("B222222(5)", "other", 2_000),
                record("C333333(8)", "shared tag", 1_000),
            ])
            .unwrap();

        let results = store.search("shared").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].created_at, 3_000);
        assert_eq!(results[1].created_at, 1_000);
    }

    #[test]
    fn corrupt_slot_surfaces_as_error() {
        let ctx = mem_context(1_000);
        ctx.fs.write(&store_path(), "not json").unwrap();
        let store = HistoryStore::new(&ctx, &store_path());

        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }
}
