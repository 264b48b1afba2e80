//! `hkidgen list` command.

use chrono::{DateTime, Utc};

use crate::context::ServiceContext;
use crate::record::Record;
use crate::store::HistoryStore;

/// Execute the `list` command.
///
/// With a term, prints only matching records; without one, prints the whole
/// history, newest first.
///
/// # Errors
///
/// Returns an error string if the history cannot be read.
pub fn run(term: Option<&str>) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = HistoryStore::new(&ctx, &super::history_path());

    let results = store.search(term.unwrap_or("")).map_err(|e| e.to_string())?;

    println!("History ({})", results.len());
    if results.is_empty() {
        println!("No records.");
        return Ok(());
    }
    for record in &results {
        print_record(record);
    }
    Ok(())
}

fn print_record(record: &Record) {
    let when = DateTime::<Utc>::from_timestamp_millis(record.created_at)
        .map_or_else(|| "?".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string());
    if record.remark.is_empty() {
        println!("{}  {}  {}", record.id, record.hkid, when);
    } else {
        println!("{}  {}  {}  {}", record.id, record.hkid, when, record.remark);
    }
}
