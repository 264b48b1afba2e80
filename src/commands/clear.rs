//! `hkidgen clear` and `hkidgen clear-empty` commands.

use crate::context::ServiceContext;
use crate::store::HistoryStore;

/// Execute the `clear` command: drop every record.
///
/// # Errors
///
/// Returns an error string if the history cannot be written.
pub fn run_all() -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = HistoryStore::new(&ctx, &super::history_path());

    store.clear_all().map_err(|e| e.to_string())?;
    println!("History cleared.");
    Ok(())
}

/// Execute the `clear-empty` command: drop records without a remark.
///
/// # Errors
///
/// Returns an error string if the history cannot be read or written.
pub fn run_empty() -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = HistoryStore::new(&ctx, &super::history_path());

    store.clear_empty_remarks().map_err(|e| e.to_string())?;
    let remaining = store.load().map_err(|e| e.to_string())?.len();
    println!("Removed records without remarks; {remaining} left.");
    Ok(())
}
