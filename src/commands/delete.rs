//! `hkidgen delete` command.

use crate::context::ServiceContext;
use crate::store::HistoryStore;

/// Execute the `delete` command: remove a record by id (idempotent).
///
/// # Errors
///
/// Returns an error string if the history cannot be read or written.
pub fn run(id: &str) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = HistoryStore::new(&ctx, &super::history_path());

    store.delete(id).map_err(|e| e.to_string())?;
    println!("Record deleted.");
    Ok(())
}
