//! `hkidgen remark` command.

use crate::context::ServiceContext;
use crate::store::HistoryStore;

/// Execute the `remark` command: overwrite the remark on a record.
///
/// An unknown id is a silent no-op, matching the store contract.
///
/// # Errors
///
/// Returns an error string if the history cannot be read or written.
pub fn run(id: &str, text: &str) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = HistoryStore::new(&ctx, &super::history_path());

    store.update_remark(id, text).map_err(|e| e.to_string())?;
    println!("Remark saved.");
    Ok(())
}
