//! `hkidgen import` command.

use std::path::Path;

use crate::codec;
use crate::context::ServiceContext;
use crate::store::HistoryStore;

/// Execute the `import` command: merge an exported JSON array into the
/// history. On a malformed payload the history is left untouched.
///
/// # Errors
///
/// Returns an error string if the file cannot be read, the payload is not
/// a record array, or the merged history cannot be written.
pub fn run(file: &Path) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = HistoryStore::new(&ctx, &super::history_path());

    let blob = ctx
        .fs
        .read_to_string(file)
        .map_err(|e| format!("Failed to read import file {}: {e}", file.display()))?;
    codec::import(&store, &blob).map_err(|e| e.to_string())?;

    let count = store.load().map_err(|e| e.to_string())?.len();
    println!("Import complete; history now holds {count} records.");
    Ok(())
}
