//! `hkidgen export` command.

use std::path::{Path, PathBuf};

use crate::codec;
use crate::context::ServiceContext;
use crate::store::HistoryStore;

/// Execute the `export` command: write the whole history as pretty JSON.
///
/// Without `--output`, the file lands in the working directory under a
/// date-stamped name.
///
/// # Errors
///
/// Returns an error string if the history cannot be read or the file
/// cannot be written.
pub fn run(output: Option<&Path>) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = HistoryStore::new(&ctx, &super::history_path());

    let blob = codec::export(&store).map_err(|e| e.to_string())?;
    let path = output.map_or_else(
        || PathBuf::from(codec::export_file_name(ctx.clock.now().date_naive())),
        Path::to_path_buf,
    );
    ctx.fs
        .write(&path, &blob)
        .map_err(|e| format!("Failed to write export file {}: {e}", path.display()))?;

    println!("Exported history to {}", path.display());
    Ok(())
}
