//! `hkidgen generate` command.

use crate::context::ServiceContext;
use crate::hkid;
use crate::store::HistoryStore;

/// Execute the `generate` command: draw a new identifier, persist it with
/// the optional remark, and print both display forms.
///
/// # Errors
///
/// Returns an error string if generation or persistence fails.
pub fn run(remark: Option<&str>) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = HistoryStore::new(&ctx, &super::history_path());

    let generated =
        hkid::generate(ctx.rng.as_ref()).map_err(|e| format!("Generation failed: {e}"))?;
    let record = store.add(&generated, remark.unwrap_or("")).map_err(|e| e.to_string())?;

    println!("{}", record.hkid_display);
    println!("Stored as {} [id {}]", record.hkid, record.id);
    Ok(())
}
