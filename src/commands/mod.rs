//! Command dispatch and handlers.

pub mod clear;
pub mod delete;
pub mod export;
pub mod generate;
pub mod import;
pub mod list;
pub mod remark;

use std::path::PathBuf;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Generate { remark } => generate::run(remark.as_deref()),
        Command::List { term } => list::run(term.as_deref()),
        Command::Remark { id, text } => remark::run(id, text),
        Command::Delete { id } => delete::run(id),
        Command::Clear => clear::run_all(),
        Command::ClearEmpty => clear::run_empty(),
        Command::Export { output } => export::run(output.as_deref()),
        Command::Import { file } => import::run(file),
    }
}

/// Path of the history slot file: `HKIDGEN_STORE` or a local default.
pub(crate) fn history_path() -> PathBuf {
    std::env::var("HKIDGEN_STORE")
        .map_or_else(|_| PathBuf::from(".hkidgen/history.json"), PathBuf::from)
}
