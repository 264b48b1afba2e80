//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `hkidgen`.
#[derive(Debug, Parser)]
#[command(name = "hkidgen", version, about = "Generate synthetic HKIDs and manage their history")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a new identifier and add it to the history.
    Generate {
        /// Remark to store with the new record.
        #[arg(long)]
        remark: Option<String>,
    },
    /// List history records, optionally filtered by a search term.
    List {
        /// Case-insensitive substring matched against hkid, display form,
        /// and remark. Omit to list everything.
        term: Option<String>,
    },
    /// Set the remark on a history record.
    Remark {
        /// Record id as shown by `list`.
        id: String,
        /// New remark text.
        text: String,
    },
    /// Delete a history record by id.
    Delete {
        /// Record id as shown by `list`.
        id: String,
    },
    /// Remove every record from the history.
    Clear,
    /// Remove records whose remark is empty.
    ClearEmpty,
    /// Write the history to a JSON file.
    Export {
        /// Output path; defaults to hkid-history-<date>.json.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Merge records from an exported JSON file into the history.
    Import {
        /// File containing a JSON array of records.
        file: PathBuf,
    },
}
