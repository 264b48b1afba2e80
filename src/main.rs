//! Binary entrypoint for the `hkidgen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match hkidgen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
