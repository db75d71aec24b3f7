//! `check` command handler.

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::emit;
use crate::error::MovegenError;

/// Execute `check`.
///
/// Compares the directory against a fresh render of every case and
/// reports drift. Intended for CI: a clean directory exits 0, any drift
/// exits with the out-of-date code.
///
/// # Errors
///
/// Returns an out-of-date error when files are missing, modified, or
/// stale; an I/O error if the directory cannot be read.
pub fn run(args: &CheckArgs) -> Result<(), MovegenError> {
    let report = emit::check(&args.out_dir)?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for name in &report.missing {
                eprintln!("MISSING  {name}");
            }
            for name in &report.modified {
                eprintln!("MODIFIED {name}");
            }
            for name in &report.stale {
                eprintln!("STALE    {name}");
            }
            if report.is_clean() {
                eprintln!("Up to date ({} files)", report.matched);
            }
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(MovegenError::OutOfDate {
            missing: report.missing.len(),
            modified: report.modified.len(),
            stale: report.stale.len(),
        })
    }
}
