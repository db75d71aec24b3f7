//! `list` command handler.

use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::MovegenError;
use crate::matrix::{self, Timing};

/// Execute `list`.
///
/// Displays surviving cases grouped by timing (human) or as a JSON array.
/// With `--excluded`, lists the removed combinations and the rule that
/// removes each instead.
///
/// # Errors
///
/// Returns a JSON error if output serialization fails.
pub fn run(args: &ListArgs) -> Result<(), MovegenError> {
    if args.excluded {
        return run_excluded(args);
    }

    let cases = matrix::cases_where(args.timing, args.source);

    match args.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = cases
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "name": c.name(),
                        "file": c.file_name(),
                        "timing": c.timing,
                        "dest_type": c.dest_type,
                        "result": c.result,
                        "source": c.source,
                        "script_type": c.script_type,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            if cases.is_empty() {
                println!("No cases match the given filters.");
                return Ok(());
            }

            let total = cases.len();
            println!("Test cases ({total})\n");

            // Group by timing in enumeration order
            for timing in Timing::all() {
                let in_group: Vec<_> = cases.iter().filter(|c| c.timing == *timing).collect();
                if in_group.is_empty() {
                    continue;
                }

                println!("  {timing}");
                for case in in_group {
                    println!("    {}", case.file_name());
                }
                println!();
            }

            println!("Write the files:  movegen generate --out-dir <dir>");
            println!("View a document:  movegen show <case>");
        }
    }

    Ok(())
}

/// List excluded combinations with the rule removing each.
fn run_excluded(args: &ListArgs) -> Result<(), MovegenError> {
    let excluded: Vec<_> = matrix::excluded_cases()
        .into_iter()
        .filter(|(c, _)| args.timing.is_none_or(|t| c.timing == t))
        .filter(|(c, _)| args.source.is_none_or(|s| c.source == s))
        .collect();

    match args.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = excluded
                .iter()
                .map(|(c, rule)| {
                    serde_json::json!({
                        "name": c.name(),
                        "rule": rule.to_string(),
                        "reason": rule.reason(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            if excluded.is_empty() {
                println!("No excluded combinations match the given filters.");
                return Ok(());
            }

            let total = excluded.len();
            println!("Excluded combinations ({total})\n");

            for timing in Timing::all() {
                let in_group: Vec<_> =
                    excluded.iter().filter(|(c, _)| c.timing == *timing).collect();
                if in_group.is_empty() {
                    continue;
                }

                println!("  {timing}");
                for (case, rule) in in_group {
                    println!("    {:<64}{rule}", case.name());
                }
                println!();
            }
        }
    }

    Ok(())
}
