//! `show` command handler.

use std::fmt::Write as _;

use crate::cli::args::ShowArgs;
use crate::error::MovegenError;
use crate::matrix::{self, TestCase};
use crate::template;

/// Execute `show`.
///
/// Prints the rendered document for one case to stdout, suitable for
/// piping or diffing against a checked-in file.
///
/// # Errors
///
/// Returns a usage error if the name does not parse or names an excluded
/// combination.
pub fn run(args: &ShowArgs) -> Result<(), MovegenError> {
    let Some(case) = TestCase::from_name(&args.case) else {
        let mut message = format!("Unknown case '{}'", args.case);

        if let Some(suggestion) = matrix::suggest_case(&args.case) {
            let _ = write!(message, "\n\nDid you mean '{suggestion}'?");
        }

        message.push_str("\n\nUse 'movegen list' to see every generated case.");
        return Err(MovegenError::Usage(message));
    };

    if let Some(rule) = matrix::exclusion(case) {
        return Err(MovegenError::Usage(format!(
            "'{}' is not generated: {}",
            args.case,
            rule.reason()
        )));
    }

    print!("{}", template::render(case));
    Ok(())
}
