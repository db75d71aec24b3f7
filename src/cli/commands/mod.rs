//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod generate;
pub mod list;
pub mod show;

use crate::cli::args::{Cli, Commands};
use crate::error::MovegenError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), MovegenError> {
    match cli.command {
        Commands::Generate(args) => generate::run(&args),
        Commands::Check(args) => check::run(&args),
        Commands::List(args) => list::run(&args),
        Commands::Show(args) => show::run(&args),
    }
}
