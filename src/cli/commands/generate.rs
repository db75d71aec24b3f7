//! `generate` command handler.

use crate::cli::args::GenerateArgs;
use crate::emit;
use crate::error::MovegenError;

/// Execute `generate`.
///
/// Writes every surviving case into the output directory, overwriting
/// files already present. With `--prune`, files named after excluded
/// combinations are deleted afterwards.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created or a file
/// cannot be written or removed.
pub fn run(args: &GenerateArgs) -> Result<(), MovegenError> {
    let written = emit::generate_all(&args.out_dir)?;

    if args.prune {
        for path in emit::prune_stale(&args.out_dir)? {
            eprintln!("Pruned {}", path.display());
        }
    }

    eprintln!("Generated {written} test files in {}", args.out_dir.display());
    Ok(())
}
