//! CLI argument definitions
//!
//! All Clap derive structs for `movegen` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::matrix::{SourceKind, Timing};

// ============================================================================
// Root CLI
// ============================================================================

/// Generator for the script-element moving-between-documents test suite.
#[derive(Parser, Debug)]
#[command(name = "movegen", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "MOVEGEN_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the full set of generated test files.
    Generate(GenerateArgs),

    /// Verify a directory matches a fresh render of every case.
    Check(CheckArgs),

    /// List the cases the generator emits.
    List(ListArgs),

    /// Print the generated document for a single case.
    Show(ShowArgs),
}

// ============================================================================
// Command Arguments
// ============================================================================

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory that receives the generated files.
    #[arg(short, long, default_value = ".", env = "MOVEGEN_OUT_DIR")]
    pub out_dir: PathBuf,

    /// Also delete files named after combinations the rules exclude.
    #[arg(long)]
    pub prune: bool,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory holding the generated files.
    #[arg(short, long, default_value = ".", env = "MOVEGEN_OUT_DIR")]
    pub out_dir: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only cases moved at this timing.
    #[arg(long)]
    pub timing: Option<Timing>,

    /// Only cases with this script source.
    #[arg(long)]
    pub source: Option<SourceKind>,

    /// List the excluded combinations and the rule removing each.
    #[arg(long)]
    pub excluded: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Case name, with or without the `.html` suffix.
    pub case: String,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
