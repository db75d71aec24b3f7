//! Error types and exit codes for `movegen`.

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `movegen` CLI operations.
///
/// These codes follow Unix conventions; `OUT_OF_DATE` is the code CI
/// pipelines key on when `check` finds drift.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Generated files differ from a fresh render
    pub const OUT_OF_DATE: i32 = 2;

    /// I/O error (directory not writable, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (unknown case name, invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `movegen` operations.
#[derive(Debug, Error)]
pub enum MovegenError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid user input, reported with exit code 64
    #[error("{0}")]
    Usage(String),

    /// `check` found files missing, modified, or stale
    #[error(
        "generated files are out of date: {missing} missing, {modified} modified, {stale} stale"
    )]
    OutOfDate {
        /// Expected files absent from the directory
        missing: usize,
        /// Files whose bytes differ from a fresh render
        modified: usize,
        /// Files named after combinations the rules exclude
        stale: usize,
    },
}

impl MovegenError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::OutOfDate { .. } => ExitCode::OUT_OF_DATE,
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `movegen` operations.
pub type Result<T> = std::result::Result<T, MovegenError>;

// ============================================================================
// Tests
// ============================================================================
