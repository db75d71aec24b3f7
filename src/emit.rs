//! File emission: writing, verifying, and pruning the generated set.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::MovegenError;
use crate::matrix::{self, TestCase};
use crate::template;

// ============================================================================
// Check Report
// ============================================================================

/// Outcome of comparing a directory against a fresh render of every case.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// Expected files absent from the directory, in enumeration order.
    pub missing: Vec<String>,
    /// Files whose on-disk bytes differ from a fresh render.
    pub modified: Vec<String>,
    /// Files named after combinations the rules exclude, sorted by name.
    pub stale: Vec<String>,
    /// Count of files that match exactly.
    pub matched: usize,
}

impl CheckReport {
    /// Returns `true` when the directory matches the expected set exactly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.modified.is_empty() && self.stale.is_empty()
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Writes every surviving case into `out_dir`, creating it if needed.
///
/// Existing files are overwritten unconditionally, so repeated runs
/// converge on the same directory contents. Returns the number of files
/// written.
///
/// # Errors
///
/// Returns the first I/O failure, with the offending path in the message;
/// remaining cases are not attempted.
pub fn generate_all(out_dir: &Path) -> Result<usize, MovegenError> {
    fs::create_dir_all(out_dir).map_err(|e| io_context("create", out_dir, &e))?;

    let mut written = 0;
    for &case in matrix::surviving_cases() {
        let path = out_dir.join(case.file_name());
        fs::write(&path, template::render(case))
            .map_err(|e| io_context("write", &path, &e))?;
        tracing::debug!(file = %path.display(), "wrote test file");
        written += 1;
    }

    Ok(written)
}

/// Compares `out_dir` against a fresh render of every surviving case.
///
/// A missing directory is reported as every file missing rather than as
/// an error, so `check` can run before the first `generate`.
///
/// # Errors
///
/// Returns an I/O error for failures other than a file or directory not
/// existing.
pub fn check(out_dir: &Path) -> Result<CheckReport, MovegenError> {
    let mut report = CheckReport::default();

    for &case in matrix::surviving_cases() {
        let name = case.file_name();
        let path = out_dir.join(&name);
        match fs::read(&path) {
            Ok(bytes) if bytes == template::render(case).into_bytes() => report.matched += 1,
            Ok(_) => report.modified.push(name),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => report.missing.push(name),
            Err(e) => return Err(io_context("read", &path, &e)),
        }
    }

    report.stale = stale_files(out_dir)?;
    Ok(report)
}

/// Deletes files in `out_dir` named after excluded combinations.
///
/// Only files whose names parse as a point in the matrix are candidates;
/// anything else in the directory is left alone. Returns the deleted
/// paths, sorted by name.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be scanned or a stale
/// file cannot be removed.
pub fn prune_stale(out_dir: &Path) -> Result<Vec<PathBuf>, MovegenError> {
    let mut removed = Vec::new();
    for name in stale_files(out_dir)? {
        let path = out_dir.join(&name);
        fs::remove_file(&path).map_err(|e| io_context("remove", &path, &e))?;
        tracing::debug!(file = %path.display(), "pruned stale test file");
        removed.push(path);
    }
    Ok(removed)
}

/// Scans `out_dir` for `.html` files named after excluded combinations.
fn stale_files(out_dir: &Path) -> Result<Vec<String>, MovegenError> {
    let mut stale = Vec::new();

    let entries = match fs::read_dir(out_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(stale),
        Err(e) => return Err(io_context("read", out_dir, &e)),
    };

    for entry in entries {
        let entry = entry.map_err(|e| io_context("read", out_dir, &e))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        if let Some(case) = TestCase::from_name(&name) {
            if matrix::exclusion(case).is_some() {
                stale.push(name);
            }
        }
    }

    stale.sort();
    Ok(stale)
}

/// Rewraps an I/O error with the action and path that failed.
fn io_context(action: &str, path: &Path, e: &std::io::Error) -> MovegenError {
    MovegenError::Io(std::io::Error::new(
        e.kind(),
        format!("failed to {action} {}: {e}", path.display()),
    ))
}

// ============================================================================
// Tests
// ============================================================================
