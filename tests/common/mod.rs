//! Shared integration-test helpers for spawning the `movegen` binary.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Runs the `movegen` binary with the given arguments.
#[allow(clippy::missing_panics_doc)]
pub fn run_movegen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_movegen"))
        .args(args)
        .output()
        .expect("failed to spawn movegen")
}

/// Runs a subcommand with `--out-dir` pointing at `dir`.
#[allow(clippy::missing_panics_doc)]
pub fn run_in_dir(subcommand: &str, dir: &Path, extra: &[&str]) -> Output {
    let dir = dir.to_str().expect("non-UTF-8 temp path");
    let mut args = vec![subcommand, "--out-dir", dir];
    args.extend_from_slice(extra);
    run_movegen(&args)
}

/// Exit code of a finished process, panicking on signal termination.
#[allow(clippy::missing_panics_doc)]
pub fn exit_code(output: &Output) -> i32 {
    output.status.code().expect("process killed by signal")
}
