//! End-to-end tests for the `generate` command.

mod common;

use std::fs;

use common::{exit_code, run_in_dir};

/// The first case in enumeration order, rendered by hand. Guards the
/// byte-level output contract independently of the template module.
const FIRST_CASE_DOCUMENT: &str = r#"<!DOCTYPE html>
<meta charset="utf-8">
<meta name="timeout" content="long">
<title>Moving script elements between documents</title>
<link rel="author" href="mailto:d@domenic.me" title="Domenic Denicola">
<link rel="help" href="https://html.spec.whatwg.org/multipage/#execute-the-script-block">
<script src="/resources/testharness.js"></script>
<script src="/resources/testharnessreport.js"></script>
<script src="resources/moving-between-documents-helper.js"></script>

<body>
<script>
runTest("before-prepare", "iframe", "fetch-error", "external", "classic");
</script>
"#;

#[test]
fn generate_writes_48_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = run_in_dir("generate", dir.path(), &[]);
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let html_files: Vec<String> = fs::read_dir(dir.path())
        .expect("read temp dir")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".html"))
        .collect();
    assert_eq!(html_files.len(), 48);
}

#[test]
fn generate_reports_count_on_stderr() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = run_in_dir("generate", dir.path(), &[]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Generated 48 test files"),
        "unexpected stderr: {stderr}"
    );
    assert!(
        output.stdout.is_empty(),
        "generate should not write to stdout"
    );
}

#[test]
fn generated_first_case_is_byte_exact() {
    let dir = tempfile::tempdir().expect("create temp dir");
    run_in_dir("generate", dir.path(), &[]);

    let content = fs::read_to_string(
        dir.path()
            .join("before-prepare-iframe-fetch-error-external-classic.html"),
    )
    .expect("first case should exist");
    assert_eq!(content, FIRST_CASE_DOCUMENT);
}

#[test]
fn generated_success_case_calls_run_test_with_its_tokens() {
    let dir = tempfile::tempdir().expect("create temp dir");
    run_in_dir("generate", dir.path(), &[]);

    let content = fs::read_to_string(
        dir.path()
            .join("before-prepare-iframe-success-external-classic.html"),
    )
    .expect("success case should exist");
    assert!(content.contains(
        r#"runTest("before-prepare", "iframe", "success", "external", "classic");"#
    ));
    assert!(content.ends_with("</script>\n"));
}

#[test]
fn generated_set_has_expected_boundary_names() {
    let dir = tempfile::tempdir().expect("create temp dir");
    run_in_dir("generate", dir.path(), &[]);

    // First and last survivors in enumeration order.
    assert!(dir
        .path()
        .join("before-prepare-iframe-fetch-error-external-classic.html")
        .exists());
    assert!(dir
        .path()
        .join("move-back-createHTMLDocument-success-external-module.html")
        .exists());

    // Excluded combinations are never written.
    assert!(!dir
        .path()
        .join("before-prepare-iframe-fetch-error-inline-classic.html")
        .exists());
    assert!(!dir
        .path()
        .join("after-prepare-createHTMLDocument-success-inline-classic.html")
        .exists());
}

#[test]
fn generate_overwrites_tampered_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    run_in_dir("generate", dir.path(), &[]);

    let victim = dir
        .path()
        .join("move-back-iframe-success-external-classic.html");
    fs::write(&victim, "tampered").expect("overwrite file");

    run_in_dir("generate", dir.path(), &[]);
    let content = fs::read_to_string(&victim).expect("read regenerated file");
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains(
        r#"runTest("move-back", "iframe", "success", "external", "classic");"#
    ));
}

#[test]
fn generate_prune_removes_excluded_leftovers() {
    let dir = tempfile::tempdir().expect("create temp dir");
    run_in_dir("generate", dir.path(), &[]);

    // Simulate a file generated before the exclusion rules tightened.
    let stale = dir
        .path()
        .join("move-back-iframe-parse-error-inline-module.html");
    fs::write(&stale, "old content").expect("write stale file");

    let output = run_in_dir("generate", dir.path(), &["--prune"]);
    assert!(output.status.success());
    assert!(!stale.exists(), "stale file should be pruned");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("move-back-iframe-parse-error-inline-module.html"),
        "prune should name the removed file: {stderr}"
    );
}

#[test]
fn generate_without_prune_keeps_stale_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let stale = dir
        .path()
        .join("move-back-iframe-parse-error-inline-module.html");

    run_in_dir("generate", dir.path(), &[]);
    fs::write(&stale, "old content").expect("write stale file");
    run_in_dir("generate", dir.path(), &[]);

    assert!(stale.exists(), "plain generate should not delete files");
}

#[test]
fn generate_into_unwritable_path_fails_with_io_code() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let occupied = dir.path().join("occupied");
    fs::write(&occupied, "a file, not a directory").expect("write file");

    let output = run_in_dir("generate", &occupied, &[]);
    assert_eq!(exit_code(&output), 3);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "unexpected stderr: {stderr}");
}

#[test]
fn generate_honors_out_dir_env_var() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_movegen"))
        .arg("generate")
        .env("MOVEGEN_OUT_DIR", dir.path())
        .output()
        .expect("failed to spawn movegen");
    assert!(output.status.success());
    assert!(dir
        .path()
        .join("before-prepare-iframe-success-inline-classic.html")
        .exists());
}
