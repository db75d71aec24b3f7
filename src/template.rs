//! The document skeleton shared by every generated test file.

use crate::matrix::TestCase;

/// Renders the complete test document for `case`.
///
/// The output is byte-exact: the harness and review tooling diff generated
/// files against a fresh render, so the skeleton must not be reformatted.
/// The five axis tokens are substituted into the `runTest` call in field
/// order.
#[must_use]
pub fn render(case: TestCase) -> String {
    format!(
        r#"<!DOCTYPE html>
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
runTest("{timing}", "{dest_type}", "{result}", "{source}", "{script_type}");
</script>
"#,
        timing = case.timing,
        dest_type = case.dest_type,
        result = case.result,
        source = case.source,
        script_type = case.script_type,
    )
}
