//! Test-case matrix: the five axes, the exclusion rules, and the registry
//! of combinations the generator emits.
//!
//! The full product of the axes is 72 combinations. Three exclusion rules
//! remove the tuples the runtime helper cannot drive, leaving 48 generated
//! files. Enumeration order is fixed: timing varies slowest, script type
//! fastest.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

// ============================================================================
// Axes
// ============================================================================

/// When the script element is moved, relative to script preparation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Timing {
    /// Moved before the script is prepared.
    BeforePrepare,
    /// Moved after preparation, before evaluation.
    AfterPrepare,
    /// Moved after preparation, then moved back into the original document.
    MoveBack,
}

impl Timing {
    /// Returns the token used in file names and in the rendered document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BeforePrepare => "before-prepare",
            Self::AfterPrepare => "after-prepare",
            Self::MoveBack => "move-back",
        }
    }

    /// Returns all variants in enumeration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::BeforePrepare, Self::AfterPrepare, Self::MoveBack]
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document the script element is moved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DestType {
    /// The document of a same-origin iframe.
    #[serde(rename = "iframe")]
    Iframe,
    /// A document created with `DOMImplementation.createHTMLDocument()`.
    #[serde(rename = "createHTMLDocument")]
    CreateHtmlDocument,
}

impl DestType {
    /// Returns the token used in file names and in the rendered document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iframe => "iframe",
            Self::CreateHtmlDocument => "createHTMLDocument",
        }
    }

    /// Returns all variants in enumeration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Iframe, Self::CreateHtmlDocument]
    }
}

impl fmt::Display for DestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the script is expected to conclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptResult {
    /// The external resource fails to load.
    FetchError,
    /// The source text fails to parse.
    ParseError,
    /// The script evaluates successfully.
    Success,
}

impl ScriptResult {
    /// Returns the token used in file names and in the rendered document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FetchError => "fetch-error",
            Self::ParseError => "parse-error",
            Self::Success => "success",
        }
    }

    /// Returns all variants in enumeration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::FetchError, Self::ParseError, Self::Success]
    }
}

impl fmt::Display for ScriptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the script source lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Source text inside the element itself.
    Inline,
    /// Source fetched from a `src` URL.
    External,
}

impl SourceKind {
    /// Returns the token used in file names and in the rendered document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::External => "external",
        }
    }

    /// Returns all variants in enumeration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Inline, Self::External]
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classic or module script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptType {
    /// A classic script.
    Classic,
    /// A module script.
    Module,
}

impl ScriptType {
    /// Returns the token used in file names and in the rendered document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Module => "module",
        }
    }

    /// Returns all variants in enumeration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Classic, Self::Module]
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Test Cases
// ============================================================================

/// A single point in the test matrix.
///
/// The field order matches the enumeration order and the token order in
/// generated file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestCase {
    /// When the element is moved.
    pub timing: Timing,
    /// Destination document kind.
    pub dest_type: DestType,
    /// Expected script outcome.
    pub result: ScriptResult,
    /// Inline or external source.
    pub source: SourceKind,
    /// Classic or module.
    pub script_type: ScriptType,
}

impl TestCase {
    /// Returns the case name: the five axis tokens joined with `-`.
    #[must_use]
    pub fn name(self) -> String {
        self.to_string()
    }

    /// Returns the name of the generated file for this case.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{self}.html")
    }

    /// Parses a case name, with or without the `.html` suffix.
    ///
    /// Axis tokens themselves contain `-`, so the name cannot simply be
    /// split on it; each axis is matched as a prefix in field order
    /// instead. Returns `None` when the name does not describe a point in
    /// the matrix, excluded or not.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".html").unwrap_or(name);

        let (timing, rest) = strip_axis(stem, Timing::all(), Timing::as_str)?;
        let (dest_type, rest) =
            strip_axis(rest.strip_prefix('-')?, DestType::all(), DestType::as_str)?;
        let (result, rest) = strip_axis(
            rest.strip_prefix('-')?,
            ScriptResult::all(),
            ScriptResult::as_str,
        )?;
        let (source, rest) = strip_axis(
            rest.strip_prefix('-')?,
            SourceKind::all(),
            SourceKind::as_str,
        )?;
        let (script_type, rest) = strip_axis(
            rest.strip_prefix('-')?,
            ScriptType::all(),
            ScriptType::as_str,
        )?;

        rest.is_empty().then_some(Self {
            timing,
            dest_type,
            result,
            source,
            script_type,
        })
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.timing, self.dest_type, self.result, self.source, self.script_type
        )
    }
}

/// Matches one axis token at the start of `input`.
fn strip_axis<'a, T: Copy>(
    input: &'a str,
    variants: &[T],
    token: fn(T) -> &'static str,
) -> Option<(T, &'a str)> {
    variants
        .iter()
        .copied()
        .find_map(|v| input.strip_prefix(token(v)).map(|rest| (v, rest)))
}

// ============================================================================
// Exclusion Rules
// ============================================================================

/// Why a combination is not generated.
///
/// The runtime helper holds back script evaluation with a script-blocking
/// style sheet once the script has been prepared. Combinations where that
/// blocking cannot hold are excluded, as are inline fetch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exclusion {
    /// An inline script has no fetch that can fail.
    InlineFetchError,
    /// Style-sheet blocking does not hold for an inline script moved into
    /// a `createHTMLDocument` document.
    InlineIntoCreatedDocument,
    /// Style-sheet blocking does not hold for inline module scripts
    /// (whatwg/html#3890).
    InlineModuleAfterPrepare,
}

impl Exclusion {
    /// Returns a one-line explanation of the rule.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::InlineFetchError => "inline scripts have no fetch that can fail",
            Self::InlineIntoCreatedDocument => {
                "script-blocking style sheets cannot delay an inline script \
                 moved into a createHTMLDocument document"
            }
            Self::InlineModuleAfterPrepare => {
                "script-blocking style sheets cannot delay an inline module \
                 script once it has been prepared (whatwg/html#3890)"
            }
        }
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InlineFetchError => write!(f, "inline-fetch-error"),
            Self::InlineIntoCreatedDocument => write!(f, "inline-into-created-document"),
            Self::InlineModuleAfterPrepare => write!(f, "inline-module-after-prepare"),
        }
    }
}

/// Returns the exclusion rule that removes `case`, if any.
///
/// Rules are checked in a fixed order and the first match is reported, so
/// a tuple matching several rules is attributed to the earliest one.
#[must_use]
pub fn exclusion(case: TestCase) -> Option<Exclusion> {
    if case.result == ScriptResult::FetchError && case.source == SourceKind::Inline {
        return Some(Exclusion::InlineFetchError);
    }

    if case.timing != Timing::BeforePrepare
        && case.dest_type == DestType::CreateHtmlDocument
        && case.source == SourceKind::Inline
    {
        return Some(Exclusion::InlineIntoCreatedDocument);
    }

    if case.timing != Timing::BeforePrepare
        && case.source == SourceKind::Inline
        && case.script_type == ScriptType::Module
    {
        return Some(Exclusion::InlineModuleAfterPrepare);
    }

    None
}

// ============================================================================
// Registry
// ============================================================================

/// Every point in the matrix, in enumeration order.
fn full_product() -> Vec<TestCase> {
    let mut cases = Vec::new();
    for &timing in Timing::all() {
        for &dest_type in DestType::all() {
            for &result in ScriptResult::all() {
                for &source in SourceKind::all() {
                    for &script_type in ScriptType::all() {
                        cases.push(TestCase {
                            timing,
                            dest_type,
                            result,
                            source,
                            script_type,
                        });
                    }
                }
            }
        }
    }
    cases
}

/// Combinations that survive the exclusion rules, in enumeration order.
static SURVIVING_CASES: LazyLock<Vec<TestCase>> = LazyLock::new(|| {
    full_product()
        .into_iter()
        .filter(|case| exclusion(*case).is_none())
        .collect()
});

// ============================================================================
// Public API
// ============================================================================

/// Returns every case the generator emits, in enumeration order.
#[must_use]
pub fn surviving_cases() -> &'static [TestCase] {
    &SURVIVING_CASES
}

/// Returns the excluded combinations paired with the rule that removes
/// each, in enumeration order.
#[must_use]
pub fn excluded_cases() -> Vec<(TestCase, Exclusion)> {
    full_product()
        .into_iter()
        .filter_map(|case| exclusion(case).map(|rule| (case, rule)))
        .collect()
}

/// Lists surviving cases, optionally filtered by timing and/or source.
#[must_use]
pub fn cases_where(timing: Option<Timing>, source: Option<SourceKind>) -> Vec<TestCase> {
    surviving_cases()
        .iter()
        .copied()
        .filter(|case| timing.is_none_or(|t| case.timing == t))
        .filter(|case| source.is_none_or(|s| case.source == s))
        .collect()
}

/// Suggests a similar case name for typo correction.
///
/// Returns the closest surviving case name if its Damerau-Levenshtein
/// distance is at most 3.
#[must_use]
pub fn suggest_case(input: &str) -> Option<String> {
    let stem = input.strip_suffix(".html").unwrap_or(input);
    surviving_cases()
        .iter()
        .map(|case| {
            let name = case.name();
            let dist = strsim::damerau_levenshtein(stem, &name);
            (name, dist)
        })
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name)
}

// ============================================================================
// Tests
// ============================================================================
