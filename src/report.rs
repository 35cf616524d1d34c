//! Aggregated test results and their text rendering.
//!
//! The text produced by [`TestReport::render`] is the harness's only external
//! artifact, so its layout is kept stable:
//!
//! ```text
//! Pandora Testing Suite
//! Total Tests: 3
//! Passed Tests: 1
//! Failed Tests: 2
//! Total time: 1.2ms
//!
//! Test Description:
//! [2 of 3]: Second test that should fail : Failed
//! Time: 310ns
//! Message: Fails as it should
//! ```

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::test::TestResult;

/// Title printed on the first line of every report.
pub const SUITE_TITLE: &str = "Pandora Testing Suite";

// =============================================================================
// RENDER OPTIONS
// =============================================================================

/// How a report should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a block per test after the summary.
    pub detailed: bool,
    /// With `detailed`, only emit blocks for failing tests.
    pub only_failures: bool,
    /// Colour the console output. Ignored by the plain-text renderer.
    pub use_colors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            detailed: false,
            only_failures: false,
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl RenderOptions {
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    pub fn only_failures(mut self, only_failures: bool) -> Self {
        self.only_failures = only_failures;
        self
    }

    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Read-only view over the results of a finished run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestReport {
    results: Vec<TestResult>,
}

impl TestReport {
    pub fn new(results: Vec<TestResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// `(total, passed, failed)`.
    pub fn summary_counts(&self) -> (usize, usize, usize) {
        (self.total(), self.passed(), self.failed())
    }

    pub fn total_duration(&self) -> Duration {
        self.results.iter().map(TestResult::duration).sum()
    }

    /// Iterates the results that a render with `only_failures` would show,
    /// paired with their 1-based position in the full run.
    pub fn shown(&self, only_failures: bool) -> impl Iterator<Item = (usize, &TestResult)> {
        self.results
            .iter()
            .enumerate()
            .filter(move |(_, r)| !(only_failures && r.passed()))
            .map(|(i, r)| (i + 1, r))
    }

    pub fn render(&self, detailed: bool, only_failures: bool) -> String {
        let options = RenderOptions {
            detailed,
            only_failures,
            use_colors: false,
        };
        self.render_with(&options)
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut buf = String::new();
        self.write_summary(&mut buf);
        if !options.detailed {
            return buf;
        }

        buf.push_str("\nTest Description:\n");
        for (ordinal, result) in self.shown(options.only_failures) {
            self.write_detail(&mut buf, ordinal, result);
        }
        buf
    }

    /// Structured form of the report for tooling.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let json = JsonReport {
            suite: SUITE_TITLE,
            total: self.total(),
            passed: self.passed(),
            failed: self.failed(),
            total_duration: self.total_duration().as_secs_f64(),
            results: &self.results,
        };
        serde_json::to_string_pretty(&json)
    }

    fn write_summary(&self, buf: &mut String) {
        buf.push_str(&format!("{}\n", SUITE_TITLE));
        buf.push_str(&format!("Total Tests: {}\n", self.total()));
        buf.push_str(&format!("Passed Tests: {}\n", self.passed()));
        buf.push_str(&format!("Failed Tests: {}\n", self.failed()));
        buf.push_str(&format!("Total time: {:?}\n", self.total_duration()));
    }

    fn write_detail(&self, buf: &mut String, ordinal: usize, result: &TestResult) {
        buf.push_str(&self.detail_heading(ordinal, result));
        buf.push_str(status_label(result.passed()));
        buf.push('\n');
        buf.push_str(&detail_body(result));
    }

    /// `[ordinal of total]: name : ` without the status label.
    pub(crate) fn detail_heading(&self, ordinal: usize, result: &TestResult) -> String {
        format!("[{} of {}]: {} : ", ordinal, self.total(), result.name())
    }
}

/// Lines following the heading of a detail block, blank separator included.
pub(crate) fn detail_body(result: &TestResult) -> String {
    let mut body = format!(
        "Time: {:?}\nMessage: {}\n",
        result.duration(),
        result.message().unwrap_or_default()
    );
    if let Some(location) = result.error().and_then(|e| e.location()) {
        body.push_str(&format!("Location: {}\n", location));
    }
    body.push('\n');
    body
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false, false))
    }
}

pub(crate) fn status_label(passed: bool) -> &'static str {
    if passed {
        "Passed"
    } else {
        "Failed"
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    suite: &'static str,
    total: usize,
    passed: usize,
    failed: usize,
    total_duration: f64,
    results: &'a [TestResult],
}
