//! The `pandora` binary's entry point.
//!
//! Runs every discovered test, prints the failures, and maps the outcome to
//! a process exit code.

use std::process;

use crate::report::RenderOptions;

pub mod output;

/// Exit code when at least one test failed.
pub const EXIT_FAILED: i32 = 1;
/// Exit code when the test registry itself is malformed.
pub const EXIT_DISCOVERY: i32 = 2;

/// The main entry point for the binary.
pub fn run() {
    let options = RenderOptions::default().detailed(true).only_failures(true);
    process::exit(execute(&options));
}

/// Runs the suite, prints the outcome, and returns the exit code.
pub fn execute(options: &RenderOptions) -> i32 {
    let report = match crate::run_all() {
        Ok(report) => report,
        Err(e) => {
            output::print_error(e);
            return EXIT_DISCOVERY;
        }
    };

    if let Err(e) = output::print_report(&report, options) {
        tracing::error!(error = %e, "failed to write report");
    }

    if report.has_failures() {
        EXIT_FAILED
    } else {
        0
    }
}
