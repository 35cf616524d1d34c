//! # Pandora
//!
//! A small self-hosted test harness. Test bodies are registered, executed one
//! at a time behind a panic boundary, timed, and collected into a
//! [`TestReport`] that renders to plain text.
//!
//! ```rust,no_run
//! let report = pandora::run_all().expect("test registry is well formed");
//! println!("{}", report.render(true, false));
//! ```
//!
//! Host programs add their own cases with [`register_test!`]:
//!
//! ```rust,no_run
//! use pandora::TestRecord;
//!
//! fn parses_empty_input(t: &mut TestRecord) {
//!     t.set_name("parser accepts empty input");
//! }
//!
//! pandora::register_test!(parses_empty_input);
//! ```

pub use crate::discovery::{discover, TestRegistry};
pub use crate::errors::{HarnessError, TestFault};
pub use crate::report::{RenderOptions, TestReport};
pub use crate::test::runner::Runner;
pub use crate::test::{TestCase, TestRecord, TestResult};

#[doc(hidden)]
pub use inventory;

pub mod cli;
pub mod discovery;
pub mod errors;
pub mod report;
pub mod samples;

/// Discovers every registered test case and runs them in order.
///
/// Per-test panics never escape; only a malformed registry does.
pub fn run_all() -> Result<TestReport, HarnessError> {
    let cases = discover()?;
    Ok(Runner::new().run(&cases))
}
