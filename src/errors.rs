//! Error types for the harness.
//!
//! Two very different failure modes live here:
//!
//! - [`HarnessError`] is a structural defect in the test registry. It escapes
//!   [`crate::run_all`] and aborts the whole run.
//! - [`TestFault`] is a panic captured inside a single test slot. It never
//!   escapes; the runner stores it on the failing [`crate::TestResult`].

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// DISCOVERY ERRORS
// ============================================================================

/// A registry that cannot be turned into a runnable list of test cases.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    #[error("Discovery error: test registered at {file}:{line} has an empty identifier")]
    #[diagnostic(
        code(pandora::discovery::empty_id),
        help("register the test through `register_test!` with a named function")
    )]
    EmptyIdentifier { file: &'static str, line: u32 },

    #[error("Discovery error: test '{id}' is registered more than once ({first} and {second})")]
    #[diagnostic(
        code(pandora::discovery::duplicate),
        help("each test function may only be registered once")
    )]
    DuplicateTest {
        id: &'static str,
        first: String,
        second: String,
    },
}

// ============================================================================
// CAPTURED TEST FAULTS
// ============================================================================

/// A panic caught at the boundary of one test slot.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
#[diagnostic(code(pandora::runner::panic))]
pub struct TestFault {
    message: String,
    location: Option<String>,
}

impl TestFault {
    pub fn new(message: impl Into<String>, location: Option<String>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// Human readable description taken from the panic payload.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `file:line:column` of the panic, when the hook saw it.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
