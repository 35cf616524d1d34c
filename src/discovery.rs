//! Test discovery.
//!
//! Tests reach the runner in one of two ways:
//!
//! - explicitly, by building a [`TestRegistry`] in the order they should run;
//! - implicitly, by self-registering with [`crate::register_test!`].
//!
//! [`discover`] combines the built-in samples (declaration order) with every
//! self-registered case sorted by registration site. That order is stable for
//! a given build but may change when files are renamed or moved.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::HarnessError;
use crate::samples;
use crate::test::{TestCase, TestFn};

/// An ordered list of test cases. Registration order is execution order.
#[derive(Debug, Clone, Default)]
pub struct TestRegistry {
    cases: Vec<TestCase>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &'static str, body: TestFn) -> &mut Self {
        self.cases.push(TestCase::new(id, body));
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, id: &'static str, body: TestFn) -> Self {
        self.register(id, body);
        self
    }

    pub fn extend(&mut self, cases: impl IntoIterator<Item = TestCase>) {
        self.cases.extend(cases);
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Checks the registry and hands back the cases in run order.
    pub fn cases(&self) -> Result<Vec<TestCase>, HarnessError> {
        validate(&self.cases)?;
        Ok(self.cases.clone())
    }
}

/// Every case registered through [`crate::register_test!`], sorted by
/// `(file, line, id)`.
pub fn registered() -> Vec<TestCase> {
    let mut cases: Vec<TestCase> = inventory::iter::<TestCase>.into_iter().copied().collect();
    cases.sort_by(|a, b| {
        (a.file(), a.line(), a.id()).cmp(&(b.file(), b.line(), b.id()))
    });
    cases
}

/// Built-in samples followed by all self-registered cases.
pub fn discover() -> Result<Vec<TestCase>, HarnessError> {
    let mut registry = samples::registry();
    registry.extend(registered());
    let cases = registry.cases()?;
    debug!(count = cases.len(), "discovered test cases");
    Ok(cases)
}

fn validate(cases: &[TestCase]) -> Result<(), HarnessError> {
    let mut seen: HashMap<&'static str, &TestCase> = HashMap::new();
    for case in cases {
        if case.id().is_empty() {
            return Err(HarnessError::EmptyIdentifier {
                file: case.file(),
                line: case.line(),
            });
        }
        if let Some(first) = seen.insert(case.id(), case) {
            return Err(HarnessError::DuplicateTest {
                id: case.id(),
                first: first.site(),
                second: case.site(),
            });
        }
    }
    Ok(())
}
