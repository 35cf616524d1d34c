//! Built-in sample suite, run first by [`crate::run_all`].

use std::hint::black_box;

use crate::discovery::TestRegistry;
use crate::test::TestRecord;

pub fn first_passes(t: &mut TestRecord) {
    t.set_name("First test should pass");
}

pub fn second_fails(t: &mut TestRecord) {
    t.set_name("Second test that should fail");
    t.set_passed(1337 == 228);
    t.set_message("Fails as it should");
}

pub fn divides_by_zero(t: &mut TestRecord) {
    t.set_name("Div by zero");
    let zero: i32 = black_box(0);
    let quotient = 1 / zero;
    black_box(quotient);
}

/// The samples, in declaration order.
pub fn registry() -> TestRegistry {
    TestRegistry::new()
        .with("first_passes", first_passes)
        .with("second_fails", second_fails)
        .with("divides_by_zero", divides_by_zero)
}
