// Execution of the built-in samples through the public entry point.
use std::hint::black_box;
use std::time::Duration;

use pandora::samples;
use pandora::{run_all, Runner, TestRecord, TestRegistry};

#[test]
fn run_all_reports_the_sample_scenario() {
    let report = run_all().unwrap();
    assert_eq!(report.summary_counts(), (3, 1, 2));

    let results = report.results();
    assert_eq!(results[0].name(), "First test should pass");
    assert!(results[0].passed());
    assert_eq!(results[0].message(), Some("Test Passed"));
    assert!(results[0].error().is_none());

    assert_eq!(results[1].name(), "Second test that should fail");
    assert!(!results[1].passed());
    assert_eq!(results[1].message(), Some("Fails as it should"));
    assert!(results[1].error().is_none());

    assert_eq!(results[2].name(), "Div by zero");
    assert!(!results[2].passed());
    let fault = results[2].error().expect("division fault captured");
    assert!(fault.message().contains("divide by zero"));
    assert_eq!(results[2].message(), Some(fault.message()));
    assert!(fault.location().is_some_and(|l| l.contains("samples.rs")));
}

#[test]
fn failures_only_render_keeps_ordinals() {
    let report = run_all().unwrap();
    let text = report.render(true, true);
    assert_eq!(text.matches(" of 3]: ").count(), 2);
    assert!(!text.contains("[1 of 3]"));
    assert!(text.contains("[2 of 3]: Second test that should fail : Failed"));
    assert!(text.contains("[3 of 3]: Div by zero : Failed"));
}

#[test]
fn counts_always_add_up() {
    let report = Runner::new().run(&samples::registry().cases().unwrap());
    let (total, passed, failed) = report.summary_counts();
    assert_eq!(total, report.results().len());
    assert_eq!(passed + failed, total);
    let summed: Duration = report.results().iter().map(|r| r.duration()).sum();
    assert_eq!(report.total_duration(), summed);
}

fn sets_custom_success_message(t: &mut TestRecord) {
    t.set_name("custom success");
    t.set_message("everything checked out");
}

fn fails_then_panics(t: &mut TestRecord) {
    t.fail("explicit");
    panic!("then exploded");
}

fn index_out_of_bounds(t: &mut TestRecord) {
    t.set_name("bounds");
    let items: Vec<u8> = Vec::new();
    black_box(items[black_box(3)]);
}

#[test]
fn success_message_is_replaced_by_the_runner() {
    let cases = TestRegistry::new()
        .with("sets_custom_success_message", sets_custom_success_message)
        .cases()
        .unwrap();
    let report = Runner::new().run(&cases);
    assert_eq!(report.results()[0].message(), Some("Test Passed"));
}

#[test]
fn panic_wins_over_an_explicit_failure() {
    let cases = TestRegistry::new()
        .with("fails_then_panics", fails_then_panics)
        .cases()
        .unwrap();
    let report = Runner::new().run(&cases);
    let result = &report.results()[0];
    assert!(!result.passed());
    assert_eq!(result.message(), Some("then exploded"));
    assert!(result.error().is_some());
}

#[test]
fn each_fault_stays_in_its_own_slot() {
    let cases = TestRegistry::new()
        .with("index_out_of_bounds", index_out_of_bounds)
        .with("first_passes", samples::first_passes)
        .with("divides_by_zero", samples::divides_by_zero)
        .with("sets_custom_success_message", sets_custom_success_message)
        .cases()
        .unwrap();
    let report = Runner::new().run(&cases);
    let passed: Vec<bool> = report.results().iter().map(|r| r.passed()).collect();
    assert_eq!(passed, vec![false, true, false, true]);
    assert!(report.results()[0]
        .message()
        .is_some_and(|m| m.contains("index out of bounds")));
}
