//! FILENAME: core/engine/tests/test_document.rs
//! Integration tests for whole-document passes.

mod common;

use common::TestHarness;
use engine::{evaluate_document, Recovery, Value};

// ============================================================================
// BLOCK TOTALS
// ============================================================================

#[test]
fn test_total_resets_on_blank_but_not_on_comment() {
    let harness = TestHarness::new();
    let results = harness.display("2\n# note\n3\ntotal\n\n4\ntotal\n");

    assert_eq!(
        results,
        vec!["2", "(none)", "3", "5", "(none)", "4", "4"]
    );
}

#[test]
fn test_total_skips_its_own_line_and_errors() {
    let harness = TestHarness::new();
    let results = harness.display("1 +\n2\ntotal\ntotal\n");

    assert_eq!(results, vec!["(error)", "2", "2", "2"]);
}

#[test]
fn test_total_promotes_units() {
    let harness = TestHarness::new();
    let results = harness.display("$5\n2\ntotal");

    assert_eq!(results, vec!["$5", "2", "$7"]);
}

#[test]
fn test_total_ignores_incompatible_units() {
    let harness = TestHarness::new();
    let results = harness.display("$5\n3 m\ntotal");

    assert_eq!(results, vec!["$5", "3 m", "$5"]);
}

#[test]
fn test_total_is_usable_in_expressions() {
    let harness = TestHarness::new();
    let results = harness.display("10\n20\nhalf = total / 2\ntotal");

    // `half` itself counts toward the block
    assert_eq!(results, vec!["10", "20", "15", "45"]);
}

#[test]
fn test_total_with_comment_after_code() {
    let harness = TestHarness::new();
    let results = harness.display("4 # four\n6 // six\ntotal");

    assert_eq!(results, vec!["4", "6", "10"]);
}

// ============================================================================
// VARIABLES AND ERRORS
// ============================================================================

#[test]
fn test_variables_flow_downward() {
    let harness = TestHarness::new();
    let results = harness.display("price = $1,200\nqty = 3\nprice * qty");

    assert_eq!(results, vec!["$1,200", "3", "$3,600"]);
}

#[test]
fn test_variables_do_not_flow_upward() {
    let harness = TestHarness::new();
    let results = harness.run("a * 2\na = 4");

    assert_eq!(results[0].error.as_deref(), Some("Undefined variable: a"));
    assert_eq!(results[1].value.as_deref(), Some("4"));
}

#[test]
fn test_reassignment_shadows() {
    let harness = TestHarness::new();
    let results = harness.display("x = 1\nx = x + 1\nx");

    assert_eq!(results, vec!["1", "2", "2"]);
}

#[test]
fn test_error_lines_carry_message_and_code() {
    let harness = TestHarness::new();
    let results = harness.run("total = 4 # nope\n(1 + 2");

    assert_eq!(results[0].code, "total = 4");
    assert_eq!(
        results[0].error.as_deref(),
        Some("Cannot assign to reserved name: total")
    );
    assert!(results[0].is_error());
    assert_eq!(results[1].error.as_deref(), Some("Missing closing )"));
    assert_eq!(results[1].value, None);
}

#[test]
fn test_broken_assignment_cascades_without_recovery() {
    let harness = TestHarness::new();
    let results = harness.display("x = 2 +\ny = x * 2");

    assert_eq!(results, vec!["(error)", "(error)"]);
}

fn known(name: &str, value: Value) -> Option<(String, Value)> {
    Some((name.to_string(), value))
}

#[test]
fn test_recovery_masks_the_active_line_only() {
    let harness = TestHarness::new();
    let text = "x = 2 +\ny = x * 2";
    let last_known = vec![known("x", Value::number(2.0)), known("y", Value::number(4.0))];

    let active = Recovery::new(0, last_known.clone());
    assert_eq!(harness.display_recovering(text, &active), vec!["(error)", "4"]);

    // Same table, caret moved away: the error cascades again
    let inactive = Recovery::new(1, last_known);
    assert_eq!(
        harness.display_recovering(text, &inactive),
        vec!["(error)", "(error)"]
    );
}

#[test]
fn test_recovery_from_previous_results() {
    let harness = TestHarness::new();
    let previous = harness.run("rate = 3\nrate * 2");

    let recovery = Recovery::from_results(0, &previous);
    let results = harness.display_recovering("rate = 3 *\nrate * 2", &recovery);

    assert_eq!(results, vec!["(error)", "6"]);
}

#[test]
fn test_recovery_covers_unfinished_assignments() {
    let harness = TestHarness::new();
    let previous = harness.run("rate = 3\nrate * 2");
    let recovery = Recovery::from_results(0, &previous);

    let results = harness.run("rate =\nrate * 2");
    assert_eq!(results[0].error.as_deref(), Some("Missing assignment expression"));
    let recovered = harness.display_recovering("rate =\nrate * 2", &recovery);
    assert_eq!(recovered, vec!["(error)", "6"]);

    let recovered = harness.display_recovering("rate = 1 = 2\nrate * 2", &recovery);
    assert_eq!(recovered, vec!["(error)", "6"]);
}

#[test]
fn test_recovery_requires_matching_name() {
    let harness = TestHarness::new();

    // Line 0 last produced a plain expression, not an assignment
    let previous = harness.run("$9\nx");
    let recovery = Recovery::from_results(0, &previous);
    assert_eq!(
        harness.display_recovering("x = 1 +\nx", &recovery),
        vec!["(error)", "(error)"]
    );

    // Line 0 last assigned a different name
    let renamed = Recovery::new(0, vec![known("y", Value::usd(9.0)), None]);
    assert_eq!(
        harness.display_recovering("x = 1 +\nx", &renamed),
        vec!["(error)", "(error)"]
    );
}

#[test]
fn test_recovery_never_binds_total() {
    let harness = TestHarness::new();
    let recovery = Recovery::new(1, vec![None, known("total", Value::number(99.0))]);

    assert_eq!(
        harness.display_recovering("5\ntotal =\ntotal", &recovery),
        vec!["5", "(error)", "5"]
    );
}

#[test]
fn test_assigned_and_quantity_fields() {
    let results = evaluate_document("tip = 15%\ntip");

    assert_eq!(results[0].assigned.as_deref(), Some("tip"));
    assert_eq!(results[0].value.as_deref(), Some("15%"));
    assert_eq!(results[1].assigned, None);
    assert_eq!(results[1].quantity.map(|q| q.amount), Some(15.0));
}

// ============================================================================
// PASS PROPERTIES
// ============================================================================

#[test]
fn test_evaluation_is_idempotent() {
    let text = "a = 5 km\nb = a to m\nb / 2\n\n$3 * 4\ntotal\noops(";
    let first = evaluate_document(text);
    let second = evaluate_document(text);

    assert_eq!(first, second);
}

#[test]
fn test_line_count_matches_text() {
    assert!(evaluate_document("").is_empty());
    assert_eq!(evaluate_document("1\r\n2\r\n").len(), 2);
    assert_eq!(evaluate_document("1\n\n").len(), 2);
}
