//! FILENAME: core/engine/tests/test_units.rs
//! Integration tests for measure and temperature units.

mod common;

use common::TestHarness;

#[test]
fn test_measure_arithmetic() {
    let harness = TestHarness::new();

    assert_eq!(harness.eval("5 m + 3"), Ok("8 m".to_string()));
    assert_eq!(harness.eval("2 * 3 cm2"), Ok("6 cm^2".to_string()));
    assert_eq!(harness.eval("10 sq ft / 2"), Ok("5 ft^2".to_string()));
    assert_eq!(harness.eval("6 m / 3 m"), Ok("2".to_string()));
    assert_eq!(harness.eval("5 m + 2 cm"), Err("Unit mismatch".to_string()));
}

#[test]
fn test_length_conversions() {
    let harness = TestHarness::new();

    assert_eq!(harness.eval("1 km to m"), Ok("1,000 m".to_string()));
    assert_eq!(harness.eval("5 inches in cm"), Ok("12.7 cm".to_string()));
    assert_eq!(harness.eval("1 sq m to sq cm"), Ok("10,000 cm^2".to_string()));
    assert_eq!(harness.eval("5 to ft"), Ok("5 ft".to_string()));
}

#[test]
fn test_fixed_unit_conversions() {
    let harness = TestHarness::new();

    assert_eq!(harness.eval("1 gal to l"), Ok("3.785411784 L".to_string()));
    assert_eq!(harness.eval("2 hectares to are"), Ok("200 are".to_string()));
    assert_eq!(harness.eval("1 cubic m to liters"), Ok("1,000 L".to_string()));
    assert_eq!(
        harness.eval("1 acre to gal"),
        Err("Cannot convert acre to gal".to_string())
    );
}

#[test]
fn test_temperature_conversions() {
    let harness = TestHarness::new();

    assert_eq!(harness.eval("100 c to f"), Ok("212°F".to_string()));
    assert_eq!(harness.eval("32 f to c"), Ok("0°C".to_string()));
    assert_eq!(harness.eval("0 c in k"), Ok("273.15K".to_string()));
    assert_eq!(harness.eval("20 c + 5"), Ok("25°C".to_string()));
    assert_eq!(harness.eval("20 c + 5 f"), Err("Unit mismatch".to_string()));
}

#[test]
fn test_units_flow_through_variables() {
    let harness = TestHarness::new();
    let results = harness.display("room = 4 m * 5\nroom to cm\nroom + 1 cm");

    assert_eq!(results, vec!["20 m", "2,000 cm", "(error)"]);
}

#[test]
fn test_unknown_conversion_target() {
    let harness = TestHarness::new();

    assert_eq!(
        harness.eval("5 m to furlongs"),
        Err("Unknown unit: furlongs".to_string())
    );
}
