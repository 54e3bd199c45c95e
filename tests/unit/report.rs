//! Tests for the diagnostic report surface.

use complexity_oracle::{output, ComplexityOracle};

#[test]
fn report_before_any_run_is_blank() {
    let engine = ComplexityOracle::new().range(1..=12).time(|_| {}, |_| 1.0);
    let report = engine.report();

    assert_eq!(report.scale, None);
    assert_eq!(report.samples, 0);
    assert_eq!(report.min, None);
    assert_eq!(report.range_start, 1);
    assert_eq!(report.range_end, 12);
    assert!(report.to_string().contains("uncalibrated"));
}

#[test]
fn formatted_report_shows_the_range() {
    let engine = ComplexityOracle::new().range(2..=8).time(|_| {}, |_| 1.0);
    let text = output::format_report(&engine.report(), engine.result_set());
    assert!(text.contains("n = 2..=8"));
}

#[test]
fn json_report_carries_all_fields() {
    let engine = ComplexityOracle::new().time(|_| {}, |_| 1.0);
    let json = output::report_json(&engine.report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["scale"].is_null());
    assert_eq!(value["samples"], 0);
    assert_eq!(value["range_start"], 1);
    assert_eq!(value["range_end"], 20);
}
