//! Tests for configuration validation.
//!
//! Invalid configuration is caller misuse: builder methods and engine
//! construction reject it loudly instead of substituting defaults.

use std::time::Duration;

use complexity_oracle::ComplexityOracle;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn default_config() {
    let oracle = ComplexityOracle::new();
    let config = oracle.config();
    assert_eq!(config.range, (1..=20).collect::<Vec<_>>());
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.approximation, 0.05);
    assert_eq!(config.error_pct, None);
    assert_eq!(config.minimum_result_set_size, 3);
    assert_eq!(config.resolution, 0.01);
    assert_eq!(config.escalation_limit, 6);
}

#[test]
fn builder_methods_set_fields() {
    let oracle = ComplexityOracle::new()
        .range(1..=10)
        .timeout_secs(30)
        .approximation(0.2)
        .error_pct(0.15)
        .minimum_result_set_size(5)
        .resolution(0.05)
        .escalation_limit(2);

    let config = oracle.config();
    assert_eq!(config.range, (1..=10).collect::<Vec<_>>());
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.approximation, 0.2);
    assert_eq!(config.error_pct, Some(0.15));
    assert_eq!(config.minimum_result_set_size, 5);
    assert_eq!(config.resolution, 0.05);
    assert_eq!(config.escalation_limit, 2);
}

// =============================================================================
// BUILDER VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "range must not be empty")]
fn empty_range_panics() {
    let _ = ComplexityOracle::new().range(std::iter::empty::<u64>());
}

#[test]
#[should_panic(expected = "timeout must be positive")]
fn zero_timeout_panics() {
    let _ = ComplexityOracle::new().timeout(Duration::ZERO);
}

#[test]
#[should_panic(expected = "approximation must be non-negative")]
fn negative_approximation_panics() {
    let _ = ComplexityOracle::new().approximation(-0.1);
}

#[test]
#[should_panic(expected = "error_pct must be in [0, 1)")]
fn error_pct_of_one_panics() {
    let _ = ComplexityOracle::new().error_pct(1.0);
}

#[test]
#[should_panic(expected = "error_pct must be in [0, 1)")]
fn negative_error_pct_panics() {
    let _ = ComplexityOracle::new().error_pct(-0.05);
}

#[test]
#[should_panic(expected = "resolution must be positive")]
fn zero_resolution_panics() {
    let _ = ComplexityOracle::new().resolution(0.0);
}

#[test]
fn error_pct_of_zero_valid() {
    // Zero tolerance is meaningful: no violation allowed at all.
    let oracle = ComplexityOracle::new().error_pct(0.0);
    assert_eq!(oracle.config().error_pct, Some(0.0));
}

// =============================================================================
// ENGINE CONSTRUCTION VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "invalid configuration")]
fn descending_range_panics_at_build() {
    let _ = ComplexityOracle::new().range([5, 4, 3]).time(|_| {}, |_| 1.0);
}

#[test]
#[should_panic(expected = "invalid configuration")]
fn duplicate_range_entries_panic_at_build() {
    let _ = ComplexityOracle::new().range([1, 2, 2]).time(|_| {}, |_| 1.0);
}

#[test]
#[should_panic(expected = "invalid configuration")]
fn zero_input_size_panics_at_build() {
    let _ = ComplexityOracle::new().range([0, 1, 2]).time(|_| {}, |_| 1.0);
}
