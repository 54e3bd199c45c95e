//! Hook isolation: pre/post hooks must never leak into the measurement.

use std::cell::Cell;
use std::rc::Rc;

use complexity_oracle::ComplexityOracle;

use crate::common::burn_user_time;

#[test]
fn costly_hooks_do_not_pollute_a_constant_verdict() {
    // Hooks burn CPU proportional to n on both sides of each sample. If any
    // of it leaked into the indicator, a constant-cost function would read
    // as growing and the constant hypothesis would fail.
    let mut engine = ComplexityOracle::new()
        .range(1..=10)
        .approximation(0.3)
        .before_hook(|n| burn_user_time(0.005 * n as f64))
        .after_hook(|n| burn_user_time(0.005 * n as f64))
        .time(|_| burn_user_time(0.02), |_| 1.0);

    assert!(engine.process().unwrap());
}

#[test]
fn hooks_run_once_per_probed_input_size() {
    let before_calls = Rc::new(Cell::new(0u32));
    let after_calls = Rc::new(Cell::new(0u32));
    let before = Rc::clone(&before_calls);
    let after = Rc::clone(&after_calls);

    let mut engine = ComplexityOracle::new()
        .range(1..=6)
        .approximation(0.3)
        .before_hook(move |_| before.set(before.get() + 1))
        .after_hook(move |_| after.set(after.get() + 1))
        .time(|_| burn_user_time(0.02), |_| 1.0);

    engine.process().unwrap();

    // Calibration runs the function alone; hooks belong to the simulation.
    assert_eq!(before_calls.get(), 6);
    assert_eq!(after_calls.get(), 6);
}
