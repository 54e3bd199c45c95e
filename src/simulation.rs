//! Simulation driver: bounded iteration over the input-size range.
//!
//! Samples are taken strictly in ascending order under a single deadline.
//! The deadline is checked between samples, never inside one: an in-flight
//! measurement always completes, since an interrupted measurement would be
//! meaningless data. Hooks run outside the measured window.

use std::time::{Duration, Instant};

use crate::error::Error;
use crate::measurement::Strategy;
use crate::result::ResultSet;

/// Probe every `n` in `range` and assemble the result set.
///
/// Non-positive indicators are discarded. If the deadline elapses with an
/// empty set the run failed outright; with a partial set, running out of
/// budget just means "ran out of range to explore" and the partial set is
/// returned normally; its sufficiency is the examiner's concern.
pub(crate) fn run(
    strategy: &mut dyn Strategy,
    fun: &mut dyn FnMut(u64),
    before_hook: &mut dyn FnMut(u64),
    after_hook: &mut dyn FnMut(u64),
    range: &[u64],
    timeout: Duration,
) -> Result<ResultSet, Error> {
    let deadline = Instant::now() + timeout;
    let mut set = ResultSet::new();

    for &n in range {
        if Instant::now() >= deadline {
            if set.is_empty() {
                return Err(Error::TimedOut { timeout });
            }
            break;
        }

        before_hook(n);
        let indicator = strategy.measure(n, fun)?;
        after_hook(n);

        if indicator > 0.0 {
            set.insert(n, indicator);
        }
    }

    Ok(set)
}
