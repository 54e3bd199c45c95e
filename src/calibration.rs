//! Scale calibration: the baseline unit cost at `n = 1`.
//!
//! The scale anchors every later comparison (`bound = scale * level(n)`), so
//! it is averaged over several trials, and for time-based measurement it is
//! re-taken with amplified repetition counts until it clears the resolution
//! floor. The engine caches the result; calibration never reruns implicitly.

use crate::error::Error;
use crate::measurement::Strategy;

/// Trials averaged into the scale.
const CALIBRATION_TRIALS: u32 = 10;

/// Establish the calibrated baseline cost of `fun` at `n = 1`.
///
/// For strategies that escalate (time), a mean below `resolution` triggers
/// one amplification step and a full recalibration; once the escalation
/// budget is exhausted the function is declared unmeasurable.
pub(crate) fn calibrate(
    strategy: &mut dyn Strategy,
    fun: &mut dyn FnMut(u64),
    resolution: f64,
) -> Result<f64, Error> {
    loop {
        let mut total = 0.0;
        for _ in 0..CALIBRATION_TRIALS {
            total += strategy.measure(1, fun)?;
        }
        let scale = total / f64::from(CALIBRATION_TRIALS);

        if !strategy.escalates() || scale >= resolution {
            return Ok(scale);
        }
        if !strategy.escalate() {
            return Err(Error::InstantaneousExecution {
                escalations: strategy.escalations(),
            });
        }
    }
}
