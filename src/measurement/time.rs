//! Wall-independent time measurement via process user CPU time.
//!
//! The indicator is the delta of `getrusage(RUSAGE_SELF).ru_utime` around the
//! timed window, in seconds. User CPU time ignores sleeps and other-process
//! interference, but its granularity is coarse (historically one scheduler
//! tick, ~1-10ms), so sub-tick functions are amplified: the window invokes
//! the function a geometrically increasing number of times and the indicator
//! is the aggregate time of the whole window. Calibration decides when to
//! escalate; measurement honors whatever repetition count has been fixed.

use std::io;
use std::mem::MaybeUninit;

use super::Strategy;
use crate::error::Error;

/// Multiplier applied to the repetition count per escalation step.
const ESCALATION_FACTOR: u64 = 10;

/// Measures aggregate user CPU time over a repeated-run window.
#[derive(Debug)]
pub struct TimeStrategy {
    repetitions: u64,
    escalations: u32,
    escalation_limit: u32,
}

impl TimeStrategy {
    /// Create a strategy with a single repetition per window and the given
    /// escalation budget.
    pub fn new(escalation_limit: u32) -> Self {
        Self {
            repetitions: 1,
            escalations: 0,
            escalation_limit,
        }
    }

    /// Current number of invocations per timed window.
    pub fn repetitions(&self) -> u64 {
        self.repetitions
    }

    /// Seconds of user CPU time consumed by this process so far.
    fn user_time() -> io::Result<f64> {
        let mut usage = MaybeUninit::<libc::rusage>::zeroed();
        let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        let usage = unsafe { usage.assume_init() };
        Ok(usage.ru_utime.tv_sec as f64 + usage.ru_utime.tv_usec as f64 * 1e-6)
    }
}

impl Strategy for TimeStrategy {
    fn measure(&mut self, n: u64, fun: &mut dyn FnMut(u64)) -> Result<f64, Error> {
        let start = Self::user_time()?;
        for _ in 0..self.repetitions {
            fun(n);
        }
        let end = Self::user_time()?;
        Ok(end - start)
    }

    // Scheduling jitter makes occasional slow windows expected, so time
    // tolerates twice the violation fraction that space does.
    fn default_error_pct(&self) -> f64 {
        0.1
    }

    fn escalates(&self) -> bool {
        true
    }

    fn escalate(&mut self) -> bool {
        if self.escalations >= self.escalation_limit {
            return false;
        }
        self.repetitions *= ESCALATION_FACTOR;
        self.escalations += 1;
        true
    }

    fn escalations(&self) -> u32 {
        self.escalations
    }
}
