//! Measurement strategies: turning "run `fun` at size `n`" into one scalar.
//!
//! This module provides:
//! - The [`Strategy`] capability implemented by both concrete strategies
//! - [`TimeStrategy`]: user CPU time with repeated-run amplification
//! - [`SpaceStrategy`]: peak resident memory via child-process sampling (unix)
//!
//! A strategy measures nothing but the function itself: instrumentation
//! starts after strategy setup and stops before teardown, and the driver's
//! pre/post hooks run entirely outside the measured window.

mod time;

#[cfg(unix)]
mod rss;
#[cfg(unix)]
mod space;

pub use time::TimeStrategy;

#[cfg(unix)]
pub use space::SpaceStrategy;

use crate::error::Error;

/// A single way of measuring one resource cost of a function.
///
/// Object-safe so the engine can select a variant at construction time.
/// The time strategy carries mutable amplification state, hence `&mut self`.
pub trait Strategy {
    /// Execute `fun(n)` and report its resource cost as one scalar indicator.
    ///
    /// The indicator unit is strategy-specific (seconds of user CPU time, or
    /// kilobytes of resident memory). A non-positive indicator means the run
    /// was not measurable at this resolution.
    fn measure(&mut self, n: u64, fun: &mut dyn FnMut(u64)) -> Result<f64, Error>;

    /// Tolerated violation fraction when the caller did not configure one.
    fn default_error_pct(&self) -> f64;

    /// Whether calibration may amplify this strategy when the baseline is
    /// below the resolution floor.
    fn escalates(&self) -> bool {
        false
    }

    /// Take one amplification step. Returns `false` once the escalation
    /// budget is exhausted.
    fn escalate(&mut self) -> bool {
        false
    }

    /// Amplification steps taken so far.
    fn escalations(&self) -> u32 {
        0
    }
}
