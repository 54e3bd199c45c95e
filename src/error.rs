//! Error types for complexity measurement.

use std::time::Duration;

use thiserror::Error;

/// Error returned when an engine run cannot produce a verdict.
///
/// None of these conditions are retried internally: the tolerance mechanism
/// (`error_pct`) already absorbs measurement noise, and silently retrying a
/// noisy run would defeat it. Each variant propagates verbatim to the caller
/// of [`Engine::process`](crate::Engine::process).
#[derive(Debug, Error)]
pub enum Error {
    /// The simulation deadline elapsed before a single usable sample was
    /// collected.
    ///
    /// This distinguishes "the function is too slow for every probed `n`"
    /// from the tolerated case where the deadline fires partway through the
    /// range after at least one sample was recorded.
    #[error(
        "no sample could be collected within the {timeout:?} timeout; \
         try a longer timeout or a different range (the function may be too slow)"
    )]
    TimedOut {
        /// The configured simulation deadline.
        timeout: Duration,
    },

    /// Fewer usable samples were gathered than the configured minimum.
    ///
    /// Raised whether the shortfall came from the deadline or from samples
    /// being discarded as unmeasurable, so callers can tell "not enough
    /// signal" apart from "ran too long".
    #[error(
        "only {got} usable samples were gathered but more than {minimum} are required; \
         try a longer timeout or a different range (function complexity may be too high)"
    )]
    SmallResultSet {
        /// The configured `minimum_result_set_size`.
        minimum: usize,
        /// Usable samples actually gathered.
        got: usize,
    },

    /// Calibration could not raise the baseline above the timer resolution
    /// floor, even after exhausting the amplification budget.
    ///
    /// There is no meaningful scale to compare against, so this fails before
    /// any simulation is attempted.
    #[error(
        "execution time cannot be quantified even after {escalations} amplification steps \
         (execution speed close to instantaneous)"
    )]
    InstantaneousExecution {
        /// Amplification steps taken before giving up.
        escalations: u32,
    },

    /// An OS-level measurement primitive failed (fork, pipe, rusage, procfs).
    #[error("resource sampling failed: {0}")]
    Sampling(#[from] std::io::Error),
}
