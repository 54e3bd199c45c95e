//! Configuration for complexity measurement runs.

use std::time::Duration;

/// Configuration options for a measurement run.
///
/// Holds the plain-data knobs shared by both strategies. The function under
/// test, the growth hypothesis, and the pre/post hooks are closures and live
/// on [`ComplexityOracle`](crate::ComplexityOracle) / [`Engine`](crate::Engine)
/// instead. Immutable once an engine has been built from it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input sizes `n` to probe, strictly ascending. Default: `1..=20`.
    pub range: Vec<u64>,

    /// Deadline for the whole simulation loop (not per sample).
    /// Default: 10 seconds.
    pub timeout: Duration,

    /// Fractional margin added on top of the projected bound.
    ///
    /// With 0.05, a measurement may exceed `scale * level(n)` by up to 5%
    /// before counting as a violation. Default: 0.05.
    pub approximation: f64,

    /// Fraction of sample points allowed to violate the bound.
    ///
    /// `None` defers to the strategy default: 0.1 for time (scheduling
    /// jitter makes occasional slow runs expected), 0.05 for space.
    pub error_pct: Option<f64>,

    /// Minimum number of usable samples needed to draw any conclusion.
    ///
    /// A result set of exactly this size still fails with
    /// [`Error::SmallResultSet`](crate::Error::SmallResultSet). Default: 3.
    pub minimum_result_set_size: usize,

    /// Calibration floor, in seconds of user CPU time.
    ///
    /// A time-strategy baseline below this is considered unresolved against
    /// timer granularity and triggers amplification. Default: 0.01.
    pub resolution: f64,

    /// Maximum number of x10 amplification steps calibration may take before
    /// declaring the function unmeasurable. Default: 6 (up to one million
    /// repetitions per timed window).
    pub escalation_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range: (1..=20).collect(),
            timeout: Duration::from_secs(10),
            approximation: 0.05,
            error_pct: None,
            minimum_result_set_size: 3,
            resolution: 0.01,
            escalation_limit: 6,
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the configuration is usable.
    ///
    /// Returns an error message on misuse. Violations are programming errors,
    /// not runtime conditions: [`Engine`](crate::Engine) construction panics
    /// on them rather than substituting defaults.
    pub fn validate(&self) -> Result<(), String> {
        if self.range.is_empty() {
            return Err("range must not be empty".to_string());
        }
        if self.range[0] == 0 {
            return Err("range must contain only positive input sizes".to_string());
        }
        if !self.range.windows(2).all(|w| w[0] < w[1]) {
            return Err("range must be strictly ascending with no duplicates".to_string());
        }
        if self.timeout.is_zero() {
            return Err("timeout must be positive".to_string());
        }
        if self.approximation < 0.0 {
            return Err("approximation must be non-negative".to_string());
        }
        if let Some(pct) = self.error_pct {
            if !(0.0..1.0).contains(&pct) {
                return Err("error_pct must be in [0, 1)".to_string());
            }
        }
        if self.resolution <= 0.0 {
            return Err("resolution must be positive".to_string());
        }
        Ok(())
    }
}
