//! `ComplexityOracle` entry point and the `Engine` facade.

use std::time::Duration;

use crate::analysis;
use crate::calibration;
use crate::config::Config;
use crate::error::Error;
#[cfg(unix)]
use crate::measurement::SpaceStrategy;
use crate::measurement::{Strategy, TimeStrategy};
use crate::result::{Report, ResultSet};
use crate::simulation;

/// Side-effecting callable of `n` run around each sample, outside the
/// measured window.
type Hook = Box<dyn FnMut(u64)>;

/// Builder for complexity measurement runs.
///
/// Configure with the chainable methods, then hand over the function under
/// test and the growth hypothesis via [`time`](Self::time) or
/// [`space`](Self::space) to obtain an [`Engine`].
///
/// # Example
///
/// ```ignore
/// use complexity_oracle::ComplexityOracle;
///
/// let mut engine = ComplexityOracle::new()
///     .approximation(0.2)
///     .time(|n| my_function(n), |n| n as f64);
///
/// assert!(engine.process()?);
/// ```
pub struct ComplexityOracle {
    config: Config,
    before_hook: Hook,
    after_hook: Hook,
}

impl Default for ComplexityOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityOracle {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            before_hook: Box::new(|_| {}),
            after_hook: Box::new(|_| {}),
        }
    }

    /// Set the input sizes to probe. Must be strictly ascending and positive.
    pub fn range(mut self, range: impl IntoIterator<Item = u64>) -> Self {
        self.config.range = range.into_iter().collect();
        assert!(!self.config.range.is_empty(), "range must not be empty");
        self
    }

    /// Set the simulation deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        assert!(!timeout.is_zero(), "timeout must be positive");
        self.config.timeout = timeout;
        self
    }

    /// Set the simulation deadline in seconds.
    pub fn timeout_secs(self, secs: u64) -> Self {
        self.timeout(Duration::from_secs(secs))
    }

    /// Set the fractional margin added on top of the projected bound.
    pub fn approximation(mut self, approximation: f64) -> Self {
        assert!(approximation >= 0.0, "approximation must be non-negative");
        self.config.approximation = approximation;
        self
    }

    /// Set the fraction of sample points allowed to violate the bound.
    pub fn error_pct(mut self, error_pct: f64) -> Self {
        assert!((0.0..1.0).contains(&error_pct), "error_pct must be in [0, 1)");
        self.config.error_pct = Some(error_pct);
        self
    }

    /// Set the minimum number of usable samples needed for a verdict.
    pub fn minimum_result_set_size(mut self, minimum: usize) -> Self {
        self.config.minimum_result_set_size = minimum;
        self
    }

    /// Set the calibration floor in seconds of user CPU time.
    pub fn resolution(mut self, resolution: f64) -> Self {
        assert!(resolution > 0.0, "resolution must be positive");
        self.config.resolution = resolution;
        self
    }

    /// Set the maximum number of amplification steps calibration may take.
    pub fn escalation_limit(mut self, limit: u32) -> Self {
        self.config.escalation_limit = limit;
        self
    }

    /// Run `hook(n)` before each sample, outside the measured window.
    pub fn before_hook(mut self, hook: impl FnMut(u64) + 'static) -> Self {
        self.before_hook = Box::new(hook);
        self
    }

    /// Run `hook(n)` after each sample, outside the measured window.
    pub fn after_hook(mut self, hook: impl FnMut(u64) + 'static) -> Self {
        self.after_hook = Box::new(hook);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build an engine measuring user CPU time of `fun`, verified against
    /// the growth hypothesis `level`.
    pub fn time<F, L>(self, fun: F, level: L) -> Engine<F, L>
    where
        F: FnMut(u64),
        L: Fn(u64) -> f64,
    {
        let strategy = Box::new(TimeStrategy::new(self.config.escalation_limit));
        Engine::build(self, strategy, fun, level)
    }

    /// Build an engine measuring peak resident memory of `fun`, verified
    /// against the growth hypothesis `level`.
    #[cfg(unix)]
    pub fn space<F, L>(self, fun: F, level: L) -> Engine<F, L>
    where
        F: FnMut(u64),
        L: Fn(u64) -> f64,
    {
        let strategy = Box::new(SpaceStrategy::new());
        Engine::build(self, strategy, fun, level)
    }
}

/// Measurement engine: calibrate, simulate, examine.
///
/// One engine answers one question. `process()` may be re-invoked: the
/// calibrated scale is cached and only simulation and examination rerun,
/// overwriting the previous result set and verdict.
pub struct Engine<F, L> {
    config: Config,
    strategy: Box<dyn Strategy>,
    before_hook: Hook,
    after_hook: Hook,
    fun: F,
    level: L,
    error_pct: f64,
    scale: Option<f64>,
    result_set: ResultSet,
    verdict: Option<bool>,
}

impl<F, L> Engine<F, L>
where
    F: FnMut(u64),
    L: Fn(u64) -> f64,
{
    fn build(oracle: ComplexityOracle, strategy: Box<dyn Strategy>, fun: F, level: L) -> Self {
        if let Err(message) = oracle.config.validate() {
            panic!("invalid configuration: {message}");
        }
        let error_pct = oracle
            .config
            .error_pct
            .unwrap_or_else(|| strategy.default_error_pct());
        Self {
            config: oracle.config,
            strategy,
            before_hook: oracle.before_hook,
            after_hook: oracle.after_hook,
            fun,
            level,
            error_pct,
            scale: None,
            result_set: ResultSet::default(),
            verdict: None,
        }
    }

    /// Measure the function across the configured range and decide whether
    /// its growth stays within tolerance of the hypothesis.
    ///
    /// Runs calibration (once per engine, cached), then the bounded
    /// simulation, then the examination. On success the verdict is returned
    /// and, together with the result set and scale, left available through
    /// the accessors for diagnostic reporting.
    pub fn process(&mut self) -> Result<bool, Error> {
        self.verdict = None;
        self.result_set = ResultSet::default();

        let scale = match self.scale {
            Some(scale) => scale,
            None => {
                let scale = calibration::calibrate(
                    self.strategy.as_mut(),
                    &mut self.fun,
                    self.config.resolution,
                )?;
                self.scale = Some(scale);
                scale
            }
        };

        self.result_set = simulation::run(
            self.strategy.as_mut(),
            &mut self.fun,
            self.before_hook.as_mut(),
            self.after_hook.as_mut(),
            &self.config.range,
            self.config.timeout,
        )?;

        let verdict = analysis::examine(
            &self.result_set,
            scale,
            &self.level,
            self.config.approximation,
            self.error_pct,
            self.config.minimum_result_set_size,
        )?;
        self.verdict = Some(verdict);
        Ok(verdict)
    }

    /// The engine's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Calibrated baseline cost at `n = 1`, once calibration has run.
    pub fn scale(&self) -> Option<f64> {
        self.scale
    }

    /// Samples gathered by the most recent `process()` call.
    pub fn result_set(&self) -> &ResultSet {
        &self.result_set
    }

    /// Outcome of the most recent completed `process()` call.
    pub fn verdict(&self) -> Option<bool> {
        self.verdict
    }

    /// Effective tolerated violation fraction (configured, or the strategy
    /// default).
    pub fn error_pct(&self) -> f64 {
        self.error_pct
    }

    /// Diagnostic snapshot for failure-message construction.
    pub fn report(&self) -> Report {
        Report {
            scale: self.scale,
            samples: self.result_set.len(),
            min: self.result_set.min_indicator(),
            max: self.result_set.max_indicator(),
            mean: self.result_set.mean_indicator(),
            range_start: self.config.range.first().copied().unwrap_or(0),
            range_end: self.config.range.last().copied().unwrap_or(0),
        }
    }
}
