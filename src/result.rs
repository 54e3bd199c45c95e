//! Result types: the measured result set and the diagnostic report.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Ordered mapping from input size `n` to its measured indicator.
///
/// Populated incrementally by the simulation driver; read-only once
/// [`Engine::process`](crate::Engine::process) returns. Entries whose
/// indicator was not positive are never inserted; an unmeasurable sample
/// carries no information.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultSet {
    points: BTreeMap<u64, f64>,
}

impl ResultSet {
    /// Create an empty result set.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record the indicator measured at input size `n`.
    pub(crate) fn insert(&mut self, n: u64, indicator: f64) {
        debug_assert!(indicator > 0.0, "non-positive indicators must be discarded");
        self.points.insert(n, indicator);
    }

    /// Number of usable samples gathered.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no usable sample was gathered.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Indicator measured at input size `n`, if one was recorded.
    pub fn get(&self, n: u64) -> Option<f64> {
        self.points.get(&n).copied()
    }

    /// Iterate over `(n, indicator)` pairs in ascending `n`.
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.points.iter().map(|(&n, &indicator)| (n, indicator))
    }

    /// Smallest recorded indicator.
    pub fn min_indicator(&self) -> Option<f64> {
        self.points.values().copied().fold(None, |acc, v| {
            Some(acc.map_or(v, |a: f64| a.min(v)))
        })
    }

    /// Largest recorded indicator.
    pub fn max_indicator(&self) -> Option<f64> {
        self.points.values().copied().fold(None, |acc, v| {
            Some(acc.map_or(v, |a: f64| a.max(v)))
        })
    }

    /// Arithmetic mean of the recorded indicators.
    pub fn mean_indicator(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.values().sum::<f64>() / self.points.len() as f64)
    }
}

/// Read-only diagnostic snapshot of an engine's accumulated state.
///
/// Built by [`Engine::report`](crate::Engine::report) for the assertion layer
/// to embed in human-readable failure messages. Meaningful only after
/// `process()` has run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Calibrated baseline cost at `n = 1`, if calibration ran.
    pub scale: Option<f64>,
    /// Number of usable samples in the result set.
    pub samples: usize,
    /// Smallest recorded indicator.
    pub min: Option<f64>,
    /// Largest recorded indicator.
    pub max: Option<f64>,
    /// Mean recorded indicator.
    pub mean: Option<f64>,
    /// First input size of the configured range.
    pub range_start: u64,
    /// Last input size of the configured range.
    pub range_end: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scale {
            Some(scale) => write!(f, "scale: {scale:.6}")?,
            None => write!(f, "scale: uncalibrated")?,
        }
        write!(
            f,
            " | samples: {} (n = {}..={})",
            self.samples, self.range_start, self.range_end
        )?;
        if let (Some(min), Some(max), Some(mean)) = (self.min, self.max, self.mean) {
            write!(f, " | indicators: min {min:.6} max {max:.6} mean {mean:.6}")?;
        }
        Ok(())
    }
}
