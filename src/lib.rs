//! # complexity-oracle
//!
//! Empirically verify the asymptotic complexity of a function under test.
//!
//! This crate measures a function's resource usage (user CPU time or peak
//! resident memory) across increasing input sizes and decides whether the
//! measured growth stays within tolerance of a caller-supplied hypothesis,
//! outputting:
//! - A boolean verdict ("growth within tolerance" yes/no)
//! - The calibrated baseline cost at `n = 1` (the scale)
//! - The full result set of `(n, indicator)` samples for diagnostics
//!
//! It verifies an upper bound against a supplied hypothesis; it does not
//! discover the true complexity. The intended consumer is a test-framework
//! matcher guarding against algorithmic complexity regressions.
//!
//! ## Common Pitfall: Work in Hooks vs. Work in the Function
//!
//! Only the function under test is measured. Setup and teardown that should
//! not count (cache priming, fixture construction, cleanup) belongs in the
//! `before_hook`/`after_hook`, which run outside the measured window.
//!
//! ## Quick Start
//!
//! ```ignore
//! use complexity_oracle::ComplexityOracle;
//!
//! // Does `my_sort` stay linearithmic, within 20% tolerance?
//! let mut engine = ComplexityOracle::new()
//!     .approximation(0.2)
//!     .time(
//!         |n| my_sort(&make_input(n)),
//!         |n| n as f64 * (n as f64).ln().max(1.0),
//!     );
//!
//! match engine.process() {
//!     Ok(true) => println!("growth within tolerance"),
//!     Ok(false) => println!("bound exceeded: {}", engine.report()),
//!     Err(e) => println!("could not measure: {e}"),
//! }
//! ```
//!
//! Noise from OS scheduling, timer granularity, and allocator behavior is
//! absorbed by three knobs: `approximation` (per-point margin), `error_pct`
//! (fraction of points allowed to violate the bound), and calibration-time
//! amplification for functions faster than the timer can resolve.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod oracle;
mod result;

// Pipeline stages
mod analysis;
mod calibration;
mod simulation;

// Functional modules
pub mod measurement;
pub mod output;

// Re-exports for public API
pub use config::Config;
pub use error::Error;
pub use measurement::{Strategy, TimeStrategy};
pub use oracle::{ComplexityOracle, Engine};
pub use result::{Report, ResultSet};

#[cfg(unix)]
pub use measurement::SpaceStrategy;
