//! Complexity examination: verdict from the result set and the hypothesis.
//!
//! Each sample is compared against `scale * level(n)` widened by the
//! approximation margin. A point violates the bound iff `measured > bound`,
//! so exact equality is tolerated. A fixed budget of violations, computed
//! once per examination as `floor(len * error_pct)`, absorbs outliers in
//! ascending-`n` order; the first violation past the budget settles the
//! verdict as `false`.

use crate::error::Error;
use crate::result::ResultSet;

/// Decide whether the measured growth stays within tolerance of `level`.
///
/// Fails with [`Error::SmallResultSet`] when the set holds `minimum` or
/// fewer samples: too few points for any statistical conclusion, regardless
/// of whether they all satisfied the bound. The `n == 1` entry is skipped:
/// the scale was derived from it, so comparing it is tautological.
pub(crate) fn examine(
    set: &ResultSet,
    scale: f64,
    level: &dyn Fn(u64) -> f64,
    approximation: f64,
    error_pct: f64,
    minimum: usize,
) -> Result<bool, Error> {
    if set.len() <= minimum {
        return Err(Error::SmallResultSet {
            minimum,
            got: set.len(),
        });
    }

    let mut budget = (set.len() as f64 * error_pct).floor() as usize;
    for (n, measured) in set.iter() {
        if n == 1 {
            continue;
        }
        let projected = scale * level(n);
        let bound = projected + projected * approximation;
        if measured > bound {
            if budget == 0 {
                return Ok(false);
            }
            budget -= 1;
        }
    }

    Ok(true)
}
