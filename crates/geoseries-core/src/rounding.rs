//! Quarter rounding.
//!
//! Every value that leaves the generator passes through [`round_quarter`],
//! so series elements are always multiples of 0.25.

use crate::constants::{CENT_SCALE, QUARTERS_PER_UNIT};

/// Magnitude past which `x * 100` is no longer an exact integer (2^53).
const CENT_PASS_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Round `value` to the nearest multiple of 0.25.
///
/// Uses [`f64::round`] (half away from zero) at quarter scale, then a second
/// pass at 2-decimal scale to drop binary residue such as `10.2500000001`.
///
/// - Negative zero comes back as `+0.0`.
/// - Non-finite input is returned unchanged.
/// - The cent pass is skipped once it could no longer be exact; values
///   that large are already whole numbers.
pub fn round_quarter(value: f64) -> f64 {
    let quarters = (value * QUARTERS_PER_UNIT).round() / QUARTERS_PER_UNIT;
    if !quarters.is_finite() {
        return value;
    }

    let scaled = quarters * CENT_SCALE;
    if scaled.abs() >= CENT_PASS_LIMIT {
        return quarters;
    }
    // `+ 0.0` folds -0.0 into 0.0.
    scaled.round() / CENT_SCALE + 0.0
}
