//! Selector interface.
//!
//! [`SpecialSelector`] is the seam between callers (the consistency harness,
//! the CLI) and the two selection strategies:
//! - [`LinearSelector`](crate::linear::LinearSelector) — guarded descent over the sorted series
//! - [`ClosedFormSelector`](crate::closed_form::ClosedFormSelector) — logarithmic index estimate

use serde::{Deserialize, Serialize};

use crate::constants::TARGET_CONSTANT;
use crate::error::SelectError;

/// The two special values picked from a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialPair {
    /// Third element from the end.
    pub special_a: f64,
    /// Element nearest `TARGET_CONSTANT / z`; ties go to the larger value.
    pub special_b: f64,
}

impl From<SpecialPair> for (f64, f64) {
    fn from(pair: SpecialPair) -> Self {
        (pair.special_a, pair.special_b)
    }
}

impl From<(f64, f64)> for SpecialPair {
    fn from((special_a, special_b): (f64, f64)) -> Self {
        Self {
            special_a,
            special_b,
        }
    }
}

/// Strategy for picking the special pair out of an ascending series.
pub trait SpecialSelector {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Pick the special pair for target ratio `z`.
    ///
    /// Fails with [`SelectError::InvalidArgument`] when `series` has fewer
    /// than three elements.
    fn select(&self, z: f64, series: &[f64]) -> Result<SpecialPair, SelectError>;
}

/// The value a target ratio `z` is matched against.
pub fn approx_target(z: f64) -> f64 {
    TARGET_CONSTANT / z
}
