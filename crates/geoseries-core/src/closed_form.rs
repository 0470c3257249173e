//! Closed-form selection: invert the progression to jump near the answer.
//!
//! Since `term[i] = growth_rate · first_term^i`, the index of the term nearest
//! a target is about `log_{first_term}(target / growth_rate)`. Rounding and
//! dedup during generation shift real indices slightly, so a window of
//! `leeway` indices on either side of the estimate is scanned. The cost is
//! independent of the series length.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::constants::{DEFAULT_LEEWAY, SPECIAL_A_FROM_END};
use crate::error::SelectError;
use crate::rounding::round_quarter;
use crate::traits::{approx_target, SpecialPair, SpecialSelector};

/// Selector that indexes the series directly using the growth rate it was
/// generated with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedFormSelector {
    growth_rate: f64,
    leeway: usize,
}

impl ClosedFormSelector {
    pub fn new(growth_rate: f64) -> Self {
        Self {
            growth_rate,
            leeway: DEFAULT_LEEWAY,
        }
    }

    /// Override the index slack scanned around the estimate.
    pub fn with_leeway(mut self, leeway: usize) -> Self {
        self.leeway = leeway;
        self
    }

    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    pub fn leeway(&self) -> usize {
        self.leeway
    }

    /// Fractional index of the term nearest `target`, using `base` (the
    /// series head) as the progression's first term.
    ///
    /// NaN when the logarithm is undefined (non-positive argument or base).
    pub fn estimate_index(&self, target: f64, base: f64) -> f64 {
        round_quarter(target / self.growth_rate).log(base)
    }

    /// Indices to scan around `estimate`, each bound clamped into `0..len`.
    ///
    /// `None` when the estimate is NaN or the series is empty.
    pub fn window(&self, estimate: f64, len: usize) -> Option<RangeInclusive<usize>> {
        if estimate.is_nan() || len == 0 {
            return None;
        }
        let last = (len - 1) as f64;
        let leeway = self.leeway as f64;
        let lo = (estimate.floor() - leeway).clamp(0.0, last) as usize;
        let hi = (estimate.ceil() + leeway).clamp(0.0, last) as usize;
        Some(lo..=hi)
    }
}

/// Order by distance to `target`, then larger value first.
fn by_distance(target: f64, a: f64, b: f64) -> Ordering {
    (a - target)
        .abs()
        .total_cmp(&(b - target).abs())
        .then_with(|| b.total_cmp(&a))
}

impl SpecialSelector for ClosedFormSelector {
    fn name(&self) -> &'static str {
        "closed_form"
    }

    fn select(&self, z: f64, series: &[f64]) -> Result<SpecialPair, SelectError> {
        let len = series.len();
        SelectError::check_len(len)?;

        let special_a = series[len - SPECIAL_A_FROM_END];
        let head = series[0];
        let target = approx_target(z);

        let estimate = self.estimate_index(target, head);
        let special_b = self
            .window(estimate, len)
            .and_then(|window| {
                series[window]
                    .iter()
                    .copied()
                    .min_by(|&a, &b| by_distance(target, a, b))
            })
            .unwrap_or(head);

        Ok(SpecialPair {
            special_a,
            special_b,
        })
    }
}

/// Pick `(third-from-last, nearest to 1000 / z)` by closed-form index
/// estimate. `growth_rate` must be the one `series` was generated with.
pub fn pick_special_alt(
    z: f64,
    growth_rate: f64,
    series: &[f64],
) -> Result<(f64, f64), SelectError> {
    ClosedFormSelector::new(growth_rate)
        .select(z, series)
        .map(Into::into)
}
