//! Series generation.
//!
//! A series starts from `first_term = (0.5·x² + 30·x + 10) / 25` and grows
//! by `growth_rate = (0.02·y / 25) / first_term`. Raw candidates
//! `growth_rate · first_term^i` are quarter-rounded, deduplicated in
//! first-seen order, truncated to the requested length and finally sorted.
//!
//! Generation is total: non-finite or zero parameters produce an empty or
//! single-element series instead of an error.

use std::collections::HashSet;
use std::ops::Deref;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CANDIDATE_CAP_FACTOR, FIRST_TERM_CONSTANT, FIRST_TERM_DIVISOR, FIRST_TERM_LINEAR,
    FIRST_TERM_QUADRATIC, GROWTH_COEFFICIENT, GROWTH_DIVISOR,
};
use crate::rounding::round_quarter;

/// First term and growth rate of the underlying geometric progression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParams {
    pub first_term: f64,
    pub growth_rate: f64,
}

impl GrowthParams {
    /// Derive the progression from the two generation inputs.
    pub fn from_inputs(x: f64, y: f64) -> Self {
        let first_term = (FIRST_TERM_QUADRATIC * x * x + FIRST_TERM_LINEAR * x
            + FIRST_TERM_CONSTANT)
            / FIRST_TERM_DIVISOR;
        let growth_rate = (GROWTH_COEFFICIENT * y / GROWTH_DIVISOR) / first_term;
        Self {
            first_term,
            growth_rate,
        }
    }

    /// Raw (unrounded) candidate `i`, for `i >= 1`.
    pub fn term(&self, i: usize) -> f64 {
        self.growth_rate * self.first_term.powf(i as f64)
    }

    /// True when no second term can be produced.
    pub fn is_stalled(&self) -> bool {
        !self.growth_rate.is_finite() || self.growth_rate == 0.0
    }
}

/// Lazy stream of rounded candidates, head first.
///
/// Yields `round_quarter(first_term)` and then `round_quarter(term(i))` for
/// `i = 1..=cap`. Values may repeat and are not ordered. The stream ends
/// early once a raw term is non-finite or exactly zero; no later term can
/// add a new finite value after either.
#[derive(Debug, Clone)]
pub struct Candidates {
    params: GrowthParams,
    next_index: usize,
    cap: usize,
    head_pending: bool,
    done: bool,
}

impl Candidates {
    /// Candidate stream for a series of at most `length` elements.
    pub fn new(params: GrowthParams, length: usize) -> Self {
        Self {
            params,
            next_index: 1,
            cap: length.saturating_mul(CANDIDATE_CAP_FACTOR),
            head_pending: true,
            done: length == 0 || !params.first_term.is_finite(),
        }
    }
}

impl Iterator for Candidates {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }

        if self.head_pending {
            self.head_pending = false;
            self.done = self.params.is_stalled();
            return Some(round_quarter(self.params.first_term));
        }

        if self.next_index > self.cap {
            self.done = true;
            return None;
        }

        let raw = self.params.term(self.next_index);
        self.next_index += 1;

        if !raw.is_finite() {
            self.done = true;
            return None;
        }
        if raw == 0.0 {
            self.done = true;
        }
        Some(round_quarter(raw))
    }
}

/// An ascending, duplicate-free sequence of quarter-rounded values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series(Vec<f64>);

impl Series {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Series {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl IntoIterator for Series {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generation inputs bound to their derived progression.
#[derive(Debug, Clone, Copy)]
pub struct SeriesGenerator {
    params: GrowthParams,
    length: usize,
}

impl SeriesGenerator {
    pub fn new(x: f64, y: f64, length: usize) -> Self {
        Self {
            params: GrowthParams::from_inputs(x, y),
            length,
        }
    }

    pub fn params(&self) -> GrowthParams {
        self.params
    }

    /// The unsorted, undeduplicated candidate stream.
    pub fn candidates(&self) -> Candidates {
        Candidates::new(self.params, self.length)
    }

    /// Materialize the series.
    ///
    /// Dedup runs before truncation so that repeats early in the stream do
    /// not cost distinct values found further along it.
    pub fn generate(&self) -> Series {
        let mut seen = HashSet::new();
        let mut values: Vec<f64> = self
            .candidates()
            .filter(|v| seen.insert(OrderedFloat(*v)))
            .take(self.length)
            .collect();
        values.sort_by(f64::total_cmp);

        if values.len() < self.length {
            debug!(
                requested = self.length,
                produced = values.len(),
                first_term = self.params.first_term,
                growth_rate = self.params.growth_rate,
                "series: short series"
            );
        }

        Series(values)
    }
}

/// Generate the series for inputs `x`, `y` with at most `length` elements.
pub fn generate_series(x: f64, y: f64, length: usize) -> Series {
    SeriesGenerator::new(x, y, length).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_series() {
        let series = generate_series(1.0, 5062.5, 5);
        assert_eq!(series.as_slice(), &[1.5, 4.0, 6.5, 10.75, 17.25]);
    }

    #[test]
    fn reference_params() {
        let p = GrowthParams::from_inputs(1.0, 5062.5);
        assert!((p.first_term - 1.62).abs() < 1e-12);
        assert!((p.growth_rate - 2.5).abs() < 1e-12);
    }

    #[test]
    fn prefix_of_longer_series() {
        let short = generate_series(1.0, 5062.5, 5);
        let long = generate_series(1.0, 5062.5, 14);
        assert_eq!(long.len(), 14);
        assert_eq!(&long[..5], short.as_slice());
        assert_eq!(long[13], 1323.25);
    }

    #[test]
    fn zero_length_is_empty() {
        assert!(generate_series(1.0, 5062.5, 0).is_empty());
    }

    #[test]
    fn non_finite_first_term_is_empty() {
        assert!(generate_series(f64::MAX, 1.0, 5).is_empty());
        assert!(generate_series(f64::INFINITY, 1.0, 5).is_empty());
        assert!(generate_series(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn stalled_growth_is_singleton() {
        assert_eq!(generate_series(1.0, 0.0, 5).as_slice(), &[1.5]);
        assert_eq!(generate_series(1.0, f64::INFINITY, 5).as_slice(), &[1.5]);
        assert_eq!(generate_series(1.0, f64::NAN, 5).as_slice(), &[1.5]);
    }

    #[test]
    fn length_one_is_head_only() {
        assert_eq!(generate_series(1.0, 5062.5, 1).as_slice(), &[1.5]);
    }

    #[test]
    fn converging_terms_stop_early() {
        // first_term = 0.4, growth_rate = 0.2: every term past the head rounds to 0.
        assert_eq!(generate_series(0.0, 100.0, 5).as_slice(), &[0.0, 0.5]);
    }

    #[test]
    fn alternating_sign_is_sorted() {
        let series = generate_series(-1.0, 5062.5, 6);
        assert_eq!(series.as_slice(), &[-3.25, -2.0, -0.75, 1.5, 2.5, 4.0]);
    }

    #[test]
    fn candidates_start_with_rounded_first_term() {
        let generator = SeriesGenerator::new(-1.0, 5062.5, 6);
        let head: Vec<f64> = generator.candidates().take(3).collect();
        assert_eq!(head[0], -0.75);
        // raw order oscillates in sign
        assert!(head[1] > 0.0);
        assert!(head[2] < 0.0);
    }

    #[test]
    fn candidates_stop_on_overflow() {
        let generator = SeriesGenerator::new(1.0, 1e308, 3);
        let produced: Vec<f64> = generator.candidates().collect();
        assert!(produced.len() < 3 * CANDIDATE_CAP_FACTOR);
        assert!(produced.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn candidates_respect_cap() {
        // first_term = 1 pins every raw term to the growth rate.
        let params = GrowthParams {
            first_term: 1.0,
            growth_rate: 0.5,
        };
        let count = Candidates::new(params, 2).count();
        assert_eq!(count, 1 + 2 * CANDIDATE_CAP_FACTOR);
        assert_eq!(
            SeriesGenerator {
                params,
                length: 2
            }
            .generate()
            .as_slice(),
            &[0.5, 1.0]
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let series = generate_series(1.0, 5062.5, 3);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, "[1.5,4.0,6.5]");
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn never_exceeds_length(
            x in -50.0f64..50.0,
            y in -1.0e5f64..1.0e5,
            length in 0usize..40,
        ) {
            prop_assert!(generate_series(x, y, length).len() <= length);
        }

        #[test]
        fn strictly_ascending_and_distinct(
            x in -50.0f64..50.0,
            y in -1.0e5f64..1.0e5,
            length in 0usize..40,
        ) {
            let series = generate_series(x, y, length);
            for pair in series.windows(2) {
                prop_assert!(pair[0] < pair[1], "not ascending: {:?}", series);
            }
        }

        #[test]
        fn elements_are_quarters(
            x in -50.0f64..50.0,
            y in -1.0e5f64..1.0e5,
            length in 0usize..40,
        ) {
            for v in generate_series(x, y, length) {
                prop_assert_eq!(round_quarter(v), v);
            }
        }

        #[test]
        fn full_length_on_growing_inputs(
            y in 4000.0f64..8000.0,
            length in 0usize..=10,
        ) {
            prop_assert_eq!(generate_series(1.0, y, length).len(), length);
        }
    }
}
