//! Linear selection: a guarded descent over the ascending series.
//!
//! Starting from the head, each step either improves on the best distance to
//! the target, ties it, or loses. Because the series is ascending, the first
//! losing step ends the search, and a tie can never be beaten later.

use crate::constants::SPECIAL_A_FROM_END;
use crate::error::SelectError;
use crate::traits::{approx_target, SpecialPair, SpecialSelector};

/// Selector that walks the series front to back.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSelector;

impl LinearSelector {
    pub fn new() -> Self {
        Self
    }
}

/// Walk `rest` looking for the value nearest `target`, seeded with `head`.
///
/// Stops at the first value farther away than the current best. On an exact
/// distance tie the larger of the two values wins and the walk stops.
fn descend(target: f64, head: f64, rest: impl Iterator<Item = f64>) -> f64 {
    let mut best = head;
    let mut best_distance = (head - target).abs();

    for value in rest {
        let distance = (value - target).abs();
        if distance > best_distance {
            return best;
        }
        if distance == best_distance {
            return value.max(best);
        }
        best = value;
        best_distance = distance;
    }

    best
}

impl SpecialSelector for LinearSelector {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn select(&self, z: f64, series: &[f64]) -> Result<SpecialPair, SelectError> {
        let len = series.len();
        SelectError::check_len(len)?;

        let short = SelectError::InvalidArgument { len };
        let special_a = *series
            .iter()
            .rev()
            .nth(SPECIAL_A_FROM_END - 1)
            .ok_or(short.clone())?;

        let mut values = series.iter().copied();
        let head = values.next().ok_or(short)?;
        let special_b = descend(approx_target(z), head, values);

        Ok(SpecialPair {
            special_a,
            special_b,
        })
    }
}

/// Pick `(third-from-last, nearest to 1000 / z)` by linear descent.
pub fn pick_special(z: f64, series: &[f64]) -> Result<(f64, f64), SelectError> {
    LinearSelector.select(z, series).map(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: [f64; 5] = [1.5, 4.0, 6.5, 10.75, 17.25];

    #[test]
    fn reference_pick() {
        assert_eq!(pick_special(160.0, &REFERENCE), Ok((6.5, 6.5)));
    }

    #[test]
    fn rejects_short_series() {
        for len in 0..3 {
            assert_eq!(
                pick_special(160.0, &REFERENCE[..len]),
                Err(SelectError::InvalidArgument { len })
            );
        }
    }

    #[test]
    fn special_a_of_minimal_series_is_head() {
        assert_eq!(pick_special(1000.0, &[1.0, 2.0, 3.0]).unwrap().0, 1.0);
    }

    #[test]
    fn target_below_head_picks_head() {
        // 1000 / 10_000 = 0.1
        assert_eq!(pick_special(10_000.0, &REFERENCE).unwrap().1, 1.5);
    }

    #[test]
    fn target_above_tail_picks_tail() {
        // 1000 / 1 = 1000
        assert_eq!(pick_special(1.0, &REFERENCE).unwrap().1, 17.25);
    }

    #[test]
    fn exact_match() {
        // 1000 / 100 = 10, nearest is 10.75
        assert_eq!(pick_special(100.0, &REFERENCE).unwrap().1, 10.75);
        // 1000 / 250 = 4
        assert_eq!(pick_special(250.0, &REFERENCE).unwrap().1, 4.0);
    }

    #[test]
    fn tie_prefers_larger() {
        // 1000 / 400 = 2.5, equidistant from 2 and 3
        assert_eq!(pick_special(400.0, &[1.0, 2.0, 3.0]).unwrap().1, 3.0);
        // 1000 / 200 = 5, equidistant from 4 and 6
        assert_eq!(pick_special(200.0, &[2.0, 4.0, 6.0, 8.0]).unwrap().1, 6.0);
    }

    #[test]
    fn tie_with_head_prefers_larger() {
        // 1000 / 500 = 2, equidistant from 1 and 3
        assert_eq!(pick_special(500.0, &[1.0, 3.0, 9.0]).unwrap().1, 3.0);
    }

    #[test]
    fn descent_stops_at_first_worse_element() {
        // Not ascending on purpose: the trailing 2.5 is never visited.
        assert_eq!(descend(2.5, 1.0, [2.0, 4.0, 2.5].into_iter()), 2.0);
    }

    #[test]
    fn selector_trait_matches_free_function() {
        let selector = LinearSelector::new();
        assert_eq!(selector.name(), "linear");
        let pair = selector.select(160.0, &REFERENCE).unwrap();
        assert_eq!(
            pair,
            SpecialPair {
                special_a: 6.5,
                special_b: 6.5
            }
        );
    }
}
