//! Shared helpers for the integration tests.

use geoseries_core::constants::TARGET_CONSTANT;
use geoseries_core::series::{Series, SeriesGenerator};

/// Generate a series together with the growth rate it was built from.
pub fn generated(x: f64, y: f64, length: usize) -> (Series, f64) {
    let generator = SeriesGenerator::new(x, y, length);
    (generator.generate(), generator.params().growth_rate)
}

/// Nearest element to `TARGET_CONSTANT / z` by exhaustive scan, larger value
/// on ties. Independent of both selectors.
pub fn nearest_by_scan(z: f64, series: &[f64]) -> Option<f64> {
    let target = TARGET_CONSTANT / z;
    series.iter().copied().min_by(|a, b| {
        (a - target)
            .abs()
            .total_cmp(&(b - target).abs())
            .then_with(|| b.total_cmp(a))
    })
}
