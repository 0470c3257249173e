//! Consistency harness for the two selectors.
//!
//! Generates one series, draws many target ratios from a seeded RNG, times
//! each selector over the whole target set and counts the targets on which
//! the two special pairs differ. Nothing here prints; the report implements
//! [`Display`](std::fmt::Display) for callers that want text.

use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::closed_form::ClosedFormSelector;
use crate::constants::DEFAULT_LEEWAY;
use crate::error::{BenchError, SelectError};
use crate::linear::LinearSelector;
use crate::series::SeriesGenerator;
use crate::traits::{SpecialPair, SpecialSelector};

/// Harness parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// First-term input.
    pub x: f64,
    /// Growth-rate input.
    pub y: f64,
    /// Requested series length.
    pub length: usize,
    /// Number of target ratios to draw.
    pub count: usize,
    /// Lower bound (inclusive) for target ratios.
    pub z_min: f64,
    /// Upper bound (exclusive) for target ratios.
    pub z_max: f64,
    /// RNG seed for the target draw.
    pub seed: u64,
    /// Index slack for the closed-form selector.
    pub leeway: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 5062.5,
            length: 10,
            count: 10_000,
            z_min: 0.01,
            z_max: 5000.0,
            seed: 42,
            leeway: DEFAULT_LEEWAY,
        }
    }
}

impl BenchConfig {
    /// Same harness with a different number of targets.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), BenchError> {
        let finite = self.z_min.is_finite() && self.z_max.is_finite();
        if !finite || self.z_min >= self.z_max {
            return Err(BenchError::EmptyTargetRange {
                min: self.z_min,
                max: self.z_max,
            });
        }
        Ok(())
    }

    /// Draw the target ratios this config describes.
    pub fn targets(&self) -> Result<Vec<f64>, BenchError> {
        self.validate()?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok((0..self.count)
            .map(|_| rng.gen_range(self.z_min..self.z_max))
            .collect())
    }
}

/// Wall-clock time one selector spent on the full target set.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyTiming {
    pub name: &'static str,
    pub elapsed: Duration,
}

impl StrategyTiming {
    /// Mean time per target.
    pub fn per_target(&self, count: usize) -> Duration {
        match u32::try_from(count) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.elapsed / n,
        }
    }
}

/// A target on which the selectors disagreed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mismatch {
    pub z: f64,
    pub linear: SpecialPair,
    pub closed_form: SpecialPair,
}

/// Outcome of one harness run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub series_len: usize,
    pub growth_rate: f64,
    pub linear: StrategyTiming,
    pub closed_form: StrategyTiming,
    pub mismatches: usize,
    pub first_mismatch: Option<Mismatch>,
}

impl BenchReport {
    /// How many times faster the closed-form selector ran.
    pub fn speedup(&self) -> f64 {
        let closed = self.closed_form.elapsed.as_secs_f64();
        if closed > 0.0 {
            self.linear.elapsed.as_secs_f64() / closed
        } else {
            0.0
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.config.count;
        writeln!(
            f,
            "series: x={} y={} length={} (got {}), growth_rate={:.6}",
            self.config.x, self.config.y, self.config.length, self.series_len, self.growth_rate
        )?;
        writeln!(
            f,
            "targets: {} in [{}, {}), seed {}",
            count, self.config.z_min, self.config.z_max, self.config.seed
        )?;
        for timing in [&self.linear, &self.closed_form] {
            writeln!(
                f,
                "{:<12} {:>12.3?} total  {:>10.3?} per target",
                timing.name,
                timing.elapsed,
                timing.per_target(count)
            )?;
        }
        writeln!(f, "speedup: {:.2}x", self.speedup())?;
        write!(f, "mismatches: {}", self.mismatches)?;
        if let Some(m) = &self.first_mismatch {
            write!(
                f,
                "\nfirst mismatch at z={}: linear=({:.2}, {:.2}) closed_form=({:.2}, {:.2})",
                m.z,
                m.linear.special_a,
                m.linear.special_b,
                m.closed_form.special_a,
                m.closed_form.special_b
            )?;
        }
        Ok(())
    }
}

/// Run `selector` over every target, timing the whole pass.
fn time_selector(
    selector: &dyn SpecialSelector,
    series: &[f64],
    targets: &[f64],
) -> Result<(Vec<SpecialPair>, StrategyTiming), SelectError> {
    let start = Instant::now();
    let pairs = targets
        .iter()
        .map(|&z| selector.select(z, series))
        .collect::<Result<Vec<_>, _>>()?;
    let timing = StrategyTiming {
        name: selector.name(),
        elapsed: start.elapsed(),
    };
    Ok((pairs, timing))
}

/// Drive both selectors over `config.count` targets and compare them.
///
/// Fails when the generated series is too short for selection or the
/// target range is empty.
pub fn run_benchmark(config: &BenchConfig) -> Result<BenchReport, BenchError> {
    let targets = config.targets()?;
    let generator = SeriesGenerator::new(config.x, config.y, config.length);
    let growth_rate = generator.params().growth_rate;
    let series = generator.generate();

    info!(
        count = targets.len(),
        series_len = series.len(),
        leeway = config.leeway,
        "harness: starting"
    );

    let closed = ClosedFormSelector::new(growth_rate).with_leeway(config.leeway);
    let (linear_pairs, linear) = time_selector(&LinearSelector, &series, &targets)?;
    let (closed_pairs, closed_form) = time_selector(&closed, &series, &targets)?;

    let mut mismatches = 0;
    let mut first_mismatch = None;
    for ((&z, &lin), &cf) in targets.iter().zip(&linear_pairs).zip(&closed_pairs) {
        if lin != cf {
            debug!(z, ?lin, ?cf, "harness: selectors disagree");
            mismatches += 1;
            if first_mismatch.is_none() {
                first_mismatch = Some(Mismatch {
                    z,
                    linear: lin,
                    closed_form: cf,
                });
            }
        }
    }

    info!(
        mismatches,
        linear_us = linear.elapsed.as_micros() as u64,
        closed_form_us = closed_form.elapsed.as_micros() as u64,
        "harness: finished"
    );

    Ok(BenchReport {
        config: config.clone(),
        series_len: series.len(),
        growth_rate,
        linear,
        closed_form,
        mismatches,
        first_mismatch,
    })
}
