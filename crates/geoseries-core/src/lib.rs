//! # geoseries-core — Quarter-rounded geometric series and special-value selection.
//!
//! This crate implements:
//! - **Quarter rounding**: values snap to the nearest multiple of 0.25 and are
//!   then trimmed to 2 decimal places to drop binary residue.
//! - **Series generation**: a geometric progression derived from two inputs,
//!   rounded, deduplicated, truncated to the requested length and sorted.
//! - **Special-value selection**: the third-from-last element plus the
//!   element nearest `TARGET_CONSTANT / z`, found either by a guarded linear
//!   descent or by a closed-form logarithmic index estimate.
//! - **Consistency harness**: times both selectors over many targets and
//!   counts the targets on which they disagree.

pub mod closed_form;
pub mod constants;
pub mod error;
pub mod harness;
pub mod linear;
pub mod rounding;
pub mod series;
pub mod traits;

pub use closed_form::{pick_special_alt, ClosedFormSelector};
pub use error::{BenchError, SelectError};
pub use harness::{run_benchmark, BenchConfig, BenchReport, Mismatch, StrategyTiming};
pub use linear::{pick_special, LinearSelector};
pub use rounding::round_quarter;
pub use series::{generate_series, Candidates, GrowthParams, Series, SeriesGenerator};
pub use traits::{SpecialPair, SpecialSelector};
