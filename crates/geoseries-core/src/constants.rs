//! Fixed constants for series generation and selection.

/// Numerator of the selection target: a caller's ratio `z` maps to
/// `TARGET_CONSTANT / z`.
pub const TARGET_CONSTANT: f64 = 1000.0;

/// Minimum series length accepted by either selector.
pub const MIN_SELECT_LEN: usize = 3;

/// Offset of the first special value, counted back from the end of the series.
pub const SPECIAL_A_FROM_END: usize = 3;

/// Index slack applied on both sides of the closed-form position estimate.
///
/// Two is the smallest window that absorbs the rounding and dedup drift of
/// generated series across the verified input domain.
pub const DEFAULT_LEEWAY: usize = 2;

/// Candidate terms examined per requested element before generation gives up.
pub const CANDIDATE_CAP_FACTOR: usize = 10_000;

/// Quarter increments per unit.
pub const QUARTERS_PER_UNIT: f64 = 4.0;

/// Scale for the 2-decimal cleanup pass.
pub const CENT_SCALE: f64 = 100.0;

// First term: (0.5·x² + 30·x + 10) / 25
pub const FIRST_TERM_QUADRATIC: f64 = 0.5;
pub const FIRST_TERM_LINEAR: f64 = 30.0;
pub const FIRST_TERM_CONSTANT: f64 = 10.0;
pub const FIRST_TERM_DIVISOR: f64 = 25.0;

// Growth rate: (0.02·y / 25) / first_term
pub const GROWTH_COEFFICIENT: f64 = 0.02;
pub const GROWTH_DIVISOR: f64 = 25.0;
