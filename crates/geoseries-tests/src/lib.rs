//! Cross-module test suite for geoseries.
//!
//! The integration tests under `tests/` check generator invariants and the
//! agreement between the linear and closed-form selectors on series produced
//! by the generator.

pub mod helpers;
