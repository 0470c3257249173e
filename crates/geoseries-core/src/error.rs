//! Error types for geoseries.
use thiserror::Error;

use crate::constants::MIN_SELECT_LEN;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The series handed to a selector is shorter than [`MIN_SELECT_LEN`].
    #[error("invalid argument: cannot be called on a list smaller than 3 elements (got {len})")]
    InvalidArgument { len: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    #[error("empty target range: [{min}, {max})")]
    EmptyTargetRange { min: f64, max: f64 },
    #[error(transparent)]
    Select(#[from] SelectError),
}

impl SelectError {
    /// Reject series too short for selection.
    pub fn check_len(len: usize) -> Result<(), SelectError> {
        if len < MIN_SELECT_LEN {
            return Err(SelectError::InvalidArgument { len });
        }
        Ok(())
    }
}
