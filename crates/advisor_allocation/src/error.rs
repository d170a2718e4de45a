//! Allocation-model error types.

use thiserror::Error;

/// Errors from the allocation model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// Risk score outside the supported 1..=10 range.
    #[error("Risk score {score} outside supported range 1..=10")]
    RiskScoreOutOfRange {
        /// The rejected score.
        score: u8,
    },

    /// Too few points requested for curve sampling.
    #[error("Curve sampling needs at least 2 points, got {points}")]
    TooFewCurvePoints {
        /// The rejected point count.
        points: usize,
    },
}
