use thiserror::Error;

/// Top-level error type for the polysimp simplification engine.
///
/// The recursive engine itself never fails under valid preconditions; these
/// errors are produced by the caller-facing entry points in [`crate::simplify`]
/// when input validation rejects a call before the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimplifyError {
    #[error("invalid index range: start {start} must be smaller than end {end}, and end must be smaller than the point count {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("at least two points are needed, got {0}")]
    InsufficientPoints(usize),

    #[error("epsilon must be non-negative, got {0}")]
    NegativeEpsilon(f64),

    #[error("coordinate buffers have different lengths: {0} and {1}")]
    LengthMismatch(usize, usize),
}

/// Convenience type alias for results using [`SimplifyError`].
pub type Result<T> = std::result::Result<T, SimplifyError>;
