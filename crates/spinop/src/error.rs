use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpinError {
    #[error("spin quantum number must be a non-negative half-integer, got {j}")]
    InvalidSpin { j: f64 },

    #[error("spin index {index} out of range for a system of {len} spins")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("operator dimensions do not match: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("a composite system needs at least one spin")]
    EmptySystem,
}
