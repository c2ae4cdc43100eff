use spinop::SpinError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RadicalError {
    #[error(transparent)]
    Spin(#[from] SpinError),

    #[error("operator dimensions do not match: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("matrix is not square: {rows} x {cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("need at least two particles, got {len}")]
    TooFewParticles { len: usize },

    #[error("no Hamiltonian terms to sum")]
    NoTerms,

    #[error("got {labels} labels for {particles} particles")]
    LabelCountMismatch { labels: usize, particles: usize },

    #[error("particle {index} has no coordinates")]
    MissingCoordinates { index: usize },

    #[error("particles {i} and {j} are at coincident coordinates")]
    CoincidentParticles { i: usize, j: usize },

    #[error("displacement between particles {i} and {j} is not finite")]
    NonFiniteDisplacement { i: usize, j: usize },

    #[error("eigendecomposition produced a non-finite spectrum")]
    EigendecompositionFailed,

    #[error("eigenvector matrix is numerically singular")]
    SingularEigenvectors,
}
