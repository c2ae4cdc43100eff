pub mod error;
pub mod geometry;
pub mod hamiltonian;
pub mod yields;

pub use error::RadicalError;
