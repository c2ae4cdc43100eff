pub mod error;
pub mod particle;
pub mod spin;

pub use error::SpinError;
pub use particle::{spin_dot, CachedParticle, OnDemandParticle, SpinParticle, SpinSystem};
pub use spin::{spin_operator, Axis, Spin};
