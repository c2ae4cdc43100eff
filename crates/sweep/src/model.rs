use faer::Mat;
use linop::C64;
use radical::geometry::{dipolar_matrices, distances};
use radical::hamiltonian::{dipolar, exchange, hyperfine, total, zeeman};
use radical::yields::{haberkorn_k1, singlet_projection, singlet_yield};
use radical::RadicalError;
use spinop::{CachedParticle, OnDemandParticle, SpinSystem};

/// Reference radical pair: two electrons and one nucleus, all spin 1/2.
///
/// Couplings and rates are in matching angular-frequency units; coordinates
/// set the electron-electron dipolar tensor through the geometry calculator.
#[derive(Clone, Copy, Debug)]
pub struct RadicalPairModel {
    /// Hyperfine tensor between electron 1 and the nucleus.
    pub hyperfine: [[f64; 3]; 3],
    /// Dipolar coupling constant C in C/r^3 * (3 r_hat (x) r_hat - I).
    pub dipolar_constant: f64,
    /// Exchange constant J; zero drops the term entirely.
    pub exchange_j: f64,
    /// Singlet recombination rate.
    pub k_s: f64,
    /// Singlet escape (scavenging) rate.
    pub k_sc: f64,
    /// Coordinates of electron 1, electron 2, nucleus.
    pub coordinates: [[f64; 3]; 3],
}

impl RadicalPairModel {
    /// Axially anisotropic hyperfine, moderate dipolar coupling, no
    /// exchange. Useful as a sweep baseline, not fitted to any molecule.
    pub fn reference() -> Self {
        Self {
            hyperfine: [
                [-0.2, 0.0, 0.0],
                [0.0, -0.2, 0.0],
                [0.0, 0.0, 1.0],
            ],
            dipolar_constant: 1.0,
            exchange_j: 0.0,
            k_s: 1.0,
            k_sc: 0.1,
            coordinates: [
                [0.0, 0.0, 0.0],
                [0.0, 0.0, 1.5],
                [0.7, 0.0, 0.0],
            ],
        }
    }
}

/// Singlet yield of the model under one external field vector.
///
/// Electron operators are precomputed (they appear in several terms); the
/// nuclear operators are built on demand since the hyperfine term reads
/// them once.
pub fn yield_at_field(
    model: &RadicalPairModel,
    field: [f64; 3],
) -> Result<f64, RadicalError> {
    let system = SpinSystem::from_quantum_numbers(&[0.5, 0.5, 0.5])?;
    let e1 = CachedParticle::new(system.clone(), 0, Some(model.coordinates[0]))?;
    let e2 = CachedParticle::new(system.clone(), 1, Some(model.coordinates[1]))?;
    let nucleus = OnDemandParticle::new(system, 2, Some(model.coordinates[2]))?;

    let electron_coords = [model.coordinates[0], model.coordinates[1]];
    let records = distances(&electron_coords, &[0, 1])?;
    let dipolar_tensor = dipolar_matrices(model.dipolar_constant, &records)?[0].matrix;

    let mut terms: Vec<Mat<C64>> = vec![
        zeeman(&e1, field),
        zeeman(&e2, field),
        hyperfine(&e1, &nucleus, model.hyperfine)?,
        dipolar(&e1, &e2, dipolar_tensor)?,
    ];
    if model.exchange_j != 0.0 {
        terms.push(exchange(&e1, &e2, model.exchange_j)?);
    }
    let h = total(&terms)?;

    let ps = singlet_projection(&e1, &e2)?;
    let k1 = haberkorn_k1(model.k_s, &ps);
    singlet_yield(&h, &k1, model.k_sc)
}
