use faer::prelude::*;
use faer::Mat;
use linop::{all_finite, axpy, dagger, identity, C64};
use spinop::{spin_dot, SpinParticle};

use crate::error::RadicalError;

/// Relative size of the discarded imaginary part above which the yield is
/// reported with a numerical-quality warning.
const IMAG_RESIDUAL_TOL: f64 = 1e-8;

/// Projector onto the two-spin singlet subspace, I/4 - S1.S2, embedded in
/// the full composite space.
pub fn singlet_projection(
    p1: &impl SpinParticle,
    p2: &impl SpinParticle,
) -> Result<Mat<C64>, RadicalError> {
    if p1.dim() != p2.dim() {
        return Err(RadicalError::DimensionMismatch {
            left: p1.dim(),
            right: p2.dim(),
        });
    }
    let dim = p1.dim();
    let dot = spin_dot(p1, p2)?;
    let mut ps = Mat::<C64>::zeros(dim, dim);
    axpy(&mut ps, C64::new(0.25, 0.0), &identity(dim));
    axpy(&mut ps, C64::new(-1.0, 0.0), &dot);
    Ok(ps)
}

/// Haberkorn singlet recombination operator, k/2 * Ps.
pub fn haberkorn_k1(k: f64, ps: &Mat<C64>) -> Mat<C64> {
    let mut k1 = Mat::<C64>::zeros(ps.nrows(), ps.ncols());
    axpy(&mut k1, C64::new(0.5 * k, 0.0), ps);
    k1
}

/// Time-integrated singlet yield of H under the Haberkorn decay operator K1
/// and the scavenging (singlet escape) rate ksc.
///
/// Diagonalizes the non-Hermitian H_eff = H - i K1 as V L V^-1, expresses
/// the fully mixed initial density operator in that eigenbasis, divides
/// elementwise by i(l_m - conj(l_n)) + ksc, transforms back, and pairs the
/// result with K1. The result is real up to floating-point error; a large
/// imaginary residual means the eigenbasis is ill-conditioned and is
/// reported on stderr rather than silently discarded.
pub fn singlet_yield(h: &Mat<C64>, k1: &Mat<C64>, ksc: f64) -> Result<f64, RadicalError> {
    let n = h.nrows();
    if h.ncols() != n {
        return Err(RadicalError::NotSquare {
            rows: h.nrows(),
            cols: h.ncols(),
        });
    }
    if k1.nrows() != n || k1.ncols() != n {
        return Err(RadicalError::DimensionMismatch {
            left: n,
            right: k1.nrows(),
        });
    }

    // H_eff = H - i K1
    let h_eff = Mat::from_fn(n, n, |i, j| {
        h.read(i, j) - C64::new(0.0, 1.0) * k1.read(i, j)
    });

    let evd = h_eff.eigendecomposition::<C64>();
    let vecs = evd.u().to_owned();
    let s = evd.s().column_vector();
    let vals: Vec<C64> = (0..n).map(|i| s.read(i)).collect();

    if vals.iter().any(|v| !v.re.is_finite() || !v.im.is_finite()) || !all_finite(&vecs) {
        return Err(RadicalError::EigendecompositionFailed);
    }

    // V is not unitary in general, so the explicit inverse is required.
    let vecs_inv = vecs.partial_piv_lu().inverse();
    if !all_finite(&vecs_inv) {
        return Err(RadicalError::SingularEigenvectors);
    }

    // Fully mixed initial state expressed in the eigenbasis.
    let rho_0 = &vecs_inv * &dagger(&vecs_inv);

    // rho_S[m][n] = rho_0[m][n] / (i (l_m - conj(l_n)) + ksc)
    let rho_s = Mat::from_fn(n, n, |m, l| {
        let g = C64::new(0.0, 1.0) * (vals[m] - vals[l].conj()) + ksc;
        rho_0.read(m, l) / g
    });

    let rho_s = &vecs * &(&rho_s * &dagger(&vecs));

    let mut paired = C64::new(0.0, 0.0);
    for i in 0..n {
        for j in 0..n {
            paired += k1.read(i, j) * rho_s.read(j, i);
        }
    }

    let value = 2.0 * paired.re / n as f64;
    let residual = 2.0 * paired.im / n as f64;
    if residual.abs() > IMAG_RESIDUAL_TOL * value.abs().max(1.0) {
        eprintln!(
            "WARNING: singlet yield has imaginary residual {:.3e}; the eigenbasis may be ill-conditioned",
            residual
        );
    }

    Ok(value)
}
