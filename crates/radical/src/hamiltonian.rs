use faer::Mat;
use linop::{axpy, identity, C64};
use spinop::{Axis, SpinParticle};

use crate::error::RadicalError;

const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

pub const IDENTITY_3X3: [[f64; 3]; 3] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Single-particle interaction term, sum of v_a * J_a over the Cartesian
/// axes. Exact-zero coefficients contribute no operator at all.
pub fn mk_h1(p: &impl SpinParticle, v: [f64; 3]) -> Mat<C64> {
    let dim = p.dim();
    let mut h = Mat::<C64>::zeros(dim, dim);
    for (coeff, axis) in v.into_iter().zip(AXES) {
        if coeff == 0.0 {
            continue;
        }
        axpy(&mut h, C64::new(coeff, 0.0), &p.operator(axis));
    }
    h
}

/// Two-particle interaction term, sum of m[a][b] * J_a(p1) * J_b(p2) over
/// Cartesian axis pairs. Exact-zero coefficients are skipped, so sparse
/// coupling tensors never materialize unused operator products.
pub fn mk_h2(
    p1: &impl SpinParticle,
    p2: &impl SpinParticle,
    m: [[f64; 3]; 3],
) -> Result<Mat<C64>, RadicalError> {
    if p1.dim() != p2.dim() {
        return Err(RadicalError::DimensionMismatch {
            left: p1.dim(),
            right: p2.dim(),
        });
    }

    let dim = p1.dim();
    let mut h = Mat::<C64>::zeros(dim, dim);
    for (row, &axis1) in AXES.iter().enumerate() {
        if m[row].iter().all(|&c| c == 0.0) {
            continue;
        }
        let op1 = p1.operator(axis1);
        for (col, &axis2) in AXES.iter().enumerate() {
            let coeff = m[row][col];
            if coeff == 0.0 {
                continue;
            }
            let prod = &op1 * &p2.operator(axis2);
            axpy(&mut h, C64::new(coeff, 0.0), &prod);
        }
    }
    Ok(h)
}

/// Zeeman interaction of one spin with an external magnetic field vector.
pub fn zeeman(p: &impl SpinParticle, field: [f64; 3]) -> Mat<C64> {
    mk_h1(p, field)
}

/// Dipolar interaction between two spins, given the 3x3 dipolar tensor
/// (see [`crate::geometry::dipolar_matrices`]).
pub fn dipolar(
    p1: &impl SpinParticle,
    p2: &impl SpinParticle,
    dipolar_matrix: [[f64; 3]; 3],
) -> Result<Mat<C64>, RadicalError> {
    mk_h2(p1, p2, dipolar_matrix)
}

/// Hyperfine interaction between an electron and a nuclear spin, given the
/// hyperfine coupling tensor.
pub fn hyperfine(
    p1: &impl SpinParticle,
    p2: &impl SpinParticle,
    hyperfine_matrix: [[f64; 3]; 3],
) -> Result<Mat<C64>, RadicalError> {
    mk_h2(p1, p2, hyperfine_matrix)
}

/// Isotropic exchange interaction, -J * (I/2 + 2 * S1.S2).
///
/// The sign of J is convention-dependent; this follows the convention where
/// positive J puts the singlet above the triplet. Check against the field
/// convention in use before comparing couplings across codes.
pub fn exchange(
    p1: &impl SpinParticle,
    p2: &impl SpinParticle,
    j: f64,
) -> Result<Mat<C64>, RadicalError> {
    let dot = mk_h2(p1, p2, IDENTITY_3X3)?;
    let dim = p1.dim();
    let mut h = Mat::<C64>::zeros(dim, dim);
    axpy(&mut h, C64::new(-0.5 * j, 0.0), &identity(dim));
    axpy(&mut h, C64::new(-2.0 * j, 0.0), &dot);
    Ok(h)
}

/// Sum of interaction terms into a total Hamiltonian.
pub fn total(terms: &[Mat<C64>]) -> Result<Mat<C64>, RadicalError> {
    let first = terms.first().ok_or(RadicalError::NoTerms)?;
    let dim = first.nrows();
    if first.ncols() != dim {
        return Err(RadicalError::NotSquare {
            rows: first.nrows(),
            cols: first.ncols(),
        });
    }

    let mut h = Mat::<C64>::zeros(dim, dim);
    for term in terms {
        if term.nrows() != dim || term.ncols() != dim {
            return Err(RadicalError::DimensionMismatch {
                left: dim,
                right: term.nrows(),
            });
        }
        axpy(&mut h, C64::new(1.0, 0.0), term);
    }
    Ok(h)
}
