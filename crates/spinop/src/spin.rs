use faer::Mat;
use linop::{axpy, C64};

use crate::error::SpinError;

/// Spin quantum number, stored as twice its value so half-integers stay exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spin {
    doubled: u32,
}

impl Spin {
    pub fn new(j: f64) -> Result<Self, SpinError> {
        let doubled = 2.0 * j;
        if !(j >= 0.0) || doubled.fract() != 0.0 || doubled > u32::MAX as f64 {
            return Err(SpinError::InvalidSpin { j });
        }
        Ok(Self {
            doubled: doubled as u32,
        })
    }

    /// Spin 1/2, an electron or a proton.
    pub fn half() -> Self {
        Self { doubled: 1 }
    }

    pub fn one() -> Self {
        Self { doubled: 2 }
    }

    pub fn value(&self) -> f64 {
        self.doubled as f64 / 2.0
    }

    /// Local Hilbert-space dimension, 2j + 1.
    pub fn dim(&self) -> usize {
        self.doubled as usize + 1
    }
}

/// Cartesian or ladder component of an angular-momentum operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
    Plus,
    Minus,
}

/// Bare angular-momentum operator for a single spin, dimension 2j + 1.
///
/// Basis states are ordered by descending projection, m = j, j-1, ..., -j.
pub fn spin_operator(spin: Spin, axis: Axis) -> Mat<C64> {
    match axis {
        Axis::Plus => ladder_plus(spin),
        Axis::Minus => ladder_plus(spin).as_ref().transpose().to_owned(),
        Axis::Z => proj_z(spin),
        Axis::X => {
            // (J+ + J-) / 2
            let plus = ladder_plus(spin);
            let minus = plus.as_ref().transpose().to_owned();
            let mut out = Mat::<C64>::zeros(spin.dim(), spin.dim());
            axpy(&mut out, C64::new(0.5, 0.0), &plus);
            axpy(&mut out, C64::new(0.5, 0.0), &minus);
            out
        }
        Axis::Y => {
            // (J+ - J-) / 2i
            let plus = ladder_plus(spin);
            let minus = plus.as_ref().transpose().to_owned();
            let mut out = Mat::<C64>::zeros(spin.dim(), spin.dim());
            axpy(&mut out, C64::new(0.0, -0.5), &plus);
            axpy(&mut out, C64::new(0.0, 0.5), &minus);
            out
        }
    }
}

fn ladder_plus(spin: Spin) -> Mat<C64> {
    let j = spin.value();
    Mat::from_fn(spin.dim(), spin.dim(), |row, col| {
        if col == row + 1 {
            let m = j - col as f64;
            C64::new((j * (j + 1.0) - m * (m + 1.0)).sqrt(), 0.0)
        } else {
            C64::new(0.0, 0.0)
        }
    })
}

fn proj_z(spin: Spin) -> Mat<C64> {
    let j = spin.value();
    Mat::from_fn(spin.dim(), spin.dim(), |row, col| {
        if row == col {
            C64::new(j - row as f64, 0.0)
        } else {
            C64::new(0.0, 0.0)
        }
    })
}
