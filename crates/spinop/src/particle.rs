use faer::Mat;
use linop::{axpy, kron_all, C64};

use crate::error::SpinError;
use crate::spin::{spin_operator, Axis, Spin};

/// Ordered list of spins spanning a composite Hilbert space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinSystem {
    spins: Vec<Spin>,
}

impl SpinSystem {
    pub fn new(spins: Vec<Spin>) -> Result<Self, SpinError> {
        if spins.is_empty() {
            return Err(SpinError::EmptySystem);
        }
        Ok(Self { spins })
    }

    pub fn from_quantum_numbers(js: &[f64]) -> Result<Self, SpinError> {
        let spins = js.iter().map(|&j| Spin::new(j)).collect::<Result<_, _>>()?;
        Self::new(spins)
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    pub fn spins(&self) -> &[Spin] {
        &self.spins
    }

    /// Dimension of the composite space, the product of all local dimensions.
    pub fn dim(&self) -> usize {
        self.spins.iter().map(Spin::dim).product()
    }

    /// Identity-padded embedding of the bare operator at `index`: identity on
    /// every other slot, the bare operator in this one, Kronecker-ordered by
    /// ascending index.
    pub fn embedded_operator(&self, index: usize, axis: Axis) -> Mat<C64> {
        let factors: Vec<Mat<C64>> = self
            .spins
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                if i == index {
                    spin_operator(s, axis)
                } else {
                    linop::identity(s.dim())
                }
            })
            .collect();
        kron_all(&factors)
    }
}

/// One spin of a composite system, addressed through its five canonical
/// operators on the full composite space.
pub trait SpinParticle {
    fn spin(&self) -> Spin;

    /// Dimension of the full composite space the operators act on.
    fn dim(&self) -> usize;

    fn coordinates(&self) -> Option<[f64; 3]>;

    fn operator(&self, axis: Axis) -> Mat<C64>;

    fn x(&self) -> Mat<C64> {
        self.operator(Axis::X)
    }

    fn y(&self) -> Mat<C64> {
        self.operator(Axis::Y)
    }

    fn z(&self) -> Mat<C64> {
        self.operator(Axis::Z)
    }

    fn plus(&self) -> Mat<C64> {
        self.operator(Axis::Plus)
    }

    fn minus(&self) -> Mat<C64> {
        self.operator(Axis::Minus)
    }
}

/// Rebuilds each operator on every access. Cheapest in memory, slowest under
/// repeated reads.
#[derive(Clone, Debug)]
pub struct OnDemandParticle {
    system: SpinSystem,
    index: usize,
    coordinates: Option<[f64; 3]>,
}

impl OnDemandParticle {
    pub fn new(
        system: SpinSystem,
        index: usize,
        coordinates: Option<[f64; 3]>,
    ) -> Result<Self, SpinError> {
        if index >= system.len() {
            return Err(SpinError::IndexOutOfRange {
                index,
                len: system.len(),
            });
        }
        Ok(Self {
            system,
            index,
            coordinates,
        })
    }

    pub fn system(&self) -> &SpinSystem {
        &self.system
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl SpinParticle for OnDemandParticle {
    fn spin(&self) -> Spin {
        self.system.spins()[self.index]
    }

    fn dim(&self) -> usize {
        self.system.dim()
    }

    fn coordinates(&self) -> Option<[f64; 3]> {
        self.coordinates
    }

    fn operator(&self, axis: Axis) -> Mat<C64> {
        self.system.embedded_operator(self.index, axis)
    }
}

/// Builds all five operators once at construction and serves cached copies.
/// Same output as [`OnDemandParticle`], traded memory for access speed.
#[derive(Clone, Debug)]
pub struct CachedParticle {
    system: SpinSystem,
    index: usize,
    coordinates: Option<[f64; 3]>,
    x: Mat<C64>,
    y: Mat<C64>,
    z: Mat<C64>,
    plus: Mat<C64>,
    minus: Mat<C64>,
}

impl CachedParticle {
    pub fn new(
        system: SpinSystem,
        index: usize,
        coordinates: Option<[f64; 3]>,
    ) -> Result<Self, SpinError> {
        if index >= system.len() {
            return Err(SpinError::IndexOutOfRange {
                index,
                len: system.len(),
            });
        }
        // Same construction path as the on-demand strategy, so the two are
        // bit-identical for equal inputs.
        let x = system.embedded_operator(index, Axis::X);
        let y = system.embedded_operator(index, Axis::Y);
        let z = system.embedded_operator(index, Axis::Z);
        let plus = system.embedded_operator(index, Axis::Plus);
        let minus = system.embedded_operator(index, Axis::Minus);
        Ok(Self {
            system,
            index,
            coordinates,
            x,
            y,
            z,
            plus,
            minus,
        })
    }

    pub fn system(&self) -> &SpinSystem {
        &self.system
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl SpinParticle for CachedParticle {
    fn spin(&self) -> Spin {
        self.system.spins()[self.index]
    }

    fn dim(&self) -> usize {
        self.system.dim()
    }

    fn coordinates(&self) -> Option<[f64; 3]> {
        self.coordinates
    }

    fn operator(&self, axis: Axis) -> Mat<C64> {
        match axis {
            Axis::X => self.x.clone(),
            Axis::Y => self.y.clone(),
            Axis::Z => self.z.clone(),
            Axis::Plus => self.plus.clone(),
            Axis::Minus => self.minus.clone(),
        }
    }
}

/// Scalar-product operator S1 . S2 = x1 x2 + y1 y2 + z1 z2.
pub fn spin_dot(
    p1: &impl SpinParticle,
    p2: &impl SpinParticle,
) -> Result<Mat<C64>, SpinError> {
    if p1.dim() != p2.dim() {
        return Err(SpinError::DimensionMismatch {
            left: p1.dim(),
            right: p2.dim(),
        });
    }
    let dim = p1.dim();
    let mut out = Mat::<C64>::zeros(dim, dim);
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let prod = &p1.operator(axis) * &p2.operator(axis);
        axpy(&mut out, C64::new(1.0, 0.0), &prod);
    }
    Ok(out)
}
