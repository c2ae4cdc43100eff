use faer::Mat;
use num_complex::Complex64;

pub type C64 = Complex64;

/// Identity operator of the given dimension.
pub fn identity(dim: usize) -> Mat<C64> {
    Mat::identity(dim, dim)
}

/// Kronecker product of two dense matrices.
pub fn kron(a: &Mat<C64>, b: &Mat<C64>) -> Mat<C64> {
    let br = b.nrows();
    let bc = b.ncols();
    Mat::from_fn(a.nrows() * br, a.ncols() * bc, |i, j| {
        a.read(i / br, j / bc) * b.read(i % br, j % bc)
    })
}

/// Kronecker product of a sequence of factors, folded left to right.
pub fn kron_all(factors: &[Mat<C64>]) -> Mat<C64> {
    assert!(!factors.is_empty(), "kron_all needs at least one factor");
    let mut out = factors[0].clone();
    for f in &factors[1..] {
        out = kron(&out, f);
    }
    out
}

/// Conjugate transpose.
pub fn dagger(m: &Mat<C64>) -> Mat<C64> {
    m.as_ref().adjoint().to_owned()
}

/// In-place scaled accumulation, `acc += alpha * m`.
pub fn axpy(acc: &mut Mat<C64>, alpha: C64, m: &Mat<C64>) {
    assert!(
        acc.nrows() == m.nrows() && acc.ncols() == m.ncols(),
        "axpy shape mismatch: {}x{} vs {}x{}",
        acc.nrows(),
        acc.ncols(),
        m.nrows(),
        m.ncols()
    );
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            let v = acc.read(i, j) + alpha * m.read(i, j);
            acc.write(i, j, v);
        }
    }
}

/// True when every entry is finite in both components.
pub fn all_finite(m: &Mat<C64>) -> bool {
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            let v = m.read(i, j);
            if !v.re.is_finite() || !v.im.is_finite() {
                return false;
            }
        }
    }
    true
}

/// Largest absolute entry of `a - b`.
pub fn max_abs_diff(a: &Mat<C64>, b: &Mat<C64>) -> f64 {
    assert!(
        a.nrows() == b.nrows() && a.ncols() == b.ncols(),
        "max_abs_diff shape mismatch"
    );
    let mut max = 0.0f64;
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            let d = (a.read(i, j) - b.read(i, j)).norm();
            if d > max {
                max = d;
            }
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> C64 {
        C64::new(re, im)
    }

    #[test]
    fn kron_small_matrices() {
        let a = Mat::from_fn(2, 2, |i, j| c((i * 2 + j) as f64 + 1.0, 0.0));
        let b = identity(2);
        let k = kron(&a, &b);

        assert_eq!(k.nrows(), 4);
        assert_eq!(k.ncols(), 4);
        // block structure: a[i][j] * I
        assert_eq!(k.read(0, 0), c(1.0, 0.0));
        assert_eq!(k.read(1, 1), c(1.0, 0.0));
        assert_eq!(k.read(0, 2), c(2.0, 0.0));
        assert_eq!(k.read(0, 3), c(0.0, 0.0));
        assert_eq!(k.read(2, 0), c(3.0, 0.0));
        assert_eq!(k.read(3, 3), c(4.0, 0.0));
    }

    #[test]
    fn kron_all_dimension() {
        let factors = vec![identity(2), identity(3), identity(2)];
        let k = kron_all(&factors);
        assert_eq!(k.nrows(), 12);
        assert_eq!(k.ncols(), 12);
        assert!(max_abs_diff(&k, &identity(12)) == 0.0);
    }

    #[test]
    fn dagger_conjugates_and_transposes() {
        let m = Mat::from_fn(2, 2, |i, j| c(i as f64, j as f64));
        let d = dagger(&m);
        assert_eq!(d.read(0, 1), c(1.0, -0.0));
        assert_eq!(d.read(1, 0), c(0.0, -1.0));
    }

    #[test]
    fn axpy_accumulates() {
        let mut acc = identity(2);
        let m = identity(2);
        axpy(&mut acc, c(2.0, 0.0), &m);
        assert_eq!(acc.read(0, 0), c(3.0, 0.0));
        assert_eq!(acc.read(0, 1), c(0.0, 0.0));
    }
}
