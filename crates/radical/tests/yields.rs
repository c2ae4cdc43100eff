use linop::{dagger, identity, max_abs_diff, C64};
use radical::hamiltonian::{hyperfine, total, zeeman};
use radical::yields::{haberkorn_k1, singlet_projection, singlet_yield};
use radical::RadicalError;
use spinop::{CachedParticle, OnDemandParticle, SpinSystem};

#[test]
fn singlet_projector_is_a_rank_one_projector() {
    let system = SpinSystem::from_quantum_numbers(&[0.5, 0.5]).unwrap();
    let p1 = CachedParticle::new(system.clone(), 0, None).unwrap();
    let p2 = CachedParticle::new(system, 1, None).unwrap();

    let ps = singlet_projection(&p1, &p2).unwrap();

    // idempotent
    let ps2 = &ps * &ps;
    assert!(
        max_abs_diff(&ps2, &ps) < 1e-12,
        "Ps^2 != Ps, residual {}",
        max_abs_diff(&ps2, &ps)
    );

    // hermitian
    assert!(max_abs_diff(&ps, &dagger(&ps)) < 1e-12);

    // rank one: trace 1
    let mut trace = C64::new(0.0, 0.0);
    for i in 0..4 {
        trace += ps.read(i, i);
    }
    assert!((trace.re - 1.0).abs() < 1e-12 && trace.im.abs() < 1e-12);
}

#[test]
fn haberkorn_operator_is_half_k_ps() {
    let ps = identity(2);
    let k1 = haberkorn_k1(3.0, &ps);
    for i in 0..2 {
        assert_eq!(k1.read(i, i), C64::new(1.5, 0.0));
    }
    assert_eq!(k1.read(0, 1), C64::new(0.0, 0.0));
}

#[test]
fn degenerate_two_level_yield_matches_closed_form() {
    // H = 0, Ps = I, so the Haberkorn result reduces to k / (k + ksc).
    let n = 2;
    let h = faer::Mat::<C64>::zeros(n, n);

    for (k, ksc) in [(1.0, 0.0), (2.0, 0.5), (10.0, 1.0), (1e3, 1.0)] {
        let k1 = haberkorn_k1(k, &identity(n));
        let y = singlet_yield(&h, &k1, ksc).unwrap();
        let expected = k / (k + ksc);
        assert!(
            (y - expected).abs() < 1e-8,
            "k = {}, ksc = {}: yield {} vs closed form {}",
            k,
            ksc,
            y,
            expected
        );
    }
}

#[test]
fn yield_saturates_as_recombination_dominates() {
    let n = 2;
    let h = faer::Mat::<C64>::zeros(n, n);
    let ksc = 1.0;

    let slow = singlet_yield(&h, &haberkorn_k1(1.0, &identity(n)), ksc).unwrap();
    let fast = singlet_yield(&h, &haberkorn_k1(1e6, &identity(n)), ksc).unwrap();
    assert!(slow < fast);
    assert!((fast - 1.0).abs() < 1e-5, "yield should approach 1, got {}", fast);
}

fn radical_pair_hamiltonian() -> (faer::Mat<C64>, faer::Mat<C64>) {
    let system = SpinSystem::from_quantum_numbers(&[0.5, 0.5, 0.5]).unwrap();
    let e1 = CachedParticle::new(system.clone(), 0, None).unwrap();
    let e2 = CachedParticle::new(system.clone(), 1, None).unwrap();
    let nuc = OnDemandParticle::new(system, 2, None).unwrap();

    let field = [0.0, 0.0, 1.0];
    let a = [[0.5, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 1.2]];

    let h = total(&[
        zeeman(&e1, field),
        zeeman(&e2, field),
        hyperfine(&e1, &nuc, a).unwrap(),
    ])
    .unwrap();

    let ps = singlet_projection(&e1, &e2).unwrap();
    (h, ps)
}

#[test]
fn radical_pair_yield_is_a_probability() {
    let (h, ps) = radical_pair_hamiltonian();
    let k1 = haberkorn_k1(1.0, &ps);
    let y = singlet_yield(&h, &k1, 0.2).unwrap();
    assert!(y.is_finite());
    assert!(y > 0.0 && y < 1.0, "yield out of range: {}", y);
}

#[test]
fn yield_is_deterministic() {
    let (h, ps) = radical_pair_hamiltonian();
    let k1 = haberkorn_k1(0.7, &ps);
    let a = singlet_yield(&h, &k1, 0.1).unwrap();
    let b = singlet_yield(&h, &k1, 0.1).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shape_errors_are_reported() {
    let h = faer::Mat::<C64>::zeros(2, 3);
    let k1 = faer::Mat::<C64>::zeros(2, 2);
    assert!(matches!(
        singlet_yield(&h, &k1, 0.0).unwrap_err(),
        RadicalError::NotSquare { .. }
    ));

    let h = faer::Mat::<C64>::zeros(4, 4);
    assert!(matches!(
        singlet_yield(&h, &k1, 0.0).unwrap_err(),
        RadicalError::DimensionMismatch { .. }
    ));
}
