use rayon::prelude::*;

use radical::RadicalError;

use crate::model::{yield_at_field, RadicalPairModel};

/// Singlet yield against field magnitude along z, `steps + 1` points over
/// [0, b_max]. Each point is an independent configuration, computed in
/// parallel.
pub fn field_sweep(
    model: &RadicalPairModel,
    b_max: f64,
    steps: usize,
) -> Result<Vec<(f64, f64)>, RadicalError> {
    (0..=steps)
        .into_par_iter()
        .map(|i| {
            let b = b_max * (i as f64) / (steps as f64);
            let y = yield_at_field(model, [0.0, 0.0, b])?;
            Ok((b, y))
        })
        .collect()
}

/// Singlet yield against field orientation in the x-z plane at fixed
/// magnitude, `steps + 1` points over [0, pi].
pub fn angle_sweep(
    model: &RadicalPairModel,
    b_mag: f64,
    steps: usize,
) -> Result<Vec<(f64, f64)>, RadicalError> {
    (0..=steps)
        .into_par_iter()
        .map(|i| {
            let theta = std::f64::consts::PI * (i as f64) / (steps as f64);
            let field = [b_mag * theta.sin(), 0.0, b_mag * theta.cos()];
            let y = yield_at_field(model, field)?;
            Ok((theta, y))
        })
        .collect()
}

/// Singlet yield against the recombination rate k_s at a fixed field,
/// `steps + 1` points over [k_min, k_max].
pub fn rate_sweep(
    model: &RadicalPairModel,
    field: [f64; 3],
    k_min: f64,
    k_max: f64,
    steps: usize,
) -> Result<Vec<(f64, f64)>, RadicalError> {
    (0..=steps)
        .into_par_iter()
        .map(|i| {
            let k = k_min + (k_max - k_min) * (i as f64) / (steps as f64);
            let mut m = *model;
            m.k_s = k;
            let y = yield_at_field(&m, field)?;
            Ok((k, y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_sweep_covers_the_requested_grid() {
        let model = RadicalPairModel::reference();
        let rows = field_sweep(&model, 2.0, 8).unwrap();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].0, 0.0);
        assert_eq!(rows[8].0, 2.0);
        for (_, y) in &rows {
            assert!(y.is_finite());
        }
    }

    #[test]
    fn rate_sweep_spans_the_rate_interval() {
        let model = RadicalPairModel::reference();
        let rows = rate_sweep(&model, [0.0, 0.0, 0.5], 0.5, 5.0, 6).unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].0, 0.5);
        assert_eq!(rows[6].0, 5.0);
        for (_, y) in &rows {
            assert!(*y > 0.0 && *y < 1.0, "yield out of range: {}", y);
        }
    }
}
