use spinop::SpinParticle;

use crate::error::RadicalError;

/// Displacement between one labeled pair of particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance {
    pub pair: (usize, usize),
    /// coord[first] - coord[second] for the labeled pair.
    pub displacement: [f64; 3],
}

/// Dipolar coupling tensor for one labeled pair of particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DipolarMatrix {
    pub pair: (usize, usize),
    pub matrix: [[f64; 3]; 3],
}

/// All pairwise displacements over an ordered coordinate list, one record per
/// unordered pair, tagged with the caller's labels. Produces exactly
/// n(n-1)/2 records.
pub fn distances(
    coordinates: &[[f64; 3]],
    labels: &[usize],
) -> Result<Vec<Distance>, RadicalError> {
    let n = coordinates.len();
    if n < 2 {
        return Err(RadicalError::TooFewParticles { len: n });
    }
    if labels.len() != n {
        return Err(RadicalError::LabelCountMismatch {
            labels: labels.len(),
            particles: n,
        });
    }

    let mut out = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for k in (i + 1)..n {
            let displacement = [
                coordinates[i][0] - coordinates[k][0],
                coordinates[i][1] - coordinates[k][1],
                coordinates[i][2] - coordinates[k][2],
            ];
            out.push(Distance {
                pair: (labels[i], labels[k]),
                displacement,
            });
        }
    }
    Ok(out)
}

/// [`distances`] over particles carrying their own coordinates. A particle
/// without coordinates is a configuration error.
pub fn particle_distances(
    particles: &[&dyn SpinParticle],
    labels: &[usize],
) -> Result<Vec<Distance>, RadicalError> {
    let coordinates = particles
        .iter()
        .enumerate()
        .map(|(index, p)| {
            p.coordinates()
                .ok_or(RadicalError::MissingCoordinates { index })
        })
        .collect::<Result<Vec<_>, _>>()?;
    distances(&coordinates, labels)
}

/// Dipolar tensor C/r^3 * (3 * r_hat (x) r_hat - I) for every displacement
/// record. Coincident particles (zero displacement) are a configuration
/// error, not a silent infinity.
pub fn dipolar_matrices(
    constant: f64,
    distances: &[Distance],
) -> Result<Vec<DipolarMatrix>, RadicalError> {
    let mut out = Vec::with_capacity(distances.len());
    for dist in distances {
        let (i, j) = dist.pair;
        let d = dist.displacement;
        let norm = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        if !norm.is_finite() {
            return Err(RadicalError::NonFiniteDisplacement { i, j });
        }
        if norm == 0.0 {
            return Err(RadicalError::CoincidentParticles { i, j });
        }

        let unit = [d[0] / norm, d[1] / norm, d[2] / norm];
        let scale = constant / (norm * norm * norm);
        let mut matrix = [[0.0f64; 3]; 3];
        for a in 0..3 {
            for b in 0..3 {
                let delta = if a == b { 1.0 } else { 0.0 };
                matrix[a][b] = scale * (3.0 * unit[a] * unit[b] - delta);
            }
        }
        out.push(DipolarMatrix {
            pair: dist.pair,
            matrix,
        });
    }
    Ok(out)
}
