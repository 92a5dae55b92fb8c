//! Monte Carlo transition kernel for the two-dimensional chain.
//!
//! The bivariate step density has diagonal covariance, so each sample is a
//! pair of independent Normal draws. A directional probability is the
//! fraction of samples landing inside that neighbour's square; the
//! estimator's standard error shrinks as `O(1 / sqrt(samples))`, so halving
//! the error costs four times the samples. The stay probability is taken by
//! subtraction.
//!
//! Unlike the 1-D kernel this estimator is stochastic: reproducibility
//! requires a seeded random source, which the caller owns and passes in.
//! The table assembler derives one independent source per cell so parallel
//! workers never share random state.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::Transition2D;
use crate::error::DiffchainError;
use crate::process::Diffusion2D;

/// Default number of Monte Carlo samples per cell. Keeps the row
/// normalization error around 1e-2.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Transition distribution of the interior state at `(xi, yi)`, estimated
/// from `samples` draws of the step density.
pub fn transition<R: Rng>(
    xi: f64,
    yi: f64,
    dx: f64,
    dt: f64,
    process: &Diffusion2D,
    samples: usize,
    rng: &mut R,
) -> Result<Transition2D, DiffchainError> {
    if samples == 0 {
        return Err(DiffchainError::InvalidSampleCount);
    }

    let b = (process.drift)(0.0, xi, yi);
    let a = (process.volatility)(0.0, xi, yi);

    let step_x = Normal::new(xi + b[0] * dt, a[0].abs() * dt.sqrt())
        .map_err(|e| DiffchainError::DegenerateDensity(e.to_string()))?;
    let step_y = Normal::new(yi + b[1] * dt, a[1].abs() * dt.sqrt())
        .map_err(|e| DiffchainError::DegenerateDensity(e.to_string()))?;

    // Neighbour squares in emission order: left, right, up, down.
    let centers = [
        [xi - dx, yi],
        [xi + dx, yi],
        [xi, yi + dx],
        [xi, yi - dx],
    ];

    let mut hits = [0usize; 4];
    for _ in 0..samples {
        let x = step_x.sample(rng);
        let y = step_y.sample(rng);
        for (hit, center) in hits.iter_mut().zip(&centers) {
            if (x - center[0]).abs() <= dx / 2.0 && (y - center[1]).abs() <= dx / 2.0 {
                *hit += 1;
            }
        }
    }

    let [left, right, up, down] = hits.map(|h| h as f64 / samples as f64);
    Ok(Transition2D {
        left,
        right,
        up,
        down,
        stay: 1.0 - left - right - up - down,
    })
}
