//! Closed-form transition kernel for the one-dimensional chain.

use statrs::distribution::{ContinuousCDF, Normal};

use super::Transition1D;
use crate::error::DiffchainError;
use crate::process::Diffusion1D;

/// Transition distribution of the interior state at position `xi`.
///
/// The one-step displacement is Gaussian with mean `xi + b(0, xi) * dt` and
/// variance `a(0, xi)^2 * dt`. Each neighbour probability is the CDF mass
/// of that neighbour's cell; the stay probability is taken by subtraction
/// rather than integration, so the row sums to one exactly. The kernel is
/// fully deterministic.
pub fn transition(
    xi: f64,
    dx: f64,
    dt: f64,
    process: &Diffusion1D,
) -> Result<Transition1D, DiffchainError> {
    let mean = xi + (process.drift)(0.0, xi) * dt;
    let sd = (process.volatility)(0.0, xi).abs() * dt.sqrt();
    let step = Normal::new(mean, sd).map_err(|e| DiffchainError::DegenerateDensity(e.to_string()))?;

    let left = cell_mass(&step, xi - dx, dx);
    let right = cell_mass(&step, xi + dx, dx);

    Ok(Transition1D {
        left,
        right,
        stay: 1.0 - left - right,
    })
}

/// Probability mass of the cell of width `dx` centred at `center`.
#[inline]
fn cell_mass(step: &Normal, center: f64, dx: f64) -> f64 {
    step.cdf(center + dx / 2.0) - step.cdf(center - dx / 2.0)
}
