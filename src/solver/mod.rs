//! Step-size solver.
//!
//! One step of the discretized process is a Gaussian displacement with mean
//! `b * dt` and variance `a^2 * dt`. The step size is chosen so that the
//! probability mass within `+-1.5 * dx` of the mean equals the containment
//! confidence:
//!
//! ```text
//! P(|X| <= 1.5 * dx) = erf(1.5 * dx / (a * sqrt(2 * dt))) = confidence
//! ```
//!
//! The Gaussian integral has a closed form in the error function, so the
//! symbolic solve reduces to scalar root finding; Brent's method over a
//! bracketed interval locates the unique positive root.

use argmin::core::{CostFunction, Error, Executor};
use argmin::solver::brent::BrentRoot;
use statrs::function::erf::erf;

use crate::error::DiffchainError;

/// Confidence level of the containment criterion: the probability that a
/// one-step displacement stays within the immediate neighbour cells.
pub const CONTAINMENT_CONFIDENCE: f64 = 0.95;

const BRENT_TOL: f64 = 1e-12;
const MAX_BRACKET_DOUBLINGS: u32 = 64;

/// Probability that a zero-mean Gaussian step of variance
/// `volatility^2 * dt` lands within `+-1.5 * dx`.
///
/// Monotonically decreasing in `dt`: a longer step spreads more mass past
/// the neighbour cells. Substituting a solved step size back into this
/// function recovers the containment confidence.
pub fn containment_mass(dx: f64, volatility: f64, dt: f64) -> f64 {
    erf(1.5 * dx / (volatility * (2.0 * dt).sqrt()))
}

/// Containment equation as an argmin problem, with its root where the
/// contained mass equals the confidence level.
struct Containment {
    dx: f64,
    volatility: f64,
    confidence: f64,
}

impl CostFunction for Containment {
    type Param = f64;
    type Output = f64;

    fn cost(&self, dt: &Self::Param) -> Result<Self::Output, Error> {
        Ok(containment_mass(self.dx, self.volatility, *dt) - self.confidence)
    }
}

/// Solves for the unique positive `dt` satisfying the containment criterion.
///
/// `volatility` is the dispersion scale of the process; for non-constant
/// coefficients pass the largest volatility on the grid (see
/// [`crate::process::Diffusion1D::max_volatility`]).
///
/// # Errors
/// Configuration errors for non-positive `dx` or `volatility`, or a
/// `confidence` outside `(0, 1)`. [`DiffchainError::UnsolvableStepSize`] if
/// no positive root can be bracketed; there is no meaningful step size to
/// proceed with, so callers must abort the run.
pub fn solve_dt(dx: f64, volatility: f64, confidence: f64) -> Result<f64, DiffchainError> {
    if !dx.is_finite() || dx <= 0.0 {
        return Err(DiffchainError::InvalidSpacing(dx));
    }
    if !volatility.is_finite() || volatility <= 0.0 {
        return Err(DiffchainError::InvalidVolatility(volatility));
    }
    if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
        return Err(DiffchainError::InvalidConfidence(confidence));
    }

    // Bracket the root: the contained mass tends to 1 as dt -> 0 and to 0
    // as dt -> inf, so expand the upper bound until the mass drops below
    // the confidence level.
    let scale = (dx / volatility).powi(2);
    let lo = 1e-9 * scale;
    let mut hi = scale;
    let mut doublings = 0;
    while containment_mass(dx, volatility, hi) > confidence {
        hi *= 2.0;
        doublings += 1;
        if doublings > MAX_BRACKET_DOUBLINGS {
            return Err(DiffchainError::UnsolvableStepSize { dx, confidence });
        }
    }
    if containment_mass(dx, volatility, lo) < confidence {
        return Err(DiffchainError::UnsolvableStepSize { dx, confidence });
    }

    let problem = Containment {
        dx,
        volatility,
        confidence,
    };
    let solver = BrentRoot::new(lo, hi, BRENT_TOL);
    let res = Executor::new(problem, solver)
        .configure(|state| state.max_iters(200))
        .run()
        .map_err(|e| DiffchainError::RootFinding(e.to_string()))?;

    let dt = res
        .state
        .best_param
        .ok_or_else(|| DiffchainError::RootFinding("no root returned".to_string()))?;
    tracing::debug!(dx, volatility, confidence, dt, "solved containment step size");
    Ok(dt)
}
