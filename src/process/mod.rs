//! Drift and volatility coefficients of the diffusion process.
//!
//! The coefficients are plain functions of time and position, so the same
//! pipeline handles non-constant-coefficient diffusions. [`Diffusion1D::standard`]
//! and [`Diffusion2D::standard`] give the heat-equation case: zero drift,
//! unit volatility.

use crate::grid::Grid;

/// Drift coefficient `b(t, x)` of a one-dimensional diffusion.
pub type Drift1D = fn(t: f64, x: f64) -> f64;

/// Volatility coefficient `a(t, x)` of a one-dimensional diffusion.
pub type Volatility1D = fn(t: f64, x: f64) -> f64;

/// Drift coefficient `b(t, x, y)`, one component per axis.
pub type Drift2D = fn(t: f64, x: f64, y: f64) -> [f64; 2];

/// Volatility coefficient `a(t, x, y)`, one component per axis.
///
/// The step density has diagonal covariance: the components dilate the two
/// axes independently.
pub type Volatility2D = fn(t: f64, x: f64, y: f64) -> [f64; 2];

/// Coefficient bundle of a one-dimensional diffusion process.
#[derive(Clone, Copy)]
pub struct Diffusion1D {
    pub drift: Drift1D,
    pub volatility: Volatility1D,
}

impl Diffusion1D {
    pub fn new(drift: Drift1D, volatility: Volatility1D) -> Self {
        Self { drift, volatility }
    }

    /// Standard Brownian motion: zero drift, unit volatility.
    pub fn standard() -> Self {
        Self::new(|_t, _x| 0.0, |_t, _x| 1.0)
    }

    /// Largest volatility magnitude over the grid states at `t = 0`.
    ///
    /// The step size is solved once per grid, so with non-constant
    /// coefficients the largest volatility is the binding constraint for
    /// the containment criterion.
    pub fn max_volatility(&self, grid: &Grid) -> f64 {
        (0..grid.states())
            .map(|i| (self.volatility)(0.0, grid.position(i)).abs())
            .fold(0.0, f64::max)
    }
}

/// Coefficient bundle of a two-dimensional diffusion process.
#[derive(Clone, Copy)]
pub struct Diffusion2D {
    pub drift: Drift2D,
    pub volatility: Volatility2D,
}

impl Diffusion2D {
    pub fn new(drift: Drift2D, volatility: Volatility2D) -> Self {
        Self { drift, volatility }
    }

    /// Standard planar Brownian motion: zero drift, unit volatility on
    /// both axes.
    pub fn standard() -> Self {
        Self::new(|_t, _x, _y| [0.0, 0.0], |_t, _x, _y| [1.0, 1.0])
    }

    /// Largest volatility magnitude over the grid plane at `t = 0`.
    pub fn max_volatility(&self, grid: &Grid) -> f64 {
        let mut max = 0.0f64;
        for i in 0..grid.states() {
            for j in 0..grid.states() {
                let a = (self.volatility)(0.0, grid.position(i), grid.position(j));
                max = max.max(a[0].abs()).max(a[1].abs());
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_coefficients_are_constant() {
        let process = Diffusion1D::standard();
        assert_eq!((process.drift)(0.0, 0.3), 0.0);
        assert_eq!((process.volatility)(1.0, -2.0), 1.0);
    }

    #[test]
    fn max_volatility_scans_the_grid() {
        let grid = Grid::new(1.0, 10).unwrap();
        let process = Diffusion1D::new(|_t, _x| 0.0, |_t, x| 1.0 + x);
        // Largest position is 0.9, so the peak volatility is 1.9.
        assert!((process.max_volatility(&grid) - 1.9).abs() < 1e-12);

        let standard = Diffusion2D::standard();
        assert_eq!(standard.max_volatility(&grid), 1.0);
    }
}
