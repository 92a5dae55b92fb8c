//! Uniform discretization of the continuous domain.

use crate::error::DiffchainError;

/// A uniform grid of `states` points over `[0, L]`.
///
/// In two dimensions the same grid is applied to both axes, so a single
/// `Grid` describes an `n x n` plane. State `i` sits at position `i * dx`
/// with `dx = L / n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    length: f64,
    states: usize,
    dx: f64,
}

impl Grid {
    /// Validates the domain parameters and derives the spacing.
    ///
    /// # Errors
    /// Returns a configuration error if `length` is not a positive real or
    /// `states < 2`. These are fatal: nothing downstream can run without a
    /// valid grid.
    pub fn new(length: f64, states: usize) -> Result<Self, DiffchainError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(DiffchainError::InvalidDomainLength(length));
        }
        if states < 2 {
            return Err(DiffchainError::InvalidResolution(states));
        }
        Ok(Self {
            length,
            states,
            dx: length / states as f64,
        })
    }

    /// Length of the domain interval.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of states per axis.
    pub fn states(&self) -> usize {
        self.states
    }

    /// Spacing between adjacent states.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Continuous position of state `i`.
    pub fn position(&self, i: usize) -> f64 {
        i as f64 * self.dx
    }

    /// Whether index `i` lies on the absorbing frame.
    ///
    /// The frame is one cell thick on every axis: the first and last state.
    pub fn is_boundary(&self, i: usize) -> bool {
        i == 0 || i == self.states - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn valid_grid_has_expected_spacing() {
        let grid = Grid::new(1.0, 10).unwrap();
        assert_eq!(grid.dx(), 0.1);
        assert_eq!(grid.states(), 10);
        assert_abs_diff_eq!(grid.position(3), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn rejects_single_state_grid() {
        assert!(matches!(
            Grid::new(1.0, 1),
            Err(DiffchainError::InvalidResolution(1))
        ));
    }

    #[test]
    fn rejects_non_positive_length() {
        assert!(matches!(
            Grid::new(0.0, 10),
            Err(DiffchainError::InvalidDomainLength(_))
        ));
        assert!(matches!(
            Grid::new(-2.0, 10),
            Err(DiffchainError::InvalidDomainLength(_))
        ));
        assert!(matches!(
            Grid::new(f64::NAN, 10),
            Err(DiffchainError::InvalidDomainLength(_))
        ));
    }

    #[test]
    fn boundary_is_one_cell_thick() {
        let grid = Grid::new(1.0, 5).unwrap();
        assert!(grid.is_boundary(0));
        assert!(grid.is_boundary(4));
        for i in 1..4 {
            assert!(!grid.is_boundary(i));
        }
    }
}
