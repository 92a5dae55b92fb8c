//! Per-cell transition kernels.
//!
//! A kernel maps one interior grid state to its one-step transition
//! distribution, given the solved step size. Boundary states never reach a
//! kernel: the assembler in [`crate::table`] intercepts them with the
//! absorbing distribution.

pub mod one_dim;
pub mod two_dim;

/// One-step transition distribution of a 1-D grid state, in emission order
/// `(left, right, stay)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition1D {
    pub left: f64,
    pub right: f64,
    pub stay: f64,
}

impl Transition1D {
    /// Absorbing distribution: all mass on "stay".
    pub const fn absorbing() -> Self {
        Self {
            left: 0.0,
            right: 0.0,
            stay: 1.0,
        }
    }

    /// Probabilities in emission order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.left, self.right, self.stay]
    }

    /// Total probability mass of the row.
    pub fn sum(&self) -> f64 {
        self.left + self.right + self.stay
    }
}

/// One-step transition distribution of a 2-D grid state, in emission order
/// `(left, right, up, down, stay)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition2D {
    pub left: f64,
    pub right: f64,
    pub up: f64,
    pub down: f64,
    pub stay: f64,
}

impl Transition2D {
    /// Absorbing distribution: all mass on "stay".
    pub const fn absorbing() -> Self {
        Self {
            left: 0.0,
            right: 0.0,
            up: 0.0,
            down: 0.0,
            stay: 1.0,
        }
    }

    /// Probabilities in emission order.
    pub fn as_array(&self) -> [f64; 5] {
        [self.left, self.right, self.up, self.down, self.stay]
    }

    /// Total probability mass of the row.
    pub fn sum(&self) -> f64 {
        self.left + self.right + self.up + self.down + self.stay
    }
}
