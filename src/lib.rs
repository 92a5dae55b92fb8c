//! Discretizes a continuous drift-diffusion process into a discrete-space,
//! discrete-time Markov chain on a uniform grid, producing the transition
//! probability table consumed by downstream simulators and plotting tools.
//!
//! The pipeline has four stages, composed leaf-first:
//!
//! 1. [`solver`] derives a step size `dt` from the grid spacing so that a
//!    one-step displacement stays within the neighbour cells with 95%
//!    probability.
//! 2. [`kernel::one_dim`] computes closed-form left/right/stay
//!    probabilities from the Gaussian CDF.
//! 3. [`kernel::two_dim`] estimates left/right/up/down/stay probabilities
//!    by Monte Carlo sampling of the bivariate step density.
//! 4. [`table`] walks the grid, applies the absorbing boundary policy,
//!    delegates interior cells to the kernel and emits the full tensor.
//!
//! # Example
//!
//! ```
//! use diffchain::{build_1d, solve_dt, Diffusion1D, Grid, CONTAINMENT_CONFIDENCE};
//!
//! let grid = Grid::new(1.0, 10)?;
//! let process = Diffusion1D::standard();
//! let dt = solve_dt(grid.dx(), process.max_volatility(&grid), CONTAINMENT_CONFIDENCE)?;
//! let table = build_1d(&grid, &process, dt)?;
//!
//! // Boundary states are absorbing; interior rows are normalized.
//! assert_eq!(table.row(0).stay, 1.0);
//! assert!((table.row(5).sum() - 1.0).abs() < 1e-6);
//! # Ok::<(), diffchain::DiffchainError>(())
//! ```

pub mod error;
pub mod grid;
pub mod kernel;
pub mod process;
pub mod solver;
pub mod table;

pub use error::DiffchainError;
pub use grid::Grid;
pub use kernel::{Transition1D, Transition2D};
pub use process::{Diffusion1D, Diffusion2D};
pub use solver::{containment_mass, solve_dt, CONTAINMENT_CONFIDENCE};
pub use table::{build_1d, build_2d, MonteCarloOptions, TransitionTable1D, TransitionTable2D};

pub mod prelude {
    pub use crate::error::DiffchainError;
    pub use crate::grid::Grid;
    pub use crate::kernel::{Transition1D, Transition2D};
    pub use crate::process::{Diffusion1D, Diffusion2D};
    pub use crate::solver::{containment_mass, solve_dt, CONTAINMENT_CONFIDENCE};
    pub use crate::table::{
        build_1d, build_2d, MonteCarloOptions, TransitionTable1D, TransitionTable2D,
    };
}
