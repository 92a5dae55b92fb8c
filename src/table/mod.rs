//! Grid assembly and emission of the transition tensor.
//!
//! Every cell's distribution depends only on its own coordinates and the
//! shared step size, so assembly is parallelized across cells with rayon.
//! The ordered parallel collect reassembles rows in canonical row-major
//! order regardless of which worker finishes first; output ordering is a
//! correctness requirement for the downstream consumers, not a convenience.
//!
//! Monte Carlo cells draw from a per-cell [`StdRng`] seeded from the run
//! seed and the cell index, so runs are reproducible and no random state is
//! shared between workers.

use std::io::Write;

use indicatif::ProgressBar;
use ndarray::{Array2, Array3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::error::DiffchainError;
use crate::grid::Grid;
use crate::kernel::two_dim::DEFAULT_SAMPLES;
use crate::kernel::{one_dim, two_dim, Transition1D, Transition2D};
use crate::process::{Diffusion1D, Diffusion2D};

/// Monte Carlo settings for the two-dimensional assembler.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloOptions {
    /// Samples drawn per interior cell. Directional estimates carry a
    /// standard error of `O(1 / sqrt(samples))`.
    pub samples: usize,
    /// Base seed of the per-cell sample streams.
    pub seed: u64,
}

impl Default for MonteCarloOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: 0,
        }
    }
}

impl MonteCarloOptions {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Fully assembled 1-D transition table: one `(left, right, stay)` row per
/// state. Immutable once built.
#[derive(Debug, Clone)]
pub struct TransitionTable1D {
    grid: Grid,
    dt: f64,
    rows: Array2<f64>,
}

impl TransitionTable1D {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Transition distribution of state `i`.
    pub fn row(&self, i: usize) -> Transition1D {
        Transition1D {
            left: self.rows[[i, 0]],
            right: self.rows[[i, 1]],
            stay: self.rows[[i, 2]],
        }
    }

    /// Writes the parameter header followed by one probability row per
    /// state, in state order.
    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), DiffchainError> {
        writeln!(w, "{}", self.grid.length())?;
        writeln!(w, "{}", self.grid.states())?;
        writeln!(w, "{}", self.grid.dx())?;
        writeln!(w, "{}", self.dt)?;
        for row in self.rows.rows() {
            writeln!(w, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

/// Fully assembled 2-D transition tensor: one
/// `(left, right, up, down, stay)` row per state `(i, j)`. Immutable once
/// built.
#[derive(Debug, Clone)]
pub struct TransitionTable2D {
    grid: Grid,
    dt: f64,
    tensor: Array3<f64>,
}

impl TransitionTable2D {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Transition distribution of state `(i, j)`.
    pub fn row(&self, i: usize, j: usize) -> Transition2D {
        Transition2D {
            left: self.tensor[[i, j, 0]],
            right: self.tensor[[i, j, 1]],
            up: self.tensor[[i, j, 2]],
            down: self.tensor[[i, j, 3]],
            stay: self.tensor[[i, j, 4]],
        }
    }

    /// Writes the parameter header followed by one probability row per
    /// state, row-major: all `j` within each `i`.
    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), DiffchainError> {
        writeln!(w, "{}", self.grid.length())?;
        writeln!(w, "{}", self.grid.states())?;
        writeln!(w, "{}", self.grid.dx())?;
        writeln!(w, "{}", self.dt)?;
        for i in 0..self.grid.states() {
            for j in 0..self.grid.states() {
                let row = self.row(i, j);
                writeln!(
                    w,
                    "{} {} {} {} {}",
                    row.left, row.right, row.up, row.down, row.stay
                )?;
            }
        }
        Ok(())
    }
}

/// Assembles the full 1-D table: absorbing distribution on the two boundary
/// states, closed-form kernel everywhere else.
pub fn build_1d(
    grid: &Grid,
    process: &Diffusion1D,
    dt: f64,
) -> Result<TransitionTable1D, DiffchainError> {
    let n = grid.states();
    let progress = ProgressBar::new(n as u64);

    let rows = (0..n)
        .into_par_iter()
        .map(|i| {
            let row = if grid.is_boundary(i) {
                Transition1D::absorbing()
            } else {
                one_dim::transition(grid.position(i), grid.dx(), dt, process)?
            };
            progress.inc(1);
            Ok(row.as_array())
        })
        .collect::<Result<Vec<_>, DiffchainError>>()?;
    progress.finish_and_clear();

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let rows = Array2::from_shape_vec((n, 3), flat)?;
    tracing::debug!(states = n, dt, "assembled 1-D transition table");

    Ok(TransitionTable1D {
        grid: *grid,
        dt,
        rows,
    })
}

/// Assembles the full 2-D tensor: absorbing distribution on the one-cell
/// boundary frame, Monte Carlo kernel on the interior.
pub fn build_2d(
    grid: &Grid,
    process: &Diffusion2D,
    dt: f64,
    options: &MonteCarloOptions,
) -> Result<TransitionTable2D, DiffchainError> {
    if options.samples == 0 {
        return Err(DiffchainError::InvalidSampleCount);
    }
    let n = grid.states();
    let cells = n * n;
    let progress = ProgressBar::new(cells as u64);

    let rows = (0..cells)
        .into_par_iter()
        .map(|idx| {
            let (i, j) = (idx / n, idx % n);
            let row = if grid.is_boundary(i) || grid.is_boundary(j) {
                Transition2D::absorbing()
            } else {
                // Independent stream per cell keeps parallel sampling
                // unbiased and the run reproducible. The SplitMix-style
                // multiply keeps nearby base seeds from sharing streams
                // shifted by one cell.
                let stream = options.seed ^ (idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                let mut rng = StdRng::seed_from_u64(stream);
                two_dim::transition(
                    grid.position(i),
                    grid.position(j),
                    grid.dx(),
                    dt,
                    process,
                    options.samples,
                    &mut rng,
                )?
            };
            progress.inc(1);
            Ok(row.as_array())
        })
        .collect::<Result<Vec<_>, DiffchainError>>()?;
    progress.finish_and_clear();

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let tensor = Array3::from_shape_vec((n, n, 5), flat)?;
    tracing::debug!(
        states = n,
        dt,
        samples = options.samples,
        "assembled 2-D transition tensor"
    );

    Ok(TransitionTable2D {
        grid: *grid,
        dt,
        tensor,
    })
}
