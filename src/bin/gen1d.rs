//! Generates the 1-D transition table of a drift-diffusion process.
//!
//! Usage: `gen1d <length> <states>`. The table is written to stdout in the
//! flat text format the plotting and chain-simulation tools consume;
//! progress and logs go to stderr.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use diffchain::{build_1d, solve_dt, Diffusion1D, Grid, CONTAINMENT_CONFIDENCE};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut args = std::env::args().skip(1);
    let length: f64 = args
        .next()
        .context("usage: gen1d <length> <states>")?
        .parse()
        .context("domain length must be a real number")?;
    let states: usize = args
        .next()
        .context("usage: gen1d <length> <states>")?
        .parse()
        .context("grid resolution must be an integer")?;

    let grid = Grid::new(length, states)?;
    let process = Diffusion1D::standard();
    let dt = solve_dt(grid.dx(), process.max_volatility(&grid), CONTAINMENT_CONFIDENCE)?;
    tracing::info!(dx = grid.dx(), dt, "solved step size");

    let table = build_1d(&grid, &process, dt)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    table.write(&mut out)?;
    out.flush()?;
    Ok(())
}
