//! Generates the 2-D transition tensor of a drift-diffusion process.
//!
//! Usage: `gen2d <length> <states> [samples] [seed]`. The tensor is written
//! to stdout in the flat text format the plotting and chain-simulation
//! tools consume; progress and logs go to stderr. The optional sample count
//! trades run time against Monte Carlo variance, and the optional seed
//! selects the sample streams.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use diffchain::{
    build_2d, solve_dt, Diffusion2D, Grid, MonteCarloOptions, CONTAINMENT_CONFIDENCE,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut args = std::env::args().skip(1);
    let length: f64 = args
        .next()
        .context("usage: gen2d <length> <states> [samples] [seed]")?
        .parse()
        .context("domain length must be a real number")?;
    let states: usize = args
        .next()
        .context("usage: gen2d <length> <states> [samples] [seed]")?
        .parse()
        .context("grid resolution must be an integer")?;

    let mut options = MonteCarloOptions::default();
    if let Some(samples) = args.next() {
        options = options.with_samples(samples.parse().context("sample count must be an integer")?);
    }
    if let Some(seed) = args.next() {
        options = options.with_seed(seed.parse().context("seed must be an integer")?);
    }

    let grid = Grid::new(length, states)?;
    let process = Diffusion2D::standard();
    let dt = solve_dt(grid.dx(), process.max_volatility(&grid), CONTAINMENT_CONFIDENCE)?;
    tracing::info!(
        dx = grid.dx(),
        dt,
        samples = options.samples,
        "solved step size"
    );

    let table = build_2d(&grid, &process, dt, &options)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    table.write(&mut out)?;
    out.flush()?;
    Ok(())
}
