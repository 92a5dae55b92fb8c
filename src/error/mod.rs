use thiserror::Error;

/// Errors produced while discretizing a diffusion process.
#[derive(Error, Debug)]
pub enum DiffchainError {
    /// The continuous domain must have positive length
    #[error("Domain length must be positive, got {0}")]
    InvalidDomainLength(f64),

    /// The grid needs at least two states per axis
    #[error("Grid resolution must be at least 2, got {0}")]
    InvalidResolution(usize),

    /// Grid spacing handed to the step-size solver was not positive
    #[error("Grid spacing must be positive, got {0}")]
    InvalidSpacing(f64),

    /// The step-size equation needs a strictly positive volatility scale
    #[error("Volatility must be strictly positive, got {0}")]
    InvalidVolatility(f64),

    /// Containment confidence must lie strictly between 0 and 1
    #[error("Containment confidence must be in (0, 1), got {0}")]
    InvalidConfidence(f64),

    /// Monte Carlo estimation needs at least one sample
    #[error("Monte Carlo sample count must be at least 1")]
    InvalidSampleCount,

    /// No positive time step satisfies the containment criterion
    #[error("No positive time step contains {confidence} of the step mass within 1.5 * {dx}")]
    UnsolvableStepSize { dx: f64, confidence: f64 },

    /// The root-finding iteration itself failed
    #[error("Step-size root finding failed: {0}")]
    RootFinding(String),

    /// A transition step density could not be constructed
    #[error("Degenerate transition density: {0}")]
    DegenerateDensity(String),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
