//! Error types for the driftfield core.

use thiserror::Error;

/// Errors produced by simulation configuration and setup.
///
/// No per-tick operation fails: out-of-bounds lookups return a neutral
/// force and curve queries clamp. Everything here surfaces at construction
/// or resize time.
#[derive(Debug, Error)]
pub enum SimError {
    /// The area is too small for the flow grid: a dimension is non-positive
    /// or the cell size yields zero columns or rows.
    #[error(
        "degenerate area: {width}x{height} with cell size {cell_size} yields an empty flow grid"
    )]
    DegenerateArea {
        width: f64,
        height: f64,
        cell_size: f64,
    },

    /// Width or height was zero when creating a pixel surface.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The configured particle population was empty.
    #[error("population must contain at least one particle")]
    EmptyPopulation,

    /// A curve family name was not recognized.
    #[error("unknown curve family: {0}")]
    UnknownCurve(String),

    /// An I/O error while writing a snapshot.
    #[error("{0}")]
    Io(String),
}
