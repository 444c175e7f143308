//! Error types for gridgroup-core
//!
//! Provides a unified error type for constructor-level validation in the
//! core crate. The hot search path never produces these: malformed grids
//! (unstable dimensions, non-reflexive equivalence) are documented
//! preconditions, not runtime checks.

use thiserror::Error;

/// Gridgroup core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Coordinate outside the grid
    #[error("coordinate out of bounds: ({x}, {y})")]
    OutOfBounds { x: u32, y: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
