//! Error types for bridge fragility evaluation

use thiserror::Error;

/// Fatal errors raised while loading inputs or configuring a run.
///
/// Per-bridge problems (malformed inventory lines, out-of-bounds or
/// unlocatable coordinates) are never reported here; they are recorded on
/// the bridge itself as a [`BridgeStatus`](crate::bridge::BridgeStatus).
#[derive(Error, Debug)]
pub enum FragilityError {
    #[error(
        "Only {used} usable grid points out of {read} read (need at least 4) - \
         the grid may have too few points or the wrong number of columns"
    )]
    InsufficientGrid { used: usize, read: usize },

    #[error("Grid row at latitude {latitude} has {found} points, expected {expected}")]
    NonUniformRows {
        latitude: f64,
        expected: usize,
        found: usize,
    },

    #[error("Invalid grid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid map bounds: {0}")]
    InvalidBounds(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for fragility operations
pub type FragilityResult<T> = Result<T, FragilityError>;
