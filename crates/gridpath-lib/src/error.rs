use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Cell;

/// Convenient result alias for the gridpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of a search a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::Target => "target",
        })
    }
}

/// Top-level library error type.
///
/// Unreachable targets and undersized output buffers are search outcomes, not
/// errors; see [`crate::PathOutcome`].
#[derive(Debug, Error)]
pub enum Error {
    /// Grid dimensions must both be nonzero.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The cell buffer does not hold exactly `width * height` bytes.
    #[error("map buffer holds {actual} cells but the grid needs {expected}")]
    MapSizeMismatch { expected: usize, actual: usize },

    /// A coordinate lies outside the grid.
    #[error("{role} cell {cell} lies outside the {width}x{height} grid")]
    OutOfBounds {
        role: Endpoint,
        cell: Cell,
        width: usize,
        height: usize,
    },

    /// The start or target cell is a wall.
    #[error("{role} cell {cell} is not traversable")]
    Blocked { role: Endpoint, cell: Cell },

    /// A configured search limit (pop budget or deadline) was reached.
    #[error("search interrupted after {pops} frontier pops")]
    SearchInterrupted { pops: usize },

    /// A map file row has a different width from the first row.
    #[error("map row {line} has width {actual}, expected {expected}")]
    RaggedMap {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// The map file contained no rows.
    #[error("map contains no rows")]
    EmptyMap,

    /// A start or target marker appears more than once.
    #[error("marker '{marker}' appears more than once (again on line {line})")]
    DuplicateMarker { marker: char, line: usize },

    /// The map defines no marker for an endpoint and none was supplied.
    #[error("no {role} cell was given and the map has no marker for it")]
    MissingEndpoint { role: Endpoint },

    /// Raised when a map file cannot be read.
    #[error("failed to read map file {path}: {source}")]
    MapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
