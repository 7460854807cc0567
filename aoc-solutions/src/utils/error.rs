//! Errors shared by the grid, graph and search utilities.

use thiserror::Error;

use super::geom::Point2;

/// Failure of a single utility call. None of these are retried; the object
/// involved is either fully built or not built at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Grid constructed with a zero width or height, or ragged rows
    #[error("invalid grid dimension {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Access outside `[0, width) x [0, height)`
    #[error("point {point} outside {width}x{height} grid")]
    OutOfBounds {
        point: Point2,
        width: usize,
        height: usize,
    },

    /// Search exhausted its frontier without reaching the goal
    #[error("no path found")]
    NoPathFound,

    /// Puzzle input could not be parsed
    #[error("malformed input (line {line}): {reason}")]
    MalformedInput { line: usize, reason: String },
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for aoc_solver::ParseError {
    fn from(error: Error) -> Self {
        aoc_solver::ParseError::InvalidFormat(error.to_string())
    }
}

impl From<Error> for aoc_solver::SolveError {
    fn from(error: Error) -> Self {
        aoc_solver::SolveError::failed(error)
    }
}
