//! Simulation errors

use thiserror::Error;

/// Crate result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or running a simulation.
///
/// Everything except [`Error::InvalidInstruction`] and [`Error::Io`] is a
/// configuration error, reported before any robot moves.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input is empty: expected grid bounds on the first line")]
    EmptyInput,

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("grid bound {value} exceeds the maximum of {max}")]
    BoundTooLarge { value: i32, max: i32 },

    #[error("input has {lines} lines, more than the limit of {max}")]
    TooManyLines { lines: usize, max: usize },

    #[error("line {line}: robot has no instruction line")]
    MissingInstructions { line: usize },

    #[error("robot {robot} starts at ({x}, {y}), outside the grid")]
    RobotOutOfBounds { robot: usize, x: i32, y: i32 },

    #[error("invalid orientation {0:?}, expected one of N, E, S, W")]
    InvalidOrientation(String),

    #[error("robot {robot}: invalid instruction {found:?} at position {position}")]
    InvalidInstruction {
        robot: usize,
        position: usize,
        found: char,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
