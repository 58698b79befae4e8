use std::io;
use thiserror::Error;

/// Failures raised by the simulation core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Cell access outside [0, width) x [0, height)
    #[error("cell ({x}, {y}) is outside the {width}x{height} tape")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Width or height of zero
    #[error("tape dimensions must be greater than 0 (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },
    /// Cell storage for the tape cannot be allocated
    #[error("a {width}x{height} tape is too large to allocate")]
    TooLarge { width: u32, height: u32 },
    /// Ant placed outside the tape at construction
    #[error("initial ant position ({x}, {y}) is outside the {width}x{height} tape")]
    InvalidInitialPosition {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
}

/// Failures while reading an initialization or state file
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A required field was not present
    #[error("malformed line {line} ({expected}): missing {field}")]
    MissingField {
        line: usize,
        expected: &'static str,
        field: &'static str,
    },
    /// A field was present but not a valid number
    #[error("malformed line {line} ({expected}): invalid {field} '{value}'")]
    InvalidNumber {
        line: usize,
        expected: &'static str,
        field: &'static str,
        value: String,
    },
    /// Orientation code outside 0..=3
    #[error("invalid orientation {0} (must be 0 to 3)")]
    InvalidOrientation(i64),
    /// Width or height of zero
    #[error("tape dimensions must be greater than 0 (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Top-level error for the library and binary
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Simulation(#[from] SimError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
