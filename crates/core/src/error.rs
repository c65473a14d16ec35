//! Result and Error types for gridio-core

/// Type alias for `Result<T, core::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `gridio-core`
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// Grid extents must all be at least 1, and their product fit in a `usize`
    #[error("invalid grid shape {0:?}, extents must be positive with a countable product")]
    InvalidShape([usize; 3]),

    /// Per-atom arrays disagree on the number of atoms
    #[error("inconsistent length for {field} (expected {expected:?}, found {found:?})")]
    InconsistentLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// Grid data array does not match the grid shape
    #[error("grid data dimensions {found:?} do not match the grid shape {expected:?}")]
    UnexpectedGridDimensions {
        expected: [usize; 3],
        found: [usize; 3],
    },

    /// Cell vectors are non-finite or span no volume
    #[error("cell vectors are degenerate (determinant {determinant})")]
    DegenerateCell { determinant: f64 },

    /// Vectors contain NaN or infinite values
    #[error("non-finite values found in {0}")]
    NonFiniteValues(&'static str),

    /// Token could not be read as a floating point value
    #[error("failed to parse \"{0}\" as a number")]
    InvalidNumber(String),

    /// Symbol not found in the periodic table
    #[error("failed to infer element from \"{0}\"")]
    UnknownElement(String),

    /// Atomic number outside of the periodic table
    #[error("no element with atomic number {0}")]
    UnknownAtomicNumber(u32),
}
