//! Result and Error types for gridio-vasp

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, vasp::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `gridio-vasp`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Invariant or lookup failure from the shared data model
    #[error("invalid molecular grid data")]
    Core(#[from] gridio_core::Error),

    /// Malformed content at a known line of a file
    #[error("failed to parse {path:?} at line {line}: {details}")]
    Format {
        path: PathBuf,
        line: usize,
        details: String,
    },

    /// Fewer grid values than the shape line promises
    #[error("unexpected number of grid values (expected {expected:?}, found {found:?})")]
    UnexpectedNumberOfValues { expected: usize, found: usize },

    /// Coordinate mode line is neither Direct nor Cartesian
    #[error("unknown coordinate mode \"{0}\"")]
    UnknownCoordinateMode(String),

    /// Species label that does not resolve to an element
    #[error("unknown species \"{0}\"")]
    UnknownSpecies(String),

    /// POSCAR output needs atoms of each species next to each other
    #[error("atoms must be grouped by species")]
    NotGroupedBySpecies,
}
