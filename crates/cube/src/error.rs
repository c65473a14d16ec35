//! Result and Error types for gridio-cube

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, cube::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `gridio-cube`
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

    /// Fewer grid values than the header promises
    #[error("unexpected number of grid values (expected {expected:?}, found {found:?})")]
    UnexpectedNumberOfValues { expected: usize, found: usize },

    /// Writing a cube file needs volumetric data
    #[error("no grid data to write")]
    MissingGridData,
}
