//! Module for reading and writing Gaussian cube files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod parsers;
mod reader;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use reader::{read_cube, CubeReader};

#[doc(inline)]
pub use writer::write_cube;

#[doc(inline)]
pub use error::{Error, Result};
