//! Module for reading VASP structure and grid files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod grid;
mod parsers;
mod poscar;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use poscar::{read_poscar, VaspReader};

#[doc(inline)]
pub use grid::{read_chgcar, read_locpot, GridKind};

#[doc(inline)]
pub use writer::write_poscar;

#[doc(inline)]
pub use error::{Error, Result};
