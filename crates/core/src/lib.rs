//! Shared data model for the gridio readers and writers
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod element;
mod error;
mod grid;
mod indexing;
mod molecular;

pub mod text;
pub mod units;

// Inline anything important for a nice public API
#[doc(inline)]
pub use element::Element;

#[doc(inline)]
pub use grid::UniformGrid;

#[doc(inline)]
pub use indexing::{ravel, unravel};

#[doc(inline)]
pub use molecular::{to_cartesian, MolecularGrid};

#[doc(inline)]
pub use units::Units;

#[doc(inline)]
pub use error::{Error, Result};
