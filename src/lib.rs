//! `gridio` is a semi-modular toolkit of readers and writers for volumetric
//! and structural quantum chemistry files
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use gridio_core as core;

#[doc(inline)]
pub use gridio_format as format;

#[cfg(feature = "cube")]
#[cfg_attr(docsrs, doc(cfg(feature = "cube")))]
#[doc(inline)]
pub use gridio_cube as cube;

#[cfg(feature = "vasp")]
#[cfg_attr(docsrs, doc(cfg(feature = "vasp")))]
#[doc(inline)]
pub use gridio_vasp as vasp;
