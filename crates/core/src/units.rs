//! Conversion factors into atomic units
//!
//! Everything in gridio is held in atomic units. Multiply a value in a given
//! unit by the matching constant to convert it, and divide to go back. e.g.
//!
//! ```rust
//! # use gridio_core::units::{ANGSTROM, ELECTRONVOLT};
//! let length_bohr = 10.0 * ANGSTROM;
//! assert!((length_bohr / ANGSTROM - 10.0).abs() < 1e-12);
//!
//! let energy_hartree = -6.5 * ELECTRONVOLT;
//! assert!((energy_hartree / ELECTRONVOLT + 6.5).abs() < 1e-12);
//! ```
//!
//! Values are CODATA 2014.

/// Bohr radius, the atomic unit of length
pub const BOHR: f64 = 1.0;

/// Angstrom in Bohr
pub const ANGSTROM: f64 = 1.0 / 0.529_177_210_67;

/// Hartree, the atomic unit of energy
pub const HARTREE: f64 = 1.0;

/// Electronvolt in Hartree
pub const ELECTRONVOLT: f64 = 1.0 / 27.211_386_02;

/// Conversion factors used by the readers and writers
///
/// The defaults are the module constants. Readers hold their own copy so
/// that alternative factors can be injected, for example to keep data in the
/// native file units.
///
/// ```rust
/// # use gridio_core::units::{Units, ANGSTROM};
/// let units = Units::default();
/// assert_eq!(units.angstrom, ANGSTROM);
///
/// // Keep everything in Angstrom and eV instead
/// let native = Units::identity();
/// assert_eq!(native.angstrom, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Units {
    /// Value of one Angstrom in the internal length unit
    pub angstrom: f64,
    /// Value of one electronvolt in the internal energy unit
    pub electronvolt: f64,
}

impl Units {
    /// No conversion at all, values are kept in file units
    pub fn identity() -> Self {
        Self {
            angstrom: 1.0,
            electronvolt: 1.0,
        }
    }
}

impl Default for Units {
    fn default() -> Self {
        Self {
            angstrom: ANGSTROM,
            electronvolt: ELECTRONVOLT,
        }
    }
}
