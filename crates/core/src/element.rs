//! Periodic table lookup between element symbols and atomic numbers

// crate modules
use crate::error::{Error, Result};

// gridio modules
use gridio_format::symbol_case;

/// Element symbols ordered by atomic number, starting from hydrogen
const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// A chemical element, identified by its atomic number
///
/// The `FromStr` trait is implemented so that symbols from structure files can
/// be parsed directly. Case is ignored, and anything after a `_` or `/` is
/// dropped so that VASP potential labels resolve to their element.
///
/// ```rust
/// # use gridio_core::Element;
/// # use std::str::FromStr;
/// assert_eq!(Element::from_str("O").unwrap().number(), 8);
/// assert_eq!(Element::from_str("fe").unwrap().number(), 26);
/// assert_eq!(Element::from_str("Fe_pv").unwrap().number(), 26);
/// assert_eq!(Element::from_str("H/3a3b2c").unwrap().number(), 1);
/// ```
///
/// Of course, the reverse is also available if the symbol is required:
///
/// ```rust
/// # use gridio_core::Element;
/// assert_eq!(Element::from_number(8).unwrap().symbol(), "O");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element(u32);

impl Element {
    /// Look up an element by atomic number
    pub fn from_number(number: u32) -> Result<Self> {
        match number {
            1..=118 => Ok(Self(number)),
            _ => Err(Error::UnknownAtomicNumber(number)),
        }
    }

    /// Atomic number
    pub fn number(&self) -> u32 {
        self.0
    }

    /// Element symbol with standard capitalisation
    pub fn symbol(&self) -> &'static str {
        SYMBOLS[self.0 as usize - 1]
    }
}

impl std::str::FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let label = s
            .trim()
            .split(['_', '/'])
            .next()
            .unwrap_or_default();

        let symbol = symbol_case(label);
        SYMBOLS
            .iter()
            .position(|&known| known == symbol)
            .map(|i| Self(i as u32 + 1))
            .ok_or_else(|| Error::UnknownElement(s.to_string()))
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn table_bounds() {
        assert_eq!(Element::from_number(1).unwrap().symbol(), "H");
        assert_eq!(Element::from_number(118).unwrap().symbol(), "Og");
        assert_eq!(Element::from_number(0), Err(Error::UnknownAtomicNumber(0)));
        assert_eq!(Element::from_number(119), Err(Error::UnknownAtomicNumber(119)));
    }

    #[test]
    fn symbols_round_trip() {
        for number in 1..=118 {
            let element = Element::from_number(number).unwrap();
            assert_eq!(Element::from_str(element.symbol()).unwrap(), element);
        }
    }

    #[test]
    fn unknown_symbols() {
        assert!(Element::from_str("Xx").is_err());
        assert!(Element::from_str("").is_err());
        assert!(Element::from_str("12").is_err());
    }
}
