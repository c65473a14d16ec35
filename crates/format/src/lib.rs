//! Common utility for extended `std` type formatting
//!
//! These are left public for convenience.
//!
//! For example, capitalising an element symbol or writing scientific numbers
//! the way Fortran codes expect them are useful everywhere.

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait NumFormat {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use gridio_format::NumFormat;
    /// let number = -1.0;
    /// assert_eq!(number.sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((1.0).sci(5, 2), "1.00000e+00".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;

    /// Fortran `ES` style scientific formatting
    ///
    /// Same as [NumFormat::sci()] with an upper case `E` and a two digit
    /// exponent, matching what C `%E` and most Fortran codes write.
    ///
    /// ```rust
    /// # use gridio_format::NumFormat;
    /// assert_eq!((9.49232e-06).fortran(5), "9.49232E-06".to_string());
    /// assert_eq!((-1234.5).fortran(3), "-1.234E+03".to_string());
    /// ```
    fn fortran(&self, precision: usize) -> String;
}

impl<T: std::fmt::LowerExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        // Non-finite values have no exponent to fix up
        let Some(split) = num.find('e') else {
            return num;
        };
        let exp = num.split_off(split);
        // Make sure the exponent is signed
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        // Pad the exponent with zeros if needed and put it back on the number
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }

    fn fortran(&self, precision: usize) -> String {
        self.sci(precision, 2).replace('e', "E")
    }
}

/// Capilalises the first letter in a string
///
/// ```rust
/// # use gridio_format::capitalise;
/// assert_eq!(capitalise("test string"), "Test string".to_string());
/// ```
pub fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
        None => String::new(),
    }
}

/// Normalises the case of an element symbol
///
/// Everything is lower cased before the first letter is capitalised, so any
/// of `FE`, `fe`, or `Fe` become `Fe`.
///
/// ```rust
/// # use gridio_format::symbol_case;
/// assert_eq!(symbol_case("FE"), "Fe".to_string());
/// assert_eq!(symbol_case("o"), "O".to_string());
/// ```
pub fn symbol_case(s: &str) -> String {
    capitalise(&s.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sci_handles_non_finite() {
        assert_eq!(f64::NAN.sci(5, 2), "NaN");
        assert_eq!(f64::INFINITY.fortran(5), "inf");
    }

    #[test]
    fn fortran_exponent_padding() {
        assert_eq!((1.0e-100).fortran(2), "1.00E-100");
        assert_eq!((0.0).fortran(5), "0.00000E+00");
        assert_eq!((2.09856e-04).fortran(5), "2.09856E-04");
    }
}
