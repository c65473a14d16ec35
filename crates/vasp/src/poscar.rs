//! Read operations for POSCAR structures and the shared structure block

// crate modules
use crate::error::{Error, Result};
use crate::parsers;

// gridio modules
use gridio_core::text::LineCursor;
use gridio_core::{to_cartesian, Element, MolecularGrid, Units};
use gridio_format::f;

// standard library
use std::path::{Path, PathBuf};
use std::str::FromStr;

// external crates
use log::{debug, trace, warn};
use nalgebra::{Matrix3, Vector3};

/// Read a POSCAR (or CONTCAR) structure file
///
/// Returns a result containing the [MolecularGrid] with the structure from
/// the file at `path`. There is no grid data for a POSCAR.
///
/// - `path` - Path to the POSCAR file, can be [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use gridio_vasp::read_poscar;
/// let structure = read_poscar("path/to/POSCAR").unwrap();
/// println!("{} atoms in {:.2} Bohr^3", structure.natom(), structure.volume());
/// ```
pub fn read_poscar<P: AsRef<Path>>(path: P) -> Result<MolecularGrid> {
    VaspReader::new().parse_poscar(path.as_ref())
}

/// A reader for VASP POSCAR, CHGCAR, and LOCPOT files
///
/// The free functions [read_poscar()], [read_chgcar()], and [read_locpot()]
/// use the default atomic units and are the preferred API. The reader exists
/// for when different conversion factors are needed.
///
/// ```rust, no_run
/// # use gridio_vasp::{GridKind, VaspReader};
/// # use gridio_core::Units;
/// # use std::path::Path;
/// // Keep lengths in Angstrom and the potential in eV
/// let reader = VaspReader::with_units(Units::identity());
/// let locpot = reader.parse(Path::new("path/to/LOCPOT"), GridKind::Locpot).unwrap();
/// ```
///
/// [read_chgcar()]: crate::read_chgcar
/// [read_locpot()]: crate::read_locpot
#[derive(Debug, Default, Clone)]
pub struct VaspReader {
    /// Conversion factors into the internal units
    units: Units,
}

impl VaspReader {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Initialise with specific unit conversion factors
    pub fn with_units(units: Units) -> Self {
        Self { units }
    }

    /// Setter for the unit conversion factors
    pub fn set_units(&mut self, units: Units) {
        self.units = units;
    }

    /// Conversion factors used by the reader
    pub fn units(&self) -> &Units {
        &self.units
    }

    /// Parse the structure from a POSCAR file
    pub fn parse_poscar(&self, path: &Path) -> Result<MolecularGrid> {
        let content = std::fs::read_to_string(path)?;
        let mut cursor = LineCursor::new(&content);
        let context = Context { path };

        let structure = self.parse_structure(&mut cursor, &context)?;
        structure.into_molecule()
    }

    /// Parse the structure block shared by POSCAR, CHGCAR, and LOCPOT files
    pub(crate) fn parse_structure(
        &self,
        cursor: &mut LineCursor,
        context: &Context,
    ) -> Result<Structure> {
        let title = context.next_line(cursor, "comment")?.trim_end().to_string();

        let line = context.next_line(cursor, "scale factor")?;
        let (_, scale) = parsers::scale_line(line)
            .map_err(|e| context.format_error(cursor, f!("bad scale factor, {e}")))?;

        let mut lattice = Matrix3::zeros();
        for axis in 0..3 {
            let line = context.next_line(cursor, "lattice vector")?;
            let (_, vector) = parsers::vector_line(line)
                .map_err(|e| context.format_error(cursor, f!("bad lattice vector, {e}")))?;
            lattice.set_row(axis, &Vector3::from(vector).transpose());
        }

        // negative scale factors are the target volume in Angstrom^3
        let scale = if scale < 0.0 {
            let raw_volume = lattice.determinant().abs();
            if raw_volume == 0.0 {
                return Err(gridio_core::Error::DegenerateCell { determinant: 0.0 }.into());
            }
            (-scale / raw_volume).cbrt()
        } else {
            scale
        };

        let length = scale * self.units.angstrom;
        let cell = lattice * length;

        let (symbols, counts) = self.parse_species(cursor, context, &title)?;

        // counts are only trusted as far as there are lines left to hold them
        let remaining = cursor.remainder().lines().count();
        let natom = match counts.iter().try_fold(0usize, |total, &n| total.checked_add(n)) {
            Some(natom) if natom <= remaining => natom,
            _ => {
                return Err(context.format_error(
                    cursor,
                    f!("species counts {counts:?} exceed the {remaining} lines left"),
                ))
            }
        };
        let numbers = species_numbers(&symbols, &counts, natom)?;

        let mut line = context.next_line(cursor, "coordinate mode")?;
        if line.trim_start().starts_with(['S', 's']) {
            trace!("Skipping selective dynamics flags");
            line = context.next_line(cursor, "coordinate mode")?;
        }
        let mode = CoordinateMode::from_str(line)?;

        let mut coordinates = Vec::with_capacity(natom);
        for n in 0..natom {
            let line = cursor.next_line().ok_or_else(|| {
                context.format_error(cursor, f!("expected {natom} atoms, found only {n}"))
            })?;

            let (_, position) = parsers::vector_line(line)
                .map_err(|e| context.format_error(cursor, f!("bad atomic position, {e}")))?;

            let position = Vector3::from(position);
            coordinates.push(match mode {
                CoordinateMode::Direct => to_cartesian(&cell, &position),
                CoordinateMode::Cartesian => position * length,
            });
        }

        debug!(
            "VASP structure: {natom} atoms of {symbols:?}, {mode:?} coordinates, scale {scale}"
        );

        Ok(Structure {
            title,
            numbers,
            coordinates,
            cell,
        })
    }

    /// Species symbols and the number of atoms of each
    fn parse_species(
        &self,
        cursor: &mut LineCursor,
        context: &Context,
        title: &str,
    ) -> Result<(Vec<String>, Vec<usize>)> {
        let line = context.next_line(cursor, "species symbols or counts")?;

        // VASP 4 layout goes straight to the counts
        if let Ok((_, counts)) = parsers::counts_line(line) {
            let symbols = title
                .split_whitespace()
                .take(counts.len())
                .map(String::from)
                .collect::<Vec<String>>();

            if symbols.len() < counts.len() {
                return Err(context.format_error(
                    cursor,
                    f!("no species line, and too few symbols in the comment for {} species", counts.len()),
                ));
            }

            warn!("No species line in {:?}, using {symbols:?} from the comment", context.path);
            return Ok((symbols, counts));
        }

        let symbols = line
            .split_whitespace()
            .map(String::from)
            .collect::<Vec<String>>();

        let line = context.next_line(cursor, "species counts")?;
        let (_, counts) = parsers::counts_line(line)
            .map_err(|e| context.format_error(cursor, f!("bad species counts, {e}")))?;

        if symbols.len() != counts.len() {
            return Err(context.format_error(
                cursor,
                f!("{} species symbols but {} counts", symbols.len(), counts.len()),
            ));
        }

        Ok((symbols, counts))
    }
}

/// How atomic positions are given in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoordinateMode {
    /// Fractional coordinates of the lattice vectors
    Direct,
    /// Cartesian coordinates, scaled like the lattice
    Cartesian,
}

impl FromStr for CoordinateMode {
    type Err = Error;

    /// Only the first character matters to VASP
    fn from_str(s: &str) -> Result<Self> {
        match s.trim_start().chars().next() {
            Some('D' | 'd') => Ok(Self::Direct),
            Some('C' | 'c' | 'K' | 'k') => Ok(Self::Cartesian),
            _ => Err(Error::UnknownCoordinateMode(s.trim().to_string())),
        }
    }
}

/// Structure block before any grid data
#[derive(Debug)]
pub(crate) struct Structure {
    pub title: String,
    pub numbers: Vec<u32>,
    pub coordinates: Vec<Vector3<f64>>,
    pub cell: Matrix3<f64>,
}

impl Structure {
    /// Validate into a [MolecularGrid] with no grid data
    pub fn into_molecule(self) -> Result<MolecularGrid> {
        Ok(MolecularGrid::new(
            self.title,
            self.numbers,
            None,
            self.coordinates,
            self.cell,
        )?)
    }
}

/// Expand per-species counts into one atomic number per atom
///
/// `natom` is the already checked total of `counts`.
fn species_numbers(symbols: &[String], counts: &[usize], natom: usize) -> Result<Vec<u32>> {
    let mut numbers = Vec::with_capacity(natom);
    for (symbol, &count) in symbols.iter().zip(counts) {
        let element =
            Element::from_str(symbol).map_err(|_| Error::UnknownSpecies(symbol.clone()))?;
        numbers.extend(std::iter::repeat(element.number()).take(count));
    }
    Ok(numbers)
}

/// File context for error reporting
pub(crate) struct Context<'a> {
    pub path: &'a Path,
}

impl Context<'_> {
    pub fn next_line<'c>(&self, cursor: &mut LineCursor<'c>, expected: &str) -> Result<&'c str> {
        cursor
            .next_line()
            .ok_or_else(|| self.format_error(cursor, f!("unexpected end of file, expected {expected}")))
    }

    pub fn format_error(&self, cursor: &LineCursor, details: String) -> Error {
        Error::Format {
            path: PathBuf::from(self.path),
            line: cursor.line_number(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_modes() {
        assert_eq!(CoordinateMode::from_str("Direct").unwrap(), CoordinateMode::Direct);
        assert_eq!(CoordinateMode::from_str("  direct").unwrap(), CoordinateMode::Direct);
        assert_eq!(CoordinateMode::from_str("Cartesian").unwrap(), CoordinateMode::Cartesian);
        assert_eq!(CoordinateMode::from_str("kartesisch").unwrap(), CoordinateMode::Cartesian);
        assert!(matches!(
            CoordinateMode::from_str("Fractional"),
            Err(Error::UnknownCoordinateMode(mode)) if mode == "Fractional"
        ));
        assert!(CoordinateMode::from_str("").is_err());
    }

    #[test]
    fn species_expansion() {
        let symbols = vec!["O".to_string(), "H".to_string()];
        assert_eq!(species_numbers(&symbols, &[1, 2], 3).unwrap(), vec![8, 1, 1]);

        let symbols = vec!["Fe_pv".to_string()];
        assert_eq!(species_numbers(&symbols, &[2], 2).unwrap(), vec![26, 26]);

        let symbols = vec!["Qq".to_string()];
        assert!(matches!(
            species_numbers(&symbols, &[1], 1),
            Err(Error::UnknownSpecies(s)) if s == "Qq"
        ));
    }
}
