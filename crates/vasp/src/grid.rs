//! Read operations for CHGCAR and LOCPOT volumetric files

// crate modules
use crate::error::{Error, Result};
use crate::parsers;
use crate::poscar::{Context, VaspReader};

// gridio modules
use gridio_core::text::{parse_values, LineCursor};
use gridio_core::{unravel, MolecularGrid, UniformGrid};
use gridio_format::f;

// standard library
use std::path::Path;

// external crates
use log::{debug, trace};
use ndarray::Array3;

/// The kind of volumetric data held in a VASP grid file
///
/// Both share a layout but the stored values need different conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    /// Charge density multiplied by the cell volume
    Chgcar,
    /// Local potential in eV
    Locpot,
}

/// Read a CHGCAR charge density file
///
/// The stored values are divided by the cell volume, so the returned grid
/// data is the density in electrons per cubic Bohr.
///
/// - `path` - Path to the CHGCAR file, can be [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use gridio_vasp::read_chgcar;
/// let chgcar = read_chgcar("path/to/CHGCAR").unwrap();
/// let density = chgcar.grid_data().unwrap();
/// let voxel = chgcar.grid().unwrap().voxel_volume();
/// println!("{:.4} electrons", density.sum() * voxel);
/// ```
pub fn read_chgcar<P: AsRef<Path>>(path: P) -> Result<MolecularGrid> {
    VaspReader::new().parse(path.as_ref(), GridKind::Chgcar)
}

/// Read a LOCPOT local potential file
///
/// The stored values are converted from eV to Hartree.
///
/// - `path` - Path to the LOCPOT file, can be [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use gridio_vasp::read_locpot;
/// let locpot = read_locpot("path/to/LOCPOT").unwrap();
/// println!("{:?}", locpot.grid().unwrap().shape());
/// ```
pub fn read_locpot<P: AsRef<Path>>(path: P) -> Result<MolecularGrid> {
    VaspReader::new().parse(path.as_ref(), GridKind::Locpot)
}

impl VaspReader {
    /// Parse the structure and first grid block of a CHGCAR or LOCPOT file
    pub fn parse(&self, path: &Path, kind: GridKind) -> Result<MolecularGrid> {
        let content = std::fs::read_to_string(path)?;
        let mut cursor = LineCursor::new(&content);
        let context = Context { path };

        let structure = self.parse_structure(&mut cursor, &context)?;

        // usually a single blank line before the shape
        let line = cursor.next_non_blank().ok_or_else(|| {
            context.format_error(&cursor, "unexpected end of file, expected grid shape".into())
        })?;
        let (_, shape) = parsers::shape_line(line)
            .map_err(|e| context.format_error(&cursor, f!("bad grid shape, {e}")))?;

        let grid = UniformGrid::from_cell(&structure.cell, shape)?;
        let molecule = structure.into_molecule()?;

        let factor = match kind {
            GridKind::Chgcar => 1.0 / molecule.volume(),
            GridKind::Locpot => self.units().electronvolt,
        };

        debug!("{kind:?} grid: shape {shape:?}, volume {:.6}", molecule.volume());
        let grid_data = parse_grid_data(&cursor, grid.shape(), factor)?;

        Ok(molecule.with_grid(grid, grid_data)?)
    }
}

/// First grid block, with the first axis varying fastest
///
/// `shape` must already be validated, so its product cannot overflow.
fn parse_grid_data(cursor: &LineCursor, shape: [usize; 3], factor: f64) -> Result<Array3<f64>> {
    let expected = shape.iter().product::<usize>();
    let mut tokens = cursor.remainder().split_whitespace();
    let block = tokens.by_ref().take(expected).collect::<Vec<&str>>();

    if block.len() < expected {
        return Err(Error::UnexpectedNumberOfValues {
            expected,
            found: block.len(),
        });
    }

    if tokens.next().is_some() {
        debug!("Ignoring content after the first grid block");
    }

    let values = parse_values(&block)?;
    let mut grid_data = Array3::<f64>::zeros((shape[0], shape[1], shape[2]));
    for (counter, value) in values.into_iter().enumerate() {
        grid_data[unravel(counter, shape)?] = value * factor;
    }

    trace!("Read {expected} grid values");
    Ok(grid_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fortran_order_placement() {
        let content = "0 1 2 3 4 5 6 7";
        let cursor = LineCursor::new(content);
        let data = parse_grid_data(&cursor, [1, 4, 2], 1.0).unwrap();
        assert_eq!(data[[0, 1, 0]], 1.0);
        assert_eq!(data[[0, 3, 0]], 3.0);
        assert_eq!(data[[0, 0, 1]], 4.0);
        assert_eq!(data[[0, 2, 1]], 6.0);
    }

    #[test]
    fn scaled_and_truncated() {
        let cursor = LineCursor::new("1.0 2.0 3.0 4.0 augmentation occupancies");
        let data = parse_grid_data(&cursor, [2, 2, 1], 0.5).unwrap();
        assert_eq!(data[[1, 1, 0]], 2.0);

        let cursor = LineCursor::new("1.0 2.0 3.0");
        assert!(matches!(
            parse_grid_data(&cursor, [2, 2, 1], 1.0),
            Err(Error::UnexpectedNumberOfValues {
                expected: 4,
                found: 3
            })
        ));
    }
}
