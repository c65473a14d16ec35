//! Read operations for cube files

// crate modules
use crate::error::{Error, Result};
use crate::parsers;

// gridio modules
use gridio_core::text::{parse_values, LineCursor};
use gridio_core::{MolecularGrid, UniformGrid, Units};
use gridio_format::f;

// standard library
use std::path::{Path, PathBuf};

// external crates
use log::{debug, trace, warn};
use nalgebra::{Matrix3, Vector3};
use ndarray::Array3;

/// Read a cube file
///
/// Returns a result containing the [MolecularGrid] with the structure and
/// volumetric data extracted from the file at `path`.
///
/// - `path` - Path to the cube file, can be [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use gridio_cube::read_cube;
/// let molecule = read_cube("path/to/density.cube").unwrap();
/// println!("{} atoms on a {:?} grid", molecule.natom(), molecule.grid().unwrap().shape());
/// ```
pub fn read_cube<P: AsRef<Path>>(path: P) -> Result<MolecularGrid> {
    CubeReader::new().parse(path.as_ref())
}

/// A reader for Gaussian cube files
///
/// The defaults are fine for almost everything, so [read_cube()] is the
/// preferred API. The reader is public for the rare cases where different
/// unit conversions are needed for Angstrom-flagged files.
///
/// ```rust, no_run
/// # use gridio_cube::CubeReader;
/// # use gridio_core::Units;
/// # use std::path::Path;
/// let mut reader = CubeReader::new();
/// reader.set_units(Units::identity());
/// let molecule = reader.parse(Path::new("path/to/density.cube")).unwrap();
/// ```
#[derive(Debug, Default, Clone)]
pub struct CubeReader {
    /// Conversion factors into the internal units
    units: Units,
}

/// Header values collected before the atoms and grid data
struct Header {
    title: String,
    /// Signed atom count, negative for dataset cubes
    natom: i64,
    /// Values per voxel declared on the atom count line
    nval: Option<u32>,
    /// Conversion factor for all lengths in the file
    length: f64,
    grid: UniformGrid,
}

impl CubeReader {
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

    /// Parse all data from a cube file
    pub fn parse(&self, path: &Path) -> Result<MolecularGrid> {
        let content = std::fs::read_to_string(path)?;
        let mut cursor = LineCursor::new(&content);
        let context = Context { path };

        let header = self.parse_header(&mut cursor, &context)?;
        let (numbers, pseudo_numbers, coordinates) =
            self.parse_atoms(&mut cursor, &context, &header)?;

        // dataset cubes list the dataset ids after the atoms
        let nval = if header.natom < 0 {
            let line = context.next_line(&mut cursor, "dataset ids")?;
            let (_, ids) = parsers::dataset_ids(line)
                .map_err(|e| context.format_error(&cursor, f!("bad dataset id line, {e}")))?;
            trace!("Dataset ids {ids:?}");
            ids.len()
        } else {
            header.nval.unwrap_or(1) as usize
        };

        let grid_data = self.parse_grid_data(&cursor, &context, &header.grid, nval)?;

        let molecule = MolecularGrid::new(
            header.title,
            numbers,
            Some(pseudo_numbers),
            coordinates,
            header.grid.cell(),
        )?
        .with_grid(header.grid, grid_data)?;

        Ok(molecule)
    }
}

impl CubeReader {
    /// Title, comment, atom count, origin, and grid axes
    fn parse_header(&self, cursor: &mut LineCursor, context: &Context) -> Result<Header> {
        let title = context.next_line(cursor, "title")?.trim_end().to_string();
        context.next_line(cursor, "comment")?;

        let line = context.next_line(cursor, "atom count and origin")?;
        let (_, counts) = parsers::atom_count_line(line)
            .map_err(|e| context.format_error(cursor, f!("bad atom count line, {e}")))?;

        let mut shape = [0; 3];
        let mut grid_rvecs = Matrix3::zeros();
        let mut in_angstrom = false;

        for axis in 0..3 {
            let line = context.next_line(cursor, "grid axis")?;
            let (_, (count, vector)) = parsers::axis_line(line)
                .map_err(|e| context.format_error(cursor, f!("bad grid axis line, {e}")))?;

            // the sign of the first count sets the units for the whole file
            if axis == 0 && count < 0 {
                warn!("Negative grid count, treating {:?} as Angstrom", context.path);
                in_angstrom = true;
            }

            shape[axis] = count.unsigned_abs() as usize;
            grid_rvecs.set_row(axis, &Vector3::from(vector).transpose());
        }

        let length = if in_angstrom { self.units.angstrom } else { 1.0 };
        let origin = Vector3::from(counts.origin) * length;
        let grid = UniformGrid::new(origin, grid_rvecs * length, shape)?;

        debug!(
            "Cube header: {} atoms, shape {:?}, origin {:?}",
            counts.natom.unsigned_abs(),
            shape,
            counts.origin
        );

        Ok(Header {
            title,
            natom: counts.natom,
            nval: counts.nval,
            length,
            grid,
        })
    }

    /// One line per atom of number, pseudo number, and coordinates
    fn parse_atoms(
        &self,
        cursor: &mut LineCursor,
        context: &Context,
        header: &Header,
    ) -> Result<(Vec<u32>, Vec<f64>, Vec<Vector3<f64>>)> {
        let natom = header.natom.unsigned_abs() as usize;

        // the header count is not trusted for allocation
        let mut numbers = Vec::new();
        let mut pseudo_numbers = Vec::new();
        let mut coordinates = Vec::new();

        for n in 0..natom {
            let line = cursor.next_line().ok_or_else(|| {
                context.format_error(cursor, f!("expected {natom} atoms, found only {n}"))
            })?;

            let (_, (number, pseudo, position)) = parsers::atom_line(line)
                .map_err(|e| context.format_error(cursor, f!("bad atom line, {e}")))?;

            // a zero pseudo number means no effective core potential was used
            let pseudo = match pseudo {
                Some(p) if p != 0.0 => p,
                _ => number as f64,
            };

            numbers.push(number);
            pseudo_numbers.push(pseudo);
            coordinates.push(Vector3::from(position) * header.length);
        }

        trace!("Read {natom} atoms");
        Ok((numbers, pseudo_numbers, coordinates))
    }

    /// Everything left is grid data, with the last axis varying fastest
    ///
    /// The number of values must match the header exactly. Surplus values
    /// usually mean the atom count is too low and atom lines were taken as
    /// grid data.
    fn parse_grid_data(
        &self,
        cursor: &LineCursor,
        context: &Context,
        grid: &UniformGrid,
        nval: usize,
    ) -> Result<Array3<f64>> {
        let nval = nval.max(1);
        let expected = grid.size().checked_mul(nval).ok_or_else(|| {
            context.format_error(
                cursor,
                f!("{nval} values per voxel on a {:?} grid is too many", grid.shape()),
            )
        })?;
        let tokens = cursor.remainder().split_whitespace().collect::<Vec<&str>>();

        if tokens.len() != expected {
            return Err(Error::UnexpectedNumberOfValues {
                expected,
                found: tokens.len(),
            });
        }

        if nval > 1 {
            warn!("Found {nval} values per voxel, keeping only the first");
        }

        let values = parse_values(&tokens)?
            .into_iter()
            .step_by(nval)
            .collect::<Vec<f64>>();

        let [nx, ny, nz] = grid.shape();
        let found = values.len();
        // standard layout is row-major, matching the on-disk order
        Array3::from_shape_vec((nx, ny, nz), values).map_err(|_| Error::UnexpectedNumberOfValues {
            expected: grid.size(),
            found,
        })
    }
}

/// File context for error reporting
struct Context<'a> {
    path: &'a Path,
}

impl Context<'_> {
    fn next_line<'c>(&self, cursor: &mut LineCursor<'c>, expected: &str) -> Result<&'c str> {
        cursor
            .next_line()
            .ok_or_else(|| self.format_error(cursor, f!("unexpected end of file, expected {expected}")))
    }

    fn format_error(&self, cursor: &LineCursor, details: String) -> Error {
        Error::Format {
            path: PathBuf::from(self.path),
            line: cursor.line_number(),
            details,
        }
    }
}
