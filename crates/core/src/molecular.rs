//! The shared in-memory representation produced by every reader

// crate modules
use crate::error::{Error, Result};
use crate::grid::UniformGrid;

// external crates
use nalgebra::{Matrix3, Vector3};
use ndarray::Array3;

/// Atoms, cell, and optional volumetric data from a structure or grid file
///
/// Values are held in atomic units: Bohr for `coordinates`, `cell`, and all
/// grid vectors. Instances are built whole by the readers and are read-only
/// afterwards, so every invariant checked on construction holds for the
/// lifetime of the value.
///
/// - `numbers`, `pseudo_numbers`, and `coordinates` all have `natom` entries
/// - cell vectors are the rows of `cell`, which spans a nonzero volume
/// - `grid` and `grid_data` are either both present or both absent
/// - `grid_data` has the dimensions of `grid.shape()`, indexed `[i, j, k]`
///
/// ```rust
/// # use gridio_core::MolecularGrid;
/// # use nalgebra::{Matrix3, Vector3};
/// let water = MolecularGrid::new(
///     "water",
///     vec![8, 1, 1],
///     None,
///     vec![Vector3::zeros(), Vector3::new(1.8, 0.0, 0.0), Vector3::new(-0.5, 1.7, 0.0)],
///     Matrix3::from_diagonal_element(20.0),
/// )
/// .unwrap();
///
/// assert_eq!(water.natom(), 3);
/// assert_eq!(water.pseudo_numbers(), &[8.0, 1.0, 1.0]);
/// assert_eq!(water.volume(), 8000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MolecularGrid {
    title: String,
    numbers: Vec<u32>,
    pseudo_numbers: Vec<f64>,
    coordinates: Vec<Vector3<f64>>,
    cell: Matrix3<f64>,
    grid: Option<UniformGrid>,
    grid_data: Option<Array3<f64>>,
}

impl MolecularGrid {
    /// Create a structure without any volumetric data
    ///
    /// When `pseudo_numbers` is `None` they default to the atomic numbers.
    pub fn new(
        title: impl Into<String>,
        numbers: Vec<u32>,
        pseudo_numbers: Option<Vec<f64>>,
        coordinates: Vec<Vector3<f64>>,
        cell: Matrix3<f64>,
    ) -> Result<Self> {
        let natom = numbers.len();
        let pseudo_numbers =
            pseudo_numbers.unwrap_or_else(|| numbers.iter().map(|&n| n as f64).collect());

        check_length("pseudo_numbers", natom, pseudo_numbers.len())?;
        check_length("coordinates", natom, coordinates.len())?;

        if !coordinates.iter().flatten().all(|v| v.is_finite()) {
            return Err(Error::NonFiniteValues("coordinates"));
        }
        check_cell(&cell)?;

        Ok(Self {
            title: title.into(),
            numbers,
            pseudo_numbers,
            coordinates,
            cell,
            grid: None,
            grid_data: None,
        })
    }

    /// Attach volumetric data described by `grid`
    ///
    /// The dimensions of `grid_data` must match the grid shape exactly.
    pub fn with_grid(mut self, grid: UniformGrid, grid_data: Array3<f64>) -> Result<Self> {
        let (nx, ny, nz) = grid_data.dim();
        if [nx, ny, nz] != grid.shape() {
            return Err(Error::UnexpectedGridDimensions {
                expected: grid.shape(),
                found: [nx, ny, nz],
            });
        }
        self.grid = Some(grid);
        self.grid_data = Some(grid_data);
        Ok(self)
    }

    /// Title or comment line from the source file
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of atoms
    pub fn natom(&self) -> usize {
        self.numbers.len()
    }

    /// Atomic numbers
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    /// Effective core charges, equal to the atomic numbers unless a
    /// pseudopotential says otherwise
    pub fn pseudo_numbers(&self) -> &[f64] {
        &self.pseudo_numbers
    }

    /// Cartesian coordinates (Bohr)
    pub fn coordinates(&self) -> &[Vector3<f64>] {
        &self.coordinates
    }

    /// Cell vectors as rows (Bohr)
    pub fn cell(&self) -> &Matrix3<f64> {
        &self.cell
    }

    /// Cell volume (Bohr^3), always positive
    pub fn volume(&self) -> f64 {
        self.cell.determinant().abs()
    }

    /// Grid metadata, if the source had volumetric data
    pub fn grid(&self) -> Option<&UniformGrid> {
        self.grid.as_ref()
    }

    /// Grid values indexed `[i, j, k]`, if the source had volumetric data
    pub fn grid_data(&self) -> Option<&Array3<f64>> {
        self.grid_data.as_ref()
    }

    /// Fractional coordinates of every atom with respect to the cell
    pub fn fractional_coordinates(&self) -> Result<Vec<Vector3<f64>>> {
        let inverse = self
            .cell
            .transpose()
            .try_inverse()
            .ok_or(Error::DegenerateCell {
                determinant: self.cell.determinant(),
            })?;
        Ok(self.coordinates.iter().map(|r| inverse * r).collect())
    }
}

/// Convert fractional coordinates to Cartesian for a cell with vectors as rows
///
/// Equivalent to the row-vector product `frac @ cell`.
///
/// ```rust
/// # use gridio_core::to_cartesian;
/// # use nalgebra::{Matrix3, Vector3};
/// let cell = Matrix3::from_diagonal_element(15.0);
/// let r = to_cartesian(&cell, &Vector3::new(0.5, 0.1, 0.0));
/// assert_eq!(r, Vector3::new(7.5, 1.5, 0.0));
/// ```
pub fn to_cartesian(cell: &Matrix3<f64>, fractional: &Vector3<f64>) -> Vector3<f64> {
    cell.transpose() * fractional
}

fn check_length(field: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(Error::InconsistentLength {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

fn check_cell(cell: &Matrix3<f64>) -> Result<()> {
    if !cell.iter().all(|v| v.is_finite()) {
        return Err(Error::NonFiniteValues("cell"));
    }
    let determinant = cell.determinant();
    if determinant == 0.0 {
        return Err(Error::DegenerateCell { determinant });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_atom() -> MolecularGrid {
        MolecularGrid::new(
            "oxygen",
            vec![8],
            Some(vec![6.0]),
            vec![Vector3::new(1.0, 2.0, 3.0)],
            Matrix3::from_diagonal_element(4.0),
        )
        .unwrap()
    }

    #[test]
    fn inconsistent_lengths() {
        let result = MolecularGrid::new(
            "",
            vec![8, 1],
            None,
            vec![Vector3::zeros()],
            Matrix3::identity(),
        );
        assert_eq!(
            result,
            Err(Error::InconsistentLength {
                field: "coordinates",
                expected: 2,
                found: 1
            })
        );

        let result = MolecularGrid::new(
            "",
            vec![8],
            Some(vec![6.0, 1.0]),
            vec![Vector3::zeros()],
            Matrix3::identity(),
        );
        assert!(matches!(result, Err(Error::InconsistentLength { .. })));
    }

    #[test]
    fn degenerate_cell() {
        let result = MolecularGrid::new("", vec![], None, vec![], Matrix3::zeros());
        assert!(matches!(result, Err(Error::DegenerateCell { .. })));
    }

    #[test]
    fn grid_dimensions_checked() {
        let grid = UniformGrid::from_cell(&Matrix3::from_diagonal_element(4.0), [2, 2, 2]).unwrap();
        let result = single_atom().with_grid(grid.clone(), Array3::zeros((2, 2, 3)));
        assert_eq!(
            result,
            Err(Error::UnexpectedGridDimensions {
                expected: [2, 2, 2],
                found: [2, 2, 3]
            })
        );

        let molecule = single_atom().with_grid(grid, Array3::zeros((2, 2, 2))).unwrap();
        assert_eq!(molecule.grid_data().unwrap().len(), 8);
        assert_eq!(molecule.grid().unwrap().shape(), [2, 2, 2]);
    }

    #[test]
    fn fractional_coordinates() {
        let molecule = single_atom();
        let fractional = molecule.fractional_coordinates().unwrap();
        assert!((fractional[0] - Vector3::new(0.25, 0.5, 0.75)).amax() < 1e-12);
        assert_eq!(
            to_cartesian(molecule.cell(), &fractional[0]),
            molecule.coordinates()[0]
        );
    }
}
