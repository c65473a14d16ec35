//! Uniform grid metadata

// crate modules
use crate::error::{Error, Result};
use crate::indexing::check_shape;

// external crates
use nalgebra::{Matrix3, Vector3};

/// Description of a uniform grid of points
///
/// A grid point `[i, j, k]` sits at
///
/// ```text
/// origin + i*grid_rvecs[0] + j*grid_rvecs[1] + k*grid_rvecs[2]
/// ```
///
/// where the rows of `grid_rvecs` are the vectors spanning a single voxel.
/// These are distinct from the cell vectors of a [MolecularGrid], which span
/// the whole periodic box. For grids covering a full cell each cell vector is
/// exactly `shape[a]` voxel vectors.
///
/// [MolecularGrid]: crate::MolecularGrid
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGrid {
    origin: Vector3<f64>,
    grid_rvecs: Matrix3<f64>,
    shape: [usize; 3],
}

impl UniformGrid {
    /// Create a new grid, checking the shape and vectors
    ///
    /// Every extent of `shape` must be positive, the total number of points must
    /// fit in a `usize`, and all vectors must be finite.
    ///
    /// ```rust
    /// # use gridio_core::UniformGrid;
    /// # use nalgebra::{Matrix3, Vector3};
    /// let grid = UniformGrid::new(Vector3::zeros(), Matrix3::identity(), [2, 3, 4]).unwrap();
    /// assert_eq!(grid.size(), 24);
    ///
    /// assert!(UniformGrid::new(Vector3::zeros(), Matrix3::identity(), [2, 0, 4]).is_err());
    /// ```
    pub fn new(origin: Vector3<f64>, grid_rvecs: Matrix3<f64>, shape: [usize; 3]) -> Result<Self> {
        check_shape(shape)?;
        if !origin.iter().all(|v| v.is_finite()) {
            return Err(Error::NonFiniteValues("grid origin"));
        }
        if !grid_rvecs.iter().all(|v| v.is_finite()) {
            return Err(Error::NonFiniteValues("grid vectors"));
        }
        Ok(Self {
            origin,
            grid_rvecs,
            shape,
        })
    }

    /// Grid that exactly covers a periodic `cell`, anchored at the origin
    ///
    /// Each cell vector (row) is divided by the number of points along its
    /// axis to give the voxel vectors.
    ///
    /// ```rust
    /// # use gridio_core::UniformGrid;
    /// # use nalgebra::Matrix3;
    /// let cell = Matrix3::from_diagonal_element(10.0);
    /// let grid = UniformGrid::from_cell(&cell, [2, 5, 10]).unwrap();
    /// assert_eq!(grid.grid_rvecs()[(1, 1)], 2.0);
    /// assert_eq!(grid.cell(), cell);
    /// ```
    pub fn from_cell(cell: &Matrix3<f64>, shape: [usize; 3]) -> Result<Self> {
        check_shape(shape)?;
        let mut grid_rvecs = *cell;
        for (axis, &n) in shape.iter().enumerate() {
            grid_rvecs.row_mut(axis).unscale_mut(n as f64);
        }
        Self::new(Vector3::zeros(), grid_rvecs, shape)
    }

    /// Position of the first grid point
    pub fn origin(&self) -> &Vector3<f64> {
        &self.origin
    }

    /// Voxel vectors as rows
    pub fn grid_rvecs(&self) -> &Matrix3<f64> {
        &self.grid_rvecs
    }

    /// Number of grid points along each axis
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Total number of grid points
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    /// Vectors spanning the full grid, i.e. each voxel vector times its count
    pub fn cell(&self) -> Matrix3<f64> {
        let mut cell = self.grid_rvecs;
        for (axis, &n) in self.shape.iter().enumerate() {
            cell.row_mut(axis).scale_mut(n as f64);
        }
        cell
    }

    /// Volume of a single voxel
    pub fn voxel_volume(&self) -> f64 {
        self.grid_rvecs.determinant().abs()
    }

    /// Cartesian position of the grid point at `index`
    ///
    /// ```rust
    /// # use gridio_core::UniformGrid;
    /// # use nalgebra::{Matrix3, Vector3};
    /// let grid = UniformGrid::new(Vector3::new(0.0, 1.2, 0.0), Matrix3::identity(), [3, 3, 3]).unwrap();
    /// assert_eq!(grid.point([1, 2, 0]), Vector3::new(1.0, 3.2, 0.0));
    /// ```
    pub fn point(&self, index: [usize; 3]) -> Vector3<f64> {
        let ijk = Vector3::new(index[0] as f64, index[1] as f64, index[2] as f64);
        self.origin + self.grid_rvecs.transpose() * ijk
    }
}
