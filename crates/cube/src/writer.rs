//! Write operations for cube files

// crate modules
use crate::error::{Error, Result};

// gridio modules
use gridio_core::MolecularGrid;
use gridio_format::NumFormat;

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// external crates
use log::debug;

/// Values per line within a row of grid data
const VALUES_PER_LINE: usize = 6;

/// Write a [MolecularGrid] to a cube file
///
/// Everything is written in Bohr with the last grid axis varying fastest. A
/// line break follows every row along the last axis, as well as every six
/// values within a row.
///
/// The molecule must have grid data, otherwise an [Error::MissingGridData] is
/// returned.
///
/// ```rust, no_run
/// # use gridio_cube::{read_cube, write_cube};
/// let molecule = read_cube("path/to/density.cube").unwrap();
/// write_cube(&molecule, "path/to/copy.cube").unwrap();
/// ```
pub fn write_cube<P: AsRef<Path>>(molecule: &MolecularGrid, path: P) -> Result<()> {
    let (Some(grid), Some(grid_data)) = (molecule.grid(), molecule.grid_data()) else {
        return Err(Error::MissingGridData);
    };

    let mut writer = init_writer(path)?;

    // header
    writeln!(writer, "{}", molecule.title())?;
    writeln!(writer, "OUTER LOOP: X, MIDDLE LOOP: Y, INNER LOOP: Z")?;

    let origin = grid.origin();
    writeln!(
        writer,
        "{:5} {:11.6} {:11.6} {:11.6}",
        molecule.natom(),
        origin[0],
        origin[1],
        origin[2]
    )?;

    for (count, vector) in grid.shape().iter().zip(grid.grid_rvecs().row_iter()) {
        writeln!(
            writer,
            "{:5} {:11.6} {:11.6} {:11.6}",
            count, vector[0], vector[1], vector[2]
        )?;
    }

    // atoms
    let atoms = molecule
        .numbers()
        .iter()
        .zip(molecule.pseudo_numbers())
        .zip(molecule.coordinates());

    for ((number, pseudo), r) in atoms {
        writeln!(
            writer,
            "{:5} {:11.6} {:11.6} {:11.6} {:11.6}",
            number, pseudo, r[0], r[1], r[2]
        )?;
    }

    // grid data, iterating in standard order regardless of memory layout
    let row_length = grid.shape()[2];
    for (n, value) in grid_data.iter().enumerate() {
        write!(writer, " {:>12}", value.fortran(5))?;
        let k = n % row_length;
        if k % VALUES_PER_LINE == VALUES_PER_LINE - 1 || k == row_length - 1 {
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    debug!("Wrote {} grid values", grid_data.len());
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
