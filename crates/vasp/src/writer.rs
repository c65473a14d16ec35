//! Write operations for POSCAR files

// crate modules
use crate::error::{Error, Result};

// gridio modules
use gridio_core::units::ANGSTROM;
use gridio_core::{Element, MolecularGrid};
use gridio_format::f;

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// external crates
use itertools::Itertools;
use log::debug;

/// Write the structure of a [MolecularGrid] to a POSCAR file
///
/// The lattice is written in Angstrom with a unit scale factor, followed by
/// the species symbols, the counts of each, and `Direct` coordinates. Any
/// grid data is ignored.
///
/// Atoms of the same species have to be next to each other, as VASP has no
/// way of interleaving species. Otherwise an [Error::NotGroupedBySpecies] is
/// returned.
///
/// ```rust, no_run
/// # use gridio_vasp::{read_chgcar, write_poscar};
/// let chgcar = read_chgcar("path/to/CHGCAR").unwrap();
/// write_poscar(&chgcar, "path/to/POSCAR").unwrap();
/// ```
pub fn write_poscar<P: AsRef<Path>>(molecule: &MolecularGrid, path: P) -> Result<()> {
    let groups = molecule
        .numbers()
        .iter()
        .dedup_with_count()
        .collect::<Vec<(usize, &u32)>>();

    if !groups.iter().map(|(_, number)| number).all_unique() {
        return Err(Error::NotGroupedBySpecies);
    }

    let symbols = groups
        .iter()
        .map(|(_, &number)| Element::from_number(number).map(|e| e.symbol()))
        .collect::<gridio_core::Result<Vec<&str>>>()?;

    let fractional = molecule.fractional_coordinates()?;
    let mut writer = init_writer(path)?;

    writeln!(writer, "{}", molecule.title())?;
    writeln!(writer, "{:19.14}", 1.0)?;

    for vector in molecule.cell().row_iter() {
        let vector = vector / ANGSTROM;
        writeln!(
            writer,
            " {:21.16} {:21.16} {:21.16}",
            vector[0], vector[1], vector[2]
        )?;
    }

    writeln!(writer, "{}", symbols.iter().map(|s| f!("{s:>5}")).join(""))?;
    writeln!(
        writer,
        "{}",
        groups.iter().map(|(count, _)| f!("{count:>5}")).join("")
    )?;

    writeln!(writer, "Direct")?;
    for r in fractional {
        writeln!(writer, " {:19.16} {:19.16} {:19.16}", r[0], r[1], r[2])?;
    }

    writer.flush()?;
    debug!("Wrote {} atoms of {symbols:?}", molecule.natom());
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
