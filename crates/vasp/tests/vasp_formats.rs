//! Integration tests for the VASP readers and POSCAR writer

use gridio_core::units::{ANGSTROM, ELECTRONVOLT};
use gridio_core::{MolecularGrid, Units};
use gridio_vasp::{read_chgcar, read_locpot, read_poscar, write_poscar};
use gridio_vasp::{Error, GridKind, VaspReader};
use nalgebra::{Matrix3, Vector3};
use rstest::{fixture, rstest};
use std::path::Path;

#[fixture]
fn chgcar_oxygen() -> MolecularGrid {
    read_chgcar("./data/CHGCAR.oxygen").unwrap()
}

fn water_hydrogen() -> Vector3<f64> {
    Vector3::new(0.074983, 0.903122, 0.0) * 15.0 * ANGSTROM
}

fn assert_water(water: &MolecularGrid) {
    assert_eq!(water.natom(), 3);
    assert_eq!(water.numbers(), &[8, 1, 1]);
    assert_eq!(water.pseudo_numbers(), &[8.0, 1.0, 1.0]);
    assert!((water.coordinates()[1] - water_hydrogen()).amax() < 1e-10);
    assert!((water.volume() - (15.0 * ANGSTROM).powi(3)).abs() < 1e-10);
}

#[rstest]
fn load_chgcar_oxygen(chgcar_oxygen: MolecularGrid) {
    assert_eq!(chgcar_oxygen.natom(), 1);
    assert_eq!(chgcar_oxygen.numbers(), &[8]);
    assert!((chgcar_oxygen.volume() - (10.0 * ANGSTROM).powi(3)).abs() < 1e-10);

    let grid = chgcar_oxygen.grid().unwrap();
    assert_eq!(grid.shape(), [2, 2, 2]);
    assert!((grid.grid_rvecs() - chgcar_oxygen.cell() / 2.0).amax() < 1e-10);
    assert!(grid.origin().amax() < 1e-10);

    let volume = chgcar_oxygen.volume();
    let d = chgcar_oxygen.grid_data().unwrap();
    assert!((d[[0, 0, 0]] - 0.78406017013E+04 / volume).abs() < 1e-10);
    assert!((d[[1, 0, 0]] - 0.76183317989E+04 / volume).abs() < 1e-10);
    assert!((d[[1, 1, 1]] - 0.10024522914E+04 / volume).abs() < 1e-10);
}

#[rstest]
fn load_chgcar_water() {
    let water = read_chgcar("./data/CHGCAR.water").unwrap();
    assert_water(&water);

    let grid = water.grid().unwrap();
    assert_eq!(grid.shape(), [3, 3, 3]);
    assert!((grid.grid_rvecs() - water.cell() / 3.0).amax() < 1e-10);
    assert!(grid.origin().amax() < 1e-10);

    // the peak sits in the middle of the grid
    let d = water.grid_data().unwrap();
    assert!((d[[1, 1, 1]] - 0.5 / water.volume()).abs() < 1e-14);
}

#[rstest]
fn load_locpot_oxygen() {
    let locpot = read_locpot("./data/LOCPOT.oxygen").unwrap();
    assert_eq!(locpot.natom(), 1);
    assert_eq!(locpot.numbers()[0], 8);
    assert!((locpot.volume() - (10.0 * ANGSTROM).powi(3)).abs() < 1e-10);

    let grid = locpot.grid().unwrap();
    assert_eq!(grid.shape(), [1, 4, 2]);
    assert!(grid.origin().amax() < 1e-10);

    let d = locpot.grid_data().unwrap();
    assert!((d[[0, 0, 0]] / ELECTRONVOLT - 0.35046350435E+01).abs() < 1e-10);
    assert!((d[[0, 1, 0]] / ELECTRONVOLT - 0.213732132354E+01).abs() < 1e-10);
    assert!((d[[0, 2, 0]] / ELECTRONVOLT - -0.65465465497E+01).abs() < 1e-10);
    assert!((d[[0, 2, 1]] / ELECTRONVOLT - -0.546876467887E+01).abs() < 1e-10);
}

#[rstest]
fn locpot_in_file_units() {
    let reader = VaspReader::with_units(Units::identity());
    let locpot = reader
        .parse(Path::new("./data/LOCPOT.oxygen"), GridKind::Locpot)
        .unwrap();

    assert!((locpot.volume() - 1000.0).abs() < 1e-10);
    assert_eq!(locpot.grid_data().unwrap()[[0, 2, 1]], -0.546876467887E+01);
}

#[rstest]
fn load_poscar_water() {
    let water = read_poscar("./data/POSCAR.water").unwrap();
    assert_water(&water);
    assert_eq!(water.title(), "H2O molecule in a 15 Angstrom box");
    assert!(water.grid().is_none());
    assert!(water.grid_data().is_none());
}

#[rstest]
fn load_poscar_vasp4() {
    let water = read_poscar("./data/POSCAR.vasp4").unwrap();
    assert_water(&water);
}

#[rstest]
fn load_poscar_selective_cartesian() {
    let water = read_poscar("./data/POSCAR.selective").unwrap();
    assert_water(&water);
    assert_eq!(water.title(), "  Water with a target volume and fixed oxygen");

    let cell = Matrix3::from_diagonal_element(15.0 * ANGSTROM);
    assert!((water.cell() - cell).amax() < 1e-10);
}

#[rstest]
fn poscar_dump_load(chgcar_oxygen: MolecularGrid) {
    let water = read_poscar("./data/POSCAR.water").unwrap();

    for (name, molecule) in [("water", &water), ("oxygen", &chgcar_oxygen)] {
        let path = std::env::temp_dir().join(format!("gridio_poscar_dump_load_{name}"));
        write_poscar(molecule, &path).unwrap();
        let copy = read_poscar(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(copy.title(), molecule.title());
        assert_eq!(copy.numbers(), molecule.numbers());
        assert!((copy.cell() - molecule.cell()).amax() < 1e-8);
        for (a, b) in copy.coordinates().iter().zip(molecule.coordinates()) {
            assert!((a - b).amax() < 1e-8);
        }
    }
}

#[rstest]
fn poscar_species_must_be_grouped() {
    let molecule = MolecularGrid::new(
        "interleaved",
        vec![1, 8, 1],
        None,
        vec![Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0)],
        Matrix3::from_diagonal_element(10.0),
    )
    .unwrap();

    let path = std::env::temp_dir().join("gridio_poscar_interleaved");
    let result = write_poscar(&molecule, path);
    assert!(matches!(result, Err(Error::NotGroupedBySpecies)));
}

#[rstest]
fn unknown_species() {
    let result = read_poscar("./data/POSCAR.unknown_species");
    assert!(matches!(result, Err(Error::UnknownSpecies(s)) if s == "Hx"));
}

#[rstest]
fn unknown_coordinate_mode() {
    let result = read_poscar("./data/POSCAR.bad_mode");
    assert!(matches!(result, Err(Error::UnknownCoordinateMode(m)) if m == "Fractional"));
}

#[rstest]
fn missing_atom_line() {
    let result = read_poscar("./data/POSCAR.missing_atom");
    assert!(matches!(result, Err(Error::Format { line: 10, .. })));
}

#[rstest]
fn species_count_beyond_file() {
    let result = read_poscar("./data/POSCAR.huge_count");
    assert!(matches!(result, Err(Error::Format { line: 7, .. })));
}

#[rstest]
fn grid_shape_too_large_to_count() {
    let result = read_chgcar("./data/CHGCAR.huge_shape");
    assert!(matches!(
        result,
        Err(Error::Core(gridio_core::Error::InvalidShape(_)))
    ));
}

#[rstest]
fn truncated_chgcar() {
    let result = read_chgcar("./data/CHGCAR.truncated");
    assert!(matches!(
        result,
        Err(Error::UnexpectedNumberOfValues {
            expected: 8,
            found: 5
        })
    ));
}

#[rstest]
#[case(GridKind::Chgcar)]
#[case(GridKind::Locpot)]
fn grid_file_without_grid(#[case] kind: GridKind) {
    let result = VaspReader::new().parse(Path::new("./data/POSCAR.water"), kind);
    assert!(matches!(result, Err(Error::Format { .. })));
}
