//! Library of parser functions for cube header lines

// nom parser combinators
use nom::character::complete::{self, space0, space1};
use nom::combinator::{all_consuming, opt};
use nom::multi::many0;
use nom::number::complete::double;
use nom::sequence::{preceded, terminated};
use nom::IResult;

/// Values from the `<natom> <origin x> <origin y> <origin z> [nval]` line
#[derive(Debug, PartialEq)]
pub(crate) struct AtomCountLine {
    /// Signed atom count, negative for dataset cubes
    pub natom: i64,
    pub origin: [f64; 3],
    /// Optional number of values per voxel
    pub nval: Option<u32>,
}

/// Parse the atom count and origin line
pub(crate) fn atom_count_line(i: &str) -> IResult<&str, AtomCountLine> {
    let (i, natom) = complete::i64(i.trim_start())?;
    let (i, origin) = coordinate_array(i)?;
    let (i, nval) = all_consuming(terminated(opt(preceded(space1, complete::u32)), space0))(i)?;
    Ok((
        i,
        AtomCountLine {
            natom,
            origin,
            nval,
        },
    ))
}

/// Parse an `<count> <x> <y> <z>` axis line
pub(crate) fn axis_line(i: &str) -> IResult<&str, (i64, [f64; 3])> {
    let (i, count) = complete::i64(i.trim_start())?;
    let (i, vector) = all_consuming(terminated(coordinate_array, space0))(i)?;
    Ok((i, (count, vector)))
}

/// Parse an `<number> [pseudo number] <x> <y> <z>` atom line
///
/// The pseudo number is optional, so either three or four values follow the
/// atomic number.
pub(crate) fn atom_line(i: &str) -> IResult<&str, (u32, Option<f64>, [f64; 3])> {
    let (i, number) = complete::u32(i.trim_start())?;
    let (i, first) = coordinate_array(i)?;
    let (i, fourth) = all_consuming(terminated(opt(preceded(space1, double)), space0))(i)?;

    match fourth {
        Some(z) => Ok((i, (number, Some(first[0]), [first[1], first[2], z]))),
        None => Ok((i, (number, None, first))),
    }
}

/// Parse the `<m> <id 1> ... <id m>` dataset line of a dataset cube
pub(crate) fn dataset_ids(i: &str) -> IResult<&str, Vec<u32>> {
    let (i, count) = complete::u32(i.trim_start())?;
    let (i, ids) = all_consuming(terminated(many0(preceded(space1, complete::u32)), space0))(i)?;

    if ids.len() != count as usize {
        return Err(nom::Err::Error(nom::error::Error::new(
            i,
            nom::error::ErrorKind::Count,
        )));
    }
    Ok((i, ids))
}

/// Parse any three whitespace separated numbers into an array
fn coordinate_array(i: &str) -> IResult<&str, [f64; 3]> {
    let (i, a) = preceded(space1, double)(i)?;
    let (i, b) = preceded(space1, double)(i)?;
    let (i, c) = preceded(space1, double)(i)?;
    Ok((i, [a, b, c]))
}
