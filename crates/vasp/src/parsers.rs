//! Library of parser functions for POSCAR and grid header lines

// nom parser combinators
use nom::character::complete::{self, space0};
use nom::combinator::all_consuming;
use nom::multi::many1;
use nom::number::complete::double;
use nom::sequence::{preceded, terminated};
use nom::IResult;

/// Parse the leading scale factor, ignoring anything that follows
pub(crate) fn scale_line(i: &str) -> IResult<&str, f64> {
    preceded(space0, double)(i)
}

/// Parse the first three numbers of a line
///
/// Used for both lattice vectors and atomic positions, where the rest of the
/// line may hold selective dynamics flags or a species label.
pub(crate) fn vector_line(i: &str) -> IResult<&str, [f64; 3]> {
    let (i, a) = preceded(space0, double)(i)?;
    let (i, b) = preceded(space0, double)(i)?;
    let (i, c) = preceded(space0, double)(i)?;
    Ok((i, [a, b, c]))
}

/// Parse a line of atom counts, one per species
pub(crate) fn counts_line(i: &str) -> IResult<&str, Vec<usize>> {
    let (i, counts) = all_consuming(terminated(many1(preceded(space0, complete::u32)), space0))(i)?;
    Ok((i, counts.into_iter().map(|c| c as usize).collect()))
}

/// Parse the `<n0> <n1> <n2>` grid shape line
pub(crate) fn shape_line(i: &str) -> IResult<&str, [usize; 3]> {
    let (i, a) = preceded(space0, complete::u32)(i)?;
    let (i, b) = preceded(space0, complete::u32)(i)?;
    let (i, c) = all_consuming(terminated(preceded(space0, complete::u32), space0))(i)?;
    Ok((i, [a as usize, b as usize, c as usize]))
}
