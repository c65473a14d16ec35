//! Conversion between flat counters and `[i, j, k]` grid indices
//!
//! Both functions use the column-major convention where the first axis varies
//! fastest, which is the order VASP writes its grids in.

// crate modules
use crate::error::{Error, Result};

/// Convert a flat counter into `[i, j, k]` indices for a grid `shape`
///
/// The first axis varies fastest. Counters beyond the total number of grid
/// points wrap around, so `unravel(n + size, shape) == unravel(n, shape)`.
///
/// ```rust
/// # use gridio_core::unravel;
/// assert_eq!(unravel(1, [2, 4, 3]).unwrap(), [1, 0, 0]);
/// assert_eq!(unravel(2, [2, 4, 3]).unwrap(), [0, 1, 0]);
/// assert_eq!(unravel(8, [2, 4, 3]).unwrap(), [0, 0, 1]);
///
/// // 24 grid points in total, so this wraps back to the start
/// assert_eq!(unravel(24, [2, 4, 3]).unwrap(), [0, 0, 0]);
/// ```
///
/// Any zero extent in `shape` is an [Error::InvalidShape].
pub fn unravel(counter: usize, shape: [usize; 3]) -> Result<[usize; 3]> {
    check_shape(shape)?;
    let i = counter % shape[0];
    let remaining = counter / shape[0];
    let j = remaining % shape[1];
    let k = (remaining / shape[1]) % shape[2];
    Ok([i, j, k])
}

/// Convert `[i, j, k]` indices back into a flat counter for a grid `shape`
///
/// Inverse of [unravel()] for indices inside the grid.
///
/// ```rust
/// # use gridio_core::{ravel, unravel};
/// let shape = [2, 4, 3];
/// assert_eq!(ravel([1, 1, 1], shape).unwrap(), 11);
/// assert_eq!(ravel(unravel(17, shape).unwrap(), shape).unwrap(), 17);
/// ```
///
/// Indices outside of the grid are an [Error::InvalidShape] for the offending
/// shape, as are zero extents.
pub fn ravel(index: [usize; 3], shape: [usize; 3]) -> Result<usize> {
    check_shape(shape)?;
    if index.iter().zip(shape.iter()).any(|(i, s)| i >= s) {
        return Err(Error::InvalidShape(shape));
    }
    Ok(index[0] + shape[0] * (index[1] + shape[1] * index[2]))
}

/// Fail fast on any zero grid extent, or a grid too large to count
pub(crate) fn check_shape(shape: [usize; 3]) -> Result<()> {
    let size = shape
        .iter()
        .try_fold(1usize, |size, &n| size.checked_mul(n));

    match size {
        Some(size) if size > 0 => Ok(()),
        _ => Err(Error::InvalidShape(shape)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, [3, 3, 3], [0, 0, 0])]
    #[case(0, [2, 4, 3], [0, 0, 0])]
    #[case(1, [2, 4, 3], [1, 0, 0])]
    #[case(2, [2, 4, 3], [0, 1, 0])]
    #[case(3, [2, 4, 3], [1, 1, 0])]
    #[case(8, [2, 4, 3], [0, 0, 1])]
    #[case(9, [2, 4, 3], [1, 0, 1])]
    #[case(11, [2, 4, 3], [1, 1, 1])]
    #[case(24, [2, 4, 3], [0, 0, 0])]
    fn unravel_reference(#[case] counter: usize, #[case] shape: [usize; 3], #[case] expected: [usize; 3]) {
        assert_eq!(unravel(counter, shape).unwrap(), expected);
    }

    #[rstest]
    #[case([1, 1, 1])]
    #[case([2, 4, 3])]
    #[case([5, 1, 7])]
    #[case([3, 3, 3])]
    fn unravel_bounds_and_periodicity(#[case] shape: [usize; 3]) {
        let size = shape.iter().product::<usize>();
        for n in 0..size {
            let index = unravel(n, shape).unwrap();
            assert!(index[0] < shape[0] && index[1] < shape[1] && index[2] < shape[2]);
            assert_eq!(unravel(n + size, shape).unwrap(), index);
            assert_eq!(ravel(index, shape).unwrap(), n);
        }
    }

    #[test]
    fn zero_extent_is_rejected() {
        assert_eq!(unravel(3, [2, 0, 3]), Err(Error::InvalidShape([2, 0, 3])));
        assert_eq!(ravel([0, 0, 0], [0, 1, 1]), Err(Error::InvalidShape([0, 1, 1])));
    }

    #[test]
    fn overflowing_shape_is_rejected() {
        let shape = [usize::MAX / 2, 3, 1];
        assert_eq!(unravel(5, shape), Err(Error::InvalidShape(shape)));
        assert_eq!(check_shape([usize::MAX, 1, 1]), Ok(()));
    }

    #[test]
    fn ravel_outside_grid() {
        assert!(ravel([2, 0, 0], [2, 4, 3]).is_err());
        assert!(ravel([1, 3, 2], [2, 4, 3]).is_ok());
    }
}
