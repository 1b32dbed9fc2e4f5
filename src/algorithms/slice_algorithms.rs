//! Module providing algorithms to perform computations on raw slices.

use crate::commons::numeric::UnsignedInteger;

/// Add two slices containing unsigned integers element-wise.
///
/// # Note
///
/// Computations wrap around (similar to computing modulo $2^{n\_{bits}}$) when exceeding the
/// unsigned integer capacity.
///
/// # Example
///
/// ```
/// use torus_core::algorithms::slice_algorithms::*;
/// let first = vec![1u64, 2, 3];
/// let second = vec![u64::MAX, 255, 255];
/// let mut add = vec![0u64; 3];
/// slice_wrapping_add(&mut add, &first, &second);
/// assert_eq!(&add, &[0u64, 257, 258]);
/// ```
pub fn slice_wrapping_add<Scalar>(output: &mut [Scalar], lhs: &[Scalar], rhs: &[Scalar])
where
    Scalar: UnsignedInteger,
{
    assert!(
        lhs.len() == rhs.len(),
        "lhs (len: {}) and rhs (len: {}) must have the same length",
        lhs.len(),
        rhs.len()
    );
    assert!(
        output.len() == lhs.len(),
        "output (len: {}) and lhs (len: {}) must have the same length",
        output.len(),
        lhs.len()
    );

    output
        .iter_mut()
        .zip(lhs.iter().zip(rhs.iter()))
        .for_each(|(out, (&lhs, &rhs))| *out = lhs.wrapping_add(rhs));
}

/// Add a slice containing unsigned integers to another one element-wise and in place.
///
/// # Note
///
/// Computations wrap around (similar to computing modulo $2^{n\_{bits}}$) when exceeding the
/// unsigned integer capacity.
///
/// # Example
///
/// ```
/// use torus_core::algorithms::slice_algorithms::*;
/// let mut first = vec![1u64, 2, 3];
/// let second = vec![u64::MAX, 255, 255];
/// slice_wrapping_add_assign(&mut first, &second);
/// assert_eq!(&first, &[0u64, 257, 258]);
/// ```
pub fn slice_wrapping_add_assign<Scalar>(lhs: &mut [Scalar], rhs: &[Scalar])
where
    Scalar: UnsignedInteger,
{
    assert!(
        lhs.len() == rhs.len(),
        "lhs (len: {}) and rhs (len: {}) must have the same length",
        lhs.len(),
        rhs.len()
    );

    lhs.iter_mut()
        .zip(rhs.iter())
        .for_each(|(lhs, &rhs)| *lhs = (*lhs).wrapping_add(rhs));
}

/// Subtract two slices containing unsigned integers element-wise.
///
/// # Note
///
/// Computations wrap around (similar to computing modulo $2^{n\_{bits}}$) when exceeding the
/// unsigned integer capacity.
///
/// # Example
///
/// ```
/// use torus_core::algorithms::slice_algorithms::*;
/// let first = vec![1u64, 255, 3];
/// let second = vec![2u64, 255, 1];
/// let mut sub = vec![0u64; 3];
/// slice_wrapping_sub(&mut sub, &first, &second);
/// assert_eq!(&sub, &[u64::MAX, 0, 2]);
/// ```
pub fn slice_wrapping_sub<Scalar>(output: &mut [Scalar], lhs: &[Scalar], rhs: &[Scalar])
where
    Scalar: UnsignedInteger,
{
    assert!(
        lhs.len() == rhs.len(),
        "lhs (len: {}) and rhs (len: {}) must have the same length",
        lhs.len(),
        rhs.len()
    );
    assert!(
        output.len() == lhs.len(),
        "output (len: {}) and lhs (len: {}) must have the same length",
        output.len(),
        lhs.len()
    );

    output
        .iter_mut()
        .zip(lhs.iter().zip(rhs.iter()))
        .for_each(|(out, (&lhs, &rhs))| *out = lhs.wrapping_sub(rhs));
}

/// Subtract a slice containing unsigned integers from another one element-wise and in place.
///
/// # Note
///
/// Computations wrap around (similar to computing modulo $2^{n\_{bits}}$) when exceeding the
/// unsigned integer capacity.
///
/// # Example
///
/// ```
/// use torus_core::algorithms::slice_algorithms::*;
/// let mut first = vec![1u64, 255, 3];
/// let second = vec![2u64, 255, 1];
/// slice_wrapping_sub_assign(&mut first, &second);
/// assert_eq!(&first, &[u64::MAX, 0, 2]);
/// ```
pub fn slice_wrapping_sub_assign<Scalar>(lhs: &mut [Scalar], rhs: &[Scalar])
where
    Scalar: UnsignedInteger,
{
    assert!(
        lhs.len() == rhs.len(),
        "lhs (len: {}) and rhs (len: {}) must have the same length",
        lhs.len(),
        rhs.len()
    );

    lhs.iter_mut()
        .zip(rhs.iter())
        .for_each(|(lhs, &rhs)| *lhs = (*lhs).wrapping_sub(rhs));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add_then_sub_is_identity() {
        let first = vec![0u64, 1, u64::MAX, 1 << 63];
        let second = vec![u64::MAX, u64::MAX - 1, 2, 1 << 63];
        let mut acc = first.clone();
        slice_wrapping_add_assign(&mut acc, &second);
        slice_wrapping_sub_assign(&mut acc, &second);
        assert_eq!(acc, first);
    }

    #[test]
    #[should_panic(expected = "must have the same length")]
    fn test_length_mismatch_panics() {
        let mut lhs = vec![0u64; 4];
        let rhs = vec![0u64; 3];
        slice_wrapping_add_assign(&mut lhs, &rhs);
    }
}
