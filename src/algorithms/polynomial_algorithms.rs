//! Module providing algorithms to perform computations on polynomials modulo $X^{N} + 1$.

use crate::algorithms::slice_algorithms::*;
use crate::commons::numeric::UnsignedInteger;
use crate::commons::traits::{Container, ContainerMut};
use crate::entities::TorusPolynomialBase;

/// Smallest polynomial size handed to the schoolbook algorithm by the karatsuba recursion.
const KARATSUBA_STOP: usize = 64;

/// Adds a polynomial to the output polynomial.
///
/// # Note
///
/// Computations wrap around (similar to computing modulo $2^{n\_{bits}}$) when exceeding the
/// unsigned integer capacity.
///
/// # Example
///
/// ```
/// use torus_core::algorithms::polynomial_algorithms::*;
/// use torus_core::entities::TorusPolynomialBase;
/// let mut first = TorusPolynomialBase::from_container(vec![1u64, 2, 3]);
/// let second = TorusPolynomialBase::from_container(vec![u64::MAX, 255, 255]);
/// polynomial_wrapping_add_assign(&mut first, &second);
/// assert_eq!(first.as_ref(), &[0u64, 257, 258]);
/// ```
pub fn polynomial_wrapping_add_assign<Scalar, OutputCont, InputCont>(
    lhs: &mut TorusPolynomialBase<OutputCont>,
    rhs: &TorusPolynomialBase<InputCont>,
) where
    Scalar: UnsignedInteger,
    OutputCont: ContainerMut<Element = Scalar>,
    InputCont: Container<Element = Scalar>,
{
    assert_eq!(lhs.polynomial_size(), rhs.polynomial_size());
    slice_wrapping_add_assign(lhs.as_mut(), rhs.as_ref())
}

/// Subtracts a polynomial from the output polynomial.
///
/// # Note
///
/// Computations wrap around (similar to computing modulo $2^{n\_{bits}}$) when exceeding the
/// unsigned integer capacity.
///
/// # Example
///
/// ```
/// use torus_core::algorithms::polynomial_algorithms::*;
/// use torus_core::entities::TorusPolynomialBase;
/// let mut first = TorusPolynomialBase::from_container(vec![1u64, 255, 3]);
/// let second = TorusPolynomialBase::from_container(vec![2u64, 255, 1]);
/// polynomial_wrapping_sub_assign(&mut first, &second);
/// assert_eq!(first.as_ref(), &[u64::MAX, 0, 2]);
/// ```
pub fn polynomial_wrapping_sub_assign<Scalar, OutputCont, InputCont>(
    lhs: &mut TorusPolynomialBase<OutputCont>,
    rhs: &TorusPolynomialBase<InputCont>,
) where
    Scalar: UnsignedInteger,
    OutputCont: ContainerMut<Element = Scalar>,
    InputCont: Container<Element = Scalar>,
{
    assert_eq!(lhs.polynomial_size(), rhs.polynomial_size());
    slice_wrapping_sub_assign(lhs.as_mut(), rhs.as_ref())
}

/// Adds the result of the product between two polynomials, reduced modulo $(X^{N}+1)$, to the
/// output polynomial.
///
/// This is the schoolbook multiply-accumulate: every pair of input coefficients is
/// multiplied once, and terms of degree $N$ or more fold back with a sign flip
/// through the ring relation $X^N \equiv -1$.
///
/// # Note
///
/// Computations wrap around (similar to computing modulo $2^{n\_{bits}}$) when exceeding the
/// unsigned integer capacity.
///
/// # Example
///
/// ```
/// use torus_core::algorithms::polynomial_algorithms::*;
/// use torus_core::entities::TorusPolynomialBase;
/// let poly_1 = TorusPolynomialBase::from_container(vec![1u64, 2, 3]);
/// let poly_2 = TorusPolynomialBase::from_container(vec![0u64, 1, 1]);
/// let mut res = TorusPolynomialBase::from_container(vec![0u64; 3]);
/// polynomial_wrapping_add_mul_assign(&mut res, &poly_1, &poly_2);
/// assert_eq!(res.as_ref(), &[u64::MAX.wrapping_sub(4), u64::MAX.wrapping_sub(1), 3]);
/// ```
pub fn polynomial_wrapping_add_mul_assign<Scalar, OutputCont, InputCont1, InputCont2>(
    output: &mut TorusPolynomialBase<OutputCont>,
    lhs: &TorusPolynomialBase<InputCont1>,
    rhs: &TorusPolynomialBase<InputCont2>,
) where
    Scalar: UnsignedInteger,
    OutputCont: ContainerMut<Element = Scalar>,
    InputCont1: Container<Element = Scalar>,
    InputCont2: Container<Element = Scalar>,
{
    assert!(
        output.polynomial_size() == lhs.polynomial_size(),
        "Output polynomial size {:?} is not the same as input lhs polynomial {:?}.",
        output.polynomial_size(),
        lhs.polynomial_size(),
    );
    assert!(
        output.polynomial_size() == rhs.polynomial_size(),
        "Output polynomial size {:?} is not the same as input rhs polynomial {:?}.",
        output.polynomial_size(),
        rhs.polynomial_size(),
    );
    let degree = output.degree();
    let polynomial_size = output.polynomial_size();

    for (lhs_degree, &lhs_coeff) in lhs.as_ref().iter().enumerate() {
        for (rhs_degree, &rhs_coeff) in rhs.as_ref().iter().enumerate() {
            let target_degree = lhs_degree + rhs_degree;
            if target_degree <= degree {
                let output_coefficient = &mut output.as_mut()[target_degree];

                *output_coefficient =
                    (*output_coefficient).wrapping_add(lhs_coeff.wrapping_mul(rhs_coeff));
            } else {
                let target_degree = target_degree % polynomial_size.0;
                let output_coefficient = &mut output.as_mut()[target_degree];

                *output_coefficient =
                    (*output_coefficient).wrapping_sub(lhs_coeff.wrapping_mul(rhs_coeff));
            }
        }
    }
}

/// Fills the output polynomial with the product of two polynomials, reduced modulo
/// $(X^{N}+1)$, using the schoolbook algorithm.
///
/// This is the $O(N^2)$ reference any faster multiplication must match bit for bit;
/// see [`polynomial_karatsuba_wrapping_mul`] for the in-tree substitution.
///
/// # Note
///
/// Computations wrap around (similar to computing modulo $2^{n\_{bits}}$) when exceeding the
/// unsigned integer capacity.
pub fn polynomial_wrapping_mul<Scalar, OutputCont, InputCont1, InputCont2>(
    output: &mut TorusPolynomialBase<OutputCont>,
    lhs: &TorusPolynomialBase<InputCont1>,
    rhs: &TorusPolynomialBase<InputCont2>,
) where
    Scalar: UnsignedInteger,
    OutputCont: ContainerMut<Element = Scalar>,
    InputCont1: Container<Element = Scalar>,
    InputCont2: Container<Element = Scalar>,
{
    output.as_mut().fill(Scalar::ZERO);
    polynomial_wrapping_add_mul_assign(output, lhs, rhs);
}

/// Fills the output polynomial with the product of two polynomials, reduced modulo
/// $(X^{N}+1)$, using the karatsuba algorithm.
///
/// Produces results bit-identical to [`polynomial_wrapping_mul`] for every input:
/// both algorithms evaluate the same integer convolution and all intermediate
/// arithmetic wraps modulo $2^{n\_{bits}}$.
///
/// # Panics
///
/// Panics when the polynomial size is not a power of two, or is too small for the
/// recursion to pay off; callers are expected to fall back to
/// [`polynomial_wrapping_mul`] for such sizes.
pub fn polynomial_karatsuba_wrapping_mul<Scalar, OutputCont, InputCont1, InputCont2>(
    output: &mut TorusPolynomialBase<OutputCont>,
    p: &TorusPolynomialBase<InputCont1>,
    q: &TorusPolynomialBase<InputCont2>,
) where
    Scalar: UnsignedInteger,
    OutputCont: ContainerMut<Element = Scalar>,
    InputCont1: Container<Element = Scalar>,
    InputCont2: Container<Element = Scalar>,
{
    // check same dimensions
    assert_eq!(output.polynomial_size(), p.polynomial_size());
    assert_eq!(output.polynomial_size(), q.polynomial_size());

    let poly_size = output.polynomial_size().0;

    // check dimensions are a power of 2 big enough to split
    assert!(poly_size.is_power_of_two());
    assert!(poly_size >= 2 * KARATSUBA_STOP);

    // allocate slices for the rec
    let mut a0 = vec![Scalar::ZERO; poly_size];
    let mut a1 = vec![Scalar::ZERO; poly_size];
    let mut a2 = vec![Scalar::ZERO; poly_size];
    let mut input_a2_p = vec![Scalar::ZERO; poly_size / 2];
    let mut input_a2_q = vec![Scalar::ZERO; poly_size / 2];

    // prepare for splitting
    let bottom = 0..(poly_size / 2);
    let top = (poly_size / 2)..poly_size;

    let p = p.as_ref();
    let q = q.as_ref();

    // induction
    induction_karatsuba(&mut a0, &p[bottom.clone()], &q[bottom.clone()]);
    induction_karatsuba(&mut a1, &p[top.clone()], &q[top.clone()]);
    slice_wrapping_add(&mut input_a2_p, &p[bottom.clone()], &p[top.clone()]);
    slice_wrapping_add(&mut input_a2_q, &q[bottom.clone()], &q[top.clone()]);
    induction_karatsuba(&mut a2, &input_a2_p, &input_a2_q);

    // rebuild the result: the low and high halves of the middle term fold back
    // through X^N = -1 with opposite signs
    let output = output.as_mut();
    slice_wrapping_sub(output, &a0, &a1);
    slice_wrapping_sub_assign(&mut output[bottom.clone()], &a2[top.clone()]);
    slice_wrapping_add_assign(&mut output[bottom.clone()], &a0[top.clone()]);
    slice_wrapping_add_assign(&mut output[bottom.clone()], &a1[top.clone()]);
    slice_wrapping_add_assign(&mut output[top.clone()], &a2[bottom.clone()]);
    slice_wrapping_sub_assign(&mut output[top.clone()], &a0[bottom.clone()]);
    slice_wrapping_sub_assign(&mut output[top], &a1[bottom]);
}

/// Compute the full (unreduced) product of `p` and `q` into `res`.
///
/// `res` must be zeroed and twice as long as the inputs.
fn induction_karatsuba<Scalar>(res: &mut [Scalar], p: &[Scalar], q: &[Scalar])
where
    Scalar: UnsignedInteger,
{
    if p.len() <= KARATSUBA_STOP {
        // schoolbook algorithm
        for (lhs_degree, &lhs_coeff) in p.iter().enumerate() {
            let res = &mut res[lhs_degree..];
            for (&rhs_coeff, res) in q.iter().zip(res) {
                *res = (*res).wrapping_add(lhs_coeff.wrapping_mul(rhs_coeff));
            }
        }
    } else {
        let poly_size = p.len();
        let half = poly_size / 2;

        // allocate slices for the rec
        let mut a0 = vec![Scalar::ZERO; poly_size];
        let mut a1 = vec![Scalar::ZERO; poly_size];
        let mut a2 = vec![Scalar::ZERO; poly_size];
        let mut input_a2_p = vec![Scalar::ZERO; half];
        let mut input_a2_q = vec![Scalar::ZERO; half];

        // prepare for splitting
        let bottom = 0..half;
        let top = half..poly_size;

        // induction
        induction_karatsuba(&mut a0, &p[bottom.clone()], &q[bottom.clone()]);
        induction_karatsuba(&mut a1, &p[top.clone()], &q[top.clone()]);
        slice_wrapping_add(&mut input_a2_p, &p[bottom.clone()], &p[top.clone()]);
        slice_wrapping_add(&mut input_a2_q, &q[bottom], &q[top]);
        induction_karatsuba(&mut a2, &input_a2_p, &input_a2_q);

        // rebuild the result
        slice_wrapping_add_assign(&mut res[..poly_size], &a0);
        slice_wrapping_add_assign(&mut res[half..half + poly_size], &a2);
        slice_wrapping_sub_assign(&mut res[half..half + poly_size], &a0);
        slice_wrapping_sub_assign(&mut res[half..half + poly_size], &a1);
        slice_wrapping_add_assign(&mut res[poly_size..], &a1);
    }
}

/// Whether [`polynomial_karatsuba_wrapping_mul`] accepts this size.
pub(crate) fn karatsuba_applies(poly_size: usize) -> bool {
    poly_size.is_power_of_two() && poly_size >= 2 * KARATSUBA_STOP
}

/// Fills the output polynomial with the product of two polynomials, reduced modulo
/// $(X^{N}+1)$, computing every output coefficient in parallel.
///
/// Bit-identical to [`polynomial_wrapping_mul`]: each output coefficient is an
/// independent wrapping sum, so the work splits across threads without changing
/// any result.
#[cfg(feature = "parallel")]
pub fn par_polynomial_wrapping_mul<Scalar, OutputCont, InputCont1, InputCont2>(
    output: &mut TorusPolynomialBase<OutputCont>,
    lhs: &TorusPolynomialBase<InputCont1>,
    rhs: &TorusPolynomialBase<InputCont2>,
) where
    Scalar: UnsignedInteger,
    OutputCont: ContainerMut<Element = Scalar>,
    InputCont1: Container<Element = Scalar>,
    InputCont2: Container<Element = Scalar>,
{
    use rayon::prelude::*;

    assert_eq!(output.polynomial_size(), lhs.polynomial_size());
    assert_eq!(output.polynomial_size(), rhs.polynomial_size());

    let poly_size = output.polynomial_size().0;
    let lhs = lhs.as_ref();
    let rhs = rhs.as_ref();

    output
        .as_mut()
        .par_iter_mut()
        .enumerate()
        .for_each(|(target_degree, out)| {
            let mut acc = Scalar::ZERO;
            for (lhs_degree, &lhs_coeff) in lhs.iter().enumerate() {
                // the rhs index wrapping past N picks up a sign flip from X^N = -1
                let product = if lhs_degree <= target_degree {
                    lhs_coeff.wrapping_mul(rhs[target_degree - lhs_degree])
                } else {
                    lhs_coeff
                        .wrapping_mul(rhs[poly_size + target_degree - lhs_degree])
                        .wrapping_neg()
                };
                acc = acc.wrapping_add(product);
            }
            *out = acc;
        });
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::test_tools::random_integers_under;
    use crate::entities::TorusPolynomial;

    /// Textbook negacyclic convolution over u128, reducing modulo `modulus` at every
    /// step; written independently from the wrapping implementations above.
    fn reference_negacyclic_mul(lhs: &[u64], rhs: &[u64], modulus: u128) -> Vec<u64> {
        let n = lhs.len();
        let mut full = vec![0u128; 2 * n - 1];
        for (i, &a) in lhs.iter().enumerate() {
            for (j, &b) in rhs.iter().enumerate() {
                full[i + j] = (full[i + j] + (a as u128 % modulus) * (b as u128 % modulus) % modulus)
                    % modulus;
            }
        }
        (0..n)
            .map(|i| {
                let high = if i + n < 2 * n - 1 { full[i + n] } else { 0 };
                (((full[i] + modulus) - high) % modulus) as u64
            })
            .collect()
    }

    fn int_polynomial(coeffs: &[u64]) -> TorusPolynomial<u64> {
        TorusPolynomial::from_container(coeffs.to_vec())
    }

    #[test]
    fn test_naive_mul_matches_reference() {
        let modulus = 1u128 << 16;
        for poly_size in [512usize, 1024, 4096] {
            let lhs = random_integers_under(modulus, poly_size);
            let rhs = random_integers_under(modulus, poly_size);

            let mut product = int_polynomial(&vec![0; poly_size]);
            polynomial_wrapping_mul(&mut product, &int_polynomial(&lhs), &int_polynomial(&rhs));

            let expected = reference_negacyclic_mul(&lhs, &rhs, modulus);
            let mask = (modulus - 1) as u64;
            let reduced: Vec<u64> = product.as_ref().iter().map(|&c| c & mask).collect();
            assert_eq!(reduced, expected, "failed for N={poly_size}");
        }
    }

    #[test]
    fn test_karatsuba_mul_matches_naive() {
        for poly_size in [512usize, 1024, 4096] {
            let lhs = int_polynomial(&random_integers_under(1 << 32, poly_size));
            let rhs = int_polynomial(&random_integers_under(1 << 32, poly_size));

            let mut naive = int_polynomial(&vec![0; poly_size]);
            polynomial_wrapping_mul(&mut naive, &lhs, &rhs);

            let mut karatsuba = int_polynomial(&vec![0; poly_size]);
            polynomial_karatsuba_wrapping_mul(&mut karatsuba, &lhs, &rhs);

            assert_eq!(naive.as_ref(), karatsuba.as_ref(), "failed for N={poly_size}");
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_mul_matches_naive() {
        for poly_size in [127usize, 512, 1024] {
            let lhs = int_polynomial(&random_integers_under(1 << 32, poly_size));
            let rhs = int_polynomial(&random_integers_under(1 << 32, poly_size));

            let mut naive = int_polynomial(&vec![0; poly_size]);
            polynomial_wrapping_mul(&mut naive, &lhs, &rhs);

            let mut parallel = int_polynomial(&vec![0; poly_size]);
            par_polynomial_wrapping_mul(&mut parallel, &lhs, &rhs);

            assert_eq!(naive.as_ref(), parallel.as_ref(), "failed for N={poly_size}");
        }
    }

    #[test]
    fn test_mul_by_x_rotates_with_sign() {
        // (a0 + a1 X + a2 X^2 + a3 X^3) * X = -a3 + a0 X + a1 X^2 + a2 X^3
        let lhs = int_polynomial(&[1, 2, 3, 4]);
        let x = int_polynomial(&[0, 1, 0, 0]);
        let mut product = int_polynomial(&[0; 4]);
        polynomial_wrapping_mul(&mut product, &lhs, &x);
        assert_eq!(product.as_ref(), &[4u64.wrapping_neg(), 1, 2, 3]);
    }

    #[test]
    fn test_add_mul_assign_accumulates() {
        let lhs = int_polynomial(&[1, 2]);
        let rhs = int_polynomial(&[3, 4]);
        let mut acc = int_polynomial(&[10, 20]);
        // full product: 3 + 10 X + 8 X^2; folded: (3 - 8) + 10 X
        polynomial_wrapping_add_mul_assign(&mut acc, &lhs, &rhs);
        assert_eq!(acc.as_ref(), &[5, 30]);
    }
}
