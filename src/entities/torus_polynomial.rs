use crate::algorithms::polynomial_algorithms::*;
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::{EncodingRange, MessageModulus, PolynomialSize};
use crate::commons::traits::{Container, ContainerMut};
use crate::entities::TorusElement;
use crate::error::{Error, ErrorKind};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A polynomial of the negacyclic ring $\mathbb{T}\_N\[X\] = \mathbb{T}\[X\]/(X^N + 1)$,
/// with torus coefficients stored as raw scalar words.
///
/// The coefficient of degree $i$ sits at index $i$ of the container. All ring
/// operations reduce through the relation $X^N \equiv -1$.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorusPolynomialBase<C: Container> {
    data: C,
}

/// A [`TorusPolynomialBase`] owning the memory for its own storage.
pub type TorusPolynomial<Scalar> = TorusPolynomialBase<Vec<Scalar>>;
/// A [`TorusPolynomialBase`] immutably borrowing memory for its own storage.
pub type TorusPolynomialView<'data, Scalar> = TorusPolynomialBase<&'data [Scalar]>;
/// A [`TorusPolynomialBase`] mutably borrowing memory for its own storage.
pub type TorusPolynomialMutView<'data, Scalar> = TorusPolynomialBase<&'data mut [Scalar]>;

impl<C: Container> AsRef<[C::Element]> for TorusPolynomialBase<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for TorusPolynomialBase<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}

impl<Scalar, C: Container<Element = Scalar>> TorusPolynomialBase<C> {
    /// Create a polynomial from an existing container of raw coefficient words.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    pub fn from_container(container: C) -> Self {
        assert!(
            container.container_len() > 0,
            "Got an empty container to create a TorusPolynomial"
        );
        Self { data: container }
    }

    /// Return the [`PolynomialSize`] of the polynomial.
    pub fn polynomial_size(&self) -> PolynomialSize {
        PolynomialSize(self.data.container_len())
    }

    /// Return the degree of the polynomial, i.e. [`PolynomialSize`] - 1.
    pub fn degree(&self) -> usize {
        self.polynomial_size().0 - 1
    }

    /// Consume the entity and return its underlying container.
    pub fn into_container(self) -> C {
        self.data
    }

    /// Return a view of the polynomial borrowing its coefficients.
    pub fn as_view(&self) -> TorusPolynomialView<'_, Scalar> {
        TorusPolynomialBase {
            data: self.data.as_ref(),
        }
    }
}

impl<Scalar, C: ContainerMut<Element = Scalar>> TorusPolynomialBase<C> {
    /// Return a mutable view of the polynomial borrowing its coefficients.
    pub fn as_mut_view(&mut self) -> TorusPolynomialMutView<'_, Scalar> {
        TorusPolynomialBase {
            data: self.data.as_mut(),
        }
    }
}

impl<Scalar: UnsignedTorus> TorusPolynomial<Scalar> {
    /// Allocate a polynomial of `polynomial_size` coefficients, all equal to zero.
    pub fn new_zero(polynomial_size: PolynomialSize) -> Self {
        Self::from_container(vec![Scalar::ZERO; polynomial_size.0])
    }

    /// Encode a single integer modulo `p` broadcast to every coefficient.
    pub fn from_int(
        value: Scalar,
        modulus: MessageModulus<Scalar>,
        polynomial_size: PolynomialSize,
    ) -> Self {
        let raw = TorusElement::from_int(value, modulus).0;
        Self::from_container(vec![raw; polynomial_size.0])
    }

    /// Encode a single real broadcast to every coefficient, by its fractional part.
    pub fn from_real(value: f64, polynomial_size: PolynomialSize) -> Self {
        let raw = TorusElement::<Scalar>::from_real(value).0;
        Self::from_container(vec![raw; polynomial_size.0])
    }

    /// Encode a single real lying in `range` broadcast to every coefficient.
    pub fn from_float(
        value: f64,
        modulus: MessageModulus<Scalar>,
        range: EncodingRange,
        polynomial_size: PolynomialSize,
    ) -> Self {
        let raw = TorusElement::from_float(value, modulus, range).0;
        Self::from_container(vec![raw; polynomial_size.0])
    }

    /// Encode a slice of integers modulo `p` as the coefficients of a torus
    /// polynomial, applying [`TorusElement::from_int`] coefficient-wise.
    ///
    /// # Example
    ///
    /// ```
    /// use torus_core::commons::parameters::MessageModulus;
    /// use torus_core::entities::TorusPolynomial;
    /// let modulus = MessageModulus::<u64>::try_new(16).unwrap();
    /// let poly = TorusPolynomial::from_int_slice(&[1, 2, 3], modulus);
    /// assert_eq!(poly.to_int_vec(modulus), vec![1, 2, 3]);
    /// ```
    pub fn from_int_slice(values: &[Scalar], modulus: MessageModulus<Scalar>) -> Self {
        Self::from_container(
            values
                .iter()
                .map(|&value| TorusElement::from_int(value, modulus).0)
                .collect(),
        )
    }

    /// Encode a slice of reals by their fractional parts, applying
    /// [`TorusElement::from_real`] coefficient-wise.
    pub fn from_real_slice(values: &[f64]) -> Self {
        Self::from_container(
            values
                .iter()
                .map(|&value| TorusElement::<Scalar>::from_real(value).0)
                .collect(),
        )
    }

    /// Encode a slice of reals lying in `range`, applying
    /// [`TorusElement::from_float`] coefficient-wise.
    pub fn from_float_slice(
        values: &[f64],
        modulus: MessageModulus<Scalar>,
        range: EncodingRange,
    ) -> Self {
        Self::from_container(
            values
                .iter()
                .map(|&value| TorusElement::from_float(value, modulus, range).0)
                .collect(),
        )
    }
}

impl<Scalar: UnsignedTorus, C: Container<Element = Scalar>> TorusPolynomialBase<C> {
    /// Decode every coefficient to an integer below `p`, applying
    /// [`TorusElement::to_int`] coefficient-wise.
    pub fn to_int_vec(&self, modulus: MessageModulus<Scalar>) -> Vec<Scalar> {
        self.as_ref()
            .iter()
            .map(|&raw| TorusElement(raw).to_int(modulus))
            .collect()
    }

    /// Decode every coefficient to a real in $\[0, 1)$, applying
    /// [`TorusElement::to_real`] coefficient-wise.
    pub fn to_real_vec(&self, modulus: MessageModulus<Scalar>) -> Vec<f64> {
        self.as_ref()
            .iter()
            .map(|&raw| TorusElement(raw).to_real(modulus))
            .collect()
    }

    /// Decode every coefficient back onto `range`, applying
    /// [`TorusElement::to_float`] coefficient-wise.
    pub fn to_float_vec(&self, modulus: MessageModulus<Scalar>, range: EncodingRange) -> Vec<f64> {
        self.as_ref()
            .iter()
            .map(|&raw| TorusElement(raw).to_float(modulus, range))
            .collect()
    }

    fn check_same_size<OtherCont: Container<Element = Scalar>>(
        &self,
        rhs: &TorusPolynomialBase<OtherCont>,
    ) -> Result<(), Error> {
        if self.polynomial_size() != rhs.polynomial_size() {
            return Err(ErrorKind::SizeMismatch {
                lhs: self.polynomial_size(),
                rhs: rhs.polynomial_size(),
            }
            .into());
        }
        Ok(())
    }

    /// Coefficient-wise torus addition, failing if the sizes differ.
    pub fn checked_add<OtherCont: Container<Element = Scalar>>(
        &self,
        rhs: &TorusPolynomialBase<OtherCont>,
    ) -> Result<TorusPolynomial<Scalar>, Error> {
        self.check_same_size(rhs)?;
        let mut output = TorusPolynomial::from_container(self.as_ref().to_vec());
        polynomial_wrapping_add_assign(&mut output, rhs);
        Ok(output)
    }

    /// Coefficient-wise torus subtraction, failing if the sizes differ.
    pub fn checked_sub<OtherCont: Container<Element = Scalar>>(
        &self,
        rhs: &TorusPolynomialBase<OtherCont>,
    ) -> Result<TorusPolynomial<Scalar>, Error> {
        self.check_same_size(rhs)?;
        let mut output = TorusPolynomial::from_container(self.as_ref().to_vec());
        polynomial_wrapping_sub_assign(&mut output, rhs);
        Ok(output)
    }

    /// Negacyclic product of the quantized representatives of both operands.
    ///
    /// Both polynomials are decoded to their integer coefficients modulo `p`,
    /// convolved in $\mathbb{Z}\[X\]/(X^N + 1)$, and the product coefficients are
    /// re-encoded modulo `p`. Since `p` divides the scalar width, the wrapping
    /// scalar convolution is already congruent modulo `p`; only the final mask
    /// is needed before re-encoding.
    ///
    /// Sizes for which [`polynomial_karatsuba_wrapping_mul`] applies use it;
    /// the rest falls back to the schoolbook algorithm, with identical results.
    pub fn checked_mul<OtherCont: Container<Element = Scalar>>(
        &self,
        rhs: &TorusPolynomialBase<OtherCont>,
        modulus: MessageModulus<Scalar>,
    ) -> Result<TorusPolynomial<Scalar>, Error> {
        self.check_same_size(rhs)?;

        let lhs_int = TorusPolynomial::from_container(self.to_int_vec(modulus));
        let rhs_int = TorusPolynomial::from_container(rhs.to_int_vec(modulus));

        let mut product = TorusPolynomial::new_zero(self.polynomial_size());
        if karatsuba_applies(self.polynomial_size().0) {
            polynomial_karatsuba_wrapping_mul(&mut product, &lhs_int, &rhs_int);
        } else {
            polynomial_wrapping_mul(&mut product, &lhs_int, &rhs_int);
        }

        let mask = modulus.mask();
        Ok(TorusPolynomial::from_container(
            product
                .as_ref()
                .iter()
                .map(|&coeff| TorusElement::from_int(coeff & mask, modulus).0)
                .collect(),
        ))
    }
}

impl<Scalar, C, OtherCont> Add<&TorusPolynomialBase<OtherCont>> for &TorusPolynomialBase<C>
where
    Scalar: UnsignedTorus,
    C: Container<Element = Scalar>,
    OtherCont: Container<Element = Scalar>,
{
    type Output = TorusPolynomial<Scalar>;

    /// Convenience operator around [`TorusPolynomialBase::checked_add`].
    ///
    /// # Panics
    ///
    /// Panics if the polynomial sizes differ.
    fn add(self, rhs: &TorusPolynomialBase<OtherCont>) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<Scalar, C, OtherCont> Sub<&TorusPolynomialBase<OtherCont>> for &TorusPolynomialBase<C>
where
    Scalar: UnsignedTorus,
    C: Container<Element = Scalar>,
    OtherCont: Container<Element = Scalar>,
{
    type Output = TorusPolynomial<Scalar>;

    /// Convenience operator around [`TorusPolynomialBase::checked_sub`].
    ///
    /// # Panics
    ///
    /// Panics if the polynomial sizes differ.
    fn sub(self, rhs: &TorusPolynomialBase<OtherCont>) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}
