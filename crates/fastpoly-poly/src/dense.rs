//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order and every value is
//! kept in canonical form: the sequence is never empty and has no
//! trailing zero except for the zero polynomial itself, `[0]`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use fastpoly_rings::Field;

use crate::error::PolyError;

/// A dense univariate polynomial over a field.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial<T: Field> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<T>,
}

impl<T: Field> Polynomial<T> {
    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// Trailing zeros are removed; an empty vector gives the zero
    /// polynomial.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut p = Self { coeffs };
        if p.coeffs.is_empty() {
            p.coeffs.push(T::zero());
        }
        p.shorten();
        p
    }

    /// Creates a polynomial from small integer coefficients.
    #[must_use]
    pub fn from_ints(coeffs: &[i64]) -> Self {
        Self::new(coeffs.iter().map(|&c| T::from_i64(c)).collect())
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![T::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![T::zero(), T::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        let mut coeffs = vec![T::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the number of coefficients.
    ///
    /// This is *not* the mathematical degree: the zero polynomial gives 0,
    /// a non-zero constant gives 1 and a polynomial of degree d gives
    /// d + 1. Multiplication and division size their work with it.
    #[must_use]
    pub fn deg(&self) -> usize {
        if self.coeffs.len() == 1 {
            usize::from(!self.coeffs[0].is_zero())
        } else {
            self.coeffs.len()
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient (zero for the zero polynomial).
    #[must_use]
    pub fn leading_coeff(&self) -> &T {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// Drops trailing zero coefficients, keeping at least one.
    pub(crate) fn shorten(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last().is_some_and(T::is_zero) {
            self.coeffs.pop();
        }
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result += other;
        result
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result -= other;
        result
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        let mut result = self.clone();
        result *= c.clone();
        result
    }

    /// Divides by a scalar.
    ///
    /// # Errors
    ///
    /// [`PolyError::DivisionByZero`] if `c` is zero.
    pub fn div_scalar(&self, c: &T) -> Result<Self, PolyError> {
        let inv = c.inv().ok_or(PolyError::DivisionByZero)?;
        Ok(self.scale(&inv))
    }

    /// Returns the first `n` coefficients, i.e. the polynomial mod x^n.
    #[must_use]
    pub fn mod_xn(&self, n: usize) -> Self {
        if n == 0 {
            return Self::zero();
        }
        if self.coeffs.len() <= n {
            return self.clone();
        }
        Self::new(self.coeffs[..n].to_vec())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::zero();
        }

        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_scalar(i as i64))
            .collect();
        Self::new(coeffs)
    }
}

impl<T: Field> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Field> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Field> fmt::Display for Polynomial<T> {
    /// Renders terms from the highest degree down, e.g. `3*x^2 + 2*x + 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match i {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{i}"),
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}

impl<'a, T: Field> AddAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, other: &'a Polynomial<T>) {
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), T::zero());
        }
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a = a.clone() + b.clone();
        }
        self.shorten();
    }
}

impl<'a, T: Field> SubAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, other: &'a Polynomial<T>) {
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), T::zero());
        }
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a = a.clone() - b.clone();
        }
        self.shorten();
    }
}

impl<T: Field> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<T: Field> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<T: Field> MulAssign<T> for Polynomial<T> {
    fn mul_assign(&mut self, c: T) {
        for coeff in &mut self.coeffs {
            *coeff = coeff.clone() * c.clone();
        }
        self.shorten();
    }
}

impl<T: Field> Mul<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, c: T) -> Polynomial<T> {
        let mut result = self.clone();
        result *= c;
        result
    }
}

impl<T: Field> Mul<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(mut self, c: T) -> Polynomial<T> {
        self *= c;
        self
    }
}

impl<'a, T: Field> Add<&'a Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: &'a Polynomial<T>) -> Polynomial<T> {
        Polynomial::add(self, other)
    }
}

impl<'a, T: Field> Sub<&'a Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, other: &'a Polynomial<T>) -> Polynomial<T> {
        Polynomial::sub(self, other)
    }
}

impl<T: Field> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::neg(self)
    }
}

impl<T: Field> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(mut self) -> Polynomial<T> {
        for c in &mut self.coeffs {
            *c = -c.clone();
        }
        self
    }
}

/// Forwards the owned/borrowed operand combinations to the `&a op &b` impl.
macro_rules! impl_op {
    ($trait:ident, $method:ident, $bound:path) => {
        impl<T: $bound> $trait<Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            #[inline]
            fn $method(self, other: Polynomial<T>) -> Polynomial<T> {
                (&self).$method(&other)
            }
        }

        impl<'a, T: $bound> $trait<&'a Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            #[inline]
            fn $method(self, other: &'a Polynomial<T>) -> Polynomial<T> {
                (&self).$method(other)
            }
        }

        impl<T: $bound> $trait<Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            #[inline]
            fn $method(self, other: Polynomial<T>) -> Polynomial<T> {
                self.$method(&other)
            }
        }
    };
}

pub(crate) use impl_op;

impl_op!(Add, add, Field);
impl_op!(Sub, sub, Field);

impl<T: Field> num_traits::Zero for Polynomial<T> {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastpoly_rings::{Fp, Ring, Q};

    type P = Polynomial<Q>;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_canonical_form() {
        let p = P::from_ints(&[1, 2, 0, 0]);
        assert_eq!(p.coeffs(), &[q(1), q(2)]);

        let z = P::new(Vec::new());
        assert_eq!(z.coeffs(), &[q(0)]);
        assert_eq!(P::from_ints(&[0, 0, 0]), P::zero());
    }

    #[test]
    fn test_deg_counts_coefficients() {
        assert_eq!(P::zero().deg(), 0);
        assert_eq!(P::from_ints(&[5]).deg(), 1);
        assert_eq!(P::from_ints(&[1, 0, 0, 3]).deg(), 4);
    }

    #[test]
    fn test_add_sub() {
        let p = P::from_ints(&[1, 2]); // 1 + 2x
        let r = P::from_ints(&[3, 4, 5]); // 3 + 4x + 5x^2

        assert_eq!(&p + &r, P::from_ints(&[4, 6, 5]));
        assert_eq!(&r - &p, P::from_ints(&[2, 2, 5]));
        assert_eq!(&p - &p, P::zero());

        // Leading terms cancel
        let s = P::from_ints(&[0, 1, -5]);
        assert_eq!((r + s).coeffs(), &[q(3), q(5)]);
    }

    #[test]
    fn test_assign_ops() {
        let mut p = P::from_ints(&[1, 1]);
        p += P::from_ints(&[0, -1]);
        assert_eq!(p, P::one());
        p -= P::one();
        assert!(p.is_zero());
    }

    #[test]
    fn test_neg() {
        let p = P::from_ints(&[1, -2, 3]);
        assert_eq!(-&p, P::from_ints(&[-1, 2, -3]));
        assert_eq!(-P::zero(), P::zero());
    }

    #[test]
    fn test_scalar_ops() {
        let p = P::from_ints(&[2, 4]);
        assert_eq!(p.scale(&Q::new(1, 2)), P::from_ints(&[1, 2]));
        assert_eq!(&p * q(0), P::zero());
        assert_eq!(p.div_scalar(&q(2)).unwrap(), P::from_ints(&[1, 2]));
        assert_eq!(p.div_scalar(&q(0)), Err(PolyError::DivisionByZero));
    }

    #[test]
    fn test_mod_xn() {
        let p = P::from_ints(&[1, 2, 0, 4]);
        assert_eq!(p.mod_xn(0), P::zero());
        assert_eq!(p.mod_xn(1), P::one());
        assert_eq!(p.mod_xn(3), P::from_ints(&[1, 2]));
        assert_eq!(p.mod_xn(10), p);
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2
        let p = P::from_ints(&[1, 2, 3]);
        assert_eq!(p.eval(&q(2)), q(17));
        assert_eq!(p.eval(&q(0)), q(1));
        assert_eq!(P::zero().eval(&q(9)), q(0));
    }

    #[test]
    fn test_derivative() {
        // d/dx (1 + 2x + 3x^2) = 2 + 6x
        let p = P::from_ints(&[1, 2, 3]);
        assert_eq!(p.derivative(), P::from_ints(&[2, 6]));
        assert_eq!(P::from_ints(&[7]).derivative(), P::zero());
        assert_eq!(P::zero().derivative().coeffs(), &[q(0)]);
    }

    #[test]
    fn test_derivative_in_small_characteristic() {
        // d/dx x^3 = 3x^2 = 0 over Z_3
        type F3 = Fp<3>;
        let p = Polynomial::<F3>::monomial(F3::one(), 3);
        assert!(p.derivative().is_zero());
    }

    #[test]
    fn test_display() {
        let p = P::from_ints(&[1, 0, 3]);
        assert_eq!(p.to_string(), "3*x^2 + 1");
        assert_eq!(P::from_ints(&[0, -2]).to_string(), "-2*x");
        assert_eq!(P::zero().to_string(), "0");
    }
}
