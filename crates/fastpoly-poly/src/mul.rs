//! Polynomial multiplication and the brute-force/transform switch.

use std::ops::{Mul, MulAssign};

use fastpoly_transform::schoolbook_mul;

use crate::dense::{impl_op, Polynomial};
use crate::Coefficient;

/// Largest product size (in `deg()` units) multiplied by brute force.
///
/// Above it the coefficient type's [`Convolve`](fastpoly_transform::Convolve)
/// kernel is used. Both paths give identical results; this only trades
/// constant factors.
pub const BRUTE_FORCE_THRESHOLD: usize = 200;

/// How [`Polynomial::mul_with`] computes a product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MulStrategy {
    /// Brute force up to [`BRUTE_FORCE_THRESHOLD`], transform above it.
    #[default]
    Auto,
    /// Always use the O(n·m) double loop.
    BruteForce,
    /// Always delegate to the transform.
    Transform,
}

impl<T: Coefficient> Polynomial<T> {
    /// Multiplies two polynomials, choosing the algorithm by size.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.mul_with(other, MulStrategy::Auto)
    }

    /// Multiplies two polynomials with an explicit strategy.
    #[must_use]
    pub fn mul_with(&self, other: &Self, strategy: MulStrategy) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let result_deg = (self.deg() + other.deg()).saturating_sub(1);
        let brute_force = match strategy {
            MulStrategy::Auto => result_deg <= BRUTE_FORCE_THRESHOLD,
            MulStrategy::BruteForce => true,
            MulStrategy::Transform => false,
        };

        tracing::trace!(
            lhs = self.deg(),
            rhs = other.deg(),
            brute_force,
            "polynomial multiplication"
        );

        let coeffs = if brute_force {
            schoolbook_mul(self.coeffs(), other.coeffs())
        } else {
            T::convolve(self.coeffs(), other.coeffs())
        };
        Self::new(coeffs)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }
}

impl<'a, T: Coefficient> Mul<&'a Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: &'a Polynomial<T>) -> Polynomial<T> {
        Polynomial::mul(self, other)
    }
}

impl_op!(Mul, mul, Coefficient);

impl<'a, T: Coefficient> MulAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, other: &'a Polynomial<T>) {
        *self = Polynomial::mul(self, other);
    }
}

impl<T: Coefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = Polynomial::mul(self, &other);
    }
}

impl<T: Coefficient> num_traits::One for Polynomial<T> {
    fn one() -> Self {
        Polynomial::one()
    }
}
