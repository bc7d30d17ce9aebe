//! Power-series reciprocal and fast division with remainder.
//!
//! Division runs in O(n log n) through the reversal trick: the quotient of
//! A by G is the reversed product of rev(A) with the reciprocal of rev(G)
//! modulo x^n, where n is the number of quotient coefficients.

use crate::dense::Polynomial;
use crate::error::PolyError;
use crate::Coefficient;

impl<T: Coefficient> Polynomial<T> {
    /// Computes R with `self * R ≡ 1 (mod x^n)` by Newton iteration.
    ///
    /// Each step doubles the precision with R ← 2R − R²·(P mod x^sz).
    ///
    /// # Errors
    ///
    /// [`PolyError::DivisionByZero`] if the constant term is zero.
    pub fn reciprocal(&self, n: usize) -> Result<Self, PolyError> {
        let c0_inv = self.coeff(0).inv().ok_or(PolyError::DivisionByZero)?;
        if n == 0 {
            return Ok(Self::zero());
        }

        let two = T::from_i64(2);
        let mut r = Self::constant(c0_inv);
        let mut sz = 1;
        while sz < n {
            sz *= 2;
            let correction = r.mul(&r).mod_xn(sz).mul(&self.mod_xn(sz)).mod_xn(sz);
            r = r.scale(&two).sub(&correction);
        }

        Ok(r.mod_xn(n))
    }

    /// Reverses the coefficient order.
    fn rev(&self) -> Self {
        Self::new(self.coeffs().iter().rev().cloned().collect())
    }

    /// Reverses the first `n` coefficients, treating missing ones as zero.
    fn rev_padded(&self, n: usize) -> Self {
        let mut coeffs = self.coeffs().to_vec();
        coeffs.resize(n, T::zero());
        coeffs.reverse();
        Self::new(coeffs)
    }

    fn check_divisor(&self, g: &Self) -> Result<(), PolyError> {
        if g.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        if g.deg() > self.deg() {
            return Err(PolyError::DivisorTooLarge {
                dividend: self.deg(),
                divisor: g.deg(),
            });
        }
        Ok(())
    }

    /// Quotient of a checked division.
    fn quotient(&self, g: &Self) -> Result<Self, PolyError> {
        let n = self.deg() - g.deg() + 1;
        let inv = g.rev().reciprocal(n)?;
        Ok(self.rev().mul(&inv).mod_xn(n).rev_padded(n))
    }

    /// Divides by `g`, returning the quotient and the remainder.
    ///
    /// The result satisfies `self = g * q + r` with `r.deg() < g.deg()`.
    ///
    /// # Errors
    ///
    /// - [`PolyError::DivisionByZero`] if `g` is zero
    /// - [`PolyError::DivisorTooLarge`] if `g.deg() > self.deg()`
    pub fn div_rem(&self, g: &Self) -> Result<(Self, Self), PolyError> {
        self.check_divisor(g)?;
        let q = self.quotient(g)?;
        let r = self.sub(&g.mul(&q));
        Ok((q, r))
    }

    /// Quotient of the division by `g`.
    ///
    /// # Errors
    ///
    /// Same as [`Polynomial::div_rem`].
    pub fn div(&self, g: &Self) -> Result<Self, PolyError> {
        self.check_divisor(g)?;
        self.quotient(g)
    }

    /// Remainder of the division by `g`.
    ///
    /// # Errors
    ///
    /// Same as [`Polynomial::div_rem`].
    pub fn rem(&self, g: &Self) -> Result<Self, PolyError> {
        self.div_rem(g).map(|(_, r)| r)
    }

    /// Replaces `self` with the quotient of the division by `g`.
    ///
    /// # Errors
    ///
    /// Same as [`Polynomial::div_rem`]; `self` is unchanged on error.
    pub fn div_in_place(&mut self, g: &Self) -> Result<(), PolyError> {
        *self = self.div(g)?;
        Ok(())
    }

    /// Replaces `self` with the remainder of the division by `g`.
    ///
    /// # Errors
    ///
    /// Same as [`Polynomial::div_rem`]; `self` is unchanged on error.
    pub fn rem_in_place(&mut self, g: &Self) -> Result<(), PolyError> {
        *self = self.rem(g)?;
        Ok(())
    }
}
