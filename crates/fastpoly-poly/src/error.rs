//! Errors raised by polynomial arithmetic.

use thiserror::Error;

/// Errors that can occur during polynomial arithmetic.
///
/// Both variants are precondition violations; no operation recovers from
/// them locally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A scalar divisor, a divisor polynomial, or the constant term of a
    /// power series being inverted is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The divisor has more coefficients than the dividend.
    #[error("divisor has {divisor} coefficients but dividend only has {dividend}")]
    DivisorTooLarge {
        /// `deg()` of the dividend.
        dividend: usize,
        /// `deg()` of the divisor.
        divisor: usize,
    },
}
