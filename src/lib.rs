//! # fastpoly
//!
//! Fast univariate polynomial arithmetic over fields.
//!
//! fastpoly multiplies, divides and evaluates dense polynomials in
//! quasi-linear time, switching between brute force and number-theoretic
//! transforms depending on size.
//!
//! ## Features
//!
//! - **Coefficient Fields**: prime fields `Fp<P>` and exact rationals `Q`
//! - **Fast Multiplication**: NTT, three-prime CRT and Karatsuba kernels
//! - **Power Series**: truncation and Newton reciprocal
//! - **Division**: quotient and remainder via coefficient reversal
//! - **Subproduct Trees**: products of linear factors and multi-point evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use fastpoly::prelude::*;
//!
//! let p: Polynomial<Q> = Polynomial::from_ints(&[1, 2, 3]);
//! let points = [Q::from_integer(0), Q::from_integer(1), Q::from_integer(2)];
//! let values = p.multi_point_evaluation(&points).unwrap();
//! assert_eq!(values, vec![Q::from_integer(1), Q::from_integer(6), Q::from_integer(17)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use fastpoly_poly as poly;
pub use fastpoly_rings as rings;
pub use fastpoly_transform as transform;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fastpoly_poly::{Coefficient, MulStrategy, PolyError, Polynomial, ProductTree};
    pub use fastpoly_rings::{Field, Fp, Fp998244353, Ring, Q};
    pub use fastpoly_transform::Convolve;
}
