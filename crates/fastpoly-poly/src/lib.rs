//! # fastpoly-poly
//!
//! Dense univariate polynomials over fields with quasi-linear algorithms.
//!
//! This crate provides:
//! - `Polynomial<T>` in canonical form (no trailing zero coefficients)
//! - Brute-force or transform multiplication, picked by size
//! - Newton reciprocal of power series and fast division with remainder
//! - Products of linear factors and subproduct trees
//! - Multi-point evaluation
//!
//! ## Degree Convention
//!
//! `deg()` counts coefficients: the zero polynomial has `deg() == 0`, a
//! nonzero constant has `deg() == 1` and `x^k` has `deg() == k + 1`.
//!
//! ## Algorithm Selection
//!
//! - Product `deg()` <= 200: schoolbook O(n·m)
//! - Above: the coefficient type's `Convolve` kernel (NTT, CRT or Karatsuba)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod division;
pub mod error;
pub mod mul;
pub mod multipoint;
pub mod product_tree;

#[cfg(test)]
mod proptests;

use fastpoly_rings::Field;
use fastpoly_transform::Convolve;

pub use dense::Polynomial;
pub use error::PolyError;
pub use mul::{MulStrategy, BRUTE_FORCE_THRESHOLD};
pub use product_tree::{ProductTree, PARALLEL_THRESHOLD};

/// Coefficient types supported by the fast algorithms: fields with a
/// convolution kernel.
pub trait Coefficient: Field + Convolve {}

impl<T: Field + Convolve> Coefficient for T {}
