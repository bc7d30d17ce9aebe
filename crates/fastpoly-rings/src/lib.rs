//! # fastpoly-rings
//!
//! Coefficient types for fastpoly.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - Prime fields `Fp<P>` with a compile-time modulus
//! - Exact rationals `Q` backed by `dashu`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::{Fp, Fp998244353};
pub use rationals::Q;
pub use traits::{Field, Ring};
