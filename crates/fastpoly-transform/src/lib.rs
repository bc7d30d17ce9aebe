//! # fastpoly-transform
//!
//! Quasi-linear convolution of coefficient sequences.
//!
//! This crate provides:
//! - The [`Convolve`] trait, the only interface polynomial code uses
//! - A radix-2 NTT over NTT-friendly prime fields
//! - Three-prime NTT with CRT reconstruction for other primes and for Q
//! - Karatsuba multiplication as the generic fallback
//!
//! ## Kernel Selection
//!
//! - `Fp<998244353>`: direct NTT
//! - `Fp<P>`, small enough P: three-prime NTT + CRT
//! - `Q`, numerators fitting the CRT range after clearing denominators:
//!   three-prime NTT + CRT
//! - Everything else: Karatsuba

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crt;
pub mod karatsuba;
pub mod ntt;

#[cfg(test)]
mod proptests;

use dashu::base::Gcd;
use dashu::integer::{IBig, UBig};
use fastpoly_rings::{Fp, Ring, Q};

pub use karatsuba::{karatsuba_mul, schoolbook_mul, KARATSUBA_THRESHOLD};
pub use ntt::{NttField, NTT_MAX_LEN, NTT_PRIME};

/// Convolution of two coefficient sequences.
///
/// `convolve(a, b)` returns `a.len() + b.len() - 1` values whose k-th
/// entry is the sum of `a[i] * b[j]` over `i + j = k`. Trailing zeros are
/// kept. If either input is empty the result is empty.
///
/// The default method is Karatsuba, so any ring can opt in with an empty
/// `impl Convolve for MyRing {}`.
pub trait Convolve: Ring {
    /// Computes the discrete convolution of `a` and `b`.
    fn convolve(a: &[Self], b: &[Self]) -> Vec<Self> {
        karatsuba_mul(a, b)
    }
}

impl<const P: u64> Convolve for Fp<P> {
    #[allow(clippy::cast_possible_truncation)]
    fn convolve(a: &[Self], b: &[Self]) -> Vec<Self> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }

        let len = a.len() + b.len() - 1;
        if len > NTT_MAX_LEN {
            tracing::trace!(len, "convolution too long for NTT, using karatsuba");
            return karatsuba_mul(a, b);
        }

        let values = |xs: &[Self]| xs.iter().map(|x| x.value()).collect::<Vec<u64>>();

        if P == NTT_PRIME {
            tracing::trace!(len, "single-prime NTT convolution");
            let to_ntt = |xs: &[Self]| {
                xs.iter()
                    .map(|x| NttField::new(x.value()))
                    .collect::<Vec<_>>()
            };
            return ntt::ntt_multiply::<NTT_PRIME, { ntt::PRIMITIVE_ROOT }>(&to_ntt(a), &to_ntt(b))
                .into_iter()
                .map(|x| Self::new(x.value()))
                .collect();
        }

        if crt::fits_unsigned(P - 1, a.len().min(b.len())) {
            tracing::trace!(len, modulus = P, "three-prime NTT convolution");
            return crt::convolve_unsigned(&values(a), &values(b))
                .into_iter()
                .map(|x| Self::new((x % u128::from(P)) as u64))
                .collect();
        }

        tracing::trace!(len, modulus = P, "modulus too large for CRT, using karatsuba");
        karatsuba_mul(a, b)
    }
}

impl Convolve for Q {
    fn convolve(a: &[Self], b: &[Self]) -> Vec<Self> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }

        let len = a.len() + b.len() - 1;
        if len <= NTT_MAX_LEN {
            if let Some(result) = convolve_rational_crt(a, b) {
                tracing::trace!(len, "three-prime NTT convolution over Q");
                return result;
            }
        }

        tracing::trace!(len, "rational coefficients exceed CRT range, using karatsuba");
        karatsuba_mul(a, b)
    }
}

/// Scales `xs` by the lcm of its denominators.
///
/// Returns the integer numerators and the lcm, or `None` if a numerator
/// does not fit an `i128`.
fn clear_denominators(xs: &[Q]) -> Option<(Vec<i128>, UBig)> {
    let lcm = xs.iter().fold(UBig::ONE, |acc, x| {
        let g = (&acc).gcd(x.denominator());
        acc / g * x.denominator()
    });

    let numerators = xs
        .iter()
        .map(|x| {
            let scale = IBig::from(&lcm / x.denominator());
            i128::try_from(x.numerator() * scale).ok()
        })
        .collect::<Option<Vec<_>>>()?;

    Some((numerators, lcm))
}

fn convolve_rational_crt(a: &[Q], b: &[Q]) -> Option<Vec<Q>> {
    let (na, la) = clear_denominators(a)?;
    let (nb, lb) = clear_denominators(b)?;

    let max_abs = |v: &[i128]| v.iter().map(|x| x.unsigned_abs()).max().unwrap_or(0);
    if !crt::fits_signed(max_abs(&na), max_abs(&nb), na.len().min(nb.len())) {
        return None;
    }

    let den = la * lb;
    Some(
        crt::convolve_signed(&na, &nb)
            .into_iter()
            .map(|c| Q::from_parts(IBig::from(c), den.clone()))
            .collect(),
    )
}
