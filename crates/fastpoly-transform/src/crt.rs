//! Multi-modular NTT convolution with CRT reconstruction.
//!
//! The convolution is computed modulo three NTT-friendly primes and the
//! exact value is rebuilt with Garner's algorithm. Results are exact as
//! long as every true output coefficient lies in `[0, MODULUS)` (unsigned
//! variant) or `(-MODULUS/2, MODULUS/2)` (signed variant).

use fastpoly_rings::Fp;

use crate::ntt::ntt_multiply;

/// 5 * 2^25 + 1
pub const P1: u64 = 167_772_161;
/// 7 * 2^26 + 1
pub const P2: u64 = 469_762_049;
/// 119 * 2^23 + 1
pub const P3: u64 = 998_244_353;

/// Primitive root shared by all three primes.
pub const G: u64 = 3;

/// P1 * P2 * P3 (about 2^86).
pub const MODULUS: u128 = P1 as u128 * P2 as u128 * P3 as u128;

/// P1^-1 mod P2, for Garner's first step.
const P1_INV_MOD_P2: u64 = pow_mod(P1 % P2, P2 - 2, P2);
/// (P1 * P2)^-1 mod P3, for Garner's second step.
const P12_INV_MOD_P3: u64 = pow_mod(P1 * P2 % P3, P3 - 2, P3);

#[allow(clippy::cast_possible_truncation)]
const fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    let m = m as u128;
    let mut base = base as u128 % m;
    let mut acc = 1u128;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    acc as u64
}

type F1 = Fp<P1>;
type F2 = Fp<P2>;
type F3 = Fp<P3>;

/// Returns true if convolving sequences with entries in `[0, max_value]`
/// of which the shorter has `terms` entries stays below [`MODULUS`].
#[must_use]
pub fn fits_unsigned(max_value: u64, terms: usize) -> bool {
    let sq = u128::from(max_value) * u128::from(max_value);
    sq.checked_mul(terms as u128)
        .is_some_and(|bound| bound < MODULUS)
}

/// Returns true if convolving sequences bounded in absolute value by
/// `max_a` and `max_b` stays strictly inside `(-MODULUS/2, MODULUS/2)`.
#[must_use]
pub fn fits_signed(max_a: u128, max_b: u128, terms: usize) -> bool {
    max_a
        .checked_mul(max_b)
        .and_then(|p| p.checked_mul(terms as u128))
        .is_some_and(|bound| bound < MODULUS / 2)
}

/// Convolves non-negative sequences, returning exact values.
///
/// The caller guarantees the bound checked by [`fits_unsigned`].
#[must_use]
pub fn convolve_unsigned(a: &[u64], b: &[u64]) -> Vec<u128> {
    let (c1, c2, c3) = three_prime_products(
        a.iter().map(|&x| x as i128),
        b.iter().map(|&x| x as i128),
    );

    c1.into_iter()
        .zip(c2)
        .zip(c3)
        .map(|((r1, r2), r3)| garner(r1, r2, r3))
        .collect()
}

/// Convolves signed sequences, returning exact values.
///
/// The caller guarantees the bound checked by [`fits_signed`].
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn convolve_signed(a: &[i128], b: &[i128]) -> Vec<i128> {
    let (c1, c2, c3) = three_prime_products(a.iter().copied(), b.iter().copied());

    let half = MODULUS / 2;
    c1.into_iter()
        .zip(c2)
        .zip(c3)
        .map(|((r1, r2), r3)| {
            let x = garner(r1, r2, r3);
            if x > half {
                x as i128 - MODULUS as i128
            } else {
                x as i128
            }
        })
        .collect()
}

fn three_prime_products(
    a: impl Iterator<Item = i128> + Clone,
    b: impl Iterator<Item = i128> + Clone,
) -> (Vec<F1>, Vec<F2>, Vec<F3>) {
    let c1 = ntt_multiply::<P1, G>(&residues(a.clone()), &residues(b.clone()));
    let c2 = ntt_multiply::<P2, G>(&residues(a.clone()), &residues(b.clone()));
    let c3 = ntt_multiply::<P3, G>(&residues(a), &residues(b));
    (c1, c2, c3)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn residues<const P: u64>(values: impl Iterator<Item = i128>) -> Vec<Fp<P>> {
    values
        .map(|v| Fp::new(v.rem_euclid(i128::from(P)) as u64))
        .collect()
}

/// Reconstructs x in `[0, MODULUS)` from its residues.
fn garner(r1: F1, r2: F2, r3: F3) -> u128 {
    // x = r1 + P1 * k1 + P1 * P2 * k2
    let k1 = (r2 - F2::new(r1.value())) * F2::new(P1_INV_MOD_P2);
    let x12 = u128::from(r1.value()) + u128::from(P1) * u128::from(k1.value());

    #[allow(clippy::cast_possible_truncation)]
    let x12_mod_p3 = F3::new((x12 % u128::from(P3)) as u64);
    let k2 = (r3 - x12_mod_p3) * F3::new(P12_INV_MOD_P3);

    x12 + u128::from(P1) * u128::from(P2) * u128::from(k2.value())
}
