//! Number Theoretic Transform (NTT) for exact polynomial multiplication.
//!
//! NTT is the finite field analog of FFT, enabling exact O(n log n)
//! polynomial multiplication without floating-point errors. The
//! transforms here are generic over an NTT-friendly prime `P` with
//! primitive root `G`.

use fastpoly_rings::Fp;

/// NTT-friendly prime: 998244353 = 119 * 2^23 + 1.
pub const NTT_PRIME: u64 = 998_244_353;

/// Primitive root of [`NTT_PRIME`].
pub const PRIMITIVE_ROOT: u64 = 3;

/// Longest transform supported by every prime this crate uses.
pub const NTT_MAX_LEN: usize = 1 << 23;

/// Type alias for the NTT field.
pub type NttField = Fp<NTT_PRIME>;

/// Computes the forward NTT in-place.
///
/// The input length must be a power of 2 dividing `P - 1`.
/// After the transform, `a[i]` holds the evaluation at ω^i where ω is a
/// primitive n-th root of unity.
pub fn ntt<const P: u64, const G: u64>(a: &mut [Fp<P>]) {
    butterflies::<P, G>(a, false);
}

/// Computes the inverse NTT in-place, including the division by n.
pub fn intt<const P: u64, const G: u64>(a: &mut [Fp<P>]) {
    butterflies::<P, G>(a, true);

    let n = a.len() as u64;
    if n > 1 {
        // n^(P-2) = n^(-1) by Fermat
        let n_inv = Fp::<P>::new(n).pow_u64(P - 2);
        for x in a.iter_mut() {
            *x *= n_inv;
        }
    }
}

/// Iterative Cooley-Tukey transform.
fn butterflies<const P: u64, const G: u64>(a: &mut [Fp<P>], invert: bool) {
    let n = a.len();
    debug_assert!(n.is_power_of_two(), "NTT length must be power of 2");
    debug_assert!((P - 1) % n as u64 == 0, "NTT length must divide P - 1");

    if n <= 1 {
        return;
    }

    bit_reverse(a);

    let root = Fp::<P>::new(G);
    let mut len = 2;
    while len <= n {
        let step = (P - 1) / len as u64;
        // The inverse transform walks the roots backwards: ω^(-1) = ω^(len-1).
        let w_len = if invert {
            root.pow_u64(P - 1 - step)
        } else {
            root.pow_u64(step)
        };

        for chunk in a.chunks_exact_mut(len) {
            let (lo, hi) = chunk.split_at_mut(len / 2);
            let mut w = Fp::<P>::new(1);
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = *v * w;
                *v = *u - t;
                *u += t;
                w *= w_len;
            }
        }
        len <<= 1;
    }
}

/// Performs bit-reversal permutation in-place.
fn bit_reverse<T>(a: &mut [T]) {
    let n = a.len();
    let log_n = n.trailing_zeros();

    for i in 0..n {
        let j = reverse_bits(i, log_n);
        if i < j {
            a.swap(i, j);
        }
    }
}

/// Reverses the lower `bits` bits of `x`.
#[inline]
fn reverse_bits(x: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        x.reverse_bits() >> (usize::BITS - bits)
    }
}

/// Multiplies two coefficient sequences over `Fp<P>` using NTT.
///
/// Returns exactly `a.len() + b.len() - 1` coefficients (empty if either
/// input is empty). The padded length must divide `P - 1`.
pub fn ntt_multiply<const P: u64, const G: u64>(a: &[Fp<P>], b: &[Fp<P>]) -> Vec<Fp<P>> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let result_len = a.len() + b.len() - 1;
    let n = result_len.next_power_of_two();

    let mut fa = Vec::with_capacity(n);
    fa.extend_from_slice(a);
    fa.resize(n, Fp::new(0));

    let mut fb = Vec::with_capacity(n);
    fb.extend_from_slice(b);
    fb.resize(n, Fp::new(0));

    ntt::<P, G>(&mut fa);
    ntt::<P, G>(&mut fb);

    for (x, y) in fa.iter_mut().zip(&fb) {
        *x *= *y;
    }

    intt::<P, G>(&mut fa);

    fa.truncate(result_len);
    fa
}
