//! Schoolbook and Karatsuba convolution.
//!
//! Karatsuba achieves O(n^1.58) over any ring and is exact, so it serves
//! as the generic transform for coefficient types without a dedicated NTT.

use fastpoly_rings::Ring;

/// Karatsuba multiplication threshold.
///
/// Below this length, schoolbook multiplication is faster.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Schoolbook multiplication: O(n·m).
///
/// Returns exactly `a.len() + b.len() - 1` coefficients (empty if either
/// input is empty).
pub fn schoolbook_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![R::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            result[i + j] = result[i + j].clone() + x.clone() * y.clone();
        }
    }

    result
}

/// Performs Karatsuba multiplication on coefficient slices.
///
/// Returns exactly `a.len() + b.len() - 1` coefficients (empty if either
/// input is empty), untrimmed.
pub fn karatsuba_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let n = a.len();
    let m = b.len();
    if n < KARATSUBA_THRESHOLD || m < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    // Very unbalanced operands: multiply the long one in chunks the size
    // of the short one.
    if n > 2 * m || m > 2 * n {
        let (long, short) = if n > m { (a, b) } else { (b, a) };
        let mut result = vec![R::zero(); n + m - 1];
        for (k, chunk) in long.chunks(short.len()).enumerate() {
            let part = karatsuba_mul(chunk, short);
            add_into(&mut result, &part, k * short.len());
        }
        return result;
    }

    // Split: a = a0 + a1*x^half, b = b0 + b1*x^half
    let half = n.max(m).div_ceil(2);
    let (a0, a1) = a.split_at(half.min(n));
    let (b0, b1) = b.split_at(half.min(m));

    let z0 = karatsuba_mul(a0, b0);
    let z2 = karatsuba_mul(a1, b1);

    // z1 = (a0+a1)*(b0+b1) - z0 - z2
    let a01 = add_slices(a0, a1);
    let b01 = add_slices(b0, b1);
    let mut z1 = karatsuba_mul(&a01, &b01);
    sub_into(&mut z1, &z0);
    sub_into(&mut z1, &z2);

    // Combine: result = z0 + z1*x^half + z2*x^(2*half)
    let mut result = vec![R::zero(); n + m - 1];
    add_into(&mut result, &z0, 0);
    add_into(&mut result, &z1, half);
    add_into(&mut result, &z2, 2 * half);
    result
}

fn add_slices<R: Ring>(x: &[R], y: &[R]) -> Vec<R> {
    let len = x.len().max(y.len());
    (0..len)
        .map(|i| match (x.get(i), y.get(i)) {
            (Some(p), Some(q)) => p.clone() + q.clone(),
            (Some(p), None) => p.clone(),
            (None, Some(q)) => q.clone(),
            (None, None) => R::zero(),
        })
        .collect()
}

/// `dst[offset + i] += src[i]`; terms past the end of `dst` must be zero.
fn add_into<R: Ring>(dst: &mut [R], src: &[R], offset: usize) {
    for (i, c) in src.iter().enumerate() {
        if let Some(slot) = dst.get_mut(offset + i) {
            *slot = slot.clone() + c.clone();
        } else {
            debug_assert!(c.is_zero(), "non-zero term outside result length");
        }
    }
}

fn sub_into<R: Ring>(dst: &mut [R], src: &[R]) {
    for (slot, c) in dst.iter_mut().zip(src) {
        *slot = slot.clone() - c.clone();
    }
}
