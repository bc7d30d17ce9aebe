//! Property-based tests: every kernel must agree with schoolbook.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{karatsuba_mul, schoolbook_mul, Convolve, NttField};
    use fastpoly_rings::{Fp, Q};

    type F17 = Fp<17>;

    fn q_seq(max_len: usize) -> impl Strategy<Value = Vec<Q>> {
        proptest::collection::vec(
            (-1000i64..1000i64, 1i64..12i64).prop_map(|(n, d)| Q::new(n, d)),
            1..=max_len,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn ntt_field_matches_schoolbook(
            a in proptest::collection::vec(any::<u64>(), 1..=80),
            b in proptest::collection::vec(any::<u64>(), 1..=80),
        ) {
            let a: Vec<NttField> = a.into_iter().map(NttField::new).collect();
            let b: Vec<NttField> = b.into_iter().map(NttField::new).collect();
            prop_assert_eq!(NttField::convolve(&a, &b), schoolbook_mul(&a, &b));
        }

        #[test]
        fn small_prime_matches_schoolbook(
            a in proptest::collection::vec(0u64..17, 1..=80),
            b in proptest::collection::vec(0u64..17, 1..=80),
        ) {
            let a: Vec<F17> = a.into_iter().map(F17::new).collect();
            let b: Vec<F17> = b.into_iter().map(F17::new).collect();
            prop_assert_eq!(F17::convolve(&a, &b), schoolbook_mul(&a, &b));
        }

        #[test]
        fn rational_matches_schoolbook(a in q_seq(60), b in q_seq(60)) {
            let expected = schoolbook_mul(&a, &b);
            prop_assert_eq!(Q::convolve(&a, &b), expected.clone());
            prop_assert_eq!(karatsuba_mul(&a, &b), expected);
        }
    }
}
