//! Property-based tests for the field axioms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Field, Fp, Ring, Q};

    type F97 = Fp<97>;
    type Big = Fp<{ (1 << 61) - 1 }>;

    fn small_q() -> impl Strategy<Value = Q> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn fp_distributive(a in 0u64..97, b in 0u64..97, c in 0u64..97) {
            let (a, b, c) = (F97::new(a), F97::new(b), F97::new(c));
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn fp_sub_is_add_neg(a in any::<u64>(), b in any::<u64>()) {
            let (a, b) = (Big::new(a), Big::new(b));
            prop_assert_eq!(a - b, a + (-b));
            prop_assert!((a - a).is_zero());
        }

        #[test]
        fn fp_inverse(a in 1u64..97) {
            let a = F97::new(a);
            prop_assert_eq!(a * a.inv().unwrap(), F97::one());
        }

        #[test]
        fn fp_from_i64_matches_reduction(n in any::<i64>()) {
            let expected = i128::from(n).rem_euclid(97);
            prop_assert_eq!(i128::from(F97::from_i64(n).value()), expected);
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn q_inverse(a in small_q()) {
            prop_assume!(!a.is_zero());
            prop_assert!((a.clone() * a.inv().unwrap()).is_one());
        }
    }
}
