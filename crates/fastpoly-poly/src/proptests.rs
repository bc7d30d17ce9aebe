//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use crate::mul::MulStrategy;
    use fastpoly_rings::{Fp998244353, Ring, Q};

    type P = Polynomial<Q>;
    type F = Fp998244353;

    // Small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    fn small_poly() -> impl Strategy<Value = P> {
        proptest::collection::vec(small_coeff(), 1..=8).prop_map(Polynomial::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = P> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn fp_poly(max_len: usize) -> impl Strategy<Value = Polynomial<F>> {
        proptest::collection::vec(any::<u64>().prop_map(F::new), 1..=max_len)
            .prop_map(Polynomial::new)
    }

    fn is_canonical<T: fastpoly_rings::Field>(p: &Polynomial<T>) -> bool {
        p.coeffs().len() == 1 || !p.leading_coeff().is_zero()
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            let diff = a.sub(&a);
            prop_assert!(diff.is_zero());
            prop_assert_eq!(diff.coeffs().len(), 1);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_results_canonical(a in small_poly(), b in small_poly()) {
            prop_assert!(is_canonical(&a.add(&b)));
            prop_assert!(is_canonical(&a.sub(&b)));
            prop_assert!(is_canonical(&a.mul(&b)));
            prop_assert!(is_canonical(&a.derivative()));
            prop_assert!(is_canonical(&a.mod_xn(3)));
        }

        #[test]
        fn division_and_scalar_results_canonical(
            a in small_poly(),
            b in nonzero_poly(),
            c in small_coeff(),
            n in 1usize..20
        ) {
            prop_assert!(is_canonical(&a.scale(&c)));
            if !c.is_zero() {
                prop_assert!(is_canonical(&a.div_scalar(&c).unwrap()));
            }
            if b.deg() <= a.deg() {
                let (q, r) = a.div_rem(&b).unwrap();
                prop_assert!(is_canonical(&q));
                prop_assert!(is_canonical(&r));
            }
            if !b.coeff(0).is_zero() {
                prop_assert!(is_canonical(&b.reciprocal(n).unwrap()));
            }
        }

        #[test]
        fn eval_is_homomorphism(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn derivative_product_rule(a in small_poly(), b in small_poly()) {
            let left = a.mul(&b).derivative();
            let right = a.derivative().mul(&b).add(&a.mul(&b.derivative()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn div_rem_identity(a in small_poly(), b in nonzero_poly()) {
            prop_assume!(b.deg() <= a.deg());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(b.mul(&q).add(&r), a);
            prop_assert!(r.deg() < b.deg());
        }

        #[test]
        fn div_rem_identity_fp_large(a in fp_poly(600), b in fp_poly(300)) {
            prop_assume!(!b.is_zero() && b.deg() <= a.deg());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(b.mul_with(&q, MulStrategy::BruteForce).add(&r), a);
            prop_assert!(r.deg() < b.deg());
        }

        #[test]
        fn reciprocal_inverts(p in nonzero_poly(), n in 1usize..40) {
            prop_assume!(!p.coeff(0).is_zero());
            let r = p.reciprocal(n).unwrap();
            prop_assert_eq!(p.mul(&r).mod_xn(n), P::one());
        }

        #[test]
        fn strategies_agree_fp(a in fp_poly(300), b in fp_poly(300)) {
            prop_assert_eq!(
                a.mul_with(&b, MulStrategy::BruteForce),
                a.mul_with(&b, MulStrategy::Transform)
            );
        }

        #[test]
        fn multipoint_matches_horner(
            p in small_poly(),
            points in proptest::collection::vec(small_coeff(), 0..20)
        ) {
            let expected: Vec<Q> = points.iter().map(|x| p.eval(x)).collect();
            prop_assert_eq!(p.multi_point_evaluation(&points).unwrap(), expected);
        }

        #[test]
        fn linear_factors_vanish(roots in proptest::collection::vec(small_coeff(), 1..12)) {
            let p = P::linear_factors_product(&roots);
            prop_assert_eq!(p.deg(), roots.len() + 1);
            for r in &roots {
                prop_assert!(p.eval(r).is_zero());
            }
        }
    }
}
