//! Multi-point evaluation by remainder descent through a product tree.

use crate::dense::Polynomial;
use crate::error::PolyError;
use crate::product_tree::{join_if, ProductTree, TreeNode, PARALLEL_THRESHOLD};
use crate::Coefficient;

impl<T: Coefficient> Polynomial<T> {
    /// Evaluates the polynomial at every point, in O(n log² n) for n points
    /// and a polynomial of comparable degree.
    ///
    /// The result has one value per point, in input order. Repeated points
    /// are allowed.
    ///
    /// # Errors
    ///
    /// Propagates division errors; none occur for well-formed trees.
    pub fn multi_point_evaluation(&self, points: &[T]) -> Result<Vec<T>, PolyError> {
        if points.is_empty() {
            return Ok(Vec::new());
        }
        ProductTree::build(points).evaluate(self)
    }
}

impl<T: Coefficient> ProductTree<T> {
    /// Evaluates `poly` at every point of the tree, in point order.
    ///
    /// # Errors
    ///
    /// Propagates division errors; none occur for well-formed trees.
    pub fn evaluate(&self, poly: &Polynomial<T>) -> Result<Vec<T>, PolyError> {
        let Some(root) = self.root.as_ref() else {
            return Ok(Vec::new());
        };

        let _span = tracing::debug_span!(
            "multi_point_evaluation",
            points = self.len(),
            degree = poly.deg()
        )
        .entered();

        let mut values = vec![T::zero(); self.len()];
        descend(poly, root, self.points(), &mut values)?;
        Ok(values)
    }
}

/// Reduces `poly` modulo the node's product and recurses into the children,
/// writing one value per point into `out`.
fn descend<T: Coefficient>(
    poly: &Polynomial<T>,
    node: &TreeNode<T>,
    points: &[T],
    out: &mut [T],
) -> Result<(), PolyError> {
    let reduced;
    let poly = if poly.deg() >= node.product.deg() {
        reduced = poly.rem(&node.product)?;
        &reduced
    } else {
        poly
    };

    let Some((left, right)) = node.children.as_deref() else {
        out[0] = poly.eval(&points[0]);
        return Ok(());
    };

    let mid = points.len() / 2;
    let (points_lo, points_hi) = points.split_at(mid);
    let (out_lo, out_hi) = out.split_at_mut(mid);

    let (lo, hi) = join_if(
        points.len() >= PARALLEL_THRESHOLD,
        || descend(poly, left, points_lo, out_lo),
        || descend(poly, right, points_hi, out_hi),
    );
    lo?;
    hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastpoly_rings::{Fp, Fp998244353, Q};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type P = Polynomial<Q>;

    fn qs(values: &[i64]) -> Vec<Q> {
        values.iter().map(|&v| Q::from_integer(v)).collect()
    }

    #[test]
    fn test_small_example() {
        // 3x^2 + 2x + 1 at 0, 1, 2
        let p = P::from_ints(&[1, 2, 3]);
        assert_eq!(p.multi_point_evaluation(&qs(&[0, 1, 2])), Ok(qs(&[1, 6, 17])));
    }

    #[test]
    fn test_empty_points() {
        let p = P::from_ints(&[1, 2, 3]);
        assert_eq!(p.multi_point_evaluation(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_constant_and_zero_polynomials() {
        let points = qs(&[4, -1, 9, 0]);
        assert_eq!(
            P::from_ints(&[7]).multi_point_evaluation(&points),
            Ok(qs(&[7, 7, 7, 7]))
        );
        assert_eq!(P::zero().multi_point_evaluation(&points), Ok(qs(&[0, 0, 0, 0])));
    }

    #[test]
    fn test_single_point() {
        let p = P::from_ints(&[-6, 11, -6, 1]);
        assert_eq!(p.multi_point_evaluation(&qs(&[4])), Ok(qs(&[6])));
    }

    #[test]
    fn test_repeated_points() {
        let p = P::from_ints(&[1, 0, 1]);
        let points = qs(&[3, 3, -3, 3]);
        assert_eq!(p.multi_point_evaluation(&points), Ok(qs(&[10, 10, 10, 10])));
    }

    #[test]
    fn test_matches_horner_q() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let p = P::new((0..120).map(|_| Q::from_integer(rng.gen_range(-50..50))).collect());
        let points: Vec<Q> = (0..90).map(|_| Q::new(rng.gen_range(-20..20), rng.gen_range(1..6))).collect();

        let expected: Vec<Q> = points.iter().map(|x| p.eval(x)).collect();
        assert_eq!(p.multi_point_evaluation(&points).unwrap(), expected);
    }

    #[test]
    fn test_matches_horner_fp_large() {
        // Enough points for the parallel descent and transform multiplication.
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let p: Polynomial<Fp998244353> =
            Polynomial::new((0..1000).map(|_| Fp::new(rng.gen())).collect());
        let points: Vec<Fp998244353> = (0..700).map(|_| Fp::new(rng.gen())).collect();

        let expected: Vec<_> = points.iter().map(|x| p.eval(x)).collect();
        assert_eq!(p.multi_point_evaluation(&points).unwrap(), expected);
    }

    #[test]
    fn test_tree_reuse() {
        let tree = ProductTree::build(&qs(&[-2, -1, 0, 1, 2]));
        let square = P::from_ints(&[0, 0, 1]);
        let cube = P::from_ints(&[0, 0, 0, 1]);

        assert_eq!(tree.evaluate(&square), Ok(qs(&[4, 1, 0, 1, 4])));
        assert_eq!(tree.evaluate(&cube), Ok(qs(&[-8, -1, 0, 1, 8])));

        let empty: ProductTree<Q> = ProductTree::build(&[]);
        assert_eq!(empty.evaluate(&cube), Ok(Vec::new()));
    }
}
