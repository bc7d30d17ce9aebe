//! Products of linear factors by binary splitting.
//!
//! The product tree over points `x_0, ..., x_{n-1}` stores, at every node
//! covering the range `[l, r)`, the polynomial `(x - x_l) ... (x - x_{r-1})`.
//! A node over `[l, r)` splits at `m = (l + r) / 2`. Nodes are addressed
//! heap-style: the root is 1 and node v has children 2v and 2v + 1.

use crate::dense::Polynomial;
use crate::Coefficient;

/// Subtrees covering at least this many points build and reduce their two
/// halves on separate rayon tasks.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Runs both closures, in parallel when `parallel` is set.
pub(crate) fn join_if<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel {
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}

/// One node of a [`ProductTree`].
#[derive(Clone, Debug)]
pub(crate) struct TreeNode<T: Coefficient> {
    pub(crate) product: Polynomial<T>,
    pub(crate) children: Option<Box<(TreeNode<T>, TreeNode<T>)>>,
}

impl<T: Coefficient> TreeNode<T> {
    fn build(points: &[T]) -> Self {
        debug_assert!(!points.is_empty());

        if points.len() == 1 {
            return Self {
                product: linear_factor(&points[0]),
                children: None,
            };
        }

        let mid = points.len() / 2;
        let (left, right) = join_if(
            points.len() >= PARALLEL_THRESHOLD,
            || Self::build(&points[..mid]),
            || Self::build(&points[mid..]),
        );

        Self {
            product: left.product.mul(&right.product),
            children: Some(Box::new((left, right))),
        }
    }
}

/// `x - r`
fn linear_factor<T: Coefficient>(r: &T) -> Polynomial<T> {
    Polynomial::new(vec![-r.clone(), T::one()])
}

fn product_of<T: Coefficient>(roots: &[T]) -> Polynomial<T> {
    if roots.len() == 1 {
        return linear_factor(&roots[0]);
    }

    let mid = roots.len() / 2;
    let (left, right) = join_if(
        roots.len() >= PARALLEL_THRESHOLD,
        || product_of(&roots[..mid]),
        || product_of(&roots[mid..]),
    );
    left.mul(&right)
}

impl<T: Coefficient> Polynomial<T> {
    /// Computes `(x - r_0)(x - r_1)...(x - r_{n-1})` in O(n log² n).
    ///
    /// The empty product is 1.
    #[must_use]
    pub fn linear_factors_product(roots: &[T]) -> Self {
        if roots.is_empty() {
            return Self::one();
        }
        product_of(roots)
    }
}

/// The subproduct tree of a list of points.
///
/// Building it costs O(n log² n); it can then be reused to evaluate any
/// number of polynomials at the same points.
#[derive(Clone, Debug)]
pub struct ProductTree<T: Coefficient> {
    points: Vec<T>,
    pub(crate) root: Option<TreeNode<T>>,
}

impl<T: Coefficient> ProductTree<T> {
    /// Builds the tree over `points`.
    #[must_use]
    pub fn build(points: &[T]) -> Self {
        let _span = tracing::debug_span!("product_tree", points = points.len()).entered();

        let root = if points.is_empty() {
            None
        } else {
            Some(TreeNode::build(points))
        };

        Self {
            points: points.to_vec(),
            root,
        }
    }

    /// The points the tree was built over.
    #[must_use]
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// Number of points (leaves).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the tree has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The product of all linear factors; 1 for an empty tree.
    #[must_use]
    pub fn product(&self) -> Polynomial<T> {
        self.root
            .as_ref()
            .map_or_else(Polynomial::one, |node| node.product.clone())
    }

    /// Returns the polynomial stored at heap index `v` (root = 1).
    ///
    /// `None` if no such node exists.
    #[must_use]
    pub fn node(&self, v: usize) -> Option<&Polynomial<T>> {
        self.locate(v).map(|(node, _)| &node.product)
    }

    /// Returns the point range `[l, r)` covered by heap index `v`.
    #[must_use]
    pub fn range(&self, v: usize) -> Option<(usize, usize)> {
        self.locate(v).map(|(_, range)| range)
    }

    /// Walks from the root following the bits of `v` below its leading one.
    fn locate(&self, v: usize) -> Option<(&TreeNode<T>, (usize, usize))> {
        if v == 0 {
            return None;
        }

        let mut node = self.root.as_ref()?;
        let (mut l, mut r) = (0, self.points.len());
        let depth = usize::BITS - 1 - v.leading_zeros();

        for bit in (0..depth).rev() {
            let (left, right) = node.children.as_deref()?;
            let m = (l + r) / 2;
            if (v >> bit) & 1 == 0 {
                node = left;
                r = m;
            } else {
                node = right;
                l = m;
            }
        }

        Some((node, (l, r)))
    }
}
