use crate::{CostModel, Matrix, PostOrder, Unit};

/// Solves the forest-distance recurrence for the postorder ranges
/// `left(i)..=i` of `a` against `left(j)..=j` of `b`, recording every
/// whole-subtree distance it settles in `memo`, including `memo[(i, j)]`.
///
/// `forestdist` is a scratch table shared across calls; only the corner cell
/// `(left(i) - 1, left(j) - 1)` is read before being written, so that single
/// cell is reset here rather than the whole table.
fn forest_distance<C: CostModel>(
    a: &PostOrder,
    b: &PostOrder,
    i: usize,
    j: usize,
    cost: &C,
    forestdist: &mut Matrix,
    memo: &mut Matrix,
) {
    let li = a.left(i);
    let lj = b.left(j);

    forestdist[(li - 1, lj - 1)] = 0;

    for i1 in li..=i {
        forestdist[(i1, lj - 1)] = forestdist[(i1 - 1, lj - 1)] + cost.delete(a.label(i1));
    }

    for j1 in lj..=j {
        forestdist[(li - 1, j1)] = forestdist[(li - 1, j1 - 1)] + cost.insert(b.label(j1));
    }

    for i1 in li..=i {
        for j1 in lj..=j {
            let delete = forestdist[(i1 - 1, j1)] + cost.delete(a.label(i1));
            let insert = forestdist[(i1, j1 - 1)] + cost.insert(b.label(j1));

            if a.left(i1) == li && b.left(j1) == lj {
                // Both prefixes are whole subtrees, so this cell is a final
                // subtree-to-subtree distance.
                let relabel = forestdist[(i1 - 1, j1 - 1)] + cost.relabel(a.label(i1), b.label(j1));
                let best = delete.min(insert).min(relabel);
                forestdist[(i1, j1)] = best;
                memo[(i1, j1)] = best;
            } else {
                let split = forestdist[(a.left(i1) - 1, b.left(j1) - 1)] + memo[(i1, j1)];
                forestdist[(i1, j1)] = delete.min(insert).min(split);
            }
        }
    }

    memo[(i, j)] = forestdist[(i, j)];
}

/// Runs the recurrence over the given `(i, j)` pairs and returns the filled
/// memo of subtree distances.
///
/// The pairs must be ascending in `i` and, within each `i`, ascending in `j`:
/// a pair may read memo entries of strictly smaller indices inside its forest
/// range, and those must already be final.
fn solve<C: CostModel>(
    a: &PostOrder,
    b: &PostOrder,
    cost: &C,
    pairs: impl Iterator<Item = (usize, usize)>,
) -> Matrix {
    let mut memo = Matrix::new(a.len() + 1, b.len() + 1);
    let mut forestdist = Matrix::new(a.len() + 1, b.len() + 1);

    for (i, j) in pairs {
        forest_distance(a, b, i, j, cost, &mut forestdist, &mut memo);
    }

    memo
}

fn degenerate<C: CostModel>(a: &PostOrder, b: &PostOrder, cost: &C) -> usize {
    let deletions: usize = (1..=a.len()).map(|i| cost.delete(a.label(i))).sum();
    let insertions: usize = (1..=b.len()).map(|j| cost.insert(b.label(j))).sum();
    deletions + insertions
}

/// The edit distance between two trees under a custom [CostModel], computed
/// with the Zhang-Shasha keyroot decomposition.
///
/// If either tree is empty, the distance is the total cost of deleting or
/// inserting every node of the other.
pub fn distance_with<C: CostModel>(a: &PostOrder, b: &PostOrder, cost: &C) -> usize {
    if a.is_empty() || b.is_empty() {
        return degenerate(a, b, cost);
    }

    let keyroots = a
        .keyroots()
        .iter()
        .flat_map(|&i| b.keyroots().iter().map(move |&j| (i, j)));

    solve(a, b, cost, keyroots)[(a.len(), b.len())]
}

/// The edit distance between two trees under the unit cost model, computed
/// with the Zhang-Shasha keyroot decomposition.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::{distance, Tree};
///
/// let a: Tree = "d".parse()?;
/// let b: Tree = "g(h)".parse()?;
///
/// assert_eq!(distance(&a.postorder(), &b.postorder()), 2);
/// # Ok::<(), zhang_shasha::ParseError>(())
/// ```
pub fn distance(a: &PostOrder, b: &PostOrder) -> usize {
    distance_with(a, b, &Unit)
}

/// The full memo of subtree distances under the unit cost model.
///
/// Entry `(i, j)` is the edit distance between the subtree rooted at
/// postorder index `i` of `a` and the subtree rooted at postorder index `j`
/// of `b`; row and column 0 are padding, and cells for pairs that are not
/// both whole subtrees of some keyroot decomposition stay 0. The overall
/// distance sits at `(a.len(), b.len())`.
///
/// If either tree is empty there are no keyroot pairs to decompose; row and
/// column 0 are instead seeded with the cumulative cost of inserting or
/// deleting each postorder prefix, so the corner still holds the distance
/// defined for degenerate inputs.
pub fn distance_table(a: &PostOrder, b: &PostOrder) -> Matrix {
    if a.is_empty() || b.is_empty() {
        let mut memo = Matrix::new(a.len() + 1, b.len() + 1);

        for i in 1..=a.len() {
            memo[(i, 0)] = memo[(i - 1, 0)] + Unit.delete(a.label(i));
        }

        for j in 1..=b.len() {
            memo[(0, j)] = memo[(0, j - 1)] + Unit.insert(b.label(j));
        }

        return memo;
    }

    let keyroots = a
        .keyroots()
        .iter()
        .flat_map(|&i| b.keyroots().iter().map(move |&j| (i, j)));

    solve(a, b, &Unit, keyroots)
}

/// The edit distance between two trees under a custom [CostModel], computed
/// by running the recurrence for every node pair instead of only keyroot
/// pairs.
///
/// Returns exactly the same distance as [distance_with]; it exists as a
/// correctness and performance baseline the pruned engine is compared
/// against.
pub fn distance_naive_with<C: CostModel>(a: &PostOrder, b: &PostOrder, cost: &C) -> usize {
    if a.is_empty() || b.is_empty() {
        return degenerate(a, b, cost);
    }

    let pairs = (1..=a.len()).flat_map(|i| (1..=b.len()).map(move |j| (i, j)));
    solve(a, b, cost, pairs)[(a.len(), b.len())]
}

/// The edit distance between two trees under the unit cost model, computed
/// by the exhaustive baseline.
pub fn distance_naive(a: &PostOrder, b: &PostOrder) -> usize {
    distance_naive_with(a, b, &Unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockTree, Tree};
    use itertools::Itertools;
    use test_strategy::proptest;

    fn parsed(s: &str) -> Tree {
        s.parse().unwrap()
    }

    fn both(a: &str, b: &str) -> (usize, usize) {
        let a = parsed(a);
        let b = parsed(b);
        let (a, b) = (a.postorder(), b.postorder());
        (distance(&a, &b), distance_naive(&a, &b))
    }

    #[test]
    fn the_classic_restructuring_pair_is_two_edits_apart() {
        assert_eq!(both("f(d(a,c(b)),e)", "f(c(d(a,b)),e)"), (2, 2));
    }

    #[test]
    fn a_single_differing_leaf_is_one_edit_apart() {
        assert_eq!(both("a(b(c,d),e(f,g(i)))", "a(b(c,d),e(f,g(h)))"), (1, 1));
    }

    #[test]
    fn a_leaf_against_a_two_node_tree_is_two_edits_apart() {
        assert_eq!(both("d", "g(h)"), (2, 2));
    }

    #[test]
    fn sibling_order_matters() {
        // Same multiset of labels at the same depth, permuted: b is deleted
        // from the front and re-inserted at the back.
        assert_eq!(both("a(b,c,d)", "a(c,d,b)"), (2, 2));
    }

    #[test]
    fn a_deep_comb_differing_only_in_the_last_leaf_is_one_edit_apart() {
        assert_eq!(
            both(
                "a(b(c(d(e(f(g(h(i(j)))))))))",
                "a(b(c(d(e(f(g(h(i(k)))))))))"
            ),
            (1, 1)
        );

        assert_eq!(
            both(
                "a(b(c(d(e(f(g(h(i(j(k(l(m(n(o(p(q(r(s(t)))))))))))))))))))",
                "a(b(c(d(e(f(g(h(i(j(k(l(m(n(o(p(q(r(s(z)))))))))))))))))))"
            ),
            (1, 1)
        );
    }

    #[test]
    fn a_bush_against_its_reversal_reorders_every_leaf_but_one() {
        // 25 distinct leaves; only one leaf can keep its position, every
        // other one is relabeled, so the distance is 24.
        let leaves = ('a'..='y').join(",");
        let reversed = ('a'..='y').rev().join(",");

        assert_eq!(
            both(&format!("r({leaves})"), &format!("r({reversed})")),
            (24, 24)
        );
    }

    #[test]
    fn a_mixed_shape_pair_differing_in_one_deep_leaf_is_one_edit_apart() {
        assert_eq!(
            both(
                "a(b(c,d),e(f,g(h,i(j,k),l(m,n(o(p,q),r),s),t),u),v(w,x,y,z))",
                "a(b(c,d),e(f,g(h,i(j,k),l(m,n(o(p,A),r),s),t),u),v(w,x,y,z))"
            ),
            (1, 1)
        );
    }

    #[test]
    fn both_engines_agree_on_a_wide_sibling_permutation() {
        let (pruned, naive) = both("a(b,c,d,e,f,g,h,i,j,k)", "a(c,b,e,d,g,f,i,h,k,j)");
        assert_eq!(pruned, naive);
        assert!(pruned > 0);
    }

    #[test]
    fn the_memo_exposes_subtree_distances() {
        // Postorder: a=1, b=2, c=3, d=4, e=5, f=6 on both sides.
        let a = parsed("f(d(a,c(b)),e)");
        let b = parsed("f(c(d(a,b)),e)");
        let memo = distance_table(&a.postorder(), &b.postorder());

        assert_eq!(memo.rows(), 7);
        assert_eq!(memo.cols(), 7);
        assert_eq!(memo[(6, 6)], 2);

        // Leaf a against leaf a, and the identical single-leaf subtrees e.
        assert_eq!(memo[(1, 1)], 0);
        assert_eq!(memo[(5, 5)], 0);
    }

    #[test]
    fn a_costlier_relabel_changes_the_optimal_edit_script() {
        struct Lopsided;

        impl CostModel for Lopsided {
            fn delete(&self, _: &str) -> usize {
                1
            }

            fn insert(&self, _: &str) -> usize {
                1
            }

            fn relabel(&self, from: &str, to: &str) -> usize {
                if from == to {
                    0
                } else {
                    3
                }
            }
        }

        let a = parsed("d");
        let b = parsed("g(h)");
        let (a, b) = (a.postorder(), b.postorder());

        // Relabeling d is now dearer than deleting it and inserting both
        // incoming nodes.
        assert_eq!(distance_with(&a, &b, &Lopsided), 3);
        assert_eq!(distance_naive_with(&a, &b, &Lopsided), 3);
    }

    #[proptest]
    fn the_distance_between_identical_trees_is_zero(t: MockTree) {
        let t = Tree::from(&t);
        let view = t.postorder();
        assert_eq!(distance(&view, &view), 0);
    }

    #[proptest]
    fn the_distance_is_symmetric(a: MockTree, b: MockTree) {
        let (a, b) = (Tree::from(&a), Tree::from(&b));
        let (a, b) = (a.postorder(), b.postorder());
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[proptest]
    fn the_distance_satisfies_the_triangle_inequality(a: MockTree, b: MockTree, c: MockTree) {
        let (a, b, c) = (Tree::from(&a), Tree::from(&b), Tree::from(&c));
        let (a, b, c) = (a.postorder(), b.postorder(), c.postorder());
        assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }

    #[proptest]
    fn the_pruned_and_naive_engines_always_agree(a: MockTree, b: MockTree) {
        let (a, b) = (Tree::from(&a), Tree::from(&b));
        let (a, b) = (a.postorder(), b.postorder());
        assert_eq!(distance(&a, &b), distance_naive(&a, &b));
    }

    #[proptest]
    fn the_distance_to_the_empty_tree_is_the_node_count(t: MockTree) {
        let t = Tree::from(&t);
        let empty = Tree::default();
        let (t, empty) = (t.postorder(), empty.postorder());

        assert_eq!(distance(&empty, &t), t.len());
        assert_eq!(distance(&t, &empty), t.len());
        assert_eq!(distance_naive(&empty, &t), t.len());
        assert_eq!(distance(&empty, &empty), 0);
    }

    #[proptest]
    fn the_distance_never_exceeds_deleting_and_inserting_everything(a: MockTree, b: MockTree) {
        let (a, b) = (Tree::from(&a), Tree::from(&b));
        let (a, b) = (a.postorder(), b.postorder());
        assert!(distance(&a, &b) <= a.len() + b.len());
    }

    #[proptest]
    fn the_memo_corner_agrees_with_the_distance_for_empty_trees(t: MockTree) {
        let t = Tree::from(&t);
        let empty = Tree::default();
        let (t, empty) = (t.postorder(), empty.postorder());

        assert_eq!(distance_table(&empty, &t)[(0, t.len())], distance(&empty, &t));
        assert_eq!(distance_table(&t, &empty)[(t.len(), 0)], distance(&t, &empty));
        assert_eq!(distance_table(&empty, &empty)[(0, 0)], 0);
    }

    #[proptest]
    fn repeated_runs_return_the_same_memo(a: MockTree, b: MockTree) {
        let (a, b) = (Tree::from(&a), Tree::from(&b));
        let (a, b) = (a.postorder(), b.postorder());
        assert_eq!(distance_table(&a, &b), distance_table(&a, &b));
    }
}
