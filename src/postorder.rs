use crate::Tree;
use itertools::Itertools;

/// The preprocessed view of a [Tree] that the edit-distance engine consumes.
///
/// Building a [PostOrder] derives, without mutating the tree:
///
/// - the 1-based postorder index of every node, implicit in the order of
///   [labels][PostOrder::label];
/// - `left`, the postorder index of each node's leftmost leaf descendant;
/// - the ascending keyroot indices: nodes that are rightmost in postorder
///   among all nodes sharing the same leftmost leaf descendant.
///
/// The view borrows labels from the tree, so the same [Tree] can back any
/// number of concurrent views and distance computations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PostOrder<'t> {
    labels: Box<[&'t str]>,
    left: Box<[usize]>,
    keyroots: Box<[usize]>,
}

impl Tree {
    /// Derives the [PostOrder] view of this [Tree].
    ///
    /// A single traversal with an explicit stack assigns postorder indices,
    /// propagates each node's leftmost leaf descendant from its first child
    /// in original order, and collects labels; traversal depth is bounded by
    /// heap memory rather than the call stack. Keyroots are then extracted
    /// in one linear pass by keeping, per distinct leftmost value, the
    /// largest postorder index observed.
    ///
    /// An empty [Tree] yields an empty view.
    pub fn postorder(&self) -> PostOrder<'_> {
        let Some(root) = self.root() else {
            return PostOrder {
                labels: Box::default(),
                left: Box::default(),
                keyroots: Box::default(),
            };
        };

        let mut labels = Vec::with_capacity(self.len());
        let mut left = Vec::with_capacity(self.len());

        // Leftmost leaf descendant per arena index, filled bottom-up.
        let mut leftmost = vec![0; self.len()];

        let mut stack = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            let children = self.children(node);

            if cursor < children.len() {
                frame.1 += 1;
                stack.push((children[cursor], 0));
            } else {
                stack.pop();

                let index = labels.len() + 1;
                leftmost[node] = match children.first() {
                    Some(&first) => leftmost[first],
                    None => index,
                };

                left.push(leftmost[node]);
                labels.push(self.label(node));
            }
        }

        // A node is a keyroot iff it is the last postorder index mapped to
        // its leftmost value.
        let mut last = vec![0; self.len() + 1];
        for (position, &l) in left.iter().enumerate() {
            last[l] = position + 1;
        }

        let keyroots = last.into_iter().filter(|&k| k != 0).sorted().collect();

        PostOrder {
            labels: labels.into(),
            left: left.into(),
            keyroots,
        }
    }
}

impl<'t> PostOrder<'t> {
    /// The number of nodes in the underlying tree.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the underlying tree is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label of the node with postorder index `i` (1-based).
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= i <= len`.
    pub fn label(&self, i: usize) -> &'t str {
        self.labels[i - 1]
    }

    /// The postorder index of the leftmost leaf descendant of the node with
    /// postorder index `i` (1-based).
    ///
    /// `left(i) <= i`, with equality exactly for leaves.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= i <= len`.
    pub fn left(&self, i: usize) -> usize {
        self.left[i - 1]
    }

    /// The keyroot postorder indices, ascending.
    ///
    /// The root's index is always the last entry of a non-empty view.
    pub fn keyroots(&self) -> &[usize] {
        &self.keyroots
    }
}
