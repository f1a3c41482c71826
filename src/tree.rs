use std::fmt;

/// A node of the arena, addressed by index.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
struct Node {
    label: String,
    children: Vec<usize>,
}

/// A labeled ordered tree.
///
/// Nodes live in an arena and refer to their children by index, in the exact
/// left-to-right order they were attached in. That order is semantically
/// relevant: swapping two siblings changes the tree and therefore its edit
/// distance to any other tree.
///
/// The default [Tree] is empty; nodes are attached with [Tree::push].
///
/// # Example
///
/// ```rust
/// use zhang_shasha::Tree;
///
/// let mut tree = Tree::default();
/// let root = tree.push("f", None);
/// tree.push("d", Some(root));
/// tree.push("e", Some(root));
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.to_string(), "f(d,e)");
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl Tree {
    /// The number of nodes in this [Tree].
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether this [Tree] has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The arena index of the root, or [None] if the tree is empty.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// The label of the node at arena index `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn label(&self, node: usize) -> &str {
        &self.nodes[node].label
    }

    /// The children of the node at arena index `node`, in original order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn children(&self, node: usize) -> &[usize] {
        &self.nodes[node].children
    }

    /// Attaches a new node and returns its arena index.
    ///
    /// A node pushed with `parent == None` becomes the root; any other node
    /// is appended to its parent's child list, after all previously attached
    /// siblings.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is out of range, or if a root is pushed while the
    /// tree already has one.
    pub fn push(&mut self, label: impl Into<String>, parent: Option<usize>) -> usize {
        let node = self.nodes.len();

        self.nodes.push(Node {
            label: label.into(),
            children: Vec::new(),
        });

        match parent {
            Some(p) => self.nodes[p].children.push(node),
            None => {
                assert!(self.root.is_none(), "the tree already has a root");
                self.root = Some(node);
            }
        }

        node
    }
}

/// Writes the tree back in the nested-parenthesis notation accepted by
/// [FromStr][std::str::FromStr], e.g. `f(d(a,c(b)),e)`.
///
/// The traversal keeps its own stack, so arbitrarily deep trees format
/// without exhausting the call stack.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step {
            Node(usize),
            Text(&'static str),
        }

        let Some(root) = self.root else {
            return Ok(());
        };

        let mut steps = vec![Step::Node(root)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Text(t) => f.write_str(t)?,
                Step::Node(node) => {
                    f.write_str(self.label(node))?;

                    let children = self.children(node);
                    if !children.is_empty() {
                        steps.push(Step::Text(")"));
                        for (i, &child) in children.iter().enumerate().rev() {
                            steps.push(Step::Node(child));
                            if i > 0 {
                                steps.push(Step::Text(","));
                            }
                        }
                        steps.push(Step::Text("("));
                    }
                }
            }
        }

        Ok(())
    }
}


#[cfg(test)]
pub(crate) use tests::MockTree;
