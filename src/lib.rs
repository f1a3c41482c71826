//! # Overview
//!
//! This crate computes the edit distance between two labeled, ordered trees:
//! the minimum total cost of node [deletions][CostModel::delete],
//! [insertions][CostModel::insert], and [relabelings][CostModel::relabel]
//! that transforms one tree into the other, with sibling order preserved
//! throughout.
//!
//! The engine implements the [Zhang-Shasha algorithm][zhang-shasha]: trees
//! are preprocessed into a [PostOrder] view (postorder numbering, leftmost
//! leaf descendants, keyroots) and the forest-distance dynamic program is
//! then solved once per keyroot pair, reusing subtree distances across
//! overlapping forest ranges. An exhaustive engine that visits every node
//! pair instead of every keyroot pair is provided as a baseline
//! ([distance_naive]); the two always return the same distance.
//!
//! [zhang-shasha]: https://doi.org/10.1137/0218082
//!
//! # Example
//!
//! ```rust
//! use zhang_shasha::{distance, Tree};
//!
//! let a: Tree = "f(d(a,c(b)),e)".parse()?;
//! let b: Tree = "f(c(d(a,b)),e)".parse()?;
//!
//! // Delete c, then re-insert it above d.
//! assert_eq!(distance(&a.postorder(), &b.postorder()), 2);
//! # Ok::<(), zhang_shasha::ParseError>(())
//! ```
//!
//! Trees can be parsed from the nested-parenthesis notation, as above, or
//! assembled node by node with [Tree::push]. Sibling order is significant:
//! `a(b,c)` and `a(c,b)` are two edits apart, not zero.

mod cost;
mod distance;
mod matrix;
mod parse;
mod postorder;
mod tree;

pub use cost::*;
pub use distance::*;
pub use matrix::*;
pub use parse::*;
pub use postorder::*;
pub use tree::*;
