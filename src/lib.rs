//! An unbalanced Binary Search Tree (BST) mapping integer keys to
//! caller-owned values, plus a stack-driven in-order iterator.
//!
//! ## The tree
//!
//! A BST stores records as a tree of nodes where, for every node, the keys
//! in its left subtree compare below its own key and the keys in its right
//! subtree compare at or above it. Searching therefore takes `O(height)`.
//! This tree is deliberately *unbalanced*: there is no rotation and no height
//! invariant, so inserting keys in sorted order degenerates it into a list
//! with `O(n)` height. In exchange the shape of the tree is a pure function
//! of the insertion sequence and every mutation is a single descent.
//!
//! Duplicate keys are permitted and never consolidated: an equal key always
//! descends into the right subtree, and lookup and removal both act on the
//! *shallowest* occurrence along the descent path.
//!
//! ## The iterator
//!
//! [`tree::Tree::iter`] yields `(key, &value)` pairs in sorted order without
//! recursion. It keeps the pending right-spine work on an explicit
//! [`stack::Stack`] of borrowed nodes, so traversal can pause between calls
//! and resume without re-walking from the root. Because the iterator borrows
//! the tree for its whole lifetime, mutating the tree while any iterator
//! over it is live is rejected by the borrow checker.
//!
//! ```
//! use naive_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1] {
//!     tree.insert(key, key * 10);
//! }
//!
//! let keys: Vec<i64> = tree.iter().map(|(k, _)| k).collect();
//! assert_eq!(keys, [1, 3, 5, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod stack;
pub mod tree;

#[cfg(test)]
mod test;
