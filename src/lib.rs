//! This crate exposes an ordered, mutable collection backed by a linked
//! Binary Search Tree (BST) that can be rebuilt into a balanced shape on
//! demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and owns zero, one or two child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Duplicates are allowed and
//!    always land to the right of an equal value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root
//! `Node` to a leaf `Node`. Ordinary insertion does no balancing at all, so
//! inserting already sorted values degrades the tree into a chain. Calling
//! [`Tree::rebalance`] rebuilds it with near-minimal height.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<i32> = (1..=7).collect();
//! assert_eq!(tree.height(), Some(6));
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), Some(2));
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
pub mod linked;
mod node;

pub use error::{Error, Result};
pub use linked::Tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
