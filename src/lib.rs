//! This crate exposes ordered sets built on Binary Search Trees (BSTs): a plain, unbalanced
//! [`Bst`] and a self-balancing [`AvlTree`].
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree; that is what [`AvlTree`] does. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! Both trees here store each value at most once and order values by a
//! [`Comparator`] chosen when the tree is built.
//!
//! ```
//! use ordtree::{AvlTree, Bst};
//!
//! let mut plain = Bst::new();
//! let mut balanced = AvlTree::new();
//! for x in 0..100 {
//!     plain.add(x);
//!     balanced.insert(x);
//! }
//!
//! assert_eq!(plain.height(), 100);
//! assert_eq!(balanced.height(), 7);
//! assert!(plain.iter().eq(balanced.iter()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
pub mod compare;
mod error;
mod iter;
mod node;
mod walk;


pub use avl::AvlTree;
pub use bst::Bst;
pub use compare::{Comparator, Natural};
pub use error::InvariantError;
pub use iter::Iter;
