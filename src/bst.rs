//! A plain Binary Search Tree. Values are placed by comparison only, with no rebalancing, so the
//! shape depends entirely on insertion order: inserting ascending values builds a tree that is
//! really a linked list with a height equal to its length.
//!
//! # Recursion
//!
//! `add`, `remove`, the depth-first traversals and `print_tree` recurse once per level. Since the
//! tree can be as tall as it is long, very large trees built from sorted input can exhaust the
//! thread's stack. A warning is logged when the height passes [`DEEP_TREE_WARNING`]. Lookups,
//! `min`/`max`, iteration, `validate`, `clear` and dropping the tree don't recurse.
//!
//! # Examples
//!
//! ```
//! use ordtree::Bst;
//!
//! let mut tree = Bst::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.min(), None);
//!
//! assert!(tree.add(1));
//! assert!(tree.contains(&1));
//!
//! // Values are only stored once.
//! assert!(!tree.add(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use log::{debug, warn};

use crate::compare::{Comparator, Natural};
use crate::error::InvariantError;
use crate::iter::Iter;
use crate::node::{self, Link, Node};
use crate::walk::{self, Order};

/// Height past which a [`Bst`] logs a warning about recursion depth.
pub const DEEP_TREE_WARNING: usize = 4096;

/// An unbalanced Binary Search Tree holding distinct values ordered by `C`.
pub struct Bst<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> Bst<T, Natural>
where
    T: Ord,
{
    /// Generates a new, empty `Bst` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T> Default for Bst<T, Natural>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for Bst<T, C> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T, C> Bst<T, C>
where
    C: Comparator<T>,
{
    /// Generates a new, empty `Bst` that orders its values with `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Bst;
    ///
    /// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    /// let mut tree: Bst<&str, _> = Bst::with_comparator(by_len);
    /// tree.add("ccc");
    /// tree.add("a");
    ///
    /// // Same length means same element as far as this tree is concerned.
    /// assert!(!tree.add("bbb"));
    /// assert_eq!(tree.min(), Some(&"a"));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Inserts `value` unless an equal value is already present. Returns whether the tree grew.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Bst;
    ///
    /// let mut tree = Bst::new();
    /// assert!(tree.add(2));
    /// assert!(tree.add(1));
    /// assert!(!tree.add(2));
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let before = self.len;
        self.root = Some(insert(self.root.take(), value, &self.cmp, &mut self.len));

        let grew = self.len > before;
        if grew && self.height() == DEEP_TREE_WARNING + 1 {
            warn!(
                "binary search tree is {} levels deep; recursive operations may exhaust the stack",
                self.height()
            );
        }
        grew
    }

    /// Removes the value equal to `value`, if any. Returns whether anything was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Bst;
    ///
    /// let mut tree: Bst<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.to_string(), "[1, 3]");
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let before = self.len;
        self.root = remove(self.root.take(), value, &self.cmp, &mut self.len);
        self.len < before
    }

    /// Whether a value equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.cmp.compare(value, &node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Checks that an in-order walk strictly increases under the tree's comparator.
    pub fn validate(&self) -> bool {
        walk::is_sorted(&self.root, &self.cmp)
    }

    /// Like [`validate`][Self::validate] but also verifies every cached height and the element
    /// count, and reports the first violation found.
    pub fn check(&self) -> Result<(), InvariantError> {
        walk::check(&self.root, &self.cmp, self.len, false)
    }
}

impl<T, C> Bst<T, C> {
    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        debug!("clearing binary search tree of {} values", self.len);
        node::dismantle(self.root.take());
        self.len = 0;
    }

    /// Number of levels in the tree: 0 when empty, 1 for a lone root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Bst;
    ///
    /// let mut tree = Bst::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending input degenerates into a list.
    /// tree.extend([1, 2, 3, 4, 5]);
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// The smallest value, or `None` when the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value, or `None` when the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Calls `visit` on each value, every node before its subtrees.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        walk::traverse(&self.root, Order::Pre, &mut visit);
    }

    /// Calls `visit` on each value in ascending order.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        walk::traverse(&self.root, Order::In, &mut visit);
    }

    /// Calls `visit` on each value, every node after its subtrees.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        walk::traverse(&self.root, Order::Post, &mut visit);
    }

    /// Calls `visit` on each value level by level from the root, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Bst;
    ///
    /// let tree: Bst<_> = [4, 2, 6, 1, 3].into_iter().collect();
    ///
    /// let mut levels = Vec::new();
    /// tree.level_order(|v| levels.push(*v));
    /// assert_eq!(levels, vec![4, 2, 6, 1, 3]);
    /// ```
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        walk::traverse(&self.root, Order::Level, &mut visit);
    }

    /// Iterates over the values in ascending order. Every call starts again from the smallest
    /// value.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.len)
    }

    /// Writes the tree sideways, starting at indentation `level`: right subtree first, one tab
    /// per level, then the left subtree.
    pub fn write_tree_at<W>(&self, out: &mut W, level: usize) -> io::Result<()>
    where
        T: fmt::Display,
        W: Write + ?Sized,
    {
        walk::write_sideways(&self.root, level, out)
    }

    /// [`write_tree_at`][Self::write_tree_at] with no initial indentation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Bst;
    ///
    /// let tree: Bst<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut out = Vec::new();
    /// tree.write_tree(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "\t3\n2\n\t1\n");
    /// ```
    pub fn write_tree<W>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: Write + ?Sized,
    {
        self.write_tree_at(out, 0)
    }

    /// Writes the tree sideways to standard output.
    pub fn print_tree(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.write_tree(&mut io::stdout().lock())
    }
}

impl<T, C> Clone for Bst<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C> fmt::Debug for Bst<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the values in ascending order as `[a, b, c]`.
impl<T, C> fmt::Display for Bst<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<'a, T, C> IntoIterator for &'a Bst<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Extend<T> for Bst<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for Bst<T, Natural>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts `value` below `link` and returns the subtree's root, bumping `len` when a node is
/// created. Heights are refreshed on the way back up.
fn insert<T, C>(link: Link<T>, value: T, cmp: &C, len: &mut usize) -> Box<Node<T>>
where
    C: Comparator<T>,
{
    let Some(mut node) = link else {
        *len += 1;
        return Node::boxed(value);
    };
    match cmp.compare(&value, &node.value) {
        Ordering::Less => node.left = Some(insert(node.left.take(), value, cmp, len)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), value, cmp, len)),
        Ordering::Equal => return node,
    }
    node.fix_height();
    node
}

/// Removes `value` from below `link` and returns what is left of the subtree, decrementing `len`
/// when a value is removed.
fn remove<T, C>(link: Link<T>, value: &T, cmp: &C, len: &mut usize) -> Link<T>
where
    C: Comparator<T>,
{
    let mut node = link?;
    match cmp.compare(value, &node.value) {
        Ordering::Less => node.left = remove(node.left.take(), value, cmp, len),
        Ordering::Greater => node.right = remove(node.right.take(), value, cmp, len),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                *len -= 1;
                return None;
            }
            (Some(child), None) | (None, Some(child)) => {
                *len -= 1;
                return Some(child);
            }
            // Two children: the in-order successor (leftmost of the right subtree) moves up into
            // this node.
            (left, Some(right)) => {
                let (right, successor) = take_min(right);
                *len -= 1;
                node.value = successor;
                node.left = left;
                node.right = right;
            }
        },
    }
    node.fix_height();
    Some(node)
}

/// Detaches the smallest node of a non-empty subtree. Returns what is left of the subtree and the
/// detached value.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            node.fix_height();
            (Some(node), min)
        }
    }
}
