//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Every node keeps the heights of its two subtrees within one of each other, so the tree's
//! height stays logarithmic in its length whatever order values arrive in. Mutations are written
//! as functions that take ownership of a subtree and return its (possibly new) root: each frame
//! of the recursion refreshes its node's height and rotates before handing the root back to its
//! caller, which is how rebalancing propagates from the changed leaf up to the tree's root.
//!
//! See [the Wikipedia page][wiki] for terminology.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
//!
//! # Examples
//!
//! ```
//! use ordtree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.search(&1));
//!
//! // Ascending input doesn't make this tree lopsided.
//! for x in 1..=7 {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.height(), 3);
//!
//! assert!(tree.remove(&4));
//! assert!(!tree.search(&4));
//! assert_eq!(tree.check(), Ok(()));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use log::{debug, trace};

use crate::compare::{Comparator, Natural};
use crate::error::InvariantError;
use crate::iter::Iter;
use crate::node::{self, Link, Node};
use crate::walk::{self, Order};

/// A self-balancing Binary Search Tree holding distinct values ordered by `C`.
pub struct AvlTree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> AvlTree<T, Natural>
where
    T: Ord,
{
    /// Generates a new, empty `AvlTree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T> Default for AvlTree<T, Natural>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for AvlTree<T, C> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Comparator<T>,
{
    /// Generates a new, empty `AvlTree` that orders its values with `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Inserts `value` unless an equal value is already present, rebalancing on the way back up.
    /// Returns whether the tree grew.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(1));
    ///
    /// // The third ascending value rotates 2 up into the root.
    /// assert!(tree.insert(3));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, outcome) = insert(self.root.take(), value, &self.cmp);
        self.root = Some(root);
        let inserted = outcome != Insertion::Duplicate;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the value equal to `value`, if any, rebalancing on the way back up. Returns
    /// whether anything was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlTree;
    ///
    /// let mut tree: AvlTree<_> = (1..=4).collect();
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert_eq!(tree.to_string(), "[2, 3, 4]");
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let mut removed = false;
        self.root = remove(self.root.take(), value, &self.cmp, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Whether a value equal to `value` is in the tree.
    pub fn search(&self, value: &T) -> bool {
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

    /// Alias of [`search`][Self::search].
    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }

    /// Checks that an in-order walk strictly increases under the tree's comparator.
    pub fn validate(&self) -> bool {
        walk::is_sorted(&self.root, &self.cmp)
    }

    /// Verifies ordering, every cached height, the element count and the balance of every node,
    /// reporting the first violation found.
    pub fn check(&self) -> Result<(), InvariantError> {
        walk::check(&self.root, &self.cmp, self.len, true)
    }
}

impl<T, C> AvlTree<T, C> {
    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        debug!("clearing AVL tree of {} values", self.len);
        node::dismantle(self.root.take());
        self.len = 0;
    }

    /// Number of levels in the tree: 0 when empty, 1 for a lone root.
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

    /// Writes the values in ascending order as a `[a b c]` line.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::AvlTree;
    ///
    /// let tree: AvlTree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// let mut out = Vec::new();
    /// tree.write_in_order(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "[1 2 3]\n");
    /// ```
    pub fn write_in_order<W>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: Write + ?Sized,
    {
        walk::write_bracketed(&self.root, Order::In, out)
    }

    /// Writes the values in pre-order as a `[a b c]` line.
    pub fn write_pre_order<W>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: Write + ?Sized,
    {
        walk::write_bracketed(&self.root, Order::Pre, out)
    }

    /// Writes the values in post-order as a `[a b c]` line.
    pub fn write_post_order<W>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: Write + ?Sized,
    {
        walk::write_bracketed(&self.root, Order::Post, out)
    }

    /// Writes the tree sideways: right subtree first, one tab per level, then the left subtree.
    pub fn write_tree<W>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: Write + ?Sized,
    {
        walk::write_sideways(&self.root, 0, out)
    }

    /// [`write_in_order`][Self::write_in_order] to standard output.
    pub fn print_in_order(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.write_in_order(&mut io::stdout().lock())
    }

    /// [`write_pre_order`][Self::write_pre_order] to standard output.
    pub fn print_pre_order(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.write_pre_order(&mut io::stdout().lock())
    }

    /// [`write_post_order`][Self::write_post_order] to standard output.
    pub fn print_post_order(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.write_post_order(&mut io::stdout().lock())
    }

    /// [`write_tree`][Self::write_tree] to standard output.
    pub fn print_tree(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.write_tree(&mut io::stdout().lock())
    }
}

impl<T, C> Clone for AvlTree<T, C>
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

impl<T, C> fmt::Debug for AvlTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the values in ascending order as `[a, b, c]`.
impl<T, C> fmt::Display for AvlTree<T, C>
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

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Extend<T> for AvlTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T, Natural>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// What an insertion did to the subtree it was applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Insertion {
    /// An equal value was already present; nothing changed.
    Duplicate,
    /// A node was created. The ordering is the inserted value compared with the value of the
    /// subtree's root as it was on the way down (`Equal` when the new node is that root).
    Added(Ordering),
}

/// Inserts `value` below `link` and returns the subtree's new root.
fn insert<T, C>(link: Link<T>, value: T, cmp: &C) -> (Box<Node<T>>, Insertion)
where
    C: Comparator<T>,
{
    let Some(mut node) = link else {
        return (Node::boxed(value), Insertion::Added(Ordering::Equal));
    };

    let side = cmp.compare(&value, &node.value);
    let below = match side {
        Ordering::Less => {
            let (left, below) = insert(node.left.take(), value, cmp);
            node.left = Some(left);
            below
        }
        Ordering::Greater => {
            let (right, below) = insert(node.right.take(), value, cmp);
            node.right = Some(right);
            below
        }
        // Nothing below changed so no heights need fixing.
        Ordering::Equal => return (node, Insertion::Duplicate),
    };
    match below {
        Insertion::Duplicate => (node, Insertion::Duplicate),
        Insertion::Added(child_side) => {
            (rebalance_after_insert(node, child_side), Insertion::Added(side))
        }
    }
}

/// Refreshes `node`'s height and applies at most one corrective rotation. `child_side` is the
/// inserted value compared with the value of the child it descended into, which tells the outer
/// cases (left-left, right-right) from the inner ones (left-right, right-left).
fn rebalance_after_insert<T>(mut node: Box<Node<T>>, child_side: Ordering) -> Box<Node<T>> {
    node.fix_height();
    let factor = node.balance_factor();
    let balanced = match child_side {
        Ordering::Less if factor > 1 => {
            trace!("insert: left-left case, rotating right");
            rotate_right(node)
        }
        Ordering::Greater if factor < -1 => {
            trace!("insert: right-right case, rotating left");
            rotate_left(node)
        }
        Ordering::Greater if factor > 1 => {
            trace!("insert: left-right case, rotating left then right");
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Ordering::Less if factor < -1 => {
            trace!("insert: right-left case, rotating right then left");
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
        _ => node,
    };

    if cfg!(debug_assertions) {
        assert!(balanced.balance_factor().abs() <= 1);
    }
    balanced
}

/// Removes `value` from below `link` and returns what is left of the subtree. Sets `removed` when
/// a value was found.
fn remove<T, C>(link: Link<T>, value: &T, cmp: &C, removed: &mut bool) -> Link<T>
where
    C: Comparator<T>,
{
    let mut node = link?;
    match cmp.compare(value, &node.value) {
        Ordering::Less => node.left = remove(node.left.take(), value, cmp, removed),
        Ordering::Greater => node.right = remove(node.right.take(), value, cmp, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                // A leaf simply goes away and a single child is spliced into this node's place.
                // The child was already balanced and its height is unchanged.
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                // Two children: the in-order successor (leftmost of the right subtree) moves up
                // into this node.
                (left, Some(right)) => {
                    let (right, successor) = take_min(right);
                    node.value = successor;
                    node.left = left;
                    node.right = right;
                }
            }
        }
    }
    Some(rebalance_after_remove(node))
}

/// Detaches the smallest node of a non-empty subtree, rebalancing every frame on the way back up.
/// Returns what is left of the subtree and the detached value.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(rebalance_after_remove(node)), min)
        }
    }
}

/// Refreshes `node`'s height and rotates if it is out of balance. A removal can shorten the
/// subtree and unbalance every ancestor, so the children's own balance factors (not the removed
/// value) decide between single and double rotations.
fn rebalance_after_remove<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.fix_height();
    let factor = node.balance_factor();
    let balanced = if factor > 1 {
        let left_factor = node.left.as_ref().map_or(0, |n| n.balance_factor());
        if left_factor >= 0 {
            trace!("remove: left-left case, rotating right");
        } else {
            trace!("remove: left-right case, rotating left then right");
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if factor < -1 {
        let right_factor = node.right.as_ref().map_or(0, |n| n.balance_factor());
        if right_factor <= 0 {
            trace!("remove: right-right case, rotating left");
        } else {
            trace!("remove: right-left case, rotating right then left");
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    };

    if cfg!(debug_assertions) {
        assert!(balanced.balance_factor().abs() <= 1);
    }
    balanced
}

/// Returns a new subtree by rotating the left child up to become the root. The old root becomes
/// the new root's right child and adopts the new root's old right child as its left child.
/// Only the two moved nodes change height. A node without a left child is returned unchanged.
///
/// ```text
///         y               x
///        / \             / \
///       x   c   ->      a   y
///      / \                 / \
///     a   b               b   c
/// ```
fn rotate_right<T>(mut y: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.fix_height();
    x.right = Some(y);
    x.fix_height();
    x
}

/// Mirror image of [`rotate_right`]: the right child rises to become the root.
fn rotate_left<T>(mut x: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.fix_height();
    y.left = Some(x);
    y.fix_height();
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assert the heights of the root, left child, and right child of a tree.
    macro_rules! assert_heights {
        ($tree:ident, $height:expr, $left_height:expr, $right_height:expr) => {{
            match &$tree.root {
                Some(n) => {
                    assert_eq!(n.height, $height);

                    assert_eq!(node::height(&n.left), $left_height);
                    assert_eq!(node::height(&n.right), $right_height);
                }
                None => assert_eq!(0, $height),
            }
        }};
    }

    fn root_value<C>(tree: &AvlTree<i32, C>) -> Option<i32> {
        tree.root.as_ref().map(|n| n.value)
    }

    fn pre_order<C>(tree: &AvlTree<i32, C>) -> Vec<i32> {
        let mut seen = Vec::new();
        tree.pre_order(|v| seen.push(*v));
        seen
    }

    #[test]
    fn always_adding_left() {
        let values = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut inserted = Vec::new();

        let mut tree = AvlTree::new();
        assert!(!tree.search(&10));

        for value in values {
            assert!(tree.insert(value));
            inserted.push(value);
            for inserted in &inserted {
                assert!(tree.search(inserted));
            }
            assert_eq!(tree.check(), Ok(()));
        }
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn always_adding_right() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut inserted = Vec::new();

        let mut tree = AvlTree::new();
        assert!(!tree.search(&1));

        for value in values {
            assert!(tree.insert(value));
            inserted.push(value);
            for inserted in &inserted {
                assert!(tree.search(inserted));
            }
            assert_eq!(tree.check(), Ok(()));
        }
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn test_left_left_rebalance() {
        let mut tree = AvlTree::new();
        tree.extend([3, 2, 1]);

        assert_eq!(root_value(&tree), Some(2));
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn test_right_right_rebalance() {
        let mut tree = AvlTree::new();
        tree.extend([1, 2, 3]);

        assert_eq!(root_value(&tree), Some(2));
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn test_left_right_rebalance() {
        let mut tree = AvlTree::new();
        tree.extend([0, -2, -1]);

        assert_eq!(root_value(&tree), Some(-1));
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn test_right_left_rebalance() {
        let mut tree = AvlTree::new();
        tree.extend([0, 2, 1]);

        assert_eq!(root_value(&tree), Some(1));
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn deep_left_right_rebalance() {
        // 20 leans left by one; inserting 15 under 10's right child tips it over on the inner
        // side.
        let mut tree = AvlTree::new();
        tree.extend([20, 10, 30, 5, 12, 15]);

        assert_eq!(pre_order(&tree), vec![12, 10, 5, 20, 15, 30]);
        assert_heights!(tree, 3, 2, 2);
        assert_eq!(tree.check(), Ok(()));
    }

    #[test]
    fn duplicate_insert_changes_nothing() {
        let mut tree: AvlTree<_> = [2, 1, 3].into_iter().collect();
        assert!(!tree.insert(1));
        assert!(!tree.insert(2));

        assert_eq!(tree.len(), 3);
        assert_eq!(pre_order(&tree), vec![2, 1, 3]);
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn delete_with_no_children() {
        let mut tree = AvlTree::new();
        tree.extend([5, 3, 7]);

        assert!(tree.remove(&7));
        assert!(!tree.search(&7));
        assert!(tree.search(&3));
        assert!(tree.search(&5));
        assert_heights!(tree, 2, 1, 0);
    }

    #[test]
    fn delete_with_null_left() {
        let mut tree = AvlTree::new();
        tree.extend([5, 3, 7, 9]);

        assert!(tree.remove(&7));
        assert_eq!(pre_order(&tree), vec![5, 3, 9]);
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn delete_with_null_right() {
        let mut tree = AvlTree::new();
        tree.extend([5, 3, 7, 6]);

        assert!(tree.remove(&7));
        assert_eq!(pre_order(&tree), vec![5, 3, 6]);
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn delete_with_successor() {
        let mut tree = AvlTree::new();
        tree.extend([5, 3, 7, 6, 8]);

        assert!(tree.remove(&7));
        assert_eq!(pre_order(&tree), vec![5, 3, 8, 6]);
        assert_eq!(tree.check(), Ok(()));
    }

    #[test]
    fn delete_root() {
        let mut tree = AvlTree::new();
        tree.insert(5);

        assert!(tree.remove(&5));
        assert!(!tree.search(&5));
        assert!(tree.is_empty());
        assert_heights!(tree, 0, 0, 0);
    }

    #[test]
    fn delete_triggers_single_rotation() {
        // Removing 1 leaves 2 right-heavy by two with a balanced right child.
        let mut tree = AvlTree::new();
        tree.extend([2, 1, 4, 3, 5]);

        assert!(tree.remove(&1));
        assert_eq!(pre_order(&tree), vec![4, 2, 3, 5]);
        assert_heights!(tree, 3, 2, 1);
    }

    #[test]
    fn delete_triggers_double_rotation() {
        // Removing 1 leaves 2 right-heavy by two with a left-leaning right child.
        let mut tree = AvlTree::new();
        tree.extend([2, 1, 4, 3]);

        assert!(tree.remove(&1));
        assert_eq!(pre_order(&tree), vec![3, 2, 4]);
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn delete_rebalances_more_than_one_ancestor() {
        // A minimal (Fibonacci) AVL tree of height 5: deleting the shallowest leaf forces a
        // rotation at its parent and another at the root.
        let mut tree = AvlTree::new();
        tree.extend([8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
        assert_eq!(tree.height(), 5);

        assert!(tree.remove(&12));
        assert_eq!(tree.check(), Ok(()));
        assert_eq!(tree.height(), 4);
        assert_eq!(root_value(&tree), Some(5));
    }

    #[test]
    fn quickcheck_found_invalid_height_after_deletion() {
        let mut tree = AvlTree::new();
        tree.extend([77, -22, 0, -127, 5, 109, -58, -105, -65, -86, 45, -11, -39]);
        tree.remove(&0);
        tree.remove(&-122);
        assert_eq!(tree.check(), Ok(()));
    }

    #[test]
    fn quickcheck_found_invalid_height_after_deletion2() {
        let mut tree = AvlTree::new();
        tree.extend([-49, -107, 127, -22, -77, -128, -119, -69, -122, 109, 115, -118]);
        tree.remove(&-49);
        tree.remove(&-77);
        assert_eq!(tree.check(), Ok(()));
    }

    #[test]
    fn printers() {
        let tree: AvlTree<_> = [2, 1, 3].into_iter().collect();

        let mut out = Vec::new();
        tree.write_pre_order(&mut out).unwrap();
        tree.write_post_order(&mut out).unwrap();
        tree.write_tree(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[2 1 3]\n[1 3 2]\n\t3\n2\n\t1\n"
        );
        assert_eq!(format!("{tree}"), "[1, 2, 3]");
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }

    #[test]
    fn clear_then_reuse() {
        let mut tree: AvlTree<_> = (0..50).collect();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.max(), None);

        assert!(tree.insert(1));
        assert_eq!(tree.check(), Ok(()));
    }

    #[test]
    fn rotations_preserve_order_and_heights() {
        let mut tree = AvlTree::new();
        tree.extend([4, 2, 6, 1, 3, 5, 7]);
        let Some(root) = tree.root.take() else {
            panic!("tree has a root");
        };

        tree.root = Some(rotate_right(root));
        assert_eq!(root_value(&tree), Some(2));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (1..=7).collect::<Vec<_>>());
        assert_heights!(tree, 4, 1, 3);

        let Some(root) = tree.root.take() else {
            panic!("tree has a root");
        };
        tree.root = Some(rotate_left(root));
        assert_eq!(root_value(&tree), Some(4));
        assert_heights!(tree, 3, 2, 2);
        assert_eq!(tree.check(), Ok(()));
    }

    #[test]
    fn rotating_without_pivot_is_noop() {
        let leaf = Node::boxed(1);
        let leaf = rotate_left(rotate_right(leaf));
        assert_eq!(leaf.value, 1);
        assert_eq!(leaf.height, 1);
    }
}
