//! The cell both trees are built from.

use std::cmp;

/// An owned, possibly empty subtree. Every subtree has exactly one owner: its parent's slot, or
/// the tree itself for the root.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single binary-tree cell holding a value, its two children and the cached height of the
/// subtree rooted here.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<T> Node<T> {
    /// Construct a new leaf holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) fn boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1. Children must
    /// already carry correct heights.
    pub(crate) fn fix_height(&mut self) {
        self.height = cmp::max(height(&self.left), height(&self.right)) + 1;
    }

    /// Height of the left subtree minus height of the right subtree. Positive values mean the
    /// node leans left.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Cached height of a subtree, 0 when it is empty.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// Drops every node of a subtree without recursing, so that degenerate (list shaped) trees don't
/// blow the stack when they go away.
pub(crate) fn dismantle<T>(link: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
