//! Lazy in-order iteration.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// An iterator over a tree's values in ascending order.
///
/// Created by `iter` on [`Bst`][crate::Bst] and [`AvlTree`][crate::AvlTree]. Values are produced
/// one at a time without materializing the traversal. The iterator holds a stack of ancestors
/// whose values haven't been emitted yet: it starts with the root's left spine, and each step
/// pops the top node, emits its value, and pushes the left spine of that node's right child.
/// Stack size never exceeds the tree's height.
///
/// Cloning an `Iter` gives an independent cursor at the same position.
pub struct Iter<'a, T> {
    pending: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            remaining: self.remaining,
        }
    }
}
