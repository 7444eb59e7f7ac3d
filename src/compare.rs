//! The total order a tree sorts its elements by.
//!
//! Every tree is handed a [`Comparator`] when it is built. [`Natural`] delegates to the element's
//! [`Ord`] implementation, and any `Fn(&T, &T) -> Ordering` closure can be used to sort by
//! something else.
//!
//! # Examples
//!
//! ```
//! use ordtree::Bst;
//!
//! // Sort descending.
//! let mut tree: Bst<i32, _> = Bst::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! tree.extend([1, 3, 2]);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! assert_eq!(tree.min(), Some(&3));
//! ```

use std::cmp::Ordering;

/// A total order over `T`. Implementations must be consistent: antisymmetric, transitive, and
/// returning `Equal` only for elements the tree should treat as duplicates.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
