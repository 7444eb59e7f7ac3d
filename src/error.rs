//! Errors reported when a tree's structural invariants don't hold.

/// The first violation found by `check` on [`Bst`][crate::Bst] or [`AvlTree`][crate::AvlTree].
///
/// A correctly working tree never produces one of these; they exist so that tests and callers
/// with custom comparators can ask *why* a tree is broken rather than just *whether* it is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvariantError {
    /// The in-order sequence does not strictly increase at `position`.
    #[error("in-order sequence is not strictly increasing at position {position}")]
    OutOfOrder {
        /// Index (in sorted order) of the first element not greater than its predecessor.
        position: usize,
    },
    /// A node's cached height differs from the height of its subtree.
    #[error("cached height {cached} differs from computed height {computed}")]
    HeightMismatch {
        /// The height stored on the node.
        cached: usize,
        /// One more than the taller child's height.
        computed: usize,
    },
    /// A node's children differ in height by more than one.
    #[error("balance factor {factor} is outside -1..=1")]
    Unbalanced {
        /// Left subtree height minus right subtree height.
        factor: isize,
    },
    /// The maintained element count differs from the number of nodes.
    #[error("tracked length {tracked} differs from node count {counted}")]
    LengthMismatch {
        /// The count the tree maintains.
        tracked: usize,
        /// The number of nodes actually reachable from the root.
        counted: usize,
    },
}
