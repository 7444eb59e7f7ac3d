//! Eager walks over a subtree: the four visitor traversals, the sideways printer, and the
//! structural checker. Both trees use the same [`Node`] shape so they share these.
//!
//! The depth-first walks recurse, so their stack use is proportional to the subtree's height.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, Write};

use crate::compare::Comparator;
use crate::error::InvariantError;
use crate::node::{Link, Node};

/// The order an eager traversal visits values in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    Pre,
    In,
    Post,
    Level,
}

pub(crate) fn traverse<T, F>(link: &Link<T>, order: Order, visit: &mut F)
where
    F: FnMut(&T),
{
    match order {
        Order::Pre => pre_order(link, visit),
        Order::In => in_order(link, visit),
        Order::Post => post_order(link, visit),
        Order::Level => level_order(link, visit),
    }
}

fn pre_order<T, F>(link: &Link<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(node) = link {
        visit(&node.value);
        pre_order(&node.left, visit);
        pre_order(&node.right, visit);
    }
}

fn in_order<T, F>(link: &Link<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(node) = link {
        in_order(&node.left, visit);
        visit(&node.value);
        in_order(&node.right, visit);
    }
}

fn post_order<T, F>(link: &Link<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(node) = link {
        post_order(&node.left, visit);
        post_order(&node.right, visit);
        visit(&node.value);
    }
}

/// Breadth first, left to right within a level.
fn level_order<T, F>(link: &Link<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    let mut queue: VecDeque<&Node<T>> = link.as_deref().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visit(&node.value);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

/// Renders the subtree sideways: right subtree first, then this node indented by one tab per
/// level, then the left subtree. Reading the output with your head tilted left shows the tree.
pub(crate) fn write_sideways<T, W>(link: &Link<T>, level: usize, out: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    let Some(node) = link else {
        return Ok(());
    };
    write_sideways(&node.right, level + 1, out)?;
    for _ in 0..level {
        out.write_all(b"\t")?;
    }
    writeln!(out, "{}", node.value)?;
    write_sideways(&node.left, level + 1, out)
}

/// Writes `[a b c]` followed by a newline, visiting values in `order`.
pub(crate) fn write_bracketed<T, W>(link: &Link<T>, order: Order, out: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    let mut result = out.write_all(b"[");
    let mut first = true;
    traverse(link, order, &mut |value: &T| {
        if result.is_err() {
            return;
        }
        result = if first {
            write!(out, "{value}")
        } else {
            write!(out, " {value}")
        };
        first = false;
    });
    result?;
    out.write_all(b"]\n")
}

/// True when the in-order sequence strictly increases under `cmp`.
pub(crate) fn is_sorted<T, C>(link: &Link<T>, cmp: &C) -> bool
where
    C: Comparator<T>,
{
    first_out_of_order(link, cmp).is_none()
}

/// Position (in sorted order) of the first element that isn't greater than its predecessor.
fn first_out_of_order<T, C>(link: &Link<T>, cmp: &C) -> Option<usize>
where
    C: Comparator<T>,
{
    let mut previous: Option<&T> = None;
    let mut stack: Vec<&Node<T>> = Vec::new();
    let mut current = link.as_deref();
    let mut position = 0;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let node = stack.pop()?;
        if let Some(previous) = previous {
            if cmp.compare(previous, &node.value).is_ge() {
                return Some(position);
            }
        }
        previous = Some(&node.value);
        position += 1;
        current = node.right();
    }
}

/// Verifies ordering, cached heights, the node count and, when `balanced` is set, the AVL
/// balance invariant at every node.
pub(crate) fn check<T, C>(
    link: &Link<T>,
    cmp: &C,
    tracked: usize,
    balanced: bool,
) -> Result<(), InvariantError>
where
    C: Comparator<T>,
{
    if let Some(position) = first_out_of_order(link, cmp) {
        return Err(InvariantError::OutOfOrder { position });
    }
    let mut counted = 0;
    check_shape(link, balanced, &mut counted)?;
    if counted != tracked {
        return Err(InvariantError::LengthMismatch { tracked, counted });
    }
    Ok(())
}

/// Returns the computed height of the subtree.
fn check_shape<T>(
    link: &Link<T>,
    balanced: bool,
    counted: &mut usize,
) -> Result<usize, InvariantError> {
    let Some(node) = link else {
        return Ok(0);
    };
    *counted += 1;
    let left = check_shape(&node.left, balanced, counted)?;
    let right = check_shape(&node.right, balanced, counted)?;

    let computed = left.max(right) + 1;
    if node.height != computed {
        return Err(InvariantError::HeightMismatch {
            cached: node.height,
            computed,
        });
    }
    let factor = left as isize - right as isize;
    if balanced && factor.abs() > 1 {
        return Err(InvariantError::Unbalanced { factor });
    }
    Ok(computed)
}
