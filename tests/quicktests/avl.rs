use ordtree::AvlTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut AvlTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                tree.remove(v);
                set.remove(v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = AvlTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.iter().eq(set.iter()) && tree.check().is_ok()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: AvlTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: AvlTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: AvlTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
        && tree.check().is_ok()
}

#[quickcheck]
fn insert_twice_same_as_once(xs: Vec<i8>) -> bool {
    let once: AvlTree<_> = xs.iter().copied().collect();
    let mut twice = once.clone();
    let grew = xs.iter().any(|x| twice.insert(*x));

    let mut once_shape = Vec::new();
    once.pre_order(|v| once_shape.push(*v));
    let mut twice_shape = Vec::new();
    twice.pre_order(|v| twice_shape.push(*v));

    !grew && once_shape == twice_shape && once.len() == twice.len()
}

#[quickcheck]
fn level_order_visits_everything(xs: Vec<i8>) -> bool {
    let tree: AvlTree<_> = xs.into_iter().collect();
    let mut seen = Vec::new();
    tree.level_order(|v| seen.push(*v));

    seen.sort_unstable();
    seen.iter().eq(tree.iter())
}
