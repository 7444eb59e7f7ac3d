use ordtree::Bst;

use std::collections::BTreeSet;

use crate::Op;

/// Applies every operation to both a tree and a set, checking that the tree's `bool` results
/// agree with the set's.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Bst<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(v) => tree.add(v.clone()) == set.insert(v.clone()),
        Op::Remove(v) => tree.remove(v) == set.remove(v),
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Bst::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && tree.iter().eq(set.iter())
        && tree.validate()
        && tree.check().is_ok()
}

#[quickcheck]
fn size_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree: Bst<_> = xs.iter().copied().collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len()
}

#[quickcheck]
fn round_trip(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Bst<_> = xs.into_iter().collect();
    tree.add(x);
    let found = tree.contains(&x);
    let removed = tree.remove(&x);
    let gone = !tree.contains(&x);
    let readded = tree.add(x);

    found && removed && gone && readded && tree.contains(&x)
}

#[quickcheck]
fn in_order_matches_iter(xs: Vec<i8>) -> bool {
    let tree: Bst<_> = xs.into_iter().collect();
    let mut visited = Vec::new();
    tree.in_order(|v| visited.push(*v));

    visited.iter().eq(tree.iter())
}

#[quickcheck]
fn comparator_is_respected(xs: Vec<i8>) -> bool {
    let mut tree: Bst<i8, _> = Bst::with_comparator(|a: &i8, b: &i8| b.cmp(a));
    tree.extend(xs.iter().copied());
    let descending: Vec<_> = tree.iter().copied().collect();
    let mut expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    expected.reverse();

    tree.validate() && descending == expected
}
