use ordered_containers::{NodeId, OrderedTree};
use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and to a plain `Vec` of live handles.
/// After every step each handle still in the `Vec` must point at the key it was
/// created with, and a `Check` compares the in-order keys against a sorted model.
fn do_ops(ops: &[Op<i8>]) -> bool {
    let mut tree = OrderedTree::new();
    let mut live: Vec<(NodeId, i8)> = Vec::new();

    for op in ops {
        match *op {
            Op::Insert(k) => {
                let id = tree.insert(k);
                live.push((id, k));
            }
            Op::Remove(pick) => {
                if live.is_empty() {
                    continue;
                }
                let (id, k) = live.swap_remove(pick % live.len());
                if tree.delete(id) != Some(k) || tree.contains(id) {
                    return false;
                }
            }
            Op::Check => {
                let mut model: Vec<_> = live.iter().map(|&(_, k)| k).collect();
                model.sort();
                if tree.iter().copied().collect::<Vec<_>>() != model {
                    return false;
                }
            }
        }
        if tree.len() != live.len() || !live.iter().all(|&(id, k)| tree.key(id) == Some(&k)) {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    do_ops(&ops)
}

#[quickcheck]
fn traversal_is_sorted(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    let mut seen = Vec::new();
    tree.traverse(|k| seen.push(*k));
    seen == sorted
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x).and_then(|id| tree.key(id)) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    nots.iter().filter(|x| !xs.contains(*x)).all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn delete_removes_exactly_one_key(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree = OrderedTree::new();
    let ids: Vec<_> = xs.iter().map(|&x| tree.insert(x)).collect();
    let target = pick % ids.len();

    let mut expected = xs.clone();
    expected.remove(target);
    expected.sort();

    tree.delete(ids[target]) == Some(xs[target])
        && tree.iter().copied().collect::<Vec<_>>() == expected
        && ids
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != target)
            .all(|(i, &id)| tree.key(id) == Some(&xs[i]))
}

#[quickcheck]
fn successor_is_next_larger(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    let ids: Vec<_> = xs.iter().map(|&x| tree.insert(x)).collect();

    ids.iter().all(|&id| {
        let node = tree.node(id).unwrap();
        let key = *node.key();
        // With duplicates the successor may hold an equal key, never a smaller one.
        let next_key = node.successor().map(|n| *n.key());
        let expected = xs.iter().copied().filter(|&x| x > key).min();
        match next_key {
            Some(next) if next == key => true,
            next => next == expected,
        }
    })
}

#[quickcheck]
fn successor_and_predecessor_walk_every_node(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    let mut forward = Vec::new();
    let mut cursor = tree.minimum();
    while let Some(id) = cursor {
        forward.push(*tree.key(id).unwrap());
        cursor = tree.successor(id);
    }

    let mut backward = Vec::new();
    let mut cursor = tree.maximum();
    while let Some(id) = cursor {
        backward.push(*tree.key(id).unwrap());
        cursor = tree.predecessor(id);
    }
    backward.reverse();

    let mut sorted = xs;
    sorted.sort();
    forward == sorted && backward == sorted
}
