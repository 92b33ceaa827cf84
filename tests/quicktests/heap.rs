use ordered_containers::compare::{Natural, Reverse};
use ordered_containers::PriorityHeap;
use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a heap and to a sorted `Vec` model whose
/// last element is always the current maximum.
fn do_ops(ops: &[Op<i8>]) -> bool {
    let mut heap = PriorityHeap::new();
    let mut model: Vec<i8> = Vec::new();

    for op in ops {
        match *op {
            Op::Insert(k) => {
                heap.insert(k);
                let at = model.partition_point(|&x| x <= k);
                model.insert(at, k);
            }
            Op::Remove(_) => {
                if heap.extract() != model.pop() {
                    return false;
                }
            }
            Op::Check => {
                if heap.peek() != model.last() {
                    return false;
                }
            }
        }
        if heap.len() != model.len() {
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
fn build_then_extract_is_sorted_descending(xs: Vec<i32>) -> bool {
    let mut heap = PriorityHeap::from_vec(xs.clone());
    let drained: Vec<_> = std::iter::from_fn(|| heap.extract()).collect();

    let mut expected = xs;
    expected.sort_by(|a, b| b.cmp(a));
    drained == expected
}

#[quickcheck]
fn insert_then_extract_is_sorted_descending(xs: Vec<i32>) -> bool {
    let mut heap = PriorityHeap::new();
    for x in &xs {
        heap.insert(*x);
    }
    let drained: Vec<_> = std::iter::from_fn(|| heap.extract()).collect();

    let mut expected = xs;
    expected.sort_by(|a, b| b.cmp(a));
    drained == expected
}

#[quickcheck]
fn peek_is_idempotent(xs: Vec<i32>, peeks: u8) -> bool {
    let mut heap = PriorityHeap::from_vec(xs.clone());
    let untouched = heap.clone();
    let first = heap.peek().copied();
    let same = (0..peeks % 16).all(|_| heap.peek().copied() == first);

    same
        && heap.as_slice() == untouched.as_slice()
        && heap.extract() == untouched.into_sorted_vec().pop()
}

#[quickcheck]
fn min_heap_extracts_ascending(xs: Vec<i32>) -> bool {
    let mut heap: PriorityHeap<_, Reverse<Natural>> = xs.iter().copied().collect();
    let drained: Vec<_> = std::iter::from_fn(|| heap.extract()).collect();

    let mut expected = xs;
    expected.sort();
    drained == expected
}
