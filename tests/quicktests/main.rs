use quickcheck::{Arbitrary, Gen};

mod heap;
mod tree;

/// An enum for the various kinds of "things" to do to
/// the containers in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Remove something from the data structure. For the tree the
    /// `usize` picks which of the live handles to delete, for the heap
    /// it means "extract the maximum".
    Remove(usize),
    /// Compare the contents against the model
    Check,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(usize::arbitrary(g)),
            2 => Op::Check,
            _ => unreachable!(),
        }
    }
}
