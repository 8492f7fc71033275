use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to the tree in a
/// quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<V> {
    /// Insert the key/value pair.
    Insert(i64, V),
    /// Remove the shallowest node with the key.
    Remove(i64),
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Keys are drawn
    /// from a narrow range so that removals hit existing nodes and duplicate
    /// keys actually occur.
    fn arbitrary(g: &mut Gen) -> Self {
        let key = i64::from(i8::arbitrary(g));
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(key, V::arbitrary(g)),
            _ => Op::Remove(key),
        }
    }
}
