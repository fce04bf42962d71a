use itertools::Itertools;
use proptest::{
    collection::{btree_map, vec},
    prelude::*,
    sample::SizeRange,
};

/// Key-sorted, unique-key entries, shaped for
/// [`SplayMap::from_sorted`](crate::splay::SplayMap::from_sorted).
pub fn sorted_unique_entries(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<(u32, u64)>> {
    btree_map(any::<u32>(), any::<u64>(), size)
        .prop_map(|entries| entries.into_iter().collect_vec())
}

/// The same unique-key entries in an arbitrary insertion order.
pub fn shuffled_unique_entries(
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = Vec<(u32, u64)>> {
    sorted_unique_entries(size).prop_shuffle()
}

/// Probe keys drawn from a dense low range, so hits and misses both occur.
pub fn probe_keys(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<u32>> {
    vec(0..512u32, size)
}
