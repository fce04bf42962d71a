mod error;

pub mod prelude;
pub mod record;
pub mod splay;
pub mod testing;
pub mod text;

#[doc(hidden)]
/// This is a hidden module to make the macros defined on this crate available for the users.
pub mod __dependencies {
    pub use paste;
    pub use proptest;
    pub use test_strategy;
}

#[macro_export]
macro_rules! test_map_invariants {
    ($type:ident) => {
        $crate::__dependencies::paste::paste! {
            mod [<test_map_invariants_ $type:snake>] {
                use $crate::__dependencies::{
                    proptest::prelude::*,
                    test_strategy,
                };

                use super::$type;

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_inorder_keys_strictly_ascend(map: $type) {
                    let keys: Vec<_> = map.iter().map(|(key, _)| key.clone()).collect();
                    prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_len_matches_traversal(map: $type) {
                    prop_assert_eq!(map.len(), map.iter().count());
                    prop_assert_eq!(map.is_empty(), map.len() == 0);
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_every_key_is_findable_and_lands_at_root(map: $type) {
                    let mut map = map;
                    let entries: Vec<_> = map
                        .iter()
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect();

                    for (key, value) in entries {
                        prop_assert_eq!(map.find(&key).cloned(), Some(value));
                        prop_assert_eq!(map.root_key(), Some(&key));
                    }
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_traversal_is_stable_under_probes(map: $type) {
                    let mut map = map;
                    let before: Vec<_> = map
                        .iter()
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect();

                    let probes: Vec<_> = before.iter().map(|(key, _)| key.clone()).rev().collect();
                    for key in probes {
                        map.find(&key);
                    }

                    let after: Vec<_> = map
                        .iter()
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect();
                    prop_assert_eq!(before, after);
                }
            }
        }
    };
}
