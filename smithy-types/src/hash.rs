/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Hashing for member types that do not implement [`Hash`] themselves.
//!
//! Generated shapes with map or floating point members implement `Hash` by hand and call into
//! these helpers so that equal shapes always hash equally.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Hash an optional map independently of its iteration order.
pub fn hash_map<K, V, H>(map: &Option<HashMap<K, V>>, state: &mut H)
where
    K: Hash,
    V: Hash,
    H: Hasher,
{
    match map {
        None => state.write_u8(0),
        Some(entries) => {
            state.write_u8(1);
            let mut combined = 0u64;
            for entry in entries {
                let mut hasher = DefaultHasher::new();
                entry.hash(&mut hasher);
                combined = combined.wrapping_add(hasher.finish());
            }
            state.write_usize(entries.len());
            state.write_u64(combined);
        }
    }
}

/// Hash an optional float by its bit pattern, treating `-0.0` and `0.0` as the same value.
pub fn hash_f64<H: Hasher>(value: &Option<f64>, state: &mut H) {
    match value {
        None => state.write_u8(0),
        Some(v) => {
            state.write_u8(1);
            let normalized = if *v == 0.0 { 0.0 } else { *v };
            state.write_u64(normalized.to_bits());
        }
    }
}

#[cfg(test)]
mod test {
    use super::{hash_f64, hash_map};
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;
    use std::hash::Hasher;

    fn finish(f: impl FnOnce(&mut DefaultHasher)) -> u64 {
        let mut hasher = DefaultHasher::new();
        f(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn signed_zeroes_hash_equally() {
        assert_eq!(
            finish(|h| hash_f64(&Some(0.0), h)),
            finish(|h| hash_f64(&Some(-0.0), h))
        );
    }

    #[test]
    fn absent_and_empty_maps_differ() {
        let absent: Option<HashMap<String, String>> = None;
        let empty: Option<HashMap<String, String>> = Some(HashMap::new());
        assert_ne!(finish(|h| hash_map(&absent, h)), finish(|h| hash_map(&empty, h)));
    }

    proptest! {
        #[test]
        fn map_hash_ignores_insertion_order(entries in proptest::collection::vec(("[a-z]{1,4}", "[a-z]{0,4}"), 0..16)) {
            let forward: HashMap<String, String> = entries.into_iter().collect();
            let mut keys: Vec<&String> = forward.keys().collect();
            keys.sort();
            keys.reverse();
            let mut reversed = HashMap::with_capacity(1);
            for key in keys {
                reversed.insert(key.clone(), forward[key].clone());
            }
            prop_assert_eq!(finish(|h| hash_map(&Some(forward.clone()), h)), finish(|h| hash_map(&Some(reversed), h)));
        }
    }
}
