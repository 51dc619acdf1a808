/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Entry-wise construction of optional map members.

use crate::error::DuplicateKeyError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Insert `key` into `map`, creating the map if it is absent.
///
/// Fails if `key` is already present; existing entries are never overwritten.
pub fn insert_unique<V>(
    map: &mut Option<HashMap<String, V>>,
    key: String,
    value: V,
) -> Result<(), DuplicateKeyError> {
    match map.get_or_insert_with(HashMap::new).entry(key) {
        Entry::Occupied(existing) => {
            debug!(key = %existing.key(), "rejected duplicate map key");
            Err(DuplicateKeyError::new(existing.key().as_str()))
        }
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::insert_unique;
    use crate::DuplicateKeyError;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn first_insert_creates_map() {
        let mut map: Option<HashMap<String, String>> = None;
        insert_unique(&mut map, "a".into(), "1".into()).expect("empty map");
        assert_eq!(map.unwrap().get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn duplicate_leaves_map_unchanged() {
        let mut map: Option<HashMap<String, String>> = None;
        insert_unique(&mut map, "a".into(), "1".into()).unwrap();
        let before = map.clone();
        assert_eq!(
            insert_unique(&mut map, "a".into(), "2".into()),
            Err(DuplicateKeyError::new("a"))
        );
        assert_eq!(map, before);
    }

    proptest! {
        #[test]
        fn rejects_exactly_the_repeated_keys(keys in proptest::collection::vec("[a-c]{1,2}", 0..20)) {
            let mut map: Option<HashMap<String, usize>> = None;
            let mut expected = HashMap::new();
            for (i, key) in keys.iter().enumerate() {
                let result = insert_unique(&mut map, key.clone(), i);
                if expected.contains_key(key) {
                    prop_assert_eq!(result, Err(DuplicateKeyError::new(key.as_str())));
                } else {
                    prop_assert!(result.is_ok());
                    expected.insert(key.clone(), i);
                }
            }
            prop_assert_eq!(map.unwrap_or_default(), expected);
        }
    }
}
