/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use emr::model::{Application, CloudWatchAlarmDefinition, ComputeLimits, ComputeLimitsUnitType};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn limits() -> ComputeLimits {
    ComputeLimits::builder()
        .unit_type("VCPU")
        .minimum_capacity_units(2)
        .maximum_capacity_units(10)
        .maximum_on_demand_capacity_units(5)
        .build()
}

#[test]
fn independently_built_values_are_equal() {
    let a = limits();
    let b = ComputeLimits::builder()
        .unit_type(ComputeLimitsUnitType::Vcpu)
        .minimum_capacity_units(2)
        .maximum_capacity_units(10)
        .maximum_on_demand_capacity_units(5)
        .build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn any_differing_member_breaks_equality() {
    let mut other = limits();
    other.maximum_on_demand_capacity_units = Some(6);
    assert_ne!(limits(), other);

    let mut unset = limits();
    unset.unit_type = None;
    assert_ne!(limits(), unset);
}

#[test]
fn map_members_hash_independently_of_insertion_order() {
    let mut forward = Application::builder().name("Hive").build();
    let mut backward = forward.clone();
    for key in &["a", "b", "c", "d"] {
        forward.add_additional_info_entry(*key, "x").unwrap();
    }
    for key in &["d", "c", "b", "a"] {
        backward.add_additional_info_entry(*key, "x").unwrap();
    }
    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));
}

#[test]
fn unset_and_empty_maps_differ() {
    let unset = Application::default();
    let empty = Application::builder()
        .set_additional_info(Some(HashMap::new()))
        .build();
    assert_ne!(unset, empty);
    assert_ne!(hash_of(&unset), hash_of(&empty));
}

#[test]
fn float_members_compare_numerically() {
    let alarm = |threshold: f64| {
        CloudWatchAlarmDefinition::builder()
            .metric_name("YARNMemoryAvailablePercentage")
            .threshold(threshold)
            .build()
    };
    assert_eq!(alarm(0.0), alarm(-0.0));
    assert_eq!(hash_of(&alarm(0.0)), hash_of(&alarm(-0.0)));
    assert_ne!(alarm(50.0), alarm(50.5));

    let nan = alarm(f64::NAN);
    assert_ne!(nan, nan.clone());
}

fn application() -> impl Strategy<Value = Application> {
    (
        proptest::option::of("[a-zA-Z]{0,8}"),
        proptest::option::of("[0-9.]{0,6}"),
        proptest::option::of(proptest::collection::vec("[a-z-]{0,4}", 0..4)),
        proptest::option::of(proptest::collection::hash_map("[a-z]{1,4}", "[a-z]{0,4}", 0..4)),
    )
        .prop_map(|(name, version, args, additional_info)| {
            Application::builder()
                .set_name(name)
                .set_version(version)
                .set_args(args)
                .set_additional_info(additional_info)
                .build()
        })
}

/// Draws from four distinct values so independent draws are frequently equal. Map entries are
/// inserted in either order.
fn small_application() -> impl Strategy<Value = Application> {
    (
        proptest::option::of(Just("Hive")),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(name, with_args, reversed)| {
            let mut entries = vec![("k1", "v1"), ("k2", "v2")];
            if reversed {
                entries.reverse();
            }
            let mut builder = Application::builder().set_name(name.map(str::to_owned));
            if with_args {
                builder = builder.args("-x");
            }
            for (k, v) in entries {
                builder = builder.additional_info(k, v).unwrap();
            }
            builder.build()
        })
}

proptest! {
    #[test]
    fn equality_is_transitive(a in small_application(), b in small_application(), c in small_application()) {
        if a == b && b == c {
            prop_assert_eq!(&a, &c);
            prop_assert_eq!(hash_of(&a), hash_of(&c));
        }
        if a == b && b != c {
            prop_assert_ne!(&a, &c);
        }
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(a in application(), b in application()) {
        prop_assert_eq!(&a, &a.clone());
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equal_values_hash_equally(a in application()) {
        let rebuilt = Application::builder()
            .set_name(a.name().map(str::to_owned))
            .set_version(a.version().map(str::to_owned))
            .set_args(a.args().map(<[String]>::to_vec))
            .set_additional_info(a.additional_info().cloned())
            .build();
        prop_assert_eq!(&a, &rebuilt);
        prop_assert_eq!(hash_of(&a), hash_of(&rebuilt));
    }
}
