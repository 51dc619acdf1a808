/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use emr::model::{
    ClusterState, ComputeLimitsUnitType, InstanceGroupConfig, InstanceRoleType, MarketType, Unit,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[test]
fn enum_and_string_setters_store_the_same_value() {
    let typed = InstanceGroupConfig::builder().market(MarketType::Spot).build();
    let raw = InstanceGroupConfig::builder().market("SPOT").build();
    assert_eq!(typed, raw);
    assert_eq!(raw.market().map(MarketType::as_str), Some("SPOT"));
}

#[test]
fn unknown_tokens_round_trip() {
    let state = ClusterState::from("HIBERNATING");
    match &state {
        ClusterState::Unknown(value) => assert_eq!(value.as_str(), "HIBERNATING"),
        other => panic!("expected an unknown state, got {:?}", other),
    }
    assert_eq!(state, ClusterState::from("HIBERNATING"));
    assert_eq!(state.as_str(), "HIBERNATING");
    assert_eq!(state.to_string(), "HIBERNATING");
}

#[test]
fn tokens_are_case_sensitive() {
    let lower = MarketType::from("spot");
    assert!(matches!(&lower, MarketType::Unknown(value) if value.as_str() == "spot"));
    assert_ne!(lower, MarketType::Spot);
}

#[test]
fn listed_tokens_have_a_single_representation() {
    let from_token = InstanceGroupConfig::builder().market("SPOT").build();
    let from_variant = InstanceGroupConfig::builder().market(MarketType::Spot).build();
    let reparsed = InstanceGroupConfig::builder()
        .market(MarketType::from(MarketType::Spot.as_str()))
        .build();
    assert_eq!(from_token, from_variant);
    assert_eq!(from_token, reparsed);
    assert_eq!(hash_of(&from_token), hash_of(&from_variant));
    assert!(matches!(from_token.market(), Some(MarketType::Spot)));

    let unknown = MarketType::from("RESERVED");
    let copied = match &unknown {
        MarketType::Unknown(value) => MarketType::from(value.as_str()),
        other => panic!("expected an unknown market, got {:?}", other),
    };
    assert_eq!(copied, unknown);
    assert_eq!(hash_of(&copied), hash_of(&unknown));
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn parse_is_infallible() {
    assert_eq!(
        ClusterState::from_str("TERMINATED_WITH_ERRORS"),
        Ok(ClusterState::TerminatedWithErrors)
    );
    assert_eq!("VCPU".parse::<ComputeLimitsUnitType>(), Ok(ComputeLimitsUnitType::Vcpu));
    assert_eq!(
        "InstanceFleetUnits".parse::<ComputeLimitsUnitType>(),
        Ok(ComputeLimitsUnitType::InstanceFleetUnits)
    );
}

#[test]
fn values_list_every_known_token() {
    assert_eq!(MarketType::values(), &["ON_DEMAND", "SPOT"]);
    assert_eq!(InstanceRoleType::values(), &["MASTER", "CORE", "TASK"]);
    assert_eq!(Unit::values().len(), 27);
    for token in Unit::values() {
        let unit = Unit::from(*token);
        assert!(!matches!(unit, Unit::Unknown(_)), "{}", token);
        assert_eq!(AsRef::<str>::as_ref(&unit), *token);
    }
}
