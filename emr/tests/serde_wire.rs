/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![cfg(all(feature = "serde-serialize", feature = "serde-deserialize"))]

use emr::model::{
    ClusterTimeline, InstanceGroupModifyConfig, KerberosAttributes, MarketType,
    VolumeSpecification,
};
use emr::Instant;
use serde_json::json;

#[test]
fn members_use_wire_names() {
    let modify = InstanceGroupModifyConfig::builder()
        .instance_group_id("ig-1")
        .ec2_instance_ids_to_terminate("i-1")
        .build();
    assert_eq!(
        serde_json::to_value(&modify).unwrap(),
        json!({"InstanceGroupId": "ig-1", "EC2InstanceIdsToTerminate": ["i-1"]})
    );

    let kerberos = KerberosAttributes::builder()
        .realm("EC2.INTERNAL")
        .ad_domain_join_user("admin")
        .build();
    assert_eq!(
        serde_json::to_value(&kerberos).unwrap(),
        json!({"Realm": "EC2.INTERNAL", "ADDomainJoinUser": "admin"})
    );

    let volume = VolumeSpecification::builder()
        .volume_type("gp2")
        .size_in_gb(32)
        .build();
    assert_eq!(
        serde_json::to_value(&volume).unwrap(),
        json!({"VolumeType": "gp2", "SizeInGB": 32})
    );
}

#[test]
fn unset_members_are_omitted() {
    assert_eq!(
        serde_json::to_string(&VolumeSpecification::default()).unwrap(),
        "{}"
    );
}

#[test]
fn documents_deserialize_into_shapes() {
    let volume: VolumeSpecification =
        serde_json::from_value(json!({"VolumeType": "io1", "Iops": 3000, "SizeInGB": 100}))
            .unwrap();
    assert_eq!(
        volume,
        VolumeSpecification::builder()
            .volume_type("io1")
            .iops(3000)
            .size_in_gb(100)
            .build()
    );
}

#[test]
fn timestamps_are_epoch_seconds() {
    let timeline = ClusterTimeline::builder()
        .creation_date_time(Instant::from_epoch_seconds(1576540098))
        .ready_date_time(Instant::from_secs_and_nanos(1576540158, 500_000_000))
        .build();
    let value = serde_json::to_value(&timeline).unwrap();
    assert_eq!(
        value,
        json!({"CreationDateTime": 1576540098, "ReadyDateTime": 1576540158.5})
    );
    let parsed: ClusterTimeline = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, timeline);
}

#[test]
fn fractional_timestamps_read_back_unchanged() {
    let timeline = ClusterTimeline::builder()
        .creation_date_time(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        .end_date_time(Instant::from_secs_and_nanos(1576540158, 1_000_000))
        .build();
    let json = serde_json::to_string(&timeline).unwrap();
    assert_eq!(
        json,
        r#"{"CreationDateTime":1576540098.52,"EndDateTime":1576540158.001}"#
    );
    let parsed: ClusterTimeline = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, timeline);
    assert_eq!(
        parsed.creation_date_time().map(|t| t.epoch_subsecond_nanos()),
        Some(520_000_000)
    );
}

#[test]
fn enums_serialize_as_tokens() {
    assert_eq!(serde_json::to_string(&MarketType::OnDemand).unwrap(), "\"ON_DEMAND\"");
    let unknown: MarketType = serde_json::from_str("\"RESERVED\"").unwrap();
    assert!(matches!(&unknown, MarketType::Unknown(value) if value.as_str() == "RESERVED"));
    assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"RESERVED\"");
}
