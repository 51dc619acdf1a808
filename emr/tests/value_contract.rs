/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use emr::input::RunJobFlowInput;
use emr::model::{
    Application, BootstrapActionConfig, Cluster, ClusterState, ClusterStatus, ClusterTimeline,
    InstanceGroupConfig, InstanceRoleType, JobFlowInstancesConfig, MarketType,
    ScriptBootstrapActionConfig, Tag,
};
use emr::Instant;

#[test]
fn unset_members_are_none() {
    let app = Application::default();
    assert_eq!(app.name(), None);
    assert_eq!(app.args(), None);
    assert_eq!(app.additional_info(), None);
    assert_eq!(app, Application::builder().build());
}

#[test]
fn empty_values_are_distinct_from_absent() {
    let empty = Application::builder()
        .name("")
        .set_args(Some(vec![]))
        .build();
    assert_eq!(empty.name(), Some(""));
    assert_eq!(empty.args(), Some(&[][..]));
    assert_ne!(empty, Application::default());
}

#[test]
fn clearing_a_member_round_trips_none() {
    let mut cluster = Cluster::builder()
        .name("analytics")
        .visible_to_all_users(true)
        .normalized_instance_hours(8)
        .build();
    cluster.name = None;
    cluster.visible_to_all_users = None;
    cluster.normalized_instance_hours = None;
    assert_eq!(cluster.name(), None);
    assert_eq!(cluster.visible_to_all_users(), None);
    assert_eq!(cluster.normalized_instance_hours(), None);
    assert_eq!(cluster, Cluster::default());

    let builder = Application::builder().version("3.1.2").set_version(None);
    assert_eq!(builder.get_version(), &None);
}

#[test]
fn no_arg_construction_then_mutation_matches_builder() {
    let mut tag = Tag::default();
    tag.key = Some("team".to_string());
    tag.value = Some("data".to_string());
    assert_eq!(tag, Tag::builder().key("team").value("data").build());
}

#[test]
fn list_setter_appends() {
    let app = Application::builder().args("a").args("b").build();
    assert_eq!(app.args(), Some(&["a".to_string(), "b".to_string()][..]));
}

#[test]
fn list_set_replaces_wholesale() {
    let app = Application::builder()
        .args("a")
        .set_args(Some(vec!["x".to_string()]))
        .args("y")
        .build();
    assert_eq!(app.args().unwrap(), &["x".to_string(), "y".to_string()]);

    let cleared = Application::builder().args("a").set_args(None).build();
    assert_eq!(cleared.args(), None);
}

#[test]
fn nested_shapes_compose() {
    let config = JobFlowInstancesConfig::builder()
        .instance_groups(
            InstanceGroupConfig::builder()
                .name("primary")
                .instance_role(InstanceRoleType::Master)
                .market(MarketType::OnDemand)
                .instance_type("m5.xlarge")
                .instance_count(1)
                .build(),
        )
        .instance_groups(
            InstanceGroupConfig::builder()
                .name("workers")
                .instance_role("CORE")
                .market("SPOT")
                .bid_price("0.10")
                .instance_type("m5.xlarge")
                .instance_count(4)
                .build(),
        )
        .keep_job_flow_alive_when_no_steps(true)
        .build();

    let request = RunJobFlowInput::builder()
        .name("nightly")
        .release_label("emr-5.30.0")
        .instances(config.clone())
        .applications(Application::builder().name("Spark").build())
        .bootstrap_actions(
            BootstrapActionConfig::builder()
                .name("install deps")
                .script_bootstrap_action(
                    ScriptBootstrapActionConfig::builder()
                        .path("s3://bucket/bootstrap.sh")
                        .args("--fast")
                        .build(),
                )
                .build(),
        )
        .build();

    let groups = request.instances().unwrap().instance_groups().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].market(), Some(&MarketType::Spot));
    assert_eq!(groups[1].instance_role(), Some(&InstanceRoleType::Core));
    assert_eq!(groups[0].bid_price(), None);
    assert_eq!(request.instances(), Some(&config));
    assert_eq!(
        request.bootstrap_actions().unwrap()[0]
            .script_bootstrap_action()
            .and_then(|action| action.path()),
        Some("s3://bucket/bootstrap.sh")
    );
}

#[test]
fn clones_are_equal_values() {
    let cluster = Cluster::builder()
        .id("j-2AXXXXXXGAPLF")
        .status(
            ClusterStatus::builder()
                .state(ClusterState::Waiting)
                .timeline(
                    ClusterTimeline::builder()
                        .creation_date_time(Instant::from_epoch_seconds(1576540098))
                        .build(),
                )
                .build(),
        )
        .build();
    let copy = cluster.clone();
    assert_eq!(copy, cluster);
    assert!(!std::ptr::eq(&copy, &cluster));
    assert_eq!(
        copy.status()
            .and_then(|status| status.timeline())
            .and_then(|timeline| timeline.creation_date_time()),
        Some(Instant::from_epoch_seconds(1576540098))
    );
}

#[test]
fn members_are_not_validated() {
    let group = InstanceGroupConfig::builder()
        .instance_count(-3)
        .instance_type("")
        .market("NOT_A_MARKET")
        .build();
    assert_eq!(group.instance_count(), Some(-3));
    assert_eq!(group.market(), Some(&MarketType::from("NOT_A_MARKET")));
    assert_eq!(group.market().map(MarketType::as_str), Some("NOT_A_MARKET"));
}
