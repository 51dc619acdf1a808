/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use emr::error::{InternalServerError, InvalidRequestException};
use emr::model::{
    Application, CloudWatchAlarmDefinition, ClusterTimeline, ComparisonOperator, ComputeLimits,
    ComputeLimitsUnitType, Configuration, Statistic, Tag,
};
use emr::output::AddTagsOutput;
use emr::Instant;

#[test]
fn application_renders_set_members_only() {
    let app = Application::builder()
        .name("Hive")
        .version("3.1.2")
        .args("-x")
        .args("-y")
        .build();
    assert_eq!(app.to_string(), "{Name: Hive, Version: 3.1.2, Args: [-x, -y]}");
}

#[test]
fn empty_shapes_render_as_braces() {
    assert_eq!(Tag::default().to_string(), "{}");
    assert_eq!(AddTagsOutput::builder().build().to_string(), "{}");
}

#[test]
fn scalars_and_enums_render_by_value() {
    let limits = ComputeLimits::builder()
        .unit_type(ComputeLimitsUnitType::Vcpu)
        .minimum_capacity_units(2)
        .maximum_capacity_units(10)
        .build();
    assert_eq!(
        limits.to_string(),
        "{UnitType: VCPU, MinimumCapacityUnits: 2, MaximumCapacityUnits: 10}"
    );

    let alarm = CloudWatchAlarmDefinition::builder()
        .comparison_operator(ComparisonOperator::GreaterThan)
        .metric_name("YARNMemoryAvailablePercentage")
        .statistic(Statistic::Average)
        .threshold(12.5)
        .build();
    assert_eq!(
        alarm.to_string(),
        "{ComparisonOperator: GREATER_THAN, MetricName: YARNMemoryAvailablePercentage, Statistic: AVERAGE, Threshold: 12.5}"
    );
}

#[test]
fn timestamps_render_as_rfc3339() {
    let timeline = ClusterTimeline::builder()
        .creation_date_time(Instant::from_epoch_seconds(1576540098))
        .end_date_time(Instant::from_secs_and_nanos(1576540158, 250_000_000))
        .build();
    assert_eq!(
        timeline.to_string(),
        "{CreationDateTime: 2019-12-16T23:48:18Z, EndDateTime: 2019-12-16T23:49:18.25Z}"
    );
}

#[test]
fn nested_shapes_and_maps_render_recursively() {
    let inner = Configuration::builder()
        .classification("export")
        .properties("JAVA_HOME", "/usr/lib/jvm")
        .unwrap()
        .build();
    let outer = Configuration::builder()
        .classification("hadoop-env")
        .configurations(inner)
        .properties("b", "2")
        .unwrap()
        .properties("a", "1")
        .unwrap()
        .build();
    assert_eq!(
        outer.to_string(),
        "{Classification: hadoop-env, Configurations: [{Classification: export, Properties: {JAVA_HOME=/usr/lib/jvm}}], Properties: {a=1, b=2}}"
    );
}

#[test]
fn errors_render_code_and_message() {
    let err = InvalidRequestException::builder()
        .error_code("INVALID_STATE")
        .message("cluster is terminating")
        .build();
    assert_eq!(
        err.to_string(),
        "InvalidRequestException [INVALID_STATE]: cluster is terminating"
    );
    assert_eq!(
        InvalidRequestException::builder().build().to_string(),
        "InvalidRequestException"
    );
    assert_eq!(InternalServerError::builder().build().to_string(), "InternalServerError");

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(std::error::Error::source(boxed.as_ref()).is_none());
}
