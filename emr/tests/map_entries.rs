/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use emr::model::{Application, Configuration, HadoopStepConfig};
use emr::DuplicateKeyError;
use std::collections::HashMap;

#[test]
fn adding_a_duplicate_key_fails() {
    let mut app = Application::default();
    app.add_additional_info_entry("vendor", "acme").unwrap();
    let err = app
        .add_additional_info_entry("vendor", "other")
        .expect_err("key is already present");
    assert_eq!(err, DuplicateKeyError::new("vendor"));
    assert_eq!(err.to_string(), "duplicate key: vendor");
    assert_eq!(
        app.additional_info().unwrap().get("vendor").map(String::as_str),
        Some("acme")
    );
}

#[test]
fn clear_resets_to_none_and_allows_reinsertion() {
    let mut app = Application::default();
    app.add_additional_info_entry("k", "1").unwrap();
    assert!(app.add_additional_info_entry("k", "2").is_err());

    app.clear_additional_info_entries();
    assert_eq!(app.additional_info(), None);

    app.add_additional_info_entry("k", "2").unwrap();
    assert_eq!(app.additional_info().unwrap().len(), 1);
    assert_eq!(app.additional_info().unwrap()["k"], "2");
}

#[test]
fn entries_chain() -> Result<(), DuplicateKeyError> {
    let mut config = Configuration::builder().classification("spark-defaults").build();
    config
        .add_properties_entry("spark.executor.memory", "4g")?
        .add_properties_entry("spark.executor.cores", "2")?;
    assert_eq!(config.properties().unwrap().len(), 2);
    Ok(())
}

#[test]
fn builder_map_setter_rejects_duplicates() {
    let builder = HadoopStepConfig::builder()
        .jar("s3://bucket/job.jar")
        .properties("a", "1")
        .unwrap();
    assert_eq!(
        builder.clone().properties("a", "2").unwrap_err(),
        DuplicateKeyError::new("a")
    );
    let step = builder.properties("b", "2").unwrap().build();
    let mut expected = HashMap::new();
    expected.insert("a".to_string(), "1".to_string());
    expected.insert("b".to_string(), "2".to_string());
    assert_eq!(step.properties(), Some(&expected));
}

#[test]
fn wholesale_replacement_bypasses_duplicate_check() {
    let mut info = HashMap::new();
    info.insert("k".to_string(), "replaced".to_string());
    let app = Application::builder()
        .additional_info("k", "original")
        .unwrap()
        .set_additional_info(Some(info.clone()))
        .build();
    assert_eq!(app.additional_info(), Some(&info));
}

#[test]
fn maps_compare_by_entries() {
    let mut forward = Application::default();
    forward.add_additional_info_entry("a", "1").unwrap();
    forward.add_additional_info_entry("b", "2").unwrap();
    let mut backward = Application::default();
    backward.add_additional_info_entry("b", "2").unwrap();
    backward.add_additional_info_entry("a", "1").unwrap();
    assert_eq!(forward, backward);
}
