/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use emr_codegen::emit::{stale_files, write_files};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn generated_sources_match_expected() {
    let files = emr_codegen::generate(&fixture("jobs.json")).unwrap();
    assert_eq!(files.len(), 6);
    for (name, generated) in &files {
        let expected = fs::read_to_string(fixture("jobs-expected").join(name)).unwrap();
        assert_eq!(&expected, generated, "{}", name);
    }
}

#[test]
fn check_passes_after_write_and_fails_after_edit() {
    let files = emr_codegen::generate(&fixture("jobs.json")).unwrap();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("src");

    assert_eq!(stale_files(&output, &files).unwrap().len(), files.len());
    write_files(&output, &files).unwrap();
    assert!(stale_files(&output, &files).unwrap().is_empty());

    let model = output.join("model.rs");
    let edited = fs::read_to_string(&model).unwrap().replace("HIGH", "URGENT");
    fs::write(&model, edited).unwrap();
    assert_eq!(stale_files(&output, &files).unwrap(), vec!["model.rs".to_owned()]);
}

#[test]
fn missing_model_reports_path() {
    let err = emr_codegen::generate(Path::new("does/not/exist.json")).unwrap_err();
    assert!(format!("{}", err).contains("does/not/exist.json"), "{}", err);
}

#[test]
fn unknown_targets_are_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r##"{
            "smithy": "1.0",
            "shapes": {
                "example#Svc": {
                    "type": "service",
                    "version": "1",
                    "operations": [{"target": "example#Missing"}]
                }
            }
        }"##,
    )
    .unwrap();
    let err = emr_codegen::generate(&path).unwrap_err();
    assert_eq!(
        format!("{:#}", err),
        format!(
            "Failed to load model from {:?}: shape example#Missing is not defined in the model",
            path
        )
    );
}
