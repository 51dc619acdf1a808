/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Generates the value types of the `emr` crate from a Smithy JSON AST model.

pub mod emit;
pub mod model;
pub mod naming;
pub mod render;
pub mod symbol;
pub mod writer;

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Loads the model at `path` and renders the generated sources, keyed by file name.
pub fn generate(path: &Path) -> Result<BTreeMap<&'static str, String>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file at {:?}", path))?;
    let model = model::Model::from_json(&json)
        .with_context(|| format!("Failed to load model from {:?}", path))?;
    tracing::info!(
        service = %model.service().id,
        operations = model.operations().len(),
        "loaded model"
    );
    let files = render::render_crate(&model).context("Failed to generate code")?;
    Ok(files)
}
