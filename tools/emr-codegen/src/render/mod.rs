/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Rendering of each generated source file.

mod enums;
mod lib_rs;
mod operation;
mod structure;

use crate::model::{Model, ModelError, Shape};
use crate::naming::{field_name, variant_name};
use crate::symbol::SymbolProvider;
use crate::writer::RustWriter;
use std::collections::{BTreeMap, HashMap};

/// Renders every file of the generated crate, keyed by its path relative to `src/`.
pub fn render_crate(model: &Model) -> Result<BTreeMap<&'static str, String>, ModelError> {
    let symbols = SymbolProvider::new(model);
    let inputs: Vec<&Shape> = model.operations().iter().map(|op| &op.input).collect();
    let outputs: Vec<&Shape> = model.operations().iter().map(|op| &op.output).collect();

    let mut files = BTreeMap::new();
    files.insert("lib.rs", lib_rs::render_lib(model));
    files.insert("error.rs", render_shapes(&symbols, &model.errors()?)?);
    files.insert("input.rs", render_shapes(&symbols, &inputs)?);
    files.insert("model.rs", render_shapes(&symbols, &model.model_shapes()?)?);
    files.insert("operation.rs", operation::render_operations(&symbols)?);
    files.insert("output.rs", render_shapes(&symbols, &outputs)?);
    Ok(files)
}

fn render_shapes(symbols: &SymbolProvider<'_>, shapes: &[&Shape]) -> Result<String, ModelError> {
    let mut writer = RustWriter::new();
    if shapes.iter().any(|shape| shape.enum_values().is_some()) {
        if let Some(shape) = shapes.iter().find(|s| s.name() == enums::UNKNOWN_VALUE) {
            return Err(ModelError::NameConflict {
                shape: "model".to_owned(),
                first: shape.id.clone(),
                second: "the value of unknown enum variants".to_owned(),
                generated: enums::UNKNOWN_VALUE.to_owned(),
            });
        }
        enums::render_unknown_variant_value(&mut writer);
    }
    for shape in shapes {
        check_generated_names(shape)?;
        tracing::debug!(shape = %shape.id, "rendering shape");
        match shape.enum_values() {
            Some(values) => enums::render_enum(&mut writer, shape, values),
            None => structure::render_structure(&mut writer, symbols, shape)?,
        }
    }
    Ok(writer.finish())
}

/// Fails when two members of a structure, or two values of an enum, map to the same identifier.
///
/// Enum values may not generate `Unknown`, which every enum reserves for unlisted values.
fn check_generated_names(shape: &Shape) -> Result<(), ModelError> {
    let names: Vec<(&str, String)> = match shape.enum_values() {
        Some(values) => values
            .iter()
            .map(|v| (v.value.as_str(), variant_name(&v.value)))
            .collect(),
        None => shape
            .members()
            .iter()
            .map(|m| (m.name.as_str(), field_name(&m.name)))
            .collect(),
    };
    let mut seen: HashMap<&str, &str> = HashMap::new();
    if shape.enum_values().is_some() {
        seen.insert("Unknown", "Unknown");
    }
    for (source, generated) in &names {
        if let Some(first) = seen.insert(generated.as_str(), source) {
            return Err(ModelError::NameConflict {
                shape: shape.id.clone(),
                first: first.to_owned(),
                second: (*source).to_owned(),
                generated: generated.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::render_crate;
    use crate::model::{Model, ModelError};

    fn model_with(extra_shapes: &str, input_members: &str) -> String {
        format!(
            r##"{{
                "smithy": "1.0",
                "shapes": {{
                    "example#Svc": {{
                        "type": "service",
                        "version": "2020-01-01",
                        "operations": [{{"target": "example#Run"}}]
                    }},
                    "example#Run": {{
                        "type": "operation",
                        "input": {{"target": "example#RunInput"}}
                    }},
                    "example#RunInput": {{
                        "type": "structure",
                        "members": {{ {} }}
                    }}
                    {}
                }}
            }}"##,
            input_members, extra_shapes
        )
    }

    #[test]
    fn conflicting_member_names_are_rejected() {
        let json = model_with(
            "",
            r#""ClusterId": {"target": "smithy.api#String"},
               "ClusterID": {"target": "smithy.api#String"}"#,
        );
        let model = Model::from_json(&json).unwrap();
        let err = render_crate(&model).unwrap_err();
        assert!(
            matches!(&err, ModelError::NameConflict { generated, .. } if generated == "cluster_id"),
            "{}",
            err
        );
    }

    #[test]
    fn conflicting_enum_values_are_rejected() {
        let json = model_with(
            r#", "example#Mode": {
                "type": "string",
                "traits": {"smithy.api#enum": [{"value": "ON_DEMAND"}, {"value": "OnDemand"}]}
            }"#,
            r#""Mode": {"target": "example#Mode"}"#,
        );
        let model = Model::from_json(&json).unwrap();
        let err = render_crate(&model).unwrap_err();
        assert_eq!(
            err.to_string(),
            "in example#Mode, `ON_DEMAND` and `OnDemand` both generate `OnDemand`"
        );
    }

    #[test]
    fn enum_values_may_not_take_the_unknown_variant() {
        let json = model_with(
            r#", "example#Mode": {
                "type": "string",
                "traits": {"smithy.api#enum": [{"value": "ACTIVE"}, {"value": "UNKNOWN"}]}
            }"#,
            r#""Mode": {"target": "example#Mode"}"#,
        );
        let model = Model::from_json(&json).unwrap();
        let err = render_crate(&model).unwrap_err();
        assert_eq!(
            err.to_string(),
            "in example#Mode, `Unknown` and `UNKNOWN` both generate `Unknown`"
        );
    }

    #[test]
    fn shapes_may_not_take_the_unknown_value_name() {
        let json = model_with(
            r#", "example#Mode": {
                "type": "string",
                "traits": {"smithy.api#enum": [{"value": "ACTIVE"}]}
            },
            "example#UnknownVariantValue": {
                "type": "structure",
                "members": {}
            }"#,
            r#""Mode": {"target": "example#Mode"},
               "Other": {"target": "example#UnknownVariantValue"}"#,
        );
        let model = Model::from_json(&json).unwrap();
        let err = render_crate(&model).unwrap_err();
        assert!(
            matches!(&err, ModelError::NameConflict { generated, .. } if generated == "UnknownVariantValue"),
            "{}",
            err
        );
    }

    #[test]
    fn unknown_enum_values_are_opaque() {
        let json = model_with(
            r#", "example#Mode": {
                "type": "string",
                "traits": {"smithy.api#enum": [{"value": "ACTIVE"}]}
            }"#,
            r#""Mode": {"target": "example#Mode"}"#,
        );
        let model = Model::from_json(&json).unwrap();
        let files = render_crate(&model).unwrap();
        let model_rs = &files["model.rs"];
        assert!(model_rs.contains("pub struct UnknownVariantValue(pub(crate) std::string::String);"));
        assert!(model_rs.contains("Unknown(crate::model::UnknownVariantValue),"));
        assert!(model_rs
            .contains("other => Mode::Unknown(crate::model::UnknownVariantValue(other.to_owned())),"));
        assert!(!files["input.rs"].contains("UnknownVariantValue"));
    }

    #[test]
    fn every_file_is_rendered() {
        let model = Model::from_json(&model_with("", "")).unwrap();
        let files = render_crate(&model).unwrap();
        let names: Vec<_> = files.keys().copied().collect();
        assert_eq!(
            names,
            vec!["error.rs", "input.rs", "lib.rs", "model.rs", "operation.rs", "output.rs"]
        );
        assert!(files["output.rs"].contains("pub struct RunOutput {}"));
        assert!(files["lib.rs"].contains("pub static API_VERSION: &str = \"2020-01-01\";"));
    }
}
