/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::model::ModelError;
use crate::naming::to_snake_case;
use crate::symbol::SymbolProvider;
use crate::writer::RustWriter;

/// Renders one marker type per operation, pointing at the builder of its input.
pub fn render_operations(symbols: &SymbolProvider<'_>) -> Result<String, ModelError> {
    let mut writer = RustWriter::new();
    for operation in symbols.model().operations() {
        let name = operation.shape.name();
        let builder = format!(
            "crate::input::{}::Builder",
            to_snake_case(operation.input.name())
        );
        writer.docs(operation.shape.traits.documentation.as_deref());
        writer.attribute_list(
            "derive",
            &["std::default::Default", "std::clone::Clone", "std::fmt::Debug"],
        );
        writer.open_block(format!("pub struct {}", name));
        writer.line("_private: (),");
        writer.close_block();
        writer.open_block(format!("impl {}", name));
        writer.line(format!(
            "/// Creates a new builder-style object to manufacture {}",
            symbols.shape_link(&operation.input)?
        ));
        writer.open_fn("pub fn builder", &[], Some(builder.as_str()));
        writer.line(format!("{}::default()", builder));
        writer.close_block();
        writer.line(format!("/// Creates a new `{}` operation.", name));
        writer.open_fn("pub fn new", &[], Some("Self"));
        writer.line("Self { _private: () }");
        writer.close_block();
        writer.close_block();
        writer.blank();
    }
    Ok(writer.finish())
}
