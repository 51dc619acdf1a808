/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::model::{Model, ShapeKind};
use crate::naming::clean_doc;
use crate::writer::RustWriter;

/// Renders the crate root: service docs, re-exports, modules and version constants.
pub fn render_lib(model: &Model) -> String {
    let service = model.service();
    let mut writer = RustWriter::new();
    if let Some(title) = &service.traits.title {
        writer.line(format!("//! **{}**", title));
        writer.line("//!");
    }
    if let Some(doc) = &service.traits.documentation {
        writer.line(format!("//! {}", clean_doc(doc)));
        writer.line("//!");
    }
    writer.line(
        "//! Value types for every request, response, nested structure, enumeration and modeled",
    );
    writer.line("//! error of the service, generated from `model/emr.json`.");
    writer.blank();
    writer.line("pub use smithy_types::DuplicateKeyError;");
    writer.line("pub use smithy_types::Instant;");
    writer.blank();
    for module in ["error", "input", "model", "operation", "output"] {
        writer.line(format!("pub mod {};", module));
    }
    writer.blank();
    writer.line("/// Crate version number.");
    writer.line("pub static PKG_VERSION: &str = env!(\"CARGO_PKG_VERSION\");");
    writer.line("/// Version of the service API the types were generated from.");
    let version = match &service.kind {
        ShapeKind::Service { version, .. } => version.as_str(),
        _ => "",
    };
    writer.line(format!("pub static API_VERSION: &str = \"{}\";", version));
    writer.finish()
}
