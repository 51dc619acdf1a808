/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::model::{EnumDefinition, Shape};
use crate::naming::variant_name;
use crate::writer::RustWriter;

const DERIVES: &[&str] = &[
    "std::clone::Clone",
    "std::cmp::Eq",
    "std::cmp::Ord",
    "std::cmp::PartialEq",
    "std::cmp::PartialOrd",
    "std::fmt::Debug",
    "std::hash::Hash",
];

/// Name of the opaque value carried by the `Unknown` variant of every enum.
pub const UNKNOWN_VALUE: &str = "UnknownVariantValue";

/// Renders the opaque value behind `Unknown` variants.
///
/// Its field is crate-private, so converting from a string is the only way to build an
/// `Unknown` and a listed token can never end up in one.
pub fn render_unknown_variant_value(writer: &mut RustWriter) {
    writer.line(
        "/// Opaque struct used as inner data for the `Unknown` variant of the enums in this crate.",
    );
    writer.line("///");
    writer.line(
        "/// It is only created when a string that matches no listed value is converted into an",
    );
    writer.line("/// enum, so every listed value has exactly one representation.");
    writer.line("#[non_exhaustive]");
    writer.attribute_list("derive", DERIVES);
    writer.line(format!("pub struct {}(pub(crate) std::string::String);", UNKNOWN_VALUE));
    writer.open_block(format!("impl {}", UNKNOWN_VALUE));
    writer.line("/// Returns the unrecognized value.");
    writer.open_block("pub fn as_str(&self) -> &str");
    writer.line("&self.0");
    writer.close_block();
    writer.close_block();
    writer.open_block(format!("impl std::fmt::Display for {}", UNKNOWN_VALUE));
    writer.open_block("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result");
    writer.line("f.write_str(&self.0)");
    writer.close_block();
    writer.close_block();
    writer.blank();
}

/// Renders a string shape with the enum trait as an open Rust enum.
///
/// Tokens the model does not list are kept in `Unknown` so they survive a round trip.
pub fn render_enum(writer: &mut RustWriter, shape: &Shape, values: &[EnumDefinition]) {
    let name = shape.name();
    let variants: Vec<String> = values.iter().map(|v| variant_name(&v.value)).collect();

    writer.docs(shape.traits.documentation.as_deref());
    writer.line("#[non_exhaustive]");
    writer.attribute_list("derive", DERIVES);
    writer.open_block(format!("pub enum {}", name));
    for (value, variant) in values.iter().zip(&variants) {
        match &value.documentation {
            Some(doc) => writer.docs(Some(doc)),
            None => writer.line("#[allow(missing_docs)] // documentation missing in model"),
        }
        writer.line(format!("{},", variant));
    }
    writer.line(
        "/// Unknown contains new variants that have been added since this code was generated.",
    );
    writer.line(format!("Unknown(crate::model::{}),", UNKNOWN_VALUE));
    writer.close_block();

    writer.open_block(format!("impl std::convert::From<&str> for {}", name));
    writer.open_block("fn from(s: &str) -> Self");
    writer.open_block("match s");
    for (value, variant) in values.iter().zip(&variants) {
        writer.line(format!("\"{}\" => {}::{},", value.value, name, variant));
    }
    writer.wrapped_call(
        &format!("other => {}::Unknown", name),
        &format!("crate::model::{}(other.to_owned())", UNKNOWN_VALUE),
        ",",
    );
    writer.close_block();
    writer.close_block();
    writer.close_block();

    writer.open_block(format!("impl std::str::FromStr for {}", name));
    writer.line("type Err = std::convert::Infallible;");
    writer.blank();
    writer.open_block("fn from_str(s: &str) -> std::result::Result<Self, Self::Err>");
    writer.line(format!("Ok({}::from(s))", name));
    writer.close_block();
    writer.close_block();

    writer.open_block(format!("impl {}", name));
    writer.line("/// Returns the `&str` value of the enum member.");
    writer.open_block("pub fn as_str(&self) -> &str");
    writer.open_block("match self");
    for (value, variant) in values.iter().zip(&variants) {
        writer.line(format!("{}::{} => \"{}\",", name, variant, value.value));
    }
    writer.line(format!("{}::Unknown(value) => value.as_str(),", name));
    writer.close_block();
    writer.close_block();
    writer.line("/// Returns all the `&str` values of the enum members.");
    writer.open_block("pub fn values() -> &'static [&'static str]");
    let tokens: Vec<String> = values.iter().map(|v| format!("\"{}\"", v.value)).collect();
    writer.slice_literal(&tokens);
    writer.close_block();
    writer.close_block();

    writer.open_block(format!("impl AsRef<str> for {}", name));
    writer.open_block("fn as_ref(&self) -> &str");
    writer.line("self.as_str()");
    writer.close_block();
    writer.close_block();

    writer.open_block(format!("impl std::fmt::Display for {}", name));
    writer.open_block("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result");
    writer.line("f.write_str(self.as_str())");
    writer.close_block();
    writer.close_block();

    writer.line("#[cfg(feature = \"serde-serialize\")]");
    writer.open_block(format!("impl serde::Serialize for {}", name));
    writer.line("fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>");
    writer.line("where");
    writer.line("    S: serde::Serializer,");
    writer.line("{");
    writer.indent();
    writer.line("serializer.serialize_str(self.as_str())");
    writer.close_block();
    writer.close_block();

    writer.line("#[cfg(feature = \"serde-deserialize\")]");
    writer.open_block(format!("impl<'de> serde::Deserialize<'de> for {}", name));
    writer.line("fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>");
    writer.line("where");
    writer.line("    D: serde::Deserializer<'de>,");
    writer.line("{");
    writer.indent();
    writer.line(
        "let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;",
    );
    writer.line("Ok(Self::from(data.as_str()))");
    writer.close_block();
    writer.close_block();
    writer.blank();
}
