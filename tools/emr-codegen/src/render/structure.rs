/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::model::{Member, ModelError, Module, Shape};
use crate::naming::{field_name, serde_pascal_case, to_snake_case};
use crate::symbol::{MemberKind, SymbolProvider};
use crate::writer::RustWriter;

const ANY_SERDE: &str = "any(feature = \"serde-serialize\", feature = \"serde-deserialize\")";
const SERIALIZE: &str = "feature = \"serde-serialize\"";
const DESERIALIZE: &str = "feature = \"serde-deserialize\"";

struct MemberSymbol<'a> {
    member: &'a Member,
    /// Field and method name, escaped if it is a keyword
    field: String,
    /// Unescaped snake_case name, used inside other identifiers
    plain: String,
    kind: MemberKind,
    rust_type: String,
}

impl<'a> MemberSymbol<'a> {
    fn new(symbols: &SymbolProvider<'_>, member: &'a Member) -> Result<Self, ModelError> {
        Ok(MemberSymbol {
            member,
            field: field_name(&member.name),
            plain: to_snake_case(&member.name),
            kind: symbols.kind(&member.target)?,
            rust_type: symbols.rust_type(&member.target)?,
        })
    }

    fn docs(&self) -> Option<&str> {
        self.member.documentation.as_deref()
    }
}

/// Renders a structure with its accessors, `Debug`, `Display`, `Hash` and builder.
pub fn render_structure(
    writer: &mut RustWriter,
    symbols: &SymbolProvider<'_>,
    shape: &Shape,
) -> Result<(), ModelError> {
    let name = shape.name();
    let module = symbols
        .model()
        .module_of(shape)
        .ok_or_else(|| ModelError::UnknownShape(shape.id.clone()))?;
    let members = shape
        .members()
        .iter()
        .map(|member| MemberSymbol::new(symbols, member))
        .collect::<Result<Vec<_>, _>>()?;
    let manual_hash = members
        .iter()
        .any(|m| matches!(m.kind, MemberKind::Map | MemberKind::Float));

    let mut derives = vec!["std::clone::Clone", "std::cmp::PartialEq"];
    if !symbols.contains_float(shape)? {
        derives.push("std::cmp::Eq");
    }
    derives.push("std::default::Default");
    if !manual_hash {
        derives.push("std::hash::Hash");
    }

    writer.docs(shape.traits.documentation.as_deref());
    writer.line("#[non_exhaustive]");
    writer.attribute_list("derive", &derives);
    writer.cfg_attr(SERIALIZE, "derive(serde::Serialize)");
    writer.cfg_attr(DESERIALIZE, "derive(serde::Deserialize)");
    writer.cfg_attr(ANY_SERDE, "serde(rename_all = \"PascalCase\")");
    if members.is_empty() {
        writer.line(format!("pub struct {} {{}}", name));
    } else {
        writer.open_block(format!("pub struct {}", name));
        for m in &members {
            writer.docs(m.docs());
            if serde_pascal_case(&m.plain) != m.member.name {
                writer.cfg_attr(ANY_SERDE, &format!("serde(rename = \"{}\")", m.member.name));
            }
            writer.cfg_attr(
                SERIALIZE,
                "serde(skip_serializing_if = \"std::option::Option::is_none\")",
            );
            writer.line(format!(
                "pub {}: std::option::Option<{}>,",
                m.field, m.rust_type
            ));
        }
        writer.close_block();
        render_accessors(writer, symbols, name, &members)?;
    }

    render_debug(writer, name, &members);
    render_display(writer, shape, &members);
    if manual_hash {
        render_hash(writer, name, &members);
    }
    render_builder(writer, symbols, shape, module, &members)?;

    let builder_module = to_snake_case(name);
    writer.open_block(format!("impl {}", name));
    writer.line(format!(
        "/// Creates a new builder-style object to manufacture {}",
        symbols.shape_link(shape)?
    ));
    let builder_path = format!("crate::{}::{}::Builder", module.as_str(), builder_module);
    writer.open_fn("pub fn builder", &[], Some(builder_path.as_str()));
    writer.line(format!("{}::default()", builder_path));
    writer.close_block();
    writer.close_block();
    writer.blank();
    Ok(())
}

fn render_accessors(
    writer: &mut RustWriter,
    symbols: &SymbolProvider<'_>,
    name: &str,
    members: &[MemberSymbol<'_>],
) -> Result<(), ModelError> {
    writer.open_block(format!("impl {}", name));
    for m in members {
        let (ret, body) = match m.kind {
            MemberKind::String => (
                "std::option::Option<&str>".to_owned(),
                format!("self.{}.as_deref()", m.field),
            ),
            MemberKind::List => (
                format!(
                    "std::option::Option<&[{}]>",
                    symbols.list_member_type(&m.member.target)?
                ),
                format!("self.{}.as_deref()", m.field),
            ),
            MemberKind::Map | MemberKind::Structure | MemberKind::Enum => (
                format!("std::option::Option<&{}>", m.rust_type),
                format!("self.{}.as_ref()", m.field),
            ),
            MemberKind::Timestamp | MemberKind::Float | MemberKind::Primitive => (
                format!("std::option::Option<{}>", m.rust_type),
                format!("self.{}", m.field),
            ),
        };
        writer.docs(m.docs());
        writer.open_fn(&format!("pub fn {}", m.field), &["&self"], Some(ret.as_str()));
        writer.line(body);
        writer.close_block();
    }
    for m in members.iter().filter(|m| m.kind == MemberKind::Map) {
        let (key, value) = symbols.map_types(&m.member.target)?;
        writer.line(format!(
            "/// Adds a key-value pair to `{}`, failing if the key is already present.",
            m.plain
        ));
        writer.line("///");
        writer.line("/// The map is created on first use. An existing entry is never overwritten.");
        let key = format!("k: impl Into<{}>", key);
        let value = format!("v: impl Into<{}>", value);
        writer.open_fn(
            &format!("pub fn add_{}_entry", m.plain),
            &["&mut self", key.as_str(), value.as_str()],
            Some("std::result::Result<&mut Self, smithy_types::DuplicateKeyError>"),
        );
        writer.line(format!(
            "smithy_types::map::insert_unique(&mut self.{}, k.into(), v.into())?;",
            m.field
        ));
        writer.line("Ok(self)");
        writer.close_block();
        writer.line(format!(
            "/// Removes every entry of `{}`, leaving it unset.",
            m.plain
        ));
        writer.open_fn(
            &format!("pub fn clear_{}_entries", m.plain),
            &["&mut self"],
            Some("&mut Self"),
        );
        writer.line(format!("self.{} = None;", m.field));
        writer.line("self");
        writer.close_block();
    }
    writer.close_block();
    Ok(())
}

fn render_debug(writer: &mut RustWriter, name: &str, members: &[MemberSymbol<'_>]) {
    writer.open_block(format!("impl std::fmt::Debug for {}", name));
    writer.open_block("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result");
    writer.line(format!("let mut formatter = f.debug_struct(\"{}\");", name));
    for m in members {
        writer.line(format!("formatter.field(\"{}\", &self.{});", m.plain, m.field));
    }
    writer.line("formatter.finish()");
    writer.close_block();
    writer.close_block();
}

fn render_display(writer: &mut RustWriter, shape: &Shape, members: &[MemberSymbol<'_>]) {
    let name = shape.name();
    writer.open_block(format!("impl std::fmt::Display for {}", name));
    writer.open_block("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result");
    if shape.is_error() {
        render_error_display(writer, name, members);
    } else if members.is_empty() {
        writer.line("smithy_types::display::ShapeDisplay::new(f).finish()");
    } else {
        writer.line("let mut shape = smithy_types::display::ShapeDisplay::new(f);");
        for m in members {
            let method = match m.kind {
                MemberKind::List => "list",
                MemberKind::Map => "map",
                _ => "field",
            };
            writer.line(format!(
                "shape.{}(\"{}\", &self.{});",
                method, m.member.name, m.field
            ));
        }
        writer.line("shape.finish()");
    }
    writer.close_block();
    writer.close_block();
    if shape.is_error() {
        writer.line(format!("impl std::error::Error for {} {{}}", name));
    }
}

/// Errors render as `Name [code]: message`, leaving out whichever parts are unset.
fn render_error_display(writer: &mut RustWriter, name: &str, members: &[MemberSymbol<'_>]) {
    let find = |wire: &str| members.iter().find(|m| m.member.name == wire);
    writer.line(format!("write!(f, \"{}\")?;", name));
    if let Some(code) = find("ErrorCode") {
        writer.open_block(format!("if let Some(code) = &self.{}", code.field));
        writer.line("write!(f, \" [{}]\", code)?;");
        writer.close_block();
    }
    if let Some(message) = find("Message") {
        writer.open_block(format!("if let Some(message) = &self.{}", message.field));
        writer.line("write!(f, \": {}\", message)?;");
        writer.close_block();
    }
    writer.line("Ok(())");
}

fn render_hash(writer: &mut RustWriter, name: &str, members: &[MemberSymbol<'_>]) {
    writer.open_block(format!("impl std::hash::Hash for {}", name));
    writer.open_block("fn hash<H: std::hash::Hasher>(&self, state: &mut H)");
    for m in members {
        writer.line(match m.kind {
            MemberKind::Map => format!("smithy_types::hash::hash_map(&self.{}, state);", m.field),
            MemberKind::Float => format!("smithy_types::hash::hash_f64(&self.{}, state);", m.field),
            _ => format!("std::hash::Hash::hash(&self.{}, state);", m.field),
        });
    }
    writer.close_block();
    writer.close_block();
}

fn render_builder(
    writer: &mut RustWriter,
    symbols: &SymbolProvider<'_>,
    shape: &Shape,
    module: Module,
    members: &[MemberSymbol<'_>],
) -> Result<(), ModelError> {
    let name = shape.name();
    let link = symbols.shape_link(shape)?;
    writer.line(format!("/// See {}", link));
    writer.open_block(format!("pub mod {}", to_snake_case(name)));
    writer.line(format!("/// A builder for {}", link));
    writer.line("#[non_exhaustive]");
    writer.attribute_list(
        "derive",
        &[
            "std::default::Default",
            "std::clone::Clone",
            "std::cmp::PartialEq",
            "std::fmt::Debug",
        ],
    );
    if members.is_empty() {
        writer.line("pub struct Builder {}");
    } else {
        writer.open_block("pub struct Builder");
        for m in members {
            writer.line(format!(
                "pub(crate) {}: std::option::Option<{}>,",
                m.field, m.rust_type
            ));
        }
        writer.close_block();
    }

    writer.open_block("impl Builder");
    for m in members {
        match m.kind {
            MemberKind::List => {
                let element = symbols.list_member_type(&m.member.target)?;
                writer.line(format!("/// Appends an item to `{}`.", m.plain));
                write_override_hint(writer, &m.plain);
                writer.docs(m.docs());
                let param = format!("input: impl Into<{}>", element);
                writer.open_fn(
                    &format!("pub fn {}", m.field),
                    &["mut self", param.as_str()],
                    Some("Self"),
                );
                writer.line(format!("let mut v = self.{}.unwrap_or_default();", m.field));
                writer.line("v.push(input.into());");
                writer.line(format!("self.{} = Some(v);", m.field));
                writer.line("self");
                writer.close_block();
            }
            MemberKind::Map => {
                let (key, value) = symbols.map_types(&m.member.target)?;
                writer.line(format!(
                    "/// Adds a key-value pair to `{}`, failing if the key is already present.",
                    m.plain
                ));
                write_override_hint(writer, &m.plain);
                writer.docs(m.docs());
                let key = format!("k: impl Into<{}>", key);
                let value = format!("v: impl Into<{}>", value);
                writer.open_fn(
                    &format!("pub fn {}", m.field),
                    &["mut self", key.as_str(), value.as_str()],
                    Some("std::result::Result<Self, smithy_types::DuplicateKeyError>"),
                );
                writer.line(format!(
                    "smithy_types::map::insert_unique(&mut self.{}, k.into(), v.into())?;",
                    m.field
                ));
                writer.line("Ok(self)");
                writer.close_block();
            }
            _ => {
                let (param, value) = match m.kind {
                    MemberKind::String | MemberKind::Enum => {
                        (format!("input: impl Into<{}>", m.rust_type), "input.into()")
                    }
                    _ => (format!("input: {}", m.rust_type), "input"),
                };
                writer.docs(m.docs());
                writer.open_fn(
                    &format!("pub fn {}", m.field),
                    &["mut self", param.as_str()],
                    Some("Self"),
                );
                writer.line(format!("self.{} = Some({});", m.field, value));
                writer.line("self");
                writer.close_block();
            }
        }
        let optional = format!("std::option::Option<{}>", m.rust_type);
        let param = format!("input: {}", optional);
        writer.open_fn(
            &format!("pub fn set_{}", m.plain),
            &["mut self", param.as_str()],
            Some("Self"),
        );
        writer.line(format!("self.{} = input;", m.field));
        writer.line("self");
        writer.close_block();
        let ret = format!("&{}", optional);
        writer.open_fn(
            &format!("pub fn get_{}", m.plain),
            &["&self"],
            Some(ret.as_str()),
        );
        writer.line(format!("&self.{}", m.field));
        writer.close_block();
    }

    let path = format!("crate::{}::{}", module.as_str(), name);
    writer.line(format!("/// Consumes the builder and constructs a {}", link));
    writer.open_fn("pub fn build", &["self"], Some(path.as_str()));
    if members.is_empty() {
        writer.line(format!("{} {{}}", path));
    } else {
        writer.open_block(&path);
        for m in members {
            writer.line(format!("{}: self.{},", m.field, m.field));
        }
        writer.close_block();
    }
    writer.close_block();
    writer.close_block();
    writer.close_block();
    Ok(())
}

fn write_override_hint(writer: &mut RustWriter, plain: &str) {
    writer.line("///");
    writer.line(format!(
        "/// To override the contents of this collection use [`set_{}`](Self::set_{}).",
        plain, plain
    ));
    writer.line("///");
}
