/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Mapping of model shapes to Rust types.

use crate::model::{Model, ModelError, Shape, ShapeKind, SimpleType, Target};
use std::collections::HashSet;

/// How a member is stored, accessed and set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    String,
    Enum,
    Structure,
    List,
    Map,
    Timestamp,
    Float,
    /// Integers and booleans
    Primitive,
}

pub struct SymbolProvider<'a> {
    model: &'a Model,
}

impl<'a> SymbolProvider<'a> {
    pub fn new(model: &'a Model) -> Self {
        SymbolProvider { model }
    }

    pub fn model(&self) -> &'a Model {
        self.model
    }

    /// Fully qualified Rust type for a member target.
    pub fn rust_type(&self, target: &str) -> Result<String, ModelError> {
        let shape = match self.model.target(target)? {
            Target::Simple(simple) => return Ok(simple_type(simple).to_owned()),
            Target::Shape(shape) => shape,
        };
        if shape.enum_values().is_some() || shape.is_structure() {
            return self.shape_path(shape);
        }
        Ok(match &shape.kind {
            ShapeKind::Simple(simple) => simple_type(*simple).to_owned(),
            ShapeKind::List { member } => format!("std::vec::Vec<{}>", self.rust_type(member)?),
            ShapeKind::Map { key, value } => format!(
                "std::collections::HashMap<{}, {}>",
                self.rust_type(key)?,
                self.rust_type(value)?
            ),
            _ => return Err(ModelError::UnexpectedType(shape.id.clone(), "member target")),
        })
    }

    /// Path of a generated shape, e.g. `crate::model::Application`.
    pub fn shape_path(&self, shape: &Shape) -> Result<String, ModelError> {
        let module = self
            .model
            .module_of(shape)
            .ok_or_else(|| ModelError::UnknownShape(shape.id.clone()))?;
        Ok(format!("crate::{}::{}", module.as_str(), shape.name()))
    }

    /// Rustdoc link to a generated shape.
    pub fn shape_link(&self, shape: &Shape) -> Result<String, ModelError> {
        Ok(format!("[`{}`]({})", shape.name(), self.shape_path(shape)?))
    }

    pub fn kind(&self, target: &str) -> Result<MemberKind, ModelError> {
        let shape = match self.model.target(target)? {
            Target::Simple(simple) => return Ok(simple_kind(simple)),
            Target::Shape(shape) => shape,
        };
        Ok(match &shape.kind {
            ShapeKind::List { .. } => MemberKind::List,
            ShapeKind::Map { .. } => MemberKind::Map,
            _ if shape.enum_values().is_some() => MemberKind::Enum,
            ShapeKind::Structure { .. } => MemberKind::Structure,
            ShapeKind::Simple(simple) => simple_kind(*simple),
            _ => return Err(ModelError::UnexpectedType(shape.id.clone(), "member target")),
        })
    }

    /// Element type of a list member.
    pub fn list_member_type(&self, target: &str) -> Result<String, ModelError> {
        match &self.model.shape(target)?.kind {
            ShapeKind::List { member } => self.rust_type(member),
            _ => Err(ModelError::UnexpectedType(target.to_owned(), "list")),
        }
    }

    /// Key and value types of a map member.
    pub fn map_types(&self, target: &str) -> Result<(String, String), ModelError> {
        match &self.model.shape(target)?.kind {
            ShapeKind::Map { key, value } => Ok((self.rust_type(key)?, self.rust_type(value)?)),
            _ => Err(ModelError::UnexpectedType(target.to_owned(), "map")),
        }
    }

    /// Whether a floating point number is reachable from the shape, which rules out `Eq`.
    pub fn contains_float(&self, shape: &Shape) -> Result<bool, ModelError> {
        let mut seen = HashSet::new();
        seen.insert(shape.id.clone());
        for member in shape.members() {
            if self.contains_float_inner(&member.target, &mut seen)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn contains_float_inner(
        &self,
        id: &str,
        seen: &mut HashSet<String>,
    ) -> Result<bool, ModelError> {
        if !seen.insert(id.to_owned()) {
            return Ok(false);
        }
        let shape = match self.model.target(id)? {
            Target::Simple(simple) => return Ok(simple == SimpleType::Double),
            Target::Shape(shape) => shape,
        };
        match &shape.kind {
            ShapeKind::Simple(simple) => Ok(*simple == SimpleType::Double),
            ShapeKind::List { member } => self.contains_float_inner(member, seen),
            ShapeKind::Map { value, .. } => self.contains_float_inner(value, seen),
            ShapeKind::Structure { members } => {
                for member in members {
                    if self.contains_float_inner(&member.target, seen)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }
}

fn simple_type(simple: SimpleType) -> &'static str {
    match simple {
        SimpleType::String => "std::string::String",
        SimpleType::Integer => "i32",
        SimpleType::Long => "i64",
        SimpleType::Double => "f64",
        SimpleType::Boolean => "bool",
        SimpleType::Timestamp => "smithy_types::Instant",
    }
}

fn simple_kind(simple: SimpleType) -> MemberKind {
    match simple {
        SimpleType::String => MemberKind::String,
        SimpleType::Timestamp => MemberKind::Timestamp,
        SimpleType::Double => MemberKind::Float,
        SimpleType::Integer | SimpleType::Long | SimpleType::Boolean => MemberKind::Primitive,
    }
}
