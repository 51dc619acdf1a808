/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Loading of a Smithy JSON AST into the shapes the generator works with.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to parse model: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model does not define a service shape")]
    MissingService,
    #[error("model defines more than one service: {0} and {1}")]
    MultipleServices(String, String),
    #[error("shape {0} is not defined in the model")]
    UnknownShape(String),
    #[error("shape {0} has unsupported type `{1}`")]
    UnsupportedType(String, String),
    #[error("shape {0} is missing its `{1}` property")]
    MissingProperty(String, &'static str),
    #[error("shape {0} was expected to be a {1}")]
    UnexpectedType(String, &'static str),
    #[error("invalid shape id `{0}`")]
    InvalidShapeId(String),
    #[error("in {shape}, `{first}` and `{second}` both generate `{generated}`")]
    NameConflict {
        shape: String,
        first: String,
        second: String,
        generated: String,
    },
}

#[derive(Debug, Deserialize)]
struct RawModel {
    shapes: HashMap<String, RawShape>,
}

#[derive(Debug, Deserialize)]
struct RawShape {
    #[serde(rename = "type")]
    shape_type: String,
    #[serde(default)]
    members: Members,
    member: Option<RawTarget>,
    key: Option<RawTarget>,
    value: Option<RawTarget>,
    input: Option<RawTarget>,
    output: Option<RawTarget>,
    #[serde(default)]
    operations: Vec<RawTarget>,
    version: Option<String>,
    #[serde(default)]
    traits: Traits,
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    target: String,
}

#[derive(Debug, Deserialize)]
struct RawMember {
    target: String,
    #[serde(default)]
    traits: Traits,
}

/// Structure members in the order they are declared.
#[derive(Debug, Default)]
struct Members(Vec<(String, RawMember)>);

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of member names to member definitions")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, member)) = map.next_entry::<String, RawMember>()? {
                    members.push((name, member));
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

/// The prelude and service traits the generator reads. Everything else is ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Traits {
    #[serde(rename = "smithy.api#documentation")]
    pub documentation: Option<String>,
    #[serde(rename = "smithy.api#enum")]
    pub enum_values: Option<Vec<EnumDefinition>>,
    #[serde(rename = "smithy.api#error")]
    pub error: Option<String>,
    #[serde(rename = "smithy.api#title")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumDefinition {
    pub value: String,
    pub name: Option<String>,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleType {
    String,
    Integer,
    Long,
    Double,
    Boolean,
    Timestamp,
}

#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub target: String,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ShapeKind {
    Simple(SimpleType),
    List { member: String },
    Map { key: String, value: String },
    Structure { members: Vec<Member> },
    Operation { input: Option<String>, output: Option<String> },
    Service { version: String, operations: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct Shape {
    pub id: String,
    pub kind: ShapeKind,
    pub traits: Traits,
}

impl Shape {
    /// The name of the shape without its namespace.
    pub fn name(&self) -> &str {
        local_name(&self.id)
    }

    pub fn members(&self) -> &[Member] {
        match &self.kind {
            ShapeKind::Structure { members } => members,
            _ => &[],
        }
    }

    pub fn enum_values(&self) -> Option<&[EnumDefinition]> {
        self.traits.enum_values.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.traits.error.is_some()
    }

    pub fn is_structure(&self) -> bool {
        matches!(self.kind, ShapeKind::Structure { .. })
    }

    fn empty_structure(id: String) -> Shape {
        Shape {
            id,
            kind: ShapeKind::Structure { members: vec![] },
            traits: Traits::default(),
        }
    }
}

fn local_name(id: &str) -> &str {
    id.split_once('#').map_or(id, |(_, name)| name)
}

fn prelude_type(id: &str) -> Option<SimpleType> {
    let simple = match id.strip_prefix("smithy.api#")? {
        "String" => SimpleType::String,
        "Integer" | "PrimitiveInteger" => SimpleType::Integer,
        "Long" | "PrimitiveLong" => SimpleType::Long,
        "Double" | "PrimitiveDouble" => SimpleType::Double,
        "Boolean" | "PrimitiveBoolean" => SimpleType::Boolean,
        "Timestamp" => SimpleType::Timestamp,
        _ => return None,
    };
    Some(simple)
}

/// The Rust module a generated shape is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Module {
    Error,
    Input,
    Model,
    Output,
}

impl Module {
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Error => "error",
            Module::Input => "input",
            Module::Model => "model",
            Module::Output => "output",
        }
    }
}

/// A service model with every shape assigned to the module it is generated into.
#[derive(Debug)]
pub struct Model {
    shapes: HashMap<String, Shape>,
    service: Shape,
    operations: Vec<Operation>,
    errors: Vec<String>,
    model_shapes: Vec<String>,
    modules: HashMap<String, Module>,
}

/// An operation together with its resolved request and response shapes.
#[derive(Debug, Clone)]
pub struct Operation {
    pub shape: Shape,
    pub input: Shape,
    pub output: Shape,
}

impl Model {
    pub fn from_json(json: &str) -> Result<Model, ModelError> {
        let raw: RawModel = serde_json::from_str(json)?;
        let mut shapes = HashMap::with_capacity(raw.shapes.len());
        for (id, raw_shape) in raw.shapes {
            let shape = convert(id.clone(), raw_shape)?;
            shapes.insert(id, shape);
        }
        Model::index(shapes)
    }

    fn index(shapes: HashMap<String, Shape>) -> Result<Model, ModelError> {
        let mut services = shapes
            .values()
            .filter(|shape| matches!(shape.kind, ShapeKind::Service { .. }));
        let service = services.next().ok_or(ModelError::MissingService)?.clone();
        if let Some(other) = services.next() {
            return Err(ModelError::MultipleServices(service.id.clone(), other.id.clone()));
        }
        let namespace = match service.id.split_once('#') {
            Some((namespace, _)) => namespace.to_owned(),
            None => return Err(ModelError::InvalidShapeId(service.id.clone())),
        };

        let operation_ids = match &service.kind {
            ShapeKind::Service { operations, .. } => operations.clone(),
            _ => unreachable!("filtered to service shapes"),
        };
        let mut operations = Vec::with_capacity(operation_ids.len());
        for id in operation_ids {
            let shape = lookup(&shapes, &id)?.clone();
            let (input, output) = match &shape.kind {
                ShapeKind::Operation { input, output } => (input.clone(), output.clone()),
                _ => return Err(ModelError::UnexpectedType(id, "operation")),
            };
            let input = match input {
                Some(input) => lookup(&shapes, &input)?.clone(),
                None => return Err(ModelError::MissingProperty(id, "input")),
            };
            let output = match output {
                Some(output) => lookup(&shapes, &output)?.clone(),
                None => Shape::empty_structure(format!("{}#{}Output", namespace, shape.name())),
            };
            for io in [&input, &output] {
                if !io.is_structure() {
                    return Err(ModelError::UnexpectedType(io.id.clone(), "structure"));
                }
            }
            operations.push(Operation { shape, input, output });
        }
        operations.sort_by(|a, b| a.shape.name().cmp(b.shape.name()));

        let mut errors: Vec<&Shape> = shapes
            .values()
            .filter(|shape| shape.is_structure() && shape.is_error())
            .collect();
        errors.sort_by(|a, b| a.name().cmp(b.name()));
        let errors: Vec<String> = errors.into_iter().map(|shape| shape.id.clone()).collect();

        let mut modules = HashMap::new();
        for operation in &operations {
            modules.insert(operation.input.id.clone(), Module::Input);
            modules.insert(operation.output.id.clone(), Module::Output);
        }
        for error in &errors {
            modules.insert(error.clone(), Module::Error);
        }

        let mut model = Model {
            shapes,
            service,
            operations,
            errors,
            model_shapes: vec![],
            modules,
        };
        model.model_shapes = model.collect_model_shapes()?;
        for id in &model.model_shapes {
            model.modules.insert(id.clone(), Module::Model);
        }
        Ok(model)
    }

    /// Structures and enums reachable from operation inputs, outputs and errors that are not
    /// themselves one of those, sorted by name.
    fn collect_model_shapes(&self) -> Result<Vec<String>, ModelError> {
        let roots: BTreeSet<&str> = self
            .operations
            .iter()
            .flat_map(|op| [op.input.id.as_str(), op.output.id.as_str()])
            .collect();
        let mut stack: Vec<&Shape> = self
            .operations
            .iter()
            .flat_map(|op| [&op.input, &op.output])
            .collect();
        for error in &self.errors {
            stack.push(self.shape(error)?);
        }

        let mut seen = BTreeSet::new();
        let mut found = BTreeMap::new();
        while let Some(shape) = stack.pop() {
            for member in shape.members() {
                let referenced = match self.referenced_shape(&member.target)? {
                    Some(referenced) => referenced,
                    None => continue,
                };
                if !seen.insert(referenced.id.as_str()) {
                    continue;
                }
                if referenced.is_structure()
                    && !roots.contains(referenced.id.as_str())
                    && !referenced.is_error()
                {
                    insert_unique_name(&mut found, referenced)?;
                    stack.push(referenced);
                } else if referenced.enum_values().is_some() {
                    insert_unique_name(&mut found, referenced)?;
                }
            }
        }
        Ok(found.into_values().collect())
    }

    /// The structure or enum a member refers to, looking through lists and map values.
    fn referenced_shape(&self, target: &str) -> Result<Option<&Shape>, ModelError> {
        if prelude_type(target).is_some() {
            return Ok(None);
        }
        let shape = self.shape(target)?;
        match &shape.kind {
            ShapeKind::List { member } => self.referenced_shape(member),
            ShapeKind::Map { value, .. } => self.referenced_shape(value),
            ShapeKind::Structure { .. } => Ok(Some(shape)),
            _ if shape.enum_values().is_some() => Ok(Some(shape)),
            _ => Ok(None),
        }
    }

    pub fn shape(&self, id: &str) -> Result<&Shape, ModelError> {
        lookup(&self.shapes, id)
    }

    pub fn service(&self) -> &Shape {
        &self.service
    }

    /// Operations of the service, sorted by name.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Modeled error structures, sorted by name.
    pub fn errors(&self) -> Result<Vec<&Shape>, ModelError> {
        self.errors.iter().map(|id| self.shape(id)).collect()
    }

    /// Shared structures and enums, sorted by name.
    pub fn model_shapes(&self) -> Result<Vec<&Shape>, ModelError> {
        self.model_shapes.iter().map(|id| self.shape(id)).collect()
    }

    pub fn module_of(&self, shape: &Shape) -> Option<Module> {
        self.modules.get(&shape.id).copied()
    }

    /// Resolves a member target, including targets in the Smithy prelude.
    pub fn target(&self, id: &str) -> Result<Target<'_>, ModelError> {
        if let Some(simple) = prelude_type(id) {
            return Ok(Target::Simple(simple));
        }
        Ok(Target::Shape(self.shape(id)?))
    }
}

/// What a member points at.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Simple(SimpleType),
    Shape(&'a Shape),
}

fn insert_unique_name<'a>(
    found: &mut BTreeMap<&'a str, String>,
    shape: &'a Shape,
) -> Result<(), ModelError> {
    if let Some(existing) = found.insert(shape.name(), shape.id.clone()) {
        return Err(ModelError::NameConflict {
            shape: "model".to_owned(),
            first: existing,
            second: shape.id.clone(),
            generated: shape.name().to_owned(),
        });
    }
    Ok(())
}

fn lookup<'a>(shapes: &'a HashMap<String, Shape>, id: &str) -> Result<&'a Shape, ModelError> {
    shapes
        .get(id)
        .ok_or_else(|| ModelError::UnknownShape(id.to_owned()))
}

fn convert(id: String, raw: RawShape) -> Result<Shape, ModelError> {
    let required = |target: Option<RawTarget>, property: &'static str| {
        target
            .map(|t| t.target)
            .ok_or_else(|| ModelError::MissingProperty(id.clone(), property))
    };
    let kind = match raw.shape_type.as_str() {
        "string" => ShapeKind::Simple(SimpleType::String),
        "integer" => ShapeKind::Simple(SimpleType::Integer),
        "long" => ShapeKind::Simple(SimpleType::Long),
        "double" => ShapeKind::Simple(SimpleType::Double),
        "boolean" => ShapeKind::Simple(SimpleType::Boolean),
        "timestamp" => ShapeKind::Simple(SimpleType::Timestamp),
        "list" => ShapeKind::List {
            member: required(raw.member, "member")?,
        },
        "map" => ShapeKind::Map {
            key: required(raw.key, "key")?,
            value: required(raw.value, "value")?,
        },
        "structure" => ShapeKind::Structure {
            members: raw
                .members
                .0
                .into_iter()
                .map(|(name, member)| Member {
                    name,
                    target: member.target,
                    documentation: member.traits.documentation,
                })
                .collect(),
        },
        "operation" => ShapeKind::Operation {
            input: raw.input.map(|t| t.target),
            output: raw.output.map(|t| t.target),
        },
        "service" => ShapeKind::Service {
            version: raw
                .version
                .ok_or_else(|| ModelError::MissingProperty(id.clone(), "version"))?,
            operations: raw.operations.into_iter().map(|t| t.target).collect(),
        },
        other => return Err(ModelError::UnsupportedType(id, other.to_owned())),
    };
    Ok(Shape {
        id,
        kind,
        traits: raw.traits,
    })
}

#[cfg(test)]
mod test {
    use super::{Model, ModelError, Module, SimpleType, Target};

    const MODEL: &str = r##"{
        "smithy": "1.0",
        "shapes": {
            "example#Svc": {
                "type": "service",
                "version": "2020-01-01",
                "operations": [{"target": "example#Start"}, {"target": "example#Describe"}]
            },
            "example#Start": {
                "type": "operation",
                "input": {"target": "example#StartInput"}
            },
            "example#Describe": {
                "type": "operation",
                "input": {"target": "example#DescribeInput"},
                "output": {"target": "example#DescribeOutput"},
                "errors": [{"target": "example#Failure"}]
            },
            "example#StartInput": {
                "type": "structure",
                "members": {
                    "Zeta": {"target": "smithy.api#String"},
                    "Alpha": {"target": "example#Tags"}
                }
            },
            "example#DescribeInput": {"type": "structure", "members": {}},
            "example#DescribeOutput": {
                "type": "structure",
                "members": {"Job": {"target": "example#Job"}}
            },
            "example#Job": {
                "type": "structure",
                "members": {
                    "State": {"target": "example#State"},
                    "Child": {"target": "example#Job"}
                }
            },
            "example#Tags": {"type": "list", "member": {"target": "example#Tag"}},
            "example#Tag": {"type": "structure", "members": {}},
            "example#Unused": {"type": "structure", "members": {}},
            "example#State": {
                "type": "string",
                "traits": {"smithy.api#enum": [{"value": "RUNNING"}, {"value": "DONE"}]}
            },
            "example#Failure": {
                "type": "structure",
                "members": {"Message": {"target": "smithy.api#String"}},
                "traits": {"smithy.api#error": "client"}
            }
        }
    }"##;

    fn names<'a>(shapes: impl IntoIterator<Item = &'a super::Shape>) -> Vec<&'a str> {
        shapes.into_iter().map(|shape| shape.name()).collect()
    }

    #[test]
    fn members_keep_declaration_order() {
        let model = Model::from_json(MODEL).unwrap();
        let input = model.shape("example#StartInput").unwrap();
        let members: Vec<_> = input.members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(members, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn shapes_are_assigned_to_modules() {
        let model = Model::from_json(MODEL).unwrap();
        let operations: Vec<_> = model.operations().iter().map(|op| op.shape.name()).collect();
        assert_eq!(operations, vec!["Describe", "Start"]);
        assert_eq!(names(model.errors().unwrap()), vec!["Failure"]);
        assert_eq!(names(model.model_shapes().unwrap()), vec!["Job", "State", "Tag"]);

        let start = &model.operations()[1];
        assert_eq!(start.output.id, "example#StartOutput");
        assert!(start.output.members().is_empty());
        assert_eq!(model.module_of(&start.output), Some(Module::Output));
        assert_eq!(model.module_of(&start.input), Some(Module::Input));
        let unused = model.shape("example#Unused").unwrap();
        assert_eq!(model.module_of(unused), None);
    }

    #[test]
    fn prelude_targets_resolve() {
        let model = Model::from_json(MODEL).unwrap();
        assert!(matches!(
            model.target("smithy.api#String").unwrap(),
            Target::Simple(SimpleType::String)
        ));
        assert!(matches!(
            model.target("example#Missing"),
            Err(ModelError::UnknownShape(id)) if id == "example#Missing"
        ));
    }

    #[test]
    fn unsupported_shapes_are_rejected() {
        let err = Model::from_json(
            r#"{"smithy": "1.0", "shapes": {"example#Data": {"type": "blob"}}}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "shape example#Data has unsupported type `blob`");
    }

    #[test]
    fn a_service_is_required() {
        let err = Model::from_json(r#"{"smithy": "1.0", "shapes": {}}"#).unwrap_err();
        assert!(matches!(err, ModelError::MissingService));
    }
}
