//! Type registry.
//!
//! Pairs every node variant's field schema with its emission routine. The
//! registry is built once, on first use, and is read-only afterwards, so
//! concurrent readers need no synchronization.

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use scssgen_ast::{
    builders, schema, FieldDef, Fields, Node, NodeKind, SchemaValidationError, UnknownNodeType,
};

use crate::{emit, CodegenError, Generator};

pub type EmitFn = fn(&mut Generator, &Node, Option<&Node>) -> Result<(), CodegenError>;

/// A registered node type: name, field schema and emission routine.
pub struct TypeDefinition {
    pub name: &'static str,
    pub kind: NodeKind,
    pub fields: &'static [FieldDef],
    pub emit: EmitFn,
}

impl TypeDefinition {
    /// Construct a node of this type (see [`builders::build`]).
    pub fn build(&self, fields: Fields) -> Result<Node, SchemaValidationError> {
        builders::build(self.kind, fields)
    }

    /// Whether `node` is of this type.
    pub fn matches(&self, node: &Node) -> bool {
        node.kind() == self.kind
    }
}

impl fmt::Debug for TypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDefinition")
            .field("name", &self.name)
            .field(
                "fields",
                &self.fields.iter().map(|f| f.name).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

pub fn define_type(kind: NodeKind, emit: EmitFn) -> TypeDefinition {
    TypeDefinition {
        name: kind.name(),
        kind,
        fields: schema::schema(kind),
        emit,
    }
}

static REGISTRY: Lazy<IndexMap<&'static str, TypeDefinition>> = Lazy::new(|| {
    NodeKind::ALL
        .iter()
        .map(|&kind| {
            let def = define_type(kind, emit::routine(kind));
            (def.name, def)
        })
        .collect()
});

/// The definition `kind` dispatches to.
pub fn definition(kind: NodeKind) -> Result<&'static TypeDefinition, UnknownNodeType> {
    lookup(kind.name())
}

pub fn lookup(name: &str) -> Result<&'static TypeDefinition, UnknownNodeType> {
    REGISTRY.get(name).ok_or_else(|| UnknownNodeType {
        kind: name.to_string(),
    })
}

/// All definitions, in declaration order.
pub fn definitions() -> impl Iterator<Item = &'static TypeDefinition> {
    REGISTRY.values()
}
