//! Per-type field schemas.
//!
//! Built once, on first use, into a read-only table keyed by [`NodeKind`].
//! [`fields_of`] matches exhaustively, so adding a variant without a schema
//! does not compile.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::node::NodeKind;
use crate::validate::{
    array_of, assert_any, assert_node, assert_one_of, assert_type, assert_value_type, deferred,
    Primitive, Validator,
};

/// One declared field of a node type.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub optional: bool,
    pub validate: Validator,
}

fn field(name: &'static str, validate: Validator) -> FieldDef {
    FieldDef {
        name,
        optional: false,
        validate,
    }
}

fn optional(name: &'static str, validate: Validator) -> FieldDef {
    FieldDef {
        name,
        optional: true,
        validate,
    }
}

static SCHEMAS: Lazy<IndexMap<NodeKind, Vec<FieldDef>>> = Lazy::new(|| {
    NodeKind::ALL
        .iter()
        .map(|&kind| (kind, fields_of(kind)))
        .collect()
});

/// The declared fields of `kind`, in declaration order.
pub fn schema(kind: NodeKind) -> &'static [FieldDef] {
    SCHEMAS.get(&kind).map(Vec::as_slice).unwrap_or(&[])
}

fn string() -> Validator {
    assert_value_type(Primitive::String)
}

fn boolean() -> Validator {
    assert_value_type(Primitive::Boolean)
}

fn identifier() -> Validator {
    assert_type(NodeKind::Identifier)
}

fn block() -> Validator {
    assert_type(NodeKind::BlockStatement)
}

/// Anything that renders as a Sass value expression.
pub fn sass_value() -> Validator {
    assert_one_of([
        assert_type(NodeKind::Identifier),
        assert_type(NodeKind::SassString),
        assert_type(NodeKind::SassNumber),
        assert_type(NodeKind::SassBoolean),
        assert_type(NodeKind::SassColor),
        assert_type(NodeKind::SassValue),
        assert_type(NodeKind::SassList),
        assert_type(NodeKind::SassMap),
        assert_type(NodeKind::CallExpression),
        assert_type(NodeKind::SassFunctionCall),
        assert_type(NodeKind::LogicalExpression),
        assert_type(NodeKind::RestPattern),
    ])
}

/// Anything that may appear in a stylesheet or block body.
pub fn statement() -> Validator {
    assert_one_of([
        assert_type(NodeKind::Assignment),
        assert_type(NodeKind::AtContent),
        assert_type(NodeKind::AtReturn),
        assert_type(NodeKind::AtRule),
        assert_type(NodeKind::Comment),
        assert_type(NodeKind::Declaration),
        assert_type(NodeKind::IfStatement),
        assert_type(NodeKind::Newline),
        assert_type(NodeKind::Rule),
        assert_type(NodeKind::SassFunction),
        assert_type(NodeKind::SassImport),
        assert_type(NodeKind::SassMixin),
        assert_type(NodeKind::SassMixinCall),
        assert_type(NodeKind::SassModule),
    ])
}

/// A parameter in a `@function` / `@mixin` header.
pub fn param() -> Validator {
    assert_one_of([
        assert_type(NodeKind::Identifier),
        assert_type(NodeKind::AssignmentPattern),
        assert_type(NodeKind::RestPattern),
    ])
}

fn values() -> Validator {
    array_of(deferred("sass value", sass_value))
}

fn statements() -> Validator {
    array_of(deferred("statement", statement))
}

fn fields_of(kind: NodeKind) -> Vec<FieldDef> {
    match kind {
        NodeKind::StyleSheet => vec![field("children", statements())],
        NodeKind::Comment => vec![optional("value", string())],
        NodeKind::Newline | NodeKind::AtContent => Vec::new(),
        NodeKind::Identifier => vec![field("name", string())],
        NodeKind::SassString | NodeKind::SassColor => vec![field("value", string())],
        NodeKind::SassNumber => vec![field("value", assert_value_type(Primitive::Number))],
        NodeKind::SassBoolean => vec![field("value", boolean())],
        NodeKind::SassValue => vec![field("value", assert_any())],
        NodeKind::SassList => vec![field("elements", values())],
        NodeKind::SassMap => vec![field(
            "properties",
            array_of(assert_type(NodeKind::SassMapProperty)),
        )],
        NodeKind::SassMapProperty => vec![
            field("key", identifier()),
            field("value", deferred("sass value", sass_value)),
            optional("quoted", boolean()),
        ],
        NodeKind::Assignment => vec![
            field("id", identifier()),
            field("init", sass_value()),
            optional("default", boolean()),
            optional("global", boolean()),
        ],
        NodeKind::AssignmentPattern => vec![
            field("left", identifier()),
            field("right", sass_value()),
        ],
        NodeKind::RestPattern => vec![field("id", identifier())],
        NodeKind::Declaration => vec![
            field("property", string()),
            field("value", assert_one_of([string(), assert_node()])),
            optional("important", boolean()),
        ],
        NodeKind::Rule => vec![
            field("selectors", array_of(string())),
            field("declarations", statements()),
        ],
        NodeKind::AtRule => vec![
            field("name", string()),
            optional("media", string()),
            optional("children", statements()),
        ],
        NodeKind::BlockStatement => vec![field("body", statements())],
        NodeKind::CallExpression => vec![
            field("callee", identifier()),
            optional("arguments", values()),
        ],
        NodeKind::SassFunctionCall => vec![
            field("id", identifier()),
            optional("params", values()),
        ],
        NodeKind::SassFunction => vec![
            field("id", identifier()),
            optional("params", array_of(param())),
            field("body", block()),
        ],
        NodeKind::SassMixin => vec![
            field("id", identifier()),
            optional("params", array_of(param())),
            field("body", block()),
        ],
        NodeKind::SassMixinCall => vec![
            field("id", identifier()),
            optional("params", values()),
            optional("body", block()),
        ],
        NodeKind::AtReturn => vec![field("argument", sass_value())],
        NodeKind::IfStatement => vec![
            field("test", sass_value()),
            field("consequent", block()),
            optional(
                "alternate",
                assert_one_of([assert_type(NodeKind::IfStatement), block()]),
            ),
        ],
        NodeKind::LogicalExpression => vec![
            field("left", deferred("sass value", sass_value)),
            field("operator", string()),
            field("right", deferred("sass value", sass_value)),
        ],
        NodeKind::SassImport => vec![field("path", string())],
        NodeKind::SassModule => vec![
            field("path", string()),
            optional("namespace", string()),
        ],
    }
}
