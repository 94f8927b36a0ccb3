//! Node constructors.
//!
//! Every variant gets a constructor (`builders::rule`, `builders::identifier`,
//! ...) that validates a [`Fields`] map against the variant's schema and
//! returns an immutable [`Node`]. Validation stops at the first failing
//! field; no partially valid node is ever produced.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::node::{Fields, Node, NodeKind, Value};
use crate::schema;
use crate::{SchemaValidationError, UnknownNodeType};

pub type Constructor = fn(Fields) -> Result<Node, SchemaValidationError>;

/// Validate `fields` against the schema of `kind` and build the node.
pub fn build(kind: NodeKind, fields: Fields) -> Result<Node, SchemaValidationError> {
    let type_name = kind.name();
    let defs = schema::schema(kind);
    let mut supplied = fields.into_inner();
    let mut validated = IndexMap::with_capacity(defs.len());

    for def in defs {
        match supplied.shift_remove(def.name) {
            None | Some(Value::Null) if def.optional => {}
            None | Some(Value::Null) => {
                return Err(SchemaValidationError {
                    type_name,
                    field: def.name.to_string(),
                    value: "null".into(),
                    reason: "required field is missing".into(),
                });
            }
            Some(value) => {
                if let Err(expected) = def.validate.validate(&value) {
                    return Err(SchemaValidationError {
                        type_name,
                        field: def.name.to_string(),
                        value: value.to_string(),
                        reason: expected.to_string(),
                    });
                }
                validated.insert(def.name, value);
            }
        }
    }

    if let Some((name, value)) = supplied.into_iter().next() {
        return Err(SchemaValidationError {
            type_name,
            field: name,
            value: value.to_string(),
            reason: "unknown field".into(),
        });
    }

    Ok(Node::from_validated(kind, validated))
}

macro_rules! constructors {
    ($($fn_name:ident => $kind:ident,)*) => {
        $(
            #[doc = concat!("Build a validated `", stringify!($kind), "` node.")]
            pub fn $fn_name(fields: Fields) -> Result<Node, SchemaValidationError> {
                build(NodeKind::$kind, fields)
            }
        )*

        static CONSTRUCTORS: Lazy<IndexMap<&'static str, Constructor>> = Lazy::new(|| {
            IndexMap::from([
                $((stringify!($kind), $fn_name as Constructor),)*
            ])
        });
    };
}

constructors! {
    style_sheet => StyleSheet,
    comment => Comment,
    newline => Newline,
    identifier => Identifier,
    sass_string => SassString,
    sass_number => SassNumber,
    sass_boolean => SassBoolean,
    sass_color => SassColor,
    sass_value => SassValue,
    sass_list => SassList,
    sass_map => SassMap,
    sass_map_property => SassMapProperty,
    assignment => Assignment,
    assignment_pattern => AssignmentPattern,
    rest_pattern => RestPattern,
    declaration => Declaration,
    rule => Rule,
    at_rule => AtRule,
    block_statement => BlockStatement,
    call_expression => CallExpression,
    sass_function_call => SassFunctionCall,
    sass_function => SassFunction,
    sass_mixin => SassMixin,
    sass_mixin_call => SassMixinCall,
    at_content => AtContent,
    at_return => AtReturn,
    if_statement => IfStatement,
    logical_expression => LogicalExpression,
    sass_import => SassImport,
    sass_module => SassModule,
}

/// Look up the constructor registered under a type name.
pub fn constructor(name: &str) -> Result<Constructor, UnknownNodeType> {
    CONSTRUCTORS
        .get(name)
        .copied()
        .ok_or_else(|| UnknownNodeType {
            kind: name.to_string(),
        })
}

/// Type name → constructor, in declaration order.
pub fn constructors() -> impl Iterator<Item = (&'static str, Constructor)> {
    CONSTRUCTORS.iter().map(|(name, ctor)| (*name, *ctor))
}
