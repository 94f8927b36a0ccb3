//! scssgen AST
//!
//! The node model for programmatically generated stylesheets. Nodes are
//! immutable, tagged records whose fields are checked against a per-type
//! schema at construction time; a [`Node`] that exists is always valid.
//!
//! ```text
//! Fields → builders::rule() → validate (schema) → Node
//! ```
//!
//! # Example
//!
//! ```
//! use scssgen_ast::{builders, fields};
//!
//! let decl = builders::declaration(fields! { property: "color", value: "red" }).unwrap();
//! let rule = builders::rule(fields! { selectors: vec![".box"], declarations: vec![decl] }).unwrap();
//! assert_eq!(rule.type_name(), "Rule");
//! ```

pub mod builders;
pub mod json;
pub mod node;
pub mod schema;
pub mod validate;

pub use node::{Fields, Node, NodeKind, Value};
pub use schema::FieldDef;
pub use validate::{Expected, Primitive, Validator};

/// A field value failed its type's schema during node construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid `{type_name}.{field}`: {reason} (got {value})")]
pub struct SchemaValidationError {
    pub type_name: &'static str,
    pub field: String,
    pub value: String,
    pub reason: String,
}

/// A type name that no node variant is registered under.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node type `{kind}`")]
pub struct UnknownNodeType {
    pub kind: String,
}
