//! Node, field value and field map types.
//!
//! A [`Node`] never stores its parent. Parent context is supplied by the
//! generator while walking, so subtrees can be shared between trees (and
//! threads) and reused across any number of generation passes.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::UnknownNodeType;

macro_rules! node_kinds {
    ($($(#[$doc:meta])* $variant:ident,)*) => {
        /// The closed set of node variants.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($(#[$doc])* $variant,)*
        }

        impl NodeKind {
            /// Every variant, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)*];

            /// The stable type name (`"Rule"`, `"SassMixinCall"`, ...).
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)*
                }
            }

            /// Resolve a type name back to its variant.
            pub fn from_name(name: &str) -> Result<Self, UnknownNodeType> {
                match name {
                    $(stringify!($variant) => Ok(NodeKind::$variant),)*
                    _ => Err(UnknownNodeType { kind: name.to_string() }),
                }
            }
        }
    };
}

node_kinds! {
    /// Root of a generated file.
    StyleSheet,
    /// `// line` comments.
    Comment,
    /// An explicit blank line.
    Newline,
    /// A bare name; printed with `$` in variable positions.
    Identifier,
    /// `'quoted'`
    SassString,
    /// `42`, `0.5`
    SassNumber,
    /// `true` / `false`
    SassBoolean,
    /// `#0f62fe`
    SassColor,
    /// Raw pass-through value.
    SassValue,
    /// `(a, b, c)`
    SassList,
    /// `(key: value, ...)`
    SassMap,
    /// One `key: value` entry of a map.
    SassMapProperty,
    /// `$name: value !default;`
    Assignment,
    /// `$param: default` in a declaration header.
    AssignmentPattern,
    /// `$args...`
    RestPattern,
    /// `property: value;`
    Declaration,
    /// `selector { ... }`
    Rule,
    /// `@media (...) { ... }`
    AtRule,
    /// `{ ... }`
    BlockStatement,
    /// `name(args)`
    CallExpression,
    /// `name(params)` for a Sass function.
    SassFunctionCall,
    /// `@function name(...) { ... }`
    SassFunction,
    /// `@mixin name(...) { ... }`
    SassMixin,
    /// `@include name(...);`
    SassMixinCall,
    /// `@content;`
    AtContent,
    /// `@return value;`
    AtReturn,
    /// `@if ... { } @else if ... { } @else { }`
    IfStatement,
    /// `left op right`
    LogicalExpression,
    /// `@import 'path';`
    SassImport,
    /// `@use 'path' as ns;`
    SassModule,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field value: a primitive, a child node, or an ordered list of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent. Optional fields set to `Null` are not stored.
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Node(Arc<Node>),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short description of the value's shape, for error messages.
    pub fn describe(&self) -> String {
        match self {
            Value::Null => "null".into(),
            Value::Bool(_) => "boolean".into(),
            Value::Number(_) => "number".into(),
            Value::String(_) => "string".into(),
            Value::Node(node) => format!("{} node", node.kind()),
            Value::List(_) => "list".into(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Node(node) => write!(f, "<{}>", node.kind()),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(Arc::new(value))
    }
}

impl From<Arc<Node>> for Value {
    fn from(value: Arc<Node>) -> Self {
        Value::Node(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Caller-supplied field map, consumed by the constructors in [`crate::builders`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(IndexMap<String, Value>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Fields(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Build a [`Fields`] map: `fields! { property: "color", value: "red" }`.
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($name:ident : $value:expr),+ $(,)?) => {
        $crate::Fields::new()$(.with(stringify!($name), $value))+
    };
}

/// An immutable, schema-validated node.
///
/// Only [`crate::builders`] can create one, so every field present has passed
/// its validator and every required field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    fields: IndexMap<&'static str, Value>,
}

impl Node {
    pub(crate) fn from_validated(kind: NodeKind, fields: IndexMap<&'static str, Value>) -> Self {
        Self { kind, fields }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// A stored field. Omitted optional fields return `None`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Stored fields in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }
}
