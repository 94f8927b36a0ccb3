//! Field validators.
//!
//! Validators are plain data composed with the `assert_*` / `array_of`
//! combinators and evaluated against a [`Value`]. They are pure: the same
//! value always produces the same result.
//!
//! Mutually recursive schemas (a list whose elements may be lists) use
//! [`deferred`], which resolves the inner validator only when it runs.

use std::fmt;

use crate::node::{NodeKind, Value};

/// Primitive value kinds checked by [`assert_value_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
        }
    }

    fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Primitive::String, Value::String(_))
                | (Primitive::Number, Value::Number(_))
                | (Primitive::Boolean, Value::Bool(_))
        )
    }
}

#[derive(Debug, Clone)]
pub enum Validator {
    Any,
    ValueType(Primitive),
    Type(NodeKind),
    Node,
    OneOf(Vec<Validator>),
    ArrayOf(Box<Validator>),
    /// Resolved on every run; `name` stands in for it in descriptions so
    /// recursive schemas describe in finite space.
    Deferred {
        name: &'static str,
        resolve: fn() -> Validator,
    },
}

/// What a validator expected when it rejected a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected(pub String);

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}", self.0)
    }
}

impl Validator {
    pub fn validate(&self, value: &Value) -> Result<(), Expected> {
        match self {
            Validator::Any => Ok(()),
            Validator::ValueType(primitive) => {
                if primitive.matches(value) {
                    Ok(())
                } else {
                    Err(Expected(primitive.name().into()))
                }
            }
            Validator::Type(kind) => match value.as_node() {
                Some(node) if node.kind() == *kind => Ok(()),
                _ => Err(Expected(kind.name().into())),
            },
            Validator::Node => match value {
                Value::Node(_) => Ok(()),
                _ => Err(Expected("node".into())),
            },
            Validator::OneOf(alternatives) => {
                if alternatives.iter().any(|v| v.validate(value).is_ok()) {
                    Ok(())
                } else {
                    Err(Expected(self.describe()))
                }
            }
            Validator::ArrayOf(inner) => {
                let Some(items) = value.as_list() else {
                    return Err(Expected(self.describe()));
                };
                for (i, item) in items.iter().enumerate() {
                    inner
                        .validate(item)
                        .map_err(|e| Expected(format!("element {i} to be {}", e.0)))?;
                }
                Ok(())
            }
            Validator::Deferred { resolve, .. } => resolve().validate(value),
        }
    }

    /// Human-readable form of what this validator accepts.
    pub fn describe(&self) -> String {
        match self {
            Validator::Any => "any value".into(),
            Validator::ValueType(primitive) => primitive.name().into(),
            Validator::Type(kind) => kind.name().into(),
            Validator::Node => "node".into(),
            Validator::OneOf(alternatives) => alternatives
                .iter()
                .map(Validator::describe)
                .collect::<Vec<_>>()
                .join(" | "),
            Validator::ArrayOf(inner) => match **inner {
                Validator::OneOf(_) => {
                    format!("list of ({})", inner.describe())
                }
                _ => format!("list of {}", inner.describe()),
            },
            Validator::Deferred { name, .. } => (*name).into(),
        }
    }
}

pub fn assert_value_type(primitive: Primitive) -> Validator {
    Validator::ValueType(primitive)
}

pub fn assert_type(kind: NodeKind) -> Validator {
    Validator::Type(kind)
}

/// Any node, whatever its kind.
pub fn assert_node() -> Validator {
    Validator::Node
}

pub fn assert_one_of(alternatives: impl IntoIterator<Item = Validator>) -> Validator {
    Validator::OneOf(alternatives.into_iter().collect())
}

pub fn array_of(inner: Validator) -> Validator {
    Validator::ArrayOf(Box::new(inner))
}

pub fn assert_any() -> Validator {
    Validator::Any
}

pub fn deferred(name: &'static str, resolve: fn() -> Validator) -> Validator {
    Validator::Deferred { name, resolve }
}
