//! JSON tree descriptions.
//!
//! A node is a JSON object with a `"kind"` member naming its type; every
//! other member is a field. Arrays become lists, and scalars map to the
//! matching [`Value`]. Decoding goes through the regular constructors, so a
//! JSON tree is held to exactly the same schema as one built in code.
//!
//! ```json
//! { "kind": "Rule", "selectors": [".box"],
//!   "declarations": [{ "kind": "Declaration", "property": "color", "value": "red" }] }
//! ```

use std::sync::Arc;

use serde_json::Value as Json;

use crate::builders;
use crate::node::{Fields, Node, NodeKind, Value};
use crate::{SchemaValidationError, UnknownNodeType};

/// Decoding error, located by JSON path (`$.children[2].init`).
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("at {path}: {source}")]
    Schema {
        path: String,
        #[source]
        source: SchemaValidationError,
    },

    #[error("at {path}: {source}")]
    UnknownNodeType {
        path: String,
        #[source]
        source: UnknownNodeType,
    },

    #[error("at {path}: {message}")]
    InvalidShape { path: String, message: String },
}

/// Parse and decode a JSON tree whose root is a node.
pub fn from_str(src: &str) -> Result<Node, DecodeError> {
    let json: Json = serde_json::from_str(src)?;
    from_value(&json)
}

/// Decode an already-parsed JSON tree whose root is a node.
pub fn from_value(json: &Json) -> Result<Node, DecodeError> {
    match json {
        Json::Object(_) => decode_node(json, "$"),
        _ => Err(DecodeError::InvalidShape {
            path: "$".into(),
            message: "the root must be a node object with a \"kind\" member".into(),
        }),
    }
}

fn decode_node(json: &Json, path: &str) -> Result<Node, DecodeError> {
    let Json::Object(members) = json else {
        return Err(DecodeError::InvalidShape {
            path: path.to_string(),
            message: "expected a node object".into(),
        });
    };

    let kind = match members.get("kind") {
        Some(Json::String(name)) => {
            NodeKind::from_name(name).map_err(|source| DecodeError::UnknownNodeType {
                path: path.to_string(),
                source,
            })?
        }
        _ => {
            return Err(DecodeError::InvalidShape {
                path: path.to_string(),
                message: "node object has no string \"kind\" member".into(),
            });
        }
    };

    let mut fields = Fields::new();
    for (name, member) in members.iter().filter(|(name, _)| name.as_str() != "kind") {
        let value = decode_value(member, &format!("{path}.{name}"))?;
        fields.insert(name.as_str(), value);
    }

    builders::build(kind, fields).map_err(|source| DecodeError::Schema {
        path: path.to_string(),
        source,
    })
}

fn decode_value(json: &Json, path: &str) -> Result<Value, DecodeError> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_f64() {
            Some(n) => Value::Number(n),
            None => {
                return Err(DecodeError::InvalidShape {
                    path: path.to_string(),
                    message: format!("number {n} is not representable"),
                });
            }
        },
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::List(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| decode_value(item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Json::Object(_) => Value::Node(Arc::new(decode_node(json, path)?)),
    })
}
