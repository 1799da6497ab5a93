//! Typed view of the ESTree argument nodes of a class-definition call.
//!
//! Arguments arrive as `serde_json::Value` trees in the shape produced by
//! acorn/esprima. Only the parts the pipeline needs to make decisions about
//! (table entries, their keys, function literals) are decoded; every other
//! subtree stays an opaque `Value` and is copied verbatim into the output.

use reclass_common::{ConvertError, ConvertWarning};
use serde_json::Value;
use tracing::warn;

/// The `type` tag of an ESTree node.
pub fn node_type(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

fn flag(node: &Value, name: &str) -> bool {
    node.get(name).and_then(Value::as_bool).unwrap_or(false)
}

/// Read the dotted namespace out of the first call argument.
///
/// The argument must be a string `Literal`; anything else cannot name a class.
pub fn namespace_literal(node: &Value) -> Result<&str, ConvertError> {
    match (node_type(node), node.get("value")) {
        (Some("Literal"), Some(Value::String(namespace))) => Ok(namespace),
        _ => Err(ConvertError::InvalidNamespace {
            namespace: node.get("raw").and_then(Value::as_str).unwrap_or("").to_string(),
            reason: "namespace argument must be a string literal",
        }),
    }
}

/// Key of a member-table entry, kept as the original key node.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyKey {
    pub node: Value,
    pub computed: bool,
}

impl PropertyKey {
    pub fn identifier(name: &str) -> Self {
        Self {
            node: serde_json::json!({ "type": "Identifier", "name": name }),
            computed: false,
        }
    }

    /// Name of a plain identifier key (`foo: ...`).
    pub fn identifier_name(&self) -> Option<&str> {
        if self.computed || node_type(&self.node) != Some("Identifier") {
            return None;
        }
        self.node.get("name").and_then(Value::as_str)
    }

    /// Name of a non-computed identifier or string-literal key.
    pub fn static_name(&self) -> Option<&str> {
        if self.computed {
            return None;
        }
        match node_type(&self.node) {
            Some("Identifier") => self.node.get("name").and_then(Value::as_str),
            Some("Literal") => self.node.get("value").and_then(Value::as_str),
            _ => None,
        }
    }
}

/// Property kind of a table entry (`foo: ...`, `get foo() {}`, `set foo(v) {}`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EntryKind {
    #[default]
    Init,
    Get,
    Set,
}

impl EntryKind {
    fn from_estree(node: &Value) -> Self {
        match node.get("kind").and_then(Value::as_str) {
            Some("get") => Self::Get,
            Some("set") => Self::Set,
            _ => Self::Init,
        }
    }
}

/// One named entry of a static or instance member table.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberEntry {
    pub key: PropertyKey,
    pub value: Value,
    pub kind: EntryKind,
}

/// Ordered entries of an object-literal member table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberTable {
    pub entries: Vec<MemberEntry>,
}

impl MemberTable {
    /// Decode an `ObjectExpression` argument at `position` in the call.
    ///
    /// Spread elements and other keyless entries are dropped with a warning.
    /// Entries are otherwise accepted as-is; value shapes are not validated
    /// here.
    pub fn from_estree(
        node: &Value,
        position: usize,
        warnings: &mut Vec<ConvertWarning>,
    ) -> Result<Self, ConvertError> {
        if node_type(node) != Some("ObjectExpression") {
            return Err(ConvertError::InvalidMemberTable { position });
        }
        let Some(properties) = node.get("properties").and_then(Value::as_array) else {
            return Err(ConvertError::InvalidMemberTable { position });
        };

        let mut entries = Vec::with_capacity(properties.len());
        for (index, property) in properties.iter().enumerate() {
            let (Some(key), Some(value)) = (property.get("key"), property.get("value")) else {
                let warning = if node_type(property) == Some("SpreadElement") {
                    ConvertWarning::SkippedSpreadElement { position, index }
                } else {
                    ConvertWarning::SkippedMalformedEntry { position, index }
                };
                warn!(
                    position,
                    index,
                    kind = ?node_type(property),
                    "skipping table entry without a key"
                );
                warnings.push(warning);
                continue;
            };
            entries.push(MemberEntry {
                key: PropertyKey {
                    node: key.clone(),
                    computed: flag(property, "computed"),
                },
                value: value.clone(),
                kind: EntryKind::from_estree(property),
            });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A `function (...) { ... }` value, split into the pieces a method needs.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLiteral {
    pub id: Option<Value>,
    pub params: Vec<Value>,
    /// Statements of the body block.
    pub body: Vec<Value>,
    pub generator: bool,
    pub is_async: bool,
    pub expression: bool,
}

impl FunctionLiteral {
    /// Decode a `FunctionExpression` node. Any other node (arrow functions
    /// included) is not a method-shaped value and yields `None`.
    pub fn from_estree(node: &Value) -> Option<Self> {
        if node_type(node) != Some("FunctionExpression") {
            return None;
        }
        let block = node.get("body")?;
        if node_type(block) != Some("BlockStatement") {
            return None;
        }
        let body = block.get("body").and_then(Value::as_array)?.clone();
        let params = node
            .get("params")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Some(Self {
            id: node.get("id").filter(|id| !id.is_null()).cloned(),
            params,
            body,
            generator: flag(node, "generator"),
            is_async: flag(node, "async"),
            expression: flag(node, "expression"),
        })
    }
}

#[cfg(test)]
#[path = "../tests/input.rs"]
mod tests;
