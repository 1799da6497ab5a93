//! Locating class-definition calls in a parsed program.
//!
//! Walks an ESTree tree and collects every `CallExpression` whose callee is
//! the factory member chain (by default `$.Class`), in document order.

use crate::input::node_type;
use reclass_common::limits::MAX_LOCATOR_DEPTH;
use serde_json::Value;
use tracing::warn;

/// Default factory callee of legacy class definitions.
pub const DEFAULT_FACTORY: &str = "$.Class";

/// Every call to `factory` inside `program`, outermost first.
pub fn locate_class_calls<'a>(program: &'a Value, factory: &str) -> Vec<&'a Value> {
    let segments: Vec<&str> = factory.split('.').collect();
    let mut calls = Vec::new();
    if segments.iter().any(|segment| segment.is_empty()) {
        warn!(factory, "factory callee has an empty segment");
        return calls;
    }
    visit(program, &segments, 0, &mut calls);
    calls
}

fn visit<'a>(node: &'a Value, segments: &[&str], depth: usize, calls: &mut Vec<&'a Value>) {
    if depth > MAX_LOCATOR_DEPTH {
        warn!(depth, "tree nested too deeply, skipping subtree");
        return;
    }

    match node {
        Value::Object(fields) => {
            if node_type(node) == Some("CallExpression")
                && node
                    .get("callee")
                    .is_some_and(|callee| callee_matches(callee, segments))
            {
                calls.push(node);
            }
            for child in fields.values() {
                visit(child, segments, depth + 1, calls);
            }
        }
        Value::Array(items) => {
            for child in items {
                visit(child, segments, depth + 1, calls);
            }
        }
        _ => {}
    }
}

/// Whether `callee` is the member chain `segments[0].segments[1]...`.
fn callee_matches(callee: &Value, segments: &[&str]) -> bool {
    let Some((last, rest)) = segments.split_last() else {
        return false;
    };

    if rest.is_empty() {
        return is_identifier(callee, last);
    }

    node_type(callee) == Some("MemberExpression")
        && !callee.get("computed").and_then(Value::as_bool).unwrap_or(false)
        && callee
            .get("property")
            .is_some_and(|property| is_identifier(property, last))
        && callee
            .get("object")
            .is_some_and(|object| callee_matches(object, rest))
}

fn is_identifier(node: &Value, name: &str) -> bool {
    node_type(node) == Some("Identifier") && node.get("name").and_then(Value::as_str) == Some(name)
}

#[cfg(test)]
#[path = "../tests/call_site.rs"]
mod tests;
