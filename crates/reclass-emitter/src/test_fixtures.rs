//! ESTree node builders shared by the unit tests.

use crate::input::MemberTable;
use serde_json::{Value, json};

pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

pub fn string(value: &str) -> Value {
    json!({ "type": "Literal", "value": value, "raw": format!("\"{value}\"") })
}

pub fn number(value: i64) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

/// Statement placeholder that is easy to spot in assertions.
pub fn stmt(marker: &str) -> Value {
    json!({
        "type": "ExpressionStatement",
        "expression": { "type": "Identifier", "name": marker },
    })
}

pub fn func(params: &[&str], body: Vec<Value>) -> Value {
    let params: Vec<Value> = params.iter().map(|name| ident(name)).collect();
    json!({
        "type": "FunctionExpression",
        "id": null,
        "expression": false,
        "generator": false,
        "async": false,
        "params": params,
        "body": { "type": "BlockStatement", "body": body },
    })
}

pub fn empty_fn() -> Value {
    func(&[], Vec::new())
}

pub fn arrow() -> Value {
    json!({
        "type": "ArrowFunctionExpression",
        "id": null,
        "expression": true,
        "generator": false,
        "async": false,
        "params": [],
        "body": { "type": "Literal", "value": 1, "raw": "1" },
    })
}

pub fn prop(key: &str, value: Value) -> Value {
    json!({
        "type": "Property",
        "method": false,
        "shorthand": false,
        "computed": false,
        "key": ident(key),
        "value": value,
        "kind": "init",
    })
}

pub fn computed_prop(key: Value, value: Value) -> Value {
    json!({
        "type": "Property",
        "method": false,
        "shorthand": false,
        "computed": true,
        "key": key,
        "value": value,
        "kind": "init",
    })
}

pub fn accessor(kind: &str, key: &str, value: Value) -> Value {
    json!({
        "type": "Property",
        "method": false,
        "shorthand": false,
        "computed": false,
        "key": ident(key),
        "value": value,
        "kind": kind,
    })
}

pub fn spread(argument: Value) -> Value {
    json!({ "type": "SpreadElement", "argument": argument })
}

pub fn object(properties: Vec<Value>) -> Value {
    json!({ "type": "ObjectExpression", "properties": properties })
}

pub fn table(properties: Vec<Value>) -> MemberTable {
    let mut warnings = Vec::new();
    MemberTable::from_estree(&object(properties), 1, &mut warnings)
        .expect("fixture table should decode")
}
