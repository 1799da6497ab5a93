//! ESTree builders shared by the integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};

pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

pub fn string(value: &str) -> Value {
    json!({ "type": "Literal", "value": value, "raw": format!("{value:?}") })
}

pub fn number(value: i64) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

pub fn boolean(value: bool) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

/// `this.<name> = <value>;` as an input statement.
pub fn this_assign(name: &str, value: Value) -> Value {
    json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "AssignmentExpression",
            "operator": "=",
            "left": {
                "type": "MemberExpression",
                "object": { "type": "ThisExpression" },
                "property": ident(name),
                "computed": false,
            },
            "right": value,
        },
    })
}

pub fn func(params: &[&str], body: Vec<Value>) -> Value {
    let params: Vec<Value> = params.iter().map(|name| ident(name)).collect();
    json!({
        "type": "FunctionExpression",
        "id": null,
        "params": params,
        "body": { "type": "BlockStatement", "body": body },
        "generator": false,
        "async": false,
        "expression": false,
    })
}

pub fn prop(key: &str, value: Value) -> Value {
    json!({
        "type": "Property",
        "key": ident(key),
        "value": value,
        "kind": "init",
        "computed": false,
        "method": false,
        "shorthand": false,
    })
}

pub fn object(properties: Vec<Value>) -> Value {
    json!({ "type": "ObjectExpression", "properties": properties })
}

pub fn class_call(arguments: Vec<Value>) -> Value {
    json!({
        "type": "CallExpression",
        "callee": {
            "type": "MemberExpression",
            "object": ident("$"),
            "property": ident("Class"),
            "computed": false,
        },
        "arguments": arguments,
    })
}

pub fn program(statements: Vec<Value>) -> Value {
    json!({ "type": "Program", "body": statements, "sourceType": "script" })
}

pub fn expression_statement(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

/// `<object>.<property>` as an output member expression.
pub fn member(object: Value, property: &str) -> Value {
    json!({
        "type": "MemberExpression",
        "object": object,
        "property": ident(property),
        "computed": false,
    })
}

/// `target = target || {};`
pub fn guard(target: Value) -> Value {
    expression_statement(json!({
        "type": "AssignmentExpression",
        "operator": "=",
        "left": target.clone(),
        "right": {
            "type": "LogicalExpression",
            "left": target,
            "operator": "||",
            "right": { "type": "ObjectExpression", "properties": [] },
        },
    }))
}

pub fn const_alias(name: &str, init: Value) -> Value {
    json!({
        "type": "VariableDeclaration",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": ident(name),
            "init": init,
        }],
        "kind": "const",
    })
}

/// The class expression inside `target = class X { ... };`.
pub fn class_expression(program: &Value) -> &Value {
    program["body"]
        .as_array()
        .and_then(|body| {
            body.iter()
                .map(|statement| &statement["expression"]["right"])
                .find(|right| right["type"] == "ClassExpression")
        })
        .expect("program should assign a class expression")
}

pub fn class_members(program: &Value) -> &Vec<Value> {
    class_expression(program)["body"]["body"]
        .as_array()
        .expect("class body")
}
