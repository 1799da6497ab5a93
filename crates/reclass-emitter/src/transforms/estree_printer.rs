//! ESTree printer for the lowered IR.
//!
//! Walks IR trees and produces ESTree JSON (the format consumed by
//! astring/escodegen style renderers). Raw input subtrees are emitted as-is.

use crate::transforms::ir::{
    IRClass, IRClassMember, IRField, IRFunction, IRMethod, IRNode, IRProgram,
};
use serde_json::{Value, json};

/// Printer from IR to ESTree JSON.
pub struct ESTreePrinter {
    source_type: &'static str,
}

impl Default for ESTreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ESTreePrinter {
    pub const fn new() -> Self {
        Self {
            source_type: "script",
        }
    }

    /// Print `program` as an ESTree `Program` node.
    pub fn emit_program(&self, program: &IRProgram) -> Value {
        let body: Vec<Value> = program.body.iter().map(|node| self.emit(node)).collect();
        json!({
            "type": "Program",
            "body": body,
            "sourceType": self.source_type,
        })
    }

    pub fn emit(&self, node: &IRNode) -> Value {
        match node {
            IRNode::Identifier(name) => identifier(name),
            IRNode::This => json!({ "type": "ThisExpression" }),
            IRNode::PropertyAccess { object, property } => json!({
                "type": "MemberExpression",
                "object": self.emit(object),
                "property": identifier(property),
                "computed": false,
            }),
            IRNode::ElementAccess { object, index } => json!({
                "type": "MemberExpression",
                "object": self.emit(object),
                "property": self.emit(index),
                "computed": true,
            }),
            IRNode::Assign { target, value } => json!({
                "type": "AssignmentExpression",
                "operator": "=",
                "left": self.emit(target),
                "right": self.emit(value),
            }),
            IRNode::LogicalOr { left, right } => json!({
                "type": "LogicalExpression",
                "left": self.emit(left),
                "operator": "||",
                "right": self.emit(right),
            }),
            IRNode::EmptyObject => json!({ "type": "ObjectExpression", "properties": [] }),
            IRNode::ClassExpr(class) => self.emit_class(class),
            IRNode::ExpressionStatement(expr) => json!({
                "type": "ExpressionStatement",
                "expression": self.emit(expr),
            }),
            IRNode::ConstDecl { name, initializer } => json!({
                "type": "VariableDeclaration",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": identifier(name),
                    "init": self.emit(initializer),
                }],
                "kind": "const",
            }),
            IRNode::Raw(value) => value.clone(),
        }
    }

    fn emit_class(&self, class: &IRClass) -> Value {
        let members: Vec<Value> = class
            .members
            .iter()
            .map(|member| match member {
                IRClassMember::Method(method) => self.emit_method(method),
                IRClassMember::Field(field) => self.emit_field(field),
            })
            .collect();

        json!({
            "type": "ClassExpression",
            "id": identifier(&class.name),
            "superClass": class.super_class.as_ref().map(|base| self.emit(base)),
            "body": {
                "type": "ClassBody",
                "body": members,
            },
        })
    }

    fn emit_method(&self, method: &IRMethod) -> Value {
        json!({
            "type": "MethodDefinition",
            "computed": method.computed,
            "key": self.emit(&method.key),
            "static": method.is_static,
            "kind": method.kind.as_str(),
            "value": self.emit_function(&method.function),
        })
    }

    fn emit_field(&self, field: &IRField) -> Value {
        json!({
            "type": "PropertyDefinition",
            "computed": field.computed,
            "key": self.emit(&field.key),
            "static": field.is_static,
            "value": field.value.as_ref().map(|value| self.emit(value)),
        })
    }

    fn emit_function(&self, function: &IRFunction) -> Value {
        let body: Vec<Value> = function.body.iter().map(|node| self.emit(node)).collect();
        json!({
            "type": "FunctionExpression",
            "id": function.id.clone(),
            "generator": function.generator,
            "expression": function.expression,
            "async": function.is_async,
            "params": function.params.clone(),
            "body": {
                "type": "BlockStatement",
                "body": body,
            },
        })
    }
}

fn identifier(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}
