//! Lowered IR for the class conversion.
//!
//! The assemblers build these nodes instead of raw ESTree JSON. The
//! `ESTreePrinter` walks the finished tree and produces the ESTree program
//! handed to a renderer.
//!
//! Subtrees copied from the input (method bodies, parameters, data values,
//! key nodes) are carried as `IRNode::Raw` and printed unchanged.

use crate::input::{FunctionLiteral, PropertyKey};
use serde_json::Value;

const CONSTRUCTOR_NAME: &str = "constructor";

/// Intermediate Representation node for the generated program
#[derive(Clone, Debug, PartialEq)]
pub enum IRNode {
    // =========================================================================
    // Expressions
    // =========================================================================
    /// Identifier: `app`, `window`
    Identifier(String),

    /// `this`
    This,

    /// Property access: `object.property`
    PropertyAccess { object: Box<Self>, property: String },

    /// Element access: `object[index]`
    ElementAccess { object: Box<Self>, index: Box<Self> },

    /// Assignment: `target = value`
    Assign { target: Box<Self>, value: Box<Self> },

    /// Logical OR: `left || right`
    LogicalOr { left: Box<Self>, right: Box<Self> },

    /// Empty object literal: `{}`
    EmptyObject,

    /// Class expression: `class Name extends Base { ... }`
    ClassExpr(Box<IRClass>),

    // =========================================================================
    // Statements
    // =========================================================================
    /// Expression statement: `expr;`
    ExpressionStatement(Box<Self>),

    /// Constant declaration: `const name = initializer;`
    ConstDecl { name: String, initializer: Box<Self> },

    // =========================================================================
    // Special
    // =========================================================================
    /// Input subtree copied verbatim
    Raw(Value),
}

/// Class expression payload.
#[derive(Clone, Debug, PartialEq)]
pub struct IRClass {
    pub name: String,
    pub super_class: Option<IRNode>,
    pub members: Vec<IRClassMember>,
}

/// Member of a class body.
#[derive(Clone, Debug, PartialEq)]
pub enum IRClassMember {
    Method(IRMethod),
    Field(IRField),
}

impl IRClassMember {
    pub fn is_constructor(&self) -> bool {
        matches!(self, Self::Method(method) if method.kind == IRMethodKind::Constructor)
    }

    pub fn as_method(&self) -> Option<&IRMethod> {
        match self {
            Self::Method(method) => Some(method),
            Self::Field(_) => None,
        }
    }

    pub fn as_field(&self) -> Option<&IRField> {
        match self {
            Self::Field(field) => Some(field),
            Self::Method(_) => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IRMethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

impl IRMethodKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constructor => "constructor",
            Self::Method => "method",
            Self::Get => "get",
            Self::Set => "set",
        }
    }
}

/// Method definition inside a class body.
#[derive(Clone, Debug, PartialEq)]
pub struct IRMethod {
    pub key: IRNode,
    pub computed: bool,
    pub is_static: bool,
    pub kind: IRMethodKind,
    pub function: IRFunction,
}

impl IRMethod {
    /// `constructor(...) { ... }` built from `function`.
    pub fn constructor(function: IRFunction) -> Self {
        Self {
            key: IRNode::id(CONSTRUCTOR_NAME),
            computed: false,
            is_static: false,
            kind: IRMethodKind::Constructor,
            function,
        }
    }
}

/// Field declaration inside a class body: `key = value;`
#[derive(Clone, Debug, PartialEq)]
pub struct IRField {
    pub key: IRNode,
    pub computed: bool,
    pub is_static: bool,
    pub value: Option<IRNode>,
}

/// Function payload of a method.
#[derive(Clone, Debug, PartialEq)]
pub struct IRFunction {
    pub id: Option<Value>,
    pub params: Vec<Value>,
    pub body: Vec<IRNode>,
    pub generator: bool,
    pub is_async: bool,
    pub expression: bool,
}

impl IRFunction {
    /// Function with no parameters and no statements.
    pub const fn empty() -> Self {
        Self {
            id: None,
            params: Vec::new(),
            body: Vec::new(),
            generator: false,
            is_async: false,
            expression: false,
        }
    }

    /// Carry a decoded function literal over, keeping every piece verbatim.
    pub fn from_literal(literal: FunctionLiteral) -> Self {
        Self {
            id: literal.id,
            params: literal.params,
            body: literal.body.into_iter().map(IRNode::Raw).collect(),
            generator: literal.generator,
            is_async: literal.is_async,
            expression: literal.expression,
        }
    }
}

/// Root of the generated tree: top-level statements in emission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IRProgram {
    pub body: Vec<IRNode>,
}

impl IRProgram {
    /// The class declaration statement, if the program has one.
    pub fn class(&self) -> Option<&IRClass> {
        self.body.iter().find_map(|statement| match statement {
            IRNode::ExpressionStatement(expr) => match expr.as_ref() {
                IRNode::Assign { value, .. } => match value.as_ref() {
                    IRNode::ClassExpr(class) => Some(class.as_ref()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
    }
}

// =========================================================================
// Builder helpers for IR construction
// =========================================================================

impl IRNode {
    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a property access
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create an element access
    pub fn elem(object: Self, index: Self) -> Self {
        Self::ElementAccess {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    /// Create an assignment expression
    pub fn assign(target: Self, value: Self) -> Self {
        Self::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    /// Create a logical OR expression: `left || right`
    pub fn logical_or(left: Self, right: Self) -> Self {
        Self::LogicalOr {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create an expression statement
    pub fn expr_stmt(expr: Self) -> Self {
        Self::ExpressionStatement(Box::new(expr))
    }

    /// Create a `const` declaration
    pub fn const_decl(name: impl Into<String>, initializer: Self) -> Self {
        Self::ConstDecl {
            name: name.into(),
            initializer: Box::new(initializer),
        }
    }

    /// Create a class expression
    pub fn class_expr(class: IRClass) -> Self {
        Self::ClassExpr(Box::new(class))
    }

    /// Access the member named by a table key on `object`.
    ///
    /// Identifier keys use dot access, literal and computed keys use bracket
    /// access with the original key node.
    pub fn member(object: Self, key: &PropertyKey) -> Self {
        match key.identifier_name() {
            Some(name) => Self::prop(object, name),
            None => Self::elem(object, Self::Raw(key.node.clone())),
        }
    }

    /// Key node and computed flag for a class member named by `key`.
    ///
    /// An instance member spelled `constructor` (identifier or string key)
    /// would declare the class constructor, so it is keyed as
    /// `["constructor"]` instead.
    pub fn class_member_key(key: &PropertyKey, is_static: bool) -> (Self, bool) {
        if !is_static && key.static_name() == Some(CONSTRUCTOR_NAME) {
            let literal = serde_json::json!({
                "type": "Literal",
                "value": CONSTRUCTOR_NAME,
                "raw": format!("\"{CONSTRUCTOR_NAME}\""),
            });
            return (Self::Raw(literal), true);
        }
        (Self::Raw(key.node.clone()), key.computed)
    }

    /// `root.a.b.c` for `segments = [a, b, c]`.
    pub fn member_chain<S: AsRef<str>>(root: Self, segments: &[S]) -> Self {
        segments
            .iter()
            .fold(root, |object, segment| Self::prop(object, segment.as_ref()))
    }
}
