//! Member classification.
//!
//! Splits a member table into methods and data members, once, into tagged
//! variants. Downstream assemblers match on `ClassMember` instead of looking
//! at value shapes again.
//!
//! An entry is a method iff its value is a `function` expression. Everything
//! else, arrow functions and unrecognized shapes included, is a data member.

use crate::input::{EntryKind, FunctionLiteral, MemberEntry, MemberTable, PropertyKey};
use crate::transforms::context::ClassContext;
use crate::transforms::ir::{IRFunction, IRMethod, IRMethodKind, IRNode};
use serde_json::Value;

/// A method-shaped table entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodMember {
    pub key: PropertyKey,
    pub kind: EntryKind,
    pub function: FunctionLiteral,
}

impl MethodMember {
    /// Class method definition for this entry.
    pub fn into_method(self, is_static: bool) -> IRMethod {
        let kind = match self.kind {
            EntryKind::Init => IRMethodKind::Method,
            EntryKind::Get => IRMethodKind::Get,
            EntryKind::Set => IRMethodKind::Set,
        };
        let (key, computed) = IRNode::class_member_key(&self.key, is_static);
        IRMethod {
            key,
            computed,
            is_static,
            kind,
            function: IRFunction::from_literal(self.function),
        }
    }

    /// The class constructor built from this entry's function.
    pub fn into_constructor(self) -> IRMethod {
        IRMethod::constructor(IRFunction::from_literal(self.function))
    }
}

/// A data-valued table entry.
#[derive(Clone, Debug, PartialEq)]
pub struct DataMember {
    pub key: PropertyKey,
    pub value: Value,
}

/// Result of classifying one entry.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassMember {
    Method(MethodMember),
    Data(DataMember),
}

impl ClassMember {
    pub fn from_entry(entry: &MemberEntry) -> Self {
        match FunctionLiteral::from_estree(&entry.value) {
            Some(function) => Self::Method(MethodMember {
                key: entry.key.clone(),
                kind: entry.kind,
                function,
            }),
            None => Self::Data(DataMember {
                key: entry.key.clone(),
                value: entry.value.clone(),
            }),
        }
    }
}

/// Classified table: both sequences keep input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifiedMembers {
    pub constructor: Option<MethodMember>,
    pub methods: Vec<MethodMember>,
    pub data: Vec<DataMember>,
}

pub struct MemberClassifier<'a> {
    constructor_key: Option<&'a str>,
}

impl<'a> MemberClassifier<'a> {
    /// Classifier that extracts the entry named `constructor_key`.
    pub const fn new(constructor_key: &'a str) -> Self {
        Self {
            constructor_key: Some(constructor_key),
        }
    }

    /// Classifier that never extracts a constructor (static tables).
    pub const fn without_constructor() -> Self {
        Self {
            constructor_key: None,
        }
    }

    pub fn classify(&self, table: &MemberTable, context: &ClassContext) -> ClassifiedMembers {
        let mut classified = ClassifiedMembers::default();

        for entry in &table.entries {
            match ClassMember::from_entry(entry) {
                ClassMember::Method(method) => {
                    if classified.constructor.is_none()
                        && !context.constructor_emitted
                        && self.is_constructor_entry(&method)
                    {
                        classified.constructor = Some(method);
                    } else {
                        classified.methods.push(method);
                    }
                }
                ClassMember::Data(data) => classified.data.push(data),
            }
        }

        classified
    }

    fn is_constructor_entry(&self, method: &MethodMember) -> bool {
        let Some(constructor_key) = self.constructor_key else {
            return false;
        };
        method.kind == EntryKind::Init && method.key.static_name() == Some(constructor_key)
    }
}

#[cfg(test)]
#[path = "../../tests/classify.rs"]
mod tests;
