//! Placement of instance data initializers.
//!
//! The two target dialects differ only in where `member = value` ends up:
//!
//! ```javascript
//! // InlineFields
//! class Button {
//!     constructor() { this.label = "Ok"; }
//! }
//!
//! // DeclaredFields
//! class Button {
//!     label = "Ok";
//!     constructor() { }
//! }
//! ```

use crate::transforms::classify::DataMember;
use crate::transforms::ir::{IRClassMember, IRField, IRNode};
use reclass_common::TargetDialect;
use tracing::warn;

/// Places data initializers relative to the constructor at
/// `members[constructor_index]`.
pub trait FieldPlacement {
    fn place(
        &self,
        members: &mut Vec<IRClassMember>,
        constructor_index: usize,
        data: Vec<DataMember>,
    );
}

/// `this.member = value;` appended to the constructor body.
pub struct InsertIntoConstructorBody;

/// `member = value;` field declarations inserted just before the constructor.
pub struct InsertBeforeConstructor;

impl FieldPlacement for InsertIntoConstructorBody {
    fn place(
        &self,
        members: &mut Vec<IRClassMember>,
        constructor_index: usize,
        data: Vec<DataMember>,
    ) {
        let Some(IRClassMember::Method(constructor)) = members.get_mut(constructor_index) else {
            warn!(constructor_index, "no constructor to place fields into");
            return;
        };

        constructor.function.body.extend(data.into_iter().map(|member| {
            IRNode::expr_stmt(IRNode::assign(
                IRNode::member(IRNode::This, &member.key),
                IRNode::Raw(member.value),
            ))
        }));
    }
}

impl FieldPlacement for InsertBeforeConstructor {
    fn place(
        &self,
        members: &mut Vec<IRClassMember>,
        constructor_index: usize,
        data: Vec<DataMember>,
    ) {
        let fields = data.into_iter().map(|member| {
            let (key, computed) = IRNode::class_member_key(&member.key, false);
            IRClassMember::Field(IRField {
                key,
                computed,
                is_static: false,
                value: Some(IRNode::Raw(member.value)),
            })
        });
        members.splice(constructor_index..constructor_index, fields);
    }
}

/// The placement strategy for `target`.
pub fn placement_for(target: TargetDialect) -> &'static dyn FieldPlacement {
    match target {
        TargetDialect::InlineFields => &InsertIntoConstructorBody,
        TargetDialect::DeclaredFields => &InsertBeforeConstructor,
    }
}

#[cfg(test)]
#[path = "../../tests/field_placement.rs"]
mod tests;
