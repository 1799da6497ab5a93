//! Static member placement.
//!
//! Static methods become `static` methods on the class body. Static data
//! never becomes a static class field; it is assigned after the declaration:
//!
//! ```javascript
//! app.ui.Button = class Button {
//!     static create() { ... }
//! };
//! app.ui.Button.VERSION = "1.0";
//! ```

use crate::input::MemberTable;
use crate::transforms::classify::{DataMember, MemberClassifier};
use crate::transforms::context::ClassContext;
use crate::transforms::ir::{IRClassMember, IRNode};
use tracing::debug;

pub struct StaticMemberAssembler;

impl StaticMemberAssembler {
    /// Append one static method per method entry to `members`, in input
    /// order, and hand back the data entries for top-level placement.
    ///
    /// Static tables never provide the constructor: an entry named like the
    /// constructor key is an ordinary static method.
    pub fn assemble(
        table: &MemberTable,
        members: &mut Vec<IRClassMember>,
        context: &ClassContext,
    ) -> Vec<DataMember> {
        let classified = MemberClassifier::without_constructor().classify(table, context);
        debug!(
            methods = classified.methods.len(),
            data = classified.data.len(),
            "assembling static members"
        );

        members.extend(
            classified
                .methods
                .into_iter()
                .map(|method| IRClassMember::Method(method.into_method(true))),
        );

        classified.data
    }

    /// `Target.member = value;` for each deferred static data member, in order.
    pub fn trailer_statements(class_target: &IRNode, data: Vec<DataMember>) -> Vec<IRNode> {
        data.into_iter()
            .map(|member| {
                IRNode::expr_stmt(IRNode::assign(
                    IRNode::member(class_target.clone(), &member.key),
                    IRNode::Raw(member.value),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/static_members.rs"]
mod tests;
