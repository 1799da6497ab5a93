//! Class shell construction.
//!
//! Builds the empty `ns.Widget = class Widget {}` statement that the member
//! assemblers fill in. The shell's member list is the only place class
//! members are written to.

use crate::transforms::context::ClassContext;
use crate::transforms::ir::{IRClass, IRClassMember, IRNode};
use crate::transforms::namespace::{NamespacePath, NamespaceResolver};

/// Class expression plus the namespace slot it is assigned to.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassShell {
    /// Assignment target, e.g. `app.ui.Button` or `window.Button`.
    pub target: IRNode,
    pub class: IRClass,
}

impl ClassShell {
    pub fn members(&self) -> &[IRClassMember] {
        &self.class.members
    }

    pub fn members_mut(&mut self) -> &mut Vec<IRClassMember> {
        &mut self.class.members
    }

    pub fn set_super_class(&mut self, super_class: IRNode) {
        self.class.super_class = Some(super_class);
    }

    /// `target = class Name { ... };`
    pub fn into_statement(self) -> IRNode {
        IRNode::expr_stmt(IRNode::assign(self.target, IRNode::class_expr(self.class)))
    }
}

pub struct ClassShellBuilder;

impl ClassShellBuilder {
    /// Shell for the class named by `path`, attached through whatever alias
    /// the resolver has already emitted for the path's root.
    pub fn build(
        path: &NamespacePath,
        resolver: NamespaceResolver<'_>,
        context: &ClassContext,
    ) -> ClassShell {
        ClassShell {
            target: resolver.accessor(path.segments(), &context.aliases),
            class: IRClass {
                name: class_identifier(path.class_name()),
                super_class: None,
                members: Vec::new(),
            },
        }
    }
}

/// Local class identifier: the segment with its first letter capitalized.
pub fn class_identifier(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/class_shell.rs"]
mod tests;
