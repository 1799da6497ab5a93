//! Instance member placement.
//!
//! Lays out the instance half of the class body:
//!
//! 1. the constructor: the table's constructor entry if it has one,
//!    otherwise an empty `constructor() {}` when there is data to initialize;
//! 2. one method per remaining method entry, in input order;
//! 3. data initializers, placed by the dialect's `FieldPlacement`.
//!
//! A class without a constructor entry and without data gets no constructor
//! at all; the default constructor applies.

use crate::input::MemberTable;
use crate::transforms::classify::MemberClassifier;
use crate::transforms::context::ClassContext;
use crate::transforms::field_placement::placement_for;
use crate::transforms::ir::{IRClassMember, IRFunction, IRMethod};
use reclass_common::ConvertOptions;
use tracing::debug;

pub struct InstanceMemberAssembler<'a> {
    options: &'a ConvertOptions,
}

impl<'a> InstanceMemberAssembler<'a> {
    pub const fn new(options: &'a ConvertOptions) -> Self {
        Self { options }
    }

    pub fn assemble(
        &self,
        table: &MemberTable,
        members: &mut Vec<IRClassMember>,
        context: &mut ClassContext,
    ) {
        let classified =
            MemberClassifier::new(&self.options.constructor_key).classify(table, context);
        debug!(
            target = self.options.target.as_str(),
            explicit_constructor = classified.constructor.is_some(),
            methods = classified.methods.len(),
            data = classified.data.len(),
            "assembling instance members"
        );

        let constructor_index = match classified.constructor {
            Some(constructor) => {
                members.push(IRClassMember::Method(constructor.into_constructor()));
                context.constructor_emitted = true;
                Some(members.len() - 1)
            }
            None if !classified.data.is_empty() => {
                Some(Self::existing_or_synthesized_constructor(members, context))
            }
            None => None,
        };

        members.extend(
            classified
                .methods
                .into_iter()
                .map(|method| IRClassMember::Method(method.into_method(false))),
        );

        if let Some(constructor_index) = constructor_index {
            if !classified.data.is_empty() {
                placement_for(self.options.target).place(
                    members,
                    constructor_index,
                    classified.data,
                );
            }
        }
    }

    /// Index of the constructor already in `members`, or of a freshly
    /// appended empty one.
    fn existing_or_synthesized_constructor(
        members: &mut Vec<IRClassMember>,
        context: &mut ClassContext,
    ) -> usize {
        if context.constructor_emitted {
            if let Some(index) = members.iter().position(IRClassMember::is_constructor) {
                return index;
            }
        }

        debug!("synthesizing empty constructor for instance data");
        members.push(IRClassMember::Method(IRMethod::constructor(
            IRFunction::empty(),
        )));
        context.constructor_emitted = true;
        members.len() - 1
    }
}

#[cfg(test)]
#[path = "../../tests/instance_members.rs"]
mod tests;
