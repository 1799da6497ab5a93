//! Program generation.
//!
//! Top-level driver of one conversion: validates the call shape, resolves
//! the namespace, builds the class shell, wires the superclass, fills in the
//! static and instance members and returns the finished program.
//!
//! Top-level statement order is fixed:
//!
//! 1. namespace guards and the root alias
//! 2. superclass namespace alias (extended classes only)
//! 3. the class declaration
//! 4. static data assignments

use crate::input::{MemberTable, namespace_literal};
use crate::transforms::class_shell::ClassShellBuilder;
use crate::transforms::context::ClassContext;
use crate::transforms::estree_printer::ESTreePrinter;
use crate::transforms::extends::ExtendedClassWirer;
use crate::transforms::instance_members::InstanceMemberAssembler;
use crate::transforms::ir::IRProgram;
use crate::transforms::namespace::{NamespacePath, NamespaceResolver};
use crate::transforms::static_members::StaticMemberAssembler;
use reclass_common::{ConvertError, ConvertOptions, ConvertWarning};
use serde_json::Value;
use tracing::{debug, debug_span};

/// A finished conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertOutput {
    pub program: IRProgram,
    /// Conditions recovered in place during the run.
    pub warnings: Vec<ConvertWarning>,
}

impl ConvertOutput {
    /// The program as an ESTree `Program` node.
    pub fn to_estree(&self) -> Value {
        ESTreePrinter::new().emit_program(&self.program)
    }
}

pub struct ProgramGenerator<'a> {
    options: &'a ConvertOptions,
}

impl<'a> ProgramGenerator<'a> {
    pub const fn new(options: &'a ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert the argument nodes of one class-definition call.
    ///
    /// Valid shapes are `(namespace, instance)` and
    /// `(namespace, statics, instance)`.
    pub fn build(&self, parameters: &[Value]) -> Result<ConvertOutput, ConvertError> {
        let (namespace, statics, instance) = match parameters {
            [] => return Err(ConvertError::MissingParameters),
            [namespace, instance] => (namespace, None, instance),
            [namespace, statics, instance] => (namespace, Some(statics), instance),
            _ => {
                return Err(ConvertError::InvalidArity {
                    found: parameters.len(),
                });
            }
        };

        let namespace = namespace_literal(namespace)?;
        let path = NamespacePath::parse(namespace)?;

        let span = debug_span!("convert_class", namespace = %path);
        let _guard = span.enter();

        let mut warnings = Vec::new();
        let static_table = statics
            .map(|node| MemberTable::from_estree(node, 1, &mut warnings))
            .transpose()?;
        let instance_table =
            MemberTable::from_estree(instance, parameters.len() - 1, &mut warnings)?;

        let mut context = ClassContext::new();
        let resolver = NamespaceResolver::new(&self.options.global_object);

        let mut body = resolver.resolve(&path, &mut context.aliases);
        let mut shell = ClassShellBuilder::build(&path, resolver, &context);

        let wired =
            ExtendedClassWirer::new(resolver).wire(&mut shell, self.options, &mut context)?;
        body.extend(wired.statements);
        warnings.extend(wired.warning);

        let static_data = match &static_table {
            Some(table) => StaticMemberAssembler::assemble(table, shell.members_mut(), &context),
            None => Vec::new(),
        };
        InstanceMemberAssembler::new(self.options).assemble(
            &instance_table,
            shell.members_mut(),
            &mut context,
        );

        let class_target = shell.target.clone();
        body.push(shell.into_statement());
        body.extend(StaticMemberAssembler::trailer_statements(
            &class_target,
            static_data,
        ));

        debug!(
            statements = body.len(),
            warnings = warnings.len(),
            "generated program"
        );
        Ok(ConvertOutput {
            program: IRProgram { body },
            warnings,
        })
    }
}

/// Convert the argument nodes of one class-definition call.
pub fn convert_class_call(
    arguments: &[Value],
    options: &ConvertOptions,
) -> Result<ConvertOutput, ConvertError> {
    ProgramGenerator::new(options).build(arguments)
}

/// Convert an ESTree `CallExpression` node. A call without an `arguments`
/// list is missing its parameters.
pub fn convert_call_expression(
    call: &Value,
    options: &ConvertOptions,
) -> Result<ConvertOutput, ConvertError> {
    let arguments = call
        .get("arguments")
        .and_then(Value::as_array)
        .ok_or(ConvertError::MissingParameters)?;
    convert_class_call(arguments, options)
}

#[cfg(test)]
#[path = "../../tests/program.rs"]
mod tests;
