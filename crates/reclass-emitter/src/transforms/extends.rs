//! Superclass wiring.
//!
//! Points the class shell at its superclass, resolved against the extended
//! namespace:
//!
//! ```javascript
//! const lib = window.lib;          // only if `lib` has no alias yet
//! app.Button = class Button extends lib.base.Component { ... };
//! ```
//!
//! A root segment shared with the class's own namespace reuses that alias.

use crate::transforms::class_shell::ClassShell;
use crate::transforms::context::ClassContext;
use crate::transforms::ir::IRNode;
use crate::transforms::namespace::{NamespacePath, NamespaceResolver};
use reclass_common::{ConvertError, ConvertOptions, ConvertWarning};
use tracing::{debug, warn};

/// Statements and warnings produced while wiring a superclass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WiredExtends {
    /// Alias declaration for the superclass namespace root, if one was needed.
    pub statements: Vec<IRNode>,
    pub warning: Option<ConvertWarning>,
}

pub struct ExtendedClassWirer<'a> {
    resolver: NamespaceResolver<'a>,
}

impl<'a> ExtendedClassWirer<'a> {
    pub const fn new(resolver: NamespaceResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn wire(
        &self,
        shell: &mut ClassShell,
        options: &ConvertOptions,
        context: &mut ClassContext,
    ) -> Result<WiredExtends, ConvertError> {
        let mut wired = WiredExtends::default();
        if !options.extended {
            return Ok(wired);
        }

        let Some(namespace) = options.extended_namespace() else {
            warn!(class = %shell.class.name, "missing namespace for extended class");
            wired.warning = Some(ConvertWarning::MissingExtendedNamespace);
            return Ok(wired);
        };

        let path = NamespacePath::parse(namespace)?;
        if path.is_qualified() {
            if let Some(alias) = self.resolver.alias(path.root(), &mut context.aliases) {
                wired.statements.push(alias);
            }
        }

        let super_class = self.resolver.accessor(path.segments(), &context.aliases);
        debug!(class = %shell.class.name, superclass = %path, "wired superclass");
        shell.set_super_class(super_class);

        Ok(wired)
    }
}

#[cfg(test)]
#[path = "../../tests/extends.rs"]
mod tests;
