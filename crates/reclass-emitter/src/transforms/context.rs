//! Per-run conversion state.
//!
//! One `ClassContext` is created for each class conversion and threaded
//! explicitly through the assemblers. Nothing here outlives the run, so
//! independent conversions never observe each other.

use crate::transforms::namespace::AliasSet;

#[derive(Clone, Debug, Default)]
pub struct ClassContext {
    /// Set once a constructor has been placed in the class body.
    pub constructor_emitted: bool,
    /// Root segments that already have a `const` alias.
    pub aliases: AliasSet,
}

impl ClassContext {
    pub fn new() -> Self {
        Self::default()
    }
}
