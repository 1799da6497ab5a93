//! Class conversion transforms
//!
//! # Architecture
//!
//! Conversion follows a two-phase approach:
//!
//! 1. **Transform Phase**: the assemblers analyze decoded member tables and
//!    produce IR nodes for the generated program.
//!
//! 2. **Print Phase**: `ESTreePrinter` walks the IR and emits ESTree JSON.
//!
//! Control flows strictly downward, in one synchronous pass:
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | namespace resolution | `namespace` | guards, root alias |
//! | class shell | `class_shell` | `ns.Name = class Name {}` |
//! | superclass | `extends` | `extends` clause, superclass alias |
//! | classification | `classify` | `Method` / `Data` members |
//! | static members | `static_members` | static methods, trailing assignments |
//! | instance members | `instance_members`, `field_placement` | constructor, methods, fields |
//! | orchestration | `program` | `IRProgram` |

pub mod class_shell;
pub mod classify;
pub mod context;
pub mod estree_printer;
pub mod extends;
pub mod field_placement;
pub mod instance_members;
pub mod ir;
pub mod namespace;
pub mod program;
pub mod static_members;

pub use class_shell::{ClassShell, ClassShellBuilder};
pub use classify::{ClassMember, ClassifiedMembers, MemberClassifier};
pub use context::ClassContext;
pub use namespace::{AliasSet, NamespacePath, NamespaceResolver};
