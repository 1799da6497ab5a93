//! Factory-call to class-declaration conversion.
//!
//! The crate takes the argument nodes of a legacy `$.Class("ns.Name", statics?, instance)`
//! call (already parsed into ESTree JSON) and produces an ESTree program that
//! declares the same class with native `class` syntax:
//!
//! ```javascript
//! $.Class("app.ui.Button", { init: function () { this.x = 1; }, label: "Ok" });
//! ```
//!
//! becomes
//!
//! ```javascript
//! window.app = window.app || {};
//! const app = window.app;
//! app.ui = app.ui || {};
//! app.ui.Button = class Button {
//!     constructor() {
//!         this.x = 1;
//!         this.label = "Ok";
//!     }
//! };
//! ```
//!
//! Parsing source text, rendering the resulting tree back to text and file
//! handling are left to the caller.

// Typed view of ESTree argument nodes (member tables, keys, function literals)
pub mod input;

// Finding class-definition calls inside a parsed program
pub mod call_site;

// The conversion pipeline and its IR
pub mod transforms;

#[cfg(test)]
mod test_fixtures;

pub use call_site::{DEFAULT_FACTORY, locate_class_calls};
pub use transforms::estree_printer::ESTreePrinter;
pub use transforms::ir::IRProgram;
pub use transforms::program::{
    ConvertOutput, ProgramGenerator, convert_call_expression, convert_class_call,
};
