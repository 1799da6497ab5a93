//! Namespace resolution.
//!
//! Splits a dotted namespace into its segments and produces the statements
//! that make the containing namespace objects exist before the class is
//! attached:
//!
//! ```javascript
//! // "app.ui.widgets.Button"
//! window.app = window.app || {};
//! const app = window.app;
//! app.ui = app.ui || {};
//! app.ui.widgets = app.ui.widgets || {};
//! ```
//!
//! Every guard has the `x = x || {}` shape, so running the output twice never
//! clobbers a namespace object that is already populated. A single-segment
//! namespace (`"Button"`) needs no guards and no alias; the class hangs
//! directly off the global object.

use crate::transforms::ir::IRNode;
use reclass_common::ConvertError;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::debug;

/// Non-empty chain of namespace segments. The last segment names the class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    pub fn parse(dotted: &str) -> Result<Self, ConvertError> {
        if dotted.is_empty() {
            return Err(ConvertError::InvalidNamespace {
                namespace: String::new(),
                reason: "namespace is empty",
            });
        }

        let segments: Vec<String> = dotted.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ConvertError::InvalidNamespace {
                namespace: dotted.to_string(),
                reason: "namespace contains an empty segment",
            });
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First segment, the object hung off the global root.
    pub fn root(&self) -> &str {
        &self.segments[0]
    }

    /// Last segment, the class's local name.
    pub fn class_name(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// Segments of the containing namespace chain (all but the last).
    pub fn containers(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the class lives inside a namespace object rather than
    /// directly on the global root.
    pub fn is_qualified(&self) -> bool {
        self.segments.len() > 1
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Root segments that already have a `const` alias in the current run.
#[derive(Clone, Debug, Default)]
pub struct AliasSet {
    names: FxHashSet<String>,
}

impl AliasSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name`; returns `false` if it was already aliased.
    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Builds guards, aliases and accessors against one global object.
#[derive(Copy, Clone, Debug)]
pub struct NamespaceResolver<'a> {
    global_object: &'a str,
}

impl<'a> NamespaceResolver<'a> {
    pub const fn new(global_object: &'a str) -> Self {
        Self { global_object }
    }

    /// Guard and alias statements for the containing chain of `path`, in
    /// root-to-leaf order.
    ///
    /// The root guard reads through the global object; the alias follows it
    /// immediately so that every later guard goes through the alias.
    pub fn resolve(&self, path: &NamespacePath, aliases: &mut AliasSet) -> Vec<IRNode> {
        let mut statements = Vec::new();
        if !path.is_qualified() {
            debug!(namespace = %path, "unqualified namespace, no guards");
            return statements;
        }

        let root = path.root();
        statements.push(Self::guard(self.global_member(root)));
        if let Some(alias) = self.alias(root, aliases) {
            statements.push(alias);
        }

        for depth in 2..path.len() {
            let prefix = &path.segments()[..depth];
            statements.push(Self::guard(self.accessor(prefix, aliases)));
        }

        debug!(
            namespace = %path,
            statements = statements.len(),
            "resolved namespace guards"
        );
        statements
    }

    /// `const root = window.root;`, or `None` when `root` already has an
    /// alias in this run.
    pub fn alias(&self, root: &str, aliases: &mut AliasSet) -> Option<IRNode> {
        if !aliases.insert(root) {
            debug!(root, "reusing existing namespace alias");
            return None;
        }
        Some(IRNode::const_decl(root, self.global_member(root)))
    }

    /// Expression reaching the object named by `segments`.
    ///
    /// Rooted at the alias when the first segment has one, otherwise at the
    /// global object.
    pub fn accessor<S: AsRef<str>>(&self, segments: &[S], aliases: &AliasSet) -> IRNode {
        let Some((first, rest)) = segments.split_first() else {
            return IRNode::id(self.global_object);
        };
        let first = first.as_ref();
        let base = if aliases.contains(first) {
            IRNode::id(first)
        } else {
            self.global_member(first)
        };
        IRNode::member_chain(base, rest)
    }

    fn global_member(&self, name: &str) -> IRNode {
        IRNode::prop(IRNode::id(self.global_object), name)
    }

    /// `target = target || {};`
    fn guard(target: IRNode) -> IRNode {
        IRNode::expr_stmt(IRNode::assign(
            target.clone(),
            IRNode::logical_or(target, IRNode::EmptyObject),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/namespace.rs"]
mod tests;
