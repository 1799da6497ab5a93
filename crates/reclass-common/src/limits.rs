//! Centralized limits for tree traversal.

/// Maximum nesting depth the call-site locator descends into an ESTree
/// program before giving up on a subtree.
///
/// Parsed programs are trees of JSON objects and arrays; each object or array
/// level counts once. Real-world sources stay far below this.
pub const MAX_LOCATOR_DEPTH: usize = 512;
