//! Common types and utilities for the reclass class migration tool.
//!
//! This crate provides the vocabulary shared by the emitter and the CLI:
//! - Conversion options (`ConvertOptions`, `TargetDialect`)
//! - Error and warning kinds (`ConvertError`, `ConvertWarning`)
//! - Traversal limits

// Conversion options - passed explicitly into every pipeline stage
pub mod common;
pub use common::{ConvertOptions, DEFAULT_CONSTRUCTOR_KEY, DEFAULT_GLOBAL_OBJECT, TargetDialect};

// Fatal errors and recovered-in-place warnings
pub mod diagnostics;
pub use diagnostics::{ConvertError, ConvertWarning};

// Centralized limits and thresholds
pub mod limits;
