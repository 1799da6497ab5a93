//! Error and warning kinds produced by a conversion run.
//!
//! Every `ConvertError` is fatal and raised synchronously; there are no
//! transient failures to retry. `ConvertWarning`s are recovered in place and
//! returned next to the finished program.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The class-definition call carries no arguments at all.
    #[error("class definition call has no parameters")]
    MissingParameters,

    /// Only the `(namespace, instance)` and `(namespace, static, instance)` shapes are valid.
    #[error("class definition call expects 2 or 3 arguments, found {found}")]
    InvalidArity { found: usize },

    #[error("invalid namespace '{namespace}': {reason}")]
    InvalidNamespace {
        namespace: String,
        reason: &'static str,
    },

    /// A static or instance table argument is not an object literal.
    #[error("argument {position} must be an object literal member table")]
    InvalidMemberTable { position: usize },
}

/// A condition that was recovered in place during conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConvertWarning {
    /// `extended` was requested without a superclass namespace; the class is
    /// emitted unextended.
    MissingExtendedNamespace,
    /// A spread element inside a member table has no key and was dropped.
    SkippedSpreadElement { position: usize, index: usize },
    /// A member-table entry without a key or value was dropped.
    SkippedMalformedEntry { position: usize, index: usize },
}

impl fmt::Display for ConvertWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingExtendedNamespace => {
                write!(f, "missing namespace for extended class")
            }
            Self::SkippedSpreadElement { position, index } => write!(
                f,
                "skipped spread element {index} in argument {position}: spread entries cannot become class members"
            ),
            Self::SkippedMalformedEntry { position, index } => write!(
                f,
                "skipped entry {index} in argument {position}: entry has no key or no value"
            ),
        }
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics.rs"]
mod tests;
