use thiserror::Error;

/// A failure inside a field or method shim.
///
/// The navigator wraps it into
/// [`MetaError::PropertyAccessFailed`](crate::MetaError::PropertyAccessFailed)
/// or [`MetaError::InstantiationFailed`](crate::MetaError::InstantiationFailed).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvokeError {
    #[error("expected a target of type `{expected}`, found `{found}`")]
    TargetMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected an argument of type `{expected}`, found `{found}`")]
    IncompatibleArgument {
        expected: &'static str,
        found: &'static str,
    },

    #[error("`{expected}` does not accept null")]
    NullArgument { expected: &'static str },

    #[error("expected {expected} argument(s), found {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("`{name}` is read-only")]
    ReadOnly { name: &'static str },

    #[error("`{name}` has no mutable access path")]
    NoMutableAccess { name: &'static str },

    #[error("`{name}` cannot be invoked as a {role}")]
    WrongRole {
        name: &'static str,
        role: &'static str,
    },
}
