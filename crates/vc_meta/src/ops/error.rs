use thiserror::Error;

/// An error returned by container writes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ElementError {
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("expected an element of type `{expected}`, found `{found}`")]
    Incompatible {
        expected: &'static str,
        found: &'static str,
    },

    #[error("the key cannot be converted to `{expected}`")]
    InvalidKey { expected: &'static str },
}
