use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;

use crate::class::InvokeError;
use crate::factory::InstantiateError;
use crate::ops::ElementError;

// -----------------------------------------------------------------------------
// MetaError

/// An error raised while navigating an object graph.
///
/// Broken reads never produce an error; they return `Ok(None)`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MetaError {
    #[error("there is no {role} for property `{property}` in `{type_name}`")]
    AccessorNotFound {
        role: &'static str,
        type_name: &'static str,
        property: String,
    },

    #[error("could not {action} property `{property}` of `{type_name}`")]
    PropertyAccessFailed {
        action: &'static str,
        type_name: &'static str,
        property: String,
        #[source]
        source: InvokeError,
    },

    #[error("cannot index `{type_name}` with `{segment}`: it is not a list, array or map")]
    NotIndexable {
        segment: String,
        type_name: &'static str,
    },

    #[error("index {index} in `{segment}` is out of range for `{type_name}` of length {len}")]
    IndexOutOfRange {
        segment: String,
        type_name: &'static str,
        index: usize,
        len: usize,
    },

    #[error("`{index}` in `{segment}` is not a valid index into `{type_name}`")]
    InvalidIndex {
        segment: String,
        type_name: &'static str,
        index: String,
    },

    #[error("key `{key}` in `{segment}` is absent from `{type_name}`")]
    KeyAbsentOnWrite {
        segment: String,
        type_name: &'static str,
        key: String,
    },

    #[error(
        "error instantiating `{type_name}` with invalid types ({arg_types}) or values ({arg_values})"
    )]
    InstantiationFailed {
        type_name: &'static str,
        arg_types: String,
        arg_values: String,
        #[source]
        source: InstantiateError,
    },

    #[error("cannot create the missing `{property}` of `{type_name}` in `{segment}`")]
    VivificationFailed {
        segment: String,
        type_name: &'static str,
        property: String,
        #[source]
        source: Box<MetaError>,
    },

    #[error("property `{property}` of `{type_name}` in `{segment}` cannot be borrowed mutably")]
    NotBorrowable {
        segment: String,
        type_name: &'static str,
        property: String,
    },

    #[error("`{type_name}` does not support {operation}")]
    UnsupportedOperation {
        type_name: &'static str,
        operation: &'static str,
    },

    #[error("error parsing property name `{method}`: it does not start with 'is', 'get' or 'set'")]
    MalformedPropertyName { method: String },

    #[error("`{type_name}` rejected the value written to `{segment}`")]
    IncompatibleValue {
        segment: String,
        type_name: &'static str,
        #[source]
        source: ElementError,
    },

    #[error("no adapter is available for `{type_name}`")]
    AdapterUnavailable { type_name: &'static str },
}
