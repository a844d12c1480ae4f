//! Container views over [`Object`](crate::Object)s.
//!
//! Containers are addressed with string keys and decimal indices, which is
//! exactly what a path segment carries.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod list;
mod map;
mod set;

// -----------------------------------------------------------------------------
// Exports

pub use error::ElementError;
pub use list::{Array, List};
pub use map::{Map, MapKey};
pub use set::{Set, SortedSet};

pub(crate) use list::{replace_slot, to_element};
