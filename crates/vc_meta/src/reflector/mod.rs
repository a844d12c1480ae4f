//! Per-type property accessors.
//!
//! The [`Reflector`] turns the raw [`ClassInfo`](crate::class::ClassInfo)
//! of a type into a [`TypeDescriptor`]: a map from property name to
//! [`Invoker`], built once and shared behind an `Arc`.
//!
//! Property names come from a [`PropertyNamer`]; the default
//! [`BeanNamer`] follows bean conventions (`get_x`, `is_x`, `set_x`).

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod descriptor;
mod invoker;
mod naming;

// -----------------------------------------------------------------------------
// Exports

pub use cache::Reflector;
pub use descriptor::TypeDescriptor;
pub use invoker::{FieldInvoker, Invoker, MethodInvoker};
pub use naming::{BeanNamer, PropertyNamer, is_getter, is_property, is_setter, method_to_property};
