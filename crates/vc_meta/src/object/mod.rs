//! The dynamic object model.
//!
//! - [`Object`]: the dyn-safe trait every navigable value implements.
//! - [`Typed`]: static type information and conversion from `Box<dyn Object>`.
//! - [`Type`]: a copyable handle describing one concrete or abstract type.
//! - [`ObjectRef`], [`ObjectMut`], [`ObjectOwned`]: container-shape views.
//! - [`Value`]: a borrowed or owned result of a property read.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod object;
mod typed;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ObjectKind, ObjectMut, ObjectOwned, ObjectRef};
pub use object::Object;
pub use typed::{Abstract, Type, TypeKind, Typed};
pub use value::Value;
