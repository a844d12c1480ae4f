//! Class metadata: the raw material the [`Reflector`](crate::reflector::Reflector)
//! turns into property accessors.
//!
//! A [`ClassInfo`] lists what a type offers without interpreting it:
//!
//! - [`FieldInfo`]: a named field with get/set shims;
//! - [`MethodInfo`]: a getter-, `_mut`- or setter-shaped method;
//! - [`ConstructorInfo`]: an associated function returning `Self`;
//! - [`ParentInfo`]: the embedded parent, for composition-based inheritance.
//!
//! `#[derive(Bean)]` produces the fields and the parent, `#[methods]` on an
//! inherent `impl` block produces methods and constructors.

// -----------------------------------------------------------------------------
// Modules

mod class_info;
mod constructor;
mod error;
mod field;
mod method;

// -----------------------------------------------------------------------------
// Exports

pub use class_info::{ClassInfo, ParentInfo};
pub use constructor::ConstructorInfo;
pub use error::InvokeError;
pub use field::FieldInfo;
pub use method::{MethodBody, MethodInfo};

use alloc::vec::Vec;

use crate::Typed;

// -----------------------------------------------------------------------------
// Traits

/// A struct with class metadata, implemented by `#[derive(Bean)]`.
pub trait Bean: Typed {
    /// Returns the class metadata, built on first use.
    fn class() -> &'static ClassInfo;
}

/// Methods and constructors of a bean, implemented by `#[methods]`.
///
/// `#[derive(Bean)]` only consults this trait under `#[bean(methods)]`.
pub trait BeanMethods {
    /// Getter-, `_mut`- and setter-shaped public methods.
    fn methods() -> Vec<MethodInfo>;

    /// Associated functions returning `Self`, whatever their visibility.
    fn constructors() -> Vec<ConstructorInfo>;
}
