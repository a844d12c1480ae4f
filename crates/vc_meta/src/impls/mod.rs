//! [`Object`](crate::Object) implementations for std types.
//!
//! ## Implemented Menu
//!
//! - values: `bool`, `char`, `u8`-`u128`, `i8`-`i128`, `usize`, `isize`,
//!   `f32`, `f64`, `String`
//! - lists: `Vec<T>`, `VecDeque<T>`
//! - arrays: `[T; N]`, `Box<[T]>`
//! - maps: `std::collections::HashMap`, `hashbrown::HashMap`, `BTreeMap`,
//!   keyed by any [`MapKey`](crate::ops::MapKey)
//! - sets: `std::collections::HashSet`, `BTreeSet`
//! - dynamic slots: `Box<dyn Object>`, `Box<dyn List>`, `Box<dyn Map>`, `Box<dyn Set>`
//!
//! Every container shares [`collection_class`], which exposes `is_empty`
//! as the read-only bean property `empty`.

// -----------------------------------------------------------------------------
// Modules

mod dynamic;
mod maps;
mod sequences;
mod sets;
mod utils;
mod values;

// -----------------------------------------------------------------------------
// Exports

pub use utils::{
    array_eq, collection_class, list_debug, list_eq, map_debug, map_eq, set_debug, set_eq,
};

// -----------------------------------------------------------------------------
// Cast functions

/// Implements the casting and shape methods of [`Object`](crate::Object).
macro_rules! impl_object_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        #[inline]
        fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
            self
        }

        #[inline]
        fn into_any(self: ::alloc::boxed::Box<Self>) -> ::alloc::boxed::Box<dyn ::core::any::Any> {
            self
        }

        #[inline]
        fn as_object(&self) -> &dyn $crate::Object {
            self
        }

        #[inline]
        fn as_object_mut(&mut self) -> &mut dyn $crate::Object {
            self
        }

        #[inline]
        fn object_type(&self) -> $crate::Type {
            <Self as $crate::Typed>::type_of()
        }

        #[inline]
        fn object_ref(&self) -> $crate::object::ObjectRef<'_> {
            $crate::object::ObjectRef::$kind(self)
        }

        #[inline]
        fn object_mut(&mut self) -> $crate::object::ObjectMut<'_> {
            $crate::object::ObjectMut::$kind(self)
        }

        #[inline]
        fn object_owned(self: ::alloc::boxed::Box<Self>) -> $crate::object::ObjectOwned {
            $crate::object::ObjectOwned::$kind(self)
        }
    };
}

pub(crate) use impl_object_cast_fn;
