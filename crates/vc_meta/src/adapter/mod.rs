//! Uniform property access over beans, maps and custom containers.
//!
//! An adapter is a stateless strategy: it receives the object with every
//! call and never owns it. [`Adapter::resolve`] picks one per object:
//!
//! 1. the object's own adapter, see [`Object::self_adapter`];
//! 2. the adapter of the context's [`AdapterFactory`], if it supports the object;
//! 3. [`MapAdapter`] for maps;
//! 4. [`BeanAdapter`] for everything else, lists and arrays included.

// -----------------------------------------------------------------------------
// Modules

mod bean;
mod collection;
mod factory;
mod indexed;
mod map;

// -----------------------------------------------------------------------------
// Exports

pub use bean::BeanAdapter;
pub use collection::CollectionAdapter;
pub use factory::{AdapterFactory, AdapterRegistry, DefaultAdapterFactory};
pub use map::MapAdapter;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::object::ObjectRef;
use crate::path::Segment;
use crate::{MetaContext, MetaError, Object, Type, Value};

// -----------------------------------------------------------------------------
// ObjectAdapter

/// Get/set access to the properties of one kind of object.
///
/// `segment` is a single path segment; adapters never recurse. A segment
/// with a bracket (`items[0]`, or `[0]` on the object itself) addresses an
/// element of a container property.
pub trait ObjectAdapter: Send + Sync {
    /// Reads a property; `Ok(None)` means it holds `None`.
    fn get<'o>(
        &self,
        object: &'o dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<Option<Value<'o>>, MetaError>;

    /// Borrows a property mutably, to descend into it.
    fn get_mut<'o>(
        &self,
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<Option<&'o mut dyn Object>, MetaError>;

    /// Writes a property; `None` writes null.
    fn set(
        &self,
        object: &mut dyn Object,
        segment: &Segment<'_>,
        value: Option<Box<dyn Object>>,
        ctx: &MetaContext,
    ) -> Result<(), MetaError>;

    /// Readable property names, sorted.
    fn getter_names(&self, object: &dyn Object, ctx: &MetaContext) -> Vec<String>;

    /// Writable property names, sorted.
    fn setter_names(&self, object: &dyn Object, ctx: &MetaContext) -> Vec<String>;

    fn getter_type(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> Option<Type>;

    fn setter_type(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> Option<Type>;

    fn has_getter(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> bool;

    fn has_setter(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> bool;

    /// Appends an element to a collection.
    fn add(
        &self,
        object: &mut dyn Object,
        element: Box<dyn Object>,
        ctx: &MetaContext,
    ) -> Result<(), MetaError> {
        let _ = (element, ctx);
        Err(unsupported(object, "add"))
    }

    /// Appends every element to a collection.
    fn add_all(
        &self,
        object: &mut dyn Object,
        elements: Vec<Box<dyn Object>>,
        ctx: &MetaContext,
    ) -> Result<(), MetaError> {
        let _ = (elements, ctx);
        Err(unsupported(object, "add_all"))
    }

    /// Creates the missing property `segment`, links it into `object` and
    /// returns it.
    fn instantiate_missing_property<'o>(
        &self,
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<&'o mut dyn Object, MetaError>;
}

#[cold]
pub(crate) fn unsupported(object: &dyn Object, operation: &'static str) -> MetaError {
    MetaError::UnsupportedOperation {
        type_name: object.object_type().name(),
        operation,
    }
}

/// Creates a value of `ty` for the missing `property` of `object`.
pub(crate) fn create_missing(
    object: &dyn Object,
    segment: &Segment<'_>,
    property: &str,
    ty: &Type,
    ctx: &MetaContext,
) -> Result<Box<dyn Object>, MetaError> {
    ctx.object_factory()
        .create(ty)
        .map_err(|source| MetaError::VivificationFailed {
            segment: segment.indexed_name().into(),
            type_name: object.object_type().name(),
            property: property.into(),
            source: Box::new(source),
        })
}

#[cold]
pub(crate) fn not_borrowable(
    segment: &Segment<'_>,
    type_name: &'static str,
    property: &str,
) -> MetaError {
    MetaError::NotBorrowable {
        segment: segment.indexed_name().into(),
        type_name,
        property: property.into(),
    }
}

// -----------------------------------------------------------------------------
// Adapter

/// The adapter selected for one object.
#[derive(Clone, Copy)]
pub enum Adapter<'a> {
    Bean(BeanAdapter),
    Map(MapAdapter),
    Custom(&'a dyn ObjectAdapter),
}

impl<'a> Adapter<'a> {
    /// Selects the adapter of `object`.
    ///
    /// # Errors
    ///
    /// Whatever the adapter factory reports for an object it claims to support.
    pub fn resolve(object: &dyn Object, ctx: &'a MetaContext) -> Result<Self, MetaError> {
        if let Some(adapter) = object.self_adapter() {
            log::trace!("`{}` adapts itself", object.object_type());
            return Ok(Self::Custom(adapter));
        }
        let factory = ctx.adapter_factory();
        if factory.supports(object) {
            log::trace!("`{}` uses a factory adapter", object.object_type());
            return factory.adapter_for(object).map(Self::Custom);
        }
        Ok(match object.object_ref() {
            ObjectRef::Map(_) => Self::Map(MapAdapter),
            _ => Self::Bean(BeanAdapter),
        })
    }

    /// The adapter as a trait object.
    #[inline]
    pub fn as_dyn(&self) -> &dyn ObjectAdapter {
        match self {
            Self::Bean(adapter) => adapter,
            Self::Map(adapter) => adapter,
            Self::Custom(adapter) => *adapter,
        }
    }
}

impl core::fmt::Debug for Adapter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Bean(_) => "Adapter::Bean",
            Self::Map(_) => "Adapter::Map",
            Self::Custom(_) => "Adapter::Custom",
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use super::{Adapter, AdapterRegistry, CollectionAdapter};
    use crate::{Bean, MetaContext, Object};

    #[derive(Bean, Clone, Default)]
    struct Plain {
        _name: String,
    }

    #[test]
    fn resolution_order() {
        let ctx = MetaContext::new();
        let map: HashMap<String, Box<dyn Object>> = HashMap::new();

        assert!(matches!(Adapter::resolve(&map, &ctx), Ok(Adapter::Map(_))));
        assert!(matches!(Adapter::resolve(&Plain::default(), &ctx), Ok(Adapter::Bean(_))));
        assert!(matches!(Adapter::resolve(&vec![1_u8], &ctx), Ok(Adapter::Bean(_))));

        let registry = AdapterRegistry::new().with_type::<Vec<u8>>(CollectionAdapter);
        let ctx = MetaContext::builder().adapter_factory(registry).build();
        assert!(matches!(Adapter::resolve(&vec![1_u8], &ctx), Ok(Adapter::Custom(_))));
        assert!(matches!(Adapter::resolve(&vec![1_u16], &ctx), Ok(Adapter::Bean(_))));
    }
}
