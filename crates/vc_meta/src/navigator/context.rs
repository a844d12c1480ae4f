use alloc::boxed::Box;
use core::fmt;
use std::sync::OnceLock;

use crate::adapter::{AdapterFactory, DefaultAdapterFactory};
use crate::factory::{DefaultObjectFactory, ObjectFactory};
use crate::reflector::{PropertyNamer, Reflector};
use crate::{Navigator, Object};

// -----------------------------------------------------------------------------
// MetaContext

/// Everything a [`Navigator`] needs besides the object: the descriptor
/// cache, the object factory and the adapter factory.
///
/// Contexts are immutable after construction and can be shared freely
/// between threads. Tests usually create their own; other code can use
/// [`MetaContext::global`].
///
/// # Examples
///
/// ```
/// use vc_meta::MetaContext;
/// use vc_meta::adapter::AdapterRegistry;
///
/// let ctx = MetaContext::builder()
///     .adapter_factory(AdapterRegistry::new().with_collections())
///     .build();
/// assert!(ctx.reflector().is_empty());
/// ```
pub struct MetaContext {
    reflector: Reflector,
    object_factory: Box<dyn ObjectFactory>,
    adapter_factory: Box<dyn AdapterFactory>,
}

impl MetaContext {
    /// Creates a context with the default policies.
    #[inline]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[inline]
    pub fn builder() -> MetaContextBuilder {
        MetaContextBuilder::new()
    }

    /// The lazily created process-wide context, with default policies.
    pub fn global() -> &'static MetaContext {
        static GLOBAL: OnceLock<MetaContext> = OnceLock::new();
        GLOBAL.get_or_init(MetaContext::new)
    }

    /// Wraps `object` for navigation.
    #[inline]
    pub fn navigator<'a>(&'a self, object: &'a mut dyn Object) -> Navigator<'a> {
        Navigator::for_object(object, self)
    }

    #[inline]
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    #[inline]
    pub fn object_factory(&self) -> &dyn ObjectFactory {
        &*self.object_factory
    }

    #[inline]
    pub fn adapter_factory(&self) -> &dyn AdapterFactory {
        &*self.adapter_factory
    }
}

impl Default for MetaContext {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MetaContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaContext")
            .field("reflector", &self.reflector)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// MetaContextBuilder

/// Configures a [`MetaContext`]; unset policies keep their defaults.
pub struct MetaContextBuilder {
    reflector: Reflector,
    object_factory: Box<dyn ObjectFactory>,
    adapter_factory: Box<dyn AdapterFactory>,
}

impl MetaContextBuilder {
    fn new() -> Self {
        Self {
            reflector: Reflector::new(),
            object_factory: Box::new(DefaultObjectFactory),
            adapter_factory: Box::new(DefaultAdapterFactory),
        }
    }

    /// Replaces the property naming policy.
    pub fn namer(mut self, namer: impl PropertyNamer + 'static) -> Self {
        self.reflector = Reflector::with_namer(namer);
        self
    }

    pub fn object_factory(mut self, factory: impl ObjectFactory + 'static) -> Self {
        self.object_factory = Box::new(factory);
        self
    }

    pub fn adapter_factory(mut self, factory: impl AdapterFactory + 'static) -> Self {
        self.adapter_factory = Box::new(factory);
        self
    }

    pub fn build(self) -> MetaContext {
        MetaContext {
            reflector: self.reflector,
            object_factory: self.object_factory,
            adapter_factory: self.adapter_factory,
        }
    }
}

impl fmt::Debug for MetaContextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaContextBuilder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;

    use super::MetaContext;
    use crate::factory::ObjectFactory;
    use crate::{MetaError, Object, Type};

    #[test]
    fn global_is_shared() {
        assert!(core::ptr::eq(MetaContext::global(), MetaContext::global()));
    }

    struct Refusing;

    impl ObjectFactory for Refusing {
        fn create_with(
            &self,
            ty: &Type,
            _arg_types: &[Type],
            _args: Vec<Option<Box<dyn Object>>>,
        ) -> Result<Box<dyn Object>, MetaError> {
            Err(MetaError::UnsupportedOperation {
                type_name: ty.name(),
                operation: "instantiation",
            })
        }

        fn is_collection(&self, _ty: &Type) -> bool {
            false
        }
    }

    #[test]
    fn builder_replaces_policies() {
        let ctx = MetaContext::builder().object_factory(Refusing).build();
        let err = ctx.object_factory().create(&Type::of::<u8>()).unwrap_err();
        assert!(matches!(err, MetaError::UnsupportedOperation { .. }));
        assert!(!ctx.object_factory().is_collection(&Type::of::<Vec<u8>>()));
    }
}
