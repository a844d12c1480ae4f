use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::adapter::{CollectionAdapter, ObjectAdapter};
use crate::object::ObjectKind;
use crate::{MetaError, Object};

// -----------------------------------------------------------------------------
// AdapterFactory

/// Supplies adapters for objects the built-in adapters should not handle.
pub trait AdapterFactory: Send + Sync {
    /// Returns `true` if this factory has an adapter for `object`.
    fn supports(&self, object: &dyn Object) -> bool;

    /// Returns the adapter for `object`.
    ///
    /// # Errors
    ///
    /// [`MetaError::AdapterUnavailable`] if `object` is not supported.
    fn adapter_for(&self, object: &dyn Object) -> Result<&dyn ObjectAdapter, MetaError>;
}

/// Supports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAdapterFactory;

impl AdapterFactory for DefaultAdapterFactory {
    #[inline]
    fn supports(&self, _object: &dyn Object) -> bool {
        false
    }

    fn adapter_for(&self, object: &dyn Object) -> Result<&dyn ObjectAdapter, MetaError> {
        Err(unavailable(object))
    }
}

#[cold]
fn unavailable(object: &dyn Object) -> MetaError {
    MetaError::AdapterUnavailable {
        type_name: object.object_type().name(),
    }
}

// -----------------------------------------------------------------------------
// AdapterRegistry

type Predicate = Box<dyn Fn(&dyn Object) -> bool + Send + Sync>;

/// An ordered list of predicate and adapter pairs; the first match wins.
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
///
/// let mut list: Vec<i32> = vec![1];
/// ctx.navigator(&mut list).add(2_i32).unwrap();
/// assert_eq!(list, [1, 2]);
/// ```
#[derive(Default)]
pub struct AdapterRegistry {
    entries: Vec<(Predicate, Box<dyn ObjectAdapter>)>,
}

impl AdapterRegistry {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `adapter` for every object matching `predicate`.
    pub fn register(
        &mut self,
        predicate: impl Fn(&dyn Object) -> bool + Send + Sync + 'static,
        adapter: impl ObjectAdapter + 'static,
    ) -> &mut Self {
        self.entries.push((Box::new(predicate), Box::new(adapter)));
        self
    }

    /// Registers `adapter` for values of type `T`.
    #[inline]
    pub fn register_type<T: Object>(&mut self, adapter: impl ObjectAdapter + 'static) -> &mut Self {
        self.register(|object| object.is::<T>(), adapter)
    }

    /// Builder form of [`register`](Self::register).
    #[inline]
    pub fn with(
        mut self,
        predicate: impl Fn(&dyn Object) -> bool + Send + Sync + 'static,
        adapter: impl ObjectAdapter + 'static,
    ) -> Self {
        self.register(predicate, adapter);
        self
    }

    /// Builder form of [`register_type`](Self::register_type).
    #[inline]
    pub fn with_type<T: Object>(mut self, adapter: impl ObjectAdapter + 'static) -> Self {
        self.register_type::<T>(adapter);
        self
    }

    /// Registers [`CollectionAdapter`] for every list and set.
    pub fn with_collections(self) -> Self {
        self.with(
            |object| matches!(object.object_ref().kind(), ObjectKind::List | ObjectKind::Set),
            CollectionAdapter,
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, object: &dyn Object) -> Option<&dyn ObjectAdapter> {
        self.entries
            .iter()
            .find(|(predicate, _)| predicate(object))
            .map(|(_, adapter)| &**adapter)
    }
}

impl AdapterFactory for AdapterRegistry {
    #[inline]
    fn supports(&self, object: &dyn Object) -> bool {
        self.find(object).is_some()
    }

    fn adapter_for(&self, object: &dyn Object) -> Result<&dyn ObjectAdapter, MetaError> {
        self.find(object).ok_or_else(|| unavailable(object))
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::collections::HashSet;

    use super::{AdapterFactory, AdapterRegistry, DefaultAdapterFactory};
    use crate::adapter::{BeanAdapter, CollectionAdapter};
    use crate::MetaError;

    #[test]
    fn default_supports_nothing() {
        let text = String::new();
        assert!(!DefaultAdapterFactory.supports(&text));
        assert!(matches!(
            DefaultAdapterFactory.adapter_for(&text),
            Err(MetaError::AdapterUnavailable { .. })
        ));
    }

    #[test]
    fn first_match_wins() {
        let mut registry = AdapterRegistry::new();
        registry
            .register_type::<String>(BeanAdapter)
            .register(|_| true, CollectionAdapter);
        assert_eq!(registry.len(), 2);

        assert!(registry.supports(&String::new()));
        assert!(registry.supports(&1_u8));
        assert!(registry.adapter_for(&1_u8).is_ok());
    }

    #[test]
    fn collections_only() {
        let registry = AdapterRegistry::new().with_collections();
        assert!(registry.supports(&Vec::<u8>::new()));
        assert!(registry.supports(&HashSet::<String>::new()));
        assert!(!registry.supports(&[0_u8; 2]));
        assert!(!registry.supports(&String::new()));
    }
}
