use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock};

use crate::hash::{HashMap, new_map};
use crate::reflector::{BeanNamer, PropertyNamer, TypeDescriptor};
use crate::{Object, Type};

// -----------------------------------------------------------------------------
// Reflector

/// A per-type cache of [`TypeDescriptor`]s.
///
/// Descriptors are built outside the lock. When two threads build the same
/// descriptor concurrently, the first one inserted is kept and both callers
/// receive it.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vc_meta::Bean;
/// use vc_meta::reflector::Reflector;
///
/// #[derive(Bean, Clone)]
/// struct User {
///     name: String,
/// }
///
/// let reflector = Reflector::new();
/// let a = reflector.for_type(<User as vc_meta::Typed>::type_of());
/// let b = reflector.for_object(&User { name: String::new() });
///
/// assert!(Arc::ptr_eq(&a, &b));
/// assert!(a.has_setter("name"));
/// ```
pub struct Reflector {
    namer: Box<dyn PropertyNamer>,
    cache: RwLock<HashMap<TypeId, Arc<TypeDescriptor>>>,
}

impl Reflector {
    /// Creates an empty cache using [`BeanNamer`].
    #[inline]
    pub fn new() -> Self {
        Self::with_namer(BeanNamer)
    }

    /// Creates an empty cache with a custom naming policy.
    pub fn with_namer(namer: impl PropertyNamer + 'static) -> Self {
        Self {
            namer: Box::new(namer),
            cache: RwLock::new(new_map()),
        }
    }

    /// The naming policy.
    #[inline]
    pub fn namer(&self) -> &dyn PropertyNamer {
        &*self.namer
    }

    /// Returns the descriptor of `ty`, building it on first use.
    pub fn for_type(&self, ty: Type) -> Arc<TypeDescriptor> {
        match self.get_by_type_id(ty.id()) {
            Some(descriptor) => descriptor,
            None => self.insert_by_type_id(ty.id(), TypeDescriptor::build(ty, &*self.namer)),
        }
    }

    /// Returns the descriptor of the object's runtime type.
    #[inline]
    pub fn for_object(&self, object: &dyn Object) -> Arc<TypeDescriptor> {
        self.for_type(object.object_type())
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_by_type_id(&self, type_id: TypeId) -> Option<Arc<TypeDescriptor>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    #[cold]
    fn insert_by_type_id(&self, type_id: TypeId, built: TypeDescriptor) -> Arc<TypeDescriptor> {
        log::debug!(
            "built descriptor for `{}`: {} getter(s), {} setter(s)",
            built.ty(),
            built.getter_names().len(),
            built.setter_names().len(),
        );
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = cache.get(&type_id) {
            log::trace!("descriptor for `{}` was built concurrently", built.ty());
            return Arc::clone(existing);
        }
        let descriptor = Arc::new(built);
        cache.insert(type_id, Arc::clone(&descriptor));
        descriptor
    }
}

impl Default for Reflector {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reflector")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use std::thread;

    use crate::reflector::{PropertyNamer, Reflector};
    use crate::{Bean, MetaError, Typed};

    #[derive(Bean, Clone, Default)]
    struct Order {
        id: u64,
        note: Option<String>,
    }

    #[test]
    fn descriptors_are_shared() {
        let reflector = Reflector::new();
        let a = reflector.for_type(Order::type_of());
        let b = reflector.for_object(&Order::default());
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(reflector.len(), 1);
    }

    #[test]
    fn concurrent_first_access() {
        let reflector = Reflector::new();
        let descriptors: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| reflector.for_type(Order::type_of())))
                .collect();
            handles
                .into_iter()
                .filter_map(|handle| handle.join().ok())
                .collect()
        });
        assert_eq!(descriptors.len(), 8);
        assert!(descriptors.iter().all(|d| Arc::ptr_eq(d, &descriptors[0])));
        assert_eq!(reflector.len(), 1);
    }

    #[test]
    fn separate_reflectors_are_isolated() {
        let a = Reflector::new();
        let b = Reflector::new();
        let da = a.for_type(Order::type_of());
        let db = b.for_type(Order::type_of());
        assert!(!Arc::ptr_eq(&da, &db));
    }

    struct FieldsOnlyNamer;

    impl PropertyNamer for FieldsOnlyNamer {
        fn is_getter(&self, _: &str) -> bool {
            false
        }

        fn is_setter(&self, _: &str) -> bool {
            false
        }

        fn property_name(&self, method: &str) -> Result<String, MetaError> {
            Err(MetaError::MalformedPropertyName {
                method: method.into(),
            })
        }

        fn requires_bool(&self, _: &str) -> bool {
            false
        }

        fn is_valid_property(&self, name: &str) -> bool {
            name != "note"
        }
    }

    #[test]
    fn custom_naming_policy() {
        let reflector = Reflector::with_namer(FieldsOnlyNamer);
        let desc = reflector.for_type(Order::type_of());
        assert!(desc.has_getter("id"));
        assert!(!desc.has_getter("note"));
    }
}
