use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::HashSet;

use crate::impls::utils::container_type;
use crate::impls::{impl_object_cast_fn, set_debug, set_eq};
use crate::object::TypeKind;
use crate::ops::{ElementError, Set, SortedSet, to_element};
use crate::{Object, Type, Typed};

// -----------------------------------------------------------------------------
// HashSet

impl<T, S> Object for HashSet<T, S>
where
    T: Typed + Eq + Hash,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    impl_object_cast_fn!(Set);

    #[inline]
    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(Clone::clone(self))
    }

    #[inline]
    fn object_eq(&self, other: &dyn Object) -> Option<bool> {
        set_eq(self, other)
    }

    #[inline]
    fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        set_debug(self, f)
    }
}

impl<T, S> Typed for HashSet<T, S>
where
    T: Typed + Eq + Hash,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    fn type_of() -> Type {
        container_type::<Self>(TypeKind::Set)
            .with_default(|| -> Box<dyn Object> { Box::new(<Self as Default>::default()) })
    }
}

impl<T, S> Set for HashSet<T, S>
where
    T: Typed + Eq + Hash,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, value: &dyn Object) -> bool {
        value
            .downcast_ref::<T>()
            .is_some_and(|value| HashSet::contains(self, value))
    }

    fn insert(&mut self, value: Box<dyn Object>) -> Result<bool, ElementError> {
        Ok(HashSet::insert(self, to_element::<T>(value)?))
    }

    fn remove(&mut self, value: &dyn Object) -> bool {
        value
            .downcast_ref::<T>()
            .is_some_and(|value| HashSet::remove(self, value))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_> {
        Box::new(HashSet::iter(self).map(|value| value as &dyn Object))
    }

    #[inline]
    fn item_type(&self) -> Type {
        T::type_of()
    }

    #[inline]
    fn clone_set(&self) -> Box<dyn Set> {
        Box::new(Clone::clone(self))
    }
}

// -----------------------------------------------------------------------------
// BTreeSet

impl<T: Typed + Ord> Object for BTreeSet<T> {
    impl_object_cast_fn!(Set);

    #[inline]
    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(Clone::clone(self))
    }

    #[inline]
    fn object_eq(&self, other: &dyn Object) -> Option<bool> {
        set_eq(self, other)
    }

    #[inline]
    fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        set_debug(self, f)
    }
}

impl<T: Typed + Ord> Typed for BTreeSet<T> {
    fn type_of() -> Type {
        container_type::<Self>(TypeKind::Set)
            .with_default(|| -> Box<dyn Object> { Box::new(BTreeSet::<T>::new()) })
    }
}

impl<T: Typed + Ord> Set for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, value: &dyn Object) -> bool {
        value
            .downcast_ref::<T>()
            .is_some_and(|value| BTreeSet::contains(self, value))
    }

    fn insert(&mut self, value: Box<dyn Object>) -> Result<bool, ElementError> {
        Ok(BTreeSet::insert(self, to_element::<T>(value)?))
    }

    fn remove(&mut self, value: &dyn Object) -> bool {
        value
            .downcast_ref::<T>()
            .is_some_and(|value| BTreeSet::remove(self, value))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_> {
        Box::new(BTreeSet::iter(self).map(|value| value as &dyn Object))
    }

    #[inline]
    fn item_type(&self) -> Type {
        T::type_of()
    }

    #[inline]
    fn clone_set(&self) -> Box<dyn Set> {
        Box::new(Clone::clone(self))
    }
}

impl<T: Typed + Ord> SortedSet for BTreeSet<T> {
    #[inline]
    fn first(&self) -> Option<&dyn Object> {
        BTreeSet::first(self).map(|value| value as &dyn Object)
    }

    #[inline]
    fn last(&self) -> Option<&dyn Object> {
        BTreeSet::last(self).map(|value| value as &dyn Object)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeSet;
    use alloc::string::String;
    use std::collections::HashSet;

    use crate::Object;
    use crate::ops::{Set, SortedSet};

    #[test]
    fn set_membership() {
        let mut set: HashSet<String> = HashSet::new();
        let view: &mut dyn Set = &mut set;

        assert_eq!(view.insert(Box::new(String::from("a"))), Ok(true));
        assert_eq!(view.insert(Box::new(String::from("a"))), Ok(false));
        assert!(view.contains(&String::from("a")));
        assert!(!view.contains(&1_i32));
        assert!(view.remove(&String::from("a")));
        assert!(view.is_empty());
    }

    #[test]
    fn sorted_set_order() {
        let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(SortedSet::first(&set).and_then(|v| v.downcast_ref::<i32>()), Some(&1));
        assert_eq!(SortedSet::last(&set).and_then(|v| v.downcast_ref::<i32>()), Some(&3));
        let other: &dyn Object = &set.clone();
        assert_eq!(set.object_eq(other), Some(true));
    }
}
