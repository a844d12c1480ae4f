use alloc::boxed::Box;
use core::fmt;

use crate::Object;
use crate::object::Type;
use crate::ops::ElementError;

/// A collection of unique elements, e.g. `HashSet<T>` and `BTreeSet<T>`.
///
/// Sets have no positions, so paths cannot index into them; they are
/// read through the bean adapter and grown through
/// [`CollectionAdapter`](crate::adapter::CollectionAdapter).
pub trait Set: Object {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an equal element is present.
    fn contains(&self, value: &dyn Object) -> bool;

    /// Inserts an element, returning `false` if it was already present.
    fn insert(&mut self, value: Box<dyn Object>) -> Result<bool, ElementError>;

    /// Removes an equal element, returning `true` if it was present.
    fn remove(&mut self, value: &dyn Object) -> bool;

    /// Returns an iterator over the elements.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_>;

    /// Returns the declared element type.
    fn item_type(&self) -> Type;

    /// Clones the set into a new box.
    fn clone_set(&self) -> Box<dyn Set>;
}

/// A [`Set`] that keeps its elements ordered.
pub trait SortedSet: Set {
    /// Returns the smallest element.
    fn first(&self) -> Option<&dyn Object>;

    /// Returns the largest element.
    fn last(&self) -> Option<&dyn Object>;
}

impl Clone for Box<dyn Set> {
    #[inline]
    fn clone(&self) -> Self {
        (**self).clone_set()
    }
}

impl fmt::Debug for dyn Set {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_object(f)
    }
}
