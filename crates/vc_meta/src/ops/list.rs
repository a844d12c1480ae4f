use alloc::boxed::Box;
use core::fmt;

use crate::object::Type;
use crate::ops::ElementError;
use crate::{Object, Typed};

// -----------------------------------------------------------------------------
// List

/// A growable ordered sequence, e.g. `Vec<T>` and `VecDeque<T>`.
///
/// # Examples
///
/// ```
/// use vc_meta::ops::List;
///
/// let mut list: Vec<u32> = vec![1, 2];
/// let list: &mut dyn List = &mut list;
///
/// list.push(Box::new(3_u32)).unwrap();
/// assert_eq!(list.len(), 3);
/// assert!(list.set(7, Box::new(0_u32)).is_err());
/// assert!(list.push(Box::new(String::from("text"))).is_err());
/// ```
pub trait List: Object {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Object>;

    /// Returns the element at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Object>;

    /// Replaces the element at an existing `index`.
    ///
    /// The list never grows through `set`.
    fn set(&mut self, index: usize, value: Box<dyn Object>) -> Result<(), ElementError>;

    /// Appends an element.
    fn push(&mut self, value: Box<dyn Object>) -> Result<(), ElementError>;

    /// Returns the declared element type.
    fn item_type(&self) -> Type;

    /// Clones the list into a new box.
    fn clone_list(&self) -> Box<dyn List>;
}

impl dyn List {
    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Object> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}

impl Clone for Box<dyn List> {
    #[inline]
    fn clone(&self) -> Self {
        (**self).clone_list()
    }
}

// -----------------------------------------------------------------------------
// Array

/// A fixed-length sequence, e.g. `[T; N]` and `Box<[T]>`.
pub trait Array: Object {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Object>;

    /// Returns the element at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Object>;

    /// Replaces the element at `index`.
    fn set(&mut self, index: usize, value: Box<dyn Object>) -> Result<(), ElementError>;

    /// Returns the declared element type.
    fn item_type(&self) -> Type;
}

impl dyn Array {
    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Object> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}

// -----------------------------------------------------------------------------
// Element conversion

/// Converts a boxed value into an element of type `T`.
#[inline]
pub(crate) fn to_element<T: Typed>(value: Box<dyn Object>) -> Result<T, ElementError> {
    T::from_object(value).map_err(|value| ElementError::Incompatible {
        expected: core::any::type_name::<T>(),
        found: value.object_type().name(),
    })
}

/// Writes `value` to `slot`, the common body of every `set` implementation.
#[inline]
pub(crate) fn replace_slot<T: Typed>(
    slot: Option<&mut T>,
    index: usize,
    len: usize,
    value: Box<dyn Object>,
) -> Result<(), ElementError> {
    let slot = slot.ok_or(ElementError::OutOfRange { index, len })?;
    *slot = to_element::<T>(value)?;
    Ok(())
}

impl fmt::Debug for dyn List {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_object(f)
    }
}

impl fmt::Debug for dyn Array {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_object(f)
    }
}
