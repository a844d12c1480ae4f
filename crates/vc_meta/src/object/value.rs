use alloc::boxed::Box;
use core::fmt;
use core::ops::Deref;

use crate::{Object, Typed};

/// The result of a property read.
///
/// Field reads and getters returning references borrow from the target;
/// getters returning owned values, and reads through owned intermediates,
/// produce an owned value.
pub enum Value<'a> {
    Ref(&'a dyn Object),
    Owned(Box<dyn Object>),
}

impl<'a> Value<'a> {
    /// Returns `true` if the value does not borrow from the graph.
    #[inline]
    pub const fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Converts the value into an owned box, cloning borrowed values.
    #[inline]
    pub fn into_owned(self) -> Box<dyn Object> {
        match self {
            Self::Ref(value) => value.clone_object(),
            Self::Owned(value) => value,
        }
    }

    /// Releases the borrow on the graph.
    #[inline]
    pub fn detach(self) -> Value<'static> {
        Value::Owned(self.into_owned())
    }

    /// Converts the value into `T`, cloning borrowed values.
    ///
    /// Returns the value as an owned box if it is not a `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_meta::Value;
    ///
    /// let text = String::from("hi");
    /// let value = Value::Ref(&text);
    /// assert_eq!(value.take::<String>().unwrap(), "hi");
    /// ```
    pub fn take<T: Typed>(self) -> Result<T, Box<dyn Object>> {
        match self {
            Self::Ref(value) => match value.downcast_ref::<T>() {
                Some(value) => Ok(value.clone()),
                // Dynamic slots (`Box<dyn Object>`, `Box<dyn List>`...) convert by shape.
                None => T::from_object(value.clone_object()),
            },
            Self::Owned(value) => T::from_object(value),
        }
    }
}

impl Deref for Value<'_> {
    type Target = dyn Object;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Ref(value) => *value,
            Self::Owned(value) => &**value,
        }
    }
}

impl<'a> From<&'a dyn Object> for Value<'a> {
    #[inline]
    fn from(value: &'a dyn Object) -> Self {
        Self::Ref(value)
    }
}

impl From<Box<dyn Object>> for Value<'_> {
    #[inline]
    fn from(value: Box<dyn Object>) -> Self {
        Self::Owned(value)
    }
}

impl fmt::Debug for Value<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_object(f)
    }
}
