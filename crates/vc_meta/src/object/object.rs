use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::adapter::ObjectAdapter;
use crate::object::{ObjectMut, ObjectOwned, ObjectRef, Type};

// -----------------------------------------------------------------------------
// Object

/// A value that can take part in path navigation.
///
/// `Object` is dyn-compatible; graphs are navigated through `&dyn Object`
/// and `&mut dyn Object`. Implementations are normally generated:
///
/// - scalars, strings and std containers are implemented by this crate;
/// - user structs use `#[derive(Bean)]`.
///
/// `Box<dyn Object>` itself implements `Object` transparently: every method
/// forwards to the boxed value, so a boxed `i32` downcasts to `i32`.
///
/// # Examples
///
/// ```
/// use vc_meta::Object;
///
/// let value: Box<dyn Object> = Box::new(42_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// ```
pub trait Object: Any + Send + Sync {
    /// Casts this value to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Casts this value to `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Casts this value to `Box<dyn Any>`.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Casts this value to `&dyn Object`, unwrapping transparent boxes.
    fn as_object(&self) -> &dyn Object;

    /// Casts this value to `&mut dyn Object`, unwrapping transparent boxes.
    fn as_object_mut(&mut self) -> &mut dyn Object;

    /// Returns the runtime [`Type`] of the value.
    fn object_type(&self) -> Type;

    /// Returns an immutable view of the container shape.
    fn object_ref(&self) -> ObjectRef<'_>;

    /// Returns a mutable view of the container shape.
    fn object_mut(&mut self) -> ObjectMut<'_>;

    /// Returns the owned container shape.
    fn object_owned(self: Box<Self>) -> ObjectOwned;

    /// Deep-clones the value.
    fn clone_object(&self) -> Box<dyn Object>;

    /// Compares two values.
    ///
    /// Returns `None` when the type does not support comparison.
    fn object_eq(&self, other: &dyn Object) -> Option<bool> {
        let _ = other;
        None
    }

    /// Formats the value for debugging.
    fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.object_type().name())
    }

    /// The adapter this value brings along, if it adapts itself.
    ///
    /// Such an adapter takes precedence over every other adapter source.
    fn self_adapter(&self) -> Option<&'static dyn ObjectAdapter> {
        None
    }
}

// -----------------------------------------------------------------------------
// Casting

impl dyn Object {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    pub fn downcast<T: Any>(self: Box<dyn Object>) -> Result<Box<T>, Box<dyn Object>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.into_any().downcast::<T>() {
            Ok(value) => Ok(value),
            // `into_any` forwards through boxes exactly like `as_any`.
            Err(_) => unreachable!("`Object::into_any` disagrees with `Object::as_any`"),
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_meta::Object;
    ///
    /// let value: Box<dyn Object> = Box::new(String::from("hello"));
    /// let value = value.take::<u32>().unwrap_err();
    /// assert_eq!(value.take::<String>().unwrap(), "hello");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Object>) -> Result<T, Box<dyn Object>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Object {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_object(f)
    }
}

impl Clone for Box<dyn Object> {
    #[inline]
    fn clone(&self) -> Self {
        (**self).clone_object()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Object;
    use crate::object::{ObjectKind, TypeKind};

    #[test]
    fn boxed_object_is_transparent() {
        let inner: Box<dyn Object> = Box::new(7_u8);
        let outer: Box<dyn Object> = Box::new(inner);

        assert!(outer.is::<u8>());
        assert_eq!(outer.object_type().kind(), TypeKind::Value);
        assert_eq!(outer.take::<u8>().ok(), Some(7));
    }

    #[test]
    fn clone_and_compare() {
        let list: Box<dyn Object> = Box::new(vec![1_i32, 2, 3]);
        let copy = list.clone();

        assert_eq!(copy.object_ref().kind(), ObjectKind::List);
        assert_eq!(list.object_eq(&*copy), Some(true));
        assert_eq!(list.object_eq(&String::from("x")), Some(false));
        assert_eq!(copy.take::<Vec<i32>>().ok(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn debug_uses_fmt_object() {
        let value: Box<dyn Object> = Box::new(String::from("text"));
        assert_eq!(alloc::format!("{value:?}"), "\"text\"");
    }
}
