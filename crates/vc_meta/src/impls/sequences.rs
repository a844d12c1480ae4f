use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::impls::utils::container_type;
use crate::impls::{array_eq, impl_object_cast_fn, list_debug, list_eq};
use crate::object::TypeKind;
use crate::ops::{Array, ElementError, List, replace_slot, to_element};
use crate::{Object, Type, Typed};

// -----------------------------------------------------------------------------
// Vec

impl<T: Typed> Object for Vec<T> {
    impl_object_cast_fn!(List);

    #[inline]
    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(Clone::clone(self))
    }

    #[inline]
    fn object_eq(&self, other: &dyn Object) -> Option<bool> {
        list_eq(self, other)
    }

    #[inline]
    fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list_debug(self, f)
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn type_of() -> Type {
        container_type::<Self>(TypeKind::List)
            .with_default(|| -> Box<dyn Object> { Box::new(Vec::<T>::new()) })
    }
}

impl<T: Typed> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Object> {
        <[T]>::get(self, index).map(|value| value as &dyn Object)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Object> {
        <[T]>::get_mut(self, index).map(|value| value as &mut dyn Object)
    }

    fn set(&mut self, index: usize, value: Box<dyn Object>) -> Result<(), ElementError> {
        let len = <[T]>::len(self);
        replace_slot(<[T]>::get_mut(self, index), index, len, value)
    }

    fn push(&mut self, value: Box<dyn Object>) -> Result<(), ElementError> {
        Vec::push(self, to_element::<T>(value)?);
        Ok(())
    }

    #[inline]
    fn item_type(&self) -> Type {
        T::type_of()
    }

    #[inline]
    fn clone_list(&self) -> Box<dyn List> {
        Box::new(Clone::clone(self))
    }
}

// -----------------------------------------------------------------------------
// VecDeque

impl<T: Typed> Object for VecDeque<T> {
    impl_object_cast_fn!(List);

    #[inline]
    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(Clone::clone(self))
    }

    #[inline]
    fn object_eq(&self, other: &dyn Object) -> Option<bool> {
        list_eq(self, other)
    }

    #[inline]
    fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list_debug(self, f)
    }
}

impl<T: Typed> Typed for VecDeque<T> {
    fn type_of() -> Type {
        container_type::<Self>(TypeKind::List)
            .with_default(|| -> Box<dyn Object> { Box::new(VecDeque::<T>::new()) })
    }
}

impl<T: Typed> List for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Object> {
        VecDeque::get(self, index).map(|value| value as &dyn Object)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Object> {
        VecDeque::get_mut(self, index).map(|value| value as &mut dyn Object)
    }

    fn set(&mut self, index: usize, value: Box<dyn Object>) -> Result<(), ElementError> {
        let len = VecDeque::len(self);
        replace_slot(VecDeque::get_mut(self, index), index, len, value)
    }

    fn push(&mut self, value: Box<dyn Object>) -> Result<(), ElementError> {
        VecDeque::push_back(self, to_element::<T>(value)?);
        Ok(())
    }

    #[inline]
    fn item_type(&self) -> Type {
        T::type_of()
    }

    #[inline]
    fn clone_list(&self) -> Box<dyn List> {
        Box::new(Clone::clone(self))
    }
}

// -----------------------------------------------------------------------------
// Arrays

macro_rules! impl_object_for_array {
    ($ty:ty, [$($generics:tt)*] $(, $default:expr)?) => {
        impl<$($generics)*> Object for $ty {
            impl_object_cast_fn!(Array);

            #[inline]
            fn clone_object(&self) -> Box<dyn Object> {
                Box::new(Clone::clone(self))
            }

            #[inline]
            fn object_eq(&self, other: &dyn Object) -> Option<bool> {
                array_eq(self, other)
            }

            fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(<dyn Array>::iter(self)).finish()
            }
        }

        impl<$($generics)*> Typed for $ty {
            fn type_of() -> Type {
                container_type::<Self>(TypeKind::Array)$(.with_default($default))?
            }
        }

        impl<$($generics)*> Array for $ty {
            #[inline]
            fn len(&self) -> usize {
                <[T]>::len(self)
            }

            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Object> {
                <[T]>::get(self, index).map(|value| value as &dyn Object)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Object> {
                <[T]>::get_mut(self, index).map(|value| value as &mut dyn Object)
            }

            fn set(&mut self, index: usize, value: Box<dyn Object>) -> Result<(), ElementError> {
                let len = <[T]>::len(self);
                replace_slot(<[T]>::get_mut(self, index), index, len, value)
            }

            #[inline]
            fn item_type(&self) -> Type {
                T::type_of()
            }
        }
    };
}

impl_object_for_array!([T; N], [T: Typed, const N: usize]);
impl_object_for_array!(Box<[T]>, [T: Typed], || -> Box<dyn Object> {
    Box::new(Box::<[T]>::default())
});

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;

    use crate::Object;
    use crate::object::ObjectMut;
    use crate::ops::{ElementError, List};

    #[test]
    fn list_set_requires_existing_position() {
        let mut list = vec![1_i32, 2];
        let list: &mut dyn List = &mut list;

        list.set(1, Box::new(5_i32)).unwrap();
        assert_eq!(
            list.set(2, Box::new(6_i32)),
            Err(ElementError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(list.get(1).and_then(|v| v.downcast_ref::<i32>()), Some(&5));
    }

    #[test]
    fn deque_push_and_reject() {
        let mut deque: VecDeque<String> = VecDeque::new();
        List::push(&mut deque, Box::new(String::from("a"))).unwrap();
        let err = List::push(&mut deque, Box::new(1_u8)).unwrap_err();
        assert!(matches!(err, ElementError::Incompatible { .. }));
        assert_eq!(deque.len(), 1);
    }

    #[test]
    fn arrays_write_in_place() {
        let mut tags: Box<[String]> = Box::new([String::from("Coder"), String::from("Architect")]);
        let ObjectMut::Array(array) = tags.object_mut() else {
            panic!("expected an array");
        };
        array.set(0, Box::new(String::from("X"))).unwrap();
        assert!(array.set(2, Box::new(String::from("Y"))).is_err());
        assert_eq!(&*tags, &[String::from("X"), String::from("Architect")]);
    }
}
