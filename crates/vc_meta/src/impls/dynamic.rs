use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::adapter::ObjectAdapter;
use crate::object::{Abstract, ObjectMut, ObjectOwned, ObjectRef};
use crate::ops::{List, Map, Set};
use crate::{Object, Type, Typed};

// -----------------------------------------------------------------------------
// Forwarding

/// Implements `Object` for a box by forwarding every call to the boxed value.
macro_rules! impl_object_for_dyn_box {
    ($tr:ident) => {
        impl Object for Box<dyn $tr> {
            #[inline]
            fn as_any(&self) -> &dyn Any {
                (**self).as_any()
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn Any {
                (**self).as_any_mut()
            }

            #[inline]
            fn into_any(self: Box<Self>) -> Box<dyn Any> {
                Object::into_any(*self)
            }

            #[inline]
            fn as_object(&self) -> &dyn Object {
                (**self).as_object()
            }

            #[inline]
            fn as_object_mut(&mut self) -> &mut dyn Object {
                (**self).as_object_mut()
            }

            #[inline]
            fn object_type(&self) -> Type {
                (**self).object_type()
            }

            #[inline]
            fn object_ref(&self) -> ObjectRef<'_> {
                (**self).object_ref()
            }

            #[inline]
            fn object_mut(&mut self) -> ObjectMut<'_> {
                (**self).object_mut()
            }

            #[inline]
            fn object_owned(self: Box<Self>) -> ObjectOwned {
                Object::object_owned(*self)
            }

            #[inline]
            fn clone_object(&self) -> Box<dyn Object> {
                (**self).clone_object()
            }

            #[inline]
            fn object_eq(&self, other: &dyn Object) -> Option<bool> {
                (**self).object_eq(other)
            }

            #[inline]
            fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                (**self).fmt_object(f)
            }

            #[inline]
            fn self_adapter(&self) -> Option<&'static dyn ObjectAdapter> {
                (**self).self_adapter()
            }
        }
    };
}

impl_object_for_dyn_box!(Object);
impl_object_for_dyn_box!(List);
impl_object_for_dyn_box!(Map);
impl_object_for_dyn_box!(Set);

// -----------------------------------------------------------------------------
// Typed

impl Typed for Box<dyn Object> {
    #[inline]
    fn type_of() -> Type {
        Type::any()
    }

    #[inline]
    fn from_object(value: Box<dyn Object>) -> Result<Self, Box<dyn Object>> {
        Ok(value)
    }
}

impl Typed for Box<dyn List> {
    #[inline]
    fn type_of() -> Type {
        Type::abstract_of(Abstract::List)
    }

    fn from_object(value: Box<dyn Object>) -> Result<Self, Box<dyn Object>> {
        match value.object_owned() {
            ObjectOwned::List(list) => Ok(list),
            other => Err(other.into_object()),
        }
    }
}

impl Typed for Box<dyn Map> {
    #[inline]
    fn type_of() -> Type {
        Type::abstract_of(Abstract::Map)
    }

    fn from_object(value: Box<dyn Object>) -> Result<Self, Box<dyn Object>> {
        match value.object_owned() {
            ObjectOwned::Map(map) => Ok(map),
            other => Err(other.into_object()),
        }
    }
}

impl Typed for Box<dyn Set> {
    #[inline]
    fn type_of() -> Type {
        Type::abstract_of(Abstract::Set)
    }

    fn from_object(value: Box<dyn Object>) -> Result<Self, Box<dyn Object>> {
        match value.object_owned() {
            ObjectOwned::Set(set) => Ok(set),
            other => Err(other.into_object()),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::object::{ObjectKind, TypeKind};
    use crate::ops::List;
    use crate::{Object, Type, Typed};

    #[test]
    fn boxed_list_accepts_any_list() {
        let value: Box<dyn Object> = Box::new(vec![String::from("a")]);
        let list = <Box<dyn List>>::from_object(value).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.object_ref().kind(), ObjectKind::List);
        assert!(list.as_any().is::<Vec<String>>());

        let rejected = <Box<dyn List>>::from_object(Box::new(1_u8));
        assert!(rejected.unwrap_err().is::<u8>());
    }

    #[test]
    fn dynamic_types_are_abstract() {
        assert_eq!(Type::of::<Box<dyn Object>>().kind(), TypeKind::Any);
        assert!(Type::of::<Box<dyn List>>().is_abstract());
        assert!(Type::of::<Box<dyn Object>>().default_fn().is_none());
    }
}
