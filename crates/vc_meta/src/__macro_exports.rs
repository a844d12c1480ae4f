//! Items used by `#[derive(Bean)]` and `#[methods]`. Not public API.

use alloc::boxed::Box;
use alloc::vec::{IntoIter, Vec};
use core::any::type_name;

pub use alloc::boxed::Box as __Box;
pub use alloc::string::String as __String;
pub use alloc::vec::Vec as __Vec;
pub use std::sync::OnceLock;

pub use crate::adapter::ObjectAdapter;
pub use crate::class::{
    Bean, BeanMethods, ClassInfo, ConstructorInfo, FieldInfo, InvokeError, MethodInfo, ParentInfo,
};
pub use crate::object::{Object, ObjectMut, ObjectOwned, ObjectRef, Type, TypeKind, Typed, Value};

// -----------------------------------------------------------------------------
// Targets

/// Downcasts the receiver of a shim.
#[inline]
pub fn downcast_target<T: Object>(target: &dyn Object) -> Result<&T, InvokeError> {
    match target.downcast_ref::<T>() {
        Some(target) => Ok(target),
        None => Err(InvokeError::TargetMismatch {
            expected: type_name::<T>(),
            found: target.object_type().name(),
        }),
    }
}

/// Downcasts the receiver of a mutable shim.
#[inline]
pub fn downcast_target_mut<T: Object>(target: &mut dyn Object) -> Result<&mut T, InvokeError> {
    let found = target.object_type().name();
    match target.downcast_mut::<T>() {
        Some(target) => Ok(target),
        None => Err(InvokeError::TargetMismatch {
            expected: type_name::<T>(),
            found,
        }),
    }
}

// -----------------------------------------------------------------------------
// Results

#[inline]
pub fn some_ref<T: Object>(value: &T) -> Option<&dyn Object> {
    Some(value)
}

#[inline]
pub fn some_mut<T: Object>(value: &mut T) -> Option<&mut dyn Object> {
    Some(value)
}

#[inline]
pub fn option_ref<T: Object>(value: &Option<T>) -> Option<&dyn Object> {
    value.as_ref().map(|value| value as &dyn Object)
}

#[inline]
pub fn option_mut<T: Object>(value: &mut Option<T>) -> Option<&mut dyn Object> {
    value.as_mut().map(|value| value as &mut dyn Object)
}

#[inline]
pub fn value_ref<T: Object>(value: &T) -> Value<'_> {
    Value::Ref(value)
}

#[inline]
pub fn value_owned<T: Object>(value: T) -> Value<'static> {
    Value::Owned(Box::new(value))
}

// -----------------------------------------------------------------------------
// Arguments

/// Converts a non-nullable argument.
pub fn required_arg<T: Typed>(value: Option<Box<dyn Object>>) -> Result<T, InvokeError> {
    match value {
        Some(value) => T::from_object(value).map_err(|value| InvokeError::IncompatibleArgument {
            expected: type_name::<T>(),
            found: value.object_type().name(),
        }),
        None => Err(InvokeError::NullArgument {
            expected: type_name::<T>(),
        }),
    }
}

/// Converts a nullable argument.
#[inline]
pub fn optional_arg<T: Typed>(value: Option<Box<dyn Object>>) -> Result<Option<T>, InvokeError> {
    value.map(|value| required_arg::<T>(Some(value))).transpose()
}

/// The positional arguments of a constructor call.
pub struct Args {
    iter: IntoIter<Option<Box<dyn Object>>>,
}

impl Args {
    #[inline]
    pub fn new(args: Vec<Option<Box<dyn Object>>>) -> Self {
        Self {
            iter: args.into_iter(),
        }
    }

    #[inline]
    pub fn next_required<T: Typed>(&mut self) -> Result<T, InvokeError> {
        required_arg::<T>(self.iter.next().flatten())
    }

    #[inline]
    pub fn next_optional<T: Typed>(&mut self) -> Result<Option<T>, InvokeError> {
        optional_arg::<T>(self.iter.next().flatten())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    use super::{Args, downcast_target, required_arg};
    use crate::class::InvokeError;
    use crate::Object;

    #[test]
    fn arguments_are_not_coerced() {
        assert_eq!(required_arg::<i64>(Some(Box::new(5_i64))), Ok(5));
        assert_eq!(
            required_arg::<i64>(Some(Box::new(5_u32))),
            Err(InvokeError::IncompatibleArgument {
                expected: "i64",
                found: "u32"
            })
        );
        assert_eq!(
            required_arg::<i64>(None),
            Err(InvokeError::NullArgument { expected: "i64" })
        );
    }

    #[test]
    fn args_in_order() {
        let mut args = Args::new(vec![Some(Box::new(String::from("a")) as Box<dyn Object>), None]);
        assert_eq!(args.next_required::<String>().unwrap(), "a");
        assert_eq!(args.next_optional::<String>().unwrap(), None);
    }

    #[test]
    fn target_mismatch() {
        let target: &dyn Object = &1_u8;
        assert!(downcast_target::<u8>(target).is_ok());
        assert!(matches!(
            downcast_target::<String>(target),
            Err(InvokeError::TargetMismatch { found: "u8", .. })
        ));
    }
}
