use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::impls::impl_object_cast_fn;
use crate::object::TypeKind;
use crate::{Object, Type, Typed};

macro_rules! impl_object_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Object for $ty {
                impl_object_cast_fn!(Value);

                #[inline]
                fn clone_object(&self) -> Box<dyn Object> {
                    Box::new(Clone::clone(self))
                }

                #[inline]
                fn object_eq(&self, other: &dyn Object) -> Option<bool> {
                    Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
                }

                #[inline]
                fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }
            }

            impl Typed for $ty {
                fn type_of() -> Type {
                    Type::new::<Self>(TypeKind::Value).with_default(|| -> Box<dyn Object> {
                        Box::new(<$ty as Default>::default())
                    })
                }
            }
        )*
    };
}

impl_object_for_value!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::object::{ObjectKind, TypeKind};
    use crate::{Object, Type, Typed};

    #[test]
    fn values_are_opaque() {
        let value: &dyn Object = &3.5_f64;
        assert_eq!(value.object_ref().kind(), ObjectKind::Value);
        assert_eq!(value.object_type(), Type::of::<f64>());
        assert_eq!(value.object_eq(&3.5_f64), Some(true));
        assert_eq!(value.object_eq(&3_i32), Some(false));
    }

    #[test]
    fn no_coercion_between_numbers() {
        let boxed: Box<dyn Object> = Box::new(7_u32);
        assert!(<i64 as Typed>::from_object(boxed).is_err());
    }

    #[test]
    fn defaults() {
        let ty = Type::of::<String>();
        assert_eq!(ty.kind(), TypeKind::Value);
        let value = ty.default_fn().map(|f| f()).unwrap();
        assert_eq!(value.take::<String>().unwrap(), "");
    }
}
