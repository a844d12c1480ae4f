use alloc::boxed::Box;
use core::fmt;
use std::sync::OnceLock;

use crate::class::{ClassInfo, InvokeError, MethodInfo};
use crate::object::ObjectRef;
use crate::ops::{Array, List, Map, Set};
use crate::{Object, Type, Typed, Value};

// -----------------------------------------------------------------------------
// Collection class

fn collection_is_empty(target: &dyn Object) -> Result<Option<Value<'_>>, InvokeError> {
    let empty = match target.object_ref() {
        ObjectRef::List(list) => list.is_empty(),
        ObjectRef::Array(array) => array.len() == 0,
        ObjectRef::Map(map) => map.is_empty(),
        ObjectRef::Set(set) => set.is_empty(),
        ObjectRef::Value(_) | ObjectRef::Bean(_) => {
            return Err(InvokeError::TargetMismatch {
                expected: "collection",
                found: target.object_type().name(),
            });
        }
    };
    Ok(Some(Value::Owned(Box::new(empty))))
}

/// The class shared by every container type.
///
/// It has a single `is_empty` getter, so beans wrapping a collection can
/// read its `empty` property like any other.
pub fn collection_class() -> &'static ClassInfo {
    static CELL: OnceLock<ClassInfo> = OnceLock::new();
    CELL.get_or_init(|| {
        ClassInfo::new("collection").with_methods(alloc::vec![MethodInfo::getter(
            "is_empty",
            <bool as Typed>::type_of(),
            collection_is_empty,
        )])
    })
}

// -----------------------------------------------------------------------------
// Equality

/// Compares a list with any object, element by element.
pub fn list_eq(list: &dyn List, other: &dyn Object) -> Option<bool> {
    let ObjectRef::List(other) = other.object_ref() else {
        return Some(false);
    };
    if list.len() != other.len() {
        return Some(false);
    }
    for (a, b) in list.iter().zip(other.iter()) {
        match a.object_eq(b) {
            Some(true) => {}
            result => return result,
        }
    }
    Some(true)
}

/// Compares an array with any object, element by element.
pub fn array_eq(array: &dyn Array, other: &dyn Object) -> Option<bool> {
    let ObjectRef::Array(other) = other.object_ref() else {
        return Some(false);
    };
    if array.len() != other.len() {
        return Some(false);
    }
    for (a, b) in array.iter().zip(other.iter()) {
        match a.object_eq(b) {
            Some(true) => {}
            result => return result,
        }
    }
    Some(true)
}

/// Compares a map with any object, entry by entry.
pub fn map_eq(map: &dyn Map, other: &dyn Object) -> Option<bool> {
    let ObjectRef::Map(other) = other.object_ref() else {
        return Some(false);
    };
    if map.len() != other.len() {
        return Some(false);
    }
    for key in map.keys() {
        let (Some(a), Some(b)) = (map.get(&key), other.get(&key)) else {
            return Some(false);
        };
        match a.object_eq(b) {
            Some(true) => {}
            result => return result,
        }
    }
    Some(true)
}

/// Compares a set with any object by membership.
pub fn set_eq(set: &dyn Set, other: &dyn Object) -> Option<bool> {
    let ObjectRef::Set(other) = other.object_ref() else {
        return Some(false);
    };
    if set.len() != other.len() {
        return Some(false);
    }
    Some(set.iter().all(|item| other.contains(item)))
}

// -----------------------------------------------------------------------------
// Debug

#[inline]
pub fn list_debug(list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(list.iter()).finish()
}

#[inline]
pub fn map_debug(map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let keys = map.keys();
    f.debug_map()
        .entries(keys.iter().map(|key| (key, map.get(key))))
        .finish()
}

#[inline]
pub fn set_debug(set: &dyn Set, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(set.iter()).finish()
}

/// The `Type` of containers, with the shared class attached.
#[inline]
pub(super) fn container_type<T: Object + ?Sized>(kind: crate::object::TypeKind) -> Type {
    Type::new::<T>(kind).with_class(collection_class)
}
