//! Bracket access shared by the bean and map adapters.
//!
//! - maps: the bracket content is the key; writes upsert, `None` removes;
//! - lists and arrays: the bracket content is a decimal index; writes need
//!   an existing position;
//! - anything else cannot be indexed.

use alloc::boxed::Box;

use crate::adapter::create_missing;
use crate::object::{ObjectMut, ObjectRef};
use crate::ops::ElementError;
use crate::path::Segment;
use crate::{MetaContext, MetaError, Object, Type, Value};

/// The type name reported when the indexed container is `None`.
pub(crate) const NONE: &str = "none";

#[inline]
fn key<'p>(segment: &Segment<'p>) -> &'p str {
    segment.index().unwrap_or_default()
}

fn parse_index(segment: &Segment<'_>, type_name: &'static str) -> Result<usize, MetaError> {
    let index = key(segment);
    index.parse().map_err(|_| MetaError::InvalidIndex {
        segment: segment.indexed_name().into(),
        type_name,
        index: index.into(),
    })
}

#[cold]
fn out_of_range(
    segment: &Segment<'_>,
    type_name: &'static str,
    index: usize,
    len: usize,
) -> MetaError {
    MetaError::IndexOutOfRange {
        segment: segment.indexed_name().into(),
        type_name,
        index,
        len,
    }
}

#[cold]
pub(crate) fn not_indexable(segment: &Segment<'_>, type_name: &'static str) -> MetaError {
    MetaError::NotIndexable {
        segment: segment.indexed_name().into(),
        type_name,
    }
}

fn rejected(segment: &Segment<'_>, type_name: &'static str, error: ElementError) -> MetaError {
    match error {
        ElementError::OutOfRange { index, len } => out_of_range(segment, type_name, index, len),
        source => MetaError::IncompatibleValue {
            segment: segment.indexed_name().into(),
            type_name,
            source,
        },
    }
}

// -----------------------------------------------------------------------------
// Reads

/// Reads `container[key]`.
pub(crate) fn get<'o>(
    container: &'o dyn Object,
    segment: &Segment<'_>,
) -> Result<Option<&'o dyn Object>, MetaError> {
    let type_name = container.object_type().name();
    match container.object_ref() {
        ObjectRef::Map(map) => Ok(map.get(key(segment))),
        ObjectRef::List(list) => {
            let index = parse_index(segment, type_name)?;
            match list.get(index) {
                Some(item) => Ok(Some(item)),
                None => Err(out_of_range(segment, type_name, index, list.len())),
            }
        }
        ObjectRef::Array(array) => {
            let index = parse_index(segment, type_name)?;
            match array.get(index) {
                Some(item) => Ok(Some(item)),
                None => Err(out_of_range(segment, type_name, index, array.len())),
            }
        }
        ObjectRef::Set(_) | ObjectRef::Bean(_) | ObjectRef::Value(_) => {
            Err(not_indexable(segment, type_name))
        }
    }
}

/// Reads `container[key]` from a property read.
///
/// Elements of owned containers are cloned out of them.
pub(crate) fn get_value<'o>(
    container: Value<'o>,
    segment: &Segment<'_>,
) -> Result<Option<Value<'o>>, MetaError> {
    match container {
        Value::Ref(container) => Ok(get(container, segment)?.map(Value::Ref)),
        Value::Owned(container) => {
            Ok(get(&*container, segment)?.map(|item| Value::Owned(item.clone_object())))
        }
    }
}

/// Borrows `container[key]` mutably.
pub(crate) fn get_mut<'o>(
    container: &'o mut dyn Object,
    segment: &Segment<'_>,
) -> Result<Option<&'o mut dyn Object>, MetaError> {
    let type_name = container.object_type().name();
    match container.object_mut() {
        ObjectMut::Map(map) => Ok(map.get_mut(key(segment))),
        ObjectMut::List(list) => {
            let index = parse_index(segment, type_name)?;
            let len = list.len();
            match list.get_mut(index) {
                Some(item) => Ok(Some(item)),
                None => Err(out_of_range(segment, type_name, index, len)),
            }
        }
        ObjectMut::Array(array) => {
            let index = parse_index(segment, type_name)?;
            let len = array.len();
            match array.get_mut(index) {
                Some(item) => Ok(Some(item)),
                None => Err(out_of_range(segment, type_name, index, len)),
            }
        }
        ObjectMut::Set(_) | ObjectMut::Bean(_) | ObjectMut::Value(_) => {
            Err(not_indexable(segment, type_name))
        }
    }
}

// -----------------------------------------------------------------------------
// Writes

/// Writes `container[key]`.
pub(crate) fn set(
    container: &mut dyn Object,
    segment: &Segment<'_>,
    value: Option<Box<dyn Object>>,
) -> Result<(), MetaError> {
    let type_name = container.object_type().name();
    match container.object_mut() {
        ObjectMut::Map(map) => match value {
            Some(value) => match map.insert(key(segment), value) {
                Ok(_) => Ok(()),
                Err(error) => Err(rejected(segment, type_name, error)),
            },
            None => {
                map.remove(key(segment));
                Ok(())
            }
        },
        ObjectMut::List(list) => {
            let index = parse_index(segment, type_name)?;
            let value = value.ok_or_else(|| null_element(type_name))?;
            list.set(index, value)
                .map_err(|error| rejected(segment, type_name, error))
        }
        ObjectMut::Array(array) => {
            let index = parse_index(segment, type_name)?;
            let value = value.ok_or_else(|| null_element(type_name))?;
            array
                .set(index, value)
                .map_err(|error| rejected(segment, type_name, error))
        }
        ObjectMut::Set(_) | ObjectMut::Bean(_) | ObjectMut::Value(_) => {
            Err(not_indexable(segment, type_name))
        }
    }
}

#[cold]
fn null_element(type_name: &'static str) -> MetaError {
    MetaError::UnsupportedOperation {
        type_name,
        operation: "null elements",
    }
}

/// The element type of an indexable container.
pub(crate) fn element_type(
    container: &dyn Object,
    segment: &Segment<'_>,
) -> Result<Type, MetaError> {
    match container.object_ref() {
        ObjectRef::Map(map) => Ok(map.value_type()),
        ObjectRef::List(list) => Ok(list.item_type()),
        ObjectRef::Array(array) => Ok(array.item_type()),
        ObjectRef::Set(_) | ObjectRef::Bean(_) | ObjectRef::Value(_) => {
            Err(not_indexable(segment, container.object_type().name()))
        }
    }
}

/// Creates the missing element `container[key]` and returns it.
pub(crate) fn instantiate<'o>(
    container: &'o mut dyn Object,
    segment: &Segment<'_>,
    ctx: &MetaContext,
) -> Result<&'o mut dyn Object, MetaError> {
    let ty = element_type(container, segment)?;
    let created = create_missing(container, segment, key(segment), &ty, ctx)?;
    set(container, segment, Some(created))?;

    let type_name = container.object_type().name();
    get_mut(container, segment)?.ok_or_else(|| not_indexable(segment, type_name))
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use super::{get, get_mut, set};
    use crate::path::Segment;
    use crate::MetaError;

    fn seg(path: &str) -> Segment<'_> {
        Segment::parse(path)
    }

    #[test]
    fn list_reads_and_writes() {
        let mut list = vec![1_i32, 2, 3];

        let item = get(&list, &seg("[1]")).unwrap().unwrap();
        assert_eq!(item.downcast_ref::<i32>(), Some(&2));

        set(&mut list, &seg("[2]"), Some(Box::new(9_i32))).unwrap();
        assert_eq!(list, [1, 2, 9]);

        let err = set(&mut list, &seg("[3]"), Some(Box::new(0_i32))).unwrap_err();
        assert!(matches!(err, MetaError::IndexOutOfRange { index: 3, len: 3, .. }));

        let err = get(&list, &seg("[x]")).unwrap_err();
        assert!(matches!(err, MetaError::InvalidIndex { ref index, .. } if index == "x"));
    }

    #[test]
    fn map_upserts_and_removes() {
        let mut map: HashMap<String, i32> = HashMap::new();
        set(&mut map, &seg("[a]"), Some(Box::new(1_i32))).unwrap();
        set(&mut map, &seg("[a]"), Some(Box::new(2_i32))).unwrap();
        assert_eq!(map.get("a"), Some(&2));

        assert!(get(&map, &seg("[missing]")).unwrap().is_none());

        set(&mut map, &seg("[a]"), None).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn rejected_values() {
        let mut list: Vec<i32> = vec![0];
        let err = set(&mut list, &seg("[0]"), Some(Box::new(1_u8))).unwrap_err();
        assert!(matches!(err, MetaError::IncompatibleValue { .. }));

        let err = set(&mut list, &seg("[0]"), None).unwrap_err();
        assert!(matches!(err, MetaError::UnsupportedOperation { .. }));
    }

    #[test]
    fn values_are_not_indexable() {
        let mut text = String::from("abc");
        assert!(matches!(
            get(&text, &seg("[0]")),
            Err(MetaError::NotIndexable { .. })
        ));
        assert!(matches!(
            get_mut(&mut text, &seg("[0]")),
            Err(MetaError::NotIndexable { .. })
        ));
    }
}
