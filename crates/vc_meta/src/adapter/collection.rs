use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::adapter::{BeanAdapter, ObjectAdapter};
use crate::object::ObjectMut;
use crate::path::Segment;
use crate::{MetaContext, MetaError, Object, Type, Value};

/// A [`BeanAdapter`] that also supports [`add`](ObjectAdapter::add) on
/// lists and sets.
///
/// Not selected automatically; register it with an
/// [`AdapterRegistry`](crate::adapter::AdapterRegistry).
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionAdapter;

impl ObjectAdapter for CollectionAdapter {
    #[inline]
    fn get<'o>(
        &self,
        object: &'o dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<Option<Value<'o>>, MetaError> {
        BeanAdapter.get(object, segment, ctx)
    }

    #[inline]
    fn get_mut<'o>(
        &self,
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<Option<&'o mut dyn Object>, MetaError> {
        BeanAdapter.get_mut(object, segment, ctx)
    }

    #[inline]
    fn set(
        &self,
        object: &mut dyn Object,
        segment: &Segment<'_>,
        value: Option<Box<dyn Object>>,
        ctx: &MetaContext,
    ) -> Result<(), MetaError> {
        BeanAdapter.set(object, segment, value, ctx)
    }

    #[inline]
    fn getter_names(&self, object: &dyn Object, ctx: &MetaContext) -> Vec<String> {
        BeanAdapter.getter_names(object, ctx)
    }

    #[inline]
    fn setter_names(&self, object: &dyn Object, ctx: &MetaContext) -> Vec<String> {
        BeanAdapter.setter_names(object, ctx)
    }

    #[inline]
    fn getter_type(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> Option<Type> {
        BeanAdapter.getter_type(object, name, ctx)
    }

    #[inline]
    fn setter_type(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> Option<Type> {
        BeanAdapter.setter_type(object, name, ctx)
    }

    #[inline]
    fn has_getter(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> bool {
        BeanAdapter.has_getter(object, name, ctx)
    }

    #[inline]
    fn has_setter(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> bool {
        BeanAdapter.has_setter(object, name, ctx)
    }

    fn add(
        &self,
        object: &mut dyn Object,
        element: Box<dyn Object>,
        _ctx: &MetaContext,
    ) -> Result<(), MetaError> {
        let type_name = object.object_type().name();
        let result = match object.object_mut() {
            ObjectMut::List(list) => list.push(element),
            ObjectMut::Set(set) => set.insert(element).map(drop),
            _ => {
                return Err(MetaError::UnsupportedOperation {
                    type_name,
                    operation: "add",
                });
            }
        };
        result.map_err(|source| MetaError::IncompatibleValue {
            segment: String::from("add"),
            type_name,
            source,
        })
    }

    fn add_all(
        &self,
        object: &mut dyn Object,
        elements: Vec<Box<dyn Object>>,
        ctx: &MetaContext,
    ) -> Result<(), MetaError> {
        elements
            .into_iter()
            .try_for_each(|element| self.add(object, element, ctx))
    }

    #[inline]
    fn instantiate_missing_property<'o>(
        &self,
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<&'o mut dyn Object, MetaError> {
        BeanAdapter.instantiate_missing_property(object, segment, ctx)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeSet;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::CollectionAdapter;
    use crate::adapter::ObjectAdapter;
    use crate::{MetaContext, MetaError, Object};

    #[test]
    fn adds_to_lists_and_sets() {
        let ctx = MetaContext::new();

        let mut list: Vec<i32> = vec![1];
        CollectionAdapter.add(&mut list, Box::new(2_i32), &ctx).unwrap();
        let more = vec![Box::new(3_i32) as Box<dyn Object>, Box::new(4_i32)];
        CollectionAdapter.add_all(&mut list, more, &ctx).unwrap();
        assert_eq!(list, [1, 2, 3, 4]);

        let mut set: BTreeSet<String> = BTreeSet::new();
        CollectionAdapter.add(&mut set, Box::new(String::from("b")), &ctx).unwrap();
        CollectionAdapter.add(&mut set, Box::new(String::from("b")), &ctx).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rejects_wrong_elements() {
        let ctx = MetaContext::new();

        let mut list: Vec<i32> = Vec::new();
        let err = CollectionAdapter.add(&mut list, Box::new(1_u8), &ctx).unwrap_err();
        assert!(matches!(err, MetaError::IncompatibleValue { .. }));

        let mut text = String::new();
        let err = CollectionAdapter.add(&mut text, Box::new(1_u8), &ctx).unwrap_err();
        assert!(matches!(err, MetaError::UnsupportedOperation { operation: "add", .. }));
    }
}
