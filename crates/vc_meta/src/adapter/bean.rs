use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::adapter::{ObjectAdapter, create_missing, indexed, not_borrowable};
use crate::object::ObjectRef;
use crate::path::Segment;
use crate::{MetaContext, MetaError, Object, Type, Value};

// -----------------------------------------------------------------------------
// BeanAdapter

/// Property access through the [`TypeDescriptor`](crate::reflector::TypeDescriptor)
/// of the object's type.
///
/// Also the fallback for lists and arrays: `[0]` indexes the object itself,
/// while named properties find nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeanAdapter;

impl BeanAdapter {
    /// The container an indexed segment addresses; an empty name is the
    /// object itself.
    fn container<'o>(
        object: &'o dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<Option<Value<'o>>, MetaError> {
        if segment.name().is_empty() {
            return Ok(Some(Value::Ref(object)));
        }
        let descriptor = ctx.reflector().for_object(object);
        descriptor.get_get_invoker(segment.name())?.get(object)
    }

    fn container_mut<'o>(
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<Option<&'o mut dyn Object>, MetaError> {
        if segment.name().is_empty() {
            return Ok(Some(object));
        }
        let descriptor = ctx.reflector().for_object(object);
        descriptor.get_get_invoker(segment.name())?.get_mut(object)
    }

    /// Like `container_mut`, but a `None` container is an error.
    fn existing_container<'o>(
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<&'o mut dyn Object, MetaError> {
        Self::container_mut(object, segment, ctx)?
            .ok_or_else(|| indexed::not_indexable(segment, indexed::NONE))
    }

    fn element_type(object: &dyn Object, segment: &Segment<'_>, ctx: &MetaContext) -> Option<Type> {
        let container = Self::container(object, segment, ctx).ok()??;
        indexed::element_type(&*container, segment).ok()
    }

    fn is_indexable(object: &dyn Object, segment: &Segment<'_>, ctx: &MetaContext) -> bool {
        if segment.name().is_empty() {
            return matches!(
                object.object_ref(),
                ObjectRef::Map(_) | ObjectRef::List(_) | ObjectRef::Array(_)
            );
        }
        ctx.reflector().for_object(object).has_getter(segment.name())
    }
}

impl ObjectAdapter for BeanAdapter {
    fn get<'o>(
        &self,
        object: &'o dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<Option<Value<'o>>, MetaError> {
        if segment.is_indexed() {
            return match Self::container(object, segment, ctx)? {
                Some(container) => indexed::get_value(container, segment),
                None => Ok(None),
            };
        }
        let descriptor = ctx.reflector().for_object(object);
        descriptor.get_get_invoker(segment.name())?.get(object)
    }

    fn get_mut<'o>(
        &self,
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<Option<&'o mut dyn Object>, MetaError> {
        if segment.is_indexed() {
            return match Self::container_mut(object, segment, ctx)? {
                Some(container) => indexed::get_mut(container, segment),
                None => Ok(None),
            };
        }
        let descriptor = ctx.reflector().for_object(object);
        descriptor.get_get_invoker(segment.name())?.get_mut(object)
    }

    fn set(
        &self,
        object: &mut dyn Object,
        segment: &Segment<'_>,
        value: Option<Box<dyn Object>>,
        ctx: &MetaContext,
    ) -> Result<(), MetaError> {
        if segment.is_indexed() {
            let container = Self::existing_container(object, segment, ctx)?;
            return indexed::set(container, segment, value);
        }
        let descriptor = ctx.reflector().for_object(object);
        descriptor.get_set_invoker(segment.name())?.set(object, value)
    }

    fn getter_names(&self, object: &dyn Object, ctx: &MetaContext) -> Vec<String> {
        ctx.reflector().for_object(object).getter_names()
    }

    fn setter_names(&self, object: &dyn Object, ctx: &MetaContext) -> Vec<String> {
        ctx.reflector().for_object(object).setter_names()
    }

    fn getter_type(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> Option<Type> {
        let segment = Segment::parse(name);
        if segment.has_next() {
            return None;
        }
        if segment.is_indexed() {
            return Self::element_type(object, &segment, ctx);
        }
        ctx.reflector().for_object(object).getter_type(name)
    }

    fn setter_type(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> Option<Type> {
        let segment = Segment::parse(name);
        if segment.has_next() {
            return None;
        }
        if segment.is_indexed() {
            return Self::element_type(object, &segment, ctx);
        }
        ctx.reflector().for_object(object).setter_type(name)
    }

    fn has_getter(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> bool {
        let segment = Segment::parse(name);
        if segment.has_next() {
            return false;
        }
        if segment.is_indexed() {
            return Self::is_indexable(object, &segment, ctx);
        }
        ctx.reflector().for_object(object).has_getter(name)
    }

    fn has_setter(&self, object: &dyn Object, name: &str, ctx: &MetaContext) -> bool {
        let segment = Segment::parse(name);
        if segment.has_next() {
            return false;
        }
        if segment.is_indexed() {
            return Self::is_indexable(object, &segment, ctx);
        }
        ctx.reflector().for_object(object).has_setter(name)
    }

    fn instantiate_missing_property<'o>(
        &self,
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<&'o mut dyn Object, MetaError> {
        if segment.is_indexed() {
            let container = Self::existing_container(object, segment, ctx)?;
            return indexed::instantiate(container, segment, ctx);
        }

        let ty = object.object_type();
        let descriptor = ctx.reflector().for_object(object);
        let setter = descriptor.get_set_invoker(segment.name())?;
        let getter = descriptor.get_get_invoker(segment.name())?;
        // Nothing is written unless the new value can be descended into.
        getter.ensure_borrowable(ty)?;

        let created = create_missing(object, segment, segment.name(), &setter.value_type(), ctx)?;
        setter.set(object, Some(created))?;
        getter
            .get_mut(object)?
            .ok_or_else(|| not_borrowable(segment, ty.name(), segment.name()))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::BeanAdapter;
    use crate::adapter::ObjectAdapter;
    use crate::path::Segment;
    use crate::{Bean, MetaContext, MetaError, Typed};

    #[derive(Bean, Clone, Default)]
    #[bean(default)]
    struct Inner {
        value: i32,
    }

    #[derive(Bean, Clone, Default)]
    #[bean(default)]
    struct Outer {
        inner: Option<Inner>,
        scores: Vec<i32>,
        #[bean(readonly)]
        id: u64,
    }

    fn seg(text: &str) -> Segment<'_> {
        Segment::parse(text)
    }

    #[test]
    fn reads_and_writes_fields() {
        let ctx = MetaContext::new();
        let mut outer = Outer::default();

        BeanAdapter
            .set(&mut outer, &seg("scores"), Some(Box::new(vec![1, 2])), &ctx)
            .unwrap();
        assert_eq!(outer.scores, [1, 2]);

        let value = BeanAdapter.get(&outer, &seg("scores[1]"), &ctx).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&2));

        BeanAdapter
            .set(&mut outer, &seg("scores[0]"), Some(Box::new(7_i32)), &ctx)
            .unwrap();
        assert_eq!(outer.scores, [7, 2]);

        assert!(BeanAdapter.get(&outer, &seg("inner"), &ctx).unwrap().is_none());
    }

    #[test]
    fn readonly_and_unknown() {
        let ctx = MetaContext::new();
        let mut outer = Outer::default();

        let err = BeanAdapter
            .set(&mut outer, &seg("id"), Some(Box::new(1_u64)), &ctx)
            .unwrap_err();
        assert!(matches!(err, MetaError::AccessorNotFound { role: "setter", .. }));

        let err = BeanAdapter.get(&outer, &seg("missing"), &ctx).unwrap_err();
        assert!(matches!(err, MetaError::AccessorNotFound { role: "getter", .. }));
    }

    #[test]
    fn introspection() {
        let ctx = MetaContext::new();
        let outer = Outer::default();

        assert_eq!(BeanAdapter.getter_names(&outer, &ctx), ["id", "inner", "scores"]);
        assert_eq!(BeanAdapter.setter_names(&outer, &ctx), ["inner", "scores"]);
        assert_eq!(BeanAdapter.getter_type(&outer, "inner", &ctx), Some(Inner::type_of()));
        assert_eq!(BeanAdapter.getter_type(&outer, "scores[0]", &ctx), Some(i32::type_of()));
        assert!(BeanAdapter.has_getter(&outer, "scores[3]", &ctx));
        assert!(!BeanAdapter.has_getter(&outer, "inner.value", &ctx));
        assert!(!BeanAdapter.has_setter(&outer, "id", &ctx));
    }

    #[test]
    fn instantiates_missing_property() {
        let ctx = MetaContext::new();
        let mut outer = Outer::default();

        let inner = BeanAdapter
            .instantiate_missing_property(&mut outer, &seg("inner"), &ctx)
            .unwrap();
        assert!(inner.is::<Inner>());
        assert_eq!(outer.inner.map(|inner| inner.value), Some(0));
    }

    #[test]
    fn lists_index_themselves() {
        let ctx = MetaContext::new();
        let mut list: Vec<String> = vec![String::from("a")];

        BeanAdapter
            .set(&mut list, &seg("[0]"), Some(Box::new(String::from("b"))), &ctx)
            .unwrap();
        assert_eq!(list, ["b"]);
        assert!(BeanAdapter.has_getter(&list, "[0]", &ctx));

        let err = BeanAdapter.add(&mut list, Box::new(String::new()), &ctx).unwrap_err();
        assert!(matches!(err, MetaError::UnsupportedOperation { operation: "add", .. }));
    }
}
